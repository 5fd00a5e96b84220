/// Application name and metadata constants
pub const APP_QUALIFIER: &str = "com";
pub const APP_ORGANIZATION: &str = "side-diff";
pub const APP_NAME: &str = "side-diff";

/// Per-side input ceiling, in characters, applied before a comparison runs
pub const MAX_INPUT_CHARS: usize = 100 * 1024;

/// Time Myers may spend refining the edit script before settling (0 = no limit)
pub const DIFF_TIMEOUT_MS: u64 = 2000;

// Highlight markers wrapped around changed token ranges
pub const MARK_OPEN: &str = "<em>";
pub const MARK_CLOSE: &str = "</em>";

/// Replacement for whitespace sitting right before a closing marker
pub const VISIBLE_SPACE: &str = "&nbsp;";
