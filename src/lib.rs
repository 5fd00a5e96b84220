//! side-diff library
//!
//! Token-level, side-by-side text comparison. The `compare` module holds the
//! diff pipeline; `config` and `report` are the pieces the command-line
//! front end builds on.

pub mod compare;
pub mod config;
pub mod constant;
pub mod report;
