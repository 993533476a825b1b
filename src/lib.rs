pub mod aggregate;
pub mod cancel;
pub mod checker;
pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;

pub use cancel::CancelFlag;
pub use error::{LintSweepError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ISSUES_FOUND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;
pub const EXIT_INTERRUPTED: i32 = 130;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
