//! Error handling for roster-guard
//!
//! This module defines the error type shared by configuration loading and the
//! profile workflow.

mod helpers;
mod types;

pub use types::{GuardError, Result};
