//! Common test utilities for roster-guard
//!
//! - Profile fixtures and an in-memory workspace
//! - Custom assertions for denials and assignment checks

#![allow(dead_code)]

pub mod assertions;

pub use assertions::{AssignmentAssertions, assert_denied};
pub use fixtures::{ProfileFactory, TestWorkspace};
