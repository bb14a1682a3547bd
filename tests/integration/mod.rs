//! Integration tests for roster-guard
//!
//! These tests exercise the public API only.

pub mod config_loading_tests;
pub mod profile_workflow_tests;
pub mod rbac_property_tests;
