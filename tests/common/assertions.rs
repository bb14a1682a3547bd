//! Custom test assertions
//!
//! Provides domain-specific assertions for testing roster-guard components.

use roster_guard::{GuardError, RoleAssignmentCheck};

/// Assert that a result is a privilege denial carrying `reason`
pub fn assert_denied<T: std::fmt::Debug>(result: roster_guard::Result<T>, reason: &str) {
    match result {
        Err(GuardError::Authorization(msg)) => assert_eq!(msg, reason),
        other => panic!("Expected denial '{}', got {:?}", reason, other),
    }
}

/// Assertions for role assignment checks
pub trait AssignmentAssertions {
    fn assert_valid(&self);
    fn assert_rejected_with(&self, fragment: &str);
}

impl AssignmentAssertions for RoleAssignmentCheck {
    fn assert_valid(&self) {
        assert!(self.valid, "Expected valid assignment, got {:?}", self.error);
        assert!(self.error.is_none());
    }

    fn assert_rejected_with(&self, fragment: &str) {
        assert!(!self.valid, "Expected rejected assignment");
        let reason = self.error.as_deref().unwrap_or_default();
        assert!(
            reason.contains(fragment),
            "Expected reason containing '{}', got '{}'",
            fragment,
            reason
        );
    }
}
