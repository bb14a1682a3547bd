//! Validation trait definition

/// Validation trait for configuration structures.
///
/// Errors are human-readable messages; callers wrap them into
/// `GuardError::Config` with a section prefix.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
