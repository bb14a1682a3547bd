//! Configuration validation
//!
//! - `trait_def`: core Validate trait definition
//! - `rbac_validators`: role table validation
//! - `logging_validators`: logging section validation

mod logging_validators;
mod rbac_validators;
mod trait_def;

pub use trait_def::Validate;
