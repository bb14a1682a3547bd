//! Configuration data models

pub mod guard;
pub mod logging;
pub mod rbac;

pub use guard::*;
pub use logging::*;
pub use rbac::*;
