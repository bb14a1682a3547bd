//! User profile workflow
//!
//! Creates profiles at the safe default role and routes every role change
//! through the RBAC engine before it reaches the store.

mod service;
mod store;
mod types;

pub use service::ProfileService;
pub use store::{InMemoryProfileStore, ProfileStore};
pub use types::UserProfile;
