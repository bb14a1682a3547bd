//! # roster-guard
//!
//! Role-based access control for an esports team-management CRM.
//!
//! ## Features
//!
//! - **Static role table**: six roles with seniority levels and a closed set
//!   of permission keys, built once and shared read-only
//! - **Fail-closed queries**: unknown roles, permission keys and routes
//!   always resolve to the least privileged answer
//! - **Role assignment rules**: who may assign which role, and to whom
//! - **Route gating**: dashboard paths mapped to access predicates
//! - **Profile workflow**: default-role profile creation and checked role
//!   changes against a pluggable store
//!
//! ## Quick Start
//!
//! ```rust
//! use roster_guard::{Module, Permission, RbacSystem, Role};
//!
//! let rbac = RbacSystem::new();
//!
//! assert!(rbac.has_permission(Role::Manager, Permission::CreateTeams));
//! assert!(!rbac.has_permission("intern", Permission::CreateTeams));
//! assert!(!rbac.can_update_user_role(Role::Manager, Role::Coach, Role::Admin));
//! assert_eq!(
//!     rbac.available_modules(Role::Pending),
//!     vec![Module::Dashboard, Module::Profile]
//! );
//! ```
//!
//! ## Shared table
//!
//! ```rust,no_run
//! use roster_guard::{Config, InMemoryProfileStore, ProfileService};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> roster_guard::Result<()> {
//!     let config = Config::from_file("config/roster-guard.yaml").await?;
//!     let rbac = Arc::new(config.build_rbac()?);
//!     let profiles = ProfileService::new(rbac.clone(), Arc::new(InMemoryProfileStore::new()));
//!     let _ = profiles;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use auth::rbac::{
    AsRole, DashboardRoute, Module, Permission, PermissionDomain, PermissionSet, RbacSystem, Role,
    RoleAssignmentCheck, RoleDefinition, RoleInfo,
};
pub use config::Config;
pub use core::profile::{InMemoryProfileStore, ProfileService, ProfileStore, UserProfile};
pub use utils::error::{GuardError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
