//! Role-Based Access Control (RBAC) system
//!
//! A pure, synchronous engine over a static role table. It answers permission
//! queries, level comparisons and role assignment questions. Every query is
//! total: unknown roles and permission keys resolve to the least privileged
//! answer instead of an error.

mod permissions;
mod roles;
mod routes;
mod system;
mod types;

// Re-export public types and structs
pub use routes::DashboardRoute;
pub use system::{RbacSystem, default_roles};
pub use types::{
    AsRole, Module, Permission, PermissionDomain, PermissionSet, Role, RoleAssignmentCheck,
    RoleDefinition, RoleInfo,
};
