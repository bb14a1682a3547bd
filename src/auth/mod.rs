//! Authorization system
//!
//! This module hosts the role-based access control engine consulted by every
//! page and mutation of the CRM.

pub mod rbac;

pub use rbac::{
    AsRole, DashboardRoute, Module, Permission, PermissionDomain, PermissionSet, RbacSystem, Role,
    RoleAssignmentCheck, RoleDefinition, RoleInfo,
};
