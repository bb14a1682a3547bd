//! RBAC type definitions

use crate::utils::error::GuardError;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// User role
///
/// Variants are declared from most to least privileged; that order is the
/// canonical listing order used by `all_roles` and `assignable_roles`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Coach,
    Analyst,
    Player,
    /// Safe minimum for newly created profiles
    #[default]
    Pending,
}

impl Role {
    /// Every role, in canonical order
    pub const ALL: [Role; 6] = [
        Role::Admin,
        Role::Manager,
        Role::Coach,
        Role::Analyst,
        Role::Player,
        Role::Pending,
    ];

    /// Stored/wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Coach => "coach",
            Role::Analyst => "analyst",
            Role::Player => "player",
            Role::Pending => "pending",
        }
    }

    /// Parse a stored role name. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.as_str() == name)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = GuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s).ok_or_else(|| GuardError::validation(format!("Unknown role: {}", s)))
    }
}

/// Anything that may name a role.
///
/// Engine queries accept `impl AsRole` so that typed roles and raw strings
/// coming from profiles, config or the CLI go through the same code path.
/// A value that names no role resolves to `None` and every query treats it
/// as the least privileged outcome.
pub trait AsRole {
    fn as_role(&self) -> Option<Role>;
}

impl AsRole for Role {
    fn as_role(&self) -> Option<Role> {
        Some(*self)
    }
}

impl AsRole for Option<Role> {
    fn as_role(&self) -> Option<Role> {
        *self
    }
}

impl AsRole for str {
    fn as_role(&self) -> Option<Role> {
        Role::parse(self)
    }
}

impl AsRole for String {
    fn as_role(&self) -> Option<Role> {
        Role::parse(self)
    }
}

impl<T: AsRole + ?Sized> AsRole for &T {
    fn as_role(&self) -> Option<Role> {
        (**self).as_role()
    }
}

/// Permission domain, used for grouping in listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionDomain {
    UserManagement,
    TeamManagement,
    Performance,
    Scrims,
    Finances,
    System,
}

/// Permission key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Permission {
    // User management
    ViewAllUsers,
    UpdateUserRoles,
    DeleteUsers,
    CreateUsers,

    // Team management
    ViewAllTeams,
    CreateTeams,
    UpdateTeams,
    DeleteTeams,
    AssignCoaches,

    // Performance and analytics
    ViewAllPerformance,
    CreatePerformance,
    UpdatePerformance,
    DeletePerformance,

    // Scrims and matches
    ViewAllScrims,
    CreateScrims,
    UpdateScrims,
    DeleteScrims,

    // Finances
    ViewAllFinances,
    CreateFinances,
    UpdateFinances,
    DeleteFinances,

    // System
    ViewAdminPanel,
    ViewReports,
    ViewAnalytics,
    SystemConfiguration,
}

impl Permission {
    /// Every permission key, grouped by domain
    pub const ALL: [Permission; 25] = [
        Permission::ViewAllUsers,
        Permission::UpdateUserRoles,
        Permission::DeleteUsers,
        Permission::CreateUsers,
        Permission::ViewAllTeams,
        Permission::CreateTeams,
        Permission::UpdateTeams,
        Permission::DeleteTeams,
        Permission::AssignCoaches,
        Permission::ViewAllPerformance,
        Permission::CreatePerformance,
        Permission::UpdatePerformance,
        Permission::DeletePerformance,
        Permission::ViewAllScrims,
        Permission::CreateScrims,
        Permission::UpdateScrims,
        Permission::DeleteScrims,
        Permission::ViewAllFinances,
        Permission::CreateFinances,
        Permission::UpdateFinances,
        Permission::DeleteFinances,
        Permission::ViewAdminPanel,
        Permission::ViewReports,
        Permission::ViewAnalytics,
        Permission::SystemConfiguration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewAllUsers => "viewAllUsers",
            Permission::UpdateUserRoles => "updateUserRoles",
            Permission::DeleteUsers => "deleteUsers",
            Permission::CreateUsers => "createUsers",
            Permission::ViewAllTeams => "viewAllTeams",
            Permission::CreateTeams => "createTeams",
            Permission::UpdateTeams => "updateTeams",
            Permission::DeleteTeams => "deleteTeams",
            Permission::AssignCoaches => "assignCoaches",
            Permission::ViewAllPerformance => "viewAllPerformance",
            Permission::CreatePerformance => "createPerformance",
            Permission::UpdatePerformance => "updatePerformance",
            Permission::DeletePerformance => "deletePerformance",
            Permission::ViewAllScrims => "viewAllScrims",
            Permission::CreateScrims => "createScrims",
            Permission::UpdateScrims => "updateScrims",
            Permission::DeleteScrims => "deleteScrims",
            Permission::ViewAllFinances => "viewAllFinances",
            Permission::CreateFinances => "createFinances",
            Permission::UpdateFinances => "updateFinances",
            Permission::DeleteFinances => "deleteFinances",
            Permission::ViewAdminPanel => "viewAdminPanel",
            Permission::ViewReports => "viewReports",
            Permission::ViewAnalytics => "viewAnalytics",
            Permission::SystemConfiguration => "systemConfiguration",
        }
    }

    /// Parse a permission key. Unknown keys yield `None`.
    pub fn parse(key: &str) -> Option<Permission> {
        Permission::ALL.into_iter().find(|p| p.as_str() == key)
    }

    pub fn domain(&self) -> PermissionDomain {
        use Permission::*;
        match self {
            ViewAllUsers | UpdateUserRoles | DeleteUsers | CreateUsers => {
                PermissionDomain::UserManagement
            }
            ViewAllTeams | CreateTeams | UpdateTeams | DeleteTeams | AssignCoaches => {
                PermissionDomain::TeamManagement
            }
            ViewAllPerformance | CreatePerformance | UpdatePerformance | DeletePerformance => {
                PermissionDomain::Performance
            }
            ViewAllScrims | CreateScrims | UpdateScrims | DeleteScrims => PermissionDomain::Scrims,
            ViewAllFinances | CreateFinances | UpdateFinances | DeleteFinances => {
                PermissionDomain::Finances
            }
            ViewAdminPanel | ViewReports | ViewAnalytics | SystemConfiguration => {
                PermissionDomain::System
            }
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = GuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::parse(s)
            .ok_or_else(|| GuardError::validation(format!("Unknown permission: {}", s)))
    }
}

/// Set of granted permissions.
///
/// Only grants are stored, so any key not granted reads as `false`.
/// Serialized as a full `key -> bool` map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet {
    granted: HashSet<Permission>,
}

impl PermissionSet {
    /// Grants nothing
    pub fn none() -> Self {
        Self::default()
    }

    /// Grants every key
    pub fn all() -> Self {
        Self::from_grants(Permission::ALL)
    }

    pub fn from_grants<I: IntoIterator<Item = Permission>>(grants: I) -> Self {
        Self {
            granted: grants.into_iter().collect(),
        }
    }

    pub fn allows(&self, permission: Permission) -> bool {
        self.granted.contains(&permission)
    }

    pub fn grant(&mut self, permission: Permission) {
        self.granted.insert(permission);
    }

    /// True if any of `permissions` is granted
    pub fn allows_any(&self, permissions: &[Permission]) -> bool {
        permissions.iter().any(|p| self.allows(*p))
    }

    /// Granted keys in declaration order
    pub fn granted(&self) -> Vec<Permission> {
        Permission::ALL
            .into_iter()
            .filter(|p| self.granted.contains(p))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.granted.is_empty()
    }
}

impl Serialize for PermissionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(Permission::ALL.iter().map(|p| (p.as_str(), self.allows(*p))))
    }
}

impl<'de> Deserialize<'de> for PermissionSet {
    /// Unknown keys are dropped with a warning rather than rejected.
    /// They can never grant anything.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = HashMap::<String, bool>::deserialize(deserializer)?;
        let mut set = PermissionSet::none();
        for (key, granted) in raw {
            match Permission::parse(&key) {
                Some(permission) if granted => set.grant(permission),
                Some(_) => {}
                None => warn!("Ignoring unknown permission key: {}", key),
            }
        }
        Ok(set)
    }
}

/// Role definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDefinition {
    /// Seniority level; higher is more senior
    pub level: u32,
    /// Display label
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub permissions: PermissionSet,
}

/// Display information for a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleInfo {
    pub name: String,
    pub level: u32,
    pub description: String,
}

impl RoleInfo {
    pub(super) fn unknown() -> Self {
        Self {
            name: "Unknown".to_string(),
            level: 0,
            description: "No description".to_string(),
        }
    }
}

/// Navigation module of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Module {
    Dashboard,
    UserManagement,
    TeamManagement,
    Performance,
    Reports,
    Profile,
}

impl Module {
    pub fn as_str(&self) -> &'static str {
        match self {
            Module::Dashboard => "dashboard",
            Module::UserManagement => "user-management",
            Module::TeamManagement => "team-management",
            Module::Performance => "performance",
            Module::Reports => "reports",
            Module::Profile => "profile",
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a role assignment validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleAssignmentCheck {
    pub valid: bool,
    /// Reason for denial (if not valid)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RoleAssignmentCheck {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn denied<S: Into<String>>(reason: S) -> Self {
        Self {
            valid: false,
            error: Some(reason.into()),
        }
    }
}
