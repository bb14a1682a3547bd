//! RBAC system core functionality

use crate::config::RbacConfig;
use crate::config::Validate;
use crate::utils::error::{GuardError, Result};
use std::collections::HashMap;
use tracing::{debug, info};

use super::types::{AsRole, Permission, PermissionSet, Role, RoleDefinition};

/// RBAC system holding the role table.
///
/// Built once at startup and shared read-only, typically behind an `Arc`.
/// Every query is a pure function of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RbacSystem {
    /// Role definitions
    pub(super) roles: HashMap<Role, RoleDefinition>,
}

impl RbacSystem {
    /// Create an RBAC system with the built-in role table
    pub fn new() -> Self {
        info!("Initializing RBAC system with built-in role table");
        let rbac = Self::with_roles(default_roles());
        debug!("Initialized {} default roles", rbac.roles.len());
        rbac
    }

    /// Create an RBAC system over an arbitrary role table.
    ///
    /// Roles missing from `roles` behave as unknown roles.
    pub fn with_roles(roles: HashMap<Role, RoleDefinition>) -> Self {
        Self { roles }
    }

    /// Create an RBAC system from configuration.
    ///
    /// An empty `roles` section selects the built-in table; otherwise the
    /// configured table replaces it entirely.
    pub fn from_config(config: &RbacConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| GuardError::config(format!("RBAC config error: {}", e)))?;

        if config.roles.is_empty() {
            return Ok(Self::new());
        }

        info!("Initializing RBAC system with {} configured roles", config.roles.len());
        Ok(Self::with_roles(config.roles.clone()))
    }

    /// Get the definition of a role, if the table has one
    pub fn definition(&self, role: impl AsRole) -> Option<&RoleDefinition> {
        role.as_role().and_then(|role| self.roles.get(&role))
    }

    /// Level of a role; unknown roles sit at level 0
    pub fn level(&self, role: impl AsRole) -> u32 {
        self.definition(role).map_or(0, |def| def.level)
    }

    pub(super) fn permissions_of(&self, role: impl AsRole) -> Option<&PermissionSet> {
        self.definition(role).map(|def| &def.permissions)
    }
}

impl Default for RbacSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// The built-in role table
pub fn default_roles() -> HashMap<Role, RoleDefinition> {
    use Permission::*;

    let mut roles = HashMap::new();

    roles.insert(
        Role::Admin,
        RoleDefinition {
            level: 100,
            name: "Admin".to_string(),
            description: "Full access to all modules".to_string(),
            permissions: PermissionSet::all(),
        },
    );

    roles.insert(
        Role::Manager,
        RoleDefinition {
            level: 80,
            name: "Manager".to_string(),
            description: "Team operations, scrim entries, attendance oversight".to_string(),
            permissions: PermissionSet::from_grants([
                UpdateUserRoles,
                ViewAllTeams,
                CreateTeams,
                UpdateTeams,
                AssignCoaches,
                ViewAllPerformance,
                CreatePerformance,
                UpdatePerformance,
                ViewAllScrims,
                CreateScrims,
                UpdateScrims,
                ViewAllFinances,
                CreateFinances,
                UpdateFinances,
                ViewReports,
                ViewAnalytics,
            ]),
        },
    );

    // Coach and analyst visibility is scoped to assigned teams outside the engine
    roles.insert(
        Role::Coach,
        RoleDefinition {
            level: 70,
            name: "Coach".to_string(),
            description: "Team and player stats, attendance reports, performance tracking"
                .to_string(),
            permissions: PermissionSet::from_grants([
                CreatePerformance,
                UpdatePerformance,
                ViewReports,
                ViewAnalytics,
            ]),
        },
    );

    roles.insert(
        Role::Analyst,
        RoleDefinition {
            level: 60,
            name: "Analyst".to_string(),
            description: "Read-only access to scrim results, performance data, reports"
                .to_string(),
            permissions: PermissionSet::from_grants([ViewReports, ViewAnalytics]),
        },
    );

    roles.insert(
        Role::Player,
        RoleDefinition {
            level: 50,
            name: "Player".to_string(),
            description: "Limited access, view only their own data".to_string(),
            permissions: PermissionSet::none(),
        },
    );

    roles.insert(
        Role::Pending,
        RoleDefinition {
            level: 10,
            name: "Pending Approval".to_string(),
            description: "Temporary role, minimal access for onboarding and evaluation"
                .to_string(),
            permissions: PermissionSet::none(),
        },
    );

    roles
}
