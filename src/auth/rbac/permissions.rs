//! Permission checking methods

use super::system::RbacSystem;
use super::types::{AsRole, Module, Permission};

impl RbacSystem {
    /// Check if a role has a specific permission.
    ///
    /// Unknown roles have no permissions.
    pub fn has_permission(&self, role: impl AsRole, permission: Permission) -> bool {
        self.permissions_of(role)
            .is_some_and(|permissions| permissions.allows(permission))
    }

    /// Check a permission given by its string key.
    ///
    /// Unknown keys are never granted.
    pub fn has_permission_key(&self, role: impl AsRole, key: &str) -> bool {
        Permission::parse(key).is_some_and(|permission| self.has_permission(role, permission))
    }

    /// Check if a role has any of the given permissions
    pub fn has_any_permission(&self, role: impl AsRole, permissions: &[Permission]) -> bool {
        self.permissions_of(role)
            .is_some_and(|set| set.allows_any(permissions))
    }

    /// Check if a role's level is at least `minimum_level`
    pub fn has_minimum_level(&self, role: impl AsRole, minimum_level: u32) -> bool {
        self.level(role) >= minimum_level
    }

    /// Check if `role_a` is strictly more senior than `role_b`
    pub fn has_higher_level(&self, role_a: impl AsRole, role_b: impl AsRole) -> bool {
        self.level(role_a) > self.level(role_b)
    }

    /// Modules shown to a role, in navigation order.
    ///
    /// Dashboard and profile bracket the list for every known role. A role
    /// missing from the table gets nothing.
    pub fn available_modules(&self, role: impl AsRole) -> Vec<Module> {
        let Some(permissions) = self.permissions_of(role) else {
            return Vec::new();
        };

        let mut modules = vec![Module::Dashboard];
        let gated = [
            (
                Module::UserManagement,
                [Permission::ViewAllUsers, Permission::UpdateUserRoles],
            ),
            (
                Module::TeamManagement,
                [Permission::ViewAllTeams, Permission::CreateTeams],
            ),
            (
                Module::Performance,
                [Permission::ViewAllPerformance, Permission::CreatePerformance],
            ),
            (
                Module::Reports,
                [Permission::ViewReports, Permission::ViewAnalytics],
            ),
        ];
        modules.extend(
            gated
                .into_iter()
                .filter(|(_, any_of)| permissions.allows_any(any_of))
                .map(|(module, _)| module),
        );

        modules.push(Module::Profile);
        modules
    }

    /// Every permission granted to a role, in declaration order
    pub fn granted_permissions(&self, role: impl AsRole) -> Vec<Permission> {
        self.permissions_of(role)
            .map(|permissions| permissions.granted())
            .unwrap_or_default()
    }
}
