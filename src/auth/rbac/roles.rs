//! Role management methods

use super::system::RbacSystem;
use super::types::{AsRole, Permission, Role, RoleAssignmentCheck, RoleInfo};

impl RbacSystem {
    /// Role assigned to a newly created profile absent any other signal
    pub fn default_role(&self) -> Role {
        Role::Pending
    }

    /// Every role in the table, in canonical order
    pub fn all_roles(&self) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|role| self.roles.contains_key(role))
            .collect()
    }

    /// Display information for a role
    pub fn role_info(&self, role: impl AsRole) -> RoleInfo {
        match self.definition(role) {
            Some(def) => RoleInfo {
                name: def.name.clone(),
                level: def.level,
                description: def.description.clone(),
            },
            None => RoleInfo::unknown(),
        }
    }

    /// Check if `acting` may move a user currently holding `target_current`
    /// to `proposed`.
    ///
    /// The checks run in a fixed order: the `updateUserRoles` permission,
    /// then the admin shortcut, then the rule that only admins grant admin,
    /// then the level comparison against the target's current role.
    pub fn can_update_user_role(
        &self,
        acting: impl AsRole,
        target_current: impl AsRole,
        proposed: impl AsRole,
    ) -> bool {
        let acting = acting.as_role();

        if !self.has_permission(acting, Permission::UpdateUserRoles) {
            return false;
        }

        if acting == Some(Role::Admin) {
            return true;
        }

        if proposed.as_role() == Some(Role::Admin) {
            return false;
        }

        self.has_higher_level(acting, target_current)
    }

    /// Validate that `acting` may assign `proposed` at all.
    ///
    /// Returns the first failing reason.
    pub fn validate_role_assignment(
        &self,
        acting: impl AsRole,
        proposed: impl AsRole,
    ) -> RoleAssignmentCheck {
        let acting = acting.as_role();
        let proposed = proposed.as_role();

        if !self.has_permission(acting, Permission::UpdateUserRoles) {
            return RoleAssignmentCheck::denied("You do not have permission to update user roles");
        }

        if proposed == Some(Role::Admin) && acting != Some(Role::Admin) {
            return RoleAssignmentCheck::denied("Only admins can assign admin role");
        }

        if self.definition(proposed).is_none() {
            return RoleAssignmentCheck::denied("Invalid role specified");
        }

        RoleAssignmentCheck::ok()
    }

    /// Roles `acting` may hand out.
    ///
    /// Admin may assign every role. Anyone else may assign only roles with a
    /// level strictly below their own, which never includes admin as long as
    /// admin is the only role at the top level.
    pub fn assignable_roles(&self, acting: impl AsRole) -> Vec<Role> {
        let acting = acting.as_role();

        if acting == Some(Role::Admin) && self.definition(acting).is_some() {
            return self.all_roles();
        }

        let current_level = self.level(acting);
        self.all_roles()
            .into_iter()
            .filter(|role| self.level(*role) < current_level)
            .collect()
    }
}
