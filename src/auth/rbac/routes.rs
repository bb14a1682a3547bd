//! Dashboard route gating

use serde::Serialize;

use super::system::RbacSystem;
use super::types::{AsRole, Permission, Role};

/// Gated dashboard route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardRoute {
    Dashboard,
    UserManagement,
    TeamManagement,
    Performance,
    Profile,
}

impl DashboardRoute {
    pub const ALL: [DashboardRoute; 5] = [
        DashboardRoute::Dashboard,
        DashboardRoute::UserManagement,
        DashboardRoute::TeamManagement,
        DashboardRoute::Performance,
        DashboardRoute::Profile,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            DashboardRoute::Dashboard => "/dashboard",
            DashboardRoute::UserManagement => "/dashboard/user-management",
            DashboardRoute::TeamManagement => "/dashboard/team-management",
            DashboardRoute::Performance => "/dashboard/performance",
            DashboardRoute::Profile => "/dashboard/profile",
        }
    }

    /// Resolve a request path to the route that governs it.
    ///
    /// The longest route path that is a prefix of `path` on a segment
    /// boundary wins. Query strings, fragments and trailing slashes are
    /// ignored.
    pub fn resolve(path: &str) -> Option<DashboardRoute> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');

        DashboardRoute::ALL
            .into_iter()
            .filter(|route| {
                let prefix = route.path();
                path == prefix
                    || path
                        .strip_prefix(prefix)
                        .is_some_and(|rest| rest.starts_with('/'))
            })
            .max_by_key(|route| route.path().len())
    }
}

impl RbacSystem {
    /// Check if a role may open the given route
    pub fn can_access(&self, role: impl AsRole, route: DashboardRoute) -> bool {
        let role = role.as_role();

        // Unknown roles see no route at all
        if self.definition(role).is_none() {
            return false;
        }

        match route {
            DashboardRoute::Dashboard | DashboardRoute::Profile => true,
            DashboardRoute::UserManagement => self.has_permission(role, Permission::ViewAllUsers),
            DashboardRoute::TeamManagement => {
                self.has_permission(role, Permission::ViewAllTeams) || role == Some(Role::Coach)
            }
            DashboardRoute::Performance => {
                self.has_permission(role, Permission::ViewAllPerformance)
                    || matches!(role, Some(Role::Player | Role::Coach))
            }
        }
    }

    /// Check if a role may open a request path. Paths outside every gated
    /// route are denied.
    pub fn can_access_route(&self, role: impl AsRole, path: &str) -> bool {
        DashboardRoute::resolve(path).is_some_and(|route| self.can_access(role, route))
    }
}
