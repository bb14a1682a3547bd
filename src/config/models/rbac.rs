//! RBAC configuration

use crate::auth::rbac::{Role, RoleDefinition};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// RBAC configuration
///
/// An empty `roles` map selects the built-in role table. A non-empty map
/// replaces it entirely, so every role the deployment uses must be listed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Role table override
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub roles: HashMap<Role, RoleDefinition>,
}

impl RbacConfig {
    /// Whether the built-in table is in effect
    pub fn uses_builtin_table(&self) -> bool {
        self.roles.is_empty()
    }

    /// Merge RBAC configurations; a non-empty table in `other` wins
    pub fn merge(mut self, other: Self) -> Self {
        if !other.roles.is_empty() {
            self.roles = other.roles;
        }
        self
    }
}
