//! RBAC configuration validators

use super::trait_def::Validate;
use crate::auth::rbac::Role;
use crate::config::models::RbacConfig;
use tracing::debug;

impl Validate for RbacConfig {
    fn validate(&self) -> Result<(), String> {
        if self.roles.is_empty() {
            return Ok(());
        }

        debug!("Validating configured role table");

        let Some(admin) = self.roles.get(&Role::Admin) else {
            return Err("Role table must define admin".to_string());
        };

        // Walk in canonical order so the first error is deterministic
        for role in Role::ALL {
            let Some(def) = self.roles.get(&role) else {
                continue;
            };

            if def.name.trim().is_empty() {
                return Err(format!("Role {} must have a display name", role));
            }

            if def.level == 0 {
                return Err(format!("Role {} must have a level above 0", role));
            }

            // Assignable-role and role-update rules assume admin alone holds the top level
            if role != Role::Admin && def.level >= admin.level {
                return Err(format!(
                    "Role {} has level {} which reaches admin level {}",
                    role, def.level, admin.level
                ));
            }
        }

        Ok(())
    }
}
