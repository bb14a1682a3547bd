//! Profile creation and role changes

use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::store::ProfileStore;
use super::types::{UserProfile, display_name};
use crate::auth::rbac::{Module, RbacSystem, Role};
use crate::utils::error::{GuardError, Result};

/// Profile workflow bound to a role table and a store
#[derive(Clone)]
pub struct ProfileService {
    rbac: Arc<RbacSystem>,
    store: Arc<dyn ProfileStore>,
}

impl ProfileService {
    pub fn new(rbac: Arc<RbacSystem>, store: Arc<dyn ProfileStore>) -> Self {
        Self { rbac, store }
    }

    pub fn rbac(&self) -> &RbacSystem {
        &self.rbac
    }

    /// Create a profile for a freshly authenticated user.
    ///
    /// Returns the stored profile unchanged if one already exists. New
    /// profiles always start at the default role.
    pub async fn create_profile(
        &self,
        user_id: Uuid,
        email: &str,
        name: Option<&str>,
    ) -> Result<UserProfile> {
        if let Some(existing) = self.store.get(user_id).await? {
            debug!("Profile already exists for {}", email);
            return Ok(existing);
        }

        let role = self.rbac.default_role();
        let profile = UserProfile {
            id: user_id,
            email: email.to_string(),
            name: display_name(email, name),
            role: role.as_str().to_string(),
            role_level: Some(self.rbac.level(role)),
            team_id: None,
            created_at: Utc::now(),
            updated_at: None,
        };

        info!("Creating profile for {} with role {}", email, role);
        match self.store.insert(profile).await {
            Err(GuardError::Conflict(reason)) => {
                // Lost a race with a concurrent onboarding call
                debug!("Profile for {} created concurrently", email);
                self.store
                    .get(user_id)
                    .await?
                    .ok_or(GuardError::Conflict(reason))
            }
            result => result,
        }
    }

    /// Change the role of `target_id` on behalf of `acting_id`.
    ///
    /// `proposed` is the raw role name from the request. The assignment is
    /// validated first, then checked against the target's current role;
    /// the store is only written when both pass, and only if that role has
    /// not changed in the meantime.
    pub async fn update_user_role(
        &self,
        acting_id: Uuid,
        target_id: Uuid,
        proposed: &str,
    ) -> Result<UserProfile> {
        debug!("Updating user role: {} -> {}", target_id, proposed);

        let acting = self
            .store
            .get(acting_id)
            .await?
            .ok_or_else(|| GuardError::authorization("Unable to verify your permissions"))?;

        let target = self
            .store
            .get(target_id)
            .await?
            .ok_or_else(|| GuardError::not_found("Target user not found"))?;

        let check = self.rbac.validate_role_assignment(&acting.role, proposed);
        if !check.valid {
            let reason = check
                .error
                .unwrap_or_else(|| "Role assignment rejected".to_string());
            warn!(
                "Role change by {} on {} rejected: {}",
                acting_id, target_id, reason
            );
            return Err(GuardError::authorization(reason));
        }

        // Validation above guarantees the name parses
        let new_role = Role::parse(proposed)
            .ok_or_else(|| GuardError::internal(format!("Unparsed role {}", proposed)))?;

        if !self
            .rbac
            .can_update_user_role(&acting.role, &target.role, new_role)
        {
            warn!(
                "Role change by {} ({}) on {} ({}) rejected by level",
                acting_id, acting.role, target_id, target.role
            );
            return Err(GuardError::authorization(
                "You do not have permission to update this user's role",
            ));
        }

        let level = self.rbac.level(new_role);
        let updated = self
            .store
            .update_role(target_id, &target.role, new_role, level)
            .await?;

        info!(
            "User {} changed role of {} from {} to {}",
            acting_id, target_id, target.role, new_role
        );
        Ok(updated)
    }

    /// Modules for a stored profile; unknown profiles get none
    pub async fn modules_for(&self, user_id: Uuid) -> Result<Vec<Module>> {
        Ok(self
            .store
            .get(user_id)
            .await?
            .map(|profile| self.rbac.available_modules(&profile.role))
            .unwrap_or_default())
    }
}
