//! Profile storage

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use super::types::UserProfile;
use crate::auth::rbac::Role;
use crate::utils::error::{GuardError, Result};

/// Backing store for user profiles.
///
/// Implementations talk to the hosted database; every call may fail
/// independently and reports through `GuardError`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch a profile by id
    async fn get(&self, id: Uuid) -> Result<Option<UserProfile>>;

    /// Insert a new profile; fails with `Conflict` if the id exists
    async fn insert(&self, profile: UserProfile) -> Result<UserProfile>;

    /// Overwrite the role of an existing profile.
    ///
    /// Fails with `Conflict` unless the stored role is `expected_role`.
    async fn update_role(
        &self,
        id: Uuid,
        expected_role: &str,
        role: Role,
        role_level: u32,
    ) -> Result<UserProfile>;
}

/// In-process profile store
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: DashMap<Uuid, UserProfile>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get(&self, id: Uuid) -> Result<Option<UserProfile>> {
        Ok(self.profiles.get(&id).map(|entry| entry.value().clone()))
    }

    async fn insert(&self, profile: UserProfile) -> Result<UserProfile> {
        use dashmap::mapref::entry::Entry;

        match self.profiles.entry(profile.id) {
            Entry::Occupied(_) => Err(GuardError::conflict(format!(
                "Profile {} already exists",
                profile.id
            ))),
            Entry::Vacant(slot) => {
                debug!("Inserting profile {}", profile.id);
                slot.insert(profile.clone());
                Ok(profile)
            }
        }
    }

    async fn update_role(
        &self,
        id: Uuid,
        expected_role: &str,
        role: Role,
        role_level: u32,
    ) -> Result<UserProfile> {
        let mut entry = self
            .profiles
            .get_mut(&id)
            .ok_or_else(|| GuardError::not_found(format!("Profile {} not found", id)))?;

        if entry.role != expected_role {
            return Err(GuardError::conflict(format!(
                "Role of {} changed from {} to {}",
                id, expected_role, entry.role
            )));
        }

        entry.role = role.as_str().to_string();
        entry.role_level = Some(role_level);
        entry.updated_at = Some(Utc::now());
        Ok(entry.value().clone())
    }
}
