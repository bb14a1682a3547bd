//! Profile record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::rbac::Role;

/// User profile as persisted by the backing store.
///
/// `role` keeps the raw stored string. Rows written by older clients or
/// edited by hand may hold names the engine does not know; those are treated
/// as unknown roles, never rejected at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
    /// Cached level of `role`; absent on rows that predate the column
    #[serde(default)]
    pub role_level: Option<u32>,
    #[serde(default)]
    pub team_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// Parsed role, if the stored name is known
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}

/// Display name for a new profile: the given name, else the email's local
/// part, else `"User"`.
pub(super) fn display_name(email: &str, name: Option<&str>) -> String {
    name.map(str::trim)
        .filter(|n| !n.is_empty())
        .or_else(|| email.split('@').next().filter(|local| !local.is_empty()))
        .unwrap_or("User")
        .to_string()
}
