//! Session identity domain model.
//!
//! Provides the identity stored in a logged-in session. The Discord profile is held as an
//! opaque JSON blob; only the handful of fields shown on the dashboard are ever read from it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::user::UserDto;

/// Authenticated identity attached to a session.
///
/// Created on a successful OAuth callback and stored in the session until logout or expiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Profile returned by the identity provider, stored verbatim.
    pub profile: serde_json::Value,
    /// When the session was established.
    pub logged_in_at: DateTime<Utc>,
}

impl SessionUser {
    /// Creates a session identity for `profile`, timestamped now.
    pub fn new(profile: serde_json::Value) -> Self {
        Self {
            profile,
            logged_in_at: Utc::now(),
        }
    }

    /// Discord user id, if the profile carries one.
    pub fn id(&self) -> Option<&str> {
        self.profile_str("id")
    }

    /// Display name, preferring the Discord global name over the username.
    pub fn name(&self) -> Option<&str> {
        self.profile_str("global_name")
            .or_else(|| self.profile_str("username"))
    }

    fn profile_str(&self, key: &str) -> Option<&str> {
        self.profile.get(key).and_then(serde_json::Value::as_str)
    }

    /// Converts the session identity to a DTO for API responses.
    ///
    /// # Returns
    /// - `UserDto` - Id, display name and avatar hash from the profile
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id().map(str::to_string),
            name: self.name().map(str::to_string),
            avatar: self.profile_str("avatar").map(str::to_string),
            logged_in_at: self.logged_in_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Tests the global name wins over the username.
    ///
    /// Expected: name() returns global_name when present
    #[test]
    fn prefers_global_name() {
        let user = SessionUser::new(json!({
            "id": "42",
            "username": "nelly",
            "global_name": "Nelly",
        }));

        assert_eq!(user.id(), Some("42"));
        assert_eq!(user.name(), Some("Nelly"));
    }

    /// Tests a profile missing optional fields still converts.
    ///
    /// Expected: UserDto with None for absent fields
    #[test]
    fn converts_sparse_profile() {
        let user = SessionUser::new(json!({ "username": "nelly", "global_name": null }));
        let logged_in_at = user.logged_in_at;

        let dto = user.into_dto();

        assert_eq!(dto.id, None);
        assert_eq!(dto.name.as_deref(), Some("nelly"));
        assert_eq!(dto.avatar, None);
        assert_eq!(dto.logged_in_at, logged_in_at);
    }
}
