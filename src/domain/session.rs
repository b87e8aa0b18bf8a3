//! Authentication session as seen by the shell.
//!
//! The session is owned by the authentication provider and pushed into the
//! shell whenever it changes. The shell never mutates it; it only branches on
//! `is_loading` and on whether a user is present.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user profile.
///
/// Only `id`, `name` and `avatar` are interpreted. Any other fields sent by the
/// provider are kept in `extra` and passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Profile {
    /// Creates a profile with no extra fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use socialshell::domain::Profile;
    ///
    /// let me = Profile::new("u1", "Ada");
    /// assert_eq!(me.id, "u1");
    /// assert!(me.avatar.is_empty());
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: String::new(),
            extra: Map::new(),
        }
    }

    /// Sets the avatar URL.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }
}

/// Session snapshot from the authentication provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub current_user: Option<Profile>,
    #[serde(default)]
    pub is_loading: bool,
}

impl Session {
    /// Session while the provider is still resolving the user.
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            current_user: None,
            is_loading: true,
        }
    }

    /// Session with no signed-in user.
    #[must_use]
    pub const fn signed_out() -> Self {
        Self {
            current_user: None,
            is_loading: false,
        }
    }

    /// Session for a resolved user.
    #[must_use]
    pub const fn signed_in(profile: Profile) -> Self {
        Self {
            current_user: Some(profile),
            is_loading: false,
        }
    }

    /// Id of the signed-in user, if any.
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.current_user.as_ref().map(|p| p.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_profile_fields_pass_through() {
        let json = r#"{"id":"u1","name":"Ada","status":"online"}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.avatar, "");
        assert_eq!(profile.extra.get("status"), Some(&Value::from("online")));

        let back = serde_json::to_value(&profile).unwrap();
        assert_eq!(back["status"], "online");
    }

    #[test]
    fn session_payload_defaults_to_signed_out() {
        let session: Session = serde_json::from_str("{}").unwrap();
        assert_eq!(session, Session::signed_out());
        assert_eq!(session.user_id(), None);
    }
}
