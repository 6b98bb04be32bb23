use serde::{Deserialize, Serialize};

/// Backend-held proof of an authenticated user.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: i64,
    pub username: String,
}

/// The signed-in player as shown by the UI.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserData {
    pub username: String,
    /// `None` when the backend sent `status: null`.
    #[serde(default)]
    pub status: Option<bool>,
    #[serde(default)]
    pub survived_days: Option<i32>,
    #[serde(default)]
    pub last_login: Option<String>,
    #[serde(default)]
    pub server_role: Option<String>,
}

/// Result of looking a user record up by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLookup {
    Found(UserData),
    /// The record has no `status` key. Good enough for an explicit login,
    /// not for restoring a saved session.
    MissingStatus(UserData),
    NotFound,
}

impl UserLookup {
    /// The user, only if the record carries a `status`.
    pub fn found(self) -> Option<UserData> {
        match self {
            UserLookup::Found(user) => Some(user),
            UserLookup::MissingStatus(_) | UserLookup::NotFound => None,
        }
    }

    /// The user of any non-empty record.
    pub fn record(self) -> Option<UserData> {
        match self {
            UserLookup::Found(user) | UserLookup::MissingStatus(user) => Some(user),
            UserLookup::NotFound => None,
        }
    }
}
