use std::fmt;

use serde::{Deserialize, Serialize};

/// A user record as persisted in the `user` table.
///
/// Serializes as `{"userID": .., "alias": .., "email": ..}`. The password is
/// accepted on input but never written out.
///
/// The password is stored in plaintext. Hashing is out of scope for this
/// layer, so callers must not treat the stored value as a secret at rest.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(rename = "userID")]
    pub user_id: i64,
    pub alias: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    /// Create a user with a caller-supplied id.
    pub fn new(
        user_id: i64,
        alias: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            alias: alias.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("user_id", &self.user_id)
            .field("alias", &self.alias)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
