use async_trait::async_trait;

use crate::user::User;

use super::Result;

/// Repository for user records.
///
/// Implementations own a single shared database handle. Concurrency safety
/// is whatever the underlying driver provides.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Gets a user by id, or `RepositoryError::NotFound` if no row matches.
    async fn get_user(&self, id: i64) -> Result<User>;

    /// Gets a user by email address.
    ///
    /// Email is not unique in the schema, so this returns the first matching
    /// row. Which row wins when several share an email is up to the store.
    async fn get_user_by_email(&self, email: &str) -> Result<User>;

    /// Inserts a new user. The caller supplies the id.
    async fn add_user(&self, user: &User) -> Result<()>;

    /// Overwrites alias, email and password of the row with `user.user_id`.
    ///
    /// Succeeds even when no row has that id; absence is not reported.
    async fn update_user(&self, user: &User) -> Result<()>;
}
