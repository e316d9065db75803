//! SQLite repository implementation.
//!
//! Implements [`UserRepository`] from `webuser_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use webuser_core::storage::{RepositoryError, Result, UserRepository};
use webuser_core::user::User;

use super::conversions::row_to_user;
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based user repository.
///
/// All calls run on the single connection owned by `tokio_rusqlite`, which
/// executes them one at a time on a dedicated thread. Queries go through the
/// connection's statement cache, which is filled during initialization.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist. `":memory:"`
    /// opens a private in-memory database.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;
        tracing::debug!(path, "Opened SQLite user store");

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Create the `user` table if needed, then prepare every statement.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_USER_TABLE)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, "schema"))?;

        prepare_statements(conn, &schema::PREPARED_STATEMENTS).await
    }
}

/// Compile `statements` into the connection's statement cache.
///
/// The first statement that fails to prepare aborts with the store error.
async fn prepare_statements(conn: &Connection, statements: &'static [&'static str]) -> Result<()> {
    conn.call(move |conn| {
        for sql in statements {
            conn.prepare_cached(sql).map_err(wrap_err)?;
        }
        Ok(())
    })
    .await
    .map_err(|e| map_tokio_rusqlite_error(e, "schema"))
}

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn get_user(&self, id: i64) -> Result<User> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare_cached(schema::SELECT_USER_BY_ID)
                    .map_err(wrap_err)?;
                stmt.query_row([id], row_to_user).map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id.to_string()))
    }

    async fn get_user_by_email(&self, email: &str) -> Result<User> {
        let key = email.to_string();
        let email = email.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare_cached(schema::SELECT_USER_BY_EMAIL)
                    .map_err(wrap_err)?;
                stmt.query_row([&email], row_to_user).map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, key))
    }

    async fn add_user(&self, user: &User) -> Result<()> {
        let user_id = user.user_id;
        let alias = user.alias.clone();
        let email = user.email.clone();
        let password = user.password.clone();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare_cached(schema::INSERT_USER).map_err(wrap_err)?;
                stmt.execute(rusqlite::params![user_id, alias, email, password])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, user_id.to_string()))
    }

    async fn update_user(&self, user: &User) -> Result<()> {
        let user_id = user.user_id;
        let alias = user.alias.clone();
        let email = user.email.clone();
        let password = user.password.clone();

        let rows = self
            .conn
            .call(move |conn| {
                let mut stmt = conn.prepare_cached(schema::UPDATE_USER).map_err(wrap_err)?;
                stmt.execute(rusqlite::params![user_id, alias, email, password])
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, user_id.to_string()))?;

        if rows == 0 {
            tracing::warn!(user_id, "Update matched no user row");
        }

        Ok(())
    }
}
