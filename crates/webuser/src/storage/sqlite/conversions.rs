//! SQLite row conversion.

use rusqlite::Row;
use webuser_core::user::User;

/// Convert a SQLite row to a User.
///
/// Expected columns: user_id, alias, email, password
pub fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        user_id: row.get(0)?,
        alias: row.get(1)?,
        email: row.get(2)?,
        password: row.get(3)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_row_to_user_reads_columns_in_order() {
        let conn = Connection::open_in_memory().unwrap();

        let user = conn
            .query_row(
                "SELECT 5, 'erin', 'erin@example.com', 'pw'",
                [],
                row_to_user,
            )
            .unwrap();

        assert_eq!(user, User::new(5, "erin", "erin@example.com", "pw"));
    }

    #[test]
    fn test_row_to_user_rejects_null_alias() {
        let conn = Connection::open_in_memory().unwrap();

        let result = conn.query_row(
            "SELECT 5, NULL, 'erin@example.com', 'pw'",
            [],
            row_to_user,
        );

        assert!(matches!(
            result,
            Err(rusqlite::Error::InvalidColumnType(1, _, _))
        ));
    }
}
