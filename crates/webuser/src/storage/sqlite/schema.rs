//! SQLite schema definition and SQL query constants.
//!
//! Pure data, no I/O.

/// Creates the `user` table when it is missing.
pub const CREATE_USER_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS user (
    user_id INTEGER PRIMARY KEY,
    alias VARCHAR(64) NOT NULL,
    email VARCHAR(64) NOT NULL,
    password VARCHAR(64) NOT NULL
)
"#;

pub const SELECT_USER_BY_ID: &str = r#"
SELECT user_id, alias, email, password
FROM user
WHERE user_id = ?1
LIMIT 1
"#;

pub const SELECT_USER_BY_EMAIL: &str = r#"
SELECT user_id, alias, email, password
FROM user
WHERE email = ?1
LIMIT 1
"#;

pub const INSERT_USER: &str = r#"
INSERT INTO user (user_id, alias, email, password)
VALUES (?1, ?2, ?3, ?4)
"#;

pub const UPDATE_USER: &str = r#"
UPDATE user
SET alias = ?2, email = ?3, password = ?4
WHERE user_id = ?1
"#;

/// Every statement prepared at startup and kept in the statement cache.
pub const PREPARED_STATEMENTS: [&str; 4] = [
    SELECT_USER_BY_ID,
    SELECT_USER_BY_EMAIL,
    INSERT_USER,
    UPDATE_USER,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_table_is_idempotent() {
        assert!(CREATE_USER_TABLE.contains("CREATE TABLE IF NOT EXISTS user"));
        assert!(CREATE_USER_TABLE.contains("user_id INTEGER PRIMARY KEY"));
    }

    #[test]
    fn test_lookups_are_limited_to_one_row() {
        assert!(SELECT_USER_BY_ID.contains("LIMIT 1"));
        assert!(SELECT_USER_BY_EMAIL.contains("LIMIT 1"));
    }

    #[test]
    fn test_update_never_touches_the_id_column() {
        let set_clause = UPDATE_USER
            .split("WHERE")
            .next()
            .expect("UPDATE has a WHERE clause");
        assert!(!set_clause.contains("user_id"));
        assert!(UPDATE_USER.contains("WHERE user_id = ?1"));
    }

    #[test]
    fn test_prepared_statements_cover_every_query() {
        assert_eq!(PREPARED_STATEMENTS.len(), 4);
        assert!(PREPARED_STATEMENTS.contains(&INSERT_USER));
        assert!(PREPARED_STATEMENTS.contains(&UPDATE_USER));
    }
}
