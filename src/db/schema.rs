//! SQL DDL for initializing account and palm-template storage.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `users.id` / `palm_data.id` TEXT primary keys holding UUID v4 strings
/// - `users.email` UNIQUE (one account per email)
/// - `palm_data.user_id` UNIQUE (one template per account) with cascade delete
/// - Timestamps stored as RFC3339 text
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS palm_data (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL UNIQUE REFERENCES users(id) ON DELETE CASCADE,
    landmarks_json TEXT NOT NULL, -- JSON array of {x, y, z} points
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;
