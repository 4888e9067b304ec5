//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered accounts. `username` carries a unique constraint.
    users (id) {
        id -> Int4,
        /// Login name, at most 150 characters.
        username -> Varchar,
        /// Argon2 PHC string; never the plaintext.
        password -> Varchar,
    }
}

diesel::table! {
    /// Roster entries. Rows are not linked to any user.
    employees (id) {
        id -> Int4,
        name -> Varchar,
        /// Non-negative, enforced by a check constraint.
        age -> Int4,
        department -> Varchar,
    }
}
