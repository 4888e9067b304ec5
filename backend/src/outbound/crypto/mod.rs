//! Password hashing adapters.

mod argon2_hasher;

pub use argon2_hasher::{Argon2PasswordHasher, HashingCost};
