//! Argon2id implementation of the `PasswordHasher` port.
//!
//! Hashes are encoded as PHC strings, so the algorithm, cost, and salt travel
//! with the digest. Verification reads the cost from the stored string, which
//! keeps older hashes valid after the configured cost changes.

use argon2::password_hash::{
    Error as PhcError, PasswordHash as PhcString, PasswordHasher as _, PasswordVerifier as _,
    SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::rngs::OsRng;

use crate::domain::PasswordHash;
use crate::domain::ports::{PasswordHasher, PasswordHasherError};

/// Argon2 work factors.
///
/// The default follows the OWASP minimum for Argon2id: 19 MiB of memory, two
/// passes, one lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingCost {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    /// Number of passes over memory.
    pub iterations: u32,
    /// Number of lanes.
    pub parallelism: u32,
}

impl HashingCost {
    /// Cheapest cost Argon2 accepts. Only suitable for tests.
    pub const MINIMUM: Self = Self {
        memory_kib: Params::MIN_M_COST,
        iterations: Params::MIN_T_COST,
        parallelism: Params::MIN_P_COST,
    };
}

impl Default for HashingCost {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

/// Salted Argon2id hasher.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    engine: Argon2<'static>,
}

impl Argon2PasswordHasher {
    /// Build a hasher with the given cost.
    ///
    /// # Errors
    ///
    /// Fails when the parameters fall outside Argon2's accepted ranges, for
    /// example a memory cost below eight KiB per lane.
    pub fn new(cost: HashingCost) -> Result<Self, PasswordHasherError> {
        let params = Params::new(cost.memory_kib, cost.iterations, cost.parallelism, None)
            .map_err(|err| PasswordHasherError::hash(format!("invalid argon2 cost: {err}")))?;
        Ok(Self {
            engine: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<PasswordHash, PasswordHasherError> {
        let salt = SaltString::generate(&mut OsRng);
        let encoded = self
            .engine
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|err| PasswordHasherError::hash(err.to_string()))?
            .to_string();
        PasswordHash::new(encoded).map_err(|err| PasswordHasherError::hash(err.to_string()))
    }

    fn verify(&self, plaintext: &str, hash: &PasswordHash) -> Result<bool, PasswordHasherError> {
        let parsed = PhcString::new(hash.as_ref())
            .map_err(|err| PasswordHasherError::malformed_hash(err.to_string()))?;
        match self.engine.verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(PhcError::Password) => Ok(false),
            Err(err) => Err(PasswordHasherError::malformed_hash(err.to_string())),
        }
    }
}
