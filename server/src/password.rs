//! # Password hashing
//!
//! Raw passwords only ever exist in memory. [`hash_password`] derives a salted Argon2id hash in
//! PHC string format (e.g. `$argon2id$v=19$m=19456,t=10,p=1$...`), which is what gets stored.
//! [`verify_password`] checks a raw password against such a string; because every hash uses a
//! fresh salt, two hashes of the same password differ yet both verify.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Number of Argon2 iterations used for every new hash.
pub const HASH_WORK_FACTOR: u32 = 10;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_CHARS: usize = 8;

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("invalid hashing parameters: {0}")]
    Params(#[from] argon2::Error),

    #[error("password hashing failed: {0}")]
    Hash(#[from] argon2::password_hash::Error),

    #[error("hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Returns `true` if the password is long enough to be accepted.
#[must_use]
pub fn is_long_enough(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_CHARS
}

fn hasher() -> Result<Argon2<'static>, PasswordError> {
    let params = Params::new(
        Params::DEFAULT_M_COST,
        HASH_WORK_FACTOR,
        Params::DEFAULT_P_COST,
        None,
    )?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hashes a password with a random salt. Returns a PHC-format string.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = hasher()?.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Same as [`hash_password`], but runs on the blocking thread pool.
pub async fn hash_password_blocking(password: String) -> Result<String, PasswordError> {
    tokio::task::spawn_blocking(move || hash_password(&password)).await?
}

/// Verifies a password against a PHC-format hash string.
///
/// The parameters are read from the hash itself, so hashes made with a different work factor
/// still verify.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
