//! Password hashing and access token generation.
//!
//! Passwords are stored as bcrypt hashes. Access tokens are random alphanumeric
//! strings; only their SHA-256 digest is persisted.

use rand::Rng;
use sha2::{Digest, Sha256};

use crate::server::error::AppError;

const BCRYPT_COST: u32 = 10;
const TOKEN_LENGTH: usize = 48;

/// Hashes a password with bcrypt at cost 10.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    bcrypt::hash(password, BCRYPT_COST)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
}

/// Checks a password against a stored bcrypt hash.
///
/// Malformed stored hashes never verify.
pub fn verify_password(password: &str, stored: &str) -> bool {
    bcrypt::verify(password, stored).unwrap_or(false)
}

/// Generates a new random access token.
pub fn generate_token() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..TOKEN_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Digest under which a token is stored and looked up.
pub fn hash_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}
