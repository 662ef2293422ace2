use tracing::error;

use crate::error::ApiError;

/// bcrypt work factor for new hashes
pub const HASH_COST: u32 = 10;

pub fn hash_password(password: &str) -> Result<String, ApiError> {
    bcrypt::hash(password, HASH_COST).map_err(|e| {
        error!("Password hashing failed: {}", e);
        ApiError::internal_server_error("Could not store password")
    })
}

/// False for a wrong password and for a stored value that is not a bcrypt hash
pub fn verify_password(password: &str, stored: &str) -> bool {
    bcrypt::verify(password, stored).unwrap_or(false)
}
