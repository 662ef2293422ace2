//! Row types shared by the HTTP handlers and the client layer.
//!
//! Each type is both the wire shape (snake_case JSON) and the `FromRow`
//! target for its table. Keys default to 0 when absent so the same struct
//! doubles as a create/update payload.

pub mod account;
pub mod product;
pub mod release;
pub mod short_expiry;
pub mod stock;
pub mod summary;
pub mod user;

pub use account::{Credentials, NewAccount};
pub use product::Product;
pub use release::Release;
pub use short_expiry::ShortExpiry;
pub use stock::Stock;
pub use summary::Summary;
pub use user::User;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Caller-side validation failure, raised before any remote call or SQL
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// A row in one of the editable collections
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Collection path segment, e.g. `products`
    const COLLECTION: &'static str;

    fn key(&self) -> i32;

    /// Human-readable name used in undo prompts
    fn label(&self) -> String;

    fn validate(&self) -> Result<(), ValidationError>;
}

pub(crate) fn require_text(
    field: &'static str,
    value: &str,
    message: &str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, message));
    }
    Ok(())
}
