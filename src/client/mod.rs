//! Client side of the inventory API: the resource contract, the one-slot
//! undo controller, and the list view that ties them together.

pub mod http;
pub mod resource;
pub mod undo;
pub mod view;

pub use http::ApiClient;
pub use resource::{HttpResource, Resource};
pub use undo::{UndoController, UNDO_COMPLETE};
pub use view::CollectionView;

use thiserror::Error;

use crate::database::models::ValidationError;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Rejected locally; no request was sent
    #[error("{0}")]
    Validation(String),

    /// The server answered with an error; `message` is its `error` field verbatim
    #[error("{message}")]
    Remote { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("invalid server URL: {0}")]
    InvalidUrl(String),
}

impl From<ValidationError> for ClientError {
    fn from(err: ValidationError) -> Self {
        ClientError::Validation(err.message)
    }
}
