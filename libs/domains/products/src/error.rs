use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Caller-facing messages; kept stable because clients match on them.
pub mod messages {
    pub const NAME_REQUIRED: &str = "Product name must be provided.";
    pub const DESCRIPTION_REQUIRED: &str = "Product description must be provided.";
    pub const PRICE_REQUIRED: &str = "Product price must be provided.";
    pub const PRICE_NOT_POSITIVE: &str = "Product price must be positive.";

    pub const DUPLICATE_PRODUCT: &str = "Duplicate product. Can't save.";
    pub const SAVE_FAILED: &str = "Failed to save product.";
    pub const ID_REQUIRED: &str = "ID cannot be empty.";
    pub const UPDATE_ID_REQUIRED: &str = "Must provide ID.";
    pub const NOT_FOUND: &str = "Product not found.";
    pub const UPDATE_FAILED: &str = "Server Error while saving data.";
    pub const DELETE_FAILED: &str = "Product could not be deleted.";
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductError {
    /// Missing or malformed caller input, detected before touching the store
    #[error("{0}")]
    InvalidArgument(String),

    /// The id is already taken
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    /// The store accepted the call but produced no document
    #[error("{0}")]
    Unavailable(String),

    /// Driver failure or a stored document that no longer decodes
    #[error("Database error: {0}")]
    Database(String),
}

impl ProductError {
    pub fn invalid_argument(message: &str) -> Self {
        Self::InvalidArgument(message.to_string())
    }

    pub fn conflict(message: &str) -> Self {
        Self::Conflict(message.to_string())
    }

    pub fn not_found(message: &str) -> Self {
        Self::NotFound(message.to_string())
    }

    pub fn unavailable(message: &str) -> Self {
        Self::Unavailable(message.to_string())
    }
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::InvalidArgument(msg) => AppError::BadRequest(msg),
            ProductError::Conflict(msg) => AppError::Conflict(msg),
            ProductError::NotFound(msg) => AppError::NotFound(msg),
            ProductError::Unavailable(msg) => AppError::ServiceUnavailable(msg),
            ProductError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for ProductError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        ProductError::Database(format!("failed to encode product: {err}"))
    }
}

impl From<mongodb::bson::de::Error> for ProductError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        ProductError::Database(format!("failed to decode product: {err}"))
    }
}
