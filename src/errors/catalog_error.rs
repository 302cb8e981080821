use crate::errors::storage_error::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("invalid catalog: {0}")]
    Invalid(String),
    #[error("relation exists: {0}")]
    RelationExists(String),
    #[error("relation not found: {0}")]
    RelationNotFound(String),
    #[error("attribute not found: {relation}.{attribute}")]
    AttributeNotFound { relation: String, attribute: String },
}
