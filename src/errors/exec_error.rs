use crate::errors::catalog_error::CatalogError;
use crate::errors::storage_error::StorageError;
use crate::types::catalog_types::Datatype;
use thiserror::Error;

/// Status taxonomy returned by the insert, delete and select executors.
///
/// Collaborator failures are carried verbatim as the `#[source]` of the
/// variant naming the step that failed.
#[derive(Error, Debug)]
pub enum ExecError {
    #[error("relation not found: {0}")]
    RelationNotFound(String),

    #[error("attribute not found: {relation}.{attribute}")]
    AttributeNotFound { relation: String, attribute: String },

    /// Supplied attribute values do not match the relation schema one-to-one.
    #[error("bad parameter count for {relation}: {detail}")]
    BadParameterCount { relation: String, detail: String },

    #[error("attribute type mismatch on {attribute}: {detail}")]
    AttributeTypeMismatch { attribute: String, detail: String },

    /// Only raised when strict numeric input is enabled.
    #[error("malformed {ty} value '{input}'")]
    MalformedNumber { input: String, ty: Datatype },

    #[error("cannot open scan: {0}")]
    ScanOpen(#[source] StorageError),

    #[error("cannot start scan: {0}")]
    ScanStart(#[source] StorageError),

    #[error("scan failed: {0}")]
    Scan(#[source] StorageError),

    #[error("delete failed: {0}")]
    Delete(#[source] StorageError),

    #[error("insert failed: {0}")]
    Insert(#[source] StorageError),

    #[error("catalog error: {0}")]
    Catalog(#[source] CatalogError),
}

impl From<CatalogError> for ExecError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::RelationNotFound(name) => ExecError::RelationNotFound(name),
            CatalogError::AttributeNotFound {
                relation,
                attribute,
            } => ExecError::AttributeNotFound {
                relation,
                attribute,
            },
            other => ExecError::Catalog(other),
        }
    }
}

/// Convenience alias for executor results.
pub type ExecResult<T> = Result<T, ExecError>;
