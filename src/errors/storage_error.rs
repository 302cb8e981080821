use crate::types::storage_types::Rid;
use thiserror::Error;

/// Failures raised by heap files and scans.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("relation not found: {0}")]
    RelationNotFound(String),

    #[error("record of {len} bytes does not fit on a page (max {max})")]
    RecordTooLarge { len: usize, max: usize },

    /// Rid points past the end of the file or the page's slot array.
    #[error("invalid record id {0}")]
    InvalidRid(Rid),

    #[error("slot {0} is not in use")]
    SlotUnused(Rid),

    /// Record handed to a relation does not have the relation's fixed length.
    #[error("record length {actual} does not match relation record length {expected}")]
    RecordLengthMismatch { expected: usize, actual: usize },

    #[error("record {rid} holds {len} bytes, {needed} needed")]
    RecordTooShort { rid: Rid, len: usize, needed: usize },

    #[error("invalid scan predicate: {0}")]
    InvalidPredicate(String),

    #[error("predicate range {offset}..{end} exceeds record length {record_len}")]
    PredicateOutOfBounds {
        offset: usize,
        end: usize,
        record_len: usize,
    },

    #[error("scan has not been started")]
    ScanNotStarted,

    #[error("scan has no current record")]
    NoCurrentRecord,

    #[error("corrupted page {page_no}: {reason}")]
    Corrupted { page_no: u32, reason: String },
}
