//! Relational operator execution over fixed-layout heap records.
//!
//! - [`catalog`]: relation/attribute metadata persisted as JSON
//! - [`record`]: text-to-binary conversion and field projection
//! - [`storage`]: slotted-page heap files and filtered scans
//! - [`executer`]: insert, delete and select/project operators

pub mod catalog;
pub mod consts;
pub mod errors;
pub mod executer;
pub mod record;
pub mod storage;
pub mod types;

pub use catalog::{CatalogAccessor, CatalogManager};
pub use errors::catalog_error::CatalogError;
pub use errors::exec_error::{ExecError, ExecResult};
pub use errors::storage_error::StorageError;
pub use executer::{delete, insert, select_project, Executor};
pub use storage::{HeapEngine, HeapFile, HeapFileScan, RelationScan, ScanEngine};
pub use types::catalog_types::{AttrDesc, AttrSpec, Datatype};
pub use types::config_types::{ExecConfig, Padding};
pub use types::filter_types::{Operator, ScanPredicate};
pub use types::storage_types::{AttrRef, AttrValue, Rid, Value};
