//! Heap-file storage and the scan engine consumed by the executors.
//!
//! ```text
//! +-------------------+
//! | Executors         |
//! +-------------------+
//!          |  ScanEngine / RelationScan
//!          v
//! +-------------------+
//! | HeapEngine        |  relation name -> heap file (via catalog)
//! +-------------------+
//!          |
//!          v
//! +-------------------+
//! | HeapFile / Page   |  8 KB slotted pages
//! +-------------------+
//! ```

pub mod engine;
pub mod heap_file;
pub mod item_id;
pub mod page;
pub mod page_header;
pub mod scan;

pub use engine::{HeapEngine, RelationScan, ScanEngine};
pub use heap_file::HeapFile;
pub use scan::HeapFileScan;
