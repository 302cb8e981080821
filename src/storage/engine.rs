use super::heap_file::HeapFile;
use super::scan::HeapFileScan;
use crate::catalog::catalog_manager::CatalogManager;
use crate::errors::storage_error::StorageError;
use crate::types::filter_types::ScanPredicate;
use crate::types::storage_types::Rid;

/// Cursor over the records of one relation.
///
/// Usage follows open → `start_scan` → `scan_next`* → `end_scan`. While
/// positioned on a record, `get_record` exposes its bytes and
/// `delete_record` removes it without disturbing the cursor.
pub trait RelationScan {
    /// (Re)starts the scan from the first record, optionally filtered.
    fn start_scan(&mut self, predicate: Option<ScanPredicate>) -> Result<(), StorageError>;

    /// Advances to the next matching record; `None` once exhausted.
    fn scan_next(&mut self) -> Result<Option<Rid>, StorageError>;

    fn get_record(&self) -> Result<&[u8], StorageError>;

    fn delete_record(&mut self) -> Result<(), StorageError>;

    /// Releases the cursor. Safe to call more than once.
    fn end_scan(&mut self);
}

/// Record-level access to relations by name.
pub trait ScanEngine {
    type Scan: RelationScan;

    fn open_scan(&self, relation: &str) -> Result<Self::Scan, StorageError>;

    fn insert_record(&self, relation: &str, record: &[u8]) -> Result<Rid, StorageError>;
}

/// [`ScanEngine`] over the heap files registered in a catalog.
pub struct HeapEngine<'a> {
    catalog: &'a CatalogManager,
}

impl<'a> HeapEngine<'a> {
    pub fn new(catalog: &'a CatalogManager) -> Self {
        Self { catalog }
    }

    /// Opens the heap file of `relation` along with its record length.
    pub fn heap_file(&self, relation: &str) -> Result<(HeapFile, usize), StorageError> {
        let meta = self
            .catalog
            .relation(relation)
            .map_err(|_| StorageError::RelationNotFound(relation.to_string()))?;
        let heap = HeapFile::open(self.catalog.data_dir().join(&meta.file))?;
        Ok((heap, meta.record_len))
    }
}

impl ScanEngine for HeapEngine<'_> {
    type Scan = HeapFileScan;

    fn open_scan(&self, relation: &str) -> Result<HeapFileScan, StorageError> {
        let (heap, _) = self.heap_file(relation)?;
        Ok(HeapFileScan::new(relation, heap))
    }

    fn insert_record(&self, relation: &str, record: &[u8]) -> Result<Rid, StorageError> {
        let (heap, record_len) = self.heap_file(relation)?;
        if record.len() != record_len {
            return Err(StorageError::RecordLengthMismatch {
                expected: record_len,
                actual: record.len(),
            });
        }
        heap.insert_record(record)
    }
}
