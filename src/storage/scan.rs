use super::engine::RelationScan;
use super::heap_file::HeapFile;
use crate::errors::storage_error::StorageError;
use crate::record::codec::compare_field;
use crate::types::catalog_types::Datatype;
use crate::types::filter_types::ScanPredicate;
use crate::types::page_types::Page;
use crate::types::storage_types::{Rid, Value};
use tracing::trace;

/// Sequential, optionally filtered cursor over one heap file.
///
/// The cursor caches the page it is positioned on. Deleting the current
/// record updates that cached page and writes it through, so the next call
/// to [`RelationScan::scan_next`] continues with the following slot.
pub struct HeapFileScan {
    heap: HeapFile,
    relation: String,
    predicate: Option<ScanPredicate>,
    started: bool,
    page_count: u32,           // pages present when the scan started
    page_no: u32,              // page the cursor is on
    page: Option<Page>,        // cached copy of `page_no`
    next_slot: u16,
    current: Option<u16>,      // slot returned by the last scan_next
}

impl HeapFileScan {
    pub fn new(relation: &str, heap: HeapFile) -> Self {
        Self {
            heap,
            relation: relation.to_string(),
            predicate: None,
            started: false,
            page_count: 0,
            page_no: 0,
            page: None,
            next_slot: 0,
            current: None,
        }
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }

    fn check_predicate(predicate: &ScanPredicate) -> Result<(), StorageError> {
        if !predicate.attr_type.supports_len(predicate.length) {
            return Err(StorageError::InvalidPredicate(format!(
                "{} field of {} bytes",
                predicate.attr_type, predicate.length
            )));
        }
        let same_kind = matches!(
            (&predicate.value, predicate.attr_type),
            (Value::Integer(_), Datatype::Integer)
                | (Value::Float(_), Datatype::Float)
                | (Value::Text(_), Datatype::String)
        );
        if !same_kind {
            return Err(StorageError::InvalidPredicate(format!(
                "value {} does not match {}",
                predicate.value, predicate.attr_type
            )));
        }
        Ok(())
    }
}

/// Evaluates `predicate` against one record. No predicate matches everything.
fn matches(predicate: Option<&ScanPredicate>, record: &[u8]) -> Result<bool, StorageError> {
    let Some(p) = predicate else {
        return Ok(true);
    };
    let end = p.offset + p.length;
    let Some(field) = record.get(p.offset..end) else {
        return Err(StorageError::PredicateOutOfBounds {
            offset: p.offset,
            end,
            record_len: record.len(),
        });
    };
    Ok(p.op.holds(compare_field(field, p.attr_type, &p.value)))
}

impl RelationScan for HeapFileScan {
    fn start_scan(&mut self, predicate: Option<ScanPredicate>) -> Result<(), StorageError> {
        if let Some(p) = &predicate {
            Self::check_predicate(p)?;
        }
        self.page_count = self.heap.page_count()?;
        self.predicate = predicate;
        self.page_no = 0;
        self.page = None;
        self.next_slot = 0;
        self.current = None;
        self.started = true;
        Ok(())
    }

    fn scan_next(&mut self) -> Result<Option<Rid>, StorageError> {
        if !self.started {
            return Err(StorageError::ScanNotStarted);
        }
        self.current = None;

        loop {
            if self.page.is_none() {
                if self.page_no >= self.page_count {
                    return Ok(None);
                }
                self.page = Some(self.heap.read_page(self.page_no)?);
                self.next_slot = 0;
            }

            if let Some(page) = &self.page {
                while self.next_slot < page.header.slot_count {
                    let slot = self.next_slot;
                    self.next_slot += 1;

                    let Some(record) = page.get_record(slot) else {
                        continue; // deleted / unused slot
                    };
                    if matches(self.predicate.as_ref(), record)? {
                        self.current = Some(slot);
                        let rid = Rid::new(self.page_no, slot);
                        trace!(relation = %self.relation, %rid, "scan hit");
                        return Ok(Some(rid));
                    }
                }
            }

            // page exhausted, move on
            self.page = None;
            self.page_no += 1;
        }
    }

    fn get_record(&self) -> Result<&[u8], StorageError> {
        let (Some(page), Some(slot)) = (&self.page, self.current) else {
            return Err(StorageError::NoCurrentRecord);
        };
        page.get_record(slot).ok_or(StorageError::NoCurrentRecord)
    }

    fn delete_record(&mut self) -> Result<(), StorageError> {
        let (Some(page), Some(slot)) = (&mut self.page, self.current) else {
            return Err(StorageError::NoCurrentRecord);
        };
        if !page.delete_record(slot) {
            return Err(StorageError::SlotUnused(Rid::new(self.page_no, slot)));
        }
        self.heap.write_page(page)?;
        self.current = None;
        Ok(())
    }

    fn end_scan(&mut self) {
        self.started = false;
        self.page = None;
        self.current = None;
        self.predicate = None;
    }
}
