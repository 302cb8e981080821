use crate::consts::page_consts::{MAX_RECORD_SIZE, PAGE_SIZE};
use crate::errors::storage_error::StorageError;
use crate::types::page_types::Page;
use crate::types::storage_types::Rid;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Unordered file of fixed-size slotted pages holding raw records.
#[derive(Debug, Clone)]
pub struct HeapFile {
    pub path: PathBuf, // path to the physical heap file
}

impl HeapFile {
    /// Creates a new heap file holding one empty page. Fails if it exists.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let page = Page::new(0);

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path.as_ref())?;
        file.write_all(&page.to_bytes())?;
        file.sync_all()?;

        Ok(Self {
            path: path.as_ref().to_path_buf(),
        })
    }

    /// Attaches to an existing heap file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let heap = Self {
            path: path.as_ref().to_path_buf(),
        };
        heap.page_count()?;
        Ok(heap)
    }

    pub fn page_count(&self) -> Result<u32, StorageError> {
        let len = fs::metadata(&self.path)?.len();
        if len % PAGE_SIZE as u64 != 0 {
            return Err(StorageError::Corrupted {
                page_no: (len / PAGE_SIZE as u64) as u32,
                reason: format!("file length {len} is not a multiple of the page size"),
            });
        }
        Ok((len / PAGE_SIZE as u64) as u32)
    }

    pub fn read_page(&self, page_no: u32) -> Result<Page, StorageError> {
        // open file and seek to correct page offset
        let mut file = File::open(&self.path)?;
        let offset = page_no as u64 * PAGE_SIZE as u64;
        file.seek(SeekFrom::Start(offset))?;

        // read page bytes into buffer
        let mut buf = [0u8; PAGE_SIZE];
        file.read_exact(&mut buf)?;

        let page = Page::from_bytes(buf);
        if page.header.page_no != page_no || !page.header.is_consistent() {
            return Err(StorageError::Corrupted {
                page_no,
                reason: "bad page header".into(),
            });
        }
        Ok(page)
    }

    pub fn write_page(&self, page: &Page) -> Result<(), StorageError> {
        let mut file = OpenOptions::new().write(true).open(&self.path)?;

        // seek to page offset
        let offset = page.header.page_no as u64 * PAGE_SIZE as u64;
        file.seek(SeekFrom::Start(offset))?;

        file.write_all(&page.to_bytes())?;
        file.sync_all()?;
        Ok(())
    }

    pub fn append_page(&self) -> Result<Page, StorageError> {
        let mut file = OpenOptions::new().append(true).open(&self.path)?;

        // compute new page number from file length
        let page_no = (file.metadata()?.len() / PAGE_SIZE as u64) as u32;

        let page = Page::new(page_no);
        file.write_all(&page.to_bytes())?;
        file.sync_all()?;

        Ok(page)
    }

    /// Stores `record` on the last page, or on a fresh page when it is full.
    pub fn insert_record(&self, record: &[u8]) -> Result<Rid, StorageError> {
        if record.len() > MAX_RECORD_SIZE {
            return Err(StorageError::RecordTooLarge {
                len: record.len(),
                max: MAX_RECORD_SIZE,
            });
        }

        let page_count = self.page_count()?;
        let last_page_no = page_count.saturating_sub(1);
        let mut page = if page_count == 0 {
            self.append_page()?
        } else {
            self.read_page(last_page_no)?
        };

        if let Some(slot_no) = page.insert_record(record) {
            // record fits into the last page
            self.write_page(&page)?;
            return Ok(Rid::new(page.header.page_no, slot_no));
        }

        // not enough space, start a new page
        let mut page = self.append_page()?;
        let slot_no = page
            .insert_record(record)
            .ok_or(StorageError::RecordTooLarge {
                len: record.len(),
                max: MAX_RECORD_SIZE,
            })?;
        self.write_page(&page)?;
        Ok(Rid::new(page.header.page_no, slot_no))
    }

    pub fn get_record(&self, rid: Rid) -> Result<Vec<u8>, StorageError> {
        if rid.page_no >= self.page_count()? {
            return Err(StorageError::InvalidRid(rid));
        }
        let page = self.read_page(rid.page_no)?;
        if page.item(rid.slot_no).is_none() {
            return Err(StorageError::InvalidRid(rid));
        }
        page.get_record(rid.slot_no)
            .map(<[u8]>::to_vec)
            .ok_or(StorageError::SlotUnused(rid))
    }

    pub fn delete_at(&self, rid: Rid) -> Result<(), StorageError> {
        if rid.page_no >= self.page_count()? {
            return Err(StorageError::InvalidRid(rid));
        }
        let mut page = self.read_page(rid.page_no)?;
        if page.item(rid.slot_no).is_none() {
            return Err(StorageError::InvalidRid(rid));
        }
        if !page.delete_record(rid.slot_no) {
            return Err(StorageError::SlotUnused(rid));
        }
        self.write_page(&page)
    }

    /// Every live record with its id, in physical order.
    pub fn scan_all(&self) -> Result<Vec<(Rid, Vec<u8>)>, StorageError> {
        let mut records = Vec::new();
        for page_no in 0..self.page_count()? {
            let page = self.read_page(page_no)?;
            for slot_no in 0..page.header.slot_count {
                if let Some(record) = page.get_record(slot_no) {
                    records.push((Rid::new(page_no, slot_no), record.to_vec()));
                }
            }
        }
        Ok(records)
    }

    /// Removes the file from disk.
    pub fn destroy(self) -> Result<(), StorageError> {
        fs::remove_file(&self.path)?;
        Ok(())
    }
}
