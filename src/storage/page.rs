use crate::consts::page_consts::{ITEM_ID_SIZE, PAGE_HEADER_SIZE, PAGE_SIZE};
use crate::types::page_types::{ItemId, Page, PageHeader};

// Page layout:
//
// +------------------+ 0
// | PageHeader (16B) |
// +------------------+ free_start
// | records ...      |  (grow upward)
// | free space       |
// | ... item ids     |  (grow downward from the page end)
// +------------------+ PAGE_SIZE

impl Page {
    pub fn new(page_no: u32) -> Self {
        // initialize empty page with header
        let mut data = [0u8; PAGE_SIZE];
        let header = PageHeader::new(page_no);
        data[0..PAGE_HEADER_SIZE].copy_from_slice(&header.to_bytes());

        Self { header, data }
    }

    pub fn to_bytes(&self) -> [u8; PAGE_SIZE] {
        // serialize header + data
        let mut buf = self.data;
        buf[0..PAGE_HEADER_SIZE].copy_from_slice(&self.header.to_bytes());
        buf
    }

    pub fn from_bytes(buf: [u8; PAGE_SIZE]) -> Self {
        let header = PageHeader::from_bytes(&buf[0..PAGE_HEADER_SIZE]);
        Self { header, data: buf }
    }

    fn item_pos(slot_no: u16) -> usize {
        PAGE_SIZE - (slot_no as usize + 1) * ITEM_ID_SIZE
    }

    /// Item id of `slot_no`, if the slot exists.
    pub fn item(&self, slot_no: u16) -> Option<ItemId> {
        if slot_no >= self.header.slot_count {
            return None;
        }
        let pos = Self::item_pos(slot_no);
        let bytes: &[u8; ITEM_ID_SIZE] = self.data.get(pos..pos + ITEM_ID_SIZE)?.try_into().ok()?;
        Some(ItemId::from_bytes(bytes))
    }

    fn set_item(&mut self, slot_no: u16, item: &ItemId) {
        let pos = Self::item_pos(slot_no);
        self.data[pos..pos + ITEM_ID_SIZE].copy_from_slice(&item.to_bytes());
    }

    /// Bytes available for one more record plus its item id.
    pub fn free_space(&self) -> usize {
        (self.header.free_end as usize).saturating_sub(self.header.free_start as usize)
    }

    /// Appends a record, returning its slot, or `None` if the page is full.
    pub fn insert_record(&mut self, record: &[u8]) -> Option<u16> {
        // check available free space
        if record.len() + ITEM_ID_SIZE > self.free_space() {
            return None;
        }

        // write record bytes into free space
        let offset = self.header.free_start;
        let start = offset as usize;
        self.data[start..start + record.len()].copy_from_slice(record);

        // record item id in slot array
        let slot_no = self.header.slot_count;
        self.set_item(slot_no, &ItemId::new(offset, record.len() as u16));

        // update page header
        self.header.slot_count += 1;
        self.header.free_start += record.len() as u16;
        self.header.free_end -= ITEM_ID_SIZE as u16;

        Some(slot_no)
    }

    /// Record bytes stored in `slot_no`; `None` for missing or deleted slots.
    pub fn get_record(&self, slot_no: u16) -> Option<&[u8]> {
        let item = self.item(slot_no)?;
        if !item.is_used() {
            return None;
        }
        let lo = item.offset as usize;
        self.data.get(lo..lo + item.len as usize)
    }

    /// Marks the slot unused. Returns `false` if it was missing or already free.
    pub fn delete_record(&mut self, slot_no: u16) -> bool {
        let Some(mut item) = self.item(slot_no) else {
            return false;
        };
        if !item.is_used() {
            return false;
        }
        item.mark_unused();
        self.set_item(slot_no, &item);
        true
    }

    /// Number of slots that currently hold a record.
    pub fn live_records(&self) -> usize {
        (0..self.header.slot_count)
            .filter(|&s| self.get_record(s).is_some())
            .count()
    }
}
