use crate::consts::page_consts::PAGE_SIZE;

/// Fixed 16-byte header at the start of every heap page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageHeader {
    pub page_no: u32,    // position of the page within its heap file
    pub slot_count: u16, // item ids allocated, live or not
    pub free_start: u16, // first byte after the record area
    pub free_end: u16,   // first byte of the item id array
    pub reserved: u32,
}

/// In-memory image of one heap page, header included in `data`.
#[derive(Clone)]
pub struct Page {
    pub header: PageHeader,
    pub data: [u8; PAGE_SIZE],
}

/// Slot entry locating one record inside its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemId {
    pub offset: u16,
    pub len: u16,
    pub state: ItemState,
}

/// Whether a slot still holds a record. Slots are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Unused,
    Live,
}
