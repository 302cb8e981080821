pub const PAGE_SIZE: usize = 8192;          // total page size in bytes (8 KB)
pub const PAGE_HEADER_SIZE: usize = 16;     // bytes reserved for page header
pub const ITEM_ID_SIZE: usize = 6;          // size of each item identifier in slot array

/// Largest record that fits on an empty page together with its item id.
pub const MAX_RECORD_SIZE: usize = PAGE_SIZE - PAGE_HEADER_SIZE - ITEM_ID_SIZE;
