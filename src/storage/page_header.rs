use crate::consts::page_consts::{ITEM_ID_SIZE, PAGE_HEADER_SIZE, PAGE_SIZE};
use crate::types::page_types::PageHeader;

fn le_u16(buf: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([buf[at], buf[at + 1]])
}

fn le_u32(buf: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]])
}

// Header layout (little-endian):
//   0..4   page_no
//   4..6   slot_count
//   6..8   free_start
//   8..10  free_end
//  10..14  reserved
//  14..16  padding

impl PageHeader {
    /// Header of an empty page: no slots, all space between header and end free.
    pub fn new(page_no: u32) -> Self {
        Self {
            page_no,
            slot_count: 0,
            free_start: PAGE_HEADER_SIZE as u16,
            free_end: PAGE_SIZE as u16,
            reserved: 0,
        }
    }

    pub fn to_bytes(&self) -> [u8; PAGE_HEADER_SIZE] {
        let mut buf = [0u8; PAGE_HEADER_SIZE];
        buf[0..4].copy_from_slice(&self.page_no.to_le_bytes());
        buf[4..6].copy_from_slice(&self.slot_count.to_le_bytes());
        buf[6..8].copy_from_slice(&self.free_start.to_le_bytes());
        buf[8..10].copy_from_slice(&self.free_end.to_le_bytes());
        buf[10..14].copy_from_slice(&self.reserved.to_le_bytes());
        buf
    }

    /// `buf` must hold at least `PAGE_HEADER_SIZE` bytes.
    pub fn from_bytes(buf: &[u8]) -> Self {
        Self {
            page_no: le_u32(buf, 0),
            slot_count: le_u16(buf, 4),
            free_start: le_u16(buf, 6),
            free_end: le_u16(buf, 8),
            reserved: le_u32(buf, 10),
        }
    }

    /// Checks that the free-space pointers describe a valid region and that
    /// the item id array fits below the page end.
    pub fn is_consistent(&self) -> bool {
        let start = self.free_start as usize;
        let end = self.free_end as usize;
        let Some(slots_end) = PAGE_SIZE.checked_sub(self.slot_count as usize * ITEM_ID_SIZE) else {
            return false;
        };
        start >= PAGE_HEADER_SIZE && start <= end && end <= PAGE_SIZE && end <= slots_end
    }
}
