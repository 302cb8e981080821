use crate::consts::page_consts::ITEM_ID_SIZE;
use crate::types::page_types::{ItemId, ItemState};

const FLAG_UNUSED: u16 = 0;
const FLAG_LIVE: u16 = 1;

impl ItemId {
    /// Live slot for a record of `len` bytes at `offset`.
    pub fn new(offset: u16, len: u16) -> Self {
        Self {
            offset,
            len,
            state: ItemState::Live,
        }
    }

    pub fn mark_unused(&mut self) {
        self.state = ItemState::Unused;
    }

    pub fn is_used(&self) -> bool {
        self.state == ItemState::Live
    }

    /// On-disk form: offset, length and state flag, little-endian `u16` each.
    pub fn to_bytes(&self) -> [u8; ITEM_ID_SIZE] {
        let flag = match self.state {
            ItemState::Unused => FLAG_UNUSED,
            ItemState::Live => FLAG_LIVE,
        };
        let mut buf = [0u8; ITEM_ID_SIZE];
        buf[0..2].copy_from_slice(&self.offset.to_le_bytes());
        buf[2..4].copy_from_slice(&self.len.to_le_bytes());
        buf[4..6].copy_from_slice(&flag.to_le_bytes());
        buf
    }

    /// Any non-zero flag reads as live.
    pub fn from_bytes(buf: &[u8; ITEM_ID_SIZE]) -> Self {
        let state = match u16::from_le_bytes([buf[4], buf[5]]) {
            FLAG_UNUSED => ItemState::Unused,
            _ => ItemState::Live,
        };
        Self {
            offset: u16::from_le_bytes([buf[0], buf[1]]),
            len: u16::from_le_bytes([buf[2], buf[3]]),
            state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unused_state_survives_encoding() {
        let mut item = ItemId::new(100, 14);
        item.mark_unused();
        let back = ItemId::from_bytes(&item.to_bytes());
        assert_eq!(back, item);
        assert!(!back.is_used());
    }
}
