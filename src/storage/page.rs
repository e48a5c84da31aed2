use crate::consts::page_consts::{PAGE_HEADER_SIZE, PAGE_SIZE};
use crate::types::page_types::{Page, PageHeader};

impl Page {
    pub fn new(capacity: u32) -> Self {
        // initialize empty page with header
        let mut data = [0u8; PAGE_SIZE];
        let header = PageHeader::new(capacity);
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
        // deserialize page from raw bytes
        let header = PageHeader::from_bytes(&buf[0..PAGE_HEADER_SIZE]);
        Self { header, data: buf }
    }

    pub fn used(&self) -> usize {
        self.header.used as usize
    }

    pub fn capacity(&self) -> usize {
        self.header.capacity as usize
    }

    pub fn set_used(&mut self, used: usize) {
        self.header.used = used as u32;
    }

    /// True iff the slot already holds an initialized entry. Slots fill in
    /// order, so the used counter is the slot-state check.
    pub fn slot_used(&self, slot: usize) -> bool {
        slot < self.used()
    }

    /// Byte-aligned offset of a fixed-width slot inside the page body.
    fn slot_offset(&self, slot: usize, entry_size: usize) -> usize {
        let off = PAGE_HEADER_SIZE + slot * entry_size;
        assert!(off + entry_size <= PAGE_SIZE); // slot must fit the page
        off
    }

    pub fn entry(&self, slot: usize, entry_size: usize) -> &[u8] {
        let off = self.slot_offset(slot, entry_size);
        &self.data[off..off + entry_size]
    }

    pub fn write_entry(&mut self, slot: usize, entry_size: usize, bytes: &[u8]) {
        assert_eq!(bytes.len(), entry_size);
        let off = self.slot_offset(slot, entry_size);
        self.data[off..off + entry_size].copy_from_slice(bytes);
    }
}
