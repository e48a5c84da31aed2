use crate::consts::page_consts::PAGE_HEADER_SIZE;
use crate::types::page_types::PageHeader;

impl PageHeader {
    pub fn new(capacity: u32) -> Self {
        Self {
            used: 0,  // no slot holds an entry yet
            capacity, // fixed slot count for this page's structure
        }
    }

    pub fn to_bytes(&self) -> [u8; PAGE_HEADER_SIZE] {
        let mut buf = [0u8; PAGE_HEADER_SIZE];
        // serialize header fields into fixed-size buffer
        buf[0..4].copy_from_slice(&self.used.to_le_bytes());
        buf[4..8].copy_from_slice(&self.capacity.to_le_bytes());
        buf
    }

    pub fn from_bytes(buf: &[u8]) -> Self {
        // deserialize fields from byte buffer
        Self {
            used: u32::from_le_bytes(buf[0..4].try_into().unwrap()),
            capacity: u32::from_le_bytes(buf[4..8].try_into().unwrap()),
        }
    }
}
