pub const PAGE_SIZE: usize = 4096;          // total page size in bytes (4 KB)
pub const PAGE_HEADER_SIZE: usize = 8;      // bytes reserved for page header (used + capacity)
