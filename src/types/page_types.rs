use crate::consts::page_consts::PAGE_SIZE;

/// Explicit per-page bookkeeping pair: how many fixed-width slots hold an
/// initialized entry, and how many the page can hold at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageHeader {
    pub used: u32,
    pub capacity: u32,
}

/// Transient in-memory copy of one fixed-size page: read, mutated, written
/// back before the next structure is touched.
#[derive(Clone)]
pub struct Page {
    pub header: PageHeader,
    pub data: [u8; PAGE_SIZE],
}
