use serde::{Deserialize, Serialize};

/// Creation-time knobs for a relation's signature scheme.
#[derive(Debug, Clone, Copy)]
pub struct SigConfig {
    pub nattrs: usize, // number of attributes per tuple
    pub tk: usize,     // codeword weight: bits set per attribute codeword
    pub tm: usize,     // tuple signature width in bits
    pub pm: usize,     // page signature width in bits
    pub bm: usize,     // bit-slice width in bits; bounds addressable data pages
}

/// The persisted parameters record: fixed layout computed at creation plus
/// dynamic counters flushed back on close. The only structure rewritten
/// wholesale; everything else is append/in-place-update only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationParams {
    pub version: u32,
    pub page_size: usize,

    // static layout, never recomputed after creation
    pub nattrs: usize,
    pub tup_size: usize,      // fixed tuple byte length
    pub tup_per_page: usize,  // tuple slots per data page
    pub tk: usize,            // codeword weight
    pub tm: usize,            // tuple signature bits (byte multiple)
    pub tsig_size: usize,     // tuple signature bytes
    pub tsig_per_page: usize,
    pub pm: usize,            // page signature bits (byte multiple)
    pub psig_size: usize,
    pub psig_per_page: usize,
    pub bm: usize,            // bit-slice bits (byte multiple)
    pub bsig_size: usize,
    pub bsig_per_page: usize,
    pub bsig_pages: u32,      // fixed at creation, never grown

    // dynamic counters, updated on every insert
    pub ntuples: u64,
    pub data_pages: u32,
    pub ntsigs: u64,
    pub tsig_pages: u32,
    pub npsigs: u64,
    pub psig_pages: u32,
    pub nbsigs: u64, // slices that have gone non-zero since creation
}
