pub const PARAMS_FILE: &str = "params.json"; // parameters record, rewritten wholesale on close
pub const DATA_FILE: &str = "data.pag";      // fixed-capacity tuple pages
pub const TSIG_FILE: &str = "tsig.pag";      // tuple signature pages
pub const PSIG_FILE: &str = "psig.pag";      // page signature pages
pub const BSIG_FILE: &str = "bsig.pag";      // bit-slice pages, allocated in full at creation

pub const PARAMS_VERSION: u32 = 1;

// Fixed-width tuple encoding: total size is 28 + 7*(nattrs-2) bytes.
// First two fields take 13 + 14 bytes, every further field 6 bytes,
// with nattrs-1 comma separators.
pub const FIELD_WIDTH_FIRST: usize = 13;
pub const FIELD_WIDTH_SECOND: usize = 14;
pub const FIELD_WIDTH_REST: usize = 6;
pub const FIELD_SEP: char = ',';
pub const FIELD_PAD: char = ' ';

// A value starting with '?' contributes no codeword.
pub const WILDCARD: char = '?';

// A signature structure that cannot hold at least this many entries per
// page cannot amortize page overhead and is rejected at creation.
pub const MIN_SIGS_PER_PAGE: usize = 2;
