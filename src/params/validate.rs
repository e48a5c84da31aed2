use crate::consts::page_consts::PAGE_SIZE;
use crate::consts::relation_consts::{MIN_SIGS_PER_PAGE, PARAMS_VERSION};
use crate::errors::relation_error::RelationError;
use crate::types::relation_types::RelationParams;

/// Open-time sanity checks on a loaded parameters record.
pub fn validate_params(p: &RelationParams) -> Result<(), RelationError> {
    if p.version != PARAMS_VERSION {
        return Err(RelationError::Invalid(format!(
            "unsupported version {}",
            p.version
        )));
    }
    if p.page_size != PAGE_SIZE {
        return Err(RelationError::Invalid(format!(
            "page_size mismatch: params={}, expected={}",
            p.page_size, PAGE_SIZE
        )));
    }

    if p.nattrs < 2 {
        return Err(RelationError::Invalid(format!(
            "relation needs at least 2 attributes, got {}",
            p.nattrs
        )));
    }
    if p.tup_size != super::layout::tuple_size(p.nattrs) {
        return Err(RelationError::Invalid("tuple size inconsistent".into()));
    }
    for (name, bits, size) in [
        ("tsig", p.tm, p.tsig_size),
        ("psig", p.pm, p.psig_size),
        ("bsig", p.bm, p.bsig_size),
    ] {
        if bits % 8 != 0 || size != bits / 8 {
            return Err(RelationError::Invalid(format!(
                "{name} width {bits} bits inconsistent with {size} bytes"
            )));
        }
    }
    if p.psig_per_page < MIN_SIGS_PER_PAGE || p.bsig_per_page < MIN_SIGS_PER_PAGE {
        return Err(RelationError::Invalid("per-page capacity below 2".into()));
    }
    let want_bsig_pages = ((p.pm + p.bsig_per_page - 1) / p.bsig_per_page) as u32;
    if p.bsig_pages != want_bsig_pages {
        return Err(RelationError::Invalid(format!(
            "bsig page count {} inconsistent, expected {}",
            p.bsig_pages, want_bsig_pages
        )));
    }

    // dynamic counters must agree with the static layout
    if p.ntuples != p.ntsigs {
        return Err(RelationError::Invalid(
            "tuple and tuple-signature counts differ".into(),
        ));
    }
    if p.ntuples > p.data_pages as u64 * p.tup_per_page as u64 {
        return Err(RelationError::Invalid("more tuples than pages can hold".into()));
    }
    if p.npsigs > p.data_pages as u64 {
        return Err(RelationError::Invalid(
            "more page signatures than data pages".into(),
        ));
    }
    Ok(())
}
