use crate::consts::page_consts::PAGE_HEADER_SIZE;
use crate::consts::relation_consts::{MIN_SIGS_PER_PAGE, PARAMS_VERSION};
use crate::errors::relation_error::RelationError;
use crate::types::relation_types::{RelationParams, SigConfig};

/// Round a signature width up to the next multiple of 8 bits.
pub fn round_to_byte(bits: usize) -> usize {
    (bits + 7) / 8 * 8
}

/// Fixed-width tuple encoding size for `nattrs` attributes.
pub fn tuple_size(nattrs: usize) -> usize {
    28 + 7 * (nattrs - 2)
}

/// Derive every per-page capacity and byte size from the relation
/// parameters. Fails before any file is written if a signature structure
/// cannot hold at least two entries per page, since such a layout cannot
/// amortize page overhead.
pub fn compute_params(page_size: usize, cfg: &SigConfig) -> Result<RelationParams, RelationError> {
    if cfg.nattrs < 2 {
        return Err(RelationError::Invalid(format!(
            "relation needs at least 2 attributes, got {}",
            cfg.nattrs
        )));
    }
    if cfg.tk == 0 {
        return Err(RelationError::Invalid("codeword weight must be positive".into()));
    }

    let available = page_size - PAGE_HEADER_SIZE;

    let tup_size = tuple_size(cfg.nattrs);
    let tup_per_page = available / tup_size;
    if tup_per_page == 0 {
        return Err(RelationError::CapacityViolation(format!(
            "tuple of {tup_size} bytes does not fit a page"
        )));
    }

    let tm = round_to_byte(cfg.tm);
    let tsig_size = tm / 8;
    let tsig_per_page = available / tsig_size;
    if tsig_per_page == 0 {
        return Err(RelationError::CapacityViolation(format!(
            "tuple signature of {tsig_size} bytes does not fit a page"
        )));
    }

    let pm = round_to_byte(cfg.pm);
    let psig_size = pm / 8;
    let psig_per_page = available / psig_size;
    if psig_per_page < MIN_SIGS_PER_PAGE {
        return Err(RelationError::CapacityViolation(format!(
            "page signature of {psig_size} bytes allows only {psig_per_page} per page, need {MIN_SIGS_PER_PAGE}"
        )));
    }

    // a codeword draws tk distinct positions, so it must fit either width
    if cfg.tk > tm.min(pm) {
        return Err(RelationError::Invalid(format!(
            "codeword weight {} exceeds signature width {}",
            cfg.tk,
            tm.min(pm)
        )));
    }

    let bm = round_to_byte(cfg.bm);
    let bsig_size = bm / 8;
    let bsig_per_page = available / bsig_size;
    if bsig_per_page < MIN_SIGS_PER_PAGE {
        return Err(RelationError::CapacityViolation(format!(
            "bit-slice of {bsig_size} bytes allows only {bsig_per_page} per page, need {MIN_SIGS_PER_PAGE}"
        )));
    }

    // one slice per page-signature bit, pre-allocated in full at creation
    let bsig_pages = ((pm + bsig_per_page - 1) / bsig_per_page) as u32;

    Ok(RelationParams {
        version: PARAMS_VERSION,
        page_size,
        nattrs: cfg.nattrs,
        tup_size,
        tup_per_page,
        tk: cfg.tk,
        tm,
        tsig_size,
        tsig_per_page,
        pm,
        psig_size,
        psig_per_page,
        bm,
        bsig_size,
        bsig_per_page,
        bsig_pages,
        ntuples: 0,
        data_pages: 0,
        ntsigs: 0,
        tsig_pages: 0,
        npsigs: 0,
        psig_pages: 0,
        nbsigs: 0,
    })
}

/// Number of slices stored on one given bit-slice page: every page holds
/// `bsig_per_page` slices except possibly the last.
pub fn slices_on_page(params: &RelationParams, page_no: u32) -> usize {
    let before = page_no as usize * params.bsig_per_page;
    (params.pm - before).min(params.bsig_per_page)
}
