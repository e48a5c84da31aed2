use crate::errors::relation_error::RelationError;
use crate::relation::Relation;
use crate::storage::paged_file::PagedFile;
use crate::tuple;
use crate::types::relation_types::RelationParams;
use crate::types::sig_types::Bits;
use log::debug;

/// A tuple's contribution to its page's signature: the same codewords as
/// the tuple signature, drawn in the `pm`-bit space.
pub fn make_page_sig(params: &RelationParams, values: &[String]) -> Bits {
    let mut sig = Bits::new(params.pm);
    for value in values {
        if tuple::is_wildcard(value) {
            continue;
        }
        sig.or_with(&super::tsig::codeword(value, params.pm, params.tk));
    }
    sig
}

/// OR a tuple's contribution into the signature slot of data page `pid`,
/// appending a new psig page first when `pid` maps beyond current capacity.
/// An already-initialized slot is updated, never overwritten; a fresh slot
/// starts as the contribution itself. Returns the updated page signature.
pub fn update_page_sig(
    file: &PagedFile,
    params: &mut RelationParams,
    pid: u32,
    contrib: &Bits,
) -> Result<Bits, RelationError> {
    let ppid = pid / params.psig_per_page as u32;
    let slot = pid as usize % params.psig_per_page;

    if ppid >= params.psig_pages {
        file.append_page(params.psig_per_page as u32)
            .map_err(|e| RelationError::Allocation {
                file: "psig",
                source: e,
            })?;
        params.psig_pages += 1;
        debug!("allocated psig page {ppid}");
    }

    let mut page = file.read_page(ppid)?;
    let sig = if page.slot_used(slot) {
        // existing slot updated: preserve bits already present
        let mut sig = Bits::from_bytes(params.pm, page.entry(slot, params.psig_size));
        sig.or_with(contrib);
        sig
    } else {
        // new slot used: data page pid received its first tuple
        page.set_used(slot + 1);
        params.npsigs = pid as u64 + 1;
        contrib.clone()
    };
    page.write_entry(slot, params.psig_size, sig.as_bytes());
    file.write_page(ppid, &page)?;

    Ok(sig)
}

/// Scan every stored page signature against the probe's page signature.
pub fn find_pages_by_psig(r: &Relation, probe: &str) -> Result<Bits, RelationError> {
    let p = &r.params;
    let vals = tuple::probe_values(p.nattrs, probe);
    let qsig = make_page_sig(p, &vals);

    let mut pages = Bits::new(p.data_pages as usize);
    let mut pid: usize = 0;
    for pp in 0..p.psig_pages {
        let page = r.psig.read_page(pp)?;
        for slot in 0..page.used() {
            let psig = Bits::from_bytes(p.pm, page.entry(slot, p.psig_size));
            if qsig.is_subset_of(&psig) {
                pages.set(pid);
            }
            pid += 1;
        }
    }
    Ok(pages)
}
