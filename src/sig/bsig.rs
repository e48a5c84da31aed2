use crate::errors::relation_error::RelationError;
use crate::relation::Relation;
use crate::storage::paged_file::PagedFile;
use crate::tuple;
use crate::types::relation_types::RelationParams;
use crate::types::sig_types::Bits;

/// Fixed location of slice `i`: one slice per page-signature bit, packed
/// `bsig_per_page` to a page, all pre-allocated at creation.
pub fn slice_location(params: &RelationParams, i: usize) -> (u32, usize) {
    (
        (i / params.bsig_per_page) as u32,
        i % params.bsig_per_page,
    )
}

/// Record data page `pid` in every slice whose bit is set in the page's
/// just-updated signature. A slice found all-zero is being touched for the
/// first time, which advances its page's used counter; a slice that already
/// records `pid` needs no write at all. Returns how many slices were newly
/// touched. Worst case is O(pm) page touches per insert, accepted in
/// exchange for O(1) slice lookups at query time.
pub fn update_slices(
    file: &PagedFile,
    params: &RelationParams,
    pid: u32,
    page_sig: &Bits,
) -> Result<u64, RelationError> {
    let mut touched: u64 = 0;
    for i in 0..params.pm {
        if !page_sig.is_set(i) {
            continue;
        }
        let (bp, slot) = slice_location(params, i);
        let mut page = file.read_page(bp)?;
        let mut slice = Bits::from_bytes(params.bm, page.entry(slot, params.bsig_size));
        if slice.is_set(pid as usize) {
            continue; // an earlier tuple on this page already set bit i
        }
        if slice.is_zero() {
            page.set_used(page.used() + 1);
            touched += 1;
        }
        slice.set(pid as usize);
        page.write_entry(slot, params.bsig_size, slice.as_bytes());
        file.write_page(bp, &page)?;
    }
    Ok(touched)
}

/// Intersect the slices indexed by the probe signature's set bits: slice i
/// has bit p set iff page p's signature has bit i set, so the intersection
/// is exactly the pages whose signatures contain the probe's.
pub fn find_pages_by_bsig(r: &Relation, probe: &str) -> Result<Bits, RelationError> {
    let p = &r.params;
    let vals = tuple::probe_values(p.nattrs, probe);
    let qsig = super::psig::make_page_sig(p, &vals);

    // every page that already holds a signature is a candidate until a
    // slice rules it out; pages without one cannot match on any path
    let mut pages = Bits::new(p.data_pages as usize);
    for pid in 0..p.npsigs as usize {
        pages.set(pid);
    }

    for i in 0..p.pm {
        if !qsig.is_set(i) {
            continue;
        }
        let (bp, slot) = slice_location(p, i);
        let page = r.bsig.read_page(bp)?;
        let slice = Bits::from_bytes(p.bm, page.entry(slot, p.bsig_size));
        pages.and_with(&slice);
    }
    Ok(pages)
}
