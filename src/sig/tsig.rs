use crate::errors::relation_error::RelationError;
use crate::relation::Relation;
use crate::tuple;
use crate::types::relation_types::RelationParams;
use crate::types::sig_types::Bits;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use xxhash_rust::xxh3::xxh3_64;

/// Deterministic codeword for one attribute value: seed a generator from a
/// stable content hash of the value and draw `k` distinct bit positions in
/// `[0, m)`, rejecting repeats. The same value always yields the same
/// codeword, which query matching relies on; distinct values collide
/// rarely, which is the source of false positives.
pub fn codeword(value: &str, m: usize, k: usize) -> Bits {
    let mut rng = StdRng::seed_from_u64(xxh3_64(value.as_bytes()));
    let mut cword = Bits::new(m);
    let mut nbits = 0;
    while nbits < k {
        let i = rng.gen_range(0..m);
        if !cword.is_set(i) {
            cword.set(i);
            nbits += 1;
        }
    }
    cword
}

/// Superimpose the codewords of every non-wildcard value into one tuple
/// signature of `tm` bits. Wildcards contribute nothing, so a tuple with
/// more wildcards matches a superset of what a fully specified one would.
pub fn make_tuple_sig(params: &RelationParams, values: &[String]) -> Bits {
    let mut sig = Bits::new(params.tm);
    for value in values {
        if tuple::is_wildcard(value) {
            continue;
        }
        sig.or_with(&codeword(value, params.tm, params.tk));
    }
    sig
}

/// Linear scan of every stored tuple signature; on containment, mark the
/// data page owning the tuple as a candidate. May report false positives,
/// never a false negative.
pub fn find_pages_by_tsig(r: &Relation, probe: &str) -> Result<Bits, RelationError> {
    let p = &r.params;
    let vals = tuple::probe_values(p.nattrs, probe);
    let qsig = make_tuple_sig(p, &vals);

    let mut pages = Bits::new(p.data_pages as usize);
    let mut idx: u64 = 0;
    for tp in 0..p.tsig_pages {
        let page = r.tsig.read_page(tp)?;
        for slot in 0..page.used() {
            let tsig = Bits::from_bytes(p.tm, page.entry(slot, p.tsig_size));
            if qsig.is_subset_of(&tsig) {
                // tuple idx lives on data page idx / tup_per_page
                pages.set((idx / p.tup_per_page as u64) as usize);
            }
            idx += 1;
        }
    }
    Ok(pages)
}
