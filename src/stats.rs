use crate::types::relation_types::RelationParams;
use std::fmt;

/// Point-in-time view of a relation's layout and counters, with a
/// human-readable rendering for debugging and tooling.
pub struct RelationStats {
    pub params: RelationParams,
}

impl fmt::Display for RelationStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let p = &self.params;
        writeln!(f, "dynamic:")?;
        writeln!(
            f,
            "  #items  tuples: {}  tsigs: {}  psigs: {}  touched slices: {}",
            p.ntuples, p.ntsigs, p.npsigs, p.nbsigs
        )?;
        writeln!(
            f,
            "  #pages  data: {}  tsig: {}  psig: {}  bsig: {}",
            p.data_pages, p.tsig_pages, p.psig_pages, p.bsig_pages
        )?;
        writeln!(f, "static:")?;
        writeln!(
            f,
            "  tuples  #attrs: {}  size: {} bytes  max/page: {}",
            p.nattrs, p.tup_size, p.tup_per_page
        )?;
        writeln!(f, "  sigs    bits/attr: {}", p.tk)?;
        writeln!(
            f,
            "  tsigs   {} bits ({} bytes)  max/page: {}",
            p.tm, p.tsig_size, p.tsig_per_page
        )?;
        writeln!(
            f,
            "  psigs   {} bits ({} bytes)  max/page: {}",
            p.pm, p.psig_size, p.psig_per_page
        )?;
        write!(
            f,
            "  bsigs   {} bits ({} bytes)  max/page: {}",
            p.bm, p.bsig_size, p.bsig_per_page
        )
    }
}
