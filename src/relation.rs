use crate::consts::page_consts::PAGE_SIZE;
use crate::consts::relation_consts::{BSIG_FILE, DATA_FILE, PSIG_FILE, TSIG_FILE};
use crate::errors::relation_error::RelationError;
use crate::params::io::{load_params, params_path, save_params_atomic};
use crate::params::layout::{compute_params, slices_on_page};
use crate::sig::{bsig, psig, tsig};
use crate::stats::RelationStats;
use crate::storage::paged_file::PagedFile;
use crate::tuple;
use crate::types::relation_types::{RelationParams, SigConfig};
use crate::types::sig_types::Bits;

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// An open relation descriptor: the parameters record plus the four page
/// files it exclusively owns for the session. Dynamic counters live in
/// `params` and reach disk on `persist`/`close`.
#[derive(Debug)]
pub struct Relation {
    pub dir: PathBuf,
    pub params: RelationParams,
    pub data: PagedFile,
    pub tsig: PagedFile,
    pub psig: PagedFile,
    pub bsig: PagedFile,
}

impl Relation {
    /// Create a new relation under `dir`. The layout is computed first and
    /// a capacity violation fails the creation before any file is written.
    /// Data, tsig and psig files start with one empty page; the bit-slice
    /// file is allocated in full, one all-zero slice per page-signature bit.
    pub fn create<P: AsRef<Path>>(dir: P, cfg: &SigConfig) -> Result<Self, RelationError> {
        let dir = dir.as_ref();
        let mut params = compute_params(PAGE_SIZE, cfg)?;

        if Self::exists(dir) {
            return Err(RelationError::Invalid(format!(
                "relation already exists at {}",
                dir.display()
            )));
        }
        fs::create_dir_all(dir)?;

        let data = PagedFile::create(dir.join(DATA_FILE))?;
        data.append_page(params.tup_per_page as u32)?;
        params.data_pages = 1;

        let tsig = PagedFile::create(dir.join(TSIG_FILE))?;
        tsig.append_page(params.tsig_per_page as u32)?;
        params.tsig_pages = 1;

        let psig = PagedFile::create(dir.join(PSIG_FILE))?;
        psig.append_page(params.psig_per_page as u32)?;
        params.psig_pages = 1;

        let bsig = PagedFile::create(dir.join(BSIG_FILE))?;
        for bp in 0..params.bsig_pages {
            // freshly appended pages are zeroed, so every slice starts as an
            // all-zero bit-vector of bm bits
            bsig.append_page(slices_on_page(&params, bp) as u32)?;
        }

        save_params_atomic(dir, &params)?;
        debug!(
            "created relation at {} ({} bit-slice pages for {} slices)",
            dir.display(),
            params.bsig_pages,
            params.pm
        );

        Ok(Self {
            dir: dir.to_path_buf(),
            params,
            data,
            tsig,
            psig,
            bsig,
        })
    }

    /// A relation exists where its parameters record does.
    pub fn exists<P: AsRef<Path>>(dir: P) -> bool {
        params_path(dir.as_ref()).exists()
    }

    /// Open an existing relation, loading and validating its parameters.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, RelationError> {
        let dir = dir.as_ref();
        let params = load_params(dir)?;
        let data = PagedFile::open(dir.join(DATA_FILE))?;
        let tsig = PagedFile::open(dir.join(TSIG_FILE))?;
        let psig = PagedFile::open(dir.join(PSIG_FILE))?;
        let bsig = PagedFile::open(dir.join(BSIG_FILE))?;
        debug!("opened relation at {}", dir.display());

        Ok(Self {
            dir: dir.to_path_buf(),
            params,
            data,
            tsig,
            psig,
            bsig,
        })
    }

    /// Flush the parameters record, dynamic counters included.
    pub fn persist(&self) -> Result<(), RelationError> {
        save_params_atomic(&self.dir, &self.params)
    }

    /// Close the descriptor. Page data reached disk as it was written; only
    /// the parameters record needs rewriting here.
    pub fn close(self) -> Result<(), RelationError> {
        self.persist()?;
        debug!("closed relation at {}", self.dir.display());
        Ok(())
    }

    /// Insert one fixed-width tuple and return the data page it landed on.
    ///
    /// Four steps, each growing its own file independently: append the
    /// tuple, append its signature, OR the page-signature slot, update the
    /// bit-slices. Not transactional: an allocation failure partway through
    /// leaves earlier steps applied.
    pub fn insert(&mut self, tuple_str: &str) -> Result<u32, RelationError> {
        let tup_size = self.params.tup_size;
        let tup_per_page = self.params.tup_per_page;

        if tuple_str.len() != tup_size {
            return Err(RelationError::SizeMismatch {
                expected: tup_size,
                actual: tuple_str.len(),
            });
        }
        let vals = tuple::values(tuple_str);
        if vals.len() != self.params.nattrs {
            return Err(RelationError::TupleFormat(format!(
                "expected {} attributes, got {}",
                self.params.nattrs,
                vals.len()
            )));
        }

        // bit-slices are bm bits wide, so page ids beyond bm are not
        // addressable; refuse before touching any structure
        let last = self.data.read_page(self.params.data_pages - 1)?;
        if last.used() == tup_per_page && self.params.data_pages as usize >= self.params.bm {
            return Err(RelationError::CapacityViolation(format!(
                "relation full: bit-slices address at most {} data pages",
                self.params.bm
            )));
        }

        // 1. tuple onto the last data page
        let (pid, _) = Self::append_fixed(
            &self.data,
            &mut self.params.data_pages,
            "data",
            tup_per_page,
            tup_size,
            tuple_str.as_bytes(),
        )?;
        self.params.ntuples += 1;

        // 2. tuple signature onto the last tsig page
        let tsig_bits = tsig::make_tuple_sig(&self.params, &vals);
        Self::append_fixed(
            &self.tsig,
            &mut self.params.tsig_pages,
            "tsig",
            self.params.tsig_per_page,
            self.params.tsig_size,
            tsig_bits.as_bytes(),
        )?;
        self.params.ntsigs += 1;

        // 3. OR this tuple's contribution into page pid's signature
        let contrib = psig::make_page_sig(&self.params, &vals);
        let page_sig = psig::update_page_sig(&self.psig, &mut self.params, pid, &contrib)?;

        // 4. record pid in every slice the updated signature selects
        let touched = bsig::update_slices(&self.bsig, &self.params, pid, &page_sig)?;
        self.params.nbsigs += touched;

        Ok(pid)
    }

    /// Encode attribute values fixed-width and insert the result.
    pub fn insert_values(&mut self, values: &[&str]) -> Result<u32, RelationError> {
        let encoded = tuple::encode(self.params.nattrs, values)?;
        self.insert(&encoded)
    }

    /// Append one fixed-width entry to the last page of a growable file,
    /// allocating a new page when the last one is full. Shared by the data
    /// and tsig structures; psig and bsig have their own placement rules.
    fn append_fixed(
        file: &PagedFile,
        npages: &mut u32,
        name: &'static str,
        per_page: usize,
        entry_size: usize,
        entry: &[u8],
    ) -> Result<(u32, usize), RelationError> {
        let mut pid = *npages - 1;
        let mut page = file.read_page(pid)?;
        if page.used() == per_page {
            let (new_pid, new_page) =
                file.append_page(per_page as u32)
                    .map_err(|e| RelationError::Allocation {
                        file: name,
                        source: e,
                    })?;
            pid = new_pid;
            page = new_page;
            *npages += 1;
            debug!("allocated {name} page {pid}");
        }
        let slot = page.used();
        page.write_entry(slot, entry_size, entry);
        page.set_used(slot + 1);
        file.write_page(pid, &page)?;
        Ok((pid, slot))
    }

    /// Candidate pages via the tuple-signature scan.
    pub fn find_pages_tsig(&self, probe: &str) -> Result<Bits, RelationError> {
        tsig::find_pages_by_tsig(self, probe)
    }

    /// Candidate pages via the page-signature scan.
    pub fn find_pages_psig(&self, probe: &str) -> Result<Bits, RelationError> {
        psig::find_pages_by_psig(self, probe)
    }

    /// Candidate pages via bit-slice intersection.
    pub fn find_pages_bsig(&self, probe: &str) -> Result<Bits, RelationError> {
        bsig::find_pages_by_bsig(self, probe)
    }

    /// The i-th inserted tuple, read back from its data page.
    pub fn tuple_at(&self, idx: u64) -> Result<String, RelationError> {
        if idx >= self.params.ntuples {
            return Err(RelationError::Invalid(format!(
                "tuple index {idx} out of range"
            )));
        }
        let pid = (idx / self.params.tup_per_page as u64) as u32;
        let slot = (idx % self.params.tup_per_page as u64) as usize;
        let page = self.data.read_page(pid)?;
        String::from_utf8(page.entry(slot, self.params.tup_size).to_vec())
            .map_err(|_| RelationError::TupleFormat("stored tuple is not valid utf-8".into()))
    }

    /// All tuples stored on one data page, for candidate verification.
    pub fn tuples_on_page(&self, pid: u32) -> Result<Vec<String>, RelationError> {
        if pid >= self.params.data_pages {
            return Err(RelationError::Invalid(format!("no data page {pid}")));
        }
        let page = self.data.read_page(pid)?;
        let mut tuples = Vec::with_capacity(page.used());
        for slot in 0..page.used() {
            let t = String::from_utf8(page.entry(slot, self.params.tup_size).to_vec())
                .map_err(|_| RelationError::TupleFormat("stored tuple is not valid utf-8".into()))?;
            tuples.push(t);
        }
        Ok(tuples)
    }

    /// Stored signature of the i-th inserted tuple.
    pub fn tsig_entry(&self, idx: u64) -> Result<Bits, RelationError> {
        if idx >= self.params.ntsigs {
            return Err(RelationError::Invalid(format!(
                "tuple signature index {idx} out of range"
            )));
        }
        let tp = (idx / self.params.tsig_per_page as u64) as u32;
        let slot = (idx % self.params.tsig_per_page as u64) as usize;
        let page = self.tsig.read_page(tp)?;
        Ok(Bits::from_bytes(
            self.params.tm,
            page.entry(slot, self.params.tsig_size),
        ))
    }

    /// Stored signature of data page `pid`.
    pub fn psig_entry(&self, pid: u32) -> Result<Bits, RelationError> {
        if (pid as u64) >= self.params.npsigs {
            return Err(RelationError::Invalid(format!(
                "no page signature for page {pid}"
            )));
        }
        let pp = pid / self.params.psig_per_page as u32;
        let slot = pid as usize % self.params.psig_per_page;
        let page = self.psig.read_page(pp)?;
        Ok(Bits::from_bytes(
            self.params.pm,
            page.entry(slot, self.params.psig_size),
        ))
    }

    /// Bit-slice for page-signature bit position `i`.
    pub fn bsig_slice(&self, i: usize) -> Result<Bits, RelationError> {
        if i >= self.params.pm {
            return Err(RelationError::Invalid(format!(
                "no bit-slice for position {i}"
            )));
        }
        let (bp, slot) = bsig::slice_location(&self.params, i);
        let page = self.bsig.read_page(bp)?;
        Ok(Bits::from_bytes(
            self.params.bm,
            page.entry(slot, self.params.bsig_size),
        ))
    }

    /// Snapshot of static layout and dynamic counters.
    pub fn stats(&self) -> RelationStats {
        RelationStats {
            params: self.params.clone(),
        }
    }
}
