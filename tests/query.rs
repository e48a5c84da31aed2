use sigfile::relation::Relation;
use sigfile::tuple;
use sigfile::types::relation_types::SigConfig;
use tempfile::TempDir;

fn wide_values(n: usize) -> Vec<String> {
    let mut vals = vec![format!("t{n}"), format!("grp{}", n % 3)];
    for i in 2..80 {
        vals.push(format!("v{i}"));
    }
    vals
}

/// 20 tuples over 3 data pages (7 per page).
fn build_relation(dir: &std::path::Path) -> Relation {
    let _ = env_logger::builder().is_test(true).try_init();
    let cfg = SigConfig {
        nattrs: 80,
        tk: 3,
        tm: 256,
        pm: 256,
        bm: 64,
    };
    let mut r = Relation::create(dir, &cfg).unwrap();
    for n in 0..20 {
        let vals = wide_values(n);
        let refs: Vec<&str> = vals.iter().map(|v| v.as_str()).collect();
        r.insert_values(&refs).unwrap();
    }
    assert_eq!(r.params.data_pages, 3);
    r
}

#[test]
fn test_no_false_negatives_on_any_matcher() {
    let tmp = TempDir::new().unwrap();
    let r = build_relation(&tmp.path().join("rel"));

    for idx in 0..r.params.ntuples {
        let stored = r.tuple_at(idx).unwrap();
        let probe = tuple::values(&stored).join(",");
        let owning = (idx / r.params.tup_per_page as u64) as usize;

        assert!(r.find_pages_tsig(&probe).unwrap().is_set(owning));
        assert!(r.find_pages_psig(&probe).unwrap().is_set(owning));
        assert!(r.find_pages_bsig(&probe).unwrap().is_set(owning));
    }
    r.close().unwrap();
}

#[test]
fn test_partial_probe_finds_owning_page() {
    let tmp = TempDir::new().unwrap();
    let r = build_relation(&tmp.path().join("rel"));

    // only the first attribute specified; the rest are wildcards
    let pages = r.find_pages_tsig("t12").unwrap();
    let owning = 12 / r.params.tup_per_page;
    assert!(pages.is_set(owning));

    // a candidate page really holds the probed tuple
    let tuples = r.tuples_on_page(owning as u32).unwrap();
    assert!(tuples
        .iter()
        .any(|t| tuple::values(t)[0] == "t12"));
    r.close().unwrap();
}

#[test]
fn test_psig_and_bsig_matchers_agree() {
    let tmp = TempDir::new().unwrap();
    let r = build_relation(&tmp.path().join("rel"));

    // the bit-slice index is the transpose of the page signatures, so the
    // two matchers must produce identical bitmaps
    for probe in ["t3", "?,grp1", "t7,grp1", "nosuchvalue", ""] {
        let by_psig = r.find_pages_psig(probe).unwrap();
        let by_bsig = r.find_pages_bsig(probe).unwrap();
        assert_eq!(by_psig, by_bsig, "matchers disagree on probe '{probe}'");
    }
    r.close().unwrap();
}

#[test]
fn test_matchers_agree_on_empty_relation() {
    let tmp = TempDir::new().unwrap();
    let cfg = SigConfig {
        nattrs: 4,
        tk: 4,
        tm: 16,
        pm: 16,
        bm: 100,
    };
    let r = Relation::create(tmp.path().join("rel"), &cfg).unwrap();

    // the pre-allocated first data page holds no tuples yet, so no probe
    // may report it as a candidate on any path
    for probe in ["", "A", "A,B,C,D"] {
        let by_tsig = r.find_pages_tsig(probe).unwrap();
        let by_psig = r.find_pages_psig(probe).unwrap();
        let by_bsig = r.find_pages_bsig(probe).unwrap();
        assert!(by_tsig.is_zero(), "tsig matched on empty relation");
        assert!(by_psig.is_zero(), "psig matched on empty relation");
        assert!(by_bsig.is_zero(), "bsig matched on empty relation");
        assert_eq!(by_psig, by_bsig);
    }
    r.close().unwrap();
}

#[test]
fn test_all_wildcard_probe_matches_every_page() {
    let tmp = TempDir::new().unwrap();
    let r = build_relation(&tmp.path().join("rel"));

    for pages in [
        r.find_pages_tsig("").unwrap(),
        r.find_pages_psig("").unwrap(),
        r.find_pages_bsig("").unwrap(),
    ] {
        for pid in 0..r.params.data_pages as usize {
            assert!(pages.is_set(pid));
        }
    }
    r.close().unwrap();
}
