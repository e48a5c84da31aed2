use sigfile::errors::relation_error::RelationError;
use sigfile::relation::Relation;
use sigfile::types::relation_types::SigConfig;
use tempfile::TempDir;

#[test]
fn test_create_computes_layout() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("rel");
    let cfg = SigConfig {
        nattrs: 4,
        tk: 4,
        tm: 16,
        pm: 16,
        bm: 100,
    };
    let r = Relation::create(&dir, &cfg).unwrap();

    let p = &r.params;
    assert_eq!(p.tup_size, 42); // 28 + 7*(4-2)
    assert_eq!(p.tup_per_page, (4096 - 8) / 42);
    assert_eq!(p.tm, 16);
    assert_eq!(p.tsig_size, 2);
    assert_eq!(p.pm, 16);
    assert_eq!(p.psig_size, 2);
    assert_eq!(p.bm, 104); // 100 rounded up to a byte multiple
    assert_eq!(p.bsig_size, 13);
    assert_eq!(p.bsig_per_page, (4096 - 8) / 13);
    assert_eq!(p.bsig_pages, 1); // 16 slices fit one page

    // data, tsig and psig start with one empty page each
    assert_eq!(p.data_pages, 1);
    assert_eq!(p.tsig_pages, 1);
    assert_eq!(p.psig_pages, 1);
    assert_eq!(p.ntuples, 0);

    // every pre-allocated slice starts all-zero
    for i in 0..p.pm {
        assert!(r.bsig_slice(i).unwrap().is_zero());
    }

    r.close().unwrap();
    assert!(Relation::exists(&dir));
}

#[test]
fn test_create_rejects_oversized_page_signature() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("rel");
    // 40000 bits = 5000 bytes per signature: zero fit per 4 KB page
    let cfg = SigConfig {
        nattrs: 4,
        tk: 4,
        tm: 16,
        pm: 40000,
        bm: 100,
    };
    let err = Relation::create(&dir, &cfg).unwrap_err();
    assert!(matches!(err, RelationError::CapacityViolation(_)));

    // creation failed before any file was written
    assert!(!dir.exists());
    assert!(!Relation::exists(&dir));
}

#[test]
fn test_create_rejects_oversized_bit_slice() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("rel");
    // a 2500-byte slice fits once per page, capacity 1 < 2
    let cfg = SigConfig {
        nattrs: 4,
        tk: 4,
        tm: 16,
        pm: 16,
        bm: 20000,
    };
    let err = Relation::create(&dir, &cfg).unwrap_err();
    assert!(matches!(err, RelationError::CapacityViolation(_)));
    assert!(!dir.exists());
}

#[test]
fn test_create_rejects_duplicate() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("rel");
    let cfg = SigConfig {
        nattrs: 2,
        tk: 2,
        tm: 64,
        pm: 64,
        bm: 64,
    };
    Relation::create(&dir, &cfg).unwrap().close().unwrap();
    let err = Relation::create(&dir, &cfg).unwrap_err();
    assert!(matches!(err, RelationError::Invalid(_)));
}

#[test]
fn test_minimal_two_attribute_layout() {
    let tmp = TempDir::new().unwrap();
    let cfg = SigConfig {
        nattrs: 2,
        tk: 2,
        tm: 60, // rounds up to 64
        pm: 64,
        bm: 64,
    };
    let r = Relation::create(tmp.path().join("rel"), &cfg).unwrap();
    assert_eq!(r.params.tup_size, 28);
    assert_eq!(r.params.tm, 64);
    assert_eq!(r.params.tsig_size, 8);
    r.close().unwrap();
}
