use sigfile::sig::tsig::{codeword, make_tuple_sig};
use sigfile::params::layout::compute_params;
use sigfile::types::relation_types::SigConfig;

fn params() -> sigfile::types::relation_types::RelationParams {
    compute_params(
        4096,
        &SigConfig {
            nattrs: 4,
            tk: 8,
            tm: 64,
            pm: 64,
            bm: 64,
        },
    )
    .unwrap()
}

#[test]
fn test_codeword_is_deterministic() {
    let a = codeword("green", 64, 8);
    let b = codeword("green", 64, 8);
    assert_eq!(a, b);
    assert_eq!(a.count_ones(), 8); // exactly k distinct positions
}

#[test]
fn test_codewords_differ_between_values() {
    let a = codeword("green", 64, 8);
    let b = codeword("yellow", 64, 8);
    assert_ne!(a, b);
}

#[test]
fn test_tuple_sig_superimposes_codewords() {
    let p = params();
    let vals: Vec<String> = ["red", "round", "ripe", "raw"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let sig = make_tuple_sig(&p, &vals);

    // every attribute codeword is contained in the combined signature
    for v in &vals {
        assert!(codeword(v, p.tm, p.tk).is_subset_of(&sig));
    }
}

#[test]
fn test_wildcards_contribute_nothing() {
    let p = params();
    let all_wild: Vec<String> = vec!["?".into(), "?".into(), "?".into(), "?".into()];
    assert!(make_tuple_sig(&p, &all_wild).is_zero());
}

#[test]
fn test_wildcard_monotonicity() {
    let p = params();
    let full: Vec<String> = vec!["a".into(), "b".into(), "c".into(), "d".into()];
    let sig_full = make_tuple_sig(&p, &full);

    // widening any one attribute to a wildcard can only drop bits
    for i in 0..full.len() {
        let mut wider = full.clone();
        wider[i] = "?".into();
        let sig_wider = make_tuple_sig(&p, &wider);
        assert!(sig_wider.is_subset_of(&sig_full));
    }
}

#[test]
fn test_self_probe_never_misses() {
    let p = params();
    let vals: Vec<String> = vec!["w".into(), "x".into(), "y".into(), "z".into()];
    let sig = make_tuple_sig(&p, &vals);

    // a probe naming any subset of the tuple's attributes is contained
    let probe: Vec<String> = vec!["?".into(), "x".into(), "?".into(), "z".into()];
    assert!(make_tuple_sig(&p, &probe).is_subset_of(&sig));
    assert!(make_tuple_sig(&p, &vals).is_subset_of(&sig));
}
