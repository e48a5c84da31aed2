use crate::consts::relation_consts::{
    FIELD_PAD, FIELD_SEP, FIELD_WIDTH_FIRST, FIELD_WIDTH_REST, FIELD_WIDTH_SECOND, WILDCARD,
};
use crate::errors::relation_error::RelationError;
use crate::params::layout::tuple_size;

/// A value starting with '?' contributes no codeword and matches anything.
pub fn is_wildcard(value: &str) -> bool {
    value.starts_with(WILDCARD)
}

/// Fixed field width of attribute `i` in an `nattrs`-attribute tuple.
pub fn field_width(i: usize, _nattrs: usize) -> usize {
    match i {
        0 => FIELD_WIDTH_FIRST,
        1 => FIELD_WIDTH_SECOND,
        _ => FIELD_WIDTH_REST,
    }
}

/// Encode attribute values into the relation's fixed-width tuple string:
/// comma-separated fields, each right-padded with spaces to its width.
pub fn encode(nattrs: usize, values: &[&str]) -> Result<String, RelationError> {
    if values.len() != nattrs {
        return Err(RelationError::TupleFormat(format!(
            "expected {} values, got {}",
            nattrs,
            values.len()
        )));
    }

    let mut out = String::with_capacity(tuple_size(nattrs));
    for (i, value) in values.iter().enumerate() {
        let width = field_width(i, nattrs);
        if value.len() > width {
            return Err(RelationError::TupleFormat(format!(
                "value '{value}' exceeds field width {width}"
            )));
        }
        if value.contains(FIELD_SEP) {
            return Err(RelationError::TupleFormat(format!(
                "value '{value}' contains separator"
            )));
        }
        if value.ends_with(FIELD_PAD) {
            return Err(RelationError::TupleFormat(format!(
                "value '{value}' ends with pad character"
            )));
        }
        if i > 0 {
            out.push(FIELD_SEP);
        }
        out.push_str(value);
        for _ in value.len()..width {
            out.push(FIELD_PAD);
        }
    }

    debug_assert_eq!(out.len(), tuple_size(nattrs));
    Ok(out)
}

/// Split a stored tuple back into its attribute values, trimming the
/// right-side padding.
pub fn values(tuple: &str) -> Vec<String> {
    tuple
        .split(FIELD_SEP)
        .map(|v| v.trim_end_matches(FIELD_PAD).to_string())
        .collect()
}

/// Split a probe string, padding unspecified trailing attributes with
/// wildcards so a partial probe matches on what it names.
pub fn probe_values(nattrs: usize, probe: &str) -> Vec<String> {
    let mut vals: Vec<String> = if probe.is_empty() {
        Vec::new()
    } else {
        probe
            .split(FIELD_SEP)
            .map(|v| v.trim_end_matches(FIELD_PAD).to_string())
            .collect()
    };
    while vals.len() < nattrs {
        vals.push(WILDCARD.to_string());
    }
    vals.truncate(nattrs);
    vals
}
