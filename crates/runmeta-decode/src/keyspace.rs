//! Prefix grouping: `prefix<NAME> = value` → `NAME → decoded value`.
//!
//! The discriminator is whatever follows the prefix, verbatim (it may be
//! empty, and may contain further dots). Output maps are ordered, so the
//! source map's iteration order never leaks into results.

use std::collections::BTreeMap;

use runmeta_core::types::{DatasetVersion, InputFile};
use runmeta_core::FlatSource;

use crate::diag;
use crate::structured::{decode_input_files, decode_string_list, parse_dataset_version};

/// Single pass over `prefix`-ed keys, decoding each value with `decode`.
/// Entries for which `decode` returns `None` are dropped.
pub fn group_by_suffix<S, T, F>(src: &S, prefix: &str, mut decode: F) -> BTreeMap<String, T>
where
    S: FlatSource + ?Sized,
    F: FnMut(&str, &str) -> Option<T>,
{
    src.prefixed(prefix)
        .filter_map(|(name, value)| decode(name, value).map(|v| (name.to_string(), v)))
        .collect()
}

/// `prefix<NAME> = scalar`, e.g. labels, summary, parameters.
pub fn group_strings<S: FlatSource + ?Sized>(src: &S, prefix: &str) -> BTreeMap<String, String> {
    group_by_suffix(src, prefix, |_, value| Some(value.to_string()))
}

/// `prefix<NAME> = JSON list of strings`. Malformed entries are dropped.
pub fn group_string_lists<S: FlatSource + ?Sized>(
    src: &S,
    prefix: &str,
) -> BTreeMap<String, Vec<String>> {
    group_by_suffix(src, prefix, |name, value| {
        let decoded = decode_string_list(value);
        if decoded.is_none() {
            diag::fallback(&format!("{prefix}{name}"), "not a JSON list of strings; dropped");
        }
        decoded
    })
}

/// `prefix<NAME> = "ID@VERSION"`. Values without exactly one `@` are dropped.
pub fn group_dataset_versions<S: FlatSource + ?Sized>(
    src: &S,
    prefix: &str,
) -> BTreeMap<String, DatasetVersion> {
    group_by_suffix(src, prefix, |name, value| {
        let decoded = parse_dataset_version(value);
        if decoded.is_none() {
            diag::fallback(&format!("{prefix}{name}"), "not an ID@VERSION pair; dropped");
        }
        decoded
    })
}

/// `prefix<NAME> = JSON list of "file@version"`. Unlike the other list
/// groupings, a malformed entry is kept with an empty list.
pub fn group_input_files<S: FlatSource + ?Sized>(
    src: &S,
    prefix: &str,
) -> BTreeMap<String, Vec<InputFile>> {
    group_by_suffix(src, prefix, |name, value| {
        Some(decode_input_files(&format!("{prefix}{name}"), value))
    })
}
