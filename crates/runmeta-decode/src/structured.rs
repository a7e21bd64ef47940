//! Coercers for values that carry an embedded encoding: JSON lists, JSON
//! maps, and `A@B` paired references.

use std::collections::BTreeMap;

use runmeta_core::types::{DatasetVersion, InputFile};
use runmeta_core::FlatSource;

use crate::diag;

/// `key = "[...json list of strings...]"`. Absent reads as `[]`; malformed
/// JSON reads as an empty list.
pub fn get_string_list<S: FlatSource + ?Sized>(src: &S, key: &str) -> Vec<String> {
    decode_string_list(src.get(key).unwrap_or("[]")).unwrap_or_else(|| {
        diag::fallback(key, "not a JSON list of strings");
        Vec::new()
    })
}

/// `key = "{...json map from string to string...}"`. Absent or malformed
/// reads as an empty map.
pub fn get_direct_string_map<S: FlatSource + ?Sized>(
    src: &S,
    key: &str,
) -> BTreeMap<String, String> {
    serde_json::from_str(src.get(key).unwrap_or("{}")).unwrap_or_else(|_| {
        diag::fallback(key, "not a JSON map of strings");
        BTreeMap::new()
    })
}

/// `key = "[\"file@version\", ...]"`. Output is positionally aligned with the
/// source list: an element without exactly one `@` leaves a default
/// `InputFile` in its slot instead of being dropped.
pub fn get_input_files<S: FlatSource + ?Sized>(src: &S, key: &str) -> Vec<InputFile> {
    decode_input_files(key, src.get(key).unwrap_or("[]"))
}

pub(crate) fn decode_input_files(key: &str, raw: &str) -> Vec<InputFile> {
    let Some(entries) = decode_string_list(raw) else {
        diag::fallback(key, "not a JSON list of strings");
        return Vec::new();
    };
    entries
        .iter()
        .map(|entry| {
            parse_input_file(entry).unwrap_or_else(|| {
                diag::fallback(key, "input file without exactly one '@'");
                InputFile::default()
            })
        })
        .collect()
}

pub(crate) fn decode_string_list(raw: &str) -> Option<Vec<String>> {
    serde_json::from_str(raw).ok()
}

/// Split `A@B`. Anything other than exactly one `@` is rejected.
pub fn split_pair(raw: &str) -> Option<(&str, &str)> {
    let mut parts = raw.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) => Some((a, b)),
        _ => None,
    }
}

pub fn parse_dataset_version(raw: &str) -> Option<DatasetVersion> {
    split_pair(raw).map(|(id, version)| DatasetVersion {
        id: id.into(),
        version: version.to_string(),
    })
}

pub fn parse_input_file(raw: &str) -> Option<InputFile> {
    split_pair(raw).map(|(filename, version)| InputFile {
        filename: filename.to_string(),
        version: version.to_string(),
    })
}
