//! The flat key/value input and the seam decoders read it through.
//!
//! Producers can only emit string pairs, so everything structured arrives as
//! `key -> string`. `FlatSource` abstracts over the map type so that callers
//! holding a `HashMap` don't have to copy into a `BTreeMap` first, while
//! ordered maps get cheap prefix scans.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::ops::Bound;

use crate::error::{Error, Result};

/// Canonical owned flat input.
pub type FlatMap = BTreeMap<String, String>;

/// Read-only view over a flat string map.
pub trait FlatSource {
    fn get(&self, key: &str) -> Option<&str>;

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// All entries whose key starts with `prefix`, yielded as
    /// `(key-without-prefix, value)`. No order is promised.
    fn prefixed<'a>(&'a self, prefix: &'a str)
        -> Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: BuildHasher> FlatSource for HashMap<String, String, S> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }

    fn prefixed<'a>(
        &'a self,
        prefix: &'a str,
    ) -> Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a> {
        Box::new(
            self.iter()
                .filter_map(move |(k, v)| k.strip_prefix(prefix).map(|rest| (rest, v.as_str()))),
        )
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl FlatSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        BTreeMap::get(self, key).map(String::as_str)
    }

    fn prefixed<'a>(
        &'a self,
        prefix: &'a str,
    ) -> Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a> {
        // Keys sharing a prefix are contiguous in sort order.
        Box::new(
            self.range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
                .map_while(move |(k, v)| k.strip_prefix(prefix).map(|rest| (rest, v.as_str()))),
        )
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

/// Parse a JSON object whose values are all strings.
pub fn parse_json_object(text: &str) -> Result<FlatMap> {
    let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(text)?;
    let mut out = FlatMap::new();
    for (key, value) in raw {
        match value {
            serde_json::Value::String(s) => {
                out.insert(key, s);
            }
            _ => return Err(Error::NonStringValue { key }),
        }
    }
    Ok(out)
}

/// Parse `key=value` lines. The first `=` separates key from value, so values
/// may themselves contain `=`. Blank lines and `#` comments are skipped.
pub fn parse_key_value_lines(text: &str) -> Result<FlatMap> {
    let mut out = FlatMap::new();
    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (key, value) = line
            .split_once('=')
            .ok_or(Error::MalformedLine { line: idx + 1 })?;
        out.insert(key.to_string(), value.to_string());
    }
    Ok(out)
}
