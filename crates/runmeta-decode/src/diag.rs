//! Diagnostic hooks for silent fallbacks (starter).
//!
//! Decoding never reports errors, so these events are the only trace of a
//! malformed value. Compiled out unless the `tracing` feature is on.

#[cfg(feature = "tracing")]
pub(crate) fn fallback(key: &str, reason: &'static str) {
    tracing::debug!(%key, reason, "flat value fell back to default");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn fallback(_key: &str, _reason: &'static str) { /* no-op */
}

#[cfg(feature = "tracing")]
pub(crate) fn decoded(record: &'static str, keys: usize, runs: usize) {
    tracing::trace!(record, keys, runs, "decoded flat metadata");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn decoded(_record: &'static str, _keys: usize, _runs: usize) { /* no-op */
}
