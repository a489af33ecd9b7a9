//! Ledger for errors the scenarios swallow.
//!
//! Fetch and upload failures are recovered locally (empty id list, absent
//! id) so the load run keeps going, but each one is counted here and logged
//! so the run report stays honest about degraded data.

use log::warn;
use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};

/// The failure sites that recover silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwallowedKind {
    UserFetch,
    LegoSetFetch,
    LegoSetUpload,
    ListingUpload,
}

impl SwallowedKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwallowedKind::UserFetch => "user-fetch",
            SwallowedKind::LegoSetFetch => "legoset-fetch",
            SwallowedKind::LegoSetUpload => "legoset-upload",
            SwallowedKind::ListingUpload => "listing-upload",
        }
    }
}

impl Display for SwallowedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const KINDS: &[SwallowedKind] = &[
    SwallowedKind::UserFetch,
    SwallowedKind::LegoSetFetch,
    SwallowedKind::LegoSetUpload,
    SwallowedKind::ListingUpload,
];

static USER_FETCH: AtomicU64 = AtomicU64::new(0);
static LEGO_SET_FETCH: AtomicU64 = AtomicU64::new(0);
static LEGO_SET_UPLOAD: AtomicU64 = AtomicU64::new(0);
static LISTING_UPLOAD: AtomicU64 = AtomicU64::new(0);

fn counter(kind: SwallowedKind) -> &'static AtomicU64 {
    match kind {
        SwallowedKind::UserFetch => &USER_FETCH,
        SwallowedKind::LegoSetFetch => &LEGO_SET_FETCH,
        SwallowedKind::LegoSetUpload => &LEGO_SET_UPLOAD,
        SwallowedKind::ListingUpload => &LISTING_UPLOAD,
    }
}

/// Record an error the caller is about to swallow.
pub fn swallowed(kind: SwallowedKind, error: &dyn Display) {
    warn!("{}: {}", kind, error);
    counter(kind).fetch_add(1, Ordering::Relaxed);
}

/// Count recorded for one kind.
pub fn count(kind: SwallowedKind) -> u64 {
    counter(kind).load(Ordering::Relaxed)
}

/// All (kind, count) pairs, in declaration order.
pub fn snapshot() -> Vec<(SwallowedKind, u64)> {
    KINDS.iter().map(|&kind| (kind, count(kind))).collect()
}

/// Total across all kinds.
pub fn total() -> u64 {
    KINDS.iter().map(|&kind| count(kind)).sum()
}

/// Zero every counter.
pub fn reset() {
    for &kind in KINDS {
        counter(kind).store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Counters are process-global, so exercise them in one test to avoid
    // cross-test interference.
    #[test]
    fn test_ledger_counts_and_resets() {
        reset();
        assert_eq!(total(), 0);

        swallowed(SwallowedKind::UserFetch, &"connection refused");
        swallowed(SwallowedKind::UserFetch, &"connection refused");
        swallowed(SwallowedKind::LegoSetUpload, &"HTTP 500");

        assert_eq!(count(SwallowedKind::UserFetch), 2);
        assert_eq!(count(SwallowedKind::LegoSetUpload), 1);
        assert_eq!(count(SwallowedKind::LegoSetFetch), 0);
        assert_eq!(total(), 3);

        let snapshot = snapshot();
        assert_eq!(snapshot.len(), 4);
        assert!(snapshot.contains(&(SwallowedKind::UserFetch, 2)));

        reset();
        assert_eq!(total(), 0);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(SwallowedKind::UserFetch.as_str(), "user-fetch");
        assert_eq!(SwallowedKind::ListingUpload.to_string(), "listing-upload");
    }
}
