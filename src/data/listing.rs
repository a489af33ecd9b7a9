//! Listing (auction) payloads.

use chrono::{Duration, SecondsFormat, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Furthest a close date may sit in the future, in seconds.
const MAX_CLOSE_AHEAD_SECS: i64 = 30 * 24 * 60 * 60;

/// Listing lifecycle states the service understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Open,
    Closed,
    Pending,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Open => "open",
            ListingStatus::Closed => "closed",
            ListingStatus::Pending => "pending",
        }
    }
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const STATUSES: &[ListingStatus] = &[
    ListingStatus::Open,
    ListingStatus::Closed,
    ListingStatus::Pending,
];

/// A listing creation payload.
#[derive(Debug, Clone, Serialize)]
pub struct ListingDraft {
    #[serde(rename = "legoset_id")]
    pub lego_set_id: String,
    pub seller_id: String,
    /// Decimal string with two places, e.g. `"124.50"`.
    pub base_price: String,
    /// RFC 3339 timestamp within the next 30 days.
    pub close_date: String,
    pub status: ListingStatus,
}

/// Generate a listing payload: random item and seller references, a base
/// price in [10, 500], a close date within 30 days, and a status drawn
/// uniformly from the known states.
pub fn listing_draft() -> ListingDraft {
    let mut rng = rand::thread_rng();
    let close_date = Utc::now() + Duration::seconds(rng.gen_range(0..MAX_CLOSE_AHEAD_SECS));
    ListingDraft {
        lego_set_id: rng.gen_range(1..=100).to_string(),
        seller_id: rng.gen_range(1..=50).to_string(),
        base_price: format!("{:.2}", rng.gen_range(10.0..=500.0)),
        close_date: close_date.to_rfc3339_opts(SecondsFormat::Millis, true),
        status: *STATUSES.choose(&mut rng).unwrap_or(&ListingStatus::Open),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_listing_draft_price_range() {
        for _ in 0..200 {
            let draft = listing_draft();
            let price: f64 = draft.base_price.parse().expect("price should be decimal");
            assert!((10.0..=500.0).contains(&price));
            let (_, cents) = draft.base_price.split_once('.').expect("two places");
            assert_eq!(cents.len(), 2);
        }
    }

    #[test]
    fn test_listing_draft_close_date_bounds() {
        let before = Utc::now();
        let draft = listing_draft();
        let close = DateTime::parse_from_rfc3339(&draft.close_date)
            .expect("close_date should be RFC 3339");
        let ahead = close.signed_duration_since(before);
        assert!(ahead >= Duration::zero());
        assert!(ahead <= Duration::seconds(MAX_CLOSE_AHEAD_SECS));
    }

    #[test]
    fn test_listing_draft_status_known() {
        for _ in 0..50 {
            let draft = listing_draft();
            assert!(matches!(
                draft.status,
                ListingStatus::Open | ListingStatus::Closed | ListingStatus::Pending
            ));
        }
    }

    #[test]
    fn test_listing_draft_id_ranges() {
        for _ in 0..200 {
            let draft = listing_draft();
            let item: u32 = draft.lego_set_id.parse().unwrap();
            let seller: u32 = draft.seller_id.parse().unwrap();
            assert!((1..=100).contains(&item));
            assert!((1..=50).contains(&seller));
        }
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ListingStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
    }
}
