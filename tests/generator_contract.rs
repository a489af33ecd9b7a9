//! Contract tests for the synthetic payload generators.
//!
//! These pin the properties downstream scenario steps and the target
//! service rely on: field presence, value ranges, and timestamp bounds.

use chrono::{DateTime, Duration, Utc};

use brickload::data::{lego_set_draft, listing_draft, user_draft, ListingStatus};
use brickload::ScenarioContext;

#[test]
fn test_user_draft_always_complete() {
    for _ in 0..100 {
        let draft = user_draft();
        assert!(!draft.nickname.is_empty());
        assert!(!draft.name.is_empty());
        assert_eq!(draft.password.len(), 12);
    }
}

#[test]
fn test_listing_draft_within_contract() {
    for _ in 0..100 {
        let draft = listing_draft();

        let price: f64 = draft
            .base_price
            .parse()
            .expect("base_price should parse as a decimal");
        assert!((10.0..=500.0).contains(&price));

        let close = DateTime::parse_from_rfc3339(&draft.close_date)
            .expect("close_date should be RFC 3339");
        let ahead = close.signed_duration_since(Utc::now());
        assert!(ahead <= Duration::days(30));
        assert!(ahead > Duration::days(-1));

        assert!(matches!(
            draft.status,
            ListingStatus::Open | ListingStatus::Closed | ListingStatus::Pending
        ));
    }
}

#[test]
fn test_lego_set_draft_matches_upload_schema() {
    let draft = lego_set_draft(Some("owner-1".to_string()));
    assert_eq!(draft.name, "legoset");
    assert_eq!(draft.owner_id.as_deref(), Some("owner-1"));
    let code: u32 = draft.code_number.parse().unwrap();
    assert!((1..=10_000).contains(&code));
}

#[test]
fn test_user_id_selection_exhausts_like_a_stack() {
    let mut ctx = ScenarioContext::default();
    ctx.store_user_ids(vec!["1".into(), "2".into(), "3".into()]);
    assert_eq!(ctx.user_count, 3);

    assert_eq!(ctx.pop_user_id().as_deref(), Some("3"));
    assert_eq!(ctx.pop_user_id().as_deref(), Some("2"));
    assert_eq!(ctx.pop_user_id().as_deref(), Some("1"));
    assert_eq!(ctx.pop_user_id(), None);
}

#[test]
fn test_lego_set_id_selection_is_stable() {
    let mut ctx = ScenarioContext::default();
    ctx.store_lego_set_ids(vec!["7".into(), "8".into(), "9".into()]);

    for _ in 0..10 {
        assert_eq!(ctx.select_lego_set_id().as_deref(), Some("7"));
    }
}
