//! Bid payloads.

use rand::Rng;
use serde::Serialize;

/// A bid creation payload.
#[derive(Debug, Clone, Serialize)]
pub struct BidDraft {
    pub bidder_id: String,
    pub amount: f64,
}

/// Generate a bid that raises the current price by a random increment
/// in [1, 50], rounded to cents.
pub fn bid_draft(bidder_id: &str, current_price: f64) -> BidDraft {
    let mut rng = rand::thread_rng();
    let amount = current_price + rng.gen_range(1.0..=50.0);
    BidDraft {
        bidder_id: bidder_id.to_string(),
        amount: (amount * 100.0).round() / 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bid_raises_price() {
        for _ in 0..100 {
            let bid = bid_draft("u1", 100.0);
            assert!(bid.amount > 100.0);
            assert!(bid.amount <= 150.0);
        }
    }

    #[test]
    fn test_bid_rounded_to_cents() {
        let bid = bid_draft("u1", 10.0);
        let cents = bid.amount * 100.0;
        assert!((cents - cents.round()).abs() < 1e-6);
    }
}
