//! Synthetic request payloads.
//!
//! One module per marketplace entity. Generators draw from the fake crate
//! and never fail; drafts serialize to the wire shapes the service accepts.

mod bid;
mod comment;
mod lego_set;
mod listing;
mod user;

pub use bid::{bid_draft, BidDraft};
pub use comment::{comment_draft, CommentDraft};
pub use lego_set::{invented_lego_set, lego_set_draft, LegoSetDraft, LEGO_SET_NAME};
pub use listing::{listing_draft, ListingDraft, ListingStatus};
pub use user::{user_draft, UserDraft};
