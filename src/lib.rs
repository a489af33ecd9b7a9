//! Brickload - load-test scenarios for the brick marketplace API.
//!
//! The marketplace stores users, catalog items ("lego sets") with image
//! attachments, comments, and auction-style listings. Brickload drives it
//! two ways:
//!
//! - `scenario`: goose transactions covering user registration,
//!   catalog-item creation (multipart upload), and listing creation. Steps
//!   pass generated payloads and fetched ids through a per-virtual-user
//!   [`context::ScenarioContext`].
//! - `seed`: one-shot population of the service with reference data
//!   through the same REST API.
//!
//! Id fetches and uploads that fail are recovered locally (empty lists,
//! absent ids) so a degraded target never stalls a virtual user; every
//! such recovery is counted in `observe` and surfaced in the run report.

pub mod cli;
pub mod client;
pub mod config;
pub mod context;
pub mod data;
pub mod images;
pub mod observe;
pub mod report;
pub mod scenario;
pub mod seed;

pub use client::{ApiClient, ApiError};
pub use config::{LoadConfig, SeedProfile};
pub use context::ScenarioContext;
pub use data::{LegoSetDraft, ListingDraft, ListingStatus, UserDraft};
pub use observe::SwallowedKind;
pub use seed::SeedSummary;
