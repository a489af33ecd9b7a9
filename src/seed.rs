//! Database seeding through the public REST API.
//!
//! Recreates the marketplace's reference data shape: registered users,
//! catalog items with image uploads and probabilistic ownership, template
//! comments, and open listings with escalating bids. Failures are counted
//! per phase and never abort the run.

use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;
use log::info;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::client::ApiClient;
use crate::config::SeedProfile;
use crate::data::{self, ListingStatus};
use crate::images::ImageSet;

/// Outcome counts for one seeding run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub user_failures: usize,
    pub lego_sets: usize,
    pub lego_set_failures: usize,
    pub comments: usize,
    pub comment_failures: usize,
    pub listings: usize,
    pub listing_failures: usize,
    pub bids: usize,
    pub bid_failures: usize,
}

struct CreatedSet {
    id: String,
    name: String,
    owner_id: Option<String>,
}

/// Seed the target service. Phases run in dependency order: users first,
/// then catalog items referencing them, then comments and listings
/// referencing both.
pub async fn run(client: &ApiClient, images: &ImageSet, profile: &SeedProfile) -> SeedSummary {
    let mut summary = SeedSummary::default();

    info!("seeding {} users", profile.users);
    let user_ids = seed_users(client, profile, &mut summary).await;

    info!("seeding {} lego sets", profile.lego_sets);
    let sets = seed_lego_sets(client, images, profile, &user_ids, &mut summary).await;

    info!("seeding comments");
    seed_comments(client, profile, &user_ids, &sets, &mut summary).await;

    info!("seeding listings and bids");
    seed_listings(client, profile, &user_ids, &sets, &mut summary).await;

    summary
}

/// Register users with bounded concurrency; returns the created ids.
async fn seed_users(
    client: &ApiClient,
    profile: &SeedProfile,
    summary: &mut SeedSummary,
) -> Vec<String> {
    let bar = ProgressBar::new(profile.users as u64);
    let results: Vec<Result<String, _>> = stream::iter(0..profile.users)
        .map(|_| {
            let bar = bar.clone();
            async move {
                let result = client.create_user(&data::user_draft()).await;
                bar.inc(1);
                result
            }
        })
        .buffer_unordered(profile.concurrency)
        .collect()
        .await;
    bar.finish_and_clear();

    let mut ids = Vec::with_capacity(results.len());
    for result in results {
        match result {
            Ok(id) => ids.push(id),
            Err(_) => summary.user_failures += 1,
        }
    }
    summary.users = ids.len();
    ids
}

/// Upload catalog items, each owned by a random user with the configured
/// probability and carrying one to three image attachments.
async fn seed_lego_sets(
    client: &ApiClient,
    images: &ImageSet,
    profile: &SeedProfile,
    user_ids: &[String],
    summary: &mut SeedSummary,
) -> Vec<CreatedSet> {
    let bar = ProgressBar::new(profile.lego_sets as u64);
    let mut sets = Vec::new();

    for _ in 0..profile.lego_sets {
        let owner_id = {
            let mut rng = rand::thread_rng();
            if rng.gen_bool(profile.owner_probability) {
                user_ids.choose(&mut rng).cloned()
            } else {
                None
            }
        };
        let draft = data::invented_lego_set(owner_id.clone());
        let attachment_count = rand::thread_rng().gen_range(1..=3);

        match client
            .create_lego_set(&draft, images.first(attachment_count))
            .await
        {
            Ok(id) => sets.push(CreatedSet {
                id,
                name: draft.name,
                owner_id,
            }),
            Err(_) => summary.lego_set_failures += 1,
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    summary.lego_sets = sets.len();
    sets
}

/// Post up to `max_comments_per_set` template comments per catalog item.
async fn seed_comments(
    client: &ApiClient,
    profile: &SeedProfile,
    user_ids: &[String],
    sets: &[CreatedSet],
    summary: &mut SeedSummary,
) {
    if user_ids.is_empty() {
        return;
    }

    let mut drafts = Vec::new();
    {
        let mut rng = rand::thread_rng();
        for set in sets {
            for _ in 0..rng.gen_range(0..=profile.max_comments_per_set) {
                if let Some(user_id) = user_ids.choose(&mut rng) {
                    drafts.push(data::comment_draft(user_id, &set.id, &set.name));
                }
            }
        }
    }

    let bar = ProgressBar::new(drafts.len() as u64);
    let results: Vec<Result<(), _>> = stream::iter(drafts)
        .map(|draft| {
            let bar = bar.clone();
            async move {
                let result = client.create_comment(&draft).await;
                bar.inc(1);
                result
            }
        })
        .buffer_unordered(profile.concurrency)
        .collect()
        .await;
    bar.finish_and_clear();

    for result in results {
        match result {
            Ok(()) => summary.comments += 1,
            Err(_) => summary.comment_failures += 1,
        }
    }
}

/// Open listings for a share of catalog items, each with an escalating
/// bid ladder. Bids depend on the previous price, so each listing's bids
/// run in order.
async fn seed_listings(
    client: &ApiClient,
    profile: &SeedProfile,
    user_ids: &[String],
    sets: &[CreatedSet],
    summary: &mut SeedSummary,
) {
    for set in sets {
        let (listed, seller_id, bid_count) = {
            let mut rng = rand::thread_rng();
            let listed = rng.gen_bool(profile.listing_probability);
            let seller_id = set
                .owner_id
                .clone()
                .or_else(|| user_ids.choose(&mut rng).cloned());
            let bid_count = rng.gen_range(0..=profile.max_bids_per_listing);
            (listed, seller_id, bid_count)
        };
        let Some(seller_id) = seller_id else {
            continue;
        };
        if !listed {
            continue;
        }

        let mut draft = data::listing_draft();
        draft.lego_set_id = set.id.clone();
        draft.seller_id = seller_id;
        draft.status = ListingStatus::Open;
        let mut current_price: f64 = draft.base_price.parse().unwrap_or(10.0);

        let listing_id = match client.create_listing(&draft).await {
            Ok(id) => id,
            Err(_) => {
                summary.listing_failures += 1;
                continue;
            }
        };
        summary.listings += 1;

        for _ in 0..bid_count {
            let bidder = {
                let mut rng = rand::thread_rng();
                user_ids.choose(&mut rng).cloned()
            };
            let Some(bidder) = bidder else {
                break;
            };
            let bid = data::bid_draft(&bidder, current_price);
            match client.create_bid(&listing_id, &bid).await {
                Ok(()) => {
                    current_price = bid.amount;
                    summary.bids += 1;
                }
                Err(_) => summary.bid_failures += 1,
            }
        }
    }
}
