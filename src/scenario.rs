//! Goose transactions for the marketplace load scenarios.
//!
//! Three flows: user registration, catalog-item creation, and listing
//! creation. Generator and selector steps only touch the per-user
//! [`ScenarioContext`]; fetch and upload helpers go through the crate's own
//! [`ApiClient`] out of band (their failures degrade silently, see
//! [`crate::observe`]), while the registration and listing POSTs ride the
//! goose request path so the engine measures them.

use goose::prelude::*;
use once_cell::sync::OnceCell;

use crate::client::ApiClient;
use crate::config::LoadConfig;
use crate::context::ScenarioContext;
use crate::data;
use crate::images;
use crate::observe::{self, SwallowedKind};

static CLIENT: OnceCell<ApiClient> = OnceCell::new();

/// Build the shared API client used by the out-of-band helpers. Must run
/// once before the attack starts.
pub fn init(config: &LoadConfig) {
    let _ = CLIENT.set(ApiClient::new(config));
}

fn api() -> &'static ApiClient {
    CLIENT
        .get()
        .expect("scenario::init must run before transactions")
}

/// The per-user context, created on first access.
fn context_mut(user: &mut GooseUser) -> &mut ScenarioContext {
    if user.get_session_data::<ScenarioContext>().is_none() {
        user.set_session_data(ScenarioContext::default());
    }
    user.get_session_data_unchecked_mut::<ScenarioContext>()
}

/// Stage a random registration payload.
pub async fn generate_user_data(user: &mut GooseUser) -> TransactionResult {
    let ctx = context_mut(user);
    ctx.user = Some(data::user_draft());
    Ok(())
}

/// POST the staged registration payload to `/user` (measured).
pub async fn register_user(user: &mut GooseUser) -> TransactionResult {
    let draft = context_mut(user)
        .user
        .clone()
        .unwrap_or_else(data::user_draft);

    let request_builder = user
        .get_request_builder(&GooseMethod::Post, "/user")?
        .json(&draft);
    let goose_request = GooseRequest::builder()
        .method(GooseMethod::Post)
        .set_request_builder(request_builder)
        .build();
    let _goose = user.request(goose_request).await?;
    Ok(())
}

/// Fetch every user id from the service into the context. Any failure
/// degrades to an empty list.
pub async fn fetch_all_users(user: &mut GooseUser) -> TransactionResult {
    let ids = match api().user_ids().await {
        Ok(ids) => ids,
        Err(err) => {
            observe::swallowed(SwallowedKind::UserFetch, &err);
            Vec::new()
        }
    };
    context_mut(user).store_user_ids(ids);
    Ok(())
}

/// Pop the next user id off the fetched list (LIFO).
pub async fn get_user_id(user: &mut GooseUser) -> TransactionResult {
    context_mut(user).pop_user_id();
    Ok(())
}

/// Stage a catalog-item payload owned by the selected user, if any.
pub async fn generate_lego_set_data(user: &mut GooseUser) -> TransactionResult {
    let ctx = context_mut(user);
    ctx.lego_set = Some(data::lego_set_draft(ctx.user_id.clone()));
    Ok(())
}

/// Upload the staged catalog item with its image attachments. The created
/// id lands in the context; failures are ledgered and the scenario
/// continues.
pub async fn create_lego_set(user: &mut GooseUser) -> TransactionResult {
    let draft = context_mut(user)
        .lego_set
        .clone()
        .unwrap_or_else(|| data::lego_set_draft(None));

    match api().create_lego_set(&draft, images::attachments()).await {
        Ok(id) => context_mut(user).lego_set_id = Some(id),
        Err(err) => observe::swallowed(SwallowedKind::LegoSetUpload, &err),
    }
    Ok(())
}

/// Fetch every catalog-item id into the context; failures degrade to an
/// empty list.
pub async fn fetch_all_lego_set_ids(user: &mut GooseUser) -> TransactionResult {
    let ids = match api().lego_set_ids().await {
        Ok(ids) => ids,
        Err(err) => {
            observe::swallowed(SwallowedKind::LegoSetFetch, &err);
            Vec::new()
        }
    };
    context_mut(user).store_lego_set_ids(ids);
    Ok(())
}

/// Select the first fetched catalog-item id (non-destructive).
pub async fn select_lego_set_id(user: &mut GooseUser) -> TransactionResult {
    context_mut(user).select_lego_set_id();
    Ok(())
}

/// Stage a random listing payload.
pub async fn generate_listing_data(user: &mut GooseUser) -> TransactionResult {
    let ctx = context_mut(user);
    ctx.listing = Some(data::listing_draft());
    Ok(())
}

/// POST the staged listing to `/auction/` (measured).
pub async fn create_listing(user: &mut GooseUser) -> TransactionResult {
    let draft = context_mut(user)
        .listing
        .clone()
        .unwrap_or_else(data::listing_draft);

    let request_builder = user
        .get_request_builder(&GooseMethod::Post, "/auction/")?
        .json(&draft);
    let goose_request = GooseRequest::builder()
        .method(GooseMethod::Post)
        .set_request_builder(request_builder)
        .build();
    let goose = user.request(goose_request).await?;
    if let Err(err) = goose.response {
        observe::swallowed(SwallowedKind::ListingUpload, &err);
    }
    Ok(())
}

/// The three scenario flows, ready to register on a `GooseAttack`.
pub fn scenarios() -> Vec<Scenario> {
    let registration = scenario!("UserRegistration")
        .register_transaction(transaction!(generate_user_data).set_name("generate user data"))
        .register_transaction(transaction!(register_user).set_name("POST /user"));

    let item_creation = scenario!("LegoSetCreation")
        .register_transaction(transaction!(fetch_all_users).set_name("fetch user ids"))
        .register_transaction(transaction!(get_user_id).set_name("pick user id"))
        .register_transaction(
            transaction!(generate_lego_set_data).set_name("generate lego set data"),
        )
        .register_transaction(transaction!(create_lego_set).set_name("POST /legoset/"));

    let listing_flow = scenario!("ListingFlow")
        .register_transaction(transaction!(fetch_all_lego_set_ids).set_name("fetch lego set ids"))
        .register_transaction(transaction!(select_lego_set_id).set_name("pick lego set id"))
        .register_transaction(transaction!(generate_listing_data).set_name("generate listing data"))
        .register_transaction(transaction!(create_listing).set_name("POST /auction/"));

    vec![registration, item_creation, listing_flow]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_scenarios_registered() {
        let scenarios = scenarios();
        assert_eq!(scenarios.len(), 3);

        let names: Vec<&str> = scenarios.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["UserRegistration", "LegoSetCreation", "ListingFlow"]
        );
    }
}
