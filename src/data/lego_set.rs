//! Catalog-item (lego set) payloads.

use fake::faker::company::en::CatchPhrase;
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use rand::Rng;
use serde::Serialize;

/// Fixed item name used by the load scenarios.
pub const LEGO_SET_NAME: &str = "legoset";

/// A catalog-item creation payload. Sent as multipart form fields, with
/// image attachments alongside.
#[derive(Debug, Clone, Serialize)]
pub struct LegoSetDraft {
    pub name: String,
    pub code_number: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
}

/// Generate the scenario payload: constant name, numeric code in 1..=10000,
/// commerce-style description. The owner id comes from a previously
/// selected user, when one exists.
pub fn lego_set_draft(owner_id: Option<String>) -> LegoSetDraft {
    let mut rng = rand::thread_rng();
    LegoSetDraft {
        name: LEGO_SET_NAME.to_string(),
        code_number: rng.gen_range(1..=10_000).to_string(),
        description: Sentence(8..16).fake(),
        owner_id,
    }
}

/// Generate a catalog item the way the production seeder shapes them:
/// catch-phrase name and a `NNNN-N` code number.
pub fn invented_lego_set(owner_id: Option<String>) -> LegoSetDraft {
    let mut rng = rand::thread_rng();
    LegoSetDraft {
        name: CatchPhrase().fake(),
        code_number: format!("{}-{}", rng.gen_range(1000..=9999), rng.gen_range(1..=9)),
        description: Sentence(8..16).fake(),
        owner_id,
    }
}
