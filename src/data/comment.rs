//! Comment payloads.

use rand::seq::SliceRandom;
use serde::Serialize;

/// Review templates; `{product}` is replaced with the item name.
const COMMENT_TEMPLATES: &[&str] = &[
    "I recently purchased the {product} and it was such a fun building experience!",
    "The {product} is amazing! It took me several hours to assemble.",
    "I was impressed by the detail and quality of the {product}.",
    "This {product} kept me entertained for hours.",
    "I love the {product}! It's the perfect mix of creativity and complexity.",
];

/// A comment creation payload.
#[derive(Debug, Clone, Serialize)]
pub struct CommentDraft {
    pub user_id: String,
    #[serde(rename = "legoset_id")]
    pub lego_set_id: String,
    pub text: String,
}

/// Generate a comment on the given item from the given user, with template
/// text mentioning the item by name.
pub fn comment_draft(user_id: &str, lego_set_id: &str, item_name: &str) -> CommentDraft {
    let mut rng = rand::thread_rng();
    let template = COMMENT_TEMPLATES
        .choose(&mut rng)
        .unwrap_or(&COMMENT_TEMPLATES[0]);
    CommentDraft {
        user_id: user_id.to_string(),
        lego_set_id: lego_set_id.to_string(),
        text: template.replace("{product}", item_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_mentions_item() {
        let draft = comment_draft("u1", "s1", "Castle Keep");
        assert!(draft.text.contains("Castle Keep"));
        assert!(!draft.text.contains("{product}"));
        assert_eq!(draft.user_id, "u1");
        assert_eq!(draft.lego_set_id, "s1");
    }
}
