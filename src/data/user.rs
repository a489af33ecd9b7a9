//! User registration payloads.

use fake::faker::internet::en::{Password, Username};
use fake::faker::name::en::Name;
use fake::Fake;
use serde::Serialize;

/// Password length the registration form expects.
const PASSWORD_LEN: usize = 12;

/// A user registration payload.
#[derive(Debug, Clone, Serialize)]
pub struct UserDraft {
    pub nickname: String,
    pub name: String,
    pub password: String,
}

/// Generate a registration payload with a random username, full name,
/// and 12-character password.
pub fn user_draft() -> UserDraft {
    UserDraft {
        nickname: Username().fake(),
        name: Name().fake(),
        password: Password(PASSWORD_LEN..PASSWORD_LEN + 1).fake(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_draft_fields_set() {
        let draft = user_draft();
        assert!(!draft.nickname.is_empty());
        assert!(!draft.name.is_empty());
        assert_eq!(draft.password.len(), 12);
    }

    #[test]
    fn test_user_draft_repeated_calls() {
        for _ in 0..100 {
            let draft = user_draft();
            assert_eq!(draft.password.len(), 12);
        }
    }
}
