use tracing::info;

use crate::forms::{SignInDraft, SignUpDraft};
use crate::model::Session;

/// Source of the signed-in session. Navigation only reads it and asks it to sign out.
pub trait AuthProvider {
    fn session(&self) -> Option<&Session>;

    fn is_signed_in(&self) -> bool {
        self.session().is_some()
    }

    fn sign_out(&mut self);
}

/// In-memory provider. Any non-empty credentials are accepted.
#[derive(Clone, Debug, Default)]
pub struct LocalAuth {
    session: Option<Session>,
    next_id: u64,
}

impl LocalAuth {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn signed_in(session: Session) -> Self {
        Self {
            session: Some(session),
            next_id: 0,
        }
    }

    fn allocate_id(&mut self) -> String {
        self.next_id += 1;
        format!("user-{}", self.next_id)
    }

    pub fn sign_in(&mut self, draft: &SignInDraft) -> &Session {
        let email = draft.email.trim().to_string();
        let session = Session {
            id: self.allocate_id(),
            name: name_from_email(&email),
            email,
        };
        info!(email = %session.email, "signed in");
        self.session.insert(session)
    }

    pub fn sign_up(&mut self, draft: &SignUpDraft) -> &Session {
        let session = Session {
            id: self.allocate_id(),
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
        };
        info!(email = %session.email, "account created");
        self.session.insert(session)
    }
}

impl AuthProvider for LocalAuth {
    fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    fn sign_out(&mut self) {
        self.session = None;
    }
}

/// Display name guessed from an address: "mary.ann_lee@x.io" -> "Mary Ann Lee".
#[must_use]
pub fn name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let cleaned: String = local
        .chars()
        .map(|c| if c.is_alphabetic() { c } else { ' ' })
        .collect();
    let words: Vec<String> = cleaned
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect();

    if words.is_empty() {
        "User".to_string()
    } else {
        words.join(" ")
    }
}
