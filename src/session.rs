use std::sync::{PoisonError, RwLock};

/// Holds the bearer token for the current browsing session. One session per
/// client; there is no cross-session coordination.
#[derive(Debug, Default)]
pub struct Session {
    token: RwLock<Option<String>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_token(&self, token: &str) {
        let mut slot = self
            .token
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = Some(token.to_string());
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Forced sign-out. Called on any 401 response and on explicit logout.
    pub fn clear(&self) {
        let mut slot = self
            .token
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
