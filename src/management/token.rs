use std::sync::Arc;

use tokio::sync::Mutex;

use crate::types::AccessToken;

/// Single-slot, process-lifetime holder for the access token.
///
/// The slot is written once after the client-credentials exchange and read by
/// every search. Clones share the same slot. There is no expiry check and no
/// refresh.
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    slot: Arc<Mutex<Option<AccessToken>>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: AccessToken) -> Self {
        TokenStore {
            slot: Arc::new(Mutex::new(Some(token))),
        }
    }

    pub async fn set(&self, token: AccessToken) {
        let mut lock = self.slot.lock().await;
        *lock = Some(token);
    }

    pub async fn is_set(&self) -> bool {
        self.slot.lock().await.is_some()
    }

    /// Returns the bearer string, or an empty string when no token was ever
    /// obtained. Requests made with it fail at the API.
    pub async fn bearer(&self) -> String {
        self.slot
            .lock()
            .await
            .as_ref()
            .map(|t| t.access_token.clone())
            .unwrap_or_default()
    }

    pub async fn current_token(&self) -> Option<AccessToken> {
        self.slot.lock().await.clone()
    }
}
