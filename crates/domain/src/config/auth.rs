use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// HTTP Basic credentials accepted by the API, username to password.
/// An empty table leaves the API unauthenticated.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub credentials: HashMap<String, String>,
}

impl AuthConfig {
    pub fn is_enabled(&self) -> bool {
        !self.credentials.is_empty()
    }
}
