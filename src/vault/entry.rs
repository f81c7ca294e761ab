//! The credential entry model.
//!
//! The same struct travels through every layer; the `secret` field is
//! dual-representation.  It holds ciphertext only while the entry sits
//! inside (or crosses into) the persistence store — everywhere else,
//! including everything returned to callers and everything handed to
//! the exchange codec, it is plaintext.

use serde::{Deserialize, Serialize};

/// One website credential: site, username, and secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialEntry {
    /// Assigned by the store on first save; stable and immutable after.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Display and sort key, e.g. "github.com".
    pub website: String,

    /// Login name for the site.
    pub username: String,

    /// Plaintext outside the store, ciphertext inside it.
    pub secret: String,
}

impl CredentialEntry {
    /// Build a not-yet-persisted entry (no id).
    pub fn new(
        website: impl Into<String>,
        username: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            website: website.into(),
            username: username.into(),
            secret: secret.into(),
        }
    }
}
