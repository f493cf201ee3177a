//! Record identifiers.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Length of a record identifier in hex characters.
pub const ID_LEN: usize = 24;

static ID_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([a-f0-9]{24})$").expect("static regex"));

/// Opaque identifier of a record in the store.
///
/// Identifiers assigned by the server are taken as given. Anything coming
/// from user input or a reference string goes through [`RecordId::parse`]
/// or [`RecordId::extract`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap a server-assigned identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parse a bare identifier: exactly 24 hex characters.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.len() == ID_LEN && s.chars().all(|c| c.is_ascii_hexdigit()) {
            Some(Self(s.to_string()))
        } else {
            None
        }
    }

    /// Extract the trailing 24-hex-character identifier from a reference.
    ///
    /// Only the suffix matters; the surrounding path structure is ignored.
    pub fn extract(reference: &str) -> Option<Self> {
        ID_SUFFIX
            .captures(reference)
            .and_then(|caps| caps.get(1))
            .map(|m| Self(m.as_str().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
