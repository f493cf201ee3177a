//! Reference encoding used by the record store.
//!
//! The store links records through URL-shaped strings such as
//! `https://<host>/rest/apps/{appId}/records/{recordId}`. Only the trailing
//! identifier is significant. Multi-valued references are comma separated.

use tracing::warn;

use crate::RecordId;

/// Split a reference field into its trimmed pieces.
///
/// A field without a comma is a single piece. Empty pieces are kept so
/// callers see one lookup attempt per segment.
pub fn split_references(field: &str) -> Vec<&str> {
    if field.contains(',') {
        field.split(',').map(str::trim).collect()
    } else {
        vec![field.trim()]
    }
}

/// Converts between typed identifiers and the store's reference strings
/// for one target collection.
#[derive(Debug, Clone)]
pub struct ReferenceCodec {
    base_url: String,
    app_id: String,
}

impl ReferenceCodec {
    pub fn new(base_url: &str, app_id: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            app_id: app_id.to_string(),
        }
    }

    /// Build the reference URL for a record of the target collection.
    pub fn encode(&self, id: &RecordId) -> String {
        format!("{}/apps/{}/records/{}", self.base_url, self.app_id, id)
    }

    /// Encode several references as one comma-separated field.
    ///
    /// Returns `None` for an empty list so the field is left out entirely.
    pub fn encode_many(&self, ids: &[RecordId]) -> Option<String> {
        if ids.is_empty() {
            return None;
        }
        Some(
            ids.iter()
                .map(|id| self.encode(id))
                .collect::<Vec<_>>()
                .join(","),
        )
    }

    /// Decode a single-valued reference field. Surrounding whitespace is
    /// ignored, as it is for each segment of a multi-valued field.
    pub fn decode(&self, field: Option<&str>) -> Option<RecordId> {
        let field = field?.trim();
        if field.is_empty() {
            return None;
        }
        let id = RecordId::extract(field);
        if id.is_none() {
            warn!(reference = %field, "Dropping malformed reference");
        }
        id
    }

    /// Decode a multi-valued reference field, keeping segment order and
    /// dropping segments without an identifier.
    pub fn decode_many(&self, field: Option<&str>) -> Vec<RecordId> {
        let Some(field) = field else {
            return Vec::new();
        };
        if field.trim().is_empty() {
            return Vec::new();
        }
        split_references(field)
            .into_iter()
            .filter_map(|piece| {
                let id = RecordId::extract(piece);
                if id.is_none() {
                    warn!(reference = %piece, "Dropping malformed reference");
                }
                id
            })
            .collect()
    }
}
