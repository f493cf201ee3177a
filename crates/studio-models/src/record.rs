//! Generic record envelope and the mapping between typed fields and the
//! store's wire format.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::wire::RecordBody;
use crate::{RecordId, ReferenceCodec};

/// The three collections held by the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Courses,
    Instructors,
    Participants,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Courses => "courses",
            Collection::Instructors => "instructors",
            Collection::Participants => "participants",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One record: identifier, timestamps and typed fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<F> {
    pub id: RecordId,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub fields: F,
}

impl<F: RecordFields> Record<F> {
    /// Build a record from a wire body under a known identifier.
    pub fn from_body(id: RecordId, body: RecordBody<F::Wire>, codec: &ReferenceCodec) -> Self {
        Self {
            id,
            created_at: body.created_at,
            updated_at: body.updated_at,
            fields: F::from_wire(body.fields, codec),
        }
    }
}

/// Typed field set of one collection.
///
/// `codec` encodes references to course records; collections without
/// references ignore it.
pub trait RecordFields: Sized + Clone + Send + Sync + 'static {
    /// Raw field map as exchanged with the store.
    type Wire: Serialize + DeserializeOwned + Default + Send + Sync + 'static;

    const COLLECTION: Collection;

    fn from_wire(wire: Self::Wire, codec: &ReferenceCodec) -> Self;

    fn to_wire(&self, codec: &ReferenceCodec) -> Self::Wire;
}
