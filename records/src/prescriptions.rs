use serde::{Deserialize, Serialize};

use crate::entity::{EntityKind, Resource};
use crate::schema::{FieldKind, FieldSpec, Schema};
use crate::serde_util::i64_lenient;

/// A prescription written by one user for another.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    #[serde(deserialize_with = "i64_lenient")]
    pub id: i64,
    /// Patient user ID.
    #[serde(deserialize_with = "i64_lenient")]
    pub assigned_to: i64,
    /// Prescribing professional user ID.
    #[serde(deserialize_with = "i64_lenient")]
    pub assigned_by: i64,
    pub details: String,
}

impl Resource for Prescription {
    const KIND: EntityKind = EntityKind::Prescription;

    fn id(&self) -> i64 {
        self.id
    }
}

pub(crate) const SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec::required("assignedTo", "Patient (ID)", FieldKind::Integer),
        FieldSpec::required("assignedBy", "Professional (ID)", FieldKind::Integer),
        FieldSpec::required("details", "Details", FieldKind::Text),
    ],
};
