use serde::{Deserialize, Serialize};

use crate::entity::{EntityKind, Resource};
use crate::schema::{FieldKind, FieldSpec, Schema};
use crate::serde_util::{flag_as_int, flag_lenient, i64_lenient};

/// A scheduled consultation, in a room or online.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(deserialize_with = "i64_lenient")]
    pub id: i64,
    #[serde(deserialize_with = "i64_lenient")]
    pub assigned_to: i64,
    #[serde(deserialize_with = "i64_lenient")]
    pub assigned_by: i64,
    pub date: String,
    pub details: String,
    #[serde(deserialize_with = "flag_lenient", serialize_with = "flag_as_int")]
    pub online: bool,
    /// Room ID.
    #[serde(deserialize_with = "i64_lenient")]
    pub room: i64,
}

impl Resource for Appointment {
    const KIND: EntityKind = EntityKind::Appointment;

    fn id(&self) -> i64 {
        self.id
    }
}

pub(crate) const SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec::required("assignedTo", "Patient (ID)", FieldKind::Integer),
        FieldSpec::required("assignedBy", "Professional (ID)", FieldKind::Integer),
        FieldSpec::required("date", "Date", FieldKind::Date),
        FieldSpec::required("details", "Details", FieldKind::Text),
        FieldSpec::required("online", "Online", FieldKind::Flag).with_default("0"),
        FieldSpec::required("room", "Room (ID)", FieldKind::Integer),
    ],
};
