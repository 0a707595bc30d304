use serde::{Deserialize, Serialize};

use crate::entity::{EntityKind, Resource};
use crate::schema::{Choice, FieldKind, FieldSpec, Schema};
use crate::serde_util::i64_lenient;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomKind {
    #[default]
    AppointmentRoom,
    Hospitalization,
}

/// A physical room: consultation room or hospitalization ward.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    #[serde(deserialize_with = "i64_lenient")]
    pub id: i64,
    /// Room number painted on the door, distinct from `id`.
    #[serde(deserialize_with = "i64_lenient")]
    pub number: i64,
    #[serde(rename = "type")]
    pub kind: RoomKind,
    #[serde(deserialize_with = "i64_lenient")]
    pub capacity: i64,
}

impl Resource for Room {
    const KIND: EntityKind = EntityKind::Room;

    fn id(&self) -> i64 {
        self.id
    }
}

const ROOM_KINDS: &[Choice] = &[
    Choice {
        value: "AppointmentRoom",
        label: "Consultation room",
    },
    Choice {
        value: "Hospitalization",
        label: "Hospitalization",
    },
];

pub(crate) const SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec::required("number", "Number", FieldKind::Integer),
        FieldSpec::required("type", "Type", FieldKind::Select(ROOM_KINDS))
            .with_default("AppointmentRoom"),
        FieldSpec::required("capacity", "Capacity", FieldKind::Integer),
    ],
};
