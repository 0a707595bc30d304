use serde::{Deserialize, Serialize};

use crate::entity::{EntityKind, Resource};
use crate::schema::{FieldKind, FieldSpec, Schema};
use crate::serde_util::i64_lenient;

/// A stock item tracked by code and quantity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supply {
    #[serde(deserialize_with = "i64_lenient")]
    pub id: i64,
    #[serde(deserialize_with = "i64_lenient")]
    pub code: i64,
    pub name: String,
    pub description: String,
    #[serde(deserialize_with = "i64_lenient")]
    pub quantity: i64,
}

impl Resource for Supply {
    const KIND: EntityKind = EntityKind::Supply;

    fn id(&self) -> i64 {
        self.id
    }
}

pub(crate) const SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec::required("code", "Code", FieldKind::Integer),
        FieldSpec::required("name", "Name", FieldKind::Text),
        FieldSpec::required("description", "Description", FieldKind::Text),
        FieldSpec::required("quantity", "Quantity", FieldKind::Integer),
    ],
};
