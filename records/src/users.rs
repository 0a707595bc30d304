use serde::{Deserialize, Serialize};

use crate::entity::{EntityKind, Resource};
use crate::schema::{Choice, FieldKind, FieldSpec, Schema};
use crate::serde_util::{i64_lenient, opt_i64_lenient};

/// Access level of a user account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Patient,
    HealthProfessional,
    Admin,
}

/// A console user: patient, health professional or administrator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "i64_lenient")]
    pub id: i64,
    pub username: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub genre: Option<String>,
    pub dob: String,
    pub role: Role,
    /// Room the user is assigned to, if any.
    #[serde(default, deserialize_with = "opt_i64_lenient")]
    pub room_id: Option<i64>,
}

impl Resource for User {
    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> i64 {
        self.id
    }
}

const GENRES: &[Choice] = &[
    Choice {
        value: "M",
        label: "Male",
    },
    Choice {
        value: "F",
        label: "Female",
    },
];

const ROLES: &[Choice] = &[
    Choice {
        value: "Patient",
        label: "Patient",
    },
    Choice {
        value: "HealthProfessional",
        label: "Health professional",
    },
    Choice {
        value: "Admin",
        label: "Administrator",
    },
];

pub(crate) const SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec::required("username", "Username", FieldKind::Text),
        FieldSpec::required("email", "Email", FieldKind::Email),
        FieldSpec::required("password", "Password", FieldKind::Password).create_only(),
        FieldSpec::required("name", "Name", FieldKind::Text),
        FieldSpec::optional("genre", "Gender", FieldKind::Select(GENRES)),
        FieldSpec::required("dob", "Date of birth", FieldKind::Date),
        FieldSpec::required("role", "Role", FieldKind::Select(ROLES)).with_default("Patient"),
        FieldSpec::optional("roomId", "Room (ID)", FieldKind::Integer),
    ],
};
