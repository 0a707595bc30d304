//! Entity catalogue and the trait every record type implements.

#[cfg(test)]
#[path = "entity_test.rs"]
mod entity_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::schema::Schema;
use crate::{appointments, prescriptions, rooms, supplies, users};

/// The backend-managed record types the console administers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EntityKind {
    #[default]
    User,
    Room,
    Supply,
    Prescription,
    Appointment,
}

impl EntityKind {
    /// Menu order.
    pub const ALL: [Self; 5] = [
        Self::User,
        Self::Room,
        Self::Supply,
        Self::Prescription,
        Self::Appointment,
    ];

    /// Singular display name, e.g. `"Room"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Room => "Room",
            Self::Supply => "Supply",
            Self::Prescription => "Prescription",
            Self::Appointment => "Appointment",
        }
    }

    /// Plural display name used for menu entries and section headings.
    #[must_use]
    pub fn plural(self) -> &'static str {
        match self {
            Self::User => "Users",
            Self::Room => "Rooms",
            Self::Supply => "Supplies",
            Self::Prescription => "Prescriptions",
            Self::Appointment => "Appointments",
        }
    }

    #[must_use]
    pub fn schema(self) -> Schema {
        match self {
            Self::User => users::SCHEMA,
            Self::Room => rooms::SCHEMA,
            Self::Supply => supplies::SCHEMA,
            Self::Prescription => prescriptions::SCHEMA,
            Self::Appointment => appointments::SCHEMA,
        }
    }

    /// Path segment shared by every endpoint of the entity.
    fn segment(self) -> &'static str {
        match self {
            Self::User => "users",
            Self::Room => "rooms",
            Self::Supply => "supplies",
            Self::Prescription => "prescriptions",
            Self::Appointment => "appointments",
        }
    }

    /// `GET` path returning the whole collection.
    #[must_use]
    pub fn list_path(self) -> String {
        match self {
            Self::User => "/api/users/".to_owned(),
            _ => format!("/api/{}", self.segment()),
        }
    }

    /// Path of a single record, used for read, update and delete.
    #[must_use]
    pub fn item_path(self, id: i64) -> String {
        format!("/api/{}/{id}", self.segment())
    }

    /// `POST` path that creates a record.
    #[must_use]
    pub fn create_path(self) -> String {
        match self {
            Self::User => "/api/users/register".to_owned(),
            Self::Room | Self::Supply => format!("/api/{}/create", self.segment()),
            Self::Prescription | Self::Appointment => format!("/api/{}/", self.segment()),
        }
    }
}

/// A record type that can be listed, selected and submitted by a panel.
///
/// `Serialize` must emit the backend's JSON keys so a record can be turned
/// back into form values; see [`crate::form::FormData::from_record`].
pub trait Resource:
    Clone + std::fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const KIND: EntityKind;

    /// Backend-assigned identifier.
    fn id(&self) -> i64;
}
