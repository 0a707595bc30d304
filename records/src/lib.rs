//! Shared record model and CRUD panel logic for the administration console.
//!
//! This crate owns everything about a screen that is not rendering: the five
//! entity records, the static schema that drives their forms and tables, the
//! string-valued form model, and the panel state machines that decide which
//! HTTP request a user action produces and how a response changes view state.
//! It performs no I/O; the `client` crate executes [`ApiRequest`]s and feeds
//! the resulting [`ApiResponse`]s back in.

pub mod create;
pub mod entity;
pub mod error;
pub mod form;
pub mod http;
pub mod notice;
pub mod panel;
pub mod schema;

mod appointments;
mod prescriptions;
mod rooms;
mod serde_util;
mod supplies;
mod users;

pub use appointments::Appointment;
pub use create::CreateFormState;
pub use entity::{EntityKind, Resource};
pub use error::FormError;
pub use form::FormData;
pub use http::{ApiRequest, ApiResponse, FollowUp, Method, Outcome, TransportError, join_url};
pub use notice::{Notice, NoticeKind};
pub use panel::PanelState;
pub use prescriptions::Prescription;
pub use rooms::{Room, RoomKind};
pub use schema::{Choice, FieldKind, FieldSpec, FormMode, Forms, Schema};
pub use supplies::Supply;
pub use users::{Role, User};
