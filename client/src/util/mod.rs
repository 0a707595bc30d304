//! Browser helpers that no-op during server rendering.

pub mod scroll;
