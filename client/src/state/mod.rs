//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Per-entity panel state lives in `records`; the modules here hold what is
//! shared across panels (backend configuration, menu selection).

pub mod config;
pub mod menu;
