//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` executes the transport-neutral requests built by `records` panels
//! against the configured REST backend.

pub mod api;
