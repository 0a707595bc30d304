//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render one entity's CRUD panel generically over
//! `records::Resource`, reading and writing a panel's `RwSignal` state.

pub mod create_form;
pub mod edit_form;
pub mod field_input;
pub mod nav_menu;
pub mod notice_line;
pub mod record_table;
pub mod resource_panel;
