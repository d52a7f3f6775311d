//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the authenticated chrome and the shared auth form,
//! reading the session store from Leptos context.

pub mod auth_form;
pub mod layout;
pub mod sidebar;
