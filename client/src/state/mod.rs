//! Client-side session state.
//!
//! DESIGN
//! ======
//! `store` is the persistence capability; `session` holds the pure decisions
//! and lifecycle writes built on top of it.

pub mod session;
pub mod store;
