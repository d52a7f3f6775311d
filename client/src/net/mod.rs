//! Networking helpers for talking to the session issuer.

pub mod api;
