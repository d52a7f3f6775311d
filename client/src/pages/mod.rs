//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is a thin route target; page bodies are placeholders for the
//! product's content and delegate shared UI to `components`.

pub mod landing;
pub mod login;
pub mod workspace;
