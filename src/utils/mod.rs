//! Upload helpers shared across modules

pub mod filename;
pub mod mime;

pub use filename::secure_filename;
pub use mime::{DocumentKind, detect_kind};
