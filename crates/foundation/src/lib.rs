pub mod color;
pub mod precision;

// Foundation crate: small, well-tested primitives only.
pub use color::*;
pub use precision::*;
