//! Derivation of coordinated view state from joined data.
//!
//! The engine turns a dataset plus the expressed attributes into one
//! self-consistent [`ViewUpdate`] bundle; the session wraps the engine
//! with selection transitions, hover handling and the event log.

pub mod engine;
pub mod error;
pub mod options;
pub mod session;

pub use engine::*;
pub use error::*;
pub use options::*;
pub use session::*;
