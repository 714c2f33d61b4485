pub mod coalesce;
pub mod event_log;
pub mod pass;

pub use coalesce::*;
pub use event_log::*;
pub use pass::*;
