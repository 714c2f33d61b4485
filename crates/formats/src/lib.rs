pub mod regions;
pub mod table;

pub use regions::*;
pub use table::*;
