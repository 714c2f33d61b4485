pub mod dataset;
pub mod feature;
pub mod highlight;
pub mod join;
pub mod record;
pub mod selection;
pub mod style;

pub use dataset::*;
pub use feature::*;
pub use highlight::*;
pub use join::*;
pub use record::*;
pub use selection::*;
pub use style::*;
