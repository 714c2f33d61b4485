pub mod error;
pub mod linear;
pub mod quantile;
pub mod size;
pub mod stats;
pub mod ticks;

pub use error::*;
pub use linear::*;
pub use quantile::*;
pub use size::*;
pub use ticks::*;
