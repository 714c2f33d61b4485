pub mod axes;
pub mod bubbles;
pub mod choropleth;
pub mod frame;
pub mod label;
pub mod legend;
pub mod symbology;

pub use axes::*;
pub use bubbles::*;
pub use choropleth::*;
pub use frame::*;
pub use label::*;
pub use legend::*;
pub use symbology::*;
