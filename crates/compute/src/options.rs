//! Tunable knobs for scale fitting.

use foundation::Color;
use scales::{DomainPadding, SizeParams};
use serde::{Deserialize, Serialize};

/// Five-class sequential palette the dashboard ships with.
pub const REFERENCE_PALETTE: [Color; 5] = [
    Color::rgb(0xd4, 0xb9, 0xda),
    Color::rgb(0xc9, 0x94, 0xc7),
    Color::rgb(0xdf, 0x65, 0xb0),
    Color::rgb(0xdd, 0x1c, 0x77),
    Color::rgb(0x98, 0x00, 0x43),
];

/// Parameters shared by every recompute. The palette length fixes the
/// number of classed buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    pub palette: Vec<Color>,
    pub domain_padding: DomainPadding,
    pub size: SizeParams,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            palette: REFERENCE_PALETTE.to_vec(),
            domain_padding: DomainPadding::QuarterRange,
            size: SizeParams::default(),
        }
    }
}
