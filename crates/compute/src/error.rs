//! Failures surfaced by the engine and session.

use std::fmt;

use catalog::AttributeId;
use scales::ScaleError;
use scene::SelectionError;

/// Why a recompute or selection transition did not produce a bundle.
///
/// A `Scale` failure leaves the selection as it was; the caller may
/// retry after changing a role. A `Selection` failure means the
/// transition itself was rejected and nothing was recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComputeError {
    Scale {
        attribute: AttributeId,
        source: ScaleError,
    },
    Selection(SelectionError),
}

impl fmt::Display for ComputeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComputeError::Scale { attribute, source } => {
                write!(f, "deriving the {attribute} scale: {source}")
            }
            ComputeError::Selection(source) => write!(f, "{source}"),
        }
    }
}

impl std::error::Error for ComputeError {}

impl From<SelectionError> for ComputeError {
    fn from(source: SelectionError) -> Self {
        ComputeError::Selection(source)
    }
}
