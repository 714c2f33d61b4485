use std::fmt;

/// Failure to derive a scale.
///
/// An empty domain is fatal to the derivation that requested it, never a
/// silent NaN-valued scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaleError {
    /// No finite values to derive a domain from.
    EmptyDomain,
    /// A color scale was requested over an empty palette.
    EmptyPalette,
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleError::EmptyDomain => write!(f, "no parsable values to derive a domain from"),
            ScaleError::EmptyPalette => write!(f, "color palette has no entries"),
        }
    }
}

impl std::error::Error for ScaleError {}
