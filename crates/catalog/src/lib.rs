//! Attribute catalog: the ordered, fixed set of attributes a dashboard may
//! express on its visual roles.
//!
//! The catalog is the membership authority for selections: a role may only
//! ever be bound to an id the catalog contains. Order is significant (it is
//! the presentation order for selector surfaces) and fixed at construction.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a selectable attribute (e.g. `coal_twh`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeId(String);

impl AttributeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AttributeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One selectable attribute: stable id plus presentation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDef {
    pub id: AttributeId,
    /// Human-readable label for selector entries and hover labels.
    pub label: String,
    /// Unit suffix for formatted values (may be empty).
    pub unit: String,
}

impl AttributeDef {
    pub fn new(id: impl Into<String>, label: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            id: AttributeId::new(id),
            label: label.into(),
            unit: unit.into(),
        }
    }
}

/// Ordered, duplicate-free set of attribute definitions.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeCatalog {
    defs: Vec<AttributeDef>,
}

impl AttributeCatalog {
    /// Build a catalog from definitions, rejecting duplicate ids.
    pub fn new(defs: Vec<AttributeDef>) -> Result<Self, CatalogError> {
        for (i, def) in defs.iter().enumerate() {
            if defs[..i].iter().any(|d| d.id == def.id) {
                return Err(CatalogError::DuplicateAttribute(def.id.clone()));
            }
        }
        Ok(Self { defs })
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn contains(&self, id: &AttributeId) -> bool {
        self.defs.iter().any(|d| &d.id == id)
    }

    pub fn get(&self, id: &AttributeId) -> Option<&AttributeDef> {
        self.defs.iter().find(|d| &d.id == id)
    }

    /// Membership check that surfaces the failure as an error.
    pub fn require(&self, id: &AttributeId) -> Result<&AttributeDef, CatalogError> {
        self.get(id)
            .ok_or_else(|| CatalogError::UnknownAttribute(id.clone()))
    }

    /// Definitions in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = &AttributeDef> {
        self.defs.iter()
    }

    /// Ids in presentation order.
    pub fn ids(&self) -> impl Iterator<Item = &AttributeId> {
        self.defs.iter().map(|d| &d.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    UnknownAttribute(AttributeId),
    DuplicateAttribute(AttributeId),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::UnknownAttribute(id) => {
                write!(f, "attribute {id} is not in the catalog")
            }
            CatalogError::DuplicateAttribute(id) => {
                write!(f, "attribute {id} appears more than once")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// The built-in regional energy statistics catalog.
pub mod energy {
    use super::{AttributeCatalog, AttributeDef, AttributeId};

    /// Initial role bindings before any user selection.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct DefaultRoles {
        pub x: AttributeId,
        pub y: AttributeId,
        pub color: AttributeId,
    }

    /// The six attributes of the reference dataset, in selector order.
    pub fn catalog() -> AttributeCatalog {
        // Ids are distinct by construction.
        AttributeCatalog {
            defs: vec![
                AttributeDef::new("coal_twh", "Coal generation", "TWh"),
                AttributeDef::new("gas_twh", "Natural gas generation", "TWh"),
                AttributeDef::new("wind_twh", "Wind generation", "TWh"),
                AttributeDef::new("solar_twh", "Solar generation", "TWh"),
                AttributeDef::new("cents_kwh", "Average retail price", "cents/kWh"),
                AttributeDef::new("tot_twh", "Total generation", "TWh"),
            ],
        }
    }

    pub fn default_roles() -> DefaultRoles {
        DefaultRoles {
            x: AttributeId::new("cents_kwh"),
            y: AttributeId::new("coal_twh"),
            color: AttributeId::new("gas_twh"),
        }
    }
}
