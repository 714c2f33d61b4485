//! Expressed-attribute state for the three visual roles.

use std::fmt;

use catalog::{AttributeCatalog, AttributeId};
use serde::{Deserialize, Serialize};

/// Visual role an attribute can be expressed on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    X,
    Y,
    Color,
}

impl Role {
    /// All roles, in the order batched changes are applied.
    pub const ALL: [Role; 3] = [Role::X, Role::Y, Role::Color];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::X => f.write_str("x"),
            Role::Y => f.write_str("y"),
            Role::Color => f.write_str("color"),
        }
    }
}

/// The single source of truth for what is currently shown.
///
/// Invariants:
/// - every role always holds a catalog member, never unset;
/// - a rejected transition leaves all roles untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    x: AttributeId,
    y: AttributeId,
    color: AttributeId,
}

impl SelectionState {
    /// Validates all three initial bindings against the catalog.
    pub fn new(
        catalog: &AttributeCatalog,
        x: AttributeId,
        y: AttributeId,
        color: AttributeId,
    ) -> Result<Self, SelectionError> {
        for (role, id) in [(Role::X, &x), (Role::Y, &y), (Role::Color, &color)] {
            if !catalog.contains(id) {
                return Err(SelectionError::UnknownAttribute {
                    role,
                    id: id.clone(),
                });
            }
        }
        Ok(Self { x, y, color })
    }

    pub fn attribute(&self, role: Role) -> &AttributeId {
        match role {
            Role::X => &self.x,
            Role::Y => &self.y,
            Role::Color => &self.color,
        }
    }

    pub fn x(&self) -> &AttributeId {
        &self.x
    }

    pub fn y(&self) -> &AttributeId {
        &self.y
    }

    pub fn color(&self) -> &AttributeId {
        &self.color
    }

    /// The one transition: rebind a single role.
    ///
    /// Precondition: `id` is a catalog member. A violation fails with
    /// `UnknownAttribute` and no role changes. The other two roles are
    /// untouched either way.
    pub fn set_attribute(
        &mut self,
        catalog: &AttributeCatalog,
        role: Role,
        id: AttributeId,
    ) -> Result<(), SelectionError> {
        if !catalog.contains(&id) {
            return Err(SelectionError::UnknownAttribute { role, id });
        }
        match role {
            Role::X => self.x = id,
            Role::Y => self.y = id,
            Role::Color => self.color = id,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    UnknownAttribute { role: Role, id: AttributeId },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::UnknownAttribute { role, id } => {
                write!(f, "attribute {id} for role {role} is not in the catalog")
            }
        }
    }
}

impl std::error::Error for SelectionError {}
