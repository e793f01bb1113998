//! Property descriptors.
//!
//! A descriptor names one field of an element type and says whether it holds
//! a single scalar or a counted list of scalars.

use crate::util::ScalarType;
use std::fmt;

/// Shape and storage type of a property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyKind {
    /// Single value per element.
    Scalar(ScalarType),
    /// Variable-length list per element; `count` is the type of the length prefix.
    List { count: ScalarType, item: ScalarType },
}

impl PropertyKind {
    /// Type of the stored values (the item type for lists).
    pub fn value_type(&self) -> ScalarType {
        match *self {
            Self::Scalar(ty) => ty,
            Self::List { item, .. } => item,
        }
    }

    /// Shape name used in error messages.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::List { .. } => "list",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(ty) => write!(f, "{}", ty),
            Self::List { count, item } => write!(f, "list {} {}", count, item),
        }
    }
}

/// Named, typed property of an element type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyDescriptor {
    /// Name of this property, unique within its element type.
    pub name: String,
    /// Scalar or list shape.
    pub kind: PropertyKind,
}

impl PropertyDescriptor {
    /// Create a scalar property descriptor.
    pub fn scalar(name: impl Into<String>, ty: ScalarType) -> Self {
        Self {
            name: name.into(),
            kind: PropertyKind::Scalar(ty),
        }
    }

    /// Create a list property descriptor.
    pub fn list(name: impl Into<String>, count: ScalarType, item: ScalarType) -> Self {
        Self {
            name: name.into(),
            kind: PropertyKind::List { count, item },
        }
    }

    /// Check if this is a scalar property.
    pub fn is_scalar(&self) -> bool {
        matches!(self.kind, PropertyKind::Scalar(_))
    }

    /// Check if this is a list property.
    pub fn is_list(&self) -> bool {
        matches!(self.kind, PropertyKind::List { .. })
    }

    /// Type of the stored values (the item type for lists).
    pub fn value_type(&self) -> ScalarType {
        self.kind.value_type()
    }
}

impl fmt::Display for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "property {} {}", self.kind, self.name)
    }
}
