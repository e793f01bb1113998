//! Element type descriptors.

use super::PropertyDescriptor;
use crate::util::{Error, Result};
use std::fmt;
use std::sync::Arc;

/// Schema shared by all elements of one section (e.g. `vertex`, `face`).
///
/// Properties keep their declaration order, which is the order encoders
/// write them in. Equality ignores that order: two types are equal when
/// they have the same name and declare the same set of properties.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementType {
    name: String,
    properties: Vec<PropertyDescriptor>,
}

impl ElementType {
    /// Create an element type, validating property names and list count types.
    pub fn new(name: impl Into<String>, properties: Vec<PropertyDescriptor>) -> Result<Self> {
        let name = name.into();
        for (i, prop) in properties.iter().enumerate() {
            if properties[..i].iter().any(|p| p.name == prop.name) {
                return Err(Error::DuplicateProperty {
                    element: name,
                    property: prop.name.clone(),
                });
            }
            if let super::PropertyKind::List { count, .. } = prop.kind {
                if !count.is_integer() {
                    return Err(Error::schema(format!(
                        "list '{}' in '{}' has non-integer count type {}",
                        prop.name, name, count
                    )));
                }
            }
        }
        Ok(Self { name, properties })
    }

    /// Create an element type and wrap it for sharing between elements.
    pub fn shared(name: impl Into<String>, properties: Vec<PropertyDescriptor>) -> Result<Arc<Self>> {
        Self::new(name, properties).map(Arc::new)
    }

    /// Name of this element type.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Properties in declaration order.
    pub fn properties(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    /// Number of declared properties.
    pub fn num_properties(&self) -> usize {
        self.properties.len()
    }

    /// Position of a property in declaration order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.properties.iter().position(|p| p.name == name)
    }

    /// Look up a property by name.
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Check if a property exists.
    pub fn has_property(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Look up a property, failing with a usage error if it is not declared.
    pub fn require(&self, name: &str) -> Result<(usize, &PropertyDescriptor)> {
        self.properties
            .iter()
            .enumerate()
            .find(|(_, p)| p.name == name)
            .ok_or_else(|| Error::not_found(&self.name, name))
    }

    /// Copy of this type with `extra` appended.
    ///
    /// Properties whose names are already declared are skipped, so the
    /// result is a superset that keeps every existing position.
    pub fn extended(&self, extra: &[PropertyDescriptor]) -> Result<Self> {
        let mut properties = self.properties.clone();
        for prop in extra {
            if !self.has_property(&prop.name) {
                properties.push(prop.clone());
            }
        }
        Self::new(self.name.clone(), properties)
    }

    /// Check if `other` has the same name and declares every property of
    /// `self`, in any order.
    pub fn is_subset_of(&self, other: &ElementType) -> bool {
        self.name == other.name
            && self.properties.iter().all(|p| other.property(&p.name) == Some(p))
    }
}

impl PartialEq for ElementType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.properties.len() == other.properties.len()
            && self.is_subset_of(other)
    }
}

impl Eq for ElementType {}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element {}", self.name)?;
        for prop in &self.properties {
            write!(f, "\n{}", prop)?;
        }
        Ok(())
    }
}
