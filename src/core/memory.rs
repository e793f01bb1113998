//! In-memory element source.

use super::{Element, ElementReader, ElementType};
use crate::util::{Error, Result};
use std::sync::Arc;

/// Element reader over a prepared list of elements.
///
/// Useful for decoders that materialize a section themselves and for
/// feeding synthetic meshes into the algorithms.
pub struct MemoryElementReader {
    ty: Arc<ElementType>,
    elements: std::vec::IntoIter<Element>,
    total: usize,
}

impl MemoryElementReader {
    /// Create a reader, checking that every element has type `ty`.
    pub fn new(ty: Arc<ElementType>, elements: Vec<Element>) -> Result<Self> {
        if let Some(bad) = elements.iter().find(|e| **e.element_type() != *ty) {
            return Err(Error::ElementTypeMismatch {
                expected: ty.name().to_string(),
                actual: bad.element_type().name().to_string(),
            });
        }
        Ok(Self {
            ty,
            total: elements.len(),
            elements: elements.into_iter(),
        })
    }

    /// Number of elements not read yet.
    pub fn remaining(&self) -> usize {
        self.elements.len()
    }
}

impl ElementReader for MemoryElementReader {
    fn element_type(&self) -> &Arc<ElementType> {
        &self.ty
    }

    fn read_element(&mut self) -> Result<Option<Element>> {
        Ok(self.elements.next())
    }

    fn count(&self) -> Option<usize> {
        Some(self.total)
    }
}
