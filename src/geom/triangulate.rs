//! Fan triangulation of a face stream.

use super::util::face_index_property;
use crate::core::{Element, ElementReader, ElementType};
use crate::util::{Error, Result};
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::trace;

/// Face reader that splits polygons into triangle fans.
///
/// A face `[i0, i1, ..., in-1]` becomes `[i0, i1, i2], [i0, i2, i3], ...,
/// [i0, in-2, in-1]`. Every other property is copied onto each triangle.
/// The element type is the source's type.
pub struct TriangulatingReader<R: ElementReader> {
    source: R,
    index_prop: String,
    pending: VecDeque<Element>,
    faces_read: usize,
}

impl<R: ElementReader> TriangulatingReader<R> {
    /// Wrap a face source. Fails if its type has no vertex index list.
    pub fn new(source: R) -> Result<Self> {
        let index_prop = face_index_property(source.element_type())?.to_string();
        Ok(Self {
            source,
            index_prop,
            pending: VecDeque::new(),
            faces_read: 0,
        })
    }

    /// Name of the index list being split.
    pub fn index_property(&self) -> &str {
        &self.index_prop
    }

    /// Unwrap the source. Triangles not read yet are dropped.
    pub fn into_inner(self) -> R {
        self.source
    }

    fn split(&mut self, face: Element) -> Result<()> {
        let indices = face.get_int_list(&self.index_prop)?;
        let n = indices.len();
        if n < 3 {
            return Err(Error::DegenerateFace { face: self.faces_read, count: n });
        }
        if n == 3 {
            self.pending.push_back(face);
            return Ok(());
        }

        trace!(face = self.faces_read, corners = n, "splitting polygon");
        let fan: Vec<[i64; 3]> = (1..n - 1)
            .map(|k| [indices[0], indices[k], indices[k + 1]])
            .collect();
        for tri in fan {
            let mut triangle = face.clone();
            triangle.set_int_list(&self.index_prop, &tri)?;
            self.pending.push_back(triangle);
        }
        Ok(())
    }
}

impl<R: ElementReader> ElementReader for TriangulatingReader<R> {
    fn element_type(&self) -> &Arc<ElementType> {
        self.source.element_type()
    }

    fn read_element(&mut self) -> Result<Option<Element>> {
        while self.pending.is_empty() {
            let Some(face) = self.source.read_element()? else {
                return Ok(None);
            };
            self.split(face)?;
            self.faces_read += 1;
        }
        Ok(self.pending.pop_front())
    }
}
