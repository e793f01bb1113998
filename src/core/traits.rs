//! Element stream traits.
//!
//! These traits define the interface between decoding collaborators that
//! produce elements and the algorithms that consume them.

use super::{Element, ElementType};
use crate::util::Result;
use std::sync::Arc;

// ============================================================================
// Reader Trait
// ============================================================================

/// Forward-only, single-pass producer of elements of one type.
///
/// `read_element` returns `Ok(None)` once the stream is exhausted. Any call
/// may fail with an I/O error from the underlying source.
pub trait ElementReader {
    /// Get the type shared by every element of this stream.
    fn element_type(&self) -> &Arc<ElementType>;

    /// Read the next element, `None` at end of stream.
    fn read_element(&mut self) -> Result<Option<Element>>;

    /// Number of elements in the stream, if known up front.
    fn count(&self) -> Option<usize> {
        None
    }

    /// Iterate over the remaining elements.
    fn elements(&mut self) -> Elements<'_, Self>
    where
        Self: Sized,
    {
        Elements { reader: self, done: false }
    }
}

impl<R: ElementReader + ?Sized> ElementReader for &mut R {
    fn element_type(&self) -> &Arc<ElementType> {
        (**self).element_type()
    }

    fn read_element(&mut self) -> Result<Option<Element>> {
        (**self).read_element()
    }

    fn count(&self) -> Option<usize> {
        (**self).count()
    }
}

impl<R: ElementReader + ?Sized> ElementReader for Box<R> {
    fn element_type(&self) -> &Arc<ElementType> {
        (**self).element_type()
    }

    fn read_element(&mut self) -> Result<Option<Element>> {
        (**self).read_element()
    }

    fn count(&self) -> Option<usize> {
        (**self).count()
    }
}

// ============================================================================
// Iterator Adapter
// ============================================================================

/// Iterator over the remaining elements of a reader.
///
/// Stops after the end of stream or after the first error.
pub struct Elements<'a, R: ElementReader> {
    reader: &'a mut R,
    done: bool,
}

impl<R: ElementReader> Iterator for Elements<'_, R> {
    type Item = Result<Element>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.read_element() {
            Ok(Some(element)) => Some(Ok(element)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
