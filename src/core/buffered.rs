//! Buffered element reader.
//!
//! Turns a forward-only [`ElementReader`] into a multi-pass sequence whose
//! elements can be addressed and mutated by position.
//!
//! The wrapped source is drained at most once. Elements are kept in one
//! owned arena in arrival order; replays hand out copies of the slots, so a
//! write through [`BufferedElementReader::get_mut`] is seen by every later
//! read of that position, including after [`BufferedElementReader::reset`].

use super::{Element, ElementReader, ElementType, PropertyDescriptor};
use crate::util::{Error, Result};
use std::sync::Arc;
use tracing::{debug, warn};

/// Drain state of the wrapped source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferState {
    /// Source still has (or may have) elements.
    Filling,
    /// Source reported end of stream; it is never called again.
    Complete,
    /// Source failed or yielded a foreign element; the buffered prefix
    /// stays readable.
    Failed,
}

/// Multi-pass, positionally mutable buffer over an element source.
pub struct BufferedElementReader<R: ElementReader> {
    source: R,
    ty: Arc<ElementType>,
    buffer: Vec<Element>,
    cursor: usize,
    state: BufferState,
}

impl<R: ElementReader> BufferedElementReader<R> {
    /// Wrap a source, capturing its element type.
    pub fn new(source: R) -> Self {
        let ty = Arc::clone(source.element_type());
        let capacity = source.count().unwrap_or(0);
        Self {
            source,
            ty,
            buffer: Vec::with_capacity(capacity),
            cursor: 0,
            state: BufferState::Filling,
        }
    }

    /// Get the drain state.
    #[inline]
    pub fn state(&self) -> BufferState {
        self.state
    }

    /// Check if the source has been drained completely.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.state == BufferState::Complete
    }

    /// Number of elements buffered so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if nothing has been buffered yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Current read position.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Drain the rest of the source into the buffer.
    ///
    /// Returns the total number of buffered elements.
    pub fn buffer_all(&mut self) -> Result<usize> {
        while self.pull()? {}
        Ok(self.buffer.len())
    }

    /// Rewind to the first element.
    ///
    /// Drains the source first if it is not exhausted, so every replay sees
    /// the same content.
    pub fn reset(&mut self) -> Result<()> {
        self.buffer_all()?;
        self.cursor = 0;
        Ok(())
    }

    /// Borrow the element at `index`.
    pub fn get(&self, index: usize) -> Result<&Element> {
        self.check_index(index)?;
        Ok(&self.buffer[index])
    }

    /// Mutably borrow the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Element> {
        self.check_index(index)?;
        Ok(&mut self.buffer[index])
    }

    /// Iterate over the elements buffered so far.
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.buffer.iter()
    }

    /// Mutably iterate over the elements buffered so far.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Element> {
        self.buffer.iter_mut()
    }

    /// Append properties to the element type and re-bind every element.
    ///
    /// Drains the source first. Names that are already declared are
    /// skipped. Buffered elements keep their values and positions; new
    /// scalars start unset. Returns false if nothing had to be added.
    pub fn extend_type(&mut self, extra: &[PropertyDescriptor]) -> Result<bool> {
        self.buffer_all()?;
        let extended = self.ty.extended(extra)?;
        if extended.num_properties() == self.ty.num_properties() {
            return Ok(false);
        }

        debug!(
            element = self.ty.name(),
            added = extended.num_properties() - self.ty.num_properties(),
            "extending buffered element type"
        );
        let extended = Arc::new(extended);
        for element in &mut self.buffer {
            element.rebind(Arc::clone(&extended))?;
        }
        self.ty = extended;
        Ok(true)
    }

    /// Get the wrapped source.
    pub fn get_ref(&self) -> &R {
        &self.source
    }

    /// Unwrap the source, dropping the buffer.
    pub fn into_inner(self) -> R {
        self.source
    }

    /// Pull one element from the source into the buffer.
    ///
    /// Returns false once the source is exhausted, without calling it again.
    fn pull(&mut self) -> Result<bool> {
        match self.state {
            BufferState::Complete => return Ok(false),
            BufferState::Failed => return Err(Error::SourceFailed(self.buffer.len())),
            BufferState::Filling => {}
        }

        match self.source.read_element() {
            Ok(Some(mut element)) => {
                let actual = element.element_type();
                if !Arc::ptr_eq(actual, &self.ty) && **actual != *self.ty {
                    let e = Error::ElementTypeMismatch {
                        expected: self.ty.name().to_string(),
                        actual: actual.name().to_string(),
                    };
                    self.state = BufferState::Failed;
                    warn!(element = self.ty.name(), buffered = self.buffer.len(), error = %e, "source yielded a foreign element");
                    return Err(e);
                }
                // Equal types may order their properties differently.
                element.rebind(Arc::clone(&self.ty))?;
                self.buffer.push(element);
                Ok(true)
            }
            Ok(None) => {
                self.state = BufferState::Complete;
                debug!(element = self.ty.name(), count = self.buffer.len(), "source drained");
                Ok(false)
            }
            Err(e) => {
                self.state = BufferState::Failed;
                warn!(element = self.ty.name(), buffered = self.buffer.len(), error = %e, "source failed");
                Err(e)
            }
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let count = self.buffer.len();
        if index < count {
            Ok(())
        } else if self.is_complete() {
            Err(Error::IndexOutOfBounds { index, count })
        } else {
            Err(Error::BufferIncomplete { index, buffered: count })
        }
    }
}

impl<R: ElementReader> ElementReader for BufferedElementReader<R> {
    fn element_type(&self) -> &Arc<ElementType> {
        &self.ty
    }

    fn read_element(&mut self) -> Result<Option<Element>> {
        if self.cursor == self.buffer.len() && !self.pull()? {
            return Ok(None);
        }
        let element = self.buffer[self.cursor].clone();
        self.cursor += 1;
        Ok(Some(element))
    }

    fn count(&self) -> Option<usize> {
        if self.is_complete() {
            Some(self.buffer.len())
        } else {
            self.source.count()
        }
    }
}
