//! Core layer - the typed-record data model and element streams.
//!
//! This module provides:
//! - [`PropertyDescriptor`] / [`ElementType`] - schemas of element sections
//! - [`Element`] / [`Value`] - typed records with widened storage
//! - [`ElementReader`] - forward-only element source trait
//! - [`BufferedElementReader`] - multi-pass, mutable buffer over a source
//! - [`MemoryElementReader`] - source over a prepared element list

mod property;
mod element_type;
mod value;
mod element;
mod traits;
mod memory;
mod buffered;

pub use property::{PropertyDescriptor, PropertyKind};
pub use element_type::ElementType;
pub use value::{Value, IntList, DoubleList};
pub use element::Element;
pub use traits::{ElementReader, Elements};
pub use memory::MemoryElementReader;
pub use buffered::{BufferedElementReader, BufferState};
