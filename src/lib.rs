//! # plymesh
//!
//! Typed element records for PLY-style mesh data and the algorithms that
//! run over them.
//!
//! A PLY file is a sequence of element sections (vertices, faces, ...). Each
//! section has an [`core::ElementType`] naming its properties, and its
//! records are produced one at a time by an [`core::ElementReader`].
//! Decoding the file itself is left to a collaborator that implements that
//! trait.
//!
//! ## Modules
//!
//! - [`util`] - Scalar types, errors, math helpers, tracing setup
//! - [`core`] - Data model, element streams, buffering
//! - [`geom`] - Vertex normals, triangulation, bounds
//!
//! ## Example
//!
//! ```ignore
//! use plymesh::prelude::*;
//!
//! let mut vertices = BufferedElementReader::new(vertex_source);
//! NormalGenerator::new().generate_normals(&mut vertices, &mut face_source)?;
//!
//! vertices.reset()?;
//! while let Some(v) = vertices.read_element()? {
//!     println!("{} {} {}", v.get_double("nx")?, v.get_double("ny")?, v.get_double("nz")?);
//! }
//! ```

pub mod util;
pub mod core;
pub mod geom;

// Re-export commonly used types
pub use util::{ScalarType, Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::util::{ScalarType, Error, Result, BBox3d, DVec3};
    pub use crate::core::{
        PropertyDescriptor, PropertyKind, ElementType, Element, Value,
        ElementReader, BufferedElementReader, MemoryElementReader,
    };
    pub use crate::geom::{NormalGenerator, TriangulatingReader, vertex_bounds};
}
