//! Mesh algorithms over element streams.
//!
//! This module provides:
//! - [`NormalGenerator`] - angle-weighted vertex normals
//! - [`TriangulatingReader`] - fan triangulation of a face stream
//! - [`vertex_bounds`] - bounding box of a vertex stream

pub mod util;
pub mod normals;
pub mod bounds;
pub mod triangulate;

pub use util::{face_index_property, FACE_INDEX_PROPERTIES, NORMAL_PROPERTIES, POSITION_PROPERTIES};
pub use normals::NormalGenerator;
pub use bounds::vertex_bounds;
pub use triangulate::TriangulatingReader;
