//! Bounds of a vertex stream.

use super::util::{read_position, require_scalars, POSITION_PROPERTIES};
use crate::core::{BufferedElementReader, ElementReader};
use crate::util::{BBox3d, Result};

/// Axis-aligned box enclosing every buffered vertex.
///
/// Drains the source first. An empty stream yields [`BBox3d::EMPTY`].
pub fn vertex_bounds<R: ElementReader>(vertices: &mut BufferedElementReader<R>) -> Result<BBox3d> {
    vertices.buffer_all()?;
    require_scalars(vertices.element_type(), &POSITION_PROPERTIES)?;

    let mut bounds = BBox3d::EMPTY;
    for vertex in vertices.iter() {
        bounds.expand_by_point(read_position(vertex)?);
    }
    Ok(bounds)
}
