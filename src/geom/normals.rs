//! Angle-weighted vertex normals.
//!
//! Every face contributes its unit normal to each of its corners, scaled by
//! the interior angle at that corner (Max, "Weights for Computing Vertex
//! Normals from Facet Normals", 1999). Summed contributions are normalized
//! and written into the buffered vertex elements in place.

use super::util::{
    face_index_property, read_position, require_float_scalars, require_scalars, resolve_index,
    NORMAL_PROPERTIES, POSITION_PROPERTIES,
};
use crate::core::{BufferedElementReader, Element, ElementReader, PropertyDescriptor};
use crate::util::{angle_between, normalize_or_zero, DVec3, Error, Result, ScalarType};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Computes per-vertex normals from a vertex buffer and a face stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NormalGenerator {
    counter_clockwise: bool,
}

impl Default for NormalGenerator {
    fn default() -> Self {
        Self { counter_clockwise: true }
    }
}

impl NormalGenerator {
    /// Create a generator for counter-clockwise (right-hand rule) faces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the winding convention.
    #[must_use]
    pub fn with_counter_clockwise(mut self, counter_clockwise: bool) -> Self {
        self.counter_clockwise = counter_clockwise;
        self
    }

    /// Set the winding convention.
    pub fn set_counter_clockwise(&mut self, counter_clockwise: bool) {
        self.counter_clockwise = counter_clockwise;
    }

    /// True if face indices wind counter-clockwise seen from outside.
    pub fn counter_clockwise(&self) -> bool {
        self.counter_clockwise
    }

    /// Compute normals for every vertex and store them in `nx`, `ny`, `nz`.
    ///
    /// The vertex type must declare scalar `x`, `y`, `z`; missing normal
    /// properties are appended as `float`, declared ones must be floating
    /// point scalars. The face stream is drained once.
    /// Vertices no face contributes to keep a normal they already carry;
    /// unset components become 0.
    ///
    /// On error nothing is rolled back. The vertex cursor is left where
    /// it is, call [`BufferedElementReader::reset`] before re-reading.
    #[tracing::instrument(skip_all, fields(ccw = self.counter_clockwise))]
    pub fn generate_normals<V, F>(
        &self,
        vertices: &mut BufferedElementReader<V>,
        faces: &mut F,
    ) -> Result<()>
    where
        V: ElementReader,
        F: ElementReader + ?Sized,
    {
        let vertex_count = vertices.buffer_all()?;
        require_scalars(vertices.element_type(), &POSITION_PROPERTIES)?;

        let normal_props = NORMAL_PROPERTIES.map(|name| PropertyDescriptor::scalar(name, ScalarType::Float32));
        if vertices.extend_type(&normal_props)? {
            debug!("vertex type extended with normal properties");
        }
        require_float_scalars(vertices.element_type(), &NORMAL_PROPERTIES)?;

        let positions = vertices
            .iter()
            .map(read_position)
            .collect::<Result<Vec<DVec3>>>()?;

        let face_type = Arc::clone(faces.element_type());
        let index_prop = face_index_property(&face_type)?;

        let mut sums = vec![DVec3::ZERO; vertex_count];
        let mut corners = Vec::new();
        let mut face_count = 0usize;
        let mut degenerate = 0usize;

        while let Some(face) = faces.read_element()? {
            let raw = face.get_int_list(index_prop)?;
            if raw.len() < 3 {
                return Err(Error::DegenerateFace { face: face_count, count: raw.len() });
            }

            corners.clear();
            for &index in raw {
                corners.push(resolve_index(face_count, index, vertex_count)?);
            }

            if !self.accumulate_face(&positions, &corners, &mut sums) {
                trace!(face = face_count, "zero-area face skipped");
                degenerate += 1;
            }
            face_count += 1;
        }

        if degenerate > 0 {
            warn!(degenerate, faces = face_count, "faces without a defined normal");
        }

        let mut written = 0usize;
        for (index, sum) in sums.iter().enumerate() {
            if store_normal(vertices.get_mut(index)?, *sum)? {
                written += 1;
            }
        }

        debug!(vertices = vertex_count, faces = face_count, written, "normals generated");
        Ok(())
    }

    /// Add one face's angle-weighted normal to its corners.
    ///
    /// Returns false if the face has no normal and contributed nothing.
    fn accumulate_face(&self, positions: &[DVec3], corners: &[usize], sums: &mut [DVec3]) -> bool {
        let normal = self.face_normal(positions, corners);
        if normal == DVec3::ZERO {
            return false;
        }

        let n = corners.len();
        for k in 0..n {
            let current = corners[k];
            let prev = corners[(k + n - 1) % n];
            let next = corners[(k + 1) % n];

            let origin = positions[current];
            let angle = angle_between(positions[prev] - origin, positions[next] - origin);
            sums[current] += normal * angle;
        }
        true
    }

    /// Unit normal spanned by the first three corners, oriented by winding.
    fn face_normal(&self, positions: &[DVec3], corners: &[usize]) -> DVec3 {
        let p0 = positions[corners[0]];
        let e1 = positions[corners[1]] - p0;
        let e2 = positions[corners[2]] - p0;
        let normal = normalize_or_zero(e1.cross(e2));
        if self.counter_clockwise {
            normal
        } else {
            -normal
        }
    }
}

/// Write a normalized sum into a vertex.
///
/// A zero sum leaves set components alone and zeroes unset ones. Returns
/// true if a computed normal was written.
fn store_normal(vertex: &mut Element, sum: DVec3) -> Result<bool> {
    let unit = normalize_or_zero(sum);
    if unit == DVec3::ZERO {
        for name in NORMAL_PROPERTIES {
            if !vertex.is_set(name)? {
                vertex.set_double(name, 0.0)?;
            }
        }
        return Ok(false);
    }

    vertex.set_double("nx", unit.x)?;
    vertex.set_double("ny", unit.y)?;
    vertex.set_double("nz", unit.z)?;
    Ok(true)
}
