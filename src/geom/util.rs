//! Common lookups shared by the geometry algorithms.

use crate::core::{Element, ElementType, PropertyKind};
use crate::util::{DVec3, Error, Result};

/// Vertex position properties.
pub const POSITION_PROPERTIES: [&str; 3] = ["x", "y", "z"];

/// Vertex normal properties.
pub const NORMAL_PROPERTIES: [&str; 3] = ["nx", "ny", "nz"];

/// Conventional names of the face index list, in lookup order.
pub const FACE_INDEX_PROPERTIES: [&str; 2] = ["vertex_indices", "vertex_index"];

/// Check that every name is declared as a scalar property.
pub fn require_scalars(ty: &ElementType, names: &[&str]) -> Result<()> {
    for name in names {
        let (_, prop) = ty.require(name)?;
        if !prop.is_scalar() {
            return Err(Error::ShapeMismatch {
                property: name.to_string(),
                expected: "scalar",
                actual: prop.kind.shape(),
            });
        }
    }
    Ok(())
}

/// Check that every name is declared as a `float` or `double` scalar.
pub fn require_float_scalars(ty: &ElementType, names: &[&str]) -> Result<()> {
    require_scalars(ty, names)?;
    for name in names {
        let (_, prop) = ty.require(name)?;
        if !prop.value_type().is_float() {
            return Err(Error::TypeMismatch {
                property: name.to_string(),
                expected: "float or double".to_string(),
                actual: prop.value_type().name().to_string(),
            });
        }
    }
    Ok(())
}

/// Read `x`, `y`, `z` of a vertex.
#[inline]
pub fn read_position(vertex: &Element) -> Result<DVec3> {
    Ok(DVec3::new(
        vertex.get_double("x")?,
        vertex.get_double("y")?,
        vertex.get_double("z")?,
    ))
}

/// Name of the vertex index list of a face type.
///
/// Prefers the conventional names, otherwise accepts the only integer list
/// the type declares.
pub fn face_index_property(ty: &ElementType) -> Result<&str> {
    for name in FACE_INDEX_PROPERTIES {
        if let Some(prop) = ty.property(name) {
            return match prop.kind {
                PropertyKind::List { item, .. } if item.is_integer() => Ok(&prop.name),
                _ => Err(Error::schema(format!("'{}.{}' is not an integer list", ty.name(), name))),
            };
        }
    }

    let mut lists = ty
        .properties()
        .iter()
        .filter(|p| matches!(p.kind, PropertyKind::List { item, .. } if item.is_integer()));
    match (lists.next(), lists.next()) {
        (Some(prop), None) => Ok(&prop.name),
        (None, _) => Err(Error::schema(format!("'{}' declares no vertex index list", ty.name()))),
        (Some(_), Some(_)) => Err(Error::schema(format!(
            "'{}' declares several integer lists and none is named vertex_indices",
            ty.name()
        ))),
    }
}

/// Resolve a face's vertex index against the vertex count.
#[inline]
pub fn resolve_index(face: usize, index: i64, count: usize) -> Result<usize> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < count)
        .ok_or(Error::VertexIndexOutOfBounds { face, index, count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PropertyDescriptor;
    use crate::util::ScalarType;

    #[test]
    fn test_face_index_property_by_name() {
        let ty = ElementType::new(
            "face",
            vec![
                PropertyDescriptor::list("texcoord", ScalarType::Uint8, ScalarType::Float32),
                PropertyDescriptor::list("vertex_index", ScalarType::Uint8, ScalarType::Int32),
            ],
        )
        .unwrap();
        assert_eq!(face_index_property(&ty).unwrap(), "vertex_index");
    }

    #[test]
    fn test_face_index_property_single_list() {
        let ty = ElementType::new(
            "face",
            vec![
                PropertyDescriptor::scalar("flags", ScalarType::Uint8),
                PropertyDescriptor::list("corners", ScalarType::Uint8, ScalarType::Uint32),
            ],
        )
        .unwrap();
        assert_eq!(face_index_property(&ty).unwrap(), "corners");
    }

    #[test]
    fn test_face_index_property_missing() {
        let ty = ElementType::new("face", vec![PropertyDescriptor::scalar("flags", ScalarType::Uint8)]).unwrap();
        assert!(matches!(face_index_property(&ty), Err(Error::InvalidSchema(_))));
    }

    #[test]
    fn test_resolve_index() {
        assert_eq!(resolve_index(0, 2, 3).unwrap(), 2);
        assert!(matches!(
            resolve_index(4, 3, 3),
            Err(Error::VertexIndexOutOfBounds { face: 4, index: 3, count: 3 })
        ));
        assert!(resolve_index(0, -1, 3).is_err());
    }

    #[test]
    fn test_require_scalars() {
        let ty = ElementType::new(
            "vertex",
            vec![
                PropertyDescriptor::scalar("x", ScalarType::Float32),
                PropertyDescriptor::list("y", ScalarType::Uint8, ScalarType::Float32),
            ],
        )
        .unwrap();
        assert!(require_scalars(&ty, &["x"]).is_ok());
        assert!(matches!(require_scalars(&ty, &["y"]), Err(Error::ShapeMismatch { .. })));
        assert!(matches!(require_scalars(&ty, &["z"]), Err(Error::PropertyNotFound { .. })));
    }

    #[test]
    fn test_require_float_scalars() {
        let ty = ElementType::new(
            "vertex",
            vec![
                PropertyDescriptor::scalar("nx", ScalarType::Float64),
                PropertyDescriptor::scalar("ny", ScalarType::Int16),
            ],
        )
        .unwrap();
        assert!(require_float_scalars(&ty, &["nx"]).is_ok());
        assert!(matches!(
            require_float_scalars(&ty, &["nx", "ny"]),
            Err(Error::TypeMismatch { ref property, .. }) if property == "ny"
        ));
    }
}
