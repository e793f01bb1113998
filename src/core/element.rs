//! Elements - typed records of one element type.

use super::{DoubleList, ElementType, IntList, PropertyKind, Value};
use crate::util::{Error, Result, ScalarType};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// One record of an element stream (a vertex, a face, ...).
///
/// An element is bound to its [`ElementType`] for life and stores one slot
/// per declared property, in declaration order. Scalars start unset and
/// reading them before a value is assigned is an error. Lists start empty.
#[derive(Clone)]
pub struct Element {
    ty: Arc<ElementType>,
    values: Vec<Option<Value>>,
}

impl Element {
    /// Create an empty element of the given type.
    pub fn new(ty: Arc<ElementType>) -> Self {
        let values = ty.properties().iter().map(|p| initial_value(p.kind)).collect();
        Self { ty, values }
    }

    /// Get the element type.
    pub fn element_type(&self) -> &Arc<ElementType> {
        &self.ty
    }

    /// Check if a property has a value. Lists always do.
    pub fn is_set(&self, name: &str) -> Result<bool> {
        let (idx, _) = self.ty.require(name)?;
        Ok(self.values[idx].is_some())
    }

    /// Raw value of a property, `None` for an unset scalar.
    pub fn value(&self, name: &str) -> Result<Option<&Value>> {
        let (idx, _) = self.ty.require(name)?;
        Ok(self.values[idx].as_ref())
    }

    // ========================================================================
    // Scalar access
    // ========================================================================

    /// Read an integer scalar.
    pub fn get_int(&self, name: &str) -> Result<i64> {
        let (idx, ty) = self.scalar_slot(name)?;
        match &self.values[idx] {
            Some(Value::Int(v)) => Ok(*v),
            Some(other) => Err(type_mismatch(name, ty.name(), other.repr_name())),
            None => Err(Error::UnsetProperty(name.to_string())),
        }
    }

    /// Read a scalar as `f64`; integer values are converted.
    pub fn get_double(&self, name: &str) -> Result<f64> {
        let (idx, _) = self.scalar_slot(name)?;
        match &self.values[idx] {
            Some(Value::Double(v)) => Ok(*v),
            Some(Value::Int(v)) => Ok(*v as f64),
            Some(other) => Err(type_mismatch(name, "scalar", other.repr_name())),
            None => Err(Error::UnsetProperty(name.to_string())),
        }
    }

    /// Set an integer scalar.
    ///
    /// The value must fit the declared integer type. Float properties
    /// store the converted value.
    pub fn set_int(&mut self, name: &str, value: i64) -> Result<()> {
        let (idx, ty) = self.scalar_slot(name)?;
        let stored = if ty.is_float() {
            Value::Double(value as f64)
        } else {
            check_range(name, ty, value)?;
            Value::Int(value)
        };
        self.values[idx] = Some(stored);
        Ok(())
    }

    /// Set a floating point scalar. Integer properties reject doubles.
    pub fn set_double(&mut self, name: &str, value: f64) -> Result<()> {
        let (idx, ty) = self.scalar_slot(name)?;
        if ty.is_integer() {
            return Err(type_mismatch(name, ty.name(), "double"));
        }
        self.values[idx] = Some(Value::Double(value));
        Ok(())
    }

    // ========================================================================
    // List access
    // ========================================================================

    /// Read an integer list. Unset lists read as empty.
    pub fn get_int_list(&self, name: &str) -> Result<&[i64]> {
        let (idx, _, item) = self.list_slot(name)?;
        match &self.values[idx] {
            Some(Value::IntList(v)) => Ok(v.as_slice()),
            Some(other) => Err(type_mismatch(name, item.name(), other.repr_name())),
            None => Ok(&[]),
        }
    }

    /// Read a list as `f64`; integer items are converted.
    pub fn get_double_list(&self, name: &str) -> Result<Cow<'_, [f64]>> {
        let (idx, _, _) = self.list_slot(name)?;
        match &self.values[idx] {
            Some(Value::DoubleList(v)) => Ok(Cow::Borrowed(v.as_slice())),
            Some(Value::IntList(v)) => Ok(Cow::Owned(v.iter().map(|&i| i as f64).collect())),
            Some(other) => Err(type_mismatch(name, "list", other.repr_name())),
            None => Ok(Cow::Borrowed(&[])),
        }
    }

    /// Set an integer list, checking length and item ranges.
    pub fn set_int_list(&mut self, name: &str, values: &[i64]) -> Result<()> {
        let (idx, count, item) = self.list_slot(name)?;
        check_range(name, count, values.len() as i64)?;
        let stored = if item.is_float() {
            Value::DoubleList(values.iter().map(|&v| v as f64).collect())
        } else {
            for &v in values {
                check_range(name, item, v)?;
            }
            Value::IntList(IntList::from_slice(values))
        };
        self.values[idx] = Some(stored);
        Ok(())
    }

    /// Set a floating point list. Integer item types reject doubles.
    pub fn set_double_list(&mut self, name: &str, values: &[f64]) -> Result<()> {
        let (idx, count, item) = self.list_slot(name)?;
        if item.is_integer() {
            return Err(type_mismatch(name, item.name(), "double list"));
        }
        check_range(name, count, values.len() as i64)?;
        self.values[idx] = Some(Value::DoubleList(DoubleList::from_slice(values)));
        Ok(())
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Equality with floating values compared within an absolute `epsilon`.
    pub fn approx_eq(&self, other: &Element, epsilon: f64) -> bool {
        self.compare(other, |a, b| a.approx_eq(b, epsilon))
    }

    fn compare(&self, other: &Element, eq: impl Fn(&Value, &Value) -> bool) -> bool {
        if *self.ty != *other.ty {
            return false;
        }
        self.ty.properties().iter().zip(&self.values).all(|(prop, mine)| {
            let Some(idx) = other.ty.index_of(&prop.name) else { return false };
            match (mine, &other.values[idx]) {
                (Some(a), Some(b)) => eq(a, b),
                (None, None) => true,
                _ => false,
            }
        })
    }

    /// Re-bind to a type that declares every current property.
    ///
    /// Values follow their property by name, so the new type may list the
    /// properties in another order. Properties only the new type declares
    /// start unset (or empty for lists).
    pub(crate) fn rebind(&mut self, ty: Arc<ElementType>) -> Result<()> {
        if Arc::ptr_eq(&self.ty, &ty) {
            return Ok(());
        }
        if !self.ty.is_subset_of(&ty) {
            return Err(Error::ElementTypeMismatch {
                expected: ty.name().to_string(),
                actual: self.ty.name().to_string(),
            });
        }

        let mut old = std::mem::take(&mut self.values);
        self.values = ty
            .properties()
            .iter()
            .map(|p| match self.ty.index_of(&p.name) {
                Some(idx) => old[idx].take(),
                None => initial_value(p.kind),
            })
            .collect();
        self.ty = ty;
        Ok(())
    }

    // ========================================================================
    // Slot lookup
    // ========================================================================

    fn scalar_slot(&self, name: &str) -> Result<(usize, ScalarType)> {
        let (idx, prop) = self.ty.require(name)?;
        match prop.kind {
            PropertyKind::Scalar(ty) => Ok((idx, ty)),
            kind => Err(shape_mismatch(name, "scalar", kind)),
        }
    }

    fn list_slot(&self, name: &str) -> Result<(usize, ScalarType, ScalarType)> {
        let (idx, prop) = self.ty.require(name)?;
        match prop.kind {
            PropertyKind::List { count, item } => Ok((idx, count, item)),
            kind => Err(shape_mismatch(name, "list", kind)),
        }
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other, |a, b| a == b)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.ty.name())?;
        let mut map = f.debug_map();
        for (prop, value) in self.ty.properties().iter().zip(&self.values) {
            match value {
                Some(v) => map.entry(&prop.name, &format_args!("{}", v)),
                None => map.entry(&prop.name, &format_args!("<unset>")),
            };
        }
        map.finish()
    }
}

fn initial_value(kind: PropertyKind) -> Option<Value> {
    match kind {
        PropertyKind::Scalar(_) => None,
        PropertyKind::List { item, .. } if item.is_float() => Some(Value::DoubleList(DoubleList::new())),
        PropertyKind::List { .. } => Some(Value::IntList(IntList::new())),
    }
}

fn check_range(name: &str, ty: ScalarType, value: i64) -> Result<()> {
    if ty.holds(value) {
        Ok(())
    } else {
        Err(Error::ValueOutOfRange {
            property: name.to_string(),
            value,
            scalar_type: ty.name(),
        })
    }
}

fn type_mismatch(name: &str, expected: &str, actual: &str) -> Error {
    Error::TypeMismatch {
        property: name.to_string(),
        expected: expected.to_string(),
        actual: actual.to_string(),
    }
}

fn shape_mismatch(name: &str, expected: &'static str, declared: PropertyKind) -> Error {
    Error::ShapeMismatch {
        property: name.to_string(),
        expected,
        actual: declared.shape(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PropertyDescriptor;

    fn vertex_type() -> Arc<ElementType> {
        ElementType::shared(
            "vertex",
            vec![
                PropertyDescriptor::scalar("x", ScalarType::Float32),
                PropertyDescriptor::scalar("y", ScalarType::Float64),
                PropertyDescriptor::scalar("red", ScalarType::Uint8),
                PropertyDescriptor::list("weights", ScalarType::Uint8, ScalarType::Float32),
            ],
        )
        .unwrap()
    }

    fn face_type() -> Arc<ElementType> {
        ElementType::shared(
            "face",
            vec![PropertyDescriptor::list("vertex_indices", ScalarType::Uint8, ScalarType::Int32)],
        )
        .unwrap()
    }

    #[test]
    fn test_scalar_roundtrip_any_order() {
        let mut e = Element::new(vertex_type());
        e.set_int("red", 200).unwrap();
        e.set_double("y", -2.25).unwrap();
        e.set_double("x", 0.1).unwrap();
        e.set_double("x", 0.3).unwrap();

        assert_eq!(e.get_double("x").unwrap(), 0.3);
        assert_eq!(e.get_double("y").unwrap(), -2.25);
        assert_eq!(e.get_int("red").unwrap(), 200);
        assert_eq!(e.get_double("red").unwrap(), 200.0);
    }

    #[test]
    fn test_list_roundtrip() {
        let mut f = Element::new(face_type());
        assert!(f.get_int_list("vertex_indices").unwrap().is_empty());

        f.set_int_list("vertex_indices", &[0, 1, 2, 3]).unwrap();
        assert_eq!(f.get_int_list("vertex_indices").unwrap(), &[0, 1, 2, 3]);
        assert_eq!(f.get_double_list("vertex_indices").unwrap().as_ref(), &[0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_unset_scalar_is_error() {
        let e = Element::new(vertex_type());
        assert!(matches!(e.get_double("x"), Err(Error::UnsetProperty(ref n)) if n == "x"));
        assert!(!e.is_set("x").unwrap());
        assert!(e.is_set("weights").unwrap());
    }

    #[test]
    fn test_undeclared_and_shape_errors() {
        let mut e = Element::new(vertex_type());
        assert!(matches!(e.set_double("nx", 1.0), Err(Error::PropertyNotFound { .. })));
        assert!(matches!(e.get_int_list("x"), Err(Error::ShapeMismatch { .. })));
        assert!(matches!(e.set_double("weights", 1.0), Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn test_type_conversions() {
        let mut e = Element::new(vertex_type());
        // int into float property is widened
        e.set_int("x", 3).unwrap();
        assert_eq!(e.get_double("x").unwrap(), 3.0);
        assert!(matches!(e.get_int("x"), Err(Error::TypeMismatch { .. })));
        // double into int property would lose data
        assert!(matches!(e.set_double("red", 1.5), Err(Error::TypeMismatch { .. })));
    }

    #[test]
    fn test_range_checks() {
        let mut e = Element::new(vertex_type());
        assert!(matches!(e.set_int("red", 256), Err(Error::ValueOutOfRange { value: 256, .. })));
        assert!(matches!(e.set_int("red", -1), Err(Error::ValueOutOfRange { .. })));

        let mut f = Element::new(face_type());
        let long: Vec<i64> = (0..300).collect();
        assert!(matches!(f.set_int_list("vertex_indices", &long), Err(Error::ValueOutOfRange { value: 300, .. })));
    }

    #[test]
    fn test_equality() {
        let mut a = Element::new(vertex_type());
        let mut b = Element::new(vertex_type());
        assert_eq!(a, b);

        a.set_double("x", 1.0).unwrap();
        assert_ne!(a, b);
        b.set_double("x", 1.0 + 1e-9).unwrap();
        assert_ne!(a, b);
        assert!(a.approx_eq(&b, 1e-6));

        let f = Element::new(face_type());
        assert_ne!(Element::new(vertex_type()), f);
    }

    #[test]
    fn test_equality_across_property_order() {
        let ty_a = ElementType::shared(
            "vertex",
            vec![
                PropertyDescriptor::scalar("x", ScalarType::Float32),
                PropertyDescriptor::scalar("y", ScalarType::Float32),
            ],
        )
        .unwrap();
        let ty_b = ElementType::shared(
            "vertex",
            vec![
                PropertyDescriptor::scalar("y", ScalarType::Float32),
                PropertyDescriptor::scalar("x", ScalarType::Float32),
            ],
        )
        .unwrap();
        let mut a = Element::new(ty_a);
        let mut b = Element::new(ty_b);
        a.set_double("x", 1.0).unwrap();
        a.set_double("y", 2.0).unwrap();
        b.set_double("y", 2.0).unwrap();
        b.set_double("x", 1.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rebind_extends() {
        let ty = vertex_type();
        let mut e = Element::new(ty.clone());
        e.set_double("x", 4.0).unwrap();

        let wider = Arc::new(ty.extended(&[PropertyDescriptor::scalar("nx", ScalarType::Float32)]).unwrap());
        e.rebind(wider).unwrap();
        assert_eq!(e.get_double("x").unwrap(), 4.0);
        assert!(!e.is_set("nx").unwrap());
        e.set_double("nx", 1.0).unwrap();

        assert!(e.rebind(face_type()).is_err());
    }

    #[test]
    fn test_rebind_reordered_type() {
        let ty = ElementType::shared(
            "vertex",
            vec![
                PropertyDescriptor::scalar("z", ScalarType::Float32),
                PropertyDescriptor::scalar("y", ScalarType::Float32),
                PropertyDescriptor::scalar("x", ScalarType::Float32),
            ],
        )
        .unwrap();
        let mut e = Element::new(ty);
        e.set_double("x", 1.0).unwrap();
        e.set_double("z", 3.0).unwrap();

        let target = ElementType::shared(
            "vertex",
            vec![
                PropertyDescriptor::scalar("x", ScalarType::Float32),
                PropertyDescriptor::scalar("y", ScalarType::Float32),
                PropertyDescriptor::scalar("z", ScalarType::Float32),
                PropertyDescriptor::scalar("nx", ScalarType::Float32),
            ],
        )
        .unwrap();
        e.rebind(target.clone()).unwrap();

        assert!(Arc::ptr_eq(e.element_type(), &target));
        assert_eq!(e.get_double("x").unwrap(), 1.0);
        assert!(!e.is_set("y").unwrap());
        assert_eq!(e.get_double("z").unwrap(), 3.0);
        assert!(!e.is_set("nx").unwrap());
        assert_eq!(format!("{:?}", e), "vertex {\"x\": 1, \"y\": <unset>, \"z\": 3, \"nx\": <unset>}");
    }
}
