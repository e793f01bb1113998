//! Widened property values.

use smallvec::SmallVec;
use std::fmt;

/// Integer list storage; most faces are triangles or quads.
pub type IntList = SmallVec<[i64; 4]>;

/// Floating point list storage.
pub type DoubleList = SmallVec<[f64; 4]>;

/// Value held by one property of an element.
///
/// Integer scalar types are widened to `i64`, floating types to `f64`, so
/// one container serves every schema.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Int(i64),
    Double(f64),
    IntList(IntList),
    DoubleList(DoubleList),
}

impl Value {
    /// Representation name used in error messages.
    pub fn repr_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Double(_) => "double",
            Self::IntList(_) => "int list",
            Self::DoubleList(_) => "double list",
        }
    }

    /// Equality with floating values compared within an absolute `epsilon`.
    ///
    /// Integers and list lengths still have to match exactly.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Double(a), Self::Double(b)) => close(*a, *b, epsilon),
            (Self::IntList(a), Self::IntList(b)) => a == b,
            (Self::DoubleList(a), Self::DoubleList(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| close(*x, *y, epsilon))
            }
            _ => false,
        }
    }
}

#[inline]
fn close(a: f64, b: f64, epsilon: f64) -> bool {
    a == b || (a - b).abs() <= epsilon
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Double(v) => write!(f, "{}", v),
            Self::IntList(v) => write!(f, "{:?}", v.as_slice()),
            Self::DoubleList(v) => write!(f, "{:?}", v.as_slice()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_value_approx_eq() {
        assert!(Value::Double(1.0).approx_eq(&Value::Double(1.0 + 1e-9), 1e-6));
        assert!(!Value::Double(1.0).approx_eq(&Value::Double(1.1), 1e-6));
        assert!(!Value::Int(1).approx_eq(&Value::Double(1.0), 1e-6));

        let a = Value::DoubleList(smallvec![0.5, 0.25]);
        let b = Value::DoubleList(smallvec![0.5 + 1e-8, 0.25]);
        let c = Value::DoubleList(smallvec![0.5]);
        assert!(a.approx_eq(&b, 1e-6));
        assert!(!a.approx_eq(&c, 1e-6));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::IntList(smallvec![0, 1, 2]).to_string(), "[0, 1, 2]");
        assert_eq!(Value::Double(0.5).repr_name(), "double");
    }
}
