//! Error types for the plymesh library.

use thiserror::Error;

/// Main error type for element stream operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Property name is not declared by the element type
    #[error("Property not found: {element}.{property}")]
    PropertyNotFound { element: String, property: String },

    /// Scalar accessor used on a list property or the other way round
    #[error("Shape mismatch on '{property}': expected {expected}, declared {actual}")]
    ShapeMismatch {
        property: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Value representation does not fit the declared scalar type
    #[error("Type mismatch on '{property}': expected {expected}, got {actual}")]
    TypeMismatch { property: String, expected: String, actual: String },

    /// Scalar property read before any value was set
    #[error("Property '{0}' has no value")]
    UnsetProperty(String),

    /// Integer value or list length outside the declared range
    #[error("Value {value} out of range for '{property}' ({scalar_type})")]
    ValueOutOfRange {
        property: String,
        value: i64,
        scalar_type: &'static str,
    },

    /// Two properties with the same name in one element type
    #[error("Duplicate property '{property}' in element type '{element}'")]
    DuplicateProperty { element: String, property: String },

    /// Element type declaration is not usable
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// Element bound to a different type than the stream expects
    #[error("Element type mismatch: expected '{expected}', got '{actual}'")]
    ElementTypeMismatch { expected: String, actual: String },

    /// Position or vertex index outside the buffered range
    #[error("Index {index} out of bounds (count: {count})")]
    IndexOutOfBounds { index: usize, count: usize },

    /// Positional access past the drained part of an incomplete buffer
    #[error("Position {index} not buffered yet ({buffered} drained, source not exhausted)")]
    BufferIncomplete { index: usize, buffered: usize },

    /// Face refers to a vertex that does not exist
    #[error("Face {face} refers to vertex {index} (vertex count: {count})")]
    VertexIndexOutOfBounds { face: usize, index: i64, count: usize },

    /// Face lists fewer than three vertices
    #[error("Face {face} has {count} vertex indices, at least 3 required")]
    DegenerateFace { face: usize, count: usize },

    /// Wrapped source failed earlier and cannot be drained further
    #[error("Source failed after {0} elements and cannot be drained further")]
    SourceFailed(usize),

    /// I/O error raised by an element source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid schema error.
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::InvalidSchema(msg.into())
    }

    /// Create a property-not-found error.
    pub fn not_found(element: impl Into<String>, property: impl Into<String>) -> Self {
        Self::PropertyNotFound {
            element: element.into(),
            property: property.into(),
        }
    }

    /// Returns true for violated preconditions, false for source failures.
    pub fn is_usage(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

/// Result type alias for plymesh operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::IndexOutOfBounds { index: 5, count: 3 };
        assert!(e.to_string().contains("5"));
        assert!(e.to_string().contains("3"));

        let e = Error::not_found("vertex", "nx");
        assert_eq!(e.to_string(), "Property not found: vertex.nx");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_usage());
    }

    #[test]
    fn test_usage_classification() {
        assert!(Error::UnsetProperty("x".into()).is_usage());
        assert!(Error::DegenerateFace { face: 0, count: 2 }.is_usage());
        assert!(Error::SourceFailed(4).is_usage());
        assert!(Error::schema("no vertex index list").is_usage());
    }
}
