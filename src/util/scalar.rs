//! Scalar types - fundamental storage types of PLY properties.

use std::fmt;

/// Scalar type enum - the numeric types a property may declare.
///
/// Values of every type are widened on storage: integer types to `i64`,
/// floating types to `f64`. The declared type only bounds what may be stored
/// and tells encoders how wide the value is on disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ScalarType {
    /// Signed 8-bit integer (`char`)
    Int8 = 0,
    /// Unsigned 8-bit integer (`uchar`)
    Uint8 = 1,
    /// Signed 16-bit integer (`short`)
    Int16 = 2,
    /// Unsigned 16-bit integer (`ushort`)
    Uint16 = 3,
    /// Signed 32-bit integer (`int`)
    Int32 = 4,
    /// Unsigned 32-bit integer (`uint`)
    Uint32 = 5,
    /// 32-bit floating point (`float`)
    Float32 = 6,
    /// 64-bit floating point (`double`)
    Float64 = 7,
}

impl ScalarType {
    /// Number of scalar types.
    pub const COUNT: usize = 8;

    /// All scalar types in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Int8,
        Self::Uint8,
        Self::Int16,
        Self::Uint16,
        Self::Int32,
        Self::Uint32,
        Self::Float32,
        Self::Float64,
    ];

    /// Returns the encoded size in bytes of a single value of this type.
    #[inline]
    pub const fn num_bytes(self) -> usize {
        match self {
            Self::Int8 | Self::Uint8 => 1,
            Self::Int16 | Self::Uint16 => 2,
            Self::Int32 | Self::Uint32 | Self::Float32 => 4,
            Self::Float64 => 8,
        }
    }

    /// Returns the canonical PLY name of this type.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int8 => "char",
            Self::Uint8 => "uchar",
            Self::Int16 => "short",
            Self::Uint16 => "ushort",
            Self::Int32 => "int",
            Self::Uint32 => "uint",
            Self::Float32 => "float",
            Self::Float64 => "double",
        }
    }

    /// Parse a scalar type from a PLY type word.
    ///
    /// Accepts the canonical names as well as the sized aliases
    /// (`int8`, `uint8`, ..., `float32`, `float64`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "char" | "int8" => Some(Self::Int8),
            "uchar" | "uint8" => Some(Self::Uint8),
            "short" | "int16" => Some(Self::Int16),
            "ushort" | "uint16" => Some(Self::Uint16),
            "int" | "int32" => Some(Self::Int32),
            "uint" | "uint32" => Some(Self::Uint32),
            "float" | "float32" => Some(Self::Float32),
            "double" | "float64" => Some(Self::Float64),
            _ => None,
        }
    }

    /// Returns true if this is an integer type.
    #[inline]
    pub const fn is_integer(self) -> bool {
        !self.is_float()
    }

    /// Returns true if this is a floating point type.
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    /// Inclusive value range of an integer type, `None` for floats.
    pub const fn int_range(self) -> Option<(i64, i64)> {
        match self {
            Self::Int8 => Some((i8::MIN as i64, i8::MAX as i64)),
            Self::Uint8 => Some((0, u8::MAX as i64)),
            Self::Int16 => Some((i16::MIN as i64, i16::MAX as i64)),
            Self::Uint16 => Some((0, u16::MAX as i64)),
            Self::Int32 => Some((i32::MIN as i64, i32::MAX as i64)),
            Self::Uint32 => Some((0, u32::MAX as i64)),
            Self::Float32 | Self::Float64 => None,
        }
    }

    /// Returns true if `value` can be stored in this type without loss.
    #[inline]
    pub fn holds(self, value: i64) -> bool {
        match self.int_range() {
            Some((min, max)) => (min..=max).contains(&value),
            None => true,
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_sizes() {
        assert_eq!(ScalarType::Int8.num_bytes(), 1);
        assert_eq!(ScalarType::Uint16.num_bytes(), 2);
        assert_eq!(ScalarType::Uint32.num_bytes(), 4);
        assert_eq!(ScalarType::Float32.num_bytes(), 4);
        assert_eq!(ScalarType::Float64.num_bytes(), 8);
    }

    #[test]
    fn test_scalar_names() {
        assert_eq!(ScalarType::Uint8.name(), "uchar");
        assert_eq!(ScalarType::from_name("float32"), Some(ScalarType::Float32));
        assert_eq!(ScalarType::from_name("uint8"), Some(ScalarType::Uint8));
        assert_eq!(ScalarType::from_name("float16"), None);
        for ty in ScalarType::ALL {
            assert_eq!(ScalarType::from_name(ty.name()), Some(ty));
        }
    }

    #[test]
    fn test_int_ranges() {
        assert!(ScalarType::Uint8.holds(255));
        assert!(!ScalarType::Uint8.holds(256));
        assert!(!ScalarType::Uint32.holds(-1));
        assert!(ScalarType::Int8.holds(-128));
        assert!(ScalarType::Float32.holds(i64::MAX));
        assert_eq!(ScalarType::Float64.int_range(), None);
    }
}
