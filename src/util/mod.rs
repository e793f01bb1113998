//! Utility types and functions for plymesh.
//!
//! This module contains fundamental types used throughout the library:
//! - [`ScalarType`] - Enum of property scalar types
//! - [`Error`] / [`Result`] - Error handling
//! - Math type re-exports from glam and [`BBox3d`]
//! - [`init_tracing`] - Opt-in log output

mod scalar;
mod error;
mod math;
mod logging;

pub use scalar::*;
pub use error::*;
pub use math::*;
pub use logging::*;
