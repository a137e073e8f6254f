use crate::core::colour::ColourRgb;

/// Numeric type used for most calculations in the engine
pub type Number = f64;
/// Numeric type used for a single colour channel
pub type Channel = f64;
pub type Colour = ColourRgb;

pub use crate::core::vector::{Point3, Vector3};
