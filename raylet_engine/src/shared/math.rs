use crate::core::types::{Colour, Number};

/// Your standard linear interpolation function
///
/// `t = 0` gives `a`, `t = 1` gives `b`
pub fn lerp(a: Colour, b: Colour, t: Number) -> Colour { (1. - t) * a + t * b }
