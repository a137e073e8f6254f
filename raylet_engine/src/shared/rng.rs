//! Helper module for RNG-related functions

use crate::core::types::{Channel, Colour, Vector3};
use crate::shared::validate;
use rand::Rng;
use std::ops::Range;

/// Returns a random vector in a unit cube (`-1..=1`)
pub fn vector_in_unit_cube<R: Rng>(rng: &mut R) -> Vector3 {
    let mut arr = [0.; 3];
    arr.fill_with(|| rng.gen_range(-1.0..=1.0));
    arr.into()
}

/// Returns a random vector in a unit sphere (`-1..=1`, `length <= 1`)
pub fn vector_in_unit_sphere<R: Rng>(rng: &mut R) -> Vector3 {
    loop {
        let v = vector_in_unit_cube(rng);
        if v.length_squared() <= 1. {
            break v;
        }
    }
}

/// Returns a random vector on a unit sphere (`-1..=1`, `length = 1`)
pub fn vector_on_unit_sphere<R: Rng>(rng: &mut R) -> Vector3 {
    loop {
        // Zero-length samples have no direction, try again
        let Some(vec) = vector_in_unit_sphere(rng).try_normalize() else {
            continue;
        };
        validate::normal3(vec);
        return vec;
    }
}

/// Returns a random colour, with each channel in the given range
pub fn colour_rgb_range<R: Rng>(rng: &mut R, range: Range<Channel>) -> Colour {
    let mut arr = [0.; 3];
    arr.fill_with(|| rng.gen_range(range.clone()));
    arr.into()
}
