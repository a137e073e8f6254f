#![allow(dead_code)]

use rand::rngs::SmallRng;
use rand::SeedableRng;
use raylet_engine::core::types::*;
use raylet_engine::shared::rng;

pub type Rng = SmallRng;

/// How many random samples the property tests check
pub const SAMPLES: usize = 1000;
/// Absolute tolerance used when comparing results of floating-point maths
pub const EPSILON: Number = 1e-9;

/// Seeded, so failures can be reproduced
pub fn rng() -> Rng { SmallRng::seed_from_u64(0x5EED_CAFE) }

/// A random vector with components in `-10..=10`
pub fn vector<R: rand::Rng>(rng: &mut R) -> Vector3 { rng::vector_in_unit_cube(rng) * 10. }

pub fn point<R: rand::Rng>(rng: &mut R) -> Point3 { vector(rng).to_point() }

/// Calls `f` with [SAMPLES] pairs of random vectors
pub fn for_vector_pairs(mut f: impl FnMut(Vector3, Vector3)) {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let (u, v) = (vector(&mut rng), vector(&mut rng));
        f(u, v);
    }
}
