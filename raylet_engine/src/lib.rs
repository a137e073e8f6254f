//! Geometric primitives for a ray tracer: vectors, points, colours, rays, and colour output.

pub mod core;
pub mod shared;
