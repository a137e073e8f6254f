pub mod math;
pub mod output;
pub mod ray;
pub mod rng;
pub mod validate;
