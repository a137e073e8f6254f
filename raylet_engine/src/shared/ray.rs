use crate::core::types::{Number, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A parametric line, `P(t) = pos + t * dir`.
///
/// The direction is stored as given, it is not normalised (see [`Ray::normalised`]).
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pos: Point3,
    dir: Vector3,
}

impl Ray {
    pub fn new(pos: impl Into<Point3>, dir: impl Into<Vector3>) -> Self {
        Self {
            pos: pos.into(),
            dir: dir.into(),
        }
    }

    /// World-space coordinate the ray starts at
    #[inline(always)]
    pub fn origin(&self) -> &Point3 { &self.pos }

    /// Direction vector of the ray
    #[inline(always)]
    pub fn direction(&self) -> &Vector3 { &self.dir }

    /// Gets the position at a given distance along the ray
    ///
    /// `pos + (t * dir)`
    ///
    /// Negative `t` is allowed and gives points behind the origin.
    #[inline]
    pub fn at(&self, t: Number) -> Point3 { self.pos + t * self.dir }

    /// Returns a copy of this ray with the direction scaled to unit length, so that `t` measures distance.
    ///
    /// Returns [None] if the direction has no length (e.g. [`Ray::default`]), see [`Vector3::try_normalize`]
    pub fn normalised(self) -> Option<Self> {
        let dir = self.dir.try_normalize()?;
        Some(Self { pos: self.pos, dir })
    }
}
