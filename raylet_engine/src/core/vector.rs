//! Three-component vector and point types.
//!
//! [`Vector3`] is a displacement and carries the full vector algebra. [`Point3`] is a position in space: points can be
//! offset by vectors, and the difference of two points is a vector, but two points can't be added together.
//! Colours live in [`crate::core::colour`]. All three are plain `[Number; 3]` underneath and convert into each
//! other for free, but only explicitly.

use crate::core::types::Number;
use crate::{impl_op, impl_op_assign, impl_op_unary};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use static_assertions::assert_eq_size;
use std::array;
use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut};

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Vector3(pub [Number; 3]);

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Point3(pub [Number; 3]);

// No hidden allocations or padding, these get passed around by value everywhere
assert_eq_size!(Vector3, [Number; 3]);
assert_eq_size!(Point3, [Number; 3]);

/// Everything that [`Vector3`] and [`Point3`] have in common: construction, component access, conversions,
/// formatting and approximate comparisons.
macro_rules! impl_xyz {
    ($ty:ident) => {
        // region Constructors

        impl $ty {
            pub const ZERO: Self = Self::splat(0.);

            pub const fn new(x: Number, y: Number, z: Number) -> Self { Self([x, y, z]) }

            /// Creates a new value with all components set to `v`
            pub const fn splat(v: Number) -> Self { Self([v; 3]) }
        }

        // endregion Constructors

        // region Accessors

        impl $ty {
            #[inline(always)]
            pub const fn x(&self) -> Number { self.0[0] }
            #[inline(always)]
            pub const fn y(&self) -> Number { self.0[1] }
            #[inline(always)]
            pub const fn z(&self) -> Number { self.0[2] }

            /// Checked component access, returns [None] if `index > 2`
            pub fn get(&self, index: usize) -> Option<Number> { self.0.get(index).copied() }

            pub fn is_finite(&self) -> bool { self.0.iter().all(|c| c.is_finite()) }
            pub fn is_nan(&self) -> bool { self.0.iter().any(|c| c.is_nan()) }

            /// Maps each component with the given closure, and returns the new value
            #[inline]
            pub fn map(&self, op: impl Fn(Number) -> Number) -> Self { Self(self.0.map(op)) }
            /// Maps each component with the given closure, paired with the matching component of `other`
            #[inline]
            pub fn map2(&self, other: &Self, mut op: impl FnMut(Number, Number) -> Number) -> Self {
                Self(array::from_fn(|i| op(self.0[i], other.0[i])))
            }
        }

        /// Component access by index.
        ///
        /// # Panics
        /// Panics if `index > 2`, see [`Self::get`] for a checked version
        impl Index<usize> for $ty {
            type Output = Number;

            fn index(&self, index: usize) -> &Self::Output { &self.0[index] }
        }
        impl IndexMut<usize> for $ty {
            fn index_mut(&mut self, index: usize) -> &mut Self::Output { &mut self.0[index] }
        }

        // endregion Accessors

        // region To/From impls

        impl From<[Number; 3]> for $ty {
            fn from(val: [Number; 3]) -> Self { Self(val) }
        }
        impl From<(Number, Number, Number)> for $ty {
            fn from((x, y, z): (Number, Number, Number)) -> Self { Self::new(x, y, z) }
        }
        impl From<$ty> for [Number; 3] {
            fn from(val: $ty) -> Self { val.0 }
        }
        impl From<$ty> for (Number, Number, Number) {
            fn from($ty([x, y, z]): $ty) -> Self { (x, y, z) }
        }

        // endregion To/From impls

        /// Space-separated components, no brackets or trailing newline: `"1 2.5 -3"`.
        ///
        /// A precision (`{:.3}`) is applied to every component.
        impl Display for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                let [x, y, z] = self.0;
                match f.precision() {
                    Some(p) => write!(f, "{x:.p$} {y:.p$} {z:.p$}"),
                    None => write!(f, "{x} {y} {z}"),
                }
            }
        }

        // region Approx

        impl AbsDiffEq for $ty {
            type Epsilon = Number;

            fn default_epsilon() -> Self::Epsilon { Number::default_epsilon() }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                self.0
                    .iter()
                    .zip_eq(other.0.iter())
                    .all(|(a, b)| Number::abs_diff_eq(a, b, epsilon))
            }
        }

        impl RelativeEq for $ty {
            fn default_max_relative() -> Self::Epsilon { Number::default_max_relative() }

            fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
                self.0
                    .iter()
                    .zip_eq(other.0.iter())
                    .all(|(a, b)| Number::relative_eq(a, b, epsilon, max_relative))
            }
        }

        impl UlpsEq for $ty {
            fn default_max_ulps() -> u32 { Number::default_max_ulps() }

            fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                self.0
                    .iter()
                    .zip_eq(other.0.iter())
                    .all(|(a, b)| Number::ulps_eq(a, b, epsilon, max_ulps))
            }
        }

        // endregion Approx
    };
}

impl_xyz!(Vector3);
impl_xyz!(Point3);

// region Vector3

impl Vector3 {
    pub const ONE: Self = Self::splat(1.);
    pub const X: Self = Self::new(1., 0., 0.);
    pub const Y: Self = Self::new(0., 1., 0.);
    pub const Z: Self = Self::new(0., 0., 1.);

    /// Squared euclidean length. Avoids the `sqrt()`, so prefer this for comparing lengths
    #[inline]
    pub fn length_squared(&self) -> Number { self.0.iter().map(|c| c * c).sum() }

    #[inline]
    pub fn length(&self) -> Number { self.length_squared().sqrt() }

    /// Sum of the component-wise products. Geometrically `|a| |b| cos(theta)`
    #[inline]
    pub fn dot(self, rhs: Self) -> Number {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = rhs.0;
        ax * bx + ay * by + az * bz
    }

    /// Right-handed cross product, perpendicular to both inputs.
    ///
    /// Anti-commutative: `a.cross(b) == -b.cross(a)`
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = rhs.0;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Scales the vector to unit length.
    ///
    /// # Zero Length
    /// The zero vector has no direction; normalising it divides by zero and gives `NaN` components.
    /// Vanishingly small vectors (whose squared length underflows to zero) behave the same way.
    /// Use [`Self::try_normalize`] if the input might be degenerate.
    #[inline]
    pub fn normalize(self) -> Self { self / self.length() }

    /// Scales the vector to unit length, or returns [None] if the length is zero (including underflow) or not finite
    pub fn try_normalize(self) -> Option<Self> {
        let len = self.length();
        if len > 0. && len.is_finite() {
            Some(self / len)
        } else {
            None
        }
    }

    /// Whether the length is `1` (within a small tolerance)
    pub fn is_normalized(&self) -> bool { (self.length_squared() - 1.).abs() <= 2e-4 }

    /// Reinterprets this displacement as a position (the offset from the origin)
    pub const fn to_point(self) -> Point3 { Point3(self.0) }
}

/// Free-function form of [`Vector3::dot`]
#[inline]
pub fn dot(u: Vector3, v: Vector3) -> Number { u.dot(v) }

/// Free-function form of [`Vector3::cross`]
#[inline]
pub fn cross(u: Vector3, v: Vector3) -> Vector3 { u.cross(v) }

/// Free-function form of [`Vector3::normalize`], with the same zero-length caveat
#[inline]
pub fn unit_vector(v: Vector3) -> Vector3 { v.normalize() }

impl_op_unary!(impl std::ops::Neg : fn neg(a: Vector3) -> Vector3 { a.map(|c| -c) });

impl_op!(impl std::ops::Add : fn add(a: Vector3, b: Vector3) -> Vector3 { a += b; a });
impl_op!(impl std::ops::Sub : fn sub(a: Vector3, b: Vector3) -> Vector3 { a + -b });
// Component-wise (Hadamard) product, not a dot or cross product
impl_op!(impl std::ops::Mul : fn mul(a: Vector3, b: Vector3) -> Vector3 { a.map2(&b, |x, y| x * y) });

impl_op!(impl std::ops::Mul : fn mul(a: Vector3, t: Number) -> Vector3 { a.map(|c| c * t) });
impl_op!(impl std::ops::Mul : fn mul(t: Number, a: Vector3) -> Vector3 { a * t });
impl_op!(impl std::ops::Div : fn div(a: Vector3, t: Number) -> Vector3 { a * (1. / t) });

impl_op_assign!(impl std::ops::AddAssign : fn add_assign(a: Vector3, b: Vector3) { a = a.map2(&b, |x, y| x + y) });
impl_op_assign!(impl std::ops::SubAssign : fn sub_assign(a: Vector3, b: Vector3) { a += -b });
impl_op_assign!(impl std::ops::MulAssign : fn mul_assign(a: Vector3, t: Number) { a = a.map(|c| c * t) });
impl_op_assign!(impl std::ops::DivAssign : fn div_assign(a: Vector3, t: Number) { a *= 1. / t });

// endregion Vector3

// region Point3

impl Point3 {
    /// The displacement of this point from the origin
    pub const fn to_vector(self) -> Vector3 { Vector3(self.0) }
}

impl From<Vector3> for Point3 {
    fn from(val: Vector3) -> Self { val.to_point() }
}
impl From<Point3> for Vector3 {
    fn from(val: Point3) -> Self { val.to_vector() }
}

impl_op_unary!(impl std::ops::Neg : fn neg(p: Point3) -> Point3 { p.map(|c| -c) });

impl_op!(impl std::ops::Add : fn add(p: Point3, v: Vector3) -> Point3 { p += v; p });
impl_op!(impl std::ops::Sub : fn sub(p: Point3, v: Vector3) -> Point3 { p + -v });
impl_op!(impl std::ops::Sub : fn sub(a: Point3, b: Point3) -> Vector3 { a.to_vector() - b.to_vector() });

impl_op_assign!(impl std::ops::AddAssign : fn add_assign(p: Point3, v: Vector3) { p = (p.to_vector() + v).to_point() });
impl_op_assign!(impl std::ops::SubAssign : fn sub_assign(p: Point3, v: Vector3) { p += -v });

// endregion Point3
