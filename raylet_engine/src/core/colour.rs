use crate::core::types::{Channel, Vector3};
use crate::{forward_fn, impl_op, impl_op_assign};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use static_assertions::assert_eq_size;
use std::array;
use std::fmt::{Display, Formatter};
use std::ops::{Deref, DerefMut, Index, IndexMut};

/// A colour with `N` channels, each nominally in the range `0..=1`.
///
/// The range is a convention only; nothing stops a channel from going negative or above one,
/// see [`crate::shared::output`] for what happens when such a colour is written out.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(transparent)] // Ensure it's treated as a raw array
pub struct Colour<const N: usize>(pub [Channel; N]);

pub type ColourRgb = Colour<3>;

assert_eq_size!(ColourRgb, [Channel; 3]);

impl<const N: usize> Colour<N> {
    /// How many channels there are, for this colour.
    /// RGB is 3 channels.
    pub const CHANNEL_COUNT: usize = N;
}

impl<const N: usize> Default for Colour<N> {
    fn default() -> Self { Self::BLACK }
}

// region Constructors

impl<const N: usize> Colour<N> {
    pub const fn new(val: [Channel; N]) -> Self { Self(val) }
}

// endregion Constructors

// region RGB Impl

impl ColourRgb {
    pub const RED: Self = Self::new([1., 0., 0.]);
    pub const GREEN: Self = Self::new([0., 1., 0.]);
    pub const BLUE: Self = Self::new([0., 0., 1.]);

    #[inline(always)]
    pub const fn r(&self) -> Channel { self.0[0] }
    #[inline(always)]
    pub const fn g(&self) -> Channel { self.0[1] }
    #[inline(always)]
    pub const fn b(&self) -> Channel { self.0[2] }
}

impl From<(Channel, Channel, Channel)> for ColourRgb {
    fn from(val: (Channel, Channel, Channel)) -> Self { Self::new(val.into()) }
}
impl From<ColourRgb> for (Channel, Channel, Channel) {
    fn from(Colour([r, g, b]): ColourRgb) -> Self { (r, g, b) }
}

// serde only implements arrays up to a fixed length, so these can't be derived for any `N`
impl Serialize for ColourRgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> { self.0.serialize(serializer) }
}
impl<'de> Deserialize<'de> for ColourRgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <[Channel; 3]>::deserialize(deserializer).map(Self)
    }
}

impl From<Vector3> for ColourRgb {
    fn from(val: Vector3) -> Self { Self::new(val.0) }
}
impl From<ColourRgb> for Vector3 {
    fn from(val: ColourRgb) -> Self { Vector3(val.0) }
}

// endregion RGB Impl

// region Known Colours

impl<const N: usize> Colour<N> {
    pub const BLACK: Self = Self::new([0.; N]);
    pub const WHITE: Self = Self::new([1.; N]);
}

// endregion Known Colours

// region To/From impls

impl<const N: usize> From<[Channel; N]> for Colour<N> {
    fn from(val: [Channel; N]) -> Self { Self::new(val) }
}
impl<const N: usize> From<Colour<N>> for [Channel; N] {
    fn from(Colour::<N>(val): Colour<N>) -> Self { val }
}

// endregion To/From impls

// region Iterating/Indexing

impl<const N: usize> IntoIterator for Colour<N> {
    type Item = Channel;
    type IntoIter = array::IntoIter<Channel, N>;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<const N: usize> Deref for Colour<N> {
    type Target = [Channel; N];

    fn deref(&self) -> &Self::Target { &self.0 }
}
impl<const N: usize> DerefMut for Colour<N> {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
}

impl<const N: usize> Index<usize> for Colour<N> {
    type Output = Channel;

    fn index(&self, index: usize) -> &Self::Output { &self.0[index] }
}
impl<const N: usize> IndexMut<usize> for Colour<N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output { &mut self.0[index] }
}

// endregion Iterating/Indexing

// region Operators

impl<const N: usize> Colour<N> {
    /// Maps each element of the colour with the given closure, and returns the new colour
    #[inline]
    pub fn map(&self, op: impl Fn(Channel) -> Channel) -> Self { self.0.map(op).into() }
    /// Maps each element of the colour with the given closure, with the element of another, and returns the new colour.
    #[inline]
    pub fn map2(&self, other: &Self, mut op: impl FnMut(Channel, Channel) -> Channel) -> Self {
        array::from_fn(|i| op(self[i], other[i])).into()
    }

    /// Same as [Self::map], but acts in_place
    #[inline]
    pub fn map_assign(&mut self, op: impl Fn(&mut Channel)) { self.0.iter_mut().for_each(op) }
    /// Same as [Self::map2], but acts in_place
    #[inline]
    pub fn map2_assign(&mut self, other: &Self, mut op: impl FnMut(&mut Channel, Channel)) {
        self.0.iter_mut().zip_eq(other.0).for_each(|(s, o)| op(s, o))
    }
}

// Basic maths operators
impl_op!(impl {<const N: usize>} std::ops::Add : fn add(a: Colour<N>, b: Colour<N>) -> Colour<N> { a.map2(&b, |x, y| x + y) });
impl_op!(impl {<const N: usize>} std::ops::Sub : fn sub(a: Colour<N>, b: Colour<N>) -> Colour<N> { a.map2(&b, |x, y| x - y) });
impl_op!(impl {<const N: usize>} std::ops::Mul : fn mul(a: Colour<N>, b: Colour<N>) -> Colour<N> { a.map2(&b, |x, y| x * y) });
impl_op!(impl {<const N: usize>} std::ops::Div : fn div(a: Colour<N>, b: Colour<N>) -> Colour<N> { a.map2(&b, |x, y| x / y) });

impl_op!(impl {<const N: usize>} std::ops::Add : fn add(a: Colour<N>, b: Channel) -> Colour<N> { a.map(|x| x + b) });
impl_op!(impl {<const N: usize>} std::ops::Sub : fn sub(a: Colour<N>, b: Channel) -> Colour<N> { a.map(|x| x - b) });
impl_op!(impl {<const N: usize>} std::ops::Mul : fn mul(a: Colour<N>, b: Channel) -> Colour<N> { a.map(|x| x * b) });
impl_op!(impl {<const N: usize>} std::ops::Mul : fn mul(b: Channel, a: Colour<N>) -> Colour<N> { a.map(|x| b * x) });
impl_op!(impl {<const N: usize>} std::ops::Div : fn div(a: Colour<N>, b: Channel) -> Colour<N> { a.map(|x| x / b) });

impl_op_assign!(impl {<const N: usize>} std::ops::AddAssign : fn add_assign(a: Colour<N>, b: Colour<N>) { a.map2_assign(&b, |x, y| *x += y) });
impl_op_assign!(impl {<const N: usize>} std::ops::SubAssign : fn sub_assign(a: Colour<N>, b: Colour<N>) { a.map2_assign(&b, |x, y| *x -= y) });
impl_op_assign!(impl {<const N: usize>} std::ops::MulAssign : fn mul_assign(a: Colour<N>, b: Colour<N>) { a.map2_assign(&b, |x, y| *x *= y) });
impl_op_assign!(impl {<const N: usize>} std::ops::DivAssign : fn div_assign(a: Colour<N>, b: Colour<N>) { a.map2_assign(&b, |x, y| *x /= y) });

impl_op_assign!(impl {<const N: usize>} std::ops::MulAssign : fn mul_assign(a: Colour<N>, b: Channel) { a.map_assign(|x| *x *= b) });
impl_op_assign!(impl {<const N: usize>} std::ops::DivAssign : fn div_assign(a: Colour<N>, b: Channel) { a.map_assign(|x| *x /= b) });

// endregion

// region Forwarding Operations

forward_fn! {
    impl {<const N: usize>} Colour<N> {
        abs();
        sqrt();

        min(min: Channel);
        max(max: Channel);
        clamp(min: Channel, max: Channel);

        powf(f: Channel);
    }
}

// endregion

/// Space-separated channels, in the same style as the vector types
impl<const N: usize> Display for Colour<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision();
        for (i, c) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            match precision {
                Some(p) => write!(f, "{c:.p$}")?,
                None => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}

// region Approx

impl<const N: usize> AbsDiffEq for Colour<N> {
    type Epsilon = Channel;

    fn default_epsilon() -> Self::Epsilon { Channel::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip_eq(other.0.iter())
            .all(|(a, b)| Channel::abs_diff_eq(a, b, epsilon))
    }
}

impl<const N: usize> RelativeEq for Colour<N> {
    fn default_max_relative() -> Self::Epsilon { Channel::default_max_relative() }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip_eq(other.0.iter())
            .all(|(a, b)| Channel::relative_eq(a, b, epsilon, max_relative))
    }
}

impl<const N: usize> UlpsEq for Colour<N> {
    fn default_max_ulps() -> u32 { Channel::default_max_ulps() }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip_eq(other.0.iter())
            .all(|(a, b)| Channel::ulps_eq(a, b, epsilon, max_ulps))
    }
}

// endregion Approx
