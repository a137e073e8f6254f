//! Debug-only sanity checks.
//!
//! All of these compile down to nothing in release builds.

use crate::core::types::{Number, Point3, Vector3};
use crate::shared::ray::Ray;
use std::borrow::Borrow;

macro_rules! debug_assert_only {
    () => {
        if cfg!(not(debug_assertions)) {
            return;
        }
    };
}

#[inline(always)]
#[track_caller]
pub fn number(val: impl Borrow<Number>) {
    debug_assert_only!();

    let val = val.borrow();
    assert!(val.is_finite(), "should be finite; val: {val}");
}

#[inline(always)]
#[track_caller]
pub fn vector3(v: impl Borrow<Vector3>) {
    debug_assert_only!();
    let v = v.borrow();
    assert!(v.is_finite(), "should be finite; vec: {v:?}");
}

#[inline(always)]
#[track_caller]
pub fn normal3(n: impl Borrow<Vector3>) {
    debug_assert_only!();
    let n = n.borrow();
    vector3(n);
    assert!(
        n.is_normalized(),
        "should be normalised; vec: {n:?}, len: {:?}",
        n.length()
    );
}

#[inline(always)]
#[track_caller]
pub fn point3(p: impl Borrow<Point3>) {
    debug_assert_only!();
    let p = p.borrow();
    assert!(p.is_finite(), "should be finite; point: {p:?}");
}

#[inline(always)]
#[track_caller]
pub fn ray(r: impl Borrow<Ray>) {
    debug_assert_only!();
    let r = r.borrow();
    point3(r.origin());
    vector3(r.direction());
}
