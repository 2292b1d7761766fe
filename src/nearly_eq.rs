//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/.

use num_complex::Complex;

pub trait NearlyEq<Rhs: ?Sized = Self, Diff: ?Sized = Self> {
    fn eps() -> Diff;

    fn eq(&self, other: &Rhs, eps: &Diff) -> bool;
}

impl NearlyEq for f32 {
    fn eps() -> f32 {
        1e-2
    }

    fn eq(&self, other: &f32, eps: &f32) -> bool {
        *self == *other || (*self - *other).abs() < *eps
    }
}

impl NearlyEq for f64 {
    fn eps() -> f64 {
        1e-11
    }

    fn eq(&self, other: &f64, eps: &f64) -> bool {
        *self == *other || (*self - *other).abs() < *eps
    }
}

// Fixed-point samples compare in LSBs of their Q format.
impl NearlyEq for i16 {
    fn eps() -> i16 {
        2
    }

    fn eq(&self, other: &i16, eps: &i16) -> bool {
        (i32::from(*self) - i32::from(*other)).abs() <= i32::from(*eps)
    }
}

impl NearlyEq for i32 {
    fn eps() -> i32 {
        256
    }

    fn eq(&self, other: &i32, eps: &i32) -> bool {
        (i64::from(*self) - i64::from(*other)).abs() <= i64::from(*eps)
    }
}

impl<A, B, C: NearlyEq<A, B>> NearlyEq<Complex<A>, B> for Complex<C> {
    fn eps() -> B {
        C::eps()
    }

    fn eq(&self, other: &Complex<A>, eps: &B) -> bool {
        self.re.eq(&other.re, eps) && self.im.eq(&other.im, eps)
    }
}

impl<A, B, C: NearlyEq<A, B>> NearlyEq<[A], B> for [C] {
    fn eps() -> B {
        C::eps()
    }

    fn eq(&self, other: &[A], eps: &B) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.eq(b, eps))
    }
}

impl<A, B, C: NearlyEq<A, B>> NearlyEq<Vec<A>, B> for Vec<C> {
    fn eps() -> B {
        C::eps()
    }

    fn eq(&self, other: &Vec<A>, eps: &B) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.eq(b, eps))
    }
}

#[macro_export]
macro_rules! assert_nearly_eq {
    ($a:expr, $b:expr) => ({
        let (a, b) = (&$a, &$b);
        #[inline(always)]
        fn nearly_eq_default<A: ?Sized, B, C: $crate::nearly_eq::NearlyEq<A, B> + ?Sized>(
            a: &C,
            b: &A,
        ) -> bool {
            a.eq(b, &C::eps())
        }
        assert!(
            nearly_eq_default(a, b),
            "assertion failed: `(left ~= right)` (left: `{:?}`, right: `{:?}`)",
            *a,
            *b
        );
    });
    ($a:expr, $b:expr, $eps:expr) => ({
        let (a, b, eps) = (&$a, &$b, &$eps);
        #[inline(always)]
        fn nearly_eq<A: ?Sized, B, C: $crate::nearly_eq::NearlyEq<A, B> + ?Sized>(
            a: &C,
            b: &A,
            eps: &B,
        ) -> bool {
            a.eq(b, eps)
        }
        assert!(
            nearly_eq(a, b, eps),
            "assertion failed: `(left ~= right)` (left: `{:?}`, right: `{:?}`, eps: `{:?}`)",
            *a,
            *b,
            *eps
        );
    })
}
