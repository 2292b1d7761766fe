//! Mixed-radix fast Fourier transform over floating-point and fixed-point samples.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use num_complex::Complex;
use num_traits::{Num, NumAssign};
use std::fmt::Debug;
use std::ops::Neg;

/// Scalar sample of a transform.
///
/// Implemented for `f32` and `f64`, which compute in ordinary IEEE
/// arithmetic, and for `i16` and `i32`, which are interpreted as Q15/Q31
/// fixed point with values in `[-1, +1)` mapped onto the full integer range.
///
/// The fixed-point impls round to nearest and rely on the per-stage scaling
/// of the butterflies to keep intermediates in range; inputs that still
/// overflow wrap silently.
pub trait Sample: Copy + Num + NumAssign + Neg<Output = Self> + Debug {
    /// Whether butterflies must divide their inputs by the radix before
    /// combining them. A complete fixed-point transform therefore comes out
    /// scaled by the reciprocal of its length.
    const STAGE_SCALING: bool;

    /// Half of `self`. Fixed point rounds toward negative infinity.
    fn halve(self) -> Self;

    /// Product of two samples in the sample's own scale.
    fn smul(self, rhs: Self) -> Self;

    /// `self` divided by a small positive integer.
    fn sdiv(self, divisor: usize) -> Self;

    /// The point of the unit circle at `phase` radians.
    fn cis(phase: f64) -> Complex<Self>;
}

impl Sample for f32 {
    const STAGE_SCALING: bool = false;

    #[inline]
    fn halve(self) -> Self {
        self * 0.5
    }

    #[inline]
    fn smul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline]
    fn sdiv(self, divisor: usize) -> Self {
        self / divisor as f32
    }

    #[inline]
    fn cis(phase: f64) -> Complex<Self> {
        Complex::new(phase.cos() as f32, phase.sin() as f32)
    }
}

impl Sample for f64 {
    const STAGE_SCALING: bool = false;

    #[inline]
    fn halve(self) -> Self {
        self * 0.5
    }

    #[inline]
    fn smul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline]
    fn sdiv(self, divisor: usize) -> Self {
        self / divisor as f64
    }

    #[inline]
    fn cis(phase: f64) -> Complex<Self> {
        Complex::new(phase.cos(), phase.sin())
    }
}

impl Sample for i16 {
    const STAGE_SCALING: bool = true;

    #[inline]
    fn halve(self) -> Self {
        self >> 1
    }

    #[inline]
    fn smul(self, rhs: Self) -> Self {
        const FRAC_BITS: u32 = i16::BITS - 1;
        ((i32::from(self) * i32::from(rhs) + (1 << (FRAC_BITS - 1))) >> FRAC_BITS) as i16
    }

    #[inline]
    fn sdiv(self, divisor: usize) -> Self {
        self.smul(i16::MAX / divisor as i16)
    }

    #[inline]
    fn cis(phase: f64) -> Complex<Self> {
        Complex::new(
            (0.5 + f64::from(i16::MAX) * phase.cos()).floor() as i16,
            (0.5 + f64::from(i16::MAX) * phase.sin()).floor() as i16,
        )
    }
}

impl Sample for i32 {
    const STAGE_SCALING: bool = true;

    #[inline]
    fn halve(self) -> Self {
        self >> 1
    }

    #[inline]
    fn smul(self, rhs: Self) -> Self {
        const FRAC_BITS: u32 = i32::BITS - 1;
        ((i64::from(self) * i64::from(rhs) + (1i64 << (FRAC_BITS - 1))) >> FRAC_BITS) as i32
    }

    #[inline]
    fn sdiv(self, divisor: usize) -> Self {
        self.smul(i32::MAX / divisor as i32)
    }

    #[inline]
    fn cis(phase: f64) -> Complex<Self> {
        Complex::new(
            (0.5 + f64::from(i32::MAX) * phase.cos()).floor() as i32,
            (0.5 + f64::from(i32::MAX) * phase.sin()).floor() as i32,
        )
    }
}

/// Complex product expressed through [`Sample::smul`] so that fixed-point
/// samples round the same way in every kernel.
#[inline]
pub(crate) fn cmul<T: Sample>(a: Complex<T>, b: Complex<T>) -> Complex<T> {
    Complex::new(
        a.re.smul(b.re) - a.im.smul(b.im),
        a.re.smul(b.im) + a.im.smul(b.re),
    )
}

#[inline]
pub(crate) fn cdiv<T: Sample>(c: Complex<T>, divisor: usize) -> Complex<T> {
    Complex::new(c.re.sdiv(divisor), c.im.sdiv(divisor))
}

#[inline]
pub(crate) fn chalve<T: Sample>(c: Complex<T>) -> Complex<T> {
    Complex::new(c.re.halve(), c.im.halve())
}
