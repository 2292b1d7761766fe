//! Mixed-radix fast Fourier transform over floating-point and fixed-point samples.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use crate::sample::Sample;
use num_complex::Complex;
use std::cmp;
use std::f64::consts::PI;

#[inline]
pub fn calc_omega_item<T: Sample>(len: usize, position: usize) -> Complex<T> {
    T::cis(-2.0 * PI * position as f64 / len as f64)
}

/// Forward twiddle table `omega[i] = exp(-2 pi i / len * i)` for `i` in
/// `0..=len`. The extra full-turn entry makes the reversed table the
/// element-wise conjugate of this one.
pub fn calc_omega<T: Sample>(len: usize) -> Vec<Complex<T>> {
    let mut omega = Vec::with_capacity(len + 1);
    omega.push(calc_omega_item(len, 0));
    if len.trailing_zeros() >= 2 {
        let q = len >> 2;
        let h = len >> 1;
        for i in 1..q {
            omega.push(calc_omega_item(len, i));
        }

        // remaining quadrants are rotations of the first
        for i in q..h {
            let tmp: Complex<T> = omega[i - q];
            omega.push(Complex::new(tmp.im, -tmp.re));
        }
        for i in h..len {
            let tmp = omega[i - h];
            omega.push(Complex::new(-tmp.re, -tmp.im));
        }
    } else if len & 1 == 0 {
        let h = cmp::max(len >> 1, 1);
        for i in 1..h {
            omega.push(calc_omega_item(len, i));
        }
        for i in h..len {
            let tmp = omega[i - h];
            omega.push(Complex::new(-tmp.re, -tmp.im));
        }
    } else {
        for i in 1..len {
            omega.push(calc_omega_item(len, i));
        }
    }
    let full_turn = omega[0];
    omega.push(full_turn);
    omega
}

/// Inverse table: the forward table walked backwards, which conjugates every
/// entry without recomputing any trigonometry.
pub fn calc_omega_back<T: Sample>(omega: &[Complex<T>]) -> Vec<Complex<T>> {
    omega.iter().rev().copied().collect()
}
