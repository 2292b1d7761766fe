//! Mixed-radix fast Fourier transform over floating-point and fixed-point samples.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use crate::prime_factorization::Factor;
use crate::sample::{cdiv, cmul, Sample};
use num_complex::Complex;
use num_traits::identities::zero;

/// Precomputed state of a complex transform: the factor list and one full
/// turn of twiddles for each direction.
#[derive(Debug)]
pub struct MixedRadixData<T> {
    pub size: usize,
    pub factors: Vec<Factor>,
    pub omega: Vec<Complex<T>>,
    pub omega_back: Vec<Complex<T>>,
}

/// Writes the transform of `input` into `output` in one recursive pass.
pub fn convert_mixed<T: Sample>(
    data: &MixedRadixData<T>,
    input: &[Complex<T>],
    output: &mut [Complex<T>],
    is_back: bool,
) {
    let omega = if is_back {
        &data.omega_back
    } else {
        &data.omega
    };
    fft_kernel(input, output, 1, 1, &data.factors, omega, data.size, is_back);
}

/// One level of the decomposition. `factors[0]` names the radix of this
/// level; the sub-transforms of the residue classes are computed recursively
/// at `radix` times the stride, then combined by the level's butterfly.
#[allow(clippy::too_many_arguments)]
fn fft_kernel<T: Sample>(
    input: &[Complex<T>],
    output: &mut [Complex<T>],
    stride: usize,
    in_stride: usize,
    factors: &[Factor],
    omega: &[Complex<T>],
    size: usize,
    is_back: bool,
) {
    let Factor { radix, length } = factors[0];

    if length == 1 {
        for (q, out) in output.iter_mut().take(radix).enumerate() {
            *out = input[q * stride * in_stride];
        }
    } else {
        for q in 0..radix {
            fft_kernel(
                &input[q * stride * in_stride..],
                &mut output[q * length..(q + 1) * length],
                stride * radix,
                in_stride,
                &factors[1..],
                omega,
                size,
                is_back,
            );
        }
    }

    match radix {
        2 => mixed_kernel_radix2(output, stride, length, omega),
        4 => mixed_kernel_radix4(output, stride, length, omega, is_back),
        _ => mixed_kernel_other(output, stride, radix, length, omega, size),
    }
}

#[inline(always)]
fn mixed_kernel_radix2<T: Sample>(
    output: &mut [Complex<T>],
    stride: usize,
    length: usize,
    omega: &[Complex<T>],
) {
    let (front, back) = output.split_at_mut(length);
    for i in 0..length {
        if T::STAGE_SCALING {
            front[i] = cdiv(front[i], 2);
            back[i] = cdiv(back[i], 2);
        }

        let z = cmul(back[i], omega[i * stride]);
        back[i] = front[i] - z;
        front[i] += z;
    }
}

#[inline(always)]
fn mixed_kernel_radix4<T: Sample>(
    output: &mut [Complex<T>],
    stride: usize,
    length: usize,
    omega: &[Complex<T>],
    is_back: bool,
) {
    if T::STAGE_SCALING {
        for out in output.iter_mut() {
            *out = cdiv(*out, 4);
        }
    }

    for i in 0..length {
        let z0 = cmul(output[i + length], omega[i * stride]);
        let z1 = cmul(output[i + 2 * length], omega[i * stride * 2]);
        let z2 = cmul(output[i + 3 * length], omega[i * stride * 3]);

        let t0 = z0 + z2;
        let t1 = z0 - z2;
        let t2 = output[i] - z1;

        let mut even = output[i] + z1;
        output[i + 2 * length] = even - t0;
        even += t0;
        output[i] = even;

        // the j rotation of the odd outputs flips with the direction
        if is_back {
            output[i + length] = Complex::new(t2.re - t1.im, t2.im + t1.re);
            output[i + 3 * length] = Complex::new(t2.re + t1.im, t2.im - t1.re);
        } else {
            output[i + length] = Complex::new(t2.re + t1.im, t2.im - t1.re);
            output[i + 3 * length] = Complex::new(t2.re - t1.im, t2.im + t1.re);
        }
    }
}

#[inline]
fn mixed_kernel_other<T: Sample>(
    output: &mut [Complex<T>],
    stride: usize,
    radix: usize,
    length: usize,
    omega: &[Complex<T>],
    size: usize,
) {
    let mut scratch = vec![zero::<Complex<T>>(); radix];

    if T::STAGE_SCALING {
        for out in output.iter_mut() {
            *out = cdiv(*out, radix);
        }
    }

    for u in 0..length {
        for (q, slot) in scratch.iter_mut().enumerate() {
            *slot = output[u + q * length];
        }

        for q1 in 0..radix {
            let k = u + q1 * length;
            let mut acc = scratch[0];

            // stride * k never reaches size, so a single subtraction keeps
            // the running index inside the table
            let mut tw_index = 0;
            for &s in &scratch[1..] {
                tw_index += stride * k;
                if tw_index >= size {
                    tw_index -= size;
                }
                acc += cmul(s, omega[tw_index]);
            }
            output[k] = acc;
        }
    }
}
