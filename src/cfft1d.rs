//! Mixed-radix fast Fourier transform over floating-point and fixed-point samples.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use crate::mixed_radix::{self, MixedRadixData};
use crate::precompute_utils;
use crate::prime_factorization;
use crate::sample::Sample;
use num_complex::Complex;
use num_traits::identities::zero;

/// Perform a complex-to-complex one-dimensional Fourier transform.
///
/// Time-domain buffers hold interleaved sample pairs
/// `(re0, im0, re1, im1, ...)`, frequency-domain buffers hold one `Complex`
/// value per bin. Neither direction normalizes: in floating point a forward
/// transform followed by an inverse one yields the input scaled by the
/// transform length, while fixed-point samples additionally carry a
/// reciprocal-length factor per direction from the per-stage scaling.
///
/// An engine is immutable once built, so one instance may serve transforms
/// from several threads at a time as long as each call owns its buffers.
///
/// # Example
///
/// ```rust
/// use num_complex::Complex;
/// use qfft::CFft1D;
///
/// let time = [1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0];
/// let mut freq = [Complex::new(0.0, 0.0); 4];
///
/// let fft = CFft1D::<f64>::new(4);
/// fft.forward(&time, &mut freq);
///
/// assert!((freq[0].re - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct CFft1D<T> {
    data: MixedRadixData<T>,
}

impl<T: Sample> CFft1D<T> {
    /// Returns an engine for transforms of `size` complex samples.
    ///
    /// Any positive size is admissible; sizes that factor into small primes
    /// transform fastest, a prime size falls back to a single quadratic
    /// stage.
    ///
    /// # Panics
    /// Panics when `size` is zero.
    pub fn new(size: usize) -> Self {
        if size == 0 {
            panic!("invalid length: transform size must be at least 1");
        }

        let omega = precompute_utils::calc_omega(size);
        let omega_back = precompute_utils::calc_omega_back(&omega);

        Self {
            data: MixedRadixData {
                size,
                factors: prime_factorization::factorize(size),
                omega,
                omega_back,
            },
        }
    }

    /// The transform length.
    pub fn size(&self) -> usize {
        self.data.size
    }

    /// Transforms `2 * size` interleaved time samples into `size` bins.
    ///
    /// # Panics
    /// Panics when a buffer length does not match the transform size.
    pub fn forward(&self, time: &[T], freq: &mut [Complex<T>]) {
        let size = self.data.size;
        assert_eq!(
            time.len(),
            size * 2,
            "invalid length (time: {}, fft: {})",
            time.len(),
            size * 2
        );
        assert_eq!(
            freq.len(),
            size,
            "invalid length (freq: {}, fft: {})",
            freq.len(),
            size
        );

        let input = time
            .chunks_exact(2)
            .map(|pair| Complex::new(pair[0], pair[1]))
            .collect::<Vec<_>>();
        mixed_radix::convert_mixed(&self.data, &input, freq, false);
    }

    /// Transforms `size` bins back into `2 * size` interleaved time samples.
    ///
    /// # Panics
    /// Panics when a buffer length does not match the transform size.
    pub fn inverse(&self, freq: &[Complex<T>], time: &mut [T]) {
        let size = self.data.size;
        assert_eq!(
            freq.len(),
            size,
            "invalid length (freq: {}, fft: {})",
            freq.len(),
            size
        );
        assert_eq!(
            time.len(),
            size * 2,
            "invalid length (time: {}, fft: {})",
            time.len(),
            size * 2
        );

        let mut output = vec![zero(); size];
        mixed_radix::convert_mixed(&self.data, freq, &mut output, true);
        for (pair, value) in time.chunks_exact_mut(2).zip(&output) {
            pair[0] = value.re;
            pair[1] = value.im;
        }
    }
}
