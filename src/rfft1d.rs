//! Mixed-radix fast Fourier transform over floating-point and fixed-point samples.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use crate::cfft1d::CFft1D;
use crate::sample::{cdiv, chalve, cmul, Sample};
use num_complex::Complex;
use num_traits::identities::zero;
use std::f64::consts::PI;

/// Perform a real-to-complex one-dimensional Fourier transform.
///
/// A real transform of length `n` runs a complex transform of length `n / 2`
/// over the even/odd sample pairs and recombines the halves through the
/// Hermitian symmetry of real spectra, producing the `n / 2 + 1` unique
/// bins. Like [`CFft1D`], neither direction normalizes.
///
/// # Example
///
/// ```rust
/// use num_complex::Complex;
/// use qfft::RFft1D;
///
/// let time = [1.0f64; 8];
/// let mut freq = [Complex::new(0.0, 0.0); 5];
///
/// let fft = RFft1D::<f64>::new(8);
/// fft.forward(&time, &mut freq);
///
/// assert!((freq[0].re - 8.0).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct RFft1D<T> {
    half: usize,
    fft: CFft1D<T>,
    coef: Vec<Complex<T>>,
    bcoef: Vec<Complex<T>>,
}

impl<T: Sample> RFft1D<T> {
    // Twiddles at half-bin offsets: the even/odd split leaves every bin of
    // the half-length sub-transform shifted by half a bin.
    fn calc_rfft_coef(half: usize) -> (Vec<Complex<T>>, Vec<Complex<T>>) {
        let mut coef = Vec::with_capacity(half);
        let mut bcoef = Vec::with_capacity(half);
        for i in 0..half {
            let phase = PI * ((i + 1) as f64 / half as f64 + 0.5);
            coef.push(T::cis(-phase));
            bcoef.push(T::cis(phase));
        }
        (coef, bcoef)
    }

    /// Returns an engine for transforms of `size` real samples.
    ///
    /// # Panics
    /// Panics unless `size` is a positive multiple of 4: the length is
    /// halved once by the even/odd split and the halved transform must
    /// still be even for the recombination.
    pub fn new(size: usize) -> Self {
        if size == 0 || size & 3 != 0 {
            panic!(
                "invalid length: real FFT length must be a positive multiple of 4 (got {})",
                size
            );
        }

        let half = size >> 1;
        let (coef, bcoef) = Self::calc_rfft_coef(half);

        Self {
            half,
            fft: CFft1D::new(half),
            coef,
            bcoef,
        }
    }

    /// The real transform length.
    pub fn size(&self) -> usize {
        self.half * 2
    }

    /// Transforms `size` real samples into the `size / 2 + 1` unique bins.
    ///
    /// Only `freq[0..=size / 2]` is written; anything past that in a longer
    /// buffer is left untouched. The remaining bins of the full spectrum are
    /// the conjugate mirror of the unique ones.
    ///
    /// # Panics
    /// Panics when a buffer length does not match the transform size.
    pub fn forward(&self, time: &[T], freq: &mut [Complex<T>]) {
        let half = self.half;
        assert_eq!(
            time.len(),
            half * 2,
            "invalid length (time: {}, rfft: {})",
            time.len(),
            half * 2
        );
        assert!(
            freq.len() > half,
            "invalid length (freq: {}, bins: {})",
            freq.len(),
            half + 1
        );

        let mut work = vec![zero(); half];
        self.fft.forward(time, &mut work);

        if T::STAGE_SCALING {
            for w in work.iter_mut() {
                *w = cdiv(*w, 2);
            }
        }

        let tdc = work[0];
        freq[0] = Complex::new(tdc.re + tdc.im, T::zero());
        freq[half] = Complex::new(tdc.re - tdc.im, T::zero());

        for k in 1..=half / 2 {
            let s0 = work[k];
            let s1 = work[half - k].conj();
            let f = s0 + s1;
            let g = s0 - s1;
            let t = cmul(g, self.coef[k - 1]);

            freq[k] = chalve(f + t);
            freq[half - k] = chalve(Complex::new(f.re - t.re, t.im - f.im));
        }
    }

    /// Rebuilds `size` real samples from the `size / 2 + 1` unique bins.
    ///
    /// `freq` is read only; the recombination runs in a scratch buffer.
    ///
    /// # Panics
    /// Panics when a buffer length does not match the transform size.
    pub fn inverse(&self, freq: &[Complex<T>], time: &mut [T]) {
        let half = self.half;
        assert!(
            freq.len() > half,
            "invalid length (freq: {}, bins: {})",
            freq.len(),
            half + 1
        );
        assert_eq!(
            time.len(),
            half * 2,
            "invalid length (time: {}, rfft: {})",
            time.len(),
            half * 2
        );

        let mut work = vec![zero(); half];
        work[0] = Complex::new(freq[0].re + freq[half].re, freq[0].re - freq[half].re);
        work[1..].copy_from_slice(&freq[1..half]);
        self.inverse_kernel(&mut work, time);
    }

    /// Rebuilds `size` real samples, reusing `freq` as the recombination
    /// buffer: `freq[0..size / 2]` is destroyed in the process.
    ///
    /// # Panics
    /// Panics when a buffer length does not match the transform size.
    pub fn inverse_inplace(&self, freq: &mut [Complex<T>], time: &mut [T]) {
        let half = self.half;
        assert!(
            freq.len() > half,
            "invalid length (freq: {}, bins: {})",
            freq.len(),
            half + 1
        );
        assert_eq!(
            time.len(),
            half * 2,
            "invalid length (time: {}, rfft: {})",
            time.len(),
            half * 2
        );

        let tdc = freq[0];
        let nyquist = freq[half];
        freq[0] = Complex::new(tdc.re + nyquist.re, tdc.re - nyquist.re);
        self.inverse_kernel(&mut freq[..half], time);
    }

    // Undoes the Hermitian recombination in `work`, then runs the
    // half-length inverse transform straight into the interleaved output.
    fn inverse_kernel(&self, work: &mut [Complex<T>], time: &mut [T]) {
        let half = self.half;

        if T::STAGE_SCALING {
            for w in work.iter_mut() {
                *w = cdiv(*w, 2);
            }
        }

        for k in 1..=half / 2 {
            let s0 = work[k];
            let s1 = work[half - k].conj();
            let f = s0 + s1;
            let g = s0 - s1;
            let t = cmul(g, self.bcoef[k - 1]);

            work[k] = f + t;
            work[half - k] = (f - t).conj();
        }

        self.fft.inverse(work, time);
    }
}
