//! Mixed-radix fast Fourier transform over floating-point and fixed-point samples.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

/// One level of the Cooley-Tukey decomposition: `radix` sub-transforms of
/// `length` samples each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Factor {
    pub radix: usize,
    pub length: usize,
}

/// Greedy factorization of a transform length.
///
/// Radix 4 is tried before 2, so pairs of radix-2 stages fuse into a single
/// radix-4 stage, then 3 and the odd candidates in ascending order. Once the
/// candidate passes `sqrt(size)` the whole residual becomes the final radix,
/// so prime sizes fall through to the generic butterfly in a single stage.
pub fn factorize(size: usize) -> Vec<Factor> {
    let root = (size as f64).sqrt() as usize;
    let mut remaining = size;
    let mut radix = 4;
    let mut factors = Vec::new();

    loop {
        while remaining % radix != 0 {
            radix = match radix {
                4 => 2,
                2 => 3,
                r => r + 2,
            };
            if radix > root {
                radix = remaining;
            }
        }

        remaining /= radix;
        factors.push(Factor {
            radix,
            length: remaining,
        });

        if remaining <= 1 {
            return factors;
        }
    }
}
