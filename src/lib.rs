#![crate_type = "lib"]

//! Mixed-radix fast Fourier transform over floating-point and fixed-point samples.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/.

extern crate num_complex;
extern crate num_traits;

#[cfg(test)]
extern crate rand;
#[cfg(test)]
extern crate rand_xorshift;

#[cfg(test)]
#[macro_use]
mod nearly_eq;

mod sample;

mod prime_factorization;
mod precompute_utils;
mod mixed_radix;

mod cfft1d;
mod rfft1d;

pub use crate::cfft1d::CFft1D;
pub use crate::rfft1d::RFft1D;
pub use crate::sample::Sample;
