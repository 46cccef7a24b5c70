// syn.tables -- wavetable and pitch table generator for embedded synthesizers
// Copyright (C) 2021  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Fixed-point phase increments for wavetable oscillators.

use std::fmt;

/// Number of fractional bits of a [`PhaseStep`].
pub const FRACTIONAL_BITS: u32 = 16;

/// The amount a wavetable oscillator advances its read position per output sample,
/// measured in table samples as an unsigned Q16.16 fixed-point number.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PhaseStep(u32);

impl PhaseStep {
    /// Compute the step that plays a tone of `frequency` Hz from a table of
    /// `samples_per_cycle` samples at `sample_rate` samples per second.
    ///
    /// The result is rounded to the nearest representable step, values
    /// outside of the Q16.16 range saturate.
    ///
    /// # Examples
    ///
    /// ```
    /// use syn_tables::pitch::phase::PhaseStep;
    ///
    /// let a4 = PhaseStep::from_frequency(440.0, 48000.0, 512);
    /// assert_eq!(a4.to_bits(), 307582);
    /// assert!((a4.to_f64() - 4.6933).abs() < 1e-4);
    /// ```
    pub fn from_frequency(frequency: f64, sample_rate: f64, samples_per_cycle: usize) -> PhaseStep {
        let samples_per_period = sample_rate / frequency;
        let step = samples_per_cycle as f64 / samples_per_period;
        PhaseStep::from_f64(step)
    }

    /// Encode a step given in table samples.
    pub fn from_f64(step: f64) -> PhaseStep {
        // float to int casts saturate
        PhaseStep((step * (1u64 << FRACTIONAL_BITS) as f64).round() as u32)
    }

    pub fn to_bits(self) -> u32 {
        self.0
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / (1u64 << FRACTIONAL_BITS) as f64
    }

    /// The integral part, i.e. whole table samples skipped per output sample.
    pub fn whole_samples(self) -> u32 {
        self.0 >> FRACTIONAL_BITS
    }
}

impl fmt::Display for PhaseStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.to_f64())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rounds_to_nearest() {
        // 1.5 / 65536 above one whole sample
        assert_eq!(PhaseStep::from_f64(1.0 + 1.5 / 65536.0).to_bits(), 65536 + 2);
        assert_eq!(PhaseStep::from_f64(1.0 + 1.4 / 65536.0).to_bits(), 65536 + 1);
        assert_eq!(PhaseStep::from_f64(1.0 + 0.6 / 65536.0).to_bits(), 65536 + 1);
    }

    #[test]
    fn saturates() {
        assert_eq!(PhaseStep::from_f64(-1.0).to_bits(), 0);
        assert_eq!(PhaseStep::from_f64(1e12).to_bits(), u32::MAX);
    }

    #[test]
    fn one_cycle_per_sample() {
        // a tone at the sample rate wraps the whole table every sample
        let step = PhaseStep::from_frequency(48000.0, 48000.0, 512);
        assert_eq!(step.whole_samples(), 512);
        assert_eq!(step.to_bits() & 0xffff, 0);
    }
}
