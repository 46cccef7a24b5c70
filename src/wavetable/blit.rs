// syn.tables -- wavetable and pitch table generator for embedded synthesizers
// Copyright (C) 2021  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Band-limited impulse trains, following Stilson and Smith,
//! "Alias-Free Digital Synthesis of Classic Analog Waveforms" (1996).

use std::f64::consts::PI;

use log::trace;

use super::circular::Shifted;

/// One cycle of a band-limited impulse train, sampled for a tone whose harmonics
/// must stay below the Nyquist frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct Blit {
    samples: Vec<f64>,
    /// Index of the impulse peak, where the kernel is singular.
    mid: usize,
    /// Period of the reference tone in output samples.
    period: f64,
}

impl Blit {
    /// Sample the train for a reference tone of `frequency` Hz at `sample_rate`
    /// into a cycle of `samples_per_cycle` samples.
    ///
    /// The discrete Dirichlet kernel `sin(πxM) / (M sin(πx))` is 0/0 at the
    /// center of the cycle, where its limit 1.0 is used instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use syn_tables::wavetable::blit::Blit;
    ///
    /// let blit = Blit::new(440.0, 48000.0, 512);
    /// assert_eq!(blit.mid(), 256);
    /// assert_eq!(blit.samples()[256], 1.0);
    /// assert_eq!(blit.harmonics(), 109.0);
    /// ```
    pub fn new(frequency: f64, sample_rate: f64, samples_per_cycle: usize) -> Blit {
        let period = sample_rate / frequency;
        let m = Self::harmonics_for_period(period);
        let n = samples_per_cycle as f64;

        let mut mid = samples_per_cycle / 2;
        let samples = (0..samples_per_cycle)
            .map(|i| {
                let x = (i as f64 - n / 2.0) / n;
                let denominator = m * (PI * x).sin();
                if denominator == 0.0 {
                    mid = i;
                    1.0
                } else {
                    (PI * x * m).sin() / denominator
                }
            })
            .collect();

        trace!(
            "blit for {:.3} Hz: period {:.3}, {} harmonics, peak at {}",
            frequency,
            period,
            m,
            mid
        );

        Blit {
            samples,
            mid,
            period,
        }
    }

    /// Odd number of harmonics `M = 2 * floor(P / 2) + 1` for a period of `P` samples.
    ///
    /// Kept as a float, periods may be far longer than any integer type holds.
    pub fn harmonics_for_period(period: f64) -> f64 {
        2.0 * (period / 2.0).floor() + 1.0
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn mid(&self) -> usize {
        self.mid
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn harmonics(&self) -> f64 {
        Self::harmonics_for_period(self.period)
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// The train delayed by half a cycle, i.e. read starting at the peak.
    pub fn half_cycle_shifted(&self) -> Shifted<'_, f64> {
        Shifted::new(&self.samples, self.mid)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn finite_everywhere() {
        for &frequency in &[8.0, 61.7, 440.0, 3951.07, 12543.85] {
            let blit = Blit::new(frequency, 48000.0, 512);
            assert_eq!(blit.len(), 512);
            assert!(blit.samples().iter().all(|s| s.is_finite()));
            assert_eq!(blit.samples()[blit.mid()], 1.0);
        }
    }

    #[test]
    fn peak_is_maximum() {
        let blit = Blit::new(440.0, 48000.0, 512);
        let max = blit
            .samples()
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(max, 1.0);
    }

    #[test]
    fn symmetric_around_peak() {
        let blit = Blit::new(1000.0, 48000.0, 512);
        let s = blit.samples();
        for k in 1..256 {
            assert!((s[256 - k] - s[256 + k]).abs() < 1e-12);
        }
    }

    #[test]
    fn harmonics_are_odd() {
        assert_eq!(Blit::harmonics_for_period(109.09), 109.0);
        assert_eq!(Blit::harmonics_for_period(110.0), 111.0);
        assert_eq!(Blit::harmonics_for_period(3.8), 3.0);
        assert_eq!(Blit::harmonics_for_period(1.0), 1.0);
        assert_eq!(Blit::harmonics_for_period(1e30), 1e30 + 1.0);
    }

    #[test]
    fn shifted_starts_at_peak() {
        let blit = Blit::new(440.0, 48000.0, 512);
        assert_eq!(blit.half_cycle_shifted()[0], 1.0);
    }
}
