// syn.tables -- wavetable and pitch table generator for embedded synthesizers
// Copyright (C) 2021  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! This namespace contains all the parts dealing with sampled single-cycle waves.

pub mod blit;
pub mod circular;
pub mod derive;
pub mod quantize;

use std::f64::consts::PI;
use std::fmt;

use log::debug;

use crate::config::GeneratorConfig;
use crate::pitch::NoteTable;

use self::blit::Blit;
use self::quantize::{playback_order, quantize, stretch, QuantizeError};

/// Smallest and largest value of a cycle.
pub fn extremes(cycle: &[f64]) -> (f64, f64) {
    cycle
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &x| {
            (min.min(x), max.max(x))
        })
}

/// The band-limited shapes that come in one table per octave.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum WaveShape {
    Sawtooth,
    Square,
    Triangle,
}

impl WaveShape {
    pub const ALL: [WaveShape; 3] = [WaveShape::Sawtooth, WaveShape::Square, WaveShape::Triangle];

    pub fn name(self) -> &'static str {
        match self {
            WaveShape::Sawtooth => "sawtooth",
            WaveShape::Square => "square",
            WaveShape::Triangle => "triangle",
        }
    }
}

impl fmt::Display for WaveShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One cycle of a sine, scaled to `amplitude` and truncated towards zero.
///
/// A sine has no harmonics that could alias, so a single table serves all octaves.
///
/// # Examples
///
/// ```
/// use syn_tables::wavetable::sine;
///
/// let table = sine(512, 2047);
/// assert_eq!((table[0], table[128], table[256], table[384]), (0, 2047, 0, -2047));
/// ```
pub fn sine(samples_per_cycle: usize, amplitude: i16) -> Vec<i16> {
    let n = samples_per_cycle as f64;
    let amplitude = amplitude as f64;
    (0..samples_per_cycle)
        .map(|i| (amplitude * (2.0 * PI * i as f64 / n).sin()) as i16)
        .collect()
}

/// The quantized square, triangle and sawtooth cycles of one octave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OctaveTables {
    pub square: Vec<i16>,
    pub triangle: Vec<i16>,
    pub sawtooth: Vec<i16>,
}

impl OctaveTables {
    /// Derive all shapes for tones up to `frequency` Hz from a single impulse train.
    pub fn derive(frequency: f64, config: &GeneratorConfig) -> Result<Self, QuantizeError> {
        let blit = Blit::new(frequency, config.sample_rate, config.samples_per_cycle);

        let square = derive::square(&blit);
        let square_levels = stretch(&square, config.amplitude)?;
        let triangle = derive::triangle(&square, &square_levels);
        let sawtooth = derive::sawtooth(&blit);

        Ok(OctaveTables {
            square: playback_order(&square_levels),
            triangle: quantize(&triangle, config.amplitude)?,
            sawtooth: quantize(&sawtooth, config.amplitude)?,
        })
    }

    pub fn get(&self, shape: WaveShape) -> &[i16] {
        match shape {
            WaveShape::Sawtooth => &self.sawtooth,
            WaveShape::Square => &self.square,
            WaveShape::Triangle => &self.triangle,
        }
    }
}

/// All wavetables of the runtime oscillator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wavetables {
    pub sine: Vec<i16>,
    /// Band-limited tables, indexed by octave.
    pub octaves: Vec<OctaveTables>,
}

impl Wavetables {
    pub fn new(config: &GeneratorConfig, notes: &NoteTable) -> Result<Self, QuantizeError> {
        let octaves = (0..config.wavetable_octaves())
            .map(|octave| {
                let frequency = notes.octave_reference_frequency(octave);
                debug!("deriving octave {} tables up to {:.3} Hz", octave, frequency);
                OctaveTables::derive(frequency, config)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Wavetables {
            sine: sine(config.samples_per_cycle, config.amplitude),
            octaves,
        })
    }

    /// The tables of one shape for all octaves, from lowest to highest.
    pub fn family(&self, shape: WaveShape) -> impl Iterator<Item = &[i16]> + '_ {
        self.octaves.iter().map(move |octave| octave.get(shape))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn extremes_of_cycle() {
        assert_eq!(extremes(&[0.5, -2.0, 3.0, 1.0]), (-2.0, 3.0));
    }

    #[test]
    fn sine_is_odd() {
        let table = sine(512, 2047);
        assert_eq!(table.len(), 512);
        for i in 1..256 {
            assert!((table[i] as i32 + table[512 - i] as i32).abs() <= 1, "{}", i);
        }
    }

    #[test]
    fn octave_tables_stay_in_range() {
        let config = GeneratorConfig::default();
        let notes = NoteTable::new(&config);
        let tables = Wavetables::new(&config, &notes).unwrap();
        assert_eq!(tables.octaves.len(), 10);
        for shape in WaveShape::ALL.iter().cloned() {
            let family: Vec<&[i16]> = tables.family(shape).collect();
            assert_eq!(family.len(), 10);
            for table in family {
                assert_eq!(table.len(), 512);
                let min = table.iter().cloned().min().unwrap();
                let max = table.iter().cloned().max().unwrap();
                assert_eq!(min, -2047, "{}", shape);
                assert!(max >= 2046 && max <= 2047, "{}", shape);
            }
        }
    }

    #[test]
    fn triangle_reference_values() {
        let config = GeneratorConfig::default();
        let notes = NoteTable::new(&config);
        let tables = Wavetables::new(&config, &notes).unwrap();
        let pick = |octave: usize| -> Vec<i16> {
            let table = &tables.octaves[octave].triangle;
            [0, 64, 115, 128, 192, 256, 320, 384, 448, 511]
                .iter()
                .map(|&i| table[i])
                .collect()
        };
        assert_eq!(
            pick(0),
            vec![-1, 1026, 1844, 2046, 1026, -1, -1027, -2047, -1027, -16]
        );
        assert_eq!(
            pick(5),
            vec![0, 1031, 1856, 2047, 1031, 0, -1032, -2047, -1032, -16]
        );
        assert_eq!(
            pick(9),
            vec![-1, 1157, 2000, 2047, 1157, -1, -1158, -2047, -1159, -16]
        );
    }

    #[test]
    fn shapes_in_playback_order() {
        let config = GeneratorConfig::default();
        let notes = NoteTable::new(&config);
        let lowest = OctaveTables::derive(notes.octave_reference_frequency(0), &config).unwrap();

        // square: high first half, low second half
        assert!(lowest.square[64] > 1900 && lowest.square[192] > 1900);
        assert!(lowest.square[320] < -1900 && lowest.square[448] < -1900);

        // triangle: starts near zero, peaks a quarter in, bottoms out at three quarters
        assert!(lowest.triangle[0].abs() < 20);
        assert!(lowest.triangle[128] >= 2040);
        assert!(lowest.triangle[384] <= -2040);

        // sawtooth: falls through the cycle
        for i in (64..448).step_by(64) {
            assert!(lowest.sawtooth[i + 64] < lowest.sawtooth[i], "{}", i);
        }
    }
}
