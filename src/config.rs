// syn.tables -- wavetable and pitch table generator for embedded synthesizers
// Copyright (C) 2021  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! The constants every generated table is derived from.

use snafu::{ensure, Snafu};

use crate::note::Note;
use crate::pitch::tuning::Tuning;

/// Everything the generator needs to know about the target synthesizer.
///
/// The default describes the pico-synth runtime: a 133 MHz CPU feeding a
/// 12 bit DAC at 48 kHz from 512 sample wavetables.
///
/// # Examples
///
/// ```
/// use syn_tables::config::GeneratorConfig;
///
/// let config = GeneratorConfig::default();
/// assert_eq!(config.sample_rate, 48000.0);
/// assert_eq!(config.samples_per_cycle, 512);
/// assert_eq!(config.amplitude, 2047);
/// assert_eq!(config.wavetable_octaves(), 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Reference note and frequency, determining the pitch of all other notes.
    pub tuning: Tuning,
    /// Samples per second played by the runtime.
    pub sample_rate: f64,
    /// Length of every wavetable, and the denominator of the phase steps.
    pub samples_per_cycle: usize,
    /// Largest absolute sample value of the quantized tables.
    pub amplitude: i16,
    /// Clock of the runtime CPU in Hz, used for the DAC clock divisor.
    pub cpu_frequency: u32,
    /// CPU cycles the runtime spends per audio sample.
    pub cpu_cycles_per_sample: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            tuning: Tuning::default(),
            sample_rate: 48000.0,
            samples_per_cycle: 0x200,
            amplitude: 0x7ff,
            cpu_frequency: 133_000_000,
            cpu_cycles_per_sample: 34,
        }
    }
}

/// Possible problems with a generator configuration.
#[derive(Debug, PartialEq, Snafu)]
pub enum ConfigError {
    #[snafu(display("Sample rate must be a positive number, got {}", sample_rate))]
    InvalidSampleRate { sample_rate: f64 },
    #[snafu(display("Reference frequency must be a positive number, got {}", frequency))]
    InvalidReferenceFrequency { frequency: f64 },
    #[snafu(display(
        "Wavetables need an even number of at least {} samples, got {}",
        MIN_SAMPLES_PER_CYCLE,
        samples
    ))]
    InvalidTableLength { samples: usize },
    #[snafu(display("Amplitude must be in 1..={}, got {}", i16::MAX, amplitude))]
    InvalidAmplitude { amplitude: i16 },
    #[snafu(display("The runtime must spend at least one CPU cycle per sample"))]
    NoCyclesPerSample,
    #[snafu(display(
        "Lowest note at {} Hz is too far below the sample rate of {} Hz",
        frequency,
        sample_rate
    ))]
    PeriodOutOfRange { frequency: f64, sample_rate: f64 },
}

/// The BLIT kernel needs its singular point at `N/2` and the triangle a quarter cycle shift.
pub const MIN_SAMPLES_PER_CYCLE: usize = 4;

impl GeneratorConfig {
    /// Check that the tables can be derived from this configuration at all.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sample_rate = self.sample_rate;
        ensure!(
            sample_rate.is_finite() && sample_rate > 0.0,
            InvalidSampleRate { sample_rate }
        );
        let frequency = self.tuning.reference_frequency;
        ensure!(
            frequency.is_finite() && frequency > 0.0,
            InvalidReferenceFrequency { frequency }
        );
        let samples = self.samples_per_cycle;
        ensure!(
            samples >= MIN_SAMPLES_PER_CYCLE && samples % 2 == 0,
            InvalidTableLength { samples }
        );
        let amplitude = self.amplitude;
        ensure!(amplitude > 0, InvalidAmplitude { amplitude });
        ensure!(self.cpu_cycles_per_sample > 0, NoCyclesPerSample);

        let lowest = self.tuning.frequency(Note::from_midi(0));
        let period = sample_rate / lowest;
        ensure!(
            lowest > 0.0 && period.is_finite(),
            PeriodOutOfRange {
                frequency: lowest,
                sample_rate
            }
        );
        Ok(())
    }

    /// Number of band-limited table sets, one per octave of notes.
    ///
    /// The topmost octave is so close to the Nyquist frequency that it is
    /// effectively a sine, so the runtime plays the sine table there instead.
    pub fn wavetable_octaves(&self) -> usize {
        (Note::COUNT + 11) / 12 - 1
    }

    /// Divisor from the CPU clock to the DAC clock.
    pub fn dac_clock_divisor(&self) -> f64 {
        self.cpu_frequency as f64 / (self.sample_rate * self.cpu_cycles_per_sample as f64)
    }
}
