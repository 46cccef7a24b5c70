// syn.tables -- wavetable and pitch table generator for embedded synthesizers
// Copyright (C) 2021  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

use crate::note::*;

/// Defines the tuning of an instrument by assinging a frequency to a certain note.
/// This defines the frequencies of all other notes at a standard tuning of 12 half-tones per octave.
///
/// # Examples
///
/// ```
/// use syn_tables::note::*;
/// use syn_tables::pitch::tuning::*;
/// assert_eq!(Tuning::default().frequency(Note::from_midi(57)), 220.0);
/// assert_eq!(Tuning::default().frequency(Note::from_midi(69)), 440.0);
/// assert_eq!(Tuning::default().frequency(Note::from_midi(81)), 880.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    pub reference_note: Note,
    pub reference_frequency: f64,
}

impl Tuning {
    /// Return the frequency of a note relative to this tuning.
    pub fn frequency(&self, other: Note) -> f64 {
        let semitones = other.index() - self.reference_note.index();
        let octaves = semitones as f64 / 12.0;
        self.reference_frequency * 2.0f64.powf(octaves)
    }
}

/// Default concert tuning, where A4 corresponds to 440 Hz.
impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            reference_note: Note::named(NoteName::A, NoteOffset::Base, 4),
            reference_frequency: 440.0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn strictly_increasing() {
        let tuning = Tuning::default();
        let frequencies: Vec<f64> = Note::all().map(|n| tuning.frequency(n)).collect();
        assert_eq!(frequencies.len(), 128);
        for pair in frequencies.windows(2) {
            assert!(pair[1] > pair[0], "{} !> {}", pair[1], pair[0]);
        }
    }

    #[test]
    fn alternative_reference() {
        let tuning = Tuning {
            reference_note: Note::from_midi(60),
            reference_frequency: 256.0,
        };
        assert_eq!(tuning.frequency(Note::from_midi(60)), 256.0);
        assert_eq!(tuning.frequency(Note::from_midi(48)), 128.0);
        assert_eq!(tuning.frequency(Note::from_midi(72)), 512.0);
    }
}
