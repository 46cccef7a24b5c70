// syn.tables -- wavetable and pitch table generator for embedded synthesizers
// Copyright (C) 2021  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! This namespace contains everything that turns notes into pitches.

pub mod phase;
pub mod tuning;

use log::debug;

use crate::config::GeneratorConfig;
use crate::note::Note;

use self::phase::PhaseStep;

/// One row of the note table consumed by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteInfo {
    pub note: Note,
    /// Frequency in Hz.
    pub frequency: f64,
    pub step: PhaseStep,
}

impl NoteInfo {
    /// Display label such as `"C#4"`.
    pub fn name(&self) -> String {
        self.note.to_string()
    }
}

/// Frequencies and phase steps of all 128 notes, ordered by note.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteTable {
    notes: Vec<NoteInfo>,
}

impl NoteTable {
    /// Compute the table for the tuning, sample rate and table length of `config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use syn_tables::config::GeneratorConfig;
    /// use syn_tables::note::Note;
    /// use syn_tables::pitch::NoteTable;
    ///
    /// let table = NoteTable::new(&GeneratorConfig::default());
    /// assert_eq!(table.len(), 128);
    /// assert_eq!(table.get(Note::from_midi(69)).frequency, 440.0);
    /// assert_eq!(table.get(Note::from_midi(69)).name(), "A4");
    /// ```
    pub fn new(config: &GeneratorConfig) -> Self {
        let notes: Vec<NoteInfo> = Note::all()
            .map(|note| {
                let frequency = config.tuning.frequency(note);
                NoteInfo {
                    note,
                    frequency,
                    step: PhaseStep::from_frequency(
                        frequency,
                        config.sample_rate,
                        config.samples_per_cycle,
                    ),
                }
            })
            .collect();
        debug!(
            "note table spans {:.3} Hz to {:.3} Hz",
            notes[0].frequency,
            notes[notes.len() - 1].frequency
        );
        NoteTable { notes }
    }

    pub fn get(&self, note: Note) -> &NoteInfo {
        &self.notes[note.to_midi() as usize]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NoteInfo> {
        self.notes.iter()
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// The last note of the table, named by the `notes_last` constant of the runtime.
    pub fn last(&self) -> Note {
        Note::LAST
    }

    /// Frequency of the highest note of the given octave group, which bounds
    /// the harmonics that the octave's band-limited tables may contain.
    pub fn octave_reference_frequency(&self, octave: usize) -> f64 {
        let index = (octave * 12 + 11).min(self.notes.len() - 1);
        self.notes[index].frequency
    }
}

impl<'a> IntoIterator for &'a NoteTable {
    type Item = &'a NoteInfo;
    type IntoIter = std::slice::Iter<'a, NoteInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn steps_increase_with_pitch() {
        let table = NoteTable::new(&GeneratorConfig::default());
        for pair in table.iter().collect::<Vec<_>>().windows(2) {
            assert!(pair[1].frequency > pair[0].frequency);
            assert!(pair[1].step >= pair[0].step);
        }
    }

    #[test]
    fn a4_regression() {
        let table = NoteTable::new(&GeneratorConfig::default());
        let a4 = table.get(Note::from_midi(69));
        assert_eq!(a4.frequency, 440.0);
        assert_eq!(a4.step.to_bits(), 307582);
    }

    #[test]
    fn octave_references() {
        let table = NoteTable::new(&GeneratorConfig::default());
        // B-1, the top of the lowest octave
        assert_eq!(
            table.octave_reference_frequency(0),
            table.get(Note::from_midi(11)).frequency
        );
        assert_eq!(
            table.octave_reference_frequency(9),
            table.get(Note::from_midi(119)).frequency
        );
        // the eleventh group is cut short by the end of the MIDI range
        assert_eq!(
            table.octave_reference_frequency(10),
            table.get(Note::LAST).frequency
        );
    }

    #[test]
    fn names() {
        let table = NoteTable::new(&GeneratorConfig::default());
        let names: Vec<String> = table.iter().take(13).map(NoteInfo::name).collect();
        assert_eq!(
            names,
            vec!["C-1", "C#-1", "D-1", "D#-1", "E-1", "F-1", "F#-1", "G-1", "G#-1", "A-1", "A#-1", "B-1", "C0"]
        );
    }
}
