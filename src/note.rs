// syn.tables -- wavetable and pitch table generator for embedded synthesizers
// Copyright (C) 2021  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Definitions of what a note is.

use std::fmt;

/// A "note" is just an index on the synthesizers keyboard.
/// This definition follows the MIDI standard where C4 corresponds to index 60.
///
/// Note indices range from 0 to 127. At 12 semitones per octave,
/// this corresponds to a dynamic range of more then 10 octaves.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Note(u8);

/// The name of a note in standard notation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NoteName {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

/// Any offset applied to a note in standard notation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NoteOffset {
    /// The note is a half-tone lower then indicated by its name.
    Flat,
    /// The note is left unchanged.
    Base,
    /// The note is a half-tone higher then indicated by its name.
    Sharp,
}

/// Pitch class labels, indexed by `note % 12`. Accidentals are always spelled as sharps.
pub const PITCH_CLASSES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

impl Note {
    /// Number of notes in the MIDI note system.
    pub const COUNT: usize = 128;

    /// The highest representable note, G9.
    pub const LAST: Note = Note(127);

    /// Convert a note from standard notation to a MIDI note index.
    /// Note that different names may refer to the same note, e.g. a G♯ is the same as a A♭.
    /// Returns `None` if the note is not representable in the MIDI note system.
    ///
    /// # Examples
    ///
    /// ```
    /// use syn_tables::note::*;
    ///
    /// assert_eq!(Note::try_named(NoteName::A, NoteOffset::Base, 4), Some(Note::from_midi(69)));
    /// assert_eq!(Note::try_named(NoteName::C, NoteOffset::Sharp, 6), Some(Note::from_midi(85)));
    /// assert_eq!(Note::try_named(NoteName::G, NoteOffset::Flat, 2), Some(Note::from_midi(42)));
    /// assert_eq!(Note::try_named(NoteName::A, NoteOffset::Base, 9), None);
    /// ```
    pub fn try_named(name: NoteName, offset: NoteOffset, octave: i32) -> Option<Note> {
        let name_index = match name {
            NoteName::C => 0,
            NoteName::D => 2,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::G => 7,
            NoteName::A => 9,
            NoteName::B => 11,
        };
        let offset_index = match offset {
            NoteOffset::Base => 0,
            NoteOffset::Flat => -1,
            NoteOffset::Sharp => 1,
        };
        // C4 is MIDI note number 60
        let normalize_index = 60 - 4 * 12;
        let note_index = octave
            .checked_mul(12)?
            .checked_add(name_index + offset_index + normalize_index)?;
        Note::try_from_midi(note_index as i64)
    }

    /// Convert a note from standard notation to a MIDI note index.
    ///
    /// # Panics
    ///
    /// - If the note is not representable in the MIDI note system.
    pub fn named(name: NoteName, offset: NoteOffset, octave: i32) -> Note {
        Note::try_named(name, offset, octave).expect("Note not representable in MIDI system.")
    }

    /// Parse a name string of the format `<letter><offset><octave>`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use syn_tables::note::*;
    ///
    /// assert_eq!(Note::named_str("A4"), Some(Note::from_midi(69)));
    /// assert_eq!(Note::named_str("a4"), Some(Note::from_midi(69)));
    /// assert_eq!(Note::named_str("Csharp6"), Some(Note::from_midi(85)));
    /// assert_eq!(Note::named_str("C♯6"), Some(Note::from_midi(85)));
    /// assert_eq!(Note::named_str("Gb2"), Some(Note::from_midi(42)));
    /// assert_eq!(Note::named_str("C-1"), Some(Note::from_midi(0)));
    /// ```
    pub fn named_str(name_str: &str) -> Option<Note> {
        let mut name_chars = name_str.chars();
        let name_ch = name_chars.next()?;
        let name = match name_ch.to_ascii_uppercase() {
            'A' => NoteName::A,
            'B' => NoteName::B,
            'C' => NoteName::C,
            'D' => NoteName::D,
            'E' => NoteName::E,
            'F' => NoteName::F,
            'G' => NoteName::G,
            _ => return None,
        };

        let offset_str = name_chars
            .as_str()
            .trim_end_matches(|ch: char| ch.is_ascii_digit() || ch == '-');
        let offset = match offset_str {
            "sharp" | "♯" | "#" => NoteOffset::Sharp,
            "flat" | "♭" | "b" => NoteOffset::Flat,
            "" => NoteOffset::Base,
            _ => return None,
        };

        let octave_str = &name_chars.as_str()[offset_str.len()..];
        let octave = octave_str.parse().ok()?;
        Note::try_named(name, offset, octave)
    }

    pub fn from_midi(midi_note: u8) -> Note {
        assert!(midi_note < 128, "MIDI only has notes 0 - 127");
        Note(midi_note)
    }

    pub fn try_from_midi(midi_note: i64) -> Option<Note> {
        if midi_note >= 0 && midi_note < 128 {
            Some(Note(midi_note as u8))
        } else {
            None
        }
    }

    pub fn to_midi(self) -> u8 {
        self.0
    }

    /// Return the note index in a signed type, convenient for further calculations.
    pub fn index(self) -> i32 {
        self.0 as i32
    }

    /// All notes of the MIDI system in ascending order.
    pub fn all() -> impl Iterator<Item = Note> + Clone {
        (0..Note::COUNT as u8).map(Note)
    }

    /// The pitch class label of this note, e.g. `"C#"`.
    pub fn pitch_class(self) -> &'static str {
        PITCH_CLASSES[self.0 as usize % 12]
    }

    /// The octave number in scientific pitch notation, starting at -1 for MIDI note 0.
    pub fn octave(self) -> i32 {
        self.index() / 12 - 1
    }
}

/// Formats the note in scientific pitch notation.
///
/// # Examples
///
/// ```
/// # use syn_tables::note::*;
///
/// assert_eq!(Note::from_midi(0).to_string(), "C-1");
/// assert_eq!(Note::from_midi(61).to_string(), "C#4");
/// assert_eq!(Note::from_midi(69).to_string(), "A4");
/// assert_eq!(Note::LAST.to_string(), "G9");
/// ```
impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class(), self.octave())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn names_round_trip_through_parser() {
        for note in Note::all() {
            assert_eq!(Note::named_str(&note.to_string()), Some(note));
        }
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(Note::named_str(""), None);
        assert_eq!(Note::named_str("H4"), None);
        assert_eq!(Note::named_str("Cx4"), None);
        assert_eq!(Note::named_str("C"), None);
        assert_eq!(Note::named_str("Cb-1"), None);
        assert_eq!(Note::named_str("C99999999999"), None);
    }

    #[test]
    fn octave_boundaries() {
        assert_eq!(Note::from_midi(11).octave(), -1);
        assert_eq!(Note::from_midi(12).octave(), 0);
        assert_eq!(Note::from_midi(59).pitch_class(), "B");
        assert_eq!(Note::from_midi(60).pitch_class(), "C");
    }
}
