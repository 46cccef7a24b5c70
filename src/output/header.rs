// syn.tables -- wavetable and pitch table generator for embedded synthesizers
// Copyright (C) 2021  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! The C headers compiled into the synthesizer firmware.

use std::io;

use super::hex;
use crate::pitch::NoteTable;
use crate::tables::Tables;
use crate::wavetable::{WaveShape, Wavetables};

/// Samples per line in wavetable initializers.
const SAMPLES_PER_LINE: usize = 8;

/// Part of a header below the common preamble.
#[derive(Debug)]
pub enum Section<'a> {
    /// `#include` lines, with angle brackets if `system` is set.
    Includes {
        headers: Vec<&'static str>,
        system: bool,
    },
    /// `#define` lines.
    Defines(Vec<(&'static str, String)>),
    Notes(&'a NoteTable),
    Wavetables(&'a Wavetables),
}

/// One generated header file.
#[derive(Debug)]
pub struct Header<'a> {
    path: &'static str,
    sections: Vec<Section<'a>>,
}

impl<'a> Header<'a> {
    pub fn new(path: &'static str, sections: Vec<Section<'a>>) -> Self {
        Header { path, sections }
    }

    /// Location relative to the firmware source root, using `/` as separator.
    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn write_to(&self, out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(out, "/*")?;
        writeln!(out, " * Lookup tables for the wavetable synthesizer engine.")?;
        writeln!(out, " */")?;
        writeln!(out)?;
        writeln!(out, "// this file was generated by gentables. do not edit!")?;
        writeln!(out)?;
        writeln!(out, "#pragma once")?;

        for section in &self.sections {
            match section {
                Section::Includes { headers, system } => write_includes(out, headers, *system)?,
                Section::Defines(items) => write_defines(out, items)?,
                Section::Notes(notes) => write_notes(out, notes)?,
                Section::Wavetables(tables) => write_wavetables(out, tables)?,
            }
        }
        Ok(())
    }
}

/// All headers consumed by the firmware.
pub fn headers(tables: &Tables) -> Vec<Header<'_>> {
    let config = &tables.config;
    vec![
        Header::new(
            "engine/driver-mcp4822-data.h",
            vec![Section::Defines(vec![(
                "mcp4822_clkdiv",
                format!("{:?}", config.dac_clock_divisor()),
            )])],
        ),
        Header::new(
            "engine/engine-data.h",
            vec![Section::Defines(vec![(
                "waveform_amplitude",
                hex(config.amplitude as i64, 4),
            )])],
        ),
        Header::new(
            "engine/note-data.h",
            vec![
                Section::Includes {
                    headers: vec!["pico-synth/engine.h"],
                    system: true,
                },
                Section::Defines(vec![(
                    "notes_last",
                    tables.notes.last().to_midi().to_string(),
                )]),
                Section::Notes(&tables.notes),
            ],
        ),
        Header::new(
            "engine/module-oscillator-data.h",
            vec![
                Section::Includes {
                    headers: vec!["stdint.h"],
                    system: true,
                },
                Section::Defines(vec![
                    (
                        "waveform_samples_per_cycle",
                        hex(config.samples_per_cycle as i64, 4),
                    ),
                    ("wavetable_octaves", tables.wavetable_octaves().to_string()),
                ]),
                Section::Wavetables(&tables.wavetables),
            ],
        ),
        Header::new(
            "synth-data.h",
            vec![Section::Defines(vec![(
                "cpu_frequency",
                (config.cpu_frequency / 1000).to_string(),
            )])],
        ),
    ]
}

fn write_includes(out: &mut dyn io::Write, headers: &[&str], system: bool) -> io::Result<()> {
    if headers.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    let (open, close) = if system { ('<', '>') } else { ('"', '"') };
    for header in headers {
        writeln!(out, "#include {}{}{}", open, header, close)?;
    }
    Ok(())
}

fn write_defines(out: &mut dyn io::Write, items: &[(&str, String)]) -> io::Result<()> {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    for (name, value) in items {
        writeln!(out, "#define {} {}", name, value)?;
    }
    Ok(())
}

fn write_notes(out: &mut dyn io::Write, notes: &NoteTable) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "static const ps_engine_note_t notes[] = {{")?;
    for info in notes {
        writeln!(out, "    {{")?;
        writeln!(out, "        .id        = {},", info.note.to_midi())?;
        writeln!(out, "        .name      = \"{}\",", info.note)?;
        writeln!(
            out,
            "        .step.data = {},",
            hex(info.step.to_bits() as i64, 8)
        )?;
        writeln!(out, "    }},")?;
    }
    writeln!(out, "}};")
}

fn write_samples(out: &mut dyn io::Write, indent: &str, samples: &[i16]) -> io::Result<()> {
    for line in samples.chunks(SAMPLES_PER_LINE) {
        let values: Vec<String> = line.iter().map(|&s| hex(s as i64, 4)).collect();
        writeln!(out, "{}{},", indent, values.join(", "))?;
    }
    Ok(())
}

fn write_wavetables(out: &mut dyn io::Write, tables: &Wavetables) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "static const int16_t sine_wavetable[{}] = {{",
        hex(tables.sine.len() as i64, 4)
    )?;
    write_samples(out, "    ", &tables.sine)?;
    writeln!(out, "}};")?;

    if tables.octaves.is_empty() {
        return Ok(());
    }
    for shape in WaveShape::ALL.iter().cloned() {
        let family: Vec<&[i16]> = tables.family(shape).collect();
        writeln!(out)?;
        writeln!(
            out,
            "static const int16_t {}_wavetables[{}][{}] = {{",
            shape,
            family.len(),
            hex(family[0].len() as i64, 4)
        )?;
        for table in family {
            writeln!(out, "    {{")?;
            write_samples(out, "        ", table)?;
            writeln!(out, "    }},")?;
        }
        writeln!(out, "}};")?;
    }
    Ok(())
}
