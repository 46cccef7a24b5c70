// syn.tables -- wavetable and pitch table generator for embedded synthesizers
// Copyright (C) 2021  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! `gentables` - precomputes the lookup tables of the synthesizer firmware.

use std::path::PathBuf;
use std::process;

use log::{error, info};
use structopt::StructOpt;

use syn_tables::config::GeneratorConfig;
use syn_tables::note::Note;
use syn_tables::output;
use syn_tables::pitch::tuning::Tuning;
use syn_tables::tables::Tables;
use syn_tables::wavetable::WaveShape;

#[derive(Debug, StructOpt)]
#[structopt(name = "gentables", about = "Generating wavetables and pitch tables")]
struct Opt {
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: usize,

    /// Root directory of the firmware sources the headers are written to.
    #[structopt(short, long, parse(from_os_str), default_value = ".")]
    output_dir: PathBuf,

    /// Compute the tables and report on them without writing anything.
    #[structopt(long)]
    dry_run: bool,

    /// Samples per second played by the firmware.
    #[structopt(long, default_value = "48000")]
    sample_rate: f64,

    /// Length of every wavetable.
    #[structopt(long, default_value = "512")]
    samples_per_cycle: usize,

    /// Largest absolute sample value.
    #[structopt(long, default_value = "2047")]
    amplitude: i16,

    /// Note the reference frequency is assigned to, e.g. `A4`.
    #[structopt(long, default_value = "A4", parse(try_from_str = parse_note))]
    reference_note: Note,

    /// Frequency of the reference note in Hz.
    #[structopt(long, default_value = "440")]
    reference_frequency: f64,

    /// CPU clock of the firmware in Hz.
    #[structopt(long, default_value = "133000000")]
    cpu_frequency: u32,

    /// CPU cycles spent per audio sample.
    #[structopt(long, default_value = "34")]
    cpu_cycles_per_sample: u32,
}

fn parse_note(name: &str) -> Result<Note, String> {
    Note::named_str(name).ok_or_else(|| format!("not a MIDI note: {:?}", name))
}

impl Opt {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            tuning: Tuning {
                reference_note: self.reference_note,
                reference_frequency: self.reference_frequency,
            },
            sample_rate: self.sample_rate,
            samples_per_cycle: self.samples_per_cycle,
            amplitude: self.amplitude,
            cpu_frequency: self.cpu_frequency,
            cpu_cycles_per_sample: self.cpu_cycles_per_sample,
        }
    }
}

fn summarize(tables: &Tables) {
    for info in &tables.notes {
        log::trace!(
            "{:3} {:5} {:10.3} Hz step {}",
            info.note.to_midi(),
            info.name(),
            info.frequency,
            info.step
        );
    }
    for shape in WaveShape::ALL.iter().cloned() {
        for (octave, table) in tables.wavetables.family(shape).enumerate() {
            log::debug!(
                "{} octave {}: {} .. {}",
                shape,
                octave,
                table.iter().min().cloned().unwrap_or(0),
                table.iter().max().cloned().unwrap_or(0)
            );
        }
    }
}

fn main() {
    let opt = Opt::from_args();

    let level = match opt.verbose {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    if let Err(err) = simple_logger::init_with_level(level) {
        eprintln!("could not set up logging: {}", err);
    }

    let tables = match Tables::generate(opt.config()) {
        Ok(tables) => tables,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };
    summarize(&tables);

    if opt.dry_run {
        info!("dry run, not writing headers");
        return;
    }

    match output::write_headers(&tables, &opt.output_dir) {
        Ok(written) => info!("wrote {} headers", written.len()),
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}
