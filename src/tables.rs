// syn.tables -- wavetable and pitch table generator for embedded synthesizers
// Copyright (C) 2021  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Computing every table of the runtime in one pass.

use log::info;
use snafu::{ResultExt, Snafu};

use crate::config::{ConfigError, GeneratorConfig};
use crate::pitch::NoteTable;
use crate::wavetable::quantize::QuantizeError;
use crate::wavetable::Wavetables;

/// Possible errors when generating the tables.
#[derive(Debug, PartialEq, Snafu)]
pub enum GenerateError {
    #[snafu(display("Invalid configuration: {}", source))]
    InvalidConfig { source: ConfigError },
    #[snafu(display("Could not quantize a wavetable: {}", source))]
    Quantize { source: QuantizeError },
}

/// Everything the runtime needs, derived from a single configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Tables {
    pub config: GeneratorConfig,
    pub notes: NoteTable,
    pub wavetables: Wavetables,
}

impl Tables {
    /// Run all stages: note frequencies and phase steps first, then the wavetables.
    ///
    /// The result only depends on `config`, generating twice yields identical tables.
    ///
    /// # Examples
    ///
    /// ```
    /// use syn_tables::config::GeneratorConfig;
    /// use syn_tables::tables::Tables;
    ///
    /// let tables = Tables::generate(GeneratorConfig::default()).unwrap();
    /// assert_eq!(tables.notes.len(), 128);
    /// assert_eq!(tables.wavetables.octaves.len(), 10);
    /// ```
    pub fn generate(config: GeneratorConfig) -> Result<Tables, GenerateError> {
        config.validate().context(InvalidConfig)?;

        info!(
            "generating {} sample tables for {} Hz, {} at {} Hz",
            config.samples_per_cycle,
            config.sample_rate,
            config.tuning.reference_note,
            config.tuning.reference_frequency
        );

        let notes = NoteTable::new(&config);
        let wavetables = Wavetables::new(&config, &notes).context(Quantize)?;

        info!(
            "generated {} notes and {} octaves of band-limited tables",
            notes.len(),
            wavetables.octaves.len()
        );

        Ok(Tables {
            config,
            notes,
            wavetables,
        })
    }

    pub fn wavetable_octaves(&self) -> usize {
        self.wavetables.octaves.len()
    }
}
