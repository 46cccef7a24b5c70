// syn.tables -- wavetable and pitch table generator for embedded synthesizers
// Copyright (C) 2021  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Writing the generated tables to disk as C headers.

pub mod header;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::info;
use snafu::{ResultExt, Snafu};

use crate::tables::Tables;

pub use self::header::Header;

/// Possible errors when writing the headers.
#[derive(Debug, Snafu)]
pub enum EmitError {
    #[snafu(display("Could not create directory {}: {}", path.display(), source))]
    CreateDir { path: PathBuf, source: io::Error },
    #[snafu(display("Could not write {}: {}", path.display(), source))]
    WriteHeader { path: PathBuf, source: io::Error },
}

/// Format an integer the way the runtime sources spell their constants:
/// an optional minus sign followed by zero-padded lowercase hex of the magnitude.
///
/// # Examples
///
/// ```
/// use syn_tables::output::hex;
///
/// assert_eq!(hex(2047, 4), "0x07ff");
/// assert_eq!(hex(-2047, 4), "-0x07ff");
/// assert_eq!(hex(307582, 8), "0x0004b17e");
/// assert_eq!(hex(0x12345, 4), "0x12345");
/// ```
pub fn hex(value: i64, digits: usize) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!("{}0x{:0width$x}", sign, value.unsigned_abs(), width = digits)
}

/// Write all headers below `dir`, creating subdirectories as needed.
/// Returns the paths of the written files.
pub fn write_headers(tables: &Tables, dir: &Path) -> Result<Vec<PathBuf>, EmitError> {
    let mut written = Vec::new();
    for header in header::headers(tables) {
        let path = dir.join(header.path());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context(CreateDir { path: parent })?;
        }

        info!("generating {} ...", path.display());
        let file = fs::File::create(&path).context(WriteHeader { path: &path })?;
        let mut out = io::BufWriter::new(file);
        header
            .write_to(&mut out)
            .and_then(|()| out.flush())
            .context(WriteHeader { path: &path })?;
        written.push(path);
    }
    Ok(written)
}
