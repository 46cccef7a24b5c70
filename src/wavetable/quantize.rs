// syn.tables -- wavetable and pitch table generator for embedded synthesizers
// Copyright (C) 2021  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Mapping real-valued cycles to the integer sample range of the DAC.

use snafu::{ensure, Snafu};

/// Reasons a cycle cannot be stretched over the sample range.
#[derive(Debug, PartialEq, Snafu)]
pub enum QuantizeError {
    #[snafu(display("Cannot quantize an empty cycle"))]
    Empty,
    #[snafu(display("Sample {} is {}, expected a finite number", index, value))]
    NotFinite { index: usize, value: f64 },
    #[snafu(display("Cycle is constant at {}, there is no range to stretch", value))]
    Flat { value: f64 },
}

/// Stretch `cycle` over the full range `-amplitude..=amplitude`, truncating each sample
/// towards zero. The sample order is kept.
///
/// # Examples
///
/// ```
/// use syn_tables::wavetable::quantize::stretch;
///
/// assert_eq!(stretch(&[0.0, 0.5, 1.0], 2047).unwrap(), vec![-2047, 0, 2047]);
/// ```
pub fn stretch(cycle: &[f64], amplitude: i16) -> Result<Vec<i16>, QuantizeError> {
    ensure!(!cycle.is_empty(), Empty);
    if let Some((index, &value)) = cycle.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return NotFinite { index, value }.fail();
    }

    let (min, max) = super::extremes(cycle);
    ensure!(max != min, Flat { value: min });

    let amplitude = amplitude as i32;
    let scale = (2 * amplitude) as f64 / (max - min).abs();
    Ok(cycle
        .iter()
        .map(|&v| (((v - min) * scale) as i32 - amplitude) as i16)
        .collect())
}

/// Reverse already stretched samples into playback order.
///
/// The runtime oscillator steps through its tables backwards, so reversing here makes
/// the played waveform come out in the order it was computed.
pub fn playback_order(levels: &[i16]) -> Vec<i16> {
    levels.iter().rev().cloned().collect()
}

/// [`stretch`] followed by [`playback_order`].
///
/// # Examples
///
/// ```
/// use syn_tables::wavetable::quantize::quantize;
///
/// assert_eq!(quantize(&[0.0, 0.5, 1.0], 2047).unwrap(), vec![2047, 0, -2047]);
/// ```
pub fn quantize(cycle: &[f64], amplitude: i16) -> Result<Vec<i16>, QuantizeError> {
    stretch(cycle, amplitude).map(|levels| playback_order(&levels))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ramp_spans_full_range_reversed() {
        let ramp: Vec<f64> = (0..512).map(|i| i as f64).collect();
        let quantized = quantize(&ramp, 2047).unwrap();
        assert_eq!(quantized.len(), 512);
        assert_eq!(quantized[0], 2047);
        assert_eq!(quantized[511], -2047);
        for pair in quantized.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn truncates_towards_zero() {
        // (1/3) * 20 = 6.67 -> 6
        assert_eq!(quantize(&[0.0, 1.0, 3.0], 10).unwrap(), vec![10, -4, -10]);
    }

    #[test]
    fn stretch_keeps_order() {
        assert_eq!(stretch(&[3.0, 1.0, 0.0], 10).unwrap(), vec![10, -4, -10]);
        assert_eq!(playback_order(&[1, 2, 3]), vec![3, 2, 1]);
    }

    #[test]
    fn degenerate_input() {
        assert_eq!(quantize(&[], 2047), Err(QuantizeError::Empty));
        assert_eq!(
            quantize(&[0.25, 0.25], 2047),
            Err(QuantizeError::Flat { value: 0.25 })
        );
        assert!(matches!(
            quantize(&[0.0, f64::NAN, 1.0], 2047),
            Err(QuantizeError::NotFinite { index: 1, .. })
        ));
    }
}
