// syn.tables -- wavetable and pitch table generator for embedded synthesizers
// Copyright (C) 2021  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Integrating band-limited impulse trains into classic waveforms.
//!
//! Every function here takes the finished output of the previous stage and
//! returns one unquantized cycle of the same length.

use super::blit::Blit;
use super::circular::{rotate_left, Shifted};

/// Running sum of a sequence, starting from zero.
fn integrate<I: IntoIterator<Item = f64>>(input: I) -> Vec<f64> {
    input
        .into_iter()
        .scan(0.0, |acc, x| {
            *acc += x;
            Some(*acc)
        })
        .collect()
}

/// Center point between the extremes of a cycle.
pub fn midrange(cycle: &[f64]) -> f64 {
    let (min, max) = super::extremes(cycle);
    min + (max - min) / 2.0
}

/// A square wave: the integral of the train minus the same train delayed by half a cycle.
/// The difference is a bipolar pair of impulses per cycle.
pub fn square(blit: &Blit) -> Vec<f64> {
    let shifted = blit.half_cycle_shifted();
    integrate(
        blit.samples()
            .iter()
            .zip(shifted.iter())
            .map(|(&x, &delayed)| x - delayed),
    )
}

/// A triangle wave: the integral of the stretched square `levels`, centered on the
/// midrange of the real-valued `square` they were stretched from, moved forward by a
/// quarter cycle so that the cycle starts at its zero crossing like the sine table does.
///
/// Integrating the integer levels rather than the real-valued square is what the
/// firmware tables have always been built from.
pub fn triangle(square: &[f64], levels: &[i16]) -> Vec<f64> {
    assert_eq!(square.len(), levels.len(), "square and its levels differ in length");
    let center = midrange(square);
    let triangle = integrate(levels.iter().map(|&x| x as f64 - center));
    rotate_left(&triangle, levels.len() / 4)
}

/// A sawtooth: the integral of the delayed train minus its DC offset `1 / P`, negated.
pub fn sawtooth(blit: &Blit) -> Vec<f64> {
    let dc = 1.0 / blit.period();
    let shifted: Shifted<'_, f64> = blit.half_cycle_shifted();
    integrate(shifted.iter().map(|&x| x - dc))
        .into_iter()
        .map(|y| -y)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn blit() -> Blit {
        Blit::new(987.77, 48000.0, 512)
    }

    #[test]
    fn integration() {
        assert_eq!(integrate(vec![1.0, 2.0, -4.0]), vec![1.0, 3.0, -1.0]);
        assert_eq!(integrate(Vec::new()), Vec::<f64>::new());
    }

    #[test]
    fn square_steps_at_half_cycle() {
        let square = square(&blit());
        assert_eq!(square.len(), 512);
        // the delayed impulse pulls the first half down, the peak lifts the second half
        for i in (16..240).step_by(16) {
            assert!(square[i] < square[i + 256], "{}", i);
            assert!((square[i] - square[16]).abs() < 0.5, "{}", i);
        }
    }

    #[test]
    fn triangle_extremes_half_a_cycle_apart() {
        let square = square(&blit());
        let levels = crate::wavetable::quantize::stretch(&square, 2047).unwrap();
        let triangle = triangle(&square, &levels);
        assert_eq!(triangle.len(), 512);
        let (min, max) = crate::wavetable::extremes(&triangle);
        let peak = triangle.iter().position(|&x| x == max).unwrap();
        let trough = triangle.iter().position(|&x| x == min).unwrap();
        assert!((peak as i64 - 384).abs() <= 4, "peak at {}", peak);
        assert!((trough as i64 - 128).abs() <= 4, "trough at {}", trough);
    }

    #[test]
    fn sawtooth_ramps() {
        let saw = sawtooth(&blit());
        assert_eq!(saw.len(), 512);
        // away from the discontinuity at the start of the cycle the ramp rises steadily
        for i in (32..480).step_by(32) {
            assert!(saw[i + 32] > saw[i], "{}", i);
        }
    }

    #[test]
    fn midrange_of_cycle() {
        assert_eq!(midrange(&[-1.0, 3.0, 0.0]), 1.0);
    }
}
