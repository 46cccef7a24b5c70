// syn.tables -- wavetable and pitch table generator for embedded synthesizers
// Copyright (C) 2021  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Reading one cycle of a periodic signal at a phase offset.

use std::ops::Index;

/// A view on a single cycle of a periodic signal, phase shifted by `offset` samples.
/// Indices past the end of the cycle wrap around to its start.
///
/// # Examples
///
/// ```
/// use syn_tables::wavetable::circular::Shifted;
///
/// let cycle = [0, 1, 2, 3];
/// let shifted = Shifted::new(&cycle, 1);
/// assert_eq!(shifted.iter().collect::<Vec<_>>(), vec![&1, &2, &3, &0]);
/// assert_eq!(shifted[3], 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Shifted<'a, T> {
    cycle: &'a [T],
    offset: usize,
}

impl<'a, T> Shifted<'a, T> {
    pub fn new(cycle: &'a [T], offset: usize) -> Self {
        let offset = if cycle.is_empty() { 0 } else { offset % cycle.len() };
        Shifted { cycle, offset }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + 'a {
        let (head, tail) = self.cycle.split_at(self.offset);
        tail.iter().chain(head.iter())
    }
}

impl<'a, T> Index<usize> for Shifted<'a, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        let len = self.cycle.len();
        assert!(index < len, "index {} out of a cycle of {}", index, len);
        let wrapped = index + self.offset;
        if wrapped < len {
            &self.cycle[wrapped]
        } else {
            &self.cycle[wrapped - len]
        }
    }
}

/// Rotate a cycle so that it starts `offset` samples later.
pub fn rotate_left<T: Clone>(cycle: &[T], offset: usize) -> Vec<T> {
    Shifted::new(cycle, offset).iter().cloned().collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn half_cycle_matches_split_indexing() {
        let cycle: Vec<usize> = (0..8).collect();
        let mid = 4;
        let shifted = Shifted::new(&cycle, mid);
        for i in 0..cycle.len() {
            let expected = if i < mid { i + mid } else { i - mid };
            assert_eq!(shifted[i], expected);
        }
    }

    #[test]
    fn rotation() {
        assert_eq!(rotate_left(&[1, 2, 3, 4, 5], 2), vec![3, 4, 5, 1, 2]);
        assert_eq!(rotate_left(&[1, 2, 3], 3), vec![1, 2, 3]);
        assert_eq!(rotate_left::<i32>(&[], 3), Vec::<i32>::new());
    }

    #[test]
    #[should_panic]
    fn out_of_cycle() {
        let cycle = [1, 2];
        let _ = Shifted::new(&cycle, 1)[2];
    }
}
