//! Bag module - 7-bag random piece generation
//!
//! Each bag holds one of every piece kind in shuffled order and is consumed
//! from the back. A fresh bag is generated only when the previous one is
//! exhausted, so every window of 7 draws between refills is a permutation
//! of all kinds.
//!
//! The bag starts empty: the preview is `None` until the first draw has
//! filled it, matching the reference behavior. A simple seeded LCG keeps
//! games reproducible for tests.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, ALL_KINDS};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state (usable as a seed for a follow-up game)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct SevenBag {
    bag: ArrayVec<PieceKind, 7>,
    rng: SimpleRng,
}

impl SevenBag {
    /// Create an empty bag; the first `next()` triggers the first refill
    pub fn new(seed: u32) -> Self {
        Self {
            bag: ArrayVec::new(),
            rng: SimpleRng::new(seed),
        }
    }

    /// Replace the bag wholesale with a fresh permutation of all 7 kinds
    fn refill(&mut self) {
        debug_assert!(self.bag.is_empty(), "refill discards unconsumed pieces");
        self.bag.clear();
        self.bag.extend(ALL_KINDS);
        self.rng.shuffle(&mut self.bag);
    }

    /// Draw the next piece, refilling first if the bag is exhausted
    pub fn next(&mut self) -> PieceKind {
        if self.bag.is_empty() {
            self.refill();
        }
        self.bag.pop().expect("bag is non-empty after refill")
    }

    /// The kind the next `next()` call will return, without consuming it
    ///
    /// `None` while the bag is empty (before the first draw, and right
    /// after the last piece of a bag was taken).
    pub fn peek_upcoming(&self) -> Option<PieceKind> {
        self.bag.last().copied()
    }

    /// Pieces remaining in the current bag
    pub fn remaining(&self) -> usize {
        self.bag.len()
    }

    /// Current RNG state (for restarting with a continuing sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}
