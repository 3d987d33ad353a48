//! RNG module - seeded block generation
//!
//! Hands are dealt as batches of `HAND_SIZE` blocks. Each block's shape
//! and color are drawn uniformly at random, independently, with
//! replacement (duplicates within a hand are allowed).
//!
//! A simple LCG keeps the stream deterministic per seed.

use block_blast_types::{BlockColor, ShapeKind, HAND_SIZE};

use crate::game_state::Block;

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Deals hands of random blocks with session-unique ids
#[derive(Debug, Clone)]
pub struct BlockFactory {
    rng: SimpleRng,
    /// Monotonic id for dealt blocks (increments once per block).
    next_block_id: u32,
}

impl BlockFactory {
    /// Create a new factory with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            next_block_id: 0,
        }
    }

    /// Draw a single random block
    fn next_block(&mut self) -> Block {
        let kind = ShapeKind::ALL[self.rng.next_range(ShapeKind::ALL.len() as u32) as usize];
        let color = BlockColor::ALL[self.rng.next_range(BlockColor::ALL.len() as u32) as usize];
        self.next_block_id = self.next_block_id.wrapping_add(1);

        Block {
            id: self.next_block_id,
            kind,
            color,
            used: false,
        }
    }

    /// Deal a fresh hand of `HAND_SIZE` unused blocks
    pub fn next_hand(&mut self) -> [Block; HAND_SIZE] {
        std::array::from_fn(|_| self.next_block())
    }

    /// Get the current RNG state (for restarting with the same stream)
    pub fn seed(&self) -> u32 {
        self.rng.state
    }
}

impl Default for BlockFactory {
    fn default() -> Self {
        Self::new(1)
    }
}
