//! Snapshot module - the state read surface for presentation collaborators
//!
//! A [`GameSnapshot`] is a flat, copyable view of the engine state that a
//! rendering collaborator can poll each frame and, being `Serialize`,
//! encode for any out-of-process observer. Reusable via [`GameSnapshot::clear`]
//! so a render loop never reallocates.

use serde::Serialize;

use block_blast_types::{GRID_SIZE, HAND_SIZE};

use crate::game_state::Block;

/// View of one hand slot, with catalog entries as lowercase string codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockSnapshot {
    pub id: u32,
    pub shape: &'static str,
    pub color: &'static str,
    pub used: bool,
}

impl BlockSnapshot {
    const EMPTY: Self = Self {
        id: 0,
        shape: "",
        color: "",
        used: false,
    };
}

impl From<Block> for BlockSnapshot {
    fn from(value: Block) -> Self {
        Self {
            id: value.id,
            shape: value.kind.as_str(),
            color: value.color.as_str(),
            used: value.used,
        }
    }
}

/// Complete observable state of one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Grid as color codes, 0 = empty (see `BlockColor::code`)
    pub grid: [[u8; GRID_SIZE as usize]; GRID_SIZE as usize],
    pub hand: [BlockSnapshot; HAND_SIZE],
    pub selected_index: usize,
    pub hover: Option<(u8, u8)>,
    pub can_place: bool,
    pub score: u32,
    pub game_over: bool,
    pub used_blocks: u8,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[0u8; GRID_SIZE as usize]; GRID_SIZE as usize];
        self.hand = [BlockSnapshot::EMPTY; HAND_SIZE];
        self.selected_index = 0;
        self.hover = None;
        self.can_place = false;
        self.score = 0;
        self.game_over = false;
        self.used_blocks = 0;
        self.seed = 0;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0u8; GRID_SIZE as usize]; GRID_SIZE as usize],
            hand: [BlockSnapshot::EMPTY; HAND_SIZE],
            selected_index: 0,
            hover: None,
            can_place: false,
            score: 0,
            game_over: false,
            used_blocks: 0,
            seed: 0,
        }
    }
}
