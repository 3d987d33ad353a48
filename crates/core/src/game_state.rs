//! Game state module - manages the complete game state
//!
//! This module ties together all core components: grid, shape catalog,
//! RNG, and scoring. It owns the hand, the hover/selection cursor, the
//! cached placement legality, and the session lifecycle.
//!
//! Every action method is a silent no-op returning `false` when its
//! guards fail; stale input from the UI layer must never crash a session.

use arrayvec::ArrayVec;

use block_blast_types::{
    BlockColor, Direction, EngineSignal, GameAction, GridPos, ShapeKind, GRID_SIZE, HAND_SIZE,
};

use crate::rng::BlockFactory;
use crate::shapes::{self, CellOffset};
use crate::{scoring, Grid};

/// A placeable block dealt into the hand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// Session-unique id (monotonic per factory)
    pub id: u32,
    pub kind: ShapeKind,
    pub color: BlockColor,
    /// Set permanently once the block has been placed
    pub used: bool,
}

impl Block {
    /// Occupied cell offsets of this block's shape
    pub fn cells(&self) -> &'static [CellOffset] {
        shapes::cells(self.kind)
    }

    /// Number of grid cells this block fills
    pub fn cell_count(&self) -> u8 {
        shapes::cell_count(self.kind)
    }
}

/// Signals emitted by the most recent placement, drained by observers
pub type SignalQueue = ArrayVec<EngineSignal, 2>;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    hand: [Block; HAND_SIZE],
    selected_index: usize,
    hover: Option<GridPos>,
    /// Cached legality of (selected block, hover position). Recomputed
    /// eagerly on every selection or hover mutation, reset by placement.
    can_place: bool,
    score: u32,
    game_over: bool,
    /// Count of `used` blocks in the hand; reset to 0 on hand replacement
    used_blocks: u8,
    factory: BlockFactory,
    /// Signals from the latest placement (overwritten if never drained)
    signals: SignalQueue,
}

impl GameState {
    /// Create a new session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut factory = BlockFactory::new(seed);
        let hand = factory.next_hand();

        Self {
            grid: Grid::new(),
            hand,
            selected_index: 0,
            hover: Some(GridPos::new(0, 0)),
            can_place: false,
            score: 0,
            game_over: false,
            used_blocks: 0,
            factory,
            signals: SignalQueue::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn hand(&self) -> &[Block; HAND_SIZE] {
        &self.hand
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_block(&self) -> &Block {
        &self.hand[self.selected_index]
    }

    pub fn hover_position(&self) -> Option<GridPos> {
        self.hover
    }

    pub fn can_place(&self) -> bool {
        self.can_place
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn used_blocks(&self) -> u8 {
        self.used_blocks
    }

    /// Current RNG state (a restart continues this stream)
    pub fn seed(&self) -> u32 {
        self.factory.seed()
    }

    /// Select the hand slot at `index`.
    ///
    /// Rejected when the index is out of range, the slot is already used,
    /// or the game is over. On success the placement legality cache is
    /// recomputed against the current hover position.
    pub fn select_block(&mut self, index: usize) -> bool {
        if self.game_over || index >= HAND_SIZE || self.hand[index].used {
            return false;
        }

        self.selected_index = index;

        if let Some(pos) = self.hover {
            self.can_place = self.can_block_be_placed(&self.hand[index], pos.row, pos.col);
        }

        // Unreachable past the guard above, but a stale selection falls
        // back to the first unused slot rather than pointing at a spent
        // block.
        if self.hand[self.selected_index].used {
            if let Some(first_unused) = self.hand.iter().position(|block| !block.used) {
                self.selected_index = first_unused;
            }
        }

        true
    }

    /// Cycle selection forward to the next unused hand slot (wrapping)
    pub fn select_next_block(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let mut index = (self.selected_index + 1) % HAND_SIZE;
        while index != self.selected_index {
            if !self.hand[index].used {
                return self.select_block(index);
            }
            index = (index + 1) % HAND_SIZE;
        }

        false
    }

    /// Set or clear the hover anchor.
    ///
    /// Clearing always succeeds and invalidates the legality cache.
    /// Setting is ignored while the selected block is spent (stale input
    /// from a pointer racing a placement); otherwise the legality cache
    /// is recomputed for the new position.
    pub fn set_hover_position(&mut self, position: Option<GridPos>) -> bool {
        if self.game_over {
            return false;
        }

        let Some(pos) = position else {
            self.hover = None;
            self.can_place = false;
            return true;
        };

        if self.selected_block().used {
            return false;
        }

        self.hover = Some(pos);
        self.can_place = self.can_block_be_placed(&self.hand[self.selected_index], pos.row, pos.col);
        true
    }

    /// Move the hover anchor one cell, clamped at the grid edges (no wrap)
    pub fn move_hover(&mut self, direction: Direction) -> bool {
        if self.game_over {
            return false;
        }

        let Some(pos) = self.hover else {
            return false;
        };

        self.set_hover_position(Some(pos.step(direction)))
    }

    /// Check whether `block` fits with its origin anchored at
    /// (start_row, start_col): every occupied cell in bounds and empty.
    ///
    /// A used block never fits. Pure query; no side effects.
    pub fn can_block_be_placed(&self, block: &Block, start_row: u8, start_col: u8) -> bool {
        if block.used {
            return false;
        }

        block.cells().iter().all(|&(dr, dc)| {
            let row = start_row as u16 + dr as u16;
            let col = start_col as u16 + dc as u16;
            row < GRID_SIZE as u16
                && col < GRID_SIZE as u16
                && self.grid.is_empty_at(row as u8, col as u8)
        })
    }

    /// Place the selected block at the hover anchor.
    ///
    /// No-op unless a hover position is set and the legality cache says
    /// the placement fits. Runs the full placement sequence: fill cells,
    /// emit the placed signal, advance the selection, replace the hand
    /// when all three blocks are spent, then clear lines and check for
    /// game over, all synchronously within this call.
    pub fn place_block(&mut self) -> bool {
        if self.game_over || !self.can_place {
            return false;
        }
        let Some(pos) = self.hover else {
            return false;
        };
        let block = self.hand[self.selected_index];
        if block.used {
            return false;
        }

        self.signals.clear();

        // Legality is guaranteed by the can_place cache; the write cannot
        // collide or leave the grid.
        let _placed = self.grid.place(block.cells(), pos.row, pos.col, block.color);
        self.signals.push(EngineSignal::BlockPlaced {
            cells: block.cell_count(),
        });

        // The next selection is computed before the block is marked used;
        // a hand replacement below may still override it. The wrap check
        // stops the scan once it returns to the start.
        let mut next_index = (self.selected_index + 1) % HAND_SIZE;
        while self.hand[next_index].used && next_index != self.selected_index {
            next_index = (next_index + 1) % HAND_SIZE;
        }

        self.hand[self.selected_index].used = true;
        self.used_blocks += 1;

        if self.used_blocks as usize >= HAND_SIZE {
            self.hand = self.factory.next_hand();
            self.used_blocks = 0;
            next_index = 0;
        }

        self.selected_index = next_index;
        self.can_place = false;

        self.check_and_clear_lines();
        self.check_game_over();

        true
    }

    /// Clear every complete row and column and award points.
    ///
    /// Emits a lines-cleared signal only when cells were actually cleared.
    /// Idempotent: a second call with no intervening placement finds no
    /// complete lines and awards nothing.
    pub fn check_and_clear_lines(&mut self) {
        let (rows, cols) = self.grid.clear_full_lines();
        if rows.is_empty() && cols.is_empty() {
            return;
        }

        let cells = scoring::cleared_cell_count(rows.len() as u32, cols.len() as u32);
        let points = scoring::clear_points(cells);
        self.score += points;

        self.signals.push(EngineSignal::LinesCleared {
            rows: rows.len() as u8,
            cols: cols.len() as u8,
            cells: cells as u8,
            points,
        });
    }

    /// Set the game-over flag when no unused block fits anywhere.
    ///
    /// One-way transition: the session stays terminal until a restart.
    pub fn check_game_over(&mut self) {
        let any_fit = self
            .hand
            .iter()
            .filter(|block| !block.used)
            .any(|block| self.has_any_placement(block));

        if !any_fit {
            self.game_over = true;
        }
    }

    /// Scan all grid origins for a legal placement of `block`
    fn has_any_placement(&self, block: &Block) -> bool {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if self.can_block_be_placed(block, row, col) {
                    return true;
                }
            }
        }
        false
    }

    /// Reinitialize the session, continuing the current RNG stream
    pub fn restart(&mut self) -> bool {
        let seed = self.factory.seed();
        *self = Self::new(seed);
        true
    }

    /// Apply an engine action, reporting whether it was accepted
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::SelectBlock(index) => self.select_block(index),
            GameAction::SelectNextBlock => self.select_next_block(),
            GameAction::MoveHover(direction) => self.move_hover(direction),
            GameAction::Place => self.place_block(),
            GameAction::Restart => self.restart(),
        }
    }

    /// Drain the signals emitted by the most recent placement
    pub fn take_signals(&mut self) -> SignalQueue {
        std::mem::take(&mut self.signals)
    }

    pub fn snapshot_into(&self, out: &mut crate::snapshot::GameSnapshot) {
        use crate::snapshot::BlockSnapshot;

        self.grid.write_u8_grid(&mut out.grid);

        for (slot, block) in out.hand.iter_mut().zip(self.hand.iter()) {
            *slot = BlockSnapshot::from(*block);
        }
        out.selected_index = self.selected_index;
        out.hover = self.hover.map(|pos| (pos.row, pos.col));
        out.can_place = self.can_place;
        out.score = self.score;
        out.game_over = self.game_over;
        out.used_blocks = self.used_blocks;
        out.seed = self.factory.seed();
    }

    pub fn snapshot(&self) -> crate::snapshot::GameSnapshot {
        let mut snap = crate::snapshot::GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
