//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and session
//! logic. It has **zero dependencies** on UI, audio, or I/O, making it:
//!
//! - **Deterministic**: Same seed deals identical hands (for tests and replays)
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for the placement sequence
//!
//! # Module Structure
//!
//! - [`grid`]: 8x8 game grid with bounds-checked cells and full-line clearing
//! - [`shapes`]: the fixed 11-entry polyomino catalog
//! - [`rng`]: seeded uniform block generation dealt in hands of three
//! - [`scoring`]: cleared-cell counting and point calculation
//! - [`game_state`]: complete session state, action surface, and signals
//! - [`snapshot`]: serializable state read surface for collaborators
//!
//! # Game Rules
//!
//! - Blocks are dealt in hands of exactly 3; a block is spent permanently
//!   once placed, and the hand is replaced when all 3 are spent.
//! - A placement is legal when every occupied cell of the shape lands in
//!   bounds on an empty grid cell. There is no partial placement.
//! - Completing a full row or column clears it in place (no gravity, no
//!   shifting); an intersection cell shared by a completed row and column
//!   is cleared once. Every distinct cleared cell scores 10 points.
//! - The session ends when no unused block fits anywhere on the grid.
//!
//! # Example
//!
//! ```
//! use block_blast_core::GameState;
//! use block_blast_types::{EngineSignal, GridPos};
//!
//! // Create a session and aim the first block at mid-grid
//! let mut game = GameState::new(12345);
//! game.set_hover_position(Some(GridPos::new(3, 3)));
//! assert!(game.can_place());
//!
//! // Commit the placement and observe the emitted signal
//! assert!(game.place_block());
//! assert_eq!(game.used_blocks(), 1);
//! assert!(matches!(
//!     game.take_signals().first(),
//!     Some(EngineSignal::BlockPlaced { .. })
//! ));
//! ```
//!
//! # Invalid input
//!
//! Every action method is a silent no-op returning `false` when its
//! guards fail: out-of-range selection, hovering with a spent block,
//! placing without a validated hover, or any action after game over.
//! Stale UI input never crashes a session.

pub mod game_state;
pub mod grid;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use block_blast_types as types;

// Re-export commonly used types for convenience
pub use game_state::{Block, GameState, SignalQueue};
pub use grid::{Grid, LineList};
pub use rng::{BlockFactory, SimpleRng};
pub use snapshot::{BlockSnapshot, GameSnapshot};
