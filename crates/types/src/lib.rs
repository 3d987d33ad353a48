//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, rendering, input mapping).
//!
//! It carries the configuration constants that form part of the engine
//! contract, the shape and color catalogs, and the action/signal vocabulary
//! the engine exchanges with its presentation collaborators.

/// Grid side length. The board is always `GRID_SIZE` x `GRID_SIZE`.
pub const GRID_SIZE: u8 = 8;

/// Number of blocks dealt per hand.
pub const HAND_SIZE: usize = 3;

/// Points awarded per cleared cell.
pub const POINTS_PER_CELL: u32 = 10;

/// Block colors, drawn uniformly at random when a hand is dealt.
///
/// The catalog is fixed at 7 entries. [`BlockColor::hex`] carries the
/// CSS color the rendering collaborator is expected to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
    Cyan,
}

impl BlockColor {
    /// The full color catalog, in draw order.
    pub const ALL: [BlockColor; 7] = [
        BlockColor::Red,
        BlockColor::Green,
        BlockColor::Blue,
        BlockColor::Yellow,
        BlockColor::Purple,
        BlockColor::Orange,
        BlockColor::Cyan,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockColor::Red => "red",
            BlockColor::Green => "green",
            BlockColor::Blue => "blue",
            BlockColor::Yellow => "yellow",
            BlockColor::Purple => "purple",
            BlockColor::Orange => "orange",
            BlockColor::Cyan => "cyan",
        }
    }

    /// CSS hex value for rendering collaborators.
    ///
    /// # Examples
    ///
    /// ```
    /// use block_blast_types::BlockColor;
    ///
    /// assert_eq!(BlockColor::Red.hex(), "#FF5252");
    /// assert_eq!(BlockColor::Cyan.hex(), "#00BCD4");
    /// ```
    pub fn hex(&self) -> &'static str {
        match self {
            BlockColor::Red => "#FF5252",
            BlockColor::Green => "#4CAF50",
            BlockColor::Blue => "#2196F3",
            BlockColor::Yellow => "#FFC107",
            BlockColor::Purple => "#9C27B0",
            BlockColor::Orange => "#FF9800",
            BlockColor::Cyan => "#00BCD4",
        }
    }

    /// 1-based code for u8 grid encodings (0 is reserved for empty cells).
    pub fn code(&self) -> u8 {
        match self {
            BlockColor::Red => 1,
            BlockColor::Green => 2,
            BlockColor::Blue => 3,
            BlockColor::Yellow => 4,
            BlockColor::Purple => 5,
            BlockColor::Orange => 6,
            BlockColor::Cyan => 7,
        }
    }
}

/// A cell on the grid (`None` = empty, `Some` = filled with a color).
///
/// Used by the grid as a flat array of cells.
pub type Cell = Option<BlockColor>;

/// The fixed 11-entry polyomino shape catalog.
///
/// Cell offsets for each kind live in `block-blast-core`'s `shapes`
/// module; this enum is the stable name for each entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Single cell (1x1)
    Single,
    /// Two cells horizontal (1x2)
    DoubleH,
    /// Two cells vertical (2x1)
    DoubleV,
    /// Three cells horizontal (1x3)
    TripleH,
    /// Three cells vertical (3x1)
    TripleV,
    /// L corner (2x2 box, top-right cell missing)
    L,
    /// Mirrored L corner (2x2 box, top-left cell missing)
    ReverseL,
    /// T shape (3x2 box)
    T,
    /// Square (2x2)
    Square,
    /// Z zigzag (3x2 box)
    Z,
    /// S zigzag (3x2 box)
    S,
}

impl ShapeKind {
    /// The full shape catalog, in draw order.
    pub const ALL: [ShapeKind; 11] = [
        ShapeKind::Single,
        ShapeKind::DoubleH,
        ShapeKind::DoubleV,
        ShapeKind::TripleH,
        ShapeKind::TripleV,
        ShapeKind::L,
        ShapeKind::ReverseL,
        ShapeKind::T,
        ShapeKind::Square,
        ShapeKind::Z,
        ShapeKind::S,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Single => "single",
            ShapeKind::DoubleH => "double-h",
            ShapeKind::DoubleV => "double-v",
            ShapeKind::TripleH => "triple-h",
            ShapeKind::TripleV => "triple-v",
            ShapeKind::L => "l",
            ShapeKind::ReverseL => "reverse-l",
            ShapeKind::T => "t",
            ShapeKind::Square => "square",
            ShapeKind::Z => "z",
            ShapeKind::S => "s",
        }
    }
}

/// Grid anchor coordinate. The selected block's shape origin aligns here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub row: u8,
    pub col: u8,
}

impl GridPos {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Move one cell in `direction`, clamped to the grid (no wrap).
    ///
    /// # Examples
    ///
    /// ```
    /// use block_blast_types::{Direction, GridPos};
    ///
    /// assert_eq!(GridPos::new(0, 3).step(Direction::Up), GridPos::new(0, 3));
    /// assert_eq!(GridPos::new(4, 7).step(Direction::Right), GridPos::new(4, 7));
    /// assert_eq!(GridPos::new(4, 4).step(Direction::Down), GridPos::new(5, 4));
    /// ```
    pub fn step(self, direction: Direction) -> Self {
        let max = GRID_SIZE - 1;
        match direction {
            Direction::Up => Self {
                row: self.row.saturating_sub(1),
                ..self
            },
            Direction::Down => Self {
                row: self.row.saturating_add(1).min(max),
                ..self
            },
            Direction::Left => Self {
                col: self.col.saturating_sub(1),
                ..self
            },
            Direction::Right => Self {
                col: self.col.saturating_add(1).min(max),
                ..self
            },
        }
    }
}

/// Hover navigation directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Engine actions invoked by input collaborators.
///
/// Every action is a silent no-op when its guards fail (stale input must
/// never crash a session); the dispatching method reports whether state
/// changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Select the hand slot at the given index
    SelectBlock(usize),
    /// Cycle selection forward to the next unused hand slot
    SelectNextBlock,
    /// Move the hover anchor one cell (clamped at the edges)
    MoveHover(Direction),
    /// Place the selected block at the hover anchor
    Place,
    /// Reinitialize the session
    Restart,
}

/// Fire-and-forget signals emitted during a placement.
///
/// Consumed by the audio collaborator; the engine does not depend on
/// their consumption. Signals from a placement that was never drained
/// are replaced by the next placement's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineSignal {
    /// A block was committed to the grid.
    BlockPlaced {
        /// Number of grid cells the block filled.
        cells: u8,
    },
    /// A placement completed at least one row or column.
    LinesCleared {
        /// Completed row count.
        rows: u8,
        /// Completed column count.
        cols: u8,
        /// Distinct cells cleared (intersections counted once).
        cells: u8,
        /// Points awarded for this clear.
        points: u32,
    },
}
