//! Grid module - manages the 8x8 game grid
//!
//! The grid is a fixed square matrix where each cell is empty or filled
//! with a block color. Uses a flat array for cache locality and
//! zero-allocation. Coordinates: (row, col), each in 0..8, row-major.
//!
//! Unlike gravity games there is no row shifting: cleared cells simply
//! become empty in place, and both rows and columns can complete.

use arrayvec::ArrayVec;

use block_blast_types::{BlockColor, Cell, GRID_SIZE};

/// Total number of cells on the grid
const CELL_COUNT: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Indices of lines cleared in one sweep (at most one per row/column)
pub type LineList = ArrayVec<u8, { GRID_SIZE as usize }>;

/// The game grid - 8x8 cells using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * GRID_SIZE + col)
    cells: [Cell; CELL_COUNT],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: u8, col: u8) -> Option<usize> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some((row as usize) * (GRID_SIZE as usize) + (col as usize))
    }

    /// Side length of the grid
    pub fn size(&self) -> u8 {
        GRID_SIZE
    }

    /// Get cell at (row, col), or `None` if out of bounds
    pub fn get(&self, row: u8, col: u8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds
    pub fn set(&mut self, row: u8, col: u8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_empty_at(&self, row: u8, col: u8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_filled(&self, row: u8, col: u8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: u8) -> bool {
        if row >= GRID_SIZE {
            return false;
        }
        let start = (row as usize) * (GRID_SIZE as usize);
        let end = start + GRID_SIZE as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Check if a column is completely filled
    pub fn is_col_full(&self, col: u8) -> bool {
        if col >= GRID_SIZE {
            return false;
        }
        (0..GRID_SIZE).all(|row| self.is_filled(row, col))
    }

    /// Fill every offset cell of a shape anchored at (start_row, start_col).
    /// All-or-nothing: returns false without modifying the grid if any
    /// target cell is out of bounds or already filled.
    pub fn place(&mut self, offsets: &[(u8, u8)], start_row: u8, start_col: u8, color: BlockColor) -> bool {
        // First check that all positions are free
        for &(dr, dc) in offsets {
            let row = start_row as u16 + dr as u16;
            let col = start_col as u16 + dc as u16;
            if row >= GRID_SIZE as u16 || col >= GRID_SIZE as u16 {
                return false;
            }
            if !self.is_empty_at(row as u8, col as u8) {
                return false;
            }
        }

        // Then fill all cells
        for &(dr, dc) in offsets {
            self.set(start_row + dr, start_col + dc, Some(color));
        }

        true
    }

    /// Clear every complete row and every complete column in place.
    /// A cell at the intersection of a complete row and column is cleared
    /// once. Returns the cleared row and column indices, ascending.
    pub fn clear_full_lines(&mut self) -> (LineList, LineList) {
        let mut full_rows = LineList::new();
        let mut full_cols = LineList::new();

        for line in 0..GRID_SIZE {
            if self.is_row_full(line) {
                full_rows.push(line);
            }
            if self.is_col_full(line) {
                full_cols.push(line);
            }
        }

        for &row in &full_rows {
            for col in 0..GRID_SIZE {
                self.set(row, col, None);
            }
        }
        for &col in &full_cols {
            for row in 0..GRID_SIZE {
                self.set(row, col, None);
            }
        }

        (full_rows, full_cols)
    }

    /// Number of filled cells on the grid
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Write the grid as color codes into a u8 matrix (0 = empty)
    pub fn write_u8_grid(&self, out: &mut [[u8; GRID_SIZE as usize]; GRID_SIZE as usize]) {
        for row in 0..GRID_SIZE as usize {
            for col in 0..GRID_SIZE as usize {
                out[row][col] = match self.cells[row * GRID_SIZE as usize + col] {
                    Some(color) => color.code(),
                    None => 0,
                };
            }
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Create from a 2D vector for testing (converts to flat array)
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), GRID_SIZE as usize);
        assert!(cells_2d.iter().all(|row| row.len() == GRID_SIZE as usize));

        let mut flat = [None; CELL_COUNT];
        for (row, cells) in cells_2d.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                flat[row * GRID_SIZE as usize + col] = *cell;
            }
        }
        Self { cells: flat }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
