//! Shapes module - the fixed polyomino catalog
//!
//! Each shape is a set of (row, col) cell offsets from the shape origin,
//! normalized to its bounding box: every shape touches row 0 and col 0 of
//! the box, and the origin cell itself may be unoccupied (mirrored L, S).
//! Blocks never rotate; the catalog is the complete set of placeable forms.

use block_blast_types::ShapeKind;

/// Offset of a single cell relative to the shape origin
pub type CellOffset = (u8, u8);

/// Get the occupied cell offsets for a shape kind
pub fn cells(kind: ShapeKind) -> &'static [CellOffset] {
    match kind {
        ShapeKind::Single => &[(0, 0)],
        ShapeKind::DoubleH => &[(0, 0), (0, 1)],
        ShapeKind::DoubleV => &[(0, 0), (1, 0)],
        ShapeKind::TripleH => &[(0, 0), (0, 1), (0, 2)],
        ShapeKind::TripleV => &[(0, 0), (1, 0), (2, 0)],
        // x .
        // x x
        ShapeKind::L => &[(0, 0), (1, 0), (1, 1)],
        // . x
        // x x
        ShapeKind::ReverseL => &[(0, 1), (1, 0), (1, 1)],
        // x x x
        // . x .
        ShapeKind::T => &[(0, 0), (0, 1), (0, 2), (1, 1)],
        ShapeKind::Square => &[(0, 0), (0, 1), (1, 0), (1, 1)],
        // x x .
        // . x x
        ShapeKind::Z => &[(0, 0), (0, 1), (1, 1), (1, 2)],
        // . x x
        // x x .
        ShapeKind::S => &[(0, 1), (0, 2), (1, 0), (1, 1)],
    }
}

/// Bounding box height of a shape
pub fn rows(kind: ShapeKind) -> u8 {
    cells(kind).iter().map(|&(row, _)| row).max().unwrap_or(0) + 1
}

/// Bounding box width of a shape
pub fn cols(kind: ShapeKind) -> u8 {
    cells(kind).iter().map(|&(_, col)| col).max().unwrap_or(0) + 1
}

/// Number of occupied cells in a shape
pub fn cell_count(kind: ShapeKind) -> u8 {
    cells(kind).len() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_normalized() {
        for kind in ShapeKind::ALL {
            let offsets = cells(kind);
            assert!(!offsets.is_empty(), "{:?} has no cells", kind);
            assert!(
                offsets.iter().any(|&(row, _)| row == 0),
                "{:?} does not touch row 0",
                kind
            );
            assert!(
                offsets.iter().any(|&(_, col)| col == 0),
                "{:?} does not touch col 0",
                kind
            );
        }
    }

    #[test]
    fn test_catalog_has_no_duplicate_offsets() {
        for kind in ShapeKind::ALL {
            let offsets = cells(kind);
            for (i, a) in offsets.iter().enumerate() {
                for b in &offsets[i + 1..] {
                    assert_ne!(a, b, "{:?} repeats offset {:?}", kind, a);
                }
            }
        }
    }

    #[test]
    fn test_bounding_boxes() {
        assert_eq!((rows(ShapeKind::Single), cols(ShapeKind::Single)), (1, 1));
        assert_eq!((rows(ShapeKind::DoubleH), cols(ShapeKind::DoubleH)), (1, 2));
        assert_eq!((rows(ShapeKind::TripleV), cols(ShapeKind::TripleV)), (3, 1));
        assert_eq!((rows(ShapeKind::T), cols(ShapeKind::T)), (2, 3));
        assert_eq!((rows(ShapeKind::Square), cols(ShapeKind::Square)), (2, 2));
        assert_eq!((rows(ShapeKind::Z), cols(ShapeKind::Z)), (2, 3));
    }

    #[test]
    fn test_cell_counts() {
        assert_eq!(cell_count(ShapeKind::Single), 1);
        assert_eq!(cell_count(ShapeKind::L), 3);
        assert_eq!(cell_count(ShapeKind::ReverseL), 3);
        assert_eq!(cell_count(ShapeKind::T), 4);
        assert_eq!(cell_count(ShapeKind::S), 4);

        // No shape exceeds a 3x3 bounding box or 4 cells
        for kind in ShapeKind::ALL {
            assert!(cell_count(kind) <= 4);
            assert!(rows(kind) <= 3);
            assert!(cols(kind) <= 3);
        }
    }
}
