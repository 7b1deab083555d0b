//! Core types for rendered boards

use crate::types::{Arm, Arms, Direction, Domino};

use super::geometry::BoundingBox;

/// A placed tile decorated with its grid footprint and draw direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardDomino {
    pub domino: Domino,
    pub bounding_box: BoundingBox,
    /// Axis the two halves are drawn along.
    pub direction: Direction,
}

impl BoardDomino {
    pub fn new(domino: Domino, bounding_box: BoundingBox, direction: Direction) -> Self {
        BoardDomino {
            domino,
            bounding_box,
            direction,
        }
    }

    /// Area in 1-based CSS-grid lines, where the top-left square is `(1, 1)`.
    pub fn grid_area(&self) -> GridArea {
        let b = &self.bounding_box;
        GridArea {
            row_start: b.north + 1,
            column_start: b.west + 1,
            row_end: b.south + 1,
            column_end: b.east + 1,
        }
    }
}

/// Grid-line placement of a tile in CSS-grid convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridArea {
    pub row_start: i32,
    pub column_start: i32,
    pub row_end: i32,
    pub column_end: i32,
}

/// A board with every tile placed on the render grid.
///
/// Mirrors [`crate::Board`]: either an open row or a spinner with arms.
/// Transforms return new values; nothing is mutated in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderedBoard {
    Open {
        row: Vec<BoardDomino>,
    },
    Spun {
        spinner: BoardDomino,
        arms: Arms<Vec<BoardDomino>>,
    },
}

impl RenderedBoard {
    pub fn spinner(&self) -> Option<&BoardDomino> {
        match self {
            RenderedBoard::Open { .. } => None,
            RenderedBoard::Spun { spinner, .. } => Some(spinner),
        }
    }

    /// Tiles of one arm; always empty for an open row.
    pub fn arm(&self, arm: Arm) -> &[BoardDomino] {
        match self {
            RenderedBoard::Open { .. } => &[],
            RenderedBoard::Spun { arms, .. } => &arms[arm],
        }
    }

    /// The open row, if no spinner has been played.
    pub fn row(&self) -> Option<&[BoardDomino]> {
        match self {
            RenderedBoard::Open { row } => Some(row),
            RenderedBoard::Spun { .. } => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RenderedBoard::Open { row } if row.is_empty())
    }

    /// Every tile: the spinner then the north, east, south and west arms, or
    /// the row from west to east.
    pub fn tiles(&self) -> impl Iterator<Item = &BoardDomino> {
        let (head, row, arms) = match self {
            RenderedBoard::Open { row } => (None, row.as_slice(), None),
            RenderedBoard::Spun { spinner, arms } => (Some(spinner), &[][..], Some(arms)),
        };
        head.into_iter()
            .chain(row)
            .chain(arms.into_iter().flat_map(|arms| {
                Arm::ALL.into_iter().flat_map(move |arm| arms[arm].iter())
            }))
    }

    pub fn tile_count(&self) -> usize {
        self.tiles().count()
    }

    /// Can vertical arms be played on? Mirrors [`crate::Board::can_play_vertically`].
    pub fn can_play_vertically(&self) -> bool {
        match self {
            RenderedBoard::Open { .. } => false,
            RenderedBoard::Spun { arms, .. } => !arms.east.is_empty() && !arms.west.is_empty(),
        }
    }

    /// Apply `f` to every tile, keeping the board's shape.
    pub fn map_tiles(&self, mut f: impl FnMut(&BoardDomino) -> BoardDomino) -> RenderedBoard {
        match self {
            RenderedBoard::Open { row } => RenderedBoard::Open {
                row: row.iter().map(&mut f).collect(),
            },
            RenderedBoard::Spun { spinner, arms } => RenderedBoard::Spun {
                spinner: f(spinner),
                arms: arms.map(|_, tiles| tiles.iter().map(&mut f).collect()),
            },
        }
    }
}
