//! Board rendering: placing logical tiles on the render grid
//!
//! This module is organized into submodules:
//! - `defaults`: Layout constants
//! - `geometry`: Bounding boxes, translation, bending
//! - `types`: `BoardDomino` and `RenderedBoard`
//! - `context`: `LayoutSettings` for the solver
//! - `solve`: Fitting a rendered board into a viewport
//! - `text`: Plain-text picture of a grid, for debugging

pub mod context;
pub mod defaults;
pub mod geometry;
pub mod solve;
pub mod text;
pub mod types;

pub use context::LayoutSettings;
pub use geometry::{BoundingBox, Grid};
pub use solve::{Layout, PixelRect, solve_layout, solve_layout_with};
pub use text::render_text;
pub use types::*;

use glam::IVec2;

use crate::types::{Arm, Board, Direction, Domino};
use defaults::{
    DOUBLE_HALF_WIDTH, DOUBLE_LENGTH, SPINNER_BOX, TILE_HALF_WIDTH, TILE_LENGTH,
};

/// Along-arm length of a tile.
fn tile_length(domino: Domino) -> i32 {
    if domino.is_double() { DOUBLE_LENGTH } else { TILE_LENGTH }
}

/// Distance from the arm's centre line to either side of a tile.
fn tile_half_width(domino: Domino) -> i32 {
    if domino.is_double() { DOUBLE_HALF_WIDTH } else { TILE_HALF_WIDTH }
}

/// Place a tile whose near edge is `start` squares out from the origin.
fn arm_tile(arm: Arm, start: i32, domino: Domino) -> BoardDomino {
    let end = start + tile_length(domino);
    let half = tile_half_width(domino);
    let bounding_box = match arm {
        Arm::North => BoundingBox::new(-end, half, -start, -half),
        Arm::East => BoundingBox::new(-half, end, half, start),
        Arm::South => BoundingBox::new(start, half, end, -half),
        Arm::West => BoundingBox::new(-half, -start, half, -end),
    };
    // Doubles are drawn across their arm.
    let direction = match (domino.is_double(), arm.is_vertical()) {
        (false, _) => arm.direction(),
        (true, true) => Direction::East,
        (true, false) => Direction::South,
    };
    BoardDomino::new(domino, bounding_box, direction)
}

/// Distance from the origin to the spinner's edge on the side of `arm`.
fn arm_origin(arm: Arm) -> i32 {
    match arm {
        Arm::North => -SPINNER_BOX.north,
        Arm::East => SPINNER_BOX.east,
        Arm::South => SPINNER_BOX.south,
        Arm::West => -SPINNER_BOX.west,
    }
}

fn build_arm(arm: Arm, tiles: &[Domino]) -> Vec<BoardDomino> {
    let mut start = arm_origin(arm);
    tiles
        .iter()
        .map(|&domino| {
            let placed = arm_tile(arm, start, domino);
            start += tile_length(domino);
            placed
        })
        .collect()
}

/// Place every tile of `board` relative to the origin, unbent and uncentred.
///
/// An open row starts at the origin and runs east, one tile every four
/// squares. A spun board puts the spinner across the origin and builds each
/// arm outward from it.
pub fn build_rendered_board(board: &Board) -> RenderedBoard {
    match board {
        Board::Open { row } => RenderedBoard::Open {
            row: row
                .iter()
                .zip(0..)
                .map(|(&domino, i)| {
                    BoardDomino::new(
                        domino,
                        BoundingBox::new(-1, TILE_LENGTH * (i + 1), 1, TILE_LENGTH * i),
                        Direction::East,
                    )
                })
                .collect(),
        },
        Board::Spun { spinner, arms } => RenderedBoard::Spun {
            spinner: BoardDomino::new(*spinner, SPINNER_BOX, Direction::South),
            arms: arms.map(|arm, tiles| build_arm(arm, tiles)),
        },
    }
}

impl RenderedBoard {
    /// Box enclosing every tile, `None` for an empty board.
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::enclosing(self.tiles().map(|t| t.bounding_box))
    }

    /// `(width, height)` of the whole board; zero for an empty board.
    pub fn span(&self) -> IVec2 {
        self.bounds().map(|b| b.span()).unwrap_or(IVec2::ZERO)
    }

    /// Extreme coordinate of the board on one side: the smallest north or
    /// west edge, the largest east or south edge.
    pub fn boundary(&self, side: Direction) -> Option<i32> {
        let bounds = self.bounds()?;
        match side {
            Direction::North => Some(bounds.north),
            Direction::East => Some(bounds.east),
            Direction::South => Some(bounds.south),
            Direction::West => Some(bounds.west),
            Direction::None => None,
        }
    }

    /// The outermost tile on one side, by position in its arm or row.
    ///
    /// An open row only has east and west ends.
    pub fn furthest_tile(&self, side: Direction) -> Option<&BoardDomino> {
        match self {
            RenderedBoard::Open { row } => match side {
                Direction::East => row.last(),
                Direction::West => row.first(),
                _ => None,
            },
            RenderedBoard::Spun { arms, .. } => side.arm().and_then(|arm| arms[arm].last()),
        }
    }

    pub fn is_furthest_tile(&self, tile: &BoardDomino, side: Direction) -> bool {
        self.furthest_tile(side)
            .is_some_and(|furthest| furthest.domino.same_tile(tile.domino))
    }

    /// Face a new tile must match to be played on `side`.
    ///
    /// Arm tiles face the spinner with their head, so the tail is exposed.
    /// The west end of an open row exposes its head.
    pub fn exposed_face(&self, side: Direction) -> Option<u8> {
        let tile = self.furthest_tile(side)?;
        match (self, side) {
            (RenderedBoard::Open { .. }, Direction::West) => Some(tile.domino.head),
            _ => Some(tile.domino.tail),
        }
    }

    /// Translate every tile by `offset`.
    pub fn shift(&self, offset: IVec2) -> RenderedBoard {
        self.map_tiles(|t| BoardDomino {
            bounding_box: t.bounding_box.translate(offset),
            ..*t
        })
    }

    /// Move the board so its midpoint lands on the grid's centre square.
    ///
    /// Both midpoints are floored, so the result stays on whole squares.
    pub fn centered_on(&self, grid: Grid) -> RenderedBoard {
        match self.bounds() {
            Some(bounds) => self.shift(grid.center() - bounds.center()),
            None => self.clone(),
        }
    }
}
