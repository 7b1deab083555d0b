//! Fitting a board into a pixel viewport
//!
//! The solver tries a shrinking sequence of grid-square sizes. For each size
//! it centres the board, keeps the tiles around the spinner on the grid,
//! bends any arm that still runs off an edge, and accepts the first size at
//! which the bent board fits.

use glam::{DVec2, IVec2, dvec2};

use super::context::LayoutSettings;
use super::geometry::{BoundingBox, Grid};
use super::types::{BoardDomino, RenderedBoard};
use super::build_rendered_board;
use crate::errors::LayoutError;
use crate::log::{debug, trace, warn};
use crate::types::{Arm, Board, Viewport};

/// A board placed on a grid that fits the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub grid_width: i32,
    pub grid_height: i32,
    /// Side of one grid square in pixels.
    pub grid_square_px: f64,
    pub board: RenderedBoard,
    /// Zero-based attempt that produced this layout.
    pub attempt: usize,
    /// Whether the slow path (translate and bend) produced this layout.
    pub bent: bool,
}

/// A tile's rectangle in viewport pixels, origin at the top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRect {
    pub origin: DVec2,
    pub size: DVec2,
}

impl Layout {
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &BoardDomino> {
        self.board.tiles()
    }

    /// Pixel size of the whole grid.
    pub fn size_px(&self) -> DVec2 {
        dvec2(self.grid_width as f64, self.grid_height as f64) * self.grid_square_px
    }

    pub fn pixel_rect(&self, tile: &BoardDomino) -> PixelRect {
        let b = &tile.bounding_box;
        PixelRect {
            origin: dvec2(b.west as f64, b.north as f64) * self.grid_square_px,
            size: dvec2(b.width() as f64, b.height() as f64) * self.grid_square_px,
        }
    }
}

/// Lay out `board` in `viewport` with the default settings.
pub fn solve_layout(viewport: Viewport, board: &Board) -> Result<Layout, LayoutError> {
    solve_layout_with(&LayoutSettings::default(), viewport, board)
}

/// Lay out `board` in `viewport`.
///
/// Fails with [`LayoutError::Unresolved`] when no attempt fits; the board is
/// never returned clipped or overlapping.
pub fn solve_layout_with(
    settings: &LayoutSettings,
    viewport: Viewport,
    board: &Board,
) -> Result<Layout, LayoutError> {
    let unresolved = |attempts| LayoutError::Unresolved {
        attempts,
        viewport,
        tiles: board.tile_count(),
    };
    if viewport.is_degenerate() {
        warn!(%viewport, "viewport has no area");
        return Err(unresolved(0));
    }

    let uncentered = build_rendered_board(board);
    let natural_span = uncentered.span();

    for attempt in 0..settings.max_attempts {
        let (grid_square_px, grid) = settings.grid_for(viewport, attempt);
        debug!(
            attempt,
            grid_square_px,
            grid_width = grid.width,
            grid_height = grid.height,
            span_x = natural_span.x,
            span_y = natural_span.y,
            "trying grid"
        );

        let centered = uncentered.centered_on(grid);
        let layout = |board, bent| Layout {
            grid_width: grid.width,
            grid_height: grid.height,
            grid_square_px,
            board,
            attempt,
            bent,
        };

        if attempt == 0 && grid.holds_span(natural_span) {
            return Ok(layout(centered, false));
        }

        let translated =
            keep_spinner_neighbourhood_in_grid(&centered, grid, settings.closeness_distance);
        let bent = bend_tiles_outside_grid(&translated, grid);

        if let Some(bounds) = bent.bounds() {
            if grid.holds_span(bounds.span()) {
                // A bent double can still poke one square past an edge.
                let nudge = bounds.overflow_shift(grid);
                trace!(dx = nudge.x, dy = nudge.y, "final clamp");
                return Ok(layout(bent.shift(nudge), true));
            }
        }
    }

    warn!(%viewport, tiles = board.tile_count(), "no grid size fits the board");
    Err(unresolved(settings.max_attempts))
}

/// Translate the board so every tile near the spinner lies on the grid.
///
/// Those tiles are never bent, which keeps the cross around the spinner
/// intact. An open row is returned unchanged.
fn keep_spinner_neighbourhood_in_grid(
    board: &RenderedBoard,
    grid: Grid,
    distance: i32,
) -> RenderedBoard {
    let Some(spinner) = board.spinner() else {
        return board.clone();
    };
    let close: Vec<BoundingBox> = board
        .tiles()
        .map(|t| t.bounding_box)
        .filter(|b| spinner.bounding_box.is_close_to(b, distance))
        .collect();
    if close.iter().all(|b| b.fits_in(grid)) {
        return board.clone();
    }
    let shift = BoundingBox::enclosing(close)
        .map(|b| b.overflow_shift(grid))
        .unwrap_or(IVec2::ZERO);
    trace!(dx = shift.x, dy = shift.y, "keeping spinner neighbourhood in grid");
    board.shift(shift)
}

/// Turn `tile` a quarter around the pivot of `corner`, the last tile that fits.
///
/// Arm doubles are drawn across the arm: a double corner is wider and shorter
/// than an ordinary one, so the whole bent run is shifted to stay centred on
/// it, and a bent double stays across the new run. Row tiles all share one
/// footprint, so `in_arm` is false there.
fn bend_tile(tile: &BoardDomino, corner: &BoardDomino, bend: Arm, in_arm: bool) -> BoardDomino {
    let pivot = corner.bounding_box.bend_pivot(bend);
    let around_double = in_arm && corner.domino.is_double();
    let direction = bend.direction().rotate_counter_clockwise();
    BoardDomino {
        domino: tile.domino,
        bounding_box: tile.bounding_box.bent_around(pivot, bend, around_double),
        direction: if in_arm && tile.domino.is_double() {
            direction.rotate_clockwise()
        } else {
            direction
        },
    }
}

/// Bend every tile from the first one that leaves the grid onward.
///
/// Nothing is bent when the whole arm fits, or when even its first tile is
/// off the grid (there is no tile to turn around).
fn bend_arm(tiles: &[BoardDomino], grid: Grid, bend: Arm) -> Vec<BoardDomino> {
    let first_outside = tiles.iter().position(|t| !t.bounding_box.fits_in(grid));
    match first_outside {
        Some(index) if index > 0 => {
            let corner = &tiles[index - 1];
            trace!(?bend, index, "bending arm");
            tiles[..index]
                .iter()
                .copied()
                .chain(tiles[index..].iter().map(|t| bend_tile(t, corner, bend, true)))
                .collect()
        }
        _ => tiles.to_vec(),
    }
}

/// Bend both ends of an open row around the outermost tiles still on the grid.
fn bend_row(row: &[BoardDomino], grid: Grid) -> Vec<BoardDomino> {
    let west_corner = row.iter().find(|t| t.bounding_box.fits_in(grid));
    let east_corner = row.iter().rev().find(|t| t.bounding_box.fits_in(grid));
    row.iter()
        .map(|tile| {
            let b = &tile.bounding_box;
            match (west_corner, east_corner) {
                (Some(corner), _) if b.west < 0 => bend_tile(tile, corner, Arm::West, false),
                (_, Some(corner)) if b.east > grid.width => {
                    bend_tile(tile, corner, Arm::East, false)
                }
                _ => *tile,
            }
        })
        .collect()
}

fn bend_tiles_outside_grid(board: &RenderedBoard, grid: Grid) -> RenderedBoard {
    match board {
        RenderedBoard::Open { row } => RenderedBoard::Open {
            row: bend_row(row, grid),
        },
        RenderedBoard::Spun { spinner, arms } => RenderedBoard::Spun {
            spinner: *spinner,
            arms: arms.map(|arm, tiles| bend_arm(tiles, grid, arm)),
        },
    }
}
