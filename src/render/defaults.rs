//! Layout constants (all in grid squares unless noted)
//!
//! These were tuned by eye against real boards. `CLOSENESS_DISTANCE` in
//! particular is tied to `SHRINK_BASE`: tiles within 6 squares of the spinner
//! span at most 22 squares, which is less than the smallest grid the solver
//! ever builds (24 squares), so one shift per axis always brings them inside.

use super::geometry::BoundingBox;

/// Along-arm length of an ordinary tile.
pub const TILE_LENGTH: i32 = 4;
/// Along-arm length of a double (drawn across the arm).
pub const DOUBLE_LENGTH: i32 = 2;
/// Distance from an arm's centre line to the side of an ordinary tile.
pub const TILE_HALF_WIDTH: i32 = 1;
/// Distance from an arm's centre line to the side of a double.
pub const DOUBLE_HALF_WIDTH: i32 = 2;

/// The spinner sits across the horizontal arms, centred on the origin.
pub const SPINNER_BOX: BoundingBox = BoundingBox::new(-2, 1, 2, -1);

/// Tiles this close to the spinner are kept inside the grid and never bent.
pub const CLOSENESS_DISTANCE: i32 = 6;

/// Number of grid sizes tried before giving up.
pub const MAX_ATTEMPTS: usize = 10;
/// Attempt `i` uses squares of `min(width, height) / (SHRINK_BASE + SHRINK_STEP * i)` px.
pub const SHRINK_BASE: u32 = 24;
pub const SHRINK_STEP: u32 = 6;

/// How far the bend pivot sits inside the last tile that still fits.
pub const BEND_PIVOT_INSET: i32 = 2;
/// Extra shift along the arm when the tile being bent is a double.
pub const DOUBLE_BEND_PARALLEL: i32 = -1;
/// Extra shift across the arm when the tile being bent is a double.
pub const DOUBLE_BEND_PERPENDICULAR: i32 = 2;
