//! Geometry primitives on the render grid: boxes, translation, bending.
//!
//! The grid uses screen orientation: `x` grows east, `y` grows south. All
//! coordinates are whole grid squares.

use glam::{IVec2, ivec2};

use super::defaults::{BEND_PIVOT_INSET, DOUBLE_BEND_PARALLEL, DOUBLE_BEND_PERPENDICULAR};
use crate::types::Arm;

/// Size of the render grid in squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub const fn new(width: i32, height: i32) -> Self {
        Grid { width, height }
    }

    /// Centre square, rounded toward the north-west.
    pub fn center(self) -> IVec2 {
        ivec2(self.width.div_euclid(2), self.height.div_euclid(2))
    }

    /// Whether a `width x height` span fits without moving anything.
    pub fn holds_span(self, span: IVec2) -> bool {
        span.x <= self.width && span.y <= self.height
    }
}

/// Rectangular footprint of one tile, edges in grid squares.
///
/// Invariant: `north <= south` and `west <= east`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub north: i32,
    pub east: i32,
    pub south: i32,
    pub west: i32,
}

impl BoundingBox {
    pub const fn new(north: i32, east: i32, south: i32, west: i32) -> Self {
        BoundingBox {
            north,
            east,
            south,
            west,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.east - self.west
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.south - self.north
    }

    /// `(width, height)` as a vector.
    pub fn span(&self) -> IVec2 {
        ivec2(self.width(), self.height())
    }

    /// Midpoint, floored on each axis.
    pub fn center(&self) -> IVec2 {
        ivec2(
            (self.east + self.west).div_euclid(2),
            (self.north + self.south).div_euclid(2),
        )
    }

    pub fn translate(self, offset: IVec2) -> Self {
        BoundingBox {
            north: self.north + offset.y,
            east: self.east + offset.x,
            south: self.south + offset.y,
            west: self.west + offset.x,
        }
    }

    /// Smallest box containing both.
    pub fn union(self, other: BoundingBox) -> Self {
        BoundingBox {
            north: self.north.min(other.north),
            east: self.east.max(other.east),
            south: self.south.max(other.south),
            west: self.west.min(other.west),
        }
    }

    /// Smallest box containing all of `boxes`, `None` when there are none.
    pub fn enclosing(boxes: impl IntoIterator<Item = BoundingBox>) -> Option<BoundingBox> {
        boxes.into_iter().reduce(BoundingBox::union)
    }

    /// Whether the box lies inside `[0, width] x [0, height]`.
    pub fn fits_in(&self, grid: Grid) -> bool {
        self.north >= 0 && self.west >= 0 && self.east <= grid.width && self.south <= grid.height
    }

    /// Whether `other` sits beside this box, no more than `distance` squares
    /// away from one of its four sides.
    ///
    /// Boxes that overlap on every axis are not close.
    pub fn is_close_to(&self, other: &BoundingBox, distance: i32) -> bool {
        (self.north >= other.south && self.north - distance <= other.south)
            || (self.south <= other.north && self.south + distance >= other.north)
            || (self.west >= other.east && self.west - distance <= other.east)
            || (self.east <= other.west && self.east + distance >= other.west)
    }

    /// Smallest translation that pulls an overflowing box back into `grid`.
    ///
    /// At most one shift per axis is applied, preferring the north and west
    /// edges; a box larger than the grid on some axis stays partly outside.
    pub fn overflow_shift(&self, grid: Grid) -> IVec2 {
        let dy = if self.north < 0 {
            -self.north
        } else if self.south > grid.height {
            grid.height - self.south
        } else {
            0
        };
        let dx = if self.west < 0 {
            -self.west
        } else if self.east > grid.width {
            grid.width - self.east
        } else {
            0
        };
        ivec2(dx, dy)
    }

    /// Point an arm turns around when it bends at this tile.
    pub fn bend_pivot(&self, bend: Arm) -> IVec2 {
        match bend {
            Arm::North => ivec2(self.west, self.north + BEND_PIVOT_INSET),
            Arm::East => ivec2(self.east - BEND_PIVOT_INSET, self.north),
            Arm::South => ivec2(self.east, self.south - BEND_PIVOT_INSET),
            Arm::West => ivec2(self.west + BEND_PIVOT_INSET, self.south),
        }
    }

    /// Reflect the box a quarter turn around `pivot`, turning an arm that
    /// runs off the grid in the `bend` direction.
    ///
    /// When the corner tile is a double the pivot sits on the double's wider
    /// footprint, so the reflected box is shifted back onto the arm's centre
    /// line.
    pub fn bent_around(self, pivot: IVec2, bend: Arm, around_double: bool) -> Self {
        let (along, across) = if around_double {
            (DOUBLE_BEND_PARALLEL, DOUBLE_BEND_PERPENDICULAR)
        } else {
            (0, 0)
        };
        let IVec2 { x, y } = pivot;
        match bend {
            Arm::North => BoundingBox {
                north: y - (self.east - x) - along,
                east: x - (self.north - y) + across,
                south: y - (self.west - x) - along,
                west: x - (self.south - y) + across,
            },
            Arm::South => BoundingBox {
                north: y - (self.east - x) + along,
                east: x - (self.north - y) - across,
                south: y - (self.west - x) + along,
                west: x - (self.south - y) - across,
            },
            Arm::East => BoundingBox {
                north: y + (self.west - x) + across,
                east: x + (self.south - y) + along,
                south: y + (self.east - x) + across,
                west: x + (self.north - y) + along,
            },
            Arm::West => BoundingBox {
                north: y + (self.west - x) - across,
                east: x + (self.south - y) - along,
                south: y + (self.east - x) - across,
                west: x + (self.north - y) - along,
            },
        }
    }
}
