//! Board layout engine for dominoes.
//!
//! A game of dominoes grows an unbounded chain of tiles: first a single row,
//! then, once a double is played, a spinner with up to four arms. This crate
//! turns that abstract chain into a concrete picture that fits a pixel
//! viewport:
//!
//! - [`render::build_rendered_board`] places every tile on an integer grid
//!   around the origin.
//! - [`solve_layout`] picks a grid-square size and centres, translates and
//!   bends the board until it fits, or fails with [`LayoutError`].
//! - [`mod@drop`] answers drag-and-drop questions against the laid-out board.
//!
//! ```
//! use domino_layout::{Arm, Board, Domino, Viewport, solve_layout};
//!
//! let board = Board::spun(Domino::new(6, 6))
//!     .with_arm(Arm::East, [Domino::new(6, 3), Domino::new(3, 1)]);
//! let layout = solve_layout(Viewport::new(800, 600), &board)?;
//! assert_eq!(layout.tiles().count(), 3);
//! # Ok::<(), domino_layout::LayoutError>(())
//! ```
//!
//! Everything is a pure function of its inputs; calling it again with the
//! same board and viewport gives the same layout.

pub mod drop;
pub mod errors;
pub mod log;
pub mod render;
pub mod types;

pub use drop::{drop_direction_for, drop_target, is_droppable};
pub use errors::LayoutError;
pub use render::{
    BoardDomino, BoundingBox, Grid, Layout, LayoutSettings, RenderedBoard, build_rendered_board,
    solve_layout, solve_layout_with,
};
pub use types::{Arm, Arms, Board, Direction, Domino, Viewport};
