//! Plain-text picture of a rendered board
//!
//! One character per grid square:
//! - `.` empty square
//! - `#` the spinner
//! - `^ > v <` an ordinary tile, pointing along its draw direction
//! - `=` / `|` a double drawn east-west / north-south
//! - `+` two tiles claiming the same square
//!
//! Squares outside the grid are dropped, so overflow shows up as missing
//! tiles rather than a wider picture.

use super::geometry::Grid;
use super::types::{BoardDomino, RenderedBoard};
use crate::types::Direction;

const EMPTY: char = '.';
const OVERLAP: char = '+';

fn glyph(tile: &BoardDomino, is_spinner: bool) -> char {
    if is_spinner {
        return '#';
    }
    if tile.domino.is_double() {
        return if tile.direction.is_vertical() { '|' } else { '=' };
    }
    match tile.direction {
        Direction::North => '^',
        Direction::East => '>',
        Direction::South => 'v',
        Direction::West => '<',
        Direction::None => 'o',
    }
}

/// Draw `board` on a `grid`, one line per row of squares.
pub fn render_text(board: &RenderedBoard, grid: Grid) -> String {
    let width = grid.width.max(0) as usize;
    let height = grid.height.max(0) as usize;
    let mut cells = vec![vec![EMPTY; width]; height];

    let spinner = board.spinner();
    for tile in board.tiles() {
        let is_spinner = spinner.is_some_and(|s| std::ptr::eq(s, tile));
        let c = glyph(tile, is_spinner);
        let b = &tile.bounding_box;
        for y in b.north.max(0)..b.south.min(grid.height) {
            for x in b.west.max(0)..b.east.min(grid.width) {
                let cell = &mut cells[y as usize][x as usize];
                *cell = if *cell == EMPTY { c } else { OVERLAP };
            }
        }
    }

    let mut out = String::with_capacity((width + 1) * height);
    for row in cells {
        out.extend(row);
        out.push('\n');
    }
    out
}
