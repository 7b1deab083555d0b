//! Drop-target queries for the drag-and-drop layer.
//!
//! Given a laid-out board, these answer "may the dragged tile be dropped on
//! this board tile, and which side of the board would it be played on".
//! Tiles are identified with [`Domino::same_tile`]; a double-six set never
//! holds two copies of a tile.

use crate::render::{BoardDomino, RenderedBoard};
use crate::types::{Arm, Direction, Domino};

/// Arms the spinner can still take a tile on, in order of preference.
fn open_spinner_arms(board: &RenderedBoard) -> impl Iterator<Item = Arm> + '_ {
    let vertical = board.can_play_vertically();
    [Arm::East, Arm::West, Arm::North, Arm::South]
        .into_iter()
        .filter(move |&arm| !arm.is_vertical() || vertical)
        .filter(move |&arm| board.arm(arm).is_empty())
}

fn is_spinner(board: &RenderedBoard, tile: &BoardDomino) -> bool {
    board.spinner().is_some_and(|s| s.domino.same_tile(tile.domino))
}

/// Arms whose outermost tile is `tile` and that may currently be extended.
fn extendable_arms<'a>(
    board: &'a RenderedBoard,
    tile: &'a BoardDomino,
) -> impl Iterator<Item = Arm> + 'a {
    let vertical = board.can_play_vertically();
    Arm::ALL
        .into_iter()
        .filter(move |&arm| !arm.is_vertical() || vertical)
        .filter(move |&arm| board.is_furthest_tile(tile, arm.direction()))
}

/// Row ends `tile` sits at, east first.
fn row_ends<'a>(
    board: &'a RenderedBoard,
    tile: &'a BoardDomino,
) -> impl Iterator<Item = Direction> + 'a {
    [Direction::East, Direction::West]
        .into_iter()
        .filter(move |&side| board.is_furthest_tile(tile, side))
}

/// Side of the board a tile dropped on `tile` would be played on, ignoring
/// what is being dragged.
///
/// Arm tiles extend their own arm, the spinner takes the first open arm
/// (east, west, then north and south once vertical play is unlocked), and
/// row ends extend their own end. Tiles in the middle of an arm or row are
/// not targets.
pub fn drop_direction_for(board: &RenderedBoard, tile: &BoardDomino) -> Option<Direction> {
    match board {
        RenderedBoard::Open { .. } => row_ends(board, tile).next(),
        RenderedBoard::Spun { .. } if is_spinner(board, tile) => {
            open_spinner_arms(board).next().map(Arm::direction)
        }
        RenderedBoard::Spun { .. } => extendable_arms(board, tile).next().map(Arm::direction),
    }
}

/// Side a drop of `dragged` onto `tile` would be played on, or `None` if
/// `dragged` cannot go there.
///
/// The dragged tile must carry the exposed face it is played against: the
/// spinner's pips, the tail of an arm's outermost tile, or the outer face of
/// a row end.
pub fn drop_target(
    board: &RenderedBoard,
    tile: &BoardDomino,
    dragged: Domino,
) -> Option<Direction> {
    match board {
        RenderedBoard::Open { .. } => row_ends(board, tile)
            .find(|&side| board.exposed_face(side).is_some_and(|face| dragged.has_face(face))),
        RenderedBoard::Spun { spinner, .. } if is_spinner(board, tile) => {
            if !dragged.has_face(spinner.domino.head) {
                return None;
            }
            open_spinner_arms(board).next().map(Arm::direction)
        }
        RenderedBoard::Spun { .. } => extendable_arms(board, tile)
            .map(Arm::direction)
            .find(|&side| board.exposed_face(side).is_some_and(|face| dragged.has_face(face))),
    }
}

/// Whether `dragged` may be dropped on `tile`.
pub fn is_droppable(board: &RenderedBoard, tile: &BoardDomino, dragged: Domino) -> bool {
    drop_target(board, tile, dragged).is_some()
}

/// An empty board accepts any first tile, played with no direction.
pub fn initial_drop_direction(board: &RenderedBoard) -> Option<Direction> {
    board.is_empty().then_some(Direction::None)
}

pub fn accepts_first_tile(board: &RenderedBoard) -> bool {
    initial_drop_direction(board).is_some()
}
