//! Error types with diagnostics using miette

use miette::Diagnostic;
use thiserror::Error;

use crate::types::Viewport;

/// Errors that occur while fitting a board into a viewport
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Every candidate grid size was tried and none could hold the board.
    ///
    /// The layout is never degraded to a clipped or overlapping picture; the
    /// caller gets this error instead.
    #[error("could not resolve a grid layout for {tiles} tiles in {viewport} after {attempts} attempts")]
    #[diagnostic(
        code(domino_layout::layout::unresolved),
        help("the board is too long for the shrink sequence; enlarge the viewport or raise max_attempts")
    )]
    Unresolved {
        attempts: usize,
        viewport: Viewport,
        tiles: usize,
    },
}
