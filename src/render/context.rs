//! Layout settings - the tunable knobs of the solver

use super::defaults;
use super::geometry::Grid;
use crate::types::Viewport;

/// Parameters of the fit/shrink/bend search.
///
/// `Default` gives the tuned values from [`defaults`]. The closeness
/// distance and shrink base go together: tiles close to the spinner must
/// always fit in the smallest grid, see the note on [`defaults`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutSettings {
    /// Tiles this close to the spinner are kept inside the grid.
    pub closeness_distance: i32,
    /// Number of grid sizes tried before giving up.
    pub max_attempts: usize,
    pub shrink_base: u32,
    pub shrink_step: u32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        LayoutSettings {
            closeness_distance: defaults::CLOSENESS_DISTANCE,
            max_attempts: defaults::MAX_ATTEMPTS,
            shrink_base: defaults::SHRINK_BASE,
            shrink_step: defaults::SHRINK_STEP,
        }
    }
}

impl LayoutSettings {
    /// Fraction of the viewport's smaller side used as one grid square on
    /// attempt `attempt`: `1 / (shrink_step * attempt + shrink_base)`.
    pub fn shrink_factor(&self, attempt: usize) -> f64 {
        1.0 / (self.shrink_step as f64 * attempt as f64 + self.shrink_base as f64)
    }

    /// Grid square size in pixels and the grid it gives on attempt `attempt`.
    ///
    /// Each axis is floored on its own, so the grid need not be square.
    pub fn grid_for(&self, viewport: Viewport, attempt: usize) -> (f64, Grid) {
        let square_px = self.shrink_factor(attempt) * viewport.min_dimension() as f64;
        let width = (viewport.width as f64 / square_px).floor() as i32;
        let height = (viewport.height as f64 / square_px).floor() as i32;
        (square_px, Grid::new(width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrink_factor_decreases() {
        let settings = LayoutSettings::default();
        assert_eq!(settings.shrink_factor(0), 1.0 / 24.0);
        assert_eq!(settings.shrink_factor(9), 1.0 / 78.0);
        for attempt in 1..settings.max_attempts {
            assert!(settings.shrink_factor(attempt) < settings.shrink_factor(attempt - 1));
        }
    }

    #[test]
    fn grid_axes_are_floored_independently() {
        let settings = LayoutSettings::default();
        let (square_px, grid) = settings.grid_for(Viewport::new(800, 600), 0);
        assert_eq!(square_px, 25.0);
        assert_eq!(grid, Grid::new(32, 24));

        let (square_px, grid) = settings.grid_for(Viewport::new(480, 240), 1);
        assert_eq!(square_px, 8.0);
        assert_eq!(grid, Grid::new(60, 30));
    }
}
