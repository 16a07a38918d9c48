use super::grid::Grid;
use rand::Rng;
use ratatui::layout::Position;
use std::collections::HashSet;

/// Choose a cell of `grid` uniformly at random from those not in `occupied`
/// by drawing random cells until a free one comes up.
///
/// `occupied` must leave at least one cell of `grid` free, or else this never
/// returns.
pub(crate) fn place_food<R: Rng + ?Sized>(
    occupied: &HashSet<Position>,
    grid: Grid,
    rng: &mut R,
) -> Position {
    loop {
        let pos = Position::new(
            rng.random_range(0..grid.side()),
            rng.random_range(0..grid.side()),
        );
        if !occupied.contains(&pos) {
            return pos;
        }
    }
}
