use ratatui::layout::{Position, Positions, Rect, Size};

/// The square playing field.  Cells are addressed by `Position`s relative to
/// the top-left corner, with `x` and `y` both in `0..size`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    size: u16,
}

impl Grid {
    pub(crate) fn new(size: u16) -> Grid {
        Grid { size }
    }

    /// Side length of the grid
    pub(crate) fn side(self) -> u16 {
        self.size
    }

    pub(crate) fn size(self) -> Size {
        Size {
            width: self.size,
            height: self.size,
        }
    }

    /// Total number of cells in the grid
    pub(crate) fn area(self) -> usize {
        usize::from(self.size) * usize::from(self.size)
    }

    pub(crate) fn contains(self, pos: Position) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    /// Iterate over every cell of the grid, row by row
    pub(crate) fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new(crate::consts::GRID_SIZE)
    }
}
