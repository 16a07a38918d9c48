use super::direction::Direction;
use super::grid::Grid;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// Snake state.
///
/// The body is ordered head first, tail last.  It is never empty and never
/// contains the same cell twice.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Create a snake from its cells, head first.  Returns `None` if `cells`
    /// is empty.
    #[cfg(test)]
    pub(crate) fn new<I: IntoIterator<Item = Position>>(cells: I) -> Option<Snake> {
        let body = cells.into_iter().collect::<VecDeque<_>>();
        (!body.is_empty()).then_some(Snake { body })
    }

    /// Lay out a new snake of (at most) `len` cells in `grid` with its head
    /// at `head` and its body trailing off to the left of it
    pub(crate) fn horizontal(head: Position, len: usize, grid: Grid) -> Snake {
        let body = std::iter::successors(Some(head), |&p| Direction::Left.advance(p, grid))
            .take(len.max(1))
            .collect();
        Snake { body }
    }

    pub(crate) fn head(&self) -> Position {
        // The body is never empty.
        self.body[0]
    }

    /// Return the cells of the snake, head first
    pub(crate) fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len()
    }

    pub(crate) fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Return the direction in which the head moved on the snake's most recent
    /// step, or `None` if the snake is only a head
    pub(crate) fn heading(&self) -> Option<Direction> {
        Direction::between(*self.body.get(1)?, self.head())
    }

    /// Compute the result of moving the snake one cell in `direction` within
    /// `grid`, with food lying at `food`.
    ///
    /// The move is a collision if the new head would leave the grid or land on
    /// any current cell of the snake (including the tail, which has not moved
    /// out of the way yet); in that case the returned snake is unchanged.
    /// Otherwise the new head is prepended, and the tail is dropped unless the
    /// head landed on the food.
    pub(crate) fn advance(&self, direction: Direction, food: Position, grid: Grid) -> Advance {
        let Some(head) = direction
            .advance(self.head(), grid)
            .filter(|&p| !self.contains(p))
        else {
            return Advance {
                snake: self.clone(),
                ate_food: false,
                collided: true,
            };
        };
        let mut body = self.body.clone();
        body.push_front(head);
        let ate_food = head == food;
        if !ate_food {
            let _ = body.pop_back();
        }
        Advance {
            snake: Snake { body },
            ate_food,
            collided: false,
        }
    }
}

/// The outcome of [`Snake::advance()`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Advance {
    pub(crate) snake: Snake,
    pub(crate) ate_food: bool,
    pub(crate) collided: bool,
}
