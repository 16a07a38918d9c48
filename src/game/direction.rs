use super::grid::Grid;
use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the cell one step from `pos` in this direction, or `None` if
    /// that cell lies outside of `grid`.
    pub(crate) fn advance(self, pos: Position, grid: Grid) -> Option<Position> {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::Up => y = y.checked_sub(1)?,
            Direction::Down => y = y.checked_add(1)?,
            Direction::Left => x = x.checked_sub(1)?,
            Direction::Right => x = x.checked_add(1)?,
        }
        let pos = Position { x, y };
        grid.contains(pos).then_some(pos)
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// If `to` is orthogonally adjacent to `from`, return the direction in
    /// which one must step from `from` to reach it.
    pub(crate) fn between(from: Position, to: Position) -> Option<Direction> {
        if from.x == to.x {
            if from.y.checked_sub(1) == Some(to.y) {
                Some(Direction::Up)
            } else if from.y.checked_add(1) == Some(to.y) {
                Some(Direction::Down)
            } else {
                None
            }
        } else if from.y == to.y {
            if from.x.checked_sub(1) == Some(to.x) {
                Some(Direction::Left)
            } else if from.x.checked_add(1) == Some(to.x) {
                Some(Direction::Right)
            } else {
                None
            }
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[rstest]
    #[case(Direction::Up, Position::new(2, 7), Some(Position::new(2, 6)))]
    #[case(Direction::Down, Position::new(2, 7), Some(Position::new(2, 8)))]
    #[case(Direction::Right, Position::new(2, 7), Some(Position::new(3, 7)))]
    #[case(Direction::Left, Position::new(2, 7), Some(Position::new(1, 7)))]
    #[case(Direction::Up, Position::new(2, 0), None)]
    #[case(Direction::Down, Position::new(2, 9), None)]
    #[case(Direction::Right, Position::new(9, 7), None)]
    #[case(Direction::Left, Position::new(0, 7), None)]
    fn test_direction_advance(
        #[case] d: Direction,
        #[case] pos: Position,
        #[case] r: Option<Position>,
    ) {
        assert_eq!(d.advance(pos, Grid::new(10)), r);
    }

    #[test]
    fn reverse_is_involution() {
        for d in ALL {
            assert_ne!(d.reverse(), d);
            assert_eq!(d.reverse().reverse(), d);
        }
    }

    #[test]
    fn between_inverts_advance() {
        let grid = Grid::new(10);
        let pos = Position::new(4, 4);
        for d in ALL {
            let next = d.advance(pos, grid).unwrap();
            assert_eq!(Direction::between(pos, next), Some(d));
            assert_eq!(Direction::between(next, pos), Some(d.reverse()));
        }
        assert_eq!(Direction::between(pos, pos), None);
        assert_eq!(Direction::between(pos, Position::new(5, 5)), None);
        assert_eq!(Direction::between(pos, Position::new(4, 6)), None);
    }
}
