use super::{CellKind, Direction, Game, Status};
use crate::config::Styles;
use crate::consts;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};

/// Widget for drawing a [`Game`]: a score bar, the board, and a line
/// describing what the player can do next
#[derive(Debug)]
pub(crate) struct GameView<'a, S, R> {
    game: &'a Game<S, R>,
    styles: Styles,
}

impl<'a, S, R> GameView<'a, S, R> {
    pub(crate) fn new(game: &'a Game<S, R>, styles: Styles) -> Self {
        GameView { game, styles }
    }

    fn head_symbol(&self) -> char {
        if self.game.status() == Status::GameOver {
            return consts::COLLISION_SYMBOL;
        }
        match self.game.direction() {
            Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
            Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
            Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
            Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
        }
    }

    fn head_style(&self) -> Style {
        if self.game.status() == Status::GameOver {
            consts::COLLISION_STYLE
        } else {
            self.styles.snake
        }
    }

    fn message(&self) -> Line<'static> {
        match self.game.status() {
            Status::Idle => Line::from_iter([
                Span::raw(" Start ("),
                Span::styled("space", consts::KEY_STYLE),
                Span::raw(") — Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ]),
            Status::Running => Line::default(),
            Status::Paused => Line::from_iter([
                Span::raw(" — PAUSED — Resume ("),
                Span::styled("p", consts::KEY_STYLE),
                Span::raw(") — Restart ("),
                Span::styled("r", consts::KEY_STYLE),
                Span::raw(")"),
            ]),
            Status::GameOver => Line::from_iter([
                Span::raw(" — GAME OVER — Restart ("),
                Span::styled("r", consts::KEY_STYLE),
                Span::raw(") — Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ]),
        }
    }
}

impl<S, R> Widget for GameView<'_, S, R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [score_area, board_area, msg_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);
        Line::styled(
            format!(
                " Score: {}    High Score: {}",
                self.game.score(),
                self.game.high_score()
            ),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let mut block_size = self.game.grid().size();
        block_size.width = block_size.width.saturating_add(2);
        block_size.height = block_size.height.saturating_add(2);
        let block_area = center_rect(board_area, block_size);
        Block::bordered().render(block_area, buf);

        let mut board = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        for pos in self.game.grid().positions() {
            match self.game.cell_kind(pos) {
                CellKind::Empty => (),
                CellKind::Head => board.draw_cell(pos, self.head_symbol(), self.head_style()),
                CellKind::Snake => {
                    board.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, self.styles.snake);
                }
                CellKind::Food => board.draw_cell(pos, consts::FOOD_SYMBOL, self.styles.food),
            }
        }

        self.message().render(msg_area, buf);
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if !self.area.contains(Position { x, y }) {
            return;
        }
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}
