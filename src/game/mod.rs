mod direction;
mod food;
mod grid;
mod scheduler;
mod snake;
mod speed;
mod view;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::Grid;
pub(crate) use self::speed::SpeedRamp;
pub(crate) use self::view::GameView;
use self::food::place_food;
use self::scheduler::Scheduler;
use self::snake::Snake;
use self::speed::Speed;
use crate::config::GameConfig;
use crate::consts;
use crate::highscore::HighScoreStore;
use rand::Rng;
use ratatui::layout::Position;
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// A game session and everything needed to run it: the snake, the food, the
/// score, the tick timer, and the store holding the high score.
///
/// All state is mutated only by the methods below, either in response to the
/// player's commands or when the tick timer fires.
#[derive(Debug)]
pub(crate) struct Game<S, R = rand::rngs::ThreadRng> {
    rng: R,
    store: S,
    grid: Grid,
    snake: Snake,
    direction: Direction,
    food: Position,
    status: Status,
    score: u32,
    high_score: u32,
    speed: Speed,
    scheduler: Scheduler,
}

impl<S: HighScoreStore, R: Rng> Game<S, R> {
    /// Create a new game in the `Idle` state, reading the high score from
    /// `store`.  If the high score cannot be read, it starts out at zero.
    pub(crate) fn new(config: GameConfig, store: S, mut rng: R) -> Game<S, R> {
        let high_score = match store.load() {
            Ok(score) => score,
            Err(e) => {
                tracing::warn!(error = ?e, "Could not load high score; starting from zero");
                0
            }
        };
        let grid = config.grid;
        let snake = initial_snake(grid);
        let food = place_food(&occupied(&snake), grid, &mut rng);
        Game {
            rng,
            store,
            grid,
            snake,
            direction: Direction::Right,
            food,
            status: Status::Idle,
            score: 0,
            high_score,
            speed: Speed::new(config.speed),
            scheduler: Scheduler::new(),
        }
    }

    /// Begin a new session: reset the snake, food, score, and speed, and start
    /// the tick timer.  This works from any state.
    pub(crate) fn start(&mut self, now: Instant) {
        self.snake = initial_snake(self.grid);
        self.direction = Direction::Right;
        self.food = place_food(&occupied(&self.snake), self.grid, &mut self.rng);
        self.score = 0;
        self.speed.reset();
        self.status = Status::Running;
        self.scheduler.start(now, self.speed.interval());
        tracing::info!(grid_size = self.grid.side(), "Game started");
    }

    /// Same as [`Game::start()`]
    pub(crate) fn restart(&mut self, now: Instant) {
        self.start(now);
    }

    /// Pause a running game or resume a paused one.  Does nothing in any
    /// other state.
    pub(crate) fn toggle_pause(&mut self, now: Instant) {
        match self.status {
            Status::Running => {
                self.status = Status::Paused;
                self.scheduler.stop();
                tracing::debug!(score = self.score, "Game paused");
            }
            Status::Paused => {
                self.status = Status::Running;
                self.scheduler.start(now, self.speed.interval());
                tracing::debug!(score = self.score, "Game resumed");
            }
            Status::Idle | Status::GameOver => (),
        }
    }

    /// Change the direction the snake will move in on the next tick.
    ///
    /// The change is ignored if the game is not running or if `direction` is
    /// the reverse of either the current direction or the direction the snake
    /// moved in on its last step.  Returns whether the change was accepted.
    pub(crate) fn turn(&mut self, direction: Direction) -> bool {
        if self.status != Status::Running
            || direction == self.direction.reverse()
            || self.snake.heading() == Some(direction.reverse())
        {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Cancel the tick timer without otherwise touching the game
    pub(crate) fn stop(&mut self) {
        self.scheduler.stop();
    }

    /// How long until the next tick is due, or `None` if no tick is pending
    pub(crate) fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.scheduler.time_until(now)
    }

    /// If the tick timer has expired by `now`, run a tick and then either
    /// re-arm the timer with the current interval (if the game is still
    /// running) or leave it stopped.  Returns whether a tick was run.
    pub(crate) fn on_timer(&mut self, now: Instant) -> bool {
        if !self.scheduler.is_due(now) {
            return false;
        }
        self.tick();
        if self.status == Status::Running {
            self.scheduler.start(now, self.speed.interval());
        } else {
            self.scheduler.stop();
        }
        true
    }

    /// Move the snake one cell and deal with the consequences
    fn tick(&mut self) {
        if self.status != Status::Running {
            return;
        }
        let adv = self.snake.advance(self.direction, self.food, self.grid);
        if adv.collided {
            self.game_over();
            return;
        }
        self.snake = adv.snake;
        if adv.ate_food {
            self.eat();
        }
    }

    fn eat(&mut self) {
        self.score += 1;
        if self.score > self.high_score {
            self.high_score = self.score;
            if let Err(e) = self.store.save(self.high_score) {
                tracing::warn!(error = ?e, "Could not save high score");
            }
        }
        self.speed.speed_up();
        tracing::debug!(
            score = self.score,
            interval = ?self.speed.interval(),
            "Snake ate food"
        );
        if self.snake.len() >= self.grid.area() {
            tracing::info!("Snake fills the board");
            self.game_over();
        } else {
            self.food = place_food(&occupied(&self.snake), self.grid, &mut self.rng);
        }
    }

    fn game_over(&mut self) {
        self.status = Status::GameOver;
        self.scheduler.stop();
        tracing::info!(
            score = self.score,
            high_score = self.high_score,
            "Game over"
        );
    }
}

impl<S, R> Game<S, R> {
    pub(crate) fn grid(&self) -> Grid {
        self.grid
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn status(&self) -> Status {
        self.status
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Classify a cell of the board for display
    pub(crate) fn cell_kind(&self, pos: Position) -> CellKind {
        if pos == self.snake.head() {
            CellKind::Head
        } else if self.snake.contains(pos) {
            CellKind::Snake
        } else if pos == self.food {
            CellKind::Food
        } else {
            CellKind::Empty
        }
    }
}

/// The snake at the start of a session: `INITIAL_SNAKE_LENGTH` cells facing
/// right, with the head two fifths of the way across the grid and halfway
/// down.  On a 20×20 grid, this is `[(8, 10), (7, 10), (6, 10)]`.
fn initial_snake(grid: Grid) -> Snake {
    let side = grid.side();
    let x = u16::try_from(u32::from(side) * 2 / 5).unwrap_or(0);
    let head = Position::new(x, side / 2);
    Snake::horizontal(head, consts::INITIAL_SNAKE_LENGTH, grid)
}

fn occupied(snake: &Snake) -> HashSet<Position> {
    snake.body().iter().copied().collect()
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Status {
    /// No session has been started yet
    Idle,
    Running,
    Paused,
    /// The snake crashed (or filled the board); waiting for a restart
    GameOver,
}

/// What occupies a given cell of the board
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CellKind {
    Empty,
    Head,
    Snake,
    Food,
}
