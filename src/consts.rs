//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};
use std::time::Duration;

/// Default side length of the square playing grid
pub(crate) const GRID_SIZE: u16 = 20;

/// Smallest grid side length accepted from the configuration file
pub(crate) const MIN_GRID_SIZE: u16 = 4;

/// Largest grid side length accepted from the configuration file
pub(crate) const MAX_GRID_SIZE: u16 = 200;

/// Time between movements of the snake at the start of a game
pub(crate) const INITIAL_TICK_PERIOD: Duration = Duration::from_millis(200);

/// Amount by which the tick period shrinks each time food is eaten
pub(crate) const TICK_PERIOD_STEP: Duration = Duration::from_millis(5);

/// The tick period never drops below this
pub(crate) const MIN_TICK_PERIOD: Duration = Duration::from_millis(50);

/// Length of the snake at the start of a game.  Its head is placed two fifths
/// of the way across the grid and halfway down, and it faces right.
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the snake's head when it's collided with a wall or itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
