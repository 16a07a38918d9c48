use crate::command::Command;
use crate::config::Styles;
use crate::game::{Direction, Game, GameView, Status};
use crate::highscore::HighScoreStore;
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Instant;

#[derive(Debug)]
pub(crate) struct App<S, R> {
    game: Game<S, R>,
    styles: Styles,
    quitting: bool,
}

impl<S: HighScoreStore, R: Rng> App<S, R> {
    pub(crate) fn new(game: Game<S, R>, styles: Styles) -> App<S, R> {
        App {
            game,
            styles,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        self.game.stop();
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| {
            frame.render_widget(GameView::new(&self.game, self.styles), frame.area());
        })?;
        Ok(())
    }

    /// Wait for either the next input event or the next tick, whichever comes
    /// first, and handle it
    fn process_input(&mut self) -> io::Result<()> {
        if let Some(wait) = self.game.time_until_tick(Instant::now()) {
            if wait.is_zero() || !poll(wait)? {
                self.game.on_timer(Instant::now());
                return Ok(());
            }
        }
        self.handle_event(read()?, Instant::now());
        Ok(())
    }

    fn handle_event(&mut self, event: Event, now: Instant) {
        if event == Event::FocusLost {
            if self.game.status() == Status::Running {
                self.game.toggle_pause(now);
            }
            return;
        }
        let Some(cmd) = event
            .as_key_press_event()
            .and_then(Command::from_key_event)
        else {
            return;
        };
        match cmd {
            Command::Quit | Command::Q => self.quitting = true,
            Command::Up => {
                self.game.turn(Direction::Up);
            }
            Command::Down => {
                self.game.turn(Direction::Down);
            }
            Command::Left => {
                self.game.turn(Direction::Left);
            }
            Command::Right => {
                self.game.turn(Direction::Right);
            }
            Command::Space | Command::Enter => match self.game.status() {
                Status::Idle | Status::GameOver => self.game.start(now),
                Status::Running | Status::Paused => self.game.toggle_pause(now),
            },
            Command::P | Command::Esc => self.game.toggle_pause(now),
            Command::R => self.game.restart(now),
        }
    }
}
