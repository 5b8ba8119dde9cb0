use std::thread::sleep;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use crossterm::terminal;
use log::info;

use crate::config::GameConfig;
use crate::game::{Game, Status};
use crate::input::{self, Command};
use crate::term::Screen;

/// How often the input queue is drained between ticks.
const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Owns the fixed-rate clock and wires the input source, state machine and
/// screen together. Everything the core treats as external lives here.
pub struct App {
    game: Game,
    screen: Screen,
    tick_interval: Duration,
}

impl App {
    pub fn new(config: &GameConfig, seed: Option<u64>) -> Result<Self> {
        config.validate().map_err(anyhow::Error::msg)?;

        let screen = Screen::new(config);
        let (need_width, need_height) = screen.required_size();
        let (term_width, term_height) =
            terminal::size().context("could not read the terminal size")?;
        if term_width < need_width || term_height < need_height {
            bail!(
                "terminal is {}x{}, but this configuration needs {}x{}",
                term_width,
                term_height,
                need_width,
                need_height
            );
        }

        let game = match seed {
            Some(seed) => Game::with_seed(config, seed),
            None => Game::new(config),
        };

        Ok(App { game, screen, tick_interval: config.tick_interval() })
    }

    /// Runs until the player quits; returns the final score.
    pub fn run(&mut self) -> Result<u32> {
        self.screen.setup()?;
        let result = self.game_loop();
        self.screen.restore()?;
        result
    }

    fn game_loop(&mut self) -> Result<u32> {
        let mut last_tick = Instant::now();
        self.screen.draw_frame(&self.game.snapshot())?;

        loop {
            for event in self.screen.poll_keys()? {
                match input::map_key(&event) {
                    Some(Command::Quit) => {
                        info!("quit requested, final score {}", self.game.score());
                        return Ok(self.game.score());
                    }
                    Some(Command::Restart) if self.game.status() == Status::GameOver => {
                        self.game.reset();
                        last_tick = Instant::now();
                        self.screen.draw_frame(&self.game.snapshot())?;
                    }
                    Some(Command::Restart) => {}
                    Some(Command::Turn(direction)) => self.game.request_direction(direction),
                    None => {}
                }
            }

            if self.game.status() == Status::Playing && last_tick.elapsed() >= self.tick_interval {
                last_tick = Instant::now();
                self.game.tick();
                self.screen.draw_frame(&self.game.snapshot())?;
                if self.game.status() == Status::GameOver {
                    self.screen.draw_game_over(self.game.score())?;
                }
            }

            sleep(POLL_INTERVAL);
        }
    }
}
