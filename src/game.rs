use log::info;

use crate::config::GameConfig;
use crate::food::FoodSpawner;
use crate::grid::Grid;
use crate::input;
use crate::snake::{Cell, Direction, SnakeBody};

/// Lifecycle of one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    GameOver,
}

/// Read-only view of the state after a tick, consumed by the presentation
/// layer.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// Body cells, tail first; the head is the last element.
    pub snake: &'a [Cell],
    pub food: Cell,
    pub score: u32,
    pub status: Status,
}

/// The per-tick state machine: movement, collision checks, scoring, reset.
///
/// All mutation happens inside [`tick`](Game::tick) and
/// [`reset`](Game::reset); collaborators only ever see a [`Snapshot`].
pub struct Game {
    grid: Grid,
    body: SnakeBody,
    food: Cell,
    direction: Option<Direction>,
    pending: Option<Direction>,
    score: u32,
    status: Status,
    spawner: FoodSpawner,
    food_reward: u32,
    initial_length: usize,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_spawner(config, FoodSpawner::from_entropy())
    }

    /// Deterministic session for tests and reproducible runs.
    pub fn with_seed(config: &GameConfig, seed: u64) -> Self {
        Self::with_spawner(config, FoodSpawner::with_seed(seed))
    }

    fn with_spawner(config: &GameConfig, mut spawner: FoodSpawner) -> Self {
        let grid = Grid::new(config.grid_width, config.grid_height);
        let food = spawner.spawn(&grid);
        Game {
            grid,
            body: SnakeBody::new(grid.center(), config.initial_length),
            food,
            direction: None,
            pending: None,
            score: 0,
            status: Status::Playing,
            spawner,
            food_reward: config.food_reward,
            initial_length: config.initial_length,
        }
    }

    /// Queues a turn for the next tick. Requests are checked against the
    /// direction in effect now, never against an earlier queued turn, and
    /// the last valid request before the tick wins. Ignored after game over.
    pub fn request_direction(&mut self, requested: Direction) {
        if self.status != Status::Playing {
            return;
        }
        if let Some(direction) = input::resolve_turn(requested, self.direction) {
            self.pending = Some(direction);
        }
    }

    /// Advances the simulation by one tick. Must only be called while
    /// playing.
    pub fn tick(&mut self) {
        assert_eq!(self.status, Status::Playing, "tick after game over");

        if let Some(direction) = self.pending.take() {
            self.direction = Some(direction);
        }
        // No input yet: the snake holds its starting cell.
        let direction = match self.direction {
            Some(direction) => direction,
            None => return,
        };

        let new_head = self.body.head().step(direction);

        if !self.grid.contains(new_head) {
            info!(
                "wall hit at ({}, {}), final score {}",
                new_head.x, new_head.y, self.score
            );
            self.status = Status::GameOver;
            return;
        }
        if self.body.bites(new_head) {
            info!(
                "snake bit itself at ({}, {}), final score {}",
                new_head.x, new_head.y, self.score
            );
            self.status = Status::GameOver;
            return;
        }

        self.body.advance(new_head);

        if new_head == self.food {
            self.body.grow();
            self.score += self.food_reward;
            self.food = self.spawner.spawn(&self.grid);
            info!("food eaten at ({}, {}), score {}", new_head.x, new_head.y, self.score);
        }
    }

    /// Discards the session and starts a fresh one: a single cell at the
    /// grid center, zero velocity, zero score, newly spawned food.
    pub fn reset(&mut self) {
        self.body = SnakeBody::new(self.grid.center(), self.initial_length);
        self.food = self.spawner.spawn(&self.grid);
        self.direction = None;
        self.pending = None;
        self.score = 0;
        self.status = Status::Playing;
        info!("session reset");
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            snake: self.body.cells(),
            food: self.food,
            score: self.score,
            status: self.status,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn target_len(&self) -> usize {
        self.body.target_len()
    }

    /// Places food at an exact cell, for scripted scenarios.
    pub fn place_food(&mut self, cell: Cell) {
        assert!(self.grid.contains(cell), "food must be placed in bounds");
        self.food = cell;
    }
}
