use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::Grid;
use crate::snake::Cell;

/// Picks food cells from an owned, seedable random source.
pub struct FoodSpawner {
    rng: StdRng,
}

impl FoodSpawner {
    pub fn from_entropy() -> Self {
        FoodSpawner { rng: StdRng::from_entropy() }
    }

    /// Deterministic spawner for tests and reproducible sessions.
    pub fn with_seed(seed: u64) -> Self {
        FoodSpawner { rng: StdRng::seed_from_u64(seed) }
    }

    /// A uniformly random in-bounds cell. The snake body is not consulted,
    /// so food can occasionally land under it.
    pub fn spawn(&mut self, grid: &Grid) -> Cell {
        let x = self.rng.gen_range(0..i32::from(grid.width));
        let y = self.rng.gen_range(0..i32::from(grid.height));
        Cell::new(x, y)
    }
}
