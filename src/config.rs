use std::time::Duration;

/// Everything tunable about one session, passed in at construction.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Playfield width in cells.
    pub grid_width: u16,
    /// Playfield height in cells.
    pub grid_height: u16,
    /// Pixel (terminal column/row) size of one rendered cell.
    pub cell_size: (u16, u16),
    /// Simulation ticks per second.
    pub tick_rate: u32,
    /// Score awarded per food item.
    pub food_reward: u32,
    /// Cells the snake starts with.
    pub initial_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_width: 40,
            grid_height: 30,
            cell_size: (2, 1),
            tick_rate: 15,
            food_reward: 10,
            initial_length: 1,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.grid_width < 4 || self.grid_width > 200 {
            return Err("Grid width must be between 4 and 200".to_string());
        }
        if self.grid_height < 4 || self.grid_height > 200 {
            return Err("Grid height must be between 4 and 200".to_string());
        }
        if self.cell_size.0 < 1 || self.cell_size.1 < 1 {
            return Err("Cell size must be at least 1x1".to_string());
        }
        if self.cell_size.0 > 8 || self.cell_size.1 > 8 {
            return Err("Cell size must be at most 8x8".to_string());
        }
        if self.tick_rate < 1 || self.tick_rate > 60 {
            return Err("Tick rate must be between 1 and 60".to_string());
        }
        if self.initial_length < 1 {
            return Err("Initial length must be at least 1".to_string());
        }
        let area = usize::from(self.grid_width) * usize::from(self.grid_height);
        if self.initial_length >= area {
            return Err("Initial length must leave free cells on the grid".to_string());
        }
        Ok(())
    }

    /// Duration of one tick at the configured rate.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(u64::from(1000 / self.tick_rate))
    }
}
