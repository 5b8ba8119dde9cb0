use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, Result};

use crate::config::GameConfig;
use crate::game::{Snapshot, Status};
use crate::grid::Grid;
use crate::snake::Cell;

const SNAKE_CHAR: char = '█';
const DEAD_SNAKE_CHAR: char = 'X';
const FOOD_CHAR: char = 'O';

/// Crossterm-backed presentation adapter. Consumes snapshots and draws;
/// never touches game rules.
pub struct Screen {
    stdout: Stdout,
    grid: Grid,
    cell_size: (u16, u16),
}

impl Screen {
    pub fn new(config: &GameConfig) -> Self {
        Screen {
            stdout: stdout(),
            grid: Grid::new(config.grid_width, config.grid_height),
            cell_size: config.cell_size,
        }
    }

    /// Terminal size needed for the playfield, border and score line.
    pub fn required_size(&self) -> (u16, u16) {
        (
            self.grid.width * self.cell_size.0 + 2,
            self.grid.height * self.cell_size.1 + 3,
        )
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen, cursor::Hide)?;
        terminal::enable_raw_mode()?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Drains every key event currently queued, without blocking.
    pub fn poll_keys(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(1))? {
            if let Event::Key(event) = read()? {
                events.push(event);
            }
        }

        Ok(events)
    }

    /// Redraws the whole frame: border, food, snake and score line.
    pub fn draw_frame(&mut self, snapshot: &Snapshot) -> Result<()> {
        queue!(self.stdout, terminal::Clear(ClearType::All))?;
        self.queue_border()?;

        queue!(self.stdout, SetForegroundColor(Color::Red))?;
        self.queue_cell(snapshot.food, FOOD_CHAR)?;

        let (body_color, body_char) = match snapshot.status {
            Status::Playing => (Color::Green, SNAKE_CHAR),
            Status::GameOver => (Color::DarkRed, DEAD_SNAKE_CHAR),
        };
        queue!(self.stdout, SetForegroundColor(body_color))?;
        for cell in snapshot.snake {
            self.queue_cell(*cell, body_char)?;
        }

        let score_row = self.grid.height * self.cell_size.1 + 2;
        queue!(
            self.stdout,
            ResetColor,
            cursor::MoveTo(0, score_row),
            Print(format!("Score: {}", snapshot.score))
        )?;

        self.stdout.flush()?;
        Ok(())
    }

    /// Centered overlay shown while waiting for restart or quit.
    pub fn draw_game_over(&mut self, score: u32) -> Result<()> {
        let lines = [
            "Game over!".to_string(),
            format!("Final score: {}", score),
            String::new(),
            "Press R to play again or Q to quit".to_string(),
        ];
        self.queue_message(&lines)?;
        self.stdout.flush()?;
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn queue_cell(&mut self, cell: Cell, ch: char) -> Result<()> {
        let rect = self.grid.cell_rect(cell, self.cell_size);
        let fill: String = std::iter::repeat(ch).take(usize::from(rect.width)).collect();

        // Offset by one to skip the border.
        for row in 0..rect.height {
            queue!(self.stdout, cursor::MoveTo(rect.x + 1, rect.y + row + 1), Print(&fill))?;
        }

        Ok(())
    }

    fn queue_border(&mut self) -> Result<()> {
        let width = self.grid.width * self.cell_size.0 + 2;
        let height = self.grid.height * self.cell_size.1 + 2;
        let end_x = width - 1;
        let end_y = height - 1;

        queue!(self.stdout, ResetColor)?;
        for x in 0..width {
            let ch = if x == 0 || x == end_x { '+' } else { '-' };
            queue!(self.stdout, cursor::MoveTo(x, 0), Print(ch))?;
            queue!(self.stdout, cursor::MoveTo(x, end_y), Print(ch))?;
        }
        for y in 1..end_y {
            queue!(self.stdout, cursor::MoveTo(0, y), Print('|'))?;
            queue!(self.stdout, cursor::MoveTo(end_x, y), Print('|'))?;
        }

        Ok(())
    }

    fn queue_message(&mut self, lines: &[String]) -> Result<()> {
        let field_width = self.grid.width * self.cell_size.0 + 2;
        let field_height = self.grid.height * self.cell_size.1 + 2;
        let box_width = lines.iter().map(|line| line.len()).max().unwrap_or(0) + 2;
        let box_height = lines.len() as u16 + 2;
        let left = field_width.saturating_sub(box_width as u16) / 2;
        let top = field_height.saturating_sub(box_height) / 2;

        let blank = " ".repeat(box_width);
        queue!(self.stdout, ResetColor, cursor::MoveTo(left, top), Print(&blank))?;
        for (i, line) in lines.iter().enumerate() {
            let padded = format!("{line: ^box_width$}");
            queue!(self.stdout, cursor::MoveTo(left, top + i as u16 + 1), Print(padded))?;
        }
        queue!(self.stdout, cursor::MoveTo(left, top + box_height - 1), Print(&blank))?;

        Ok(())
    }
}
