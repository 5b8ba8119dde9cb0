use Direction::*;

/// One grid cell, in column/row units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// The neighboring cell one step along `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Cell::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit velocity vector in cell units, y growing downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

/// Ordered body cells, tail first; the head is always the last element.
///
/// Growth is deferred: eating raises `target_len`, and the tail simply keeps
/// its place on the next advance instead of being trimmed.
#[derive(Debug, Clone)]
pub struct SnakeBody {
    cells: Vec<Cell>,
    target_len: usize,
}

impl SnakeBody {
    pub fn new(head: Cell, initial_len: usize) -> Self {
        assert!(initial_len >= 1, "snake must start with at least one cell");
        SnakeBody { cells: vec![head], target_len: initial_len }
    }

    pub fn head(&self) -> Cell {
        *self.cells.last().expect("body always has at least one cell")
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn target_len(&self) -> usize {
        self.target_len
    }

    /// Queues one cell of growth for the next advance.
    pub fn grow(&mut self) {
        self.target_len += 1;
    }

    /// True if moving the head to `cell` bites a segment that is still
    /// occupied during this tick. The tail cell does not count while it is
    /// about to be vacated by the same move; with growth pending the tail
    /// stays put and does count.
    pub fn bites(&self, cell: Cell) -> bool {
        // The head itself is leaving its cell, skip it.
        let mut occupied = &self.cells[..self.cells.len() - 1];
        if self.cells.len() >= self.target_len {
            occupied = occupied.get(1..).unwrap_or(&[]);
        }
        occupied.contains(&cell)
    }

    /// Commits the move to `new_head`, trimming the tail unless growth is
    /// pending. Returns the vacated tail cell, if any.
    pub fn advance(&mut self, new_head: Cell) -> Option<Cell> {
        self.cells.push(new_head);
        if self.cells.len() > self.target_len {
            Some(self.cells.remove(0))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_applies_the_unit_vector() {
        let cell = Cell::new(3, 4);
        assert_eq!(cell.step(Right), Cell::new(4, 4));
        assert_eq!(cell.step(Left), Cell::new(2, 4));
        assert_eq!(cell.step(Up), Cell::new(3, 3));
        assert_eq!(cell.step(Down), Cell::new(3, 5));
    }

    #[test]
    fn opposites_pair_up() {
        assert_eq!(Left.opposite(), Right);
        assert_eq!(Up.opposite(), Down);
        assert_eq!(Down.opposite().opposite(), Down);
    }

    #[test]
    fn advance_moves_the_head_and_keeps_length() {
        let mut body = SnakeBody::new(Cell::new(5, 5), 1);

        let vacated = body.advance(Cell::new(6, 5));

        assert_eq!(body.head(), Cell::new(6, 5));
        assert_eq!(body.len(), 1);
        assert_eq!(vacated, Some(Cell::new(5, 5)));
    }

    #[test]
    fn growth_lands_on_the_next_advance() {
        let mut body = SnakeBody::new(Cell::new(5, 5), 1);

        body.grow();
        assert_eq!(body.len(), 1);

        let vacated = body.advance(Cell::new(6, 5));
        assert_eq!(vacated, None);
        assert_eq!(body.cells(), &[Cell::new(5, 5), Cell::new(6, 5)]);
    }

    // 2x2 loop, tail first; the head at (1, 2) sits next to the tail at (1, 1).
    fn looped_body() -> SnakeBody {
        let mut body = SnakeBody::new(Cell::new(1, 1), 4);
        body.advance(Cell::new(2, 1));
        body.advance(Cell::new(2, 2));
        body.advance(Cell::new(1, 2));
        assert_eq!(body.len(), 4);
        body
    }

    #[test]
    fn chasing_the_vacating_tail_is_not_a_bite() {
        let body = looped_body();
        assert!(!body.bites(Cell::new(1, 1)));
    }

    #[test]
    fn pending_growth_keeps_the_tail_solid() {
        let mut body = looped_body();
        body.grow();
        assert!(body.bites(Cell::new(1, 1)));
    }

    #[test]
    fn running_into_the_second_cell_is_a_bite() {
        let body = looped_body();
        assert!(body.bites(Cell::new(2, 2)));
    }

    #[test]
    fn single_cell_body_cannot_bite_itself() {
        let body = SnakeBody::new(Cell::new(0, 0), 1);
        assert!(!body.bites(Cell::new(1, 0)));
        assert!(!body.bites(Cell::new(0, 0)));
    }
}
