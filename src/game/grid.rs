/// Side length of one grid cell, in playfield units.
pub const CELL: i32 = 40;

/// A point in the playfield, cell-aligned while in play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    /// Off-grid position a freshly grown tail segment holds until the next
    /// walk assigns it a real cell
    pub const OFF_GRID: GridPoint = GridPoint { x: -1, y: -1 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step away in `direction`
    pub fn stepped(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * CELL,
            y: self.y + dy * CELL,
        }
    }

    /// Column index of the cell containing this point
    pub fn col(&self) -> i32 {
        self.x / CELL
    }

    /// Row index of the cell containing this point
    pub fn row(&self) -> i32 {
        self.y / CELL
    }
}

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the delta (dx, dy) for moving in this direction, in cells
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}
