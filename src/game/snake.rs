use super::grid::{Direction, GridPoint};

/// The snake: ordered segments with the head at index 0
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    segments: Vec<GridPoint>,
    direction: Direction,
}

impl Snake {
    /// Create a snake facing `direction`, with every starting segment
    /// stacked on the head cell; the first walks pull the tail out one cell
    /// per tick
    pub fn new(head: GridPoint, direction: Direction, length: usize) -> Self {
        Self {
            segments: vec![head; length.max(1)],
            direction,
        }
    }

    /// Get the head position
    pub fn head(&self) -> GridPoint {
        self.segments[0]
    }

    /// All segments, head first
    pub fn segments(&self) -> &[GridPoint] {
        &self.segments
    }

    /// Current facing direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Overwrite the facing direction
    ///
    /// Always accepted, including reversals; steering back into the body is
    /// one of the ways to lose.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Append one segment at the off-grid sentinel
    ///
    /// The next walk shifts a real cell into it; until then it must not be
    /// drawn.
    pub fn grow(&mut self) {
        self.segments.push(GridPoint::OFF_GRID);
    }

    /// Advance one cell in the facing direction, returning the new head
    ///
    /// Segments shift tail-to-head first (each takes its predecessor's
    /// cell), then the head steps. Pure geometry; collision checks live in
    /// the engine.
    pub fn walk(&mut self) -> GridPoint {
        for i in (1..self.segments.len()).rev() {
            self.segments[i] = self.segments[i - 1];
        }
        let head = self.segments[0].stepped(self.direction);
        self.segments[0] = head;
        head
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_creation_stacks_segments() {
        let snake = Snake::new(GridPoint::new(40, 40), Direction::Down, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), GridPoint::new(40, 40));
        assert_eq!(
            snake.segments(),
            &[GridPoint::new(40, 40); 3],
            "all starting segments share the head cell"
        );
    }

    #[test]
    fn test_walk_advances_head_one_cell() {
        let mut snake = Snake::new(GridPoint::new(40, 40), Direction::Down, 1);
        assert_eq!(snake.walk(), GridPoint::new(40, 80));
        assert_eq!(snake.head(), GridPoint::new(40, 80));
    }

    #[test]
    fn test_three_walks_down() {
        let mut snake = Snake::new(GridPoint::new(40, 40), Direction::Down, 1);
        snake.walk();
        snake.walk();
        snake.walk();
        assert_eq!(snake.head(), GridPoint::new(40, 160));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_walk_shifts_tail_to_head() {
        let mut snake = Snake::new(GridPoint::new(40, 40), Direction::Down, 3);

        snake.walk();
        assert_eq!(
            snake.segments(),
            &[
                GridPoint::new(40, 80),
                GridPoint::new(40, 40),
                GridPoint::new(40, 40),
            ]
        );

        snake.walk();
        assert_eq!(
            snake.segments(),
            &[
                GridPoint::new(40, 120),
                GridPoint::new(40, 80),
                GridPoint::new(40, 40),
            ]
        );
    }

    #[test]
    fn test_walk_preserves_length() {
        let mut snake = Snake::new(GridPoint::new(120, 120), Direction::Right, 4);
        for _ in 0..10 {
            snake.walk();
            assert_eq!(snake.len(), 4);
        }
    }

    #[test]
    fn test_grow_appends_sentinel() {
        let mut snake = Snake::new(GridPoint::new(40, 40), Direction::Down, 1);
        snake.walk();
        snake.grow();

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.segments()[1], GridPoint::OFF_GRID);

        // The next walk replaces the sentinel with the old head cell
        snake.walk();
        assert_eq!(
            snake.segments(),
            &[GridPoint::new(40, 120), GridPoint::new(40, 80)]
        );
    }

    #[test]
    fn test_set_direction_is_unconditional() {
        let mut snake = Snake::new(GridPoint::new(120, 120), Direction::Right, 2);
        snake.set_direction(Direction::Left);
        assert_eq!(snake.direction(), Direction::Left);
    }
}
