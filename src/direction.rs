/// One of the 4 unit movement directions on the grid.
///
/// Deltas are `(Δrow, Δcol)` with rows growing downward, so `Up` is `(-1, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector `(Δrow, Δcol)` for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Rotate 90 degrees clockwise in (row, col) space: `(dr, dc) -> (dc, -dr)`.
    /// Up -> Right -> Down -> Left -> Up.
    pub fn rotate90(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// Rotate 90 degrees counter-clockwise (the other perpendicular).
    pub fn rotate270(self) -> Self {
        self.rotate90().rotate90().rotate90()
    }

    pub fn opposite(self) -> Self {
        self.rotate90().rotate90()
    }

    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}
