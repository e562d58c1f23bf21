use crate::cell::Cell;
use crate::direction::Direction;

/// The level grid engine: owns the cell arena and answers movement and
/// push legality queries.
///
/// Cells live in a flat row-major `Vec` addressed by a computed offset.
/// Every coordinate-accepting operation is total: out-of-range coordinates
/// (including negative and overflowing ones) degrade to `None`/`false`,
/// never a panic.
#[derive(Debug, Clone)]
pub struct Level {
    pub rows: i32,
    pub cols: i32,
    /// Total keys required/available in the level. Bookkeeping only; the
    /// legality rules below do not consume it.
    pub keys_count: i32,
    cells: Vec<Cell>,
}

impl Level {
    /// Create a grid of the given size, every cell Empty, no keys.
    ///
    /// Non-positive dimensions are clamped to zero, yielding a zero-cell
    /// grid where every access reports not-found.
    pub fn new(rows: i32, cols: i32) -> Self {
        let mut level = Level {
            rows: 0,
            cols: 0,
            keys_count: 0,
            cells: Vec::new(),
        };
        level.reset(rows, cols, 0);
        level
    }

    /// Rebuild the grid to the given size, fill every cell with Empty and
    /// set the keys counter. Prior contents are discarded.
    pub fn reset(&mut self, rows: i32, cols: i32, keys_count: i32) {
        self.rows = rows.max(0);
        self.cols = cols.max(0);
        self.keys_count = keys_count;
        self.cells = vec![Cell::Empty; (self.rows * self.cols) as usize];
    }

    /// Map (row, col) to the linear storage offset, or `None` out of range.
    /// All cell access routes through this check.
    pub fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || row >= self.rows || col < 0 || col >= self.cols {
            return None;
        }
        Some((row * self.cols + col) as usize)
    }

    /// Cell at (row, col), or `None` out of range.
    pub fn get_cell(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    fn set_cell(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Each setter fully replaces the cell at (row, col) and returns false
    /// iff the coordinate was out of range.
    pub fn set_empty(&mut self, row: i32, col: i32) -> bool {
        self.set_cell(row, col, Cell::Empty)
    }

    pub fn set_wall(&mut self, row: i32, col: i32, instance: u8) -> bool {
        self.set_cell(row, col, Cell::Wall { instance })
    }

    pub fn set_door(&mut self, row: i32, col: i32, vertical: bool, key_is_needed: bool) -> bool {
        self.set_cell(row, col, Cell::Door { vertical, key_is_needed })
    }

    pub fn set_key(&mut self, row: i32, col: i32) -> bool {
        self.set_cell(row, col, Cell::Key)
    }

    pub fn set_exit(&mut self, row: i32, col: i32) -> bool {
        self.set_cell(row, col, Cell::Exit)
    }

    /// True iff (row, col) is in range and holds Empty.
    ///
    /// Does not account for dynamic occupants (actors, monsters); those are
    /// not grid cells and belong to the caller's layer.
    pub fn is_empty(&self, row: i32, col: i32) -> bool {
        matches!(self.get_cell(row, col), Some(Cell::Empty))
    }

    /// Can an actor standing at (row, col) step one cell in `dir`?
    ///
    /// True iff the actor's cell is in range and the destination exists and
    /// is Empty, Key or Exit. Walls and doors block plain movement; doors
    /// must be pushed open instead.
    pub fn can_move(&self, row: i32, col: i32, dir: Direction) -> bool {
        if self.index(row, col).is_none() {
            return false;
        }
        let (dest_row, dest_col) = step(row, col, dir);
        match self.get_cell(dest_row, dest_col) {
            Some(cell) => cell.is_walkable(),
            None => false,
        }
    }

    /// Can an actor standing at (row, col) shove the door one cell ahead
    /// in `dir` open?
    ///
    /// Pushing exists only to get through doors: if the destination is not
    /// a Door this degenerates to [`Level::can_move`]. For a door, the cell
    /// one step along the perpendicular axis (either side) that also holds
    /// a Door is the door's other wing and fixes its footprint; the door
    /// swings open only when the four cells flanking that footprint are all
    /// in range and Empty. A lone door cell gets the same flanking check
    /// anchored on itself.
    pub fn can_push(&self, row: i32, col: i32, dir: Direction) -> bool {
        if self.index(row, col).is_none() {
            return false;
        }
        let (door_row, door_col) = step(row, col, dir);
        if !matches!(self.get_cell(door_row, door_col), Some(Cell::Door { .. })) {
            return self.can_move(row, col, dir);
        }

        let perp = dir.rotate90();
        for side in [perp, perp.opposite()] {
            let (wing_row, wing_col) = step(door_row, door_col, side);
            if matches!(self.get_cell(wing_row, wing_col), Some(Cell::Door { .. })) {
                return self.can_open_door(door_row, door_col, dir, side);
            }
        }

        // Lone door cell: no wing found. Same clearance rule, anchored on
        // the single cell.
        let (fore_row, fore_col) = step(door_row, door_col, dir);
        let (aft_row, aft_col) = step(door_row, door_col, dir.opposite());
        let (side_a_row, side_a_col) = step(door_row, door_col, perp);
        let (side_b_row, side_b_col) = step(door_row, door_col, perp.opposite());
        self.is_empty(fore_row, fore_col)
            && self.is_empty(aft_row, aft_col)
            && self.is_empty(side_a_row, side_a_col)
            && self.is_empty(side_b_row, side_b_col)
    }

    /// Clearance check for a two-cell door footprint: the pushed cell plus
    /// its wing one step in `wing_dir`. The four flanking cells must all be
    /// in range and Empty for the door to swing: one past each footprint
    /// end along the perpendicular axis, plus the cells fore and aft of the
    /// pushed cell along the movement axis.
    fn can_open_door(&self, door_row: i32, door_col: i32, dir: Direction, wing_dir: Direction) -> bool {
        let (wing_row, wing_col) = step(door_row, door_col, wing_dir);
        let (end_a_row, end_a_col) = step(door_row, door_col, wing_dir.opposite());
        let (end_b_row, end_b_col) = step(wing_row, wing_col, wing_dir);
        let (fore_row, fore_col) = step(door_row, door_col, dir);
        let (aft_row, aft_col) = step(door_row, door_col, dir.opposite());
        self.is_empty(end_a_row, end_a_col)
            && self.is_empty(end_b_row, end_b_col)
            && self.is_empty(fore_row, fore_col)
            && self.is_empty(aft_row, aft_col)
    }
}

/// One step from (row, col) in `dir`. Saturating so that extreme inputs
/// stay out of range instead of wrapping back in.
fn step(row: i32, col: i32, dir: Direction) -> (i32, i32) {
    let (dr, dc) = dir.delta();
    (row.saturating_add(dr), col.saturating_add(dc))
}
