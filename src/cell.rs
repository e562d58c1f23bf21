/// A single grid cell. Every in-range position holds exactly one variant;
/// setters replace the whole cell, there are no partial merges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// `instance` selects one of the wall models in the texture atlas.
    Wall { instance: u8 },
    /// `vertical` is the axis the door's wings extend along.
    /// `key_is_needed` is bookkeeping for the actor layer; the legality
    /// rules in [`crate::Level`] do not consume it.
    Door { vertical: bool, key_is_needed: bool },
    Key,
    Exit,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_door(&self) -> bool {
        matches!(self, Cell::Door { .. })
    }

    /// True for cells an actor may walk onto directly: Empty, Key, Exit.
    /// Walls block; doors must be pushed open first.
    pub fn is_walkable(&self) -> bool {
        matches!(self, Cell::Empty | Cell::Key | Cell::Exit)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walkable_variants() {
        assert!(Cell::Empty.is_walkable());
        assert!(Cell::Key.is_walkable());
        assert!(Cell::Exit.is_walkable());
        assert!(!Cell::Wall { instance: 0 }.is_walkable());
        assert!(!Cell::Door { vertical: true, key_is_needed: false }.is_walkable());
    }

    #[test]
    fn door_predicate_ignores_fields() {
        assert!(Cell::Door { vertical: false, key_is_needed: true }.is_door());
        assert!(Cell::Door { vertical: true, key_is_needed: false }.is_door());
        assert!(!Cell::Wall { instance: 3 }.is_door());
    }
}
