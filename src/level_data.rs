use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::level::Level;
use crate::level_graphics::WALL_MODELS;
use crate::util;

/// A level as authored: a name plus one string of cell characters per row.
///
/// In a level like the following, the top left corner is at row 0, col 0,
/// and the X (exit) is at row 3, col 9:
///
/// ```text
/// ##########
/// #      | #
/// # #### + #
/// #k     | X
/// ######-+-#
/// ```
///
/// Lines may be shorter than the widest line; the missing trailing cells
/// are Empty. Legend: `#` wall, `|`/`-` door wings (vertical/horizontal),
/// `O` door center, `+` door center requiring a key, `k` key, `X` exit,
/// space Empty. Anything else (e.g. digit spawn markers) parses as Empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelData {
    pub name: String,
    pub data: Vec<String>,
}

const WALL: char = '#';
const KEY: char = 'k';
const EXIT: char = 'X';
const DOOR_WING_VERTICAL: char = '|';
const DOOR_WING_HORIZONTAL: char = '-';
const TURN: char = 'O';
const TURN_KEY: char = '+';

impl LevelData {
    pub fn from_lines(name: &str, lines: &[&str]) -> Self {
        LevelData {
            name: name.to_string(),
            data: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Load a level from a JSON file (`{ "name": ..., "data": [...] }`).
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read level file: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse level file: {}", e))
    }

    pub fn rows(&self) -> i32 {
        self.data.len() as i32
    }

    /// Width of the widest line.
    pub fn cols(&self) -> i32 {
        self.data
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0) as i32
    }

    /// Translate the character map into a [`Level`] through the per-variant
    /// setters. Wall instances are drawn uniformly from the atlas's wall
    /// models; `keys_count` is the number of key cells in the map.
    pub fn build(&self) -> Level {
        let chars: Vec<Vec<char>> = self.data.iter().map(|line| line.chars().collect()).collect();
        let keys = chars
            .iter()
            .flatten()
            .filter(|&&ch| ch == KEY)
            .count() as i32;

        let mut level = Level::new(self.rows(), self.cols());
        level.keys_count = keys;

        for (row, line) in chars.iter().enumerate() {
            for (col, &ch) in line.iter().enumerate() {
                let (row, col) = (row as i32, col as i32);
                match ch {
                    WALL => {
                        level.set_wall(row, col, util::rnd(0, WALL_MODELS as i32) as u8);
                    }
                    DOOR_WING_VERTICAL => {
                        level.set_door(row, col, true, false);
                    }
                    DOOR_WING_HORIZONTAL => {
                        level.set_door(row, col, false, false);
                    }
                    TURN => {
                        level.set_door(row, col, center_is_vertical(&chars, row, col), false);
                    }
                    TURN_KEY => {
                        level.set_door(row, col, center_is_vertical(&chars, row, col), true);
                    }
                    KEY => {
                        level.set_key(row, col);
                    }
                    EXIT => {
                        level.set_exit(row, col);
                    }
                    _ => {
                        // Empty, or a spawn marker handled by the actor layer.
                    }
                }
            }
        }

        level
    }
}

/// Orientation of a door center (`O` or `+`): horizontal iff a horizontal
/// wing sits directly left or right of it, vertical otherwise. The wing
/// test must look sideways first: a `-+-` door below a corridor can have
/// an unrelated `|` directly above its center.
fn center_is_vertical(chars: &[Vec<char>], row: i32, col: i32) -> bool {
    let at = |r: i32, c: i32| -> Option<char> {
        if r < 0 || c < 0 {
            return None;
        }
        chars.get(r as usize).and_then(|line| line.get(c as usize)).copied()
    };
    !(at(row, col - 1) == Some(DOOR_WING_HORIZONTAL)
        || at(row, col + 1) == Some(DOOR_WING_HORIZONTAL))
}
