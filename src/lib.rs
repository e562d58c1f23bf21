pub mod cell;
pub mod config;
pub mod direction;
pub mod level;
pub mod level_data;
pub mod level_graphics;
pub mod levels;
pub mod util;

pub use cell::Cell;
pub use direction::Direction;
pub use level::Level;
pub use level_data::LevelData;
