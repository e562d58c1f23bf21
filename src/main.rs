use isomaze::config::Config;
use isomaze::level_graphics::{isometric_coords, ROMBUS_HEIGHT, ROMBUS_WIDTH, WALL_MODELS};
use isomaze::{levels, util, Cell, Direction, Level, LevelData};
use macroquad::prelude::*;

/// Demo state: a level plus a player walked around with the arrow keys,
/// strictly through the engine's legality queries.
struct GameState {
    title: String,
    name: String,
    level: Level,
    player_row: i32,
    player_col: i32,
    keys_collected: i32,
    finished: bool,
    background: Color,
}

impl GameState {
    fn new(data: &LevelData, config: &Config) -> Self {
        let level = data.build();
        let (player_row, player_col) = start_position(&level);
        println!(
            "Level '{}': {}x{}, {} key(s)",
            data.name, level.rows, level.cols, level.keys_count
        );
        GameState {
            title: config.visual.window_title.clone(),
            name: data.name.clone(),
            level,
            player_row,
            player_col,
            keys_collected: 0,
            finished: false,
            background: Color::from_rgba(
                config.visual.background_r,
                config.visual.background_g,
                config.visual.background_b,
                255,
            ),
        }
    }

    /// An empty bordered grid of the configured fallback dimensions, for
    /// walking around without a level file.
    fn sandbox(config: &Config) -> Self {
        let (rows, cols) = (config.grid.rows, config.grid.cols);
        let mut level = Level::new(rows, cols);
        level.keys_count = config.grid.keys;
        for row in 0..rows {
            for col in 0..cols {
                if row == 0 || col == 0 || row == rows - 1 || col == cols - 1 {
                    level.set_wall(row, col, util::rnd(0, WALL_MODELS as i32) as u8);
                }
            }
        }
        if rows > 2 {
            level.set_exit(rows / 2, cols - 1);
        }
        let (player_row, player_col) = start_position(&level);
        println!("Sandbox grid: {}x{}", rows, cols);
        GameState {
            title: config.visual.window_title.clone(),
            name: "Sandbox".to_string(),
            level,
            player_row,
            player_col,
            keys_collected: 0,
            finished: false,
            background: Color::from_rgba(
                config.visual.background_r,
                config.visual.background_g,
                config.visual.background_b,
                255,
            ),
        }
    }

    /// Attempt one step: plain moves first, then door pushes. Illegal steps
    /// do nothing.
    fn try_step(&mut self, dir: Direction) {
        if self.finished {
            return;
        }
        let movable = self.level.can_move(self.player_row, self.player_col, dir);
        let pushable = !movable && self.level.can_push(self.player_row, self.player_col, dir);
        if !movable && !pushable {
            return;
        }

        let (dr, dc) = dir.delta();
        let (row, col) = (self.player_row + dr, self.player_col + dc);
        if pushable {
            self.open_door(row, col, dir);
        }
        self.player_row = row;
        self.player_col = col;

        match self.level.get_cell(row, col) {
            Some(Cell::Key) => {
                self.level.set_empty(row, col);
                self.keys_collected += 1;
                println!(
                    "Picked up a key ({}/{})",
                    self.keys_collected, self.level.keys_count
                );
            }
            Some(Cell::Exit) => {
                self.finished = true;
                println!("Level '{}' complete!", self.name);
            }
            _ => {}
        }
    }

    /// Swing the whole door open: clear the pushed cell and any wings
    /// chained along the perpendicular axis.
    fn open_door(&mut self, row: i32, col: i32, dir: Direction) {
        self.level.set_empty(row, col);
        let perp = dir.rotate90();
        for side in [perp, perp.opposite()] {
            let (dr, dc) = side.delta();
            let (mut r, mut c) = (row + dr, col + dc);
            while matches!(self.level.get_cell(r, c), Some(Cell::Door { .. })) {
                self.level.set_empty(r, c);
                r += dr;
                c += dc;
            }
        }
    }

    fn draw(&self) {
        clear_background(self.background);

        let level = &self.level;
        if level.rows == 0 || level.cols == 0 {
            draw_text("Empty level", 10.0, 40.0, 24.0, WHITE);
            return;
        }

        // Fit the level's isometric footprint into the window.
        let span_x = (level.rows + level.cols) as f32 * ROMBUS_WIDTH;
        let span_y = (level.rows + level.cols) as f32 * ROMBUS_HEIGHT;
        let scale = (screen_width() * 0.9 / span_x).min(screen_height() * 0.7 / span_y);
        let offset_x =
            screen_width() / 2.0 - (level.cols - level.rows) as f32 * ROMBUS_WIDTH * scale / 2.0;
        let offset_y = 80.0;
        let radius = ROMBUS_WIDTH * scale * 0.48;

        for row in 0..level.rows {
            for col in 0..level.cols {
                let Some(cell) = level.get_cell(row, col) else { continue };
                let iso = isometric_coords(row, col);
                let px = offset_x + iso.x * scale;
                let py = offset_y + iso.y * scale;
                let color = match cell {
                    Cell::Empty => Color::from_rgba(50, 50, 60, 255),
                    Cell::Wall { instance } => {
                        let shade = 110 + 10 * instance;
                        Color::from_rgba(shade, shade, shade, 255)
                    }
                    Cell::Door { key_is_needed: true, .. } => Color::from_rgba(170, 110, 40, 255),
                    Cell::Door { key_is_needed: false, .. } => Color::from_rgba(130, 90, 50, 255),
                    Cell::Key => GOLD,
                    Cell::Exit => GREEN,
                };
                draw_poly(px, py, 4, radius, 0.0, color);
            }
        }

        let iso = isometric_coords(self.player_row, self.player_col);
        draw_circle(
            offset_x + iso.x * scale,
            offset_y + iso.y * scale,
            radius * 0.5,
            SKYBLUE,
        );

        let status = if self.finished {
            format!("{} - {} | COMPLETE - R: restart", self.title, self.name)
        } else {
            format!(
                "{} - {} | keys {}/{} | arrows: move/push, R: restart, N: sandbox, Esc: quit",
                self.title, self.name, self.keys_collected, self.level.keys_count
            )
        };
        draw_text(&status, 10.0, 24.0, 20.0, WHITE);
    }
}

/// First empty cell, scanning row-major. Levels keep their top-left area
/// walled, so this lands inside the maze.
fn start_position(level: &Level) -> (i32, i32) {
    for row in 0..level.rows {
        for col in 0..level.cols {
            if level.is_empty(row, col) {
                return (row, col);
            }
        }
    }
    (0, 0)
}

fn load_level(config: &Config) -> LevelData {
    match LevelData::load_from_file(&config.level.path) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Warning: {}", e);
            eprintln!("Falling back to the built-in introduction level");
            levels::introduction()
        }
    }
}

#[macroquad::main("Isomaze")]
async fn main() {
    let config = Config::load();
    let mut data = load_level(&config);
    let mut state = GameState::new(&data, &config);

    loop {
        if is_key_pressed(KeyCode::Up) {
            state.try_step(Direction::Up);
        }
        if is_key_pressed(KeyCode::Down) {
            state.try_step(Direction::Down);
        }
        if is_key_pressed(KeyCode::Left) {
            state.try_step(Direction::Left);
        }
        if is_key_pressed(KeyCode::Right) {
            state.try_step(Direction::Right);
        }
        if is_key_pressed(KeyCode::R) {
            data = load_level(&config);
            state = GameState::new(&data, &config);
        }
        if is_key_pressed(KeyCode::N) {
            state = GameState::sandbox(&config);
        }
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        state.draw();

        next_frame().await
    }
}
