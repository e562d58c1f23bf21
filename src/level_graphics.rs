use crate::cell::Cell;
use crate::level::Level;

/// Footprint of one cell in screen space.
pub const ROMBUS_WIDTH: f32 = 64.0;
pub const ROMBUS_HEIGHT: f32 = 21.0;
/// Depth keys stay tiny; they only need to order sprites back to front.
const Z_DIVISOR: f32 = 1024.0;

/// Walls are the most displayed cells; the atlas carries this many models
/// of them along its first row to add diversity.
pub const WALL_MODELS: u8 = 8;

/// Isometric projection of a grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoCoords {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

pub fn isometric_coords(row: i32, col: i32) -> IsoCoords {
    IsoCoords {
        x: (col - row) as f32 * ROMBUS_WIDTH,
        y: (col + row) as f32 * ROMBUS_HEIGHT,
        z: (col + row) as f32 / Z_DIVISOR,
    }
}

/// Static per-cell geometry plus texture-atlas UV coordinates, as consumed
/// by the external renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub width: f32,
    pub height: f32,
    pub origin_x: f32,
    pub origin_y: f32,
    pub u0: f32,
    pub v0: f32,
    pub u1: f32,
    pub v1: f32,
    pub scale: f32,
    pub angle: f32,
}

/// The rendering seam: the painter owns the canvas/atlas, this crate only
/// hands it geometry.
pub trait SpritesPainter {
    fn create_sprite(&mut self, sprite: Sprite);
}

/// All the sprites for elements of the level that don't move. Doors and
/// actors animate and stay with the external renderer.
pub fn create_fixed_sprites(level: &Level, painter: &mut dyn SpritesPainter) {
    for row in 0..level.rows {
        for col in 0..level.cols {
            if let Some(Cell::Wall { instance }) = level.get_cell(row, col) {
                painter.create_sprite(wall_sprite(row, col, instance));
            }
        }
    }
}

/// Sprite for one wall cell. The wall model picks a 1/8-wide band out of
/// the atlas's first row.
fn wall_sprite(row: i32, col: i32, instance: u8) -> Sprite {
    let iso = isometric_coords(row, col);
    let model = f32::from(instance) / f32::from(WALL_MODELS);
    Sprite {
        x: iso.x,
        y: iso.y,
        z: iso.z,
        width: 128.0,
        height: 128.0,
        origin_x: 64.0,
        origin_y: 64.0 + 32.0,
        u0: model,
        v0: 0.0,
        u1: model + 1.0 / f32::from(WALL_MODELS),
        v1: 1.0 / f32::from(WALL_MODELS),
        scale: 1.0,
        angle: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CollectingPainter {
        sprites: Vec<Sprite>,
    }

    impl SpritesPainter for CollectingPainter {
        fn create_sprite(&mut self, sprite: Sprite) {
            self.sprites.push(sprite);
        }
    }

    #[test]
    fn isometric_projection_formula() {
        let origin = isometric_coords(0, 0);
        assert_eq!((origin.x, origin.y, origin.z), (0.0, 0.0, 0.0));

        let coords = isometric_coords(3, 9);
        assert_eq!(coords.x, 6.0 * ROMBUS_WIDTH);
        assert_eq!(coords.y, 12.0 * ROMBUS_HEIGHT);
        assert_eq!(coords.z, 12.0 / 1024.0);

        // One step down a row mirrors one step right a column in x.
        assert_eq!(isometric_coords(1, 0).x, -isometric_coords(0, 1).x);
        assert_eq!(isometric_coords(1, 0).y, isometric_coords(0, 1).y);
    }

    #[test]
    fn fixed_sprites_cover_exactly_the_walls() {
        let mut level = Level::new(3, 3);
        level.set_wall(0, 0, 2);
        level.set_wall(2, 1, 5);
        level.set_key(1, 1);
        level.set_door(0, 1, true, false);

        let mut painter = CollectingPainter::default();
        create_fixed_sprites(&level, &mut painter);
        assert_eq!(painter.sprites.len(), 2);
    }

    #[test]
    fn wall_sprite_uv_band_follows_instance() {
        let mut level = Level::new(1, 1);
        level.set_wall(0, 0, 3);

        let mut painter = CollectingPainter::default();
        create_fixed_sprites(&level, &mut painter);
        let sprite = painter.sprites[0];

        assert_eq!(sprite.u0, 3.0 / 8.0);
        assert_eq!(sprite.u1, 3.0 / 8.0 + 1.0 / 8.0);
        assert_eq!((sprite.v0, sprite.v1), (0.0, 1.0 / 8.0));
        assert_eq!((sprite.width, sprite.height), (128.0, 128.0));
        assert_eq!((sprite.origin_x, sprite.origin_y), (64.0, 96.0));
    }
}
