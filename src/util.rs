use rand::Rng;

/// Random integer greater or equal to `min` and strictly lower than `max`.
/// Degenerate ranges (`min >= max`) return `min`.
pub fn rnd(min: i32, max: i32) -> i32 {
    if min >= max {
        return min;
    }
    rand::thread_rng().gen_range(min..max)
}

/// Unit 2D vector with a uniformly random angle.
pub fn rnd_vector2d() -> (f32, f32) {
    let angle = std::f32::consts::TAU * rand::thread_rng().gen::<f32>();
    (angle.cos(), angle.sin())
}
