pub struct Catcher;

const AREA_CATCHER_SIZE: f32 = 106.75;

impl Catcher {
    pub const BASE_SPEED: f64 = 1.0;
    pub const ALLOWED_CATCH_RANGE: f32 = 0.8;

    /// Width of the area in which the catcher catches fruits.
    pub fn calculate_catch_width(cs: f32) -> f32 {
        AREA_CATCHER_SIZE * Self::calculate_scale(cs).abs() * Self::ALLOWED_CATCH_RANGE
    }

    fn calculate_scale(cs: f32) -> f32 {
        (1.0 - 0.7 * ((f64::from(cs) - 5.0) / 5.0)) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catcher_shrinks_with_cs() {
        assert!((Catcher::calculate_catch_width(5.0) - 85.4).abs() < 1e-4);
        assert!(Catcher::calculate_catch_width(7.0) < Catcher::calculate_catch_width(4.0));
    }
}
