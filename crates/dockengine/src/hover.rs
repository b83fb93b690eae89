//! Hover animation.
//!
//! Each icon carries a single hover scalar in [0, 1] that eases toward a
//! binary target with exponential smoothing, once per rendered frame. There
//! are no discrete animation states; the scalar is the whole state machine.

/// Smoothing factor applied each frame.
pub const HOVER_SMOOTHING: f32 = 0.2;

/// Advances `hover` one frame toward `target`.
pub fn step(hover: f32, target: f32) -> f32 {
    hover + (target - hover) * HOVER_SMOOTHING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approach_is_monotonic_and_never_overshoots() {
        for target in [0.0f32, 1.0] {
            let mut hover = 1.0 - target;
            let mut previous_distance = (hover - target).abs();
            for _ in 0..100 {
                hover = step(hover, target);
                let distance = (hover - target).abs();
                assert!(distance < previous_distance);
                assert!((0.0..=1.0).contains(&hover));
                previous_distance = distance;
            }
            assert!(previous_distance < 1e-6);
        }
    }

    #[test]
    fn at_target_is_a_fixed_point() {
        assert_eq!(step(0.0, 0.0), 0.0);
        assert_eq!(step(1.0, 1.0), 1.0);
    }

    #[test]
    fn first_step_moves_a_fifth_of_the_way() {
        assert!((step(0.0, 1.0) - 0.2).abs() < 1e-6);
        assert!((step(1.0, 0.0) - 0.8).abs() < 1e-6);
    }
}
