//! Easing curves for the overlay animations.

/// Ease-out cubic: fast at start, decelerates at end.
/// Good for "arriving" animations like the spark fade-in.
pub fn ease_out_cubic(t: f32) -> f32 {
    let x = 1.0 - t.clamp(0.0, 1.0);
    1.0 - x * x * x
}

/// Ease-in-out cubic: slow at start and end, fast in the middle
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        // Past-the-end input stays pinned
        assert_eq!(ease_out_cubic(1.5), 1.0);
        // Decelerating: already most of the way there at the midpoint
        assert!(ease_out_cubic(0.5) > 0.8);
    }

    #[test]
    fn test_ease_in_out_cubic_endpoints() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
        // Slow start, slow finish
        assert!(ease_in_out_cubic(0.1) < 0.1);
        assert!(ease_in_out_cubic(0.9) > 0.9);
    }
}
