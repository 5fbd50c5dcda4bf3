//! Request timing helpers.

use std::time::{Duration, Instant};

/// Seconds elapsed since `start`, as reported in `processing_time`.
pub fn elapsed_secs(start: Instant) -> f64 {
    duration_to_secs(start.elapsed())
}

/// Converts a `Duration` to fractional seconds.
pub fn duration_to_secs(duration: Duration) -> f64 {
    duration.as_secs_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_to_secs() {
        assert_eq!(duration_to_secs(Duration::from_millis(1500)), 1.5);
        assert_eq!(duration_to_secs(Duration::ZERO), 0.0);
    }

    #[test]
    fn test_elapsed_secs_is_non_negative() {
        let start = Instant::now();
        assert!(elapsed_secs(start) >= 0.0);
    }
}
