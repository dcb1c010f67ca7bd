//! Time helpers for animations

use std::time::{Duration, Instant};

/// Progress of an animation that started at `start`, clamped to [0, 1]
#[inline]
pub fn progress(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Interpolate between two row offsets
#[inline]
pub fn lerp_u16(from: u16, to: u16, t: f64) -> u16 {
    lerp(f64::from(from), f64::from(to), t)
        .round()
        .clamp(0.0, f64::from(u16::MAX)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_u16() {
        assert_eq!(lerp_u16(0, 100, 0.0), 0);
        assert_eq!(lerp_u16(0, 100, 0.5), 50);
        assert_eq!(lerp_u16(100, 0, 0.25), 75);
    }

    #[test]
    fn test_progress() {
        let start = Instant::now();
        let d = Duration::from_millis(200);
        assert_eq!(progress(start, d, start), 0.0);
        assert!((progress(start, d, start + Duration::from_millis(50)) - 0.25).abs() < 1e-9);
        assert_eq!(progress(start, d, start + Duration::from_secs(5)), 1.0);
        assert_eq!(progress(start, Duration::ZERO, start), 1.0);
    }
}
