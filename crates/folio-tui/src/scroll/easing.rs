//! Easing curves used by page glides and section entrances

pub use folio_core::EasingType;

pub trait EasingTypeExt {
    /// Map progress `t` in [0, 1] to eased progress in [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => 1.0 - (1.0 - t).powi(3),
            EasingType::Quintic => 1.0 - (1.0 - t).powi(5),
            EasingType::EaseOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f64.powf(-10.0 * t)
                }
            }
        }
    }
}

/// Symmetric ease for looping decoration (spinner pulses, floating labels)
#[inline]
pub fn ease_in_out_sine(t: f64) -> f64 {
    -((std::f64::consts::PI * t.clamp(0.0, 1.0)).cos() - 1.0) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [EasingType; 4] = [
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::Quintic,
        EasingType::EaseOut,
    ];

    #[test]
    fn test_endpoints() {
        for easing in CURVES {
            assert!(easing.apply(0.0).abs() < 0.001, "{:?} at 0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at 1", easing);
        }
        assert_eq!(EasingType::None.apply(0.99), 0.0);
        assert_eq!(EasingType::None.apply(1.0), 1.0);
    }

    #[test]
    fn test_monotonic() {
        for easing in CURVES {
            let mut prev = 0.0;
            for i in 0..=20 {
                let v = easing.apply(i as f64 / 20.0);
                assert!(v >= prev, "{:?} dips at step {}", easing, i);
                prev = v;
            }
        }
    }

    #[test]
    fn test_out_of_range_input_clamped() {
        assert_eq!(EasingType::Linear.apply(-1.0), 0.0);
        assert_eq!(EasingType::Linear.apply(3.0), 1.0);
    }

    #[test]
    fn test_sine_symmetric() {
        assert!(ease_in_out_sine(0.0).abs() < 1e-9);
        assert!((ease_in_out_sine(0.5) - 0.5).abs() < 1e-9);
        assert!((ease_in_out_sine(1.0) - 1.0).abs() < 1e-9);
    }
}
