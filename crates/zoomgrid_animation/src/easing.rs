//! Easing functions for animations

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Default amplitude for elastic curves
pub const DEFAULT_ELASTIC_AMPLITUDE: f32 = 1.0;
/// Default period for elastic curves
pub const DEFAULT_ELASTIC_PERIOD: f32 = 0.3;
/// Default overshoot for back curves
pub const DEFAULT_BACK_OVERSHOOT: f32 = 1.70158;

/// Easing function type
///
/// Serialized with a `type` tag, e.g.
/// `{ type = "out-elastic", amplitude = 0.7, period = 1.0 }`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    /// Overshoots the target once, then settles
    OutBack {
        #[serde(default = "default_overshoot")]
        overshoot: f32,
    },
    /// Winds up with growing oscillation before launching
    InElastic {
        #[serde(default = "default_amplitude")]
        amplitude: f32,
        #[serde(default = "default_period")]
        period: f32,
    },
    /// Overshoots and rings around the target with decaying oscillation
    OutElastic {
        #[serde(default = "default_amplitude")]
        amplitude: f32,
        #[serde(default = "default_period")]
        period: f32,
    },
    CubicBezier {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    },
}

fn default_amplitude() -> f32 {
    DEFAULT_ELASTIC_AMPLITUDE
}

fn default_period() -> f32 {
    DEFAULT_ELASTIC_PERIOD
}

fn default_overshoot() -> f32 {
    DEFAULT_BACK_OVERSHOOT
}

impl Default for Easing {
    fn default() -> Self {
        Easing::out_elastic(DEFAULT_ELASTIC_AMPLITUDE, DEFAULT_ELASTIC_PERIOD)
    }
}

impl Easing {
    pub fn out_elastic(amplitude: f32, period: f32) -> Self {
        Easing::OutElastic { amplitude, period }
    }

    pub fn in_elastic(amplitude: f32, period: f32) -> Self {
        Easing::InElastic { amplitude, period }
    }

    pub fn out_back(overshoot: f32) -> Self {
        Easing::OutBack { overshoot }
    }

    pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Easing::CubicBezier { x1, y1, x2, y2 }
    }

    /// True for curves whose output leaves the [0, 1] range
    pub fn overshoots(&self) -> bool {
        matches!(
            self,
            Easing::OutBack { .. } | Easing::InElastic { .. } | Easing::OutElastic { .. }
        )
    }

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::OutBack { overshoot } => {
                let s = *overshoot;
                let t = t - 1.0;
                t * t * ((s + 1.0) * t + s) + 1.0
            }
            Easing::InElastic { amplitude, period } => in_elastic(t, *amplitude, *period),
            Easing::OutElastic { amplitude, period } => out_elastic(t, *amplitude, *period),
            Easing::CubicBezier { x1, y1, x2, y2 } => cubic_bezier_ease(t, *x1, *y1, *x2, *y2),
        }
    }
}

/// Phase shift for an elastic curve. Amplitudes below 1 are raised to 1 so
/// the curve still reaches the target.
fn elastic_shape(amplitude: f32, period: f32) -> (f64, f64, f64) {
    let period = if period > 0.0 { period as f64 } else { 0.3 };
    let amplitude = amplitude as f64;
    if amplitude < 1.0 {
        (1.0, period, period / 4.0)
    } else {
        (amplitude, period, period / (2.0 * PI) * (1.0 / amplitude).asin())
    }
}

fn out_elastic(t: f32, amplitude: f32, period: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let (a, p, s) = elastic_shape(amplitude, period);
    let t = t as f64;
    (a * 2f64.powf(-10.0 * t) * ((t - s) * (2.0 * PI) / p).sin() + 1.0) as f32
}

fn in_elastic(t: f32, amplitude: f32, period: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let (a, p, s) = elastic_shape(amplitude, period);
    let t = t as f64 - 1.0;
    (-(a * 2f64.powf(10.0 * t) * ((t - s) * (2.0 * PI) / p).sin())) as f32
}

/// Cubic bezier easing calculation (matches CSS spec / browser implementations).
///
/// Uses Newton-Raphson with binary-search fallback for robustness.
fn cubic_bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let x = t as f64;
    let x1 = x1 as f64;
    let y1 = y1 as f64;
    let x2 = x2 as f64;
    let y2 = y2 as f64;

    let mut p = x;
    for _ in 0..8 {
        let err = bezier_sample(p, x1, x2) - x;
        if err.abs() < 1e-7 {
            return bezier_sample(p, y1, y2) as f32;
        }
        let slope = bezier_slope(p, x1, x2);
        if slope.abs() < 1e-7 {
            break; // slope too flat, switch to binary search
        }
        p -= err / slope;
    }

    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    p = x;
    for _ in 0..20 {
        let val = bezier_sample(p, x1, x2);
        if (val - x).abs() < 1e-7 {
            break;
        }
        if val < x {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    bezier_sample(p, y1, y2) as f32
}

/// B(t) = 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³
#[inline]
fn bezier_sample(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

#[inline]
fn bezier_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_curves() -> Vec<Easing> {
        vec![
            Easing::Linear,
            Easing::EaseInOut,
            Easing::EaseOutQuad,
            Easing::EaseInOutCubic,
            Easing::out_back(DEFAULT_BACK_OVERSHOOT),
            Easing::in_elastic(1.0, 0.3),
            Easing::out_elastic(0.7, 1.0),
            Easing::default(),
            Easing::cubic_bezier(0.25, 0.1, 0.25, 1.0),
        ]
    }

    #[test]
    fn test_endpoints_are_exact() {
        for easing in all_curves() {
            assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_default_is_elastic() {
        assert_eq!(Easing::default(), Easing::out_elastic(1.0, 0.3));
        assert!(Easing::default().overshoots());
        assert!(!Easing::Linear.overshoots());
    }

    #[test]
    fn test_out_elastic_overshoots_target() {
        let easing = Easing::default();
        let peak = (1..100)
            .map(|i| easing.apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_small_amplitude_is_raised_to_one() {
        let low = Easing::out_elastic(0.2, 0.4);
        let one = Easing::out_elastic(1.0, 0.4);
        for i in 1..10 {
            let t = i as f32 / 10.0;
            assert!((low.apply(t) - one.apply(t)).abs() < 1e-4);
        }
    }

    #[test]
    fn test_out_back_dips_past_target() {
        let easing = Easing::out_back(DEFAULT_BACK_OVERSHOOT);
        assert!(easing.apply(0.8) > 1.0);
    }

    #[test]
    fn test_serde_tagged_form() {
        #[derive(Deserialize)]
        struct Holder {
            easing: Easing,
        }

        let parsed: Holder =
            toml::from_str("easing = { type = \"out-elastic\", amplitude = 0.7 }").unwrap();
        assert_eq!(parsed.easing, Easing::out_elastic(0.7, DEFAULT_ELASTIC_PERIOD));

        let parsed: Holder = toml::from_str("easing = { type = \"linear\" }").unwrap();
        assert_eq!(parsed.easing, Easing::Linear);
    }
}
