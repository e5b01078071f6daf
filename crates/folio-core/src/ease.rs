//! Easing curves used by the tween engine.
//!
//! Curve names follow the timeline convention `family.direction`, e.g.
//! `power2.out`, `sine.inOut`, `back.out(1.7)`, `elastic.out(1, 0.3)`. The
//! `powerN` families map to polynomial degree `N + 1`.

use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
    InOut,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    /// `power{1..4}`; the exponent is `degree + 1`.
    Power(u8, Direction),
    SineInOut,
    /// Overshooting ease-out with the given overshoot factor.
    BackOut(f32),
    /// Damped spring ease-out: `(amplitude, period)`.
    ElasticOut(f32, f32),
}

impl Default for Easing {
    fn default() -> Self {
        Self::Power(1, Direction::Out)
    }
}

impl Easing {
    /// Map linear progress `t` to eased progress. `t` is clamped to [0, 1] and
    /// both endpoints map exactly onto themselves.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match *self {
            Self::Linear => t,
            Self::Power(degree, dir) => {
                let n = i32::from(degree.clamp(1, 4)) + 1;
                match dir {
                    Direction::In => t.powi(n),
                    Direction::Out => 1.0 - (1.0 - t).powi(n),
                    Direction::InOut => {
                        if t < 0.5 {
                            (2.0 * t).powi(n) / 2.0
                        } else {
                            1.0 - (2.0 * (1.0 - t)).powi(n) / 2.0
                        }
                    }
                }
            }
            Self::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Self::BackOut(s) => {
                let p = t - 1.0;
                p * p * ((s + 1.0) * p + s) + 1.0
            }
            Self::ElasticOut(amplitude, period) => {
                let a = amplitude.max(1.0);
                let period = period.max(1e-3) / amplitude.clamp(1e-3, 1.0);
                let shift = period / TAU * (1.0 / a).asin();
                a * 2f32.powf(-10.0 * t) * ((t - shift) * TAU / period).sin() + 1.0
            }
        }
    }

    /// Parse a timeline-style curve name. Unknown names fall back to the
    /// default `power1.out`.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        let (head, args) = match name.find('(') {
            Some(i) => (&name[..i], name[i + 1..].trim_end_matches(')')),
            None => (name, ""),
        };
        let args: Vec<f32> = args
            .split(',')
            .filter_map(|a| a.trim().parse::<f32>().ok())
            .collect();
        let (family, dir) = match head.split_once('.') {
            Some((f, d)) => (f, d),
            None => (head, "out"),
        };
        let dir = match dir {
            "in" => Direction::In,
            "inOut" | "in-out" | "inout" => Direction::InOut,
            _ => Direction::Out,
        };
        match family {
            "none" | "linear" => Self::Linear,
            "power1" | "quad" => Self::Power(1, dir),
            "power2" | "cubic" => Self::Power(2, dir),
            "power3" | "quart" => Self::Power(3, dir),
            "power4" | "quint" => Self::Power(4, dir),
            "sine" => Self::SineInOut,
            "back" => Self::BackOut(args.first().copied().unwrap_or(1.70158)),
            "elastic" => Self::ElasticOut(
                args.first().copied().unwrap_or(1.0),
                args.get(1).copied().unwrap_or(0.3),
            ),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for e in [
            Easing::Linear,
            Easing::Power(2, Direction::InOut),
            Easing::Power(4, Direction::In),
            Easing::SineInOut,
            Easing::BackOut(1.7),
            Easing::ElasticOut(1.0, 0.3),
        ] {
            assert_eq!(e.apply(0.0), 0.0, "{e:?}");
            assert_eq!(e.apply(1.0), 1.0, "{e:?}");
            assert_eq!(e.apply(-3.0), 0.0, "{e:?}");
            assert_eq!(e.apply(7.0), 1.0, "{e:?}");
        }
    }

    #[test]
    fn back_and_elastic_overshoot() {
        let back_peak = (1..100)
            .map(|i| Easing::BackOut(1.7).apply(i as f32 / 100.0))
            .fold(0.0_f32, f32::max);
        assert!(back_peak > 1.0);
        let elastic_peak = (1..100)
            .map(|i| Easing::ElasticOut(1.0, 0.3).apply(i as f32 / 100.0))
            .fold(0.0_f32, f32::max);
        assert!(elastic_peak > 1.0);
    }

    #[test]
    fn parses_names() {
        assert_eq!(Easing::from_name("none"), Easing::Linear);
        assert_eq!(
            Easing::from_name("power2.inOut"),
            Easing::Power(2, Direction::InOut)
        );
        assert_eq!(Easing::from_name("power3.out"), Easing::Power(3, Direction::Out));
        assert_eq!(Easing::from_name("sine.inOut"), Easing::SineInOut);
        assert_eq!(Easing::from_name("back.out(1.7)"), Easing::BackOut(1.7));
        assert_eq!(
            Easing::from_name("elastic.out(1, 0.3)"),
            Easing::ElasticOut(1.0, 0.3)
        );
        assert_eq!(Easing::from_name("mystery"), Easing::default());
    }
}
