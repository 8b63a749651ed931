//! Named easing curves for carousel animations.
//!
//! Names follow the jQuery / Penner convention (`linear`, `swing`,
//! `easeOutCubic`, `easeOutElastic`, ...) so option blobs written for the
//! classic plugin keep working. Every curve maps 0 → 0 and 1 → 1; the
//! elastic and back families overshoot in between.

use std::f64::consts::PI;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Easing functions applied to a linear time fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Easing {
    Linear,
    /// jQuery's built-in default: half a cosine period.
    Swing,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInExpo,
    EaseOutExpo,
    EaseInOutExpo,
    EaseInCirc,
    EaseOutCirc,
    EaseInOutCirc,
    EaseInElastic,
    EaseOutElastic,
    EaseInOutElastic,
    EaseInBack,
    EaseOutBack,
    EaseInOutBack,
    EaseInBounce,
    EaseOutBounce,
    EaseInOutBounce,
}

const NAMES: &[(&str, Easing)] = &[
    ("linear", Easing::Linear),
    ("swing", Easing::Swing),
    ("easeInQuad", Easing::EaseInQuad),
    ("easeOutQuad", Easing::EaseOutQuad),
    ("easeInOutQuad", Easing::EaseInOutQuad),
    ("easeInCubic", Easing::EaseInCubic),
    ("easeOutCubic", Easing::EaseOutCubic),
    ("easeInOutCubic", Easing::EaseInOutCubic),
    ("easeInQuart", Easing::EaseInQuart),
    ("easeOutQuart", Easing::EaseOutQuart),
    ("easeInOutQuart", Easing::EaseInOutQuart),
    ("easeInQuint", Easing::EaseInQuint),
    ("easeOutQuint", Easing::EaseOutQuint),
    ("easeInOutQuint", Easing::EaseInOutQuint),
    ("easeInSine", Easing::EaseInSine),
    ("easeOutSine", Easing::EaseOutSine),
    ("easeInOutSine", Easing::EaseInOutSine),
    ("easeInExpo", Easing::EaseInExpo),
    ("easeOutExpo", Easing::EaseOutExpo),
    ("easeInOutExpo", Easing::EaseInOutExpo),
    ("easeInCirc", Easing::EaseInCirc),
    ("easeOutCirc", Easing::EaseOutCirc),
    ("easeInOutCirc", Easing::EaseInOutCirc),
    ("easeInElastic", Easing::EaseInElastic),
    ("easeOutElastic", Easing::EaseOutElastic),
    ("easeInOutElastic", Easing::EaseInOutElastic),
    ("easeInBack", Easing::EaseInBack),
    ("easeOutBack", Easing::EaseOutBack),
    ("easeInOutBack", Easing::EaseInOutBack),
    ("easeInBounce", Easing::EaseInBounce),
    ("easeOutBounce", Easing::EaseOutBounce),
    ("easeInOutBounce", Easing::EaseInOutBounce),
];

// Penner's constants for the back and elastic families.
const BACK_OVERSHOOT: f64 = 1.70158;
const ELASTIC_PERIOD: f64 = 0.3;

impl Easing {
    /// Look up an easing by its jQuery name. Returns `None` for unknown names.
    pub fn lookup(name: &str) -> Option<Easing> {
        NAMES.iter().find(|(n, _)| *n == name).map(|&(_, e)| e)
    }

    /// Look up an easing by name, falling back to `Linear` for unknown names.
    pub fn from_name(name: &str) -> Easing {
        Self::lookup(name).unwrap_or_else(|| {
            log::warn!("Unknown easing \"{}\", using linear", name);
            Easing::Linear
        })
    }

    pub fn name(&self) -> &'static str {
        NAMES
            .iter()
            .find(|(_, e)| e == self)
            .map(|(n, _)| *n)
            .unwrap_or("linear")
    }

    /// Apply the easing to a linear fraction. Input is clamped to `[0, 1]`.
    pub fn transform(&self, fraction: f64) -> f64 {
        let t = fraction.clamp(0.0, 1.0);
        if t == 0.0 {
            return 0.0;
        }
        if t == 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::Swing => 0.5 - (t * PI).cos() / 2.0,

            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => t * (2.0 - t),
            Easing::EaseInOutQuad => in_out(t, |x| x * x),

            Easing::EaseInCubic => t.powi(3),
            Easing::EaseOutCubic => (t - 1.0).powi(3) + 1.0,
            Easing::EaseInOutCubic => in_out(t, |x| x.powi(3)),

            Easing::EaseInQuart => t.powi(4),
            Easing::EaseOutQuart => 1.0 - (t - 1.0).powi(4),
            Easing::EaseInOutQuart => in_out(t, |x| x.powi(4)),

            Easing::EaseInQuint => t.powi(5),
            Easing::EaseOutQuint => (t - 1.0).powi(5) + 1.0,
            Easing::EaseInOutQuint => in_out(t, |x| x.powi(5)),

            Easing::EaseInSine => 1.0 - (t * PI / 2.0).cos(),
            Easing::EaseOutSine => (t * PI / 2.0).sin(),
            Easing::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,

            Easing::EaseInExpo => 2f64.powf(10.0 * (t - 1.0)),
            Easing::EaseOutExpo => 1.0 - 2f64.powf(-10.0 * t),
            Easing::EaseInOutExpo => in_out(t, |x| 2f64.powf(10.0 * (x - 1.0))),

            Easing::EaseInCirc => 1.0 - (1.0 - t * t).sqrt(),
            Easing::EaseOutCirc => (1.0 - (t - 1.0).powi(2)).sqrt(),
            Easing::EaseInOutCirc => in_out(t, |x| 1.0 - (1.0 - x * x).sqrt()),

            Easing::EaseInElastic => elastic_in(t, ELASTIC_PERIOD),
            Easing::EaseOutElastic => 1.0 - elastic_in(1.0 - t, ELASTIC_PERIOD),
            Easing::EaseInOutElastic => in_out(t, |x| elastic_in(x, ELASTIC_PERIOD * 1.5)),

            Easing::EaseInBack => back_in(t, BACK_OVERSHOOT),
            Easing::EaseOutBack => 1.0 - back_in(1.0 - t, BACK_OVERSHOOT),
            Easing::EaseInOutBack => in_out(t, |x| back_in(x, BACK_OVERSHOOT * 1.525)),

            Easing::EaseInBounce => 1.0 - bounce_out(1.0 - t),
            Easing::EaseOutBounce => bounce_out(t),
            Easing::EaseInOutBounce => in_out(t, |x| 1.0 - bounce_out(1.0 - x)),
        }
    }
}

/// Build an in-out curve from an ease-in curve: first half eases in, second
/// half is the mirrored ease-in.
fn in_out(t: f64, ease_in: impl Fn(f64) -> f64) -> f64 {
    if t < 0.5 {
        ease_in(t * 2.0) / 2.0
    } else {
        1.0 - ease_in((1.0 - t) * 2.0) / 2.0
    }
}

fn elastic_in(t: f64, period: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let s = period / 4.0;
    let t = t - 1.0;
    -(2f64.powf(10.0 * t) * ((t - s) * 2.0 * PI / period).sin())
}

fn back_in(t: f64, s: f64) -> f64 {
    t * t * ((s + 1.0) * t - s)
}

fn bounce_out(t: f64) -> f64 {
    const N: f64 = 7.5625;
    const D: f64 = 2.75;
    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        N * t * t + 0.984375
    }
}

impl Serialize for Easing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Easing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Easing::from_name(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_fixed() {
        for &(name, easing) in NAMES {
            assert_eq!(easing.transform(0.0), 0.0, "{name} at 0");
            assert_eq!(easing.transform(1.0), 1.0, "{name} at 1");
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(Easing::EaseOutCubic.transform(-0.5), 0.0);
        assert_eq!(Easing::EaseOutCubic.transform(3.0), 1.0);
    }

    #[test]
    fn test_lookup_roundtrips_names() {
        for &(name, easing) in NAMES {
            assert_eq!(Easing::lookup(name), Some(easing));
            assert_eq!(easing.name(), name);
        }
    }

    #[test]
    fn test_unknown_name_falls_back_to_linear() {
        assert_eq!(Easing::lookup("easeOutWobble"), None);
        assert_eq!(Easing::from_name("easeOutWobble"), Easing::Linear);
        assert_eq!(Easing::from_name(""), Easing::Linear);
    }

    #[test]
    fn test_swing_is_symmetric_around_midpoint() {
        assert!((Easing::Swing.transform(0.5) - 0.5).abs() < 1e-12);
        let a = Easing::Swing.transform(0.2);
        let b = Easing::Swing.transform(0.8);
        assert!((a + b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ease_out_cubic_leads_linear() {
        for i in 1..10 {
            let t = i as f64 / 10.0;
            assert!(Easing::EaseOutCubic.transform(t) > t);
        }
    }

    #[test]
    fn test_elastic_out_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::EaseOutElastic.transform(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0, "peak was {peak}");
    }

    #[test]
    fn test_bounce_out_stays_in_range() {
        for i in 0..=100 {
            let v = Easing::EaseOutBounce.transform(i as f64 / 100.0);
            assert!((0.0..=1.0 + 1e-9).contains(&v), "{v}");
        }
    }

    #[test]
    fn test_in_out_curves_pass_through_half() {
        for easing in [
            Easing::EaseInOutQuad,
            Easing::EaseInOutCubic,
            Easing::EaseInOutQuart,
            Easing::EaseInOutQuint,
            Easing::EaseInOutSine,
            Easing::EaseInOutCirc,
        ] {
            assert!((easing.transform(0.5) - 0.5).abs() < 1e-9, "{easing:?}");
        }
    }

    #[test]
    fn test_deserialize_from_json_string() {
        let e: Easing = serde_json::from_str("\"easeOutBounce\"").unwrap();
        assert_eq!(e, Easing::EaseOutBounce);
        let e: Easing = serde_json::from_str("\"nope\"").unwrap();
        assert_eq!(e, Easing::Linear);
    }
}
