//! Conversion between RGB channels and hue-saturation-lightness.
//!
//! HSL values here are fractions, not degrees or percentages: hue is a
//! fraction of a full turn in `[0, 1)`, saturation, lightness and alpha are
//! in `[0, 1]`. Going RGB -> HSL -> RGB may move a channel by one step
//! because channels are whole numbers on a 0-255 scale.

use crate::channel::{CHANNEL_MAX, normalize_channel};
use crate::color::Color;
use crate::error::{Channel, Result};

/// A transient hue-saturation-lightness value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// Fraction of a full turn, `0.0..1.0`.
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    /// `1.0` is fully opaque.
    pub alpha: f64,
}

impl Hsl {
    /// Creates an opaque HSL value.
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha: 1.0,
        }
    }

    /// Returns a copy with the given alpha fraction.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Hue in degrees, `0.0..360.0`.
    pub fn hue_degrees(&self) -> f64 {
        self.hue * 360.0
    }
}

/// Evaluates one channel of the HSL -> RGB piecewise function.
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Converts HSL fractions to RGB fractions, each in `[0, 1]`.
pub fn hsl_to_rgb_fractions(hsl: &Hsl) -> (f64, f64, f64) {
    let Hsl {
        hue: h,
        saturation: s,
        lightness: l,
        ..
    } = *hsl;

    if s == 0.0 {
        return (l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    (
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

/// Converts an HSL value into a validated [`Color`].
///
/// Each fraction is scaled by 255 and passed through
/// [`normalize_channel`], alpha included.
///
/// # Errors
///
/// Channel errors from [`normalize_channel`] when an input fraction lies
/// outside `[0, 1]` far enough to leave the channel range, or is NaN.
pub fn hsl_to_rgb(hsl: &Hsl) -> Result<Color> {
    let (r, g, b) = hsl_to_rgb_fractions(hsl);
    let color = Color::from_u8(
        normalize_channel(Channel::Red, r * CHANNEL_MAX)?,
        normalize_channel(Channel::Green, g * CHANNEL_MAX)?,
        normalize_channel(Channel::Blue, b * CHANNEL_MAX)?,
        normalize_channel(Channel::Alpha, hsl.alpha * CHANNEL_MAX)?,
    );
    log::trace!("{hsl:?} -> {color:?}");
    Ok(color)
}

/// Converts a [`Color`] into its HSL representation.
pub fn rgb_to_hsl(color: &Color) -> Hsl {
    let r = f64::from(color.red()) / CHANNEL_MAX;
    let g = f64::from(color.green()) / CHANNEL_MAX;
    let b = f64::from(color.blue()) / CHANNEL_MAX;
    let alpha = f64::from(color.alpha()) / CHANNEL_MAX;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    if max == min {
        return Hsl {
            hue: 0.0,
            saturation: 0.0,
            lightness,
            alpha,
        };
    }

    let delta = max - min;
    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };
    let hue = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl {
        hue: hue / 6.0,
        saturation,
        lightness,
        alpha,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn primary_hues() {
        let red = hsl_to_rgb(&Hsl::new(0.0, 1.0, 0.5)).unwrap();
        assert_eq!(red.rgba(), (255, 0, 0, 255));

        let green = hsl_to_rgb(&Hsl::new(1.0 / 3.0, 1.0, 0.5)).unwrap();
        assert_eq!(green.rgba(), (0, 255, 0, 255));

        let blue = hsl_to_rgb(&Hsl::new(2.0 / 3.0, 1.0, 0.5)).unwrap();
        assert_eq!(blue.rgba(), (0, 0, 255, 255));
    }

    #[test]
    fn achromatic_uses_lightness() {
        let (r, g, b) = hsl_to_rgb_fractions(&Hsl::new(0.7, 0.0, 0.25));
        assert_eq!((r, g, b), (0.25, 0.25, 0.25));

        let gray = hsl_to_rgb(&Hsl::new(0.0, 0.0, 0.5)).unwrap();
        assert_eq!(gray.rgba(), (128, 128, 128, 255));
    }

    #[test]
    fn alpha_is_scaled() {
        let color = hsl_to_rgb(&Hsl::new(0.0, 1.0, 0.5).with_alpha(0.5)).unwrap();
        assert_eq!(color.alpha(), 128);

        let clear = hsl_to_rgb(&Hsl::new(0.0, 1.0, 0.5).with_alpha(0.0)).unwrap();
        assert_eq!(clear.alpha(), 0);
    }

    #[test]
    fn out_of_range_lightness_fails() {
        assert!(hsl_to_rgb(&Hsl::new(0.0, 0.0, 1.5)).is_err());
        assert!(hsl_to_rgb(&Hsl::new(0.0, 1.0, 0.5).with_alpha(2.0)).is_err());
    }

    #[test]
    fn red_to_hsl() {
        let hsl = rgb_to_hsl(&Color::from_u8(255, 0, 0, 255));
        assert!(approx(hsl.hue, 0.0));
        assert!(approx(hsl.saturation, 1.0));
        assert!(approx(hsl.lightness, 0.5));
        assert!(approx(hsl.alpha, 1.0));
    }

    #[test]
    fn hue_branches() {
        // max on red with g < b wraps past 300 degrees
        let hsl = rgb_to_hsl(&Color::from_u8(255, 0, 128, 255));
        assert!(hsl.hue > 0.8 && hsl.hue < 1.0);

        let hsl = rgb_to_hsl(&Color::from_u8(0, 255, 0, 255));
        assert!(approx(hsl.hue_degrees(), 120.0));

        let hsl = rgb_to_hsl(&Color::from_u8(0, 0, 255, 255));
        assert!(approx(hsl.hue_degrees(), 240.0));
    }

    #[test]
    fn light_colors_use_upper_saturation_formula() {
        // lightness > 0.5
        let hsl = rgb_to_hsl(&Color::from_u8(255, 128, 128, 255));
        assert!(hsl.lightness > 0.5);
        assert!(approx(hsl.saturation, 1.0));
    }

    #[test]
    fn gray_is_achromatic() {
        let hsl = rgb_to_hsl(&Color::from_u8(40, 40, 40, 0));
        assert_eq!(hsl.hue, 0.0);
        assert_eq!(hsl.saturation, 0.0);
        assert_eq!(hsl.alpha, 0.0);
    }

    #[test]
    fn round_trip_within_one_step() {
        for r in (0..=255u8).step_by(17) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(51) {
                    let original = Color::from_u8(r, g, b, 200);
                    let back = hsl_to_rgb(&rgb_to_hsl(&original)).unwrap();
                    for channel in Channel::ALL {
                        let diff = i16::from(original.channel(channel))
                            - i16::from(back.channel(channel));
                        assert!(diff.abs() <= 1, "{original:?} -> {back:?}");
                    }
                }
            }
        }
    }
}
