/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::component::{bound, clamp01, Component};
use crate::convert;
use crate::named;
use crate::parser::{self, ColorParseError};
use crate::serializer::ToCss;

/// A color resolved to canonical RGB plus alpha.
///
/// The red, green and blue channels live on the `[0, 255]` scale and the
/// alpha channel in `[0, 1]`. A `Color` is never mutated once constructed;
/// every view is computed from the canonical channels on demand, and the
/// operations in this crate always return a new `Color`.
///
/// Channels resolved to the open interval `(0, 1)` are rounded to 0 or 1 at
/// construction so that a fraction of the full scale and a fraction of a
/// single channel step cannot be confused downstream.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
    valid: bool,
}

/// A rounded RGB triple, as produced by [`Color::to_rgb`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    /// The red channel, 0 to 255.
    pub red: u8,
    /// The green channel, 0 to 255.
    pub green: u8,
    /// The blue channel, 0 to 255.
    pub blue: u8,
}

/// An HSL triple. Every field is a fraction in `[0, 1]`; hue wraps rather
/// than clamps when converted.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hsl {
    /// The hue, as a fraction of a full turn.
    pub hue: f64,
    /// The saturation.
    pub saturation: f64,
    /// The lightness.
    pub lightness: f64,
}

/// An HSV triple. Every field is a fraction in `[0, 1]`; hue wraps rather
/// than clamps when converted.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hsv {
    /// The hue, as a fraction of a full turn.
    pub hue: f64,
    /// The saturation.
    pub saturation: f64,
    /// The value.
    pub value: f64,
}

/// A structured color record whose channels still carry their written units.
///
/// This is the flexible boundary form: each channel is a [`Component`] and is
/// normalized against its context maximum (255 for RGB channels, 360 for
/// hue, 100 for saturation/lightness/value, 1 for alpha) when the record is
/// resolved into a [`Color`]. Alpha defaults to 1 when absent.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorSpec {
    /// A record in the RGB color model.
    Rgb {
        /// The red channel, bounded against 255.
        red: Component,
        /// The green channel, bounded against 255.
        green: Component,
        /// The blue channel, bounded against 255.
        blue: Component,
        /// The alpha channel, bounded against 1.
        alpha: Option<Component>,
    },
    /// A record in the HSL color model.
    Hsl {
        /// The hue, bounded against 360.
        hue: Component,
        /// The saturation, bounded against 100.
        saturation: Component,
        /// The lightness, bounded against 100.
        lightness: Component,
        /// The alpha channel, bounded against 1.
        alpha: Option<Component>,
    },
    /// A record in the HSV color model.
    Hsv {
        /// The hue, bounded against 360.
        hue: Component,
        /// The saturation, bounded against 100.
        saturation: Component,
        /// The value, bounded against 100.
        value: Component,
        /// The alpha channel, bounded against 1.
        alpha: Option<Component>,
    },
}

impl Color {
    /// Resolve any supported input into a `Color`.
    ///
    /// Accepts everything with an `Into<Color>` conversion: color strings
    /// (falling back to opaque white with [`is_valid`](Color::is_valid)
    /// `false` when unrecognized), [`ColorSpec`] records, the [`Rgb`]/
    /// [`Hsl`]/[`Hsv`] views, and an existing `Color`, which passes through
    /// unchanged.
    #[inline]
    pub fn make<I: Into<Color>>(input: I) -> Self {
        input.into()
    }

    /// Parse a color string.
    ///
    /// Unlike [`Color::make`], unrecognized or malformed input is reported
    /// as an error instead of defaulting to white.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        parser::parse_color_string(input).map(Color::from)
    }

    /// Returns transparent black, the value of the `transparent` keyword.
    #[inline]
    pub fn transparent() -> Self {
        Self::resolved(0., 0., 0., 0., true)
    }

    /// Whether the input this color came from was recognized.
    ///
    /// `false` means the input failed to parse and this color is the opaque
    /// white fallback.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The alpha channel, a fraction in `[0, 1]`.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The HSL view of this color.
    pub fn to_hsl(&self) -> Hsl {
        let (hue, saturation, lightness) = convert::rgb_to_hsl(
            bound(Component::Number(self.red), 255.),
            bound(Component::Number(self.green), 255.),
            bound(Component::Number(self.blue), 255.),
        );
        Hsl {
            hue,
            saturation,
            lightness,
        }
    }

    /// The HSL view serialized as `hsl(h, s%, l%)`, or `hsla(h, s%, l%, a)`
    /// when the alpha channel is not 1.
    pub fn to_hsl_string(&self) -> String {
        let mut dest = String::new();
        self.write_hsl(&mut dest).unwrap();
        dest
    }

    /// The HSV view of this color.
    pub fn to_hsv(&self) -> Hsv {
        let (hue, saturation, value) = convert::rgb_to_hsv(
            bound(Component::Number(self.red), 255.),
            bound(Component::Number(self.green), 255.),
            bound(Component::Number(self.blue), 255.),
        );
        Hsv {
            hue,
            saturation,
            value,
        }
    }

    /// The HSV view serialized as `hsv(h, s%, v%)`. There is no alpha form.
    pub fn to_hsv_string(&self) -> String {
        self.to_hsv().to_css_string()
    }

    /// The rounded RGB view of this color.
    pub fn to_rgb(&self) -> Rgb {
        Rgb {
            red: self.red.round() as u8,
            green: self.green.round() as u8,
            blue: self.blue.round() as u8,
        }
    }

    /// The RGB view serialized as `rgb(r, g, b)`, or `rgba(r, g, b, a)` when
    /// the alpha channel is not 1.
    pub fn to_rgb_string(&self) -> String {
        self.to_css_string()
    }

    /// The bare six-digit lowercase hex serialization, without `#`.
    pub fn to_hex(&self) -> String {
        convert::rgb_to_hex(self.red, self.green, self.blue)
    }

    /// The `#`-prefixed six-digit lowercase hex serialization.
    pub fn to_hex_string(&self) -> String {
        format!("#{}", self.to_hex())
    }

    /// The CSS3 keyword naming exactly this color, if one exists.
    ///
    /// The lookup is by six-digit hex, so alpha is not considered.
    pub fn to_name(&self) -> Option<&'static str> {
        named::name_for_hex(&self.to_hex())
    }

    fn write_hsl<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        let hsl = self.to_hsl();
        let serialize_alpha = self.alpha != 1.;

        dest.write_str(if serialize_alpha { "hsla(" } else { "hsl(" })?;
        ((hsl.hue * 360.).round() as i32).to_css(dest)?;
        dest.write_str(", ")?;
        ((hsl.saturation * 100.).round() as i32).to_css(dest)?;
        dest.write_str("%, ")?;
        ((hsl.lightness * 100.).round() as i32).to_css(dest)?;
        dest.write_str("%")?;
        if serialize_alpha {
            dest.write_str(", ")?;
            (self.alpha as f32).to_css(dest)?;
        }
        dest.write_char(')')
    }

    /// Clamp resolved channels into their canonical ranges.
    pub(crate) fn resolved(red: f64, green: f64, blue: f64, alpha: f64, valid: bool) -> Self {
        // Keep resolved channels out of the ambiguous (0, 1) band; see the
        // type documentation.
        let snap = |channel: f64| -> f64 {
            let channel = channel.max(0.).min(255.);
            if channel < 1. {
                channel.round()
            } else {
                channel
            }
        };

        Color {
            red: snap(red),
            green: snap(green),
            blue: snap(blue),
            alpha: clamp01(alpha),
            valid,
        }
    }

    /// The opaque-white fallback for unrecognized input.
    pub(crate) fn unrecognized() -> Self {
        Color {
            red: 255.,
            green: 255.,
            blue: 255.,
            alpha: 1.,
            valid: false,
        }
    }
}

impl ToCss for Color {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        let serialize_alpha = self.alpha != 1.;

        dest.write_str(if serialize_alpha { "rgba(" } else { "rgb(" })?;
        (self.red.round() as i32).to_css(dest)?;
        dest.write_str(", ")?;
        (self.green.round() as i32).to_css(dest)?;
        dest.write_str(", ")?;
        (self.blue.round() as i32).to_css(dest)?;
        if serialize_alpha {
            dest.write_str(", ")?;
            (self.alpha as f32).to_css(dest)?;
        }
        dest.write_char(')')
    }
}

impl ToCss for Rgb {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        dest.write_str("rgb(")?;
        (self.red as i32).to_css(dest)?;
        dest.write_str(", ")?;
        (self.green as i32).to_css(dest)?;
        dest.write_str(", ")?;
        (self.blue as i32).to_css(dest)?;
        dest.write_char(')')
    }
}

impl ToCss for Hsl {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        dest.write_str("hsl(")?;
        ((self.hue * 360.).round() as i32).to_css(dest)?;
        dest.write_str(", ")?;
        ((self.saturation * 100.).round() as i32).to_css(dest)?;
        dest.write_str("%, ")?;
        ((self.lightness * 100.).round() as i32).to_css(dest)?;
        dest.write_str("%)")
    }
}

impl ToCss for Hsv {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        dest.write_str("hsv(")?;
        ((self.hue * 360.).round() as i32).to_css(dest)?;
        dest.write_str(", ")?;
        ((self.saturation * 100.).round() as i32).to_css(dest)?;
        dest.write_str("%, ")?;
        ((self.value * 100.).round() as i32).to_css(dest)?;
        dest.write_str("%)")
    }
}

impl From<ColorSpec> for Color {
    fn from(spec: ColorSpec) -> Self {
        let (red, green, blue, alpha) = match spec {
            ColorSpec::Rgb {
                red,
                green,
                blue,
                alpha,
            } => (
                bound(red, 255.) * 255.,
                bound(green, 255.) * 255.,
                bound(blue, 255.) * 255.,
                alpha,
            ),
            ColorSpec::Hsl {
                hue,
                saturation,
                lightness,
                alpha,
            } => {
                let (red, green, blue) = convert::hsl_to_rgb(
                    bound(hue, 360.),
                    bound(saturation, 100.),
                    bound(lightness, 100.),
                );
                (red, green, blue, alpha)
            }
            ColorSpec::Hsv {
                hue,
                saturation,
                value,
                alpha,
            } => {
                let (red, green, blue) = convert::hsv_to_rgb(
                    bound(hue, 360.),
                    bound(saturation, 100.),
                    bound(value, 100.),
                );
                (red, green, blue, alpha)
            }
        };

        let alpha = alpha.map_or(1., |a| bound(a, 1.));
        Color::resolved(red, green, blue, alpha, true)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::resolved(rgb.red as f64, rgb.green as f64, rgb.blue as f64, 1., true)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        let (red, green, blue) = convert::hsl_to_rgb(
            hsl.hue % 1.,
            clamp01(hsl.saturation),
            clamp01(hsl.lightness),
        );
        Color::resolved(red, green, blue, 1., true)
    }
}

impl From<Hsv> for Color {
    fn from(hsv: Hsv) -> Self {
        let (red, green, blue) = convert::hsv_to_rgb(
            hsv.hue % 1.,
            clamp01(hsv.saturation),
            clamp01(hsv.value),
        );
        Color::resolved(red, green, blue, 1., true)
    }
}

impl From<&str> for Color {
    /// The tolerant conversion: unrecognized input becomes opaque white with
    /// [`is_valid`](Color::is_valid) `false`. Use [`Color::parse`] to see
    /// the error instead.
    fn from(input: &str) -> Self {
        Color::parse(input).unwrap_or_else(|_| Color::unrecognized())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Color::parse(input)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.red, self.green, self.blue, self.alpha).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (red, green, blue, alpha) = Deserialize::deserialize(deserializer)?;
        Ok(Color::resolved(red, green, blue, alpha, true))
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, ColorSpec, Hsl, Hsv, Rgb};
    use crate::component::Component;

    #[test]
    fn make_from_strings() {
        assert_eq!(Color::make("#ff0000").to_hex(), "ff0000");
        assert_eq!(Color::make("red").to_hex(), "ff0000");
        assert_eq!(Color::make("f00").to_hex(), "ff0000");
        assert_eq!(Color::make("rgb(255, 0, 0)").to_hex(), "ff0000");
        assert!(Color::make("red").is_valid());
    }

    #[test]
    fn make_is_idempotent() {
        let once = Color::make("#1abc9c");
        let twice = Color::make(once);
        assert_eq!(once, twice);
        assert_eq!(once.to_hex(), twice.to_hex());
        assert_eq!(once.alpha(), twice.alpha());
    }

    #[test]
    fn unrecognized_input_defaults_to_white() {
        let color = Color::make("not a color");
        assert!(!color.is_valid());
        assert_eq!(color.to_hex(), "ffffff");
        assert_eq!(color.alpha(), 1.);
    }

    #[test]
    fn percentage_and_absolute_notations_agree() {
        assert_eq!(
            Color::make("rgb(100%, 0%, 0%)").to_hex(),
            Color::make("rgb(255, 0, 0)").to_hex()
        );
    }

    #[test]
    fn alpha_defaults_to_opaque() {
        assert_eq!(Color::make("rgb(0, 0, 0)").alpha(), 1.);
        assert_eq!(Color::make("rgba(0, 0, 0, 0.5)").alpha(), 0.5);
        assert_eq!(Color::make("transparent").alpha(), 0.);
        assert_eq!(Color::transparent().to_rgb_string(), "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn rgb_string_is_alpha_aware() {
        assert_eq!(Color::make("rgb(0, 0, 0)").to_rgb_string(), "rgb(0, 0, 0)");
        assert_eq!(
            Color::make(ColorSpec::Rgb {
                red: Component::Number(0.),
                green: Component::Number(0.),
                blue: Component::Number(0.),
                alpha: Some(Component::Number(0.5)),
            })
            .to_rgb_string(),
            "rgba(0, 0, 0, 0.5)"
        );
    }

    #[test]
    fn hsl_and_hsv_strings() {
        let red = Color::make("red");
        assert_eq!(red.to_hsl_string(), "hsl(0, 100%, 50%)");
        assert_eq!(red.to_hsv_string(), "hsv(0, 100%, 100%)");
        assert_eq!(
            Color::make("rgba(255, 0, 0, 0.25)").to_hsl_string(),
            "hsla(0, 100%, 50%, 0.25)"
        );
    }

    #[test]
    fn hex_strings() {
        let color = Color::make("rgb(26, 188, 156)");
        assert_eq!(color.to_hex(), "1abc9c");
        assert_eq!(color.to_hex_string(), "#1abc9c");
    }

    #[test]
    fn name_lookup() {
        assert_eq!(Color::make("#ff0000").to_name(), Some("red"));
        assert_eq!(Color::make("#ff0001").to_name(), None);
        assert_eq!(Color::make("rgb(240, 248, 255)").to_name(), Some("aliceblue"));
    }

    #[test]
    fn color_spec_records_resolve_per_model() {
        let from_hsl = Color::make(ColorSpec::Hsl {
            hue: Component::Number(0.),
            saturation: Component::Percentage(100.),
            lightness: Component::Percentage(50.),
            alpha: None,
        });
        assert_eq!(from_hsl.to_hex(), "ff0000");

        let from_hsv = Color::make(ColorSpec::Hsv {
            hue: Component::Number(120.),
            saturation: Component::Ratio(1.),
            value: Component::Ratio(1.),
            alpha: None,
        });
        assert_eq!(from_hsv.to_hex(), "00ff00");

        let from_rgb = Color::make(ColorSpec::Rgb {
            red: Component::Ratio(1.),
            green: Component::Number(0.),
            blue: Component::Number(0.),
            alpha: None,
        });
        assert_eq!(from_rgb.to_hex(), "ff0000");
    }

    #[test]
    fn record_views_round_trip() {
        let color = Color::make("#1abc9c");
        assert_eq!(Color::make(color.to_rgb()).to_hex(), "1abc9c");
        assert_eq!(Color::make(color.to_hsl()).to_hex(), "1abc9c");
        assert_eq!(Color::make(color.to_hsv()).to_hex(), "1abc9c");
    }

    #[test]
    fn typed_records_convert_directly() {
        assert_eq!(
            Color::make(Rgb {
                red: 255,
                green: 128,
                blue: 0,
            })
            .to_hex(),
            "ff8000"
        );
        // Full-scale fields need no unit disambiguation on the typed records.
        assert_eq!(
            Color::make(Hsl {
                hue: 0.,
                saturation: 1.,
                lightness: 0.5,
            })
            .to_hex(),
            "ff0000"
        );
        assert_eq!(
            Color::make(Hsv {
                hue: 2. / 3.,
                saturation: 1.,
                value: 1.,
            })
            .to_hex(),
            "0000ff"
        );
    }

    #[test]
    fn out_of_range_channels_clamp() {
        let color = Color::make(ColorSpec::Rgb {
            red: Component::Number(-20.),
            green: Component::Number(300.),
            blue: Component::Number(0.),
            alpha: Some(Component::Number(7.)),
        });
        let rgb = color.to_rgb();
        assert_eq!(rgb.red, 0);
        // Absolute values clamp to the maximum before scaling.
        assert_eq!(rgb.green, 255);
        assert_eq!(color.alpha(), 1.);
    }

    #[test]
    fn fromstr_surfaces_errors() {
        assert!("tomato".parse::<Color>().is_ok());
        assert!("tomatoes".parse::<Color>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_tuple_round_trip() {
        let color = Color::make("rgba(12, 200, 97, 0.5)");
        let json = serde_json::to_string(&color).unwrap();
        let fields: Vec<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[3], 0.5);
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_hex(), color.to_hex());
        assert_eq!(back.alpha(), color.alpha());
    }
}
