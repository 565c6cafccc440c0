/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Derived-color operations.
//!
//! Every operation reads a view of the source color, transforms it, and
//! resolves the transformed record into a fresh [`Color`]; the source is
//! never touched. Because the HSL/HSV views carry no alpha channel, derived
//! colors are opaque regardless of the source alpha.

use crate::color::{Color, Hsl, Hsv};
use crate::component::clamp01;

/// Squared RGB distance above which two colors count as readable against
/// each other.
const READABILITY_THRESHOLD: i64 = 0x28A4;

impl Color {
    /// Reduce saturation by `amount` percentage points, clamped at grey.
    /// The conventional amount is 10.
    pub fn desaturate(&self, amount: f64) -> Color {
        let mut hsl = self.to_hsl();
        hsl.saturation = clamp01(hsl.saturation - amount / 100.);
        Color::from(hsl)
    }

    /// Increase saturation by `amount` percentage points, clamped at full
    /// saturation. The conventional amount is 10.
    pub fn saturate(&self, amount: f64) -> Color {
        let mut hsl = self.to_hsl();
        hsl.saturation = clamp01(hsl.saturation + amount / 100.);
        Color::from(hsl)
    }

    /// Remove all saturation, leaving the grey of equal lightness.
    pub fn greyscale(&self) -> Color {
        self.desaturate(100.)
    }

    /// Increase lightness by `amount` percentage points, clamped at white.
    /// The conventional amount is 10.
    pub fn lighten(&self, amount: f64) -> Color {
        let mut hsl = self.to_hsl();
        hsl.lightness = clamp01(hsl.lightness + amount / 100.);
        Color::from(hsl)
    }

    /// Reduce lightness by `amount` percentage points, clamped at black.
    /// The conventional amount is 10.
    pub fn darken(&self, amount: f64) -> Color {
        let mut hsl = self.to_hsl();
        hsl.lightness = clamp01(hsl.lightness - amount / 100.);
        Color::from(hsl)
    }

    /// The color on the opposite side of the hue wheel.
    pub fn complement(&self) -> Color {
        let mut hsl = self.to_hsl();
        hsl.hue = (hsl.hue + 0.5) % 1.;
        Color::from(hsl)
    }

    /// This color plus the two hues 120° and 240° around the wheel, at the
    /// same saturation and lightness.
    pub fn triad(&self) -> [Color; 3] {
        let hsl = self.to_hsl();
        [*self, spin(hsl, 120.), spin(hsl, 240.)]
    }

    /// This color plus the three hues 90°, 180° and 270° around the wheel,
    /// at the same saturation and lightness.
    pub fn tetrad(&self) -> [Color; 4] {
        let hsl = self.to_hsl();
        [*self, spin(hsl, 90.), spin(hsl, 180.), spin(hsl, 270.)]
    }

    /// This color plus the two hues flanking its complement, 72° and 216°
    /// around the wheel.
    pub fn splitcomplement(&self) -> [Color; 3] {
        let hsl = self.to_hsl();
        [*self, spin(hsl, 72.), spin(hsl, 216.)]
    }

    /// `results` colors spaced `360/slices` degrees apart around this
    /// color's hue, positioned so the input sits near the middle of the
    /// sequence. The conventional call is 6 results over 30 slices.
    ///
    /// Returns an empty sequence for `results == 0`; `slices` must be
    /// nonzero for a meaningful spacing.
    pub fn analogous(&self, results: usize, slices: usize) -> Vec<Color> {
        if results == 0 {
            return Vec::new();
        }

        let hsl = self.to_hsl();
        let part = 360. / slices as f64;
        let mut ret = Vec::with_capacity(results);
        ret.push(*self);

        let mut hue = (hsl.hue * 360. - part * (results >> 1) as f64 + 720.) % 360.;
        for _ in 1..results {
            hue = (hue + part) % 360.;
            ret.push(Color::from(Hsl { hue: hue / 360., ..hsl }));
        }
        ret
    }

    /// `results` colors at this hue and saturation with the value channel
    /// stepped by 0.2 (wrapping past full) per color, starting from this
    /// color's own value. The conventional count is 6.
    pub fn monochromatic(&self, results: usize) -> Vec<Color> {
        let Hsv {
            hue,
            saturation,
            mut value,
        } = self.to_hsv();

        let mut ret = Vec::with_capacity(results);
        for _ in 0..results {
            ret.push(Color::from(Hsv {
                hue,
                saturation,
                value,
            }));
            value = (value + 0.2) % 1.;
        }
        ret
    }

    /// Whether this color and `other` serialize to the same six-digit hex.
    /// Alpha takes no part in the comparison.
    pub fn eq_ignore_alpha<C: Into<Color>>(&self, other: C) -> bool {
        self.to_hex() == other.into().to_hex()
    }

    /// A rough legibility check: whether the squared RGB distance between
    /// the two colors clears a fixed threshold. This is a channel-distance
    /// heuristic, not a perceptual-luminance contrast ratio.
    pub fn readable_on<C: Into<Color>>(&self, other: C) -> bool {
        let a = self.to_rgb();
        let b = other.into().to_rgb();
        let dr = b.red as i64 - a.red as i64;
        let dg = b.green as i64 - a.green as i64;
        let db = b.blue as i64 - a.blue as i64;
        dr * dr + dg * dg + db * db > READABILITY_THRESHOLD
    }
}

/// Rotate an HSL record's hue by `degrees` and resolve it.
fn spin(hsl: Hsl, degrees: f64) -> Color {
    let hue = (hsl.hue * 360. + degrees) % 360.;
    Color::from(Hsl { hue: hue / 360., ..hsl })
}
