/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Pure conversion math between the supported color models.
//!
//! All hue/saturation/lightness/value parameters and results are fractions in
//! `[0, 1]`; callers normalize raw channel values through
//! [`bound`](crate::bound) first. RGB results come back on the `[0, 255]`
//! scale, ready for the canonical representation.

use std::fmt::Write;

/// Convert an RGB color to HSL.
///
/// Expects `red`, `green` and `blue` in `[0, 1]` and returns
/// `(hue, saturation, lightness)` in `[0, 1]`. A color with equal channels is
/// achromatic: hue and saturation are both 0.
#[inline]
pub fn rgb_to_hsl(red: f64, green: f64, blue: f64) -> (f64, f64, f64) {
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let lightness = (max + min) / 2.;

    if max == min {
        return (0., 0., lightness);
    }

    let d = max - min;
    let saturation = if lightness > 0.5 {
        d / (2. - max - min)
    } else {
        d / (max + min)
    };
    (sextant_hue(red, green, blue, max, d), saturation, lightness)
}

/// Convert an HSL color to RGB.
///
/// Expects `hue`, `saturation` and `lightness` in `[0, 1]` and returns
/// `(red, green, blue)` scaled to `[0, 255]`. Zero saturation yields the
/// achromatic `red == green == blue == lightness`.
#[inline]
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (f64, f64, f64) {
    if saturation == 0. {
        let grey = lightness * 255.;
        return (grey, grey, grey);
    }

    let q = if lightness < 0.5 {
        lightness * (1. + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2. * lightness - q;

    let hue_to_channel = |t: f64| -> f64 {
        let mut t = t;
        if t < 0. {
            t += 1.;
        }
        if t > 1. {
            t -= 1.;
        }
        if t < 1. / 6. {
            p + (q - p) * 6. * t
        } else if t < 1. / 2. {
            q
        } else if t < 2. / 3. {
            p + (q - p) * (2. / 3. - t) * 6.
        } else {
            p
        }
    };

    (
        hue_to_channel(hue + 1. / 3.) * 255.,
        hue_to_channel(hue) * 255.,
        hue_to_channel(hue - 1. / 3.) * 255.,
    )
}

/// Convert an RGB color to HSV.
///
/// Expects `red`, `green` and `blue` in `[0, 1]` and returns
/// `(hue, saturation, value)` in `[0, 1]`.
#[inline]
pub fn rgb_to_hsv(red: f64, green: f64, blue: f64) -> (f64, f64, f64) {
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);

    let d = max - min;
    let saturation = if max == 0. { 0. } else { d / max };
    let hue = if max == min {
        0.
    } else {
        sextant_hue(red, green, blue, max, d)
    };
    (hue, saturation, max)
}

/// Convert an HSV color to RGB.
///
/// Expects `hue`, `saturation` and `value` in `[0, 1]` and returns
/// `(red, green, blue)` scaled to `[0, 255]`.
#[inline]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> (f64, f64, f64) {
    let i = (hue * 6.).floor();
    let f = hue * 6. - i;
    let p = value * (1. - saturation);
    let q = value * (1. - f * saturation);
    let t = value * (1. - (1. - f) * saturation);

    let (red, green, blue) = match (i as i64).rem_euclid(6) {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };
    (red * 255., green * 255., blue * 255.)
}

/// Serialize an RGB color to a bare six-digit lowercase hex string.
///
/// Expects `red`, `green` and `blue` in `[0, 255]`; each channel is rounded
/// to the nearest integer and zero-padded.
pub fn rgb_to_hex(red: f64, green: f64, blue: f64) -> String {
    let mut hex = String::with_capacity(6);
    // Writing to a String cannot fail.
    write!(
        hex,
        "{:02x}{:02x}{:02x}",
        red.round() as u8,
        green.round() as u8,
        blue.round() as u8
    )
    .unwrap();
    hex
}

// Hue from the dominant channel, in sixths of a turn normalized to [0, 1].
#[inline]
fn sextant_hue(red: f64, green: f64, blue: f64, max: f64, d: f64) -> f64 {
    let h = if max == red {
        (green - blue) / d + if green < blue { 6. } else { 0. }
    } else if max == green {
        (blue - red) / d + 2.
    } else {
        (red - green) / d + 4.
    };
    h / 6.
}
