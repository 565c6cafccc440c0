/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::parser::ColorParseError;

/// A single channel value as accepted at the API boundary, together with the
/// unit it was written in.
///
/// The unit is explicit so that a full-scale channel is unambiguous:
/// `Ratio(1.0)` always means "the whole of this channel's range", while
/// `Number(1.0)` means the absolute value 1 on the channel's own scale
/// (1/255th of a red channel, 1 degree of hue, and so on).
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Component {
    /// An absolute value on the channel's own scale: `[0, 255]` for RGB
    /// channels, `[0, 360]` for hue, `[0, 100]` for saturation, lightness and
    /// value, `[0, 1]` for alpha.
    Number(f64),
    /// A percentage of the channel's full scale, as the number before the
    /// `%` sign (so `Percentage(50.0)` is half scale).
    Percentage(f64),
    /// A fraction of the channel's full scale in `[0, 1]`.
    ///
    /// In string notation this is spelled with a decimal point: the token
    /// `1.0` denotes full scale where `1` denotes the absolute value 1.
    Ratio(f64),
}

impl From<f64> for Component {
    #[inline]
    fn from(value: f64) -> Self {
        Component::Number(value)
    }
}

impl From<u8> for Component {
    #[inline]
    fn from(value: u8) -> Self {
        Component::Number(value as f64)
    }
}

impl FromStr for Component {
    type Err = ColorParseError;

    /// Parse a numeric token in the color grammar: optional sign, integer or
    /// decimal form, optional `%` suffix. `1.0` (decimal point, value exactly
    /// 1) parses as `Ratio(1.0)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::component_from_str(s)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Component::Number(number) => write!(f, "{}", number),
            Component::Percentage(percentage) => write!(f, "{}%", percentage),
            Component::Ratio(ratio) => write!(f, "ratio {}", ratio),
        }
    }
}

/// Normalize a raw channel value into a fraction of `max` in `[0, 1]`.
///
/// `max` is the channel's context maximum: 255 for RGB channels, 360 for hue,
/// 100 for saturation/lightness/value, 1 for alpha. Absolute values are
/// clamped to `[0, max]` before percentage scaling, results within 1e-6 of
/// `max` snap to exactly 1, and anything still at or above 1 is reduced
/// modulo `max` (relevant to hue wraparound).
///
/// Non-finite inputs clamp to 0; this function never returns NaN.
pub fn bound(component: Component, max: f64) -> f64 {
    let (value, is_percentage) = match component {
        // Full-scale fractions scale directly; the clamp makes bound total.
        Component::Ratio(ratio) => (clamp01(ratio) * max, false),
        Component::Percentage(percentage) => (percentage, true),
        Component::Number(number) => (number, false),
    };

    // f64::max returns the other operand for NaN, so non-finite input
    // collapses to 0 here.
    let mut n = value.max(0.).min(max);
    if is_percentage {
        n *= max / 100.;
    }

    // Snap full-scale results that drifted through the arithmetic above.
    if (n - max).abs() < 1e-6 {
        return 1.;
    }
    if n >= 1. {
        (n % max) / max
    } else {
        n
    }
}

/// Clamp a fraction to `[0, 1]`. NaN clamps to 0.
#[inline]
pub fn clamp01(value: f64) -> f64 {
    value.max(0.).min(1.)
}
