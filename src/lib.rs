/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![crate_name = "tinct"]
#![crate_type = "rlib"]
#![deny(missing_docs)]

//! Parsing, conversion and manipulation of CSS-style color values.
//!
//! Any supported input — keyword, hex, `rgb()`/`rgba()`/`hsl()`/`hsla()`/
//! `hsv()` notation, or a structured record — resolves into a [`Color`],
//! which holds canonical RGB plus alpha and serves every other
//! representation as a computed view:
//!
//! ```
//! use tinct::Color;
//!
//! let color = Color::make("coral");
//! assert_eq!(color.to_hex_string(), "#ff7f50");
//! assert_eq!(color.to_hsl_string(), "hsl(16, 100%, 66%)");
//! assert_eq!(color.to_name(), Some("coral"));
//! assert_eq!(color.lighten(10.).to_rgb_string(), "rgb(255, 164, 131)");
//! ```
//!
//! [`Color::make`] never fails: input it does not recognize yields opaque
//! white flagged with [`Color::is_valid`] `false`. Use [`Color::parse`] when
//! the failure reason matters:
//!
//! ```
//! use tinct::{Color, ColorParseError};
//!
//! assert_eq!(Color::parse("#12345"), Err(ColorParseError::UnrecognizedNotation));
//! ```
//!
//! The string grammar is case-insensitive and whitespace-tolerant;
//! parentheses and a leading `#` are optional, and components may be
//! separated by commas or whitespace. Numeric components take an optional
//! sign and an optional `%` suffix. A component written with a decimal point
//! that equals exactly 1 (such as `1.0`) denotes the channel's full scale;
//! structured input spells the same thing explicitly as
//! [`Component::Ratio`].

pub use crate::color::{Color, ColorSpec, Hsl, Hsv, Rgb};
pub use crate::component::{bound, clamp01, Component};
pub use crate::convert::{hsl_to_rgb, hsv_to_rgb, rgb_to_hex, rgb_to_hsl, rgb_to_hsv};
pub use crate::named::{hex_for_name, name_for_hex};
pub use crate::parser::ColorParseError;
pub use crate::serializer::ToCss;

mod color;
mod component;
mod convert;
mod named;
mod ops;
mod parser;
mod serializer;

#[cfg(test)]
mod tests;
