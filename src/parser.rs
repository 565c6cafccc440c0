/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! The string grammar for color notation.
//!
//! Inputs are matched against the supported notations in a fixed order:
//! color keywords, `transparent`, the `rgb()`/`rgba()`/`hsl()`/`hsla()`/
//! `hsv()` function forms, six-digit hex, three-digit hex. The grammar is
//! deliberately permissive: case-insensitive, leading whitespace/commas/`#`
//! skipped, parentheses optional, components separated by commas or
//! whitespace. It is also anchored: trailing input after a recognized
//! notation is an error rather than being ignored.

use std::fmt;

use crate::color::ColorSpec;
use crate::component::Component;
use crate::named;

/// The reasons a color string fails to parse.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ColorParseError {
    /// The input matched none of the supported color notations.
    UnrecognizedNotation,
    /// A numeric component was malformed.
    InvalidComponent,
    /// A function notation carried the wrong number of components, or
    /// trailing input after its closing parenthesis.
    InvalidComponentCount {
        /// The function name as written, e.g. `"rgba"`.
        function: &'static str,
        /// How many components that function takes.
        expected: usize,
    },
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ColorParseError::UnrecognizedNotation => f.write_str("unrecognized color notation"),
            ColorParseError::InvalidComponent => f.write_str("invalid numeric component"),
            ColorParseError::InvalidComponentCount { function, expected } => {
                write!(f, "{}() takes {} components", function, expected)
            }
        }
    }
}

impl std::error::Error for ColorParseError {}

/// Parse a color string into its unnormalized structured record.
///
/// Component values are preserved as written (percentages stay percentages);
/// bounding happens when the record is resolved into a
/// [`Color`](crate::Color).
pub(crate) fn parse_color_string(input: &str) -> Result<ColorSpec, ColorParseError> {
    let trimmed = input
        .trim_start_matches(|c: char| c.is_whitespace() || c == ',' || c == '#')
        .trim_end();
    let lower = trimmed.to_ascii_lowercase();
    let s = lower.as_str();

    if let Some(hex) = named::hex_for_name(s) {
        return parse_hex(hex).map_err(|()| ColorParseError::UnrecognizedNotation);
    }
    if s == "transparent" {
        return Ok(ColorSpec::Rgb {
            red: Component::Number(0.),
            green: Component::Number(0.),
            blue: Component::Number(0.),
            alpha: Some(Component::Number(0.)),
        });
    }
    if let Some(result) = try_parse_function(s) {
        return result;
    }
    parse_hex(s).map_err(|()| ColorParseError::UnrecognizedNotation)
}

/// Parse one numeric token on its own, for [`Component`]'s `FromStr`.
pub(crate) fn component_from_str(s: &str) -> Result<Component, ColorParseError> {
    let mut tokenizer = Tokenizer::new(s.trim());
    let component = tokenizer
        .consume_component()
        .map_err(|()| ColorParseError::InvalidComponent)?;
    if !tokenizer.is_eof() {
        return Err(ColorParseError::InvalidComponent);
    }
    Ok(component)
}

/// Match the function notations. `None` means no function name matched and
/// the input should fall through to hex matching.
fn try_parse_function(s: &str) -> Option<Result<ColorSpec, ColorParseError>> {
    for &(name, has_alpha) in &[
        ("rgb", false),
        ("rgba", true),
        ("hsl", false),
        ("hsla", true),
        ("hsv", false),
    ] {
        let arguments = match s.strip_prefix(name) {
            Some(rest) => rest,
            None => continue,
        };
        // The name must be followed by whitespace or an opening parenthesis.
        // This is also what routes "rgba(...)" past the "rgb" entry above.
        match arguments.bytes().next() {
            Some(b'(') => {}
            Some(byte) if byte.is_ascii_whitespace() => {}
            _ => continue,
        }
        return Some(parse_function_arguments(name, has_alpha, arguments));
    }
    None
}

fn parse_function_arguments(
    function: &'static str,
    has_alpha: bool,
    arguments: &str,
) -> Result<ColorSpec, ColorParseError> {
    let expected = if has_alpha { 4 } else { 3 };
    let count_error = ColorParseError::InvalidComponentCount { function, expected };

    let mut tokenizer = Tokenizer::new(arguments);
    if !tokenizer.skip_opening() {
        return Err(ColorParseError::UnrecognizedNotation);
    }

    let mut components = [Component::Number(0.); 4];
    for i in 0..expected {
        if i > 0 && !tokenizer.skip_separators() {
            return Err(count_error);
        }
        components[i] = tokenizer
            .consume_component()
            .map_err(|()| ColorParseError::InvalidComponent)?;
    }

    tokenizer.skip_whitespace();
    tokenizer.eat(b')');
    tokenizer.skip_whitespace();
    if !tokenizer.is_eof() {
        return Err(count_error);
    }

    let alpha = if has_alpha { Some(components[3]) } else { None };
    Ok(match function {
        "rgb" | "rgba" => ColorSpec::Rgb {
            red: components[0],
            green: components[1],
            blue: components[2],
            alpha,
        },
        "hsl" | "hsla" => ColorSpec::Hsl {
            hue: components[0],
            saturation: components[1],
            lightness: components[2],
            alpha,
        },
        _ => ColorSpec::Hsv {
            hue: components[0],
            saturation: components[1],
            value: components[2],
            alpha,
        },
    })
}

/// Parse a bare 6-digit (`rrggbb`) or 3-digit (`rgb`, each digit doubled)
/// lowercase hex code into an RGB record.
fn parse_hex(s: &str) -> Result<ColorSpec, ()> {
    #[inline]
    fn from_hex(c: u8) -> Result<u8, ()> {
        match c {
            b'0'..=b'9' => Ok(c - b'0'),
            b'a'..=b'f' => Ok(c - b'a' + 10),
            _ => Err(()),
        }
    }

    let value = s.as_bytes();
    let (red, green, blue) = match value.len() {
        6 => (
            from_hex(value[0])? * 16 + from_hex(value[1])?,
            from_hex(value[2])? * 16 + from_hex(value[3])?,
            from_hex(value[4])? * 16 + from_hex(value[5])?,
        ),
        3 => (
            from_hex(value[0])? * 17,
            from_hex(value[1])? * 17,
            from_hex(value[2])? * 17,
        ),
        _ => return Err(()),
    };

    Ok(ColorSpec::Rgb {
        red: Component::Number(red as f64),
        green: Component::Number(green as f64),
        blue: Component::Number(blue as f64),
        alpha: None,
    })
}

/// A byte cursor over one color string.
struct Tokenizer<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Tokenizer<'a> {
    #[inline]
    fn new(input: &'a str) -> Self {
        Tokenizer { input, position: 0 }
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    #[inline]
    fn next_byte(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        self.position += n;
    }

    /// Consume `byte` if it is next. Returns whether it was.
    #[inline]
    fn eat(&mut self, byte: u8) -> bool {
        if self.next_byte() == Some(byte) {
            self.advance(1);
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.next_byte(), Some(b) if b.is_ascii_whitespace()) {
            self.advance(1);
        }
    }

    /// Consume the run of whitespace and `(` that may follow a function
    /// name. Returns whether anything was consumed.
    fn skip_opening(&mut self) -> bool {
        let start = self.position;
        while matches!(self.next_byte(), Some(b) if b.is_ascii_whitespace() || b == b'(') {
            self.advance(1);
        }
        self.position != start
    }

    /// Consume the run of commas and whitespace between components.
    /// Returns whether anything was consumed.
    fn skip_separators(&mut self) -> bool {
        let start = self.position;
        while matches!(self.next_byte(), Some(b) if b.is_ascii_whitespace() || b == b',') {
            self.advance(1);
        }
        self.position != start
    }

    /// Consume one numeric token: optional sign, integer or decimal form,
    /// optional `%` suffix. A decimal point whose value is exactly 1 denotes
    /// a full-scale [`Component::Ratio`].
    fn consume_component(&mut self) -> Result<Component, ()> {
        let start = self.position;
        if matches!(self.next_byte(), Some(b'+') | Some(b'-')) {
            self.advance(1);
        }
        let integer_digits = self.consume_digits();
        let mut has_dot = false;
        if self.next_byte() == Some(b'.') {
            self.advance(1);
            // A decimal point requires fraction digits; "1." is not a number.
            if self.consume_digits() == 0 {
                return Err(());
            }
            has_dot = true;
        }
        if integer_digits == 0 && !has_dot {
            return Err(());
        }

        let value: f64 = self.input[start..self.position].parse().map_err(|_| ())?;
        let is_percentage = self.eat(b'%');

        if has_dot && value == 1. {
            Ok(Component::Ratio(1.))
        } else if is_percentage {
            Ok(Component::Percentage(value))
        } else {
            Ok(Component::Number(value))
        }
    }

    fn consume_digits(&mut self) -> usize {
        let start = self.position;
        while matches!(self.next_byte(), Some(b) if b.is_ascii_digit()) {
            self.advance(1);
        }
        self.position - start
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_color_string, ColorParseError};
    use crate::color::ColorSpec;
    use crate::component::Component;

    fn rgb(red: f64, green: f64, blue: f64) -> ColorSpec {
        ColorSpec::Rgb {
            red: Component::Number(red),
            green: Component::Number(green),
            blue: Component::Number(blue),
            alpha: None,
        }
    }

    #[test]
    fn function_notation() {
        assert_eq!(parse_color_string("rgb(255, 0, 0)"), Ok(rgb(255., 0., 0.)));
        assert_eq!(
            parse_color_string("rgba(255, 0, 0, 0.5)"),
            Ok(ColorSpec::Rgb {
                red: Component::Number(255.),
                green: Component::Number(0.),
                blue: Component::Number(0.),
                alpha: Some(Component::Number(0.5)),
            })
        );
        assert_eq!(
            parse_color_string("hsl(120, 100%, 50%)"),
            Ok(ColorSpec::Hsl {
                hue: Component::Number(120.),
                saturation: Component::Percentage(100.),
                lightness: Component::Percentage(50.),
                alpha: None,
            })
        );
        assert_eq!(
            parse_color_string("hsla(120, 100%, 50%, .25)"),
            Ok(ColorSpec::Hsl {
                hue: Component::Number(120.),
                saturation: Component::Percentage(100.),
                lightness: Component::Percentage(50.),
                alpha: Some(Component::Number(0.25)),
            })
        );
        assert_eq!(
            parse_color_string("hsv(1, 1%, 2%)"),
            Ok(ColorSpec::Hsv {
                hue: Component::Number(1.),
                saturation: Component::Percentage(1.),
                value: Component::Percentage(2.),
                alpha: None,
            })
        );
    }

    #[test]
    fn permissive_forms() {
        let expected = Ok(rgb(255., 0., 0.));
        assert_eq!(parse_color_string("rgb 255 0 0"), expected);
        assert_eq!(parse_color_string("RGB(255, 0, 0)"), expected);
        assert_eq!(parse_color_string("rgb(255,0,0"), expected);
        assert_eq!(parse_color_string("rgb(255 , 0  0)"), expected);
        assert_eq!(parse_color_string("  rgb(255, 0, 0)  "), expected);
    }

    #[test]
    fn signed_and_decimal_components() {
        assert_eq!(
            parse_color_string("rgb(+255, -10, .5)"),
            Ok(ColorSpec::Rgb {
                red: Component::Number(255.),
                green: Component::Number(-10.),
                blue: Component::Number(0.5),
                alpha: None,
            })
        );
        // A decimal point with value exactly 1 denotes full scale.
        assert_eq!(
            parse_color_string("hsl(0, 1.0, 1.00)"),
            Ok(ColorSpec::Hsl {
                hue: Component::Number(0.),
                saturation: Component::Ratio(1.),
                lightness: Component::Ratio(1.),
                alpha: None,
            })
        );
    }

    #[test]
    fn hex_notation() {
        assert_eq!(parse_color_string("#ff0000"), Ok(rgb(255., 0., 0.)));
        assert_eq!(parse_color_string("ff0000"), Ok(rgb(255., 0., 0.)));
        assert_eq!(parse_color_string("#FF8040"), Ok(rgb(255., 128., 64.)));
        // Three-digit form doubles each digit.
        assert_eq!(parse_color_string("#f00"), Ok(rgb(255., 0., 0.)));
        assert_eq!(parse_color_string("1ab"), Ok(rgb(17., 170., 187.)));
    }

    #[test]
    fn keywords_substitute_their_hex() {
        assert_eq!(parse_color_string("red"), Ok(rgb(255., 0., 0.)));
        assert_eq!(parse_color_string("RED"), Ok(rgb(255., 0., 0.)));
        assert_eq!(
            parse_color_string("rosybrown"),
            Ok(rgb(188., 143., 143.))
        );
    }

    #[test]
    fn transparent_literal() {
        assert_eq!(
            parse_color_string("transparent"),
            Ok(ColorSpec::Rgb {
                red: Component::Number(0.),
                green: Component::Number(0.),
                blue: Component::Number(0.),
                alpha: Some(Component::Number(0.)),
            })
        );
    }

    #[test]
    fn unrecognized_notation() {
        assert_eq!(
            parse_color_string("not a color"),
            Err(ColorParseError::UnrecognizedNotation)
        );
        assert_eq!(
            parse_color_string(""),
            Err(ColorParseError::UnrecognizedNotation)
        );
        assert_eq!(
            parse_color_string("#ff00zz"),
            Err(ColorParseError::UnrecognizedNotation)
        );
        assert_eq!(
            parse_color_string("#ff00"),
            Err(ColorParseError::UnrecognizedNotation)
        );
    }

    #[test]
    fn malformed_components() {
        assert_eq!(
            parse_color_string("rgb(1., 2, 3)"),
            Err(ColorParseError::InvalidComponent)
        );
        assert_eq!(
            parse_color_string("rgb(a, 2, 3)"),
            Err(ColorParseError::InvalidComponent)
        );
    }

    #[test]
    fn wrong_component_counts() {
        assert_eq!(
            parse_color_string("rgb(1, 2, 3, 4)"),
            Err(ColorParseError::InvalidComponentCount {
                function: "rgb",
                expected: 3,
            })
        );
        assert_eq!(
            parse_color_string("rgba(1, 2, 3)"),
            Err(ColorParseError::InvalidComponentCount {
                function: "rgba",
                expected: 4,
            })
        );
        assert_eq!(
            parse_color_string("hsl(1, 2%)"),
            Err(ColorParseError::InvalidComponentCount {
                function: "hsl",
                expected: 3,
            })
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ColorParseError::UnrecognizedNotation.to_string(),
            "unrecognized color notation"
        );
        assert_eq!(
            ColorParseError::InvalidComponentCount {
                function: "rgb",
                expected: 3,
            }
            .to_string(),
            "rgb() takes 3 components"
        );
    }
}
