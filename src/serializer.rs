/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::fmt;

/// Trait for things the crate can serialize in CSS color syntax.
pub trait ToCss {
    /// Serialize `self` in CSS syntax, writing to `dest`.
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write;

    /// Serialize `self` in CSS syntax and return a string.
    ///
    /// (This is a convenience wrapper for `to_css` and probably should not be overridden.)
    #[inline]
    fn to_css_string(&self) -> String {
        let mut s = String::new();
        self.to_css(&mut s).unwrap();
        s
    }
}

impl<'a, T> ToCss for &'a T
where
    T: ToCss + ?Sized,
{
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        (*self).to_css(dest)
    }
}

impl ToCss for f32 {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        dtoa_short::write(dest, *self)?;
        Ok(())
    }
}

impl ToCss for i32 {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        let mut buffer = itoa::Buffer::new();
        dest.write_str(buffer.format(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::ToCss;

    #[test]
    fn serialize_numbers() {
        assert_eq!(255.to_css_string(), "255");
        assert_eq!((-4).to_css_string(), "-4");
        assert_eq!(0.5f32.to_css_string(), "0.5");
        assert_eq!(1f32.to_css_string(), "1");
        assert_eq!(0.25f32.to_css_string(), "0.25");
    }
}
