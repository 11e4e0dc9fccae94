//! Equality between colors.
//!
//! Every color carries an [`Equality`] strategy. `a == b` always asks the
//! strategy of `a`, the left operand, so comparing colors with different
//! strategies is not symmetric.

use crate::color::Color;
use crate::web;

/// Decide whether two colors are equal.
pub trait Equality: Send + Sync {
    /// True if `a` and `b` are considered the same color.
    fn equals(&self, a: &Color, b: &Color) -> bool;
}

impl<F> Equality for F
where
    F: Fn(&Color, &Color) -> bool + Send + Sync,
{
    fn equals(&self, a: &Color, b: &Color) -> bool {
        self(a, b)
    }
}

/// The default strategy. Colors are equal if they have the same hex
/// representation.
#[derive(Clone, Copy, Debug, Default)]
pub struct RgbEquivalence;

impl Equality for RgbEquivalence {
    fn equals(&self, a: &Color, b: &Color) -> bool {
        web::quantize_rgb(&a.rgb) == web::quantize_rgb(&b.rgb)
    }
}

/// Colors are equal if their HSL components are exactly equal.
#[derive(Clone, Copy, Debug, Default)]
pub struct HslEquivalence;

impl Equality for HslEquivalence {
    fn equals(&self, a: &Color, b: &Color) -> bool {
        a.hsl() == b.hsl()
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.config.equality.equals(self, other)
    }
}

// A string is compared as the color it parses to. Strings that are not colors
// are never equal to one.

impl PartialEq<str> for Color {
    fn eq(&self, other: &str) -> bool {
        other.parse::<Color>().is_ok_and(|other| *self == other)
    }
}

impl PartialEq<&str> for Color {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<String> for Color {
    fn eq(&self, other: &String) -> bool {
        *self == *other.as_str()
    }
}

impl PartialEq<Color> for str {
    fn eq(&self, other: &Color) -> bool {
        self.parse::<Color>().is_ok_and(|color| color == *other)
    }
}

impl PartialEq<Color> for &str {
    fn eq(&self, other: &Color) -> bool {
        **self == *other
    }
}

impl PartialEq<Color> for String {
    fn eq(&self, other: &Color) -> bool {
        *self.as_str() == *other
    }
}
