//! Encoding of colors as text: hex strings, CSS color names and the shortest
//! form of both, the web format.

use crate::color::{Component, FLOAT_ERROR};
use crate::error::{Error, Result};
use crate::models::Rgb;
use crate::{names, xkcd};

/// Scale a component in `[0, 1]` to a byte, rounding to the nearest value.
///
/// Ties round down, so `0.5` becomes `0x7f`.
pub fn quantize(value: Component) -> u8 {
    (value * 255.0 + 0.5 - FLOAT_ERROR).floor().clamp(0.0, 255.0) as u8
}

/// Quantize all three RGB components.
pub fn quantize_rgb(rgb: &Rgb) -> [u8; 3] {
    [quantize(rgb.red), quantize(rgb.green), quantize(rgb.blue)]
}

fn to_long(bytes: [u8; 3]) -> String {
    let [r, g, b] = bytes;
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// The 3 digit form, if every byte repeats a single hex digit.
fn to_short(bytes: [u8; 3]) -> Option<String> {
    if bytes.iter().all(|b| b >> 4 == b & 0xf) {
        let [r, g, b] = bytes.map(|b| b & 0xf);
        Some(format!("#{r:x}{g:x}{b:x}"))
    } else {
        None
    }
}

fn to_web(bytes: [u8; 3]) -> String {
    let long = to_long(bytes);
    match names::hex_to_name(&long) {
        Some(name) => name.to_string(),
        None => to_short(bytes).unwrap_or(long),
    }
}

fn from_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parse `#rgb` or `#rrggbb` in any case into bytes.
fn parse_hex(hex: &str) -> Result<[u8; 3]> {
    let invalid = || {
        tracing::debug!(hex, "invalid hex color");
        Error::Parse(hex.to_string(), "need 3 or 6 hex digits after '#'")
    };

    let digits = hex.strip_prefix('#').ok_or_else(invalid)?.as_bytes();
    let digits = digits
        .iter()
        .map(|&c| from_hex_digit(c))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(invalid)?;

    match digits[..] {
        [r, g, b] => Ok([r * 17, g * 17, b * 17]),
        [r1, r0, g1, g0, b1, b0] => Ok([r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0]),
        _ => Err(invalid()),
    }
}

fn bytes_to_rgb(bytes: [u8; 3]) -> Rgb {
    let [r, g, b] = bytes.map(|b| b as Component / 255.0);
    Rgb::new(r, g, b)
}

/// The 6 digit hex representation of RGB components, e.g. `#ff0000`.
pub fn rgb_to_hex(rgb: &Rgb) -> String {
    to_long(quantize_rgb(rgb))
}

/// The shortest hex representation of RGB components, e.g. `#f00`.
pub fn rgb_to_hexs(rgb: &Rgb) -> String {
    let bytes = quantize_rgb(rgb);
    to_short(bytes).unwrap_or_else(|| to_long(bytes))
}

/// The shortest web representation of RGB components: a CSS color name, a 3
/// digit or a 6 digit hex string.
pub fn rgb_to_web(rgb: &Rgb) -> String {
    to_web(quantize_rgb(rgb))
}

/// Parse a `#rgb` or `#rrggbb` hex string.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    parse_hex(hex).map(bytes_to_rgb)
}

/// Convert a hex string to the shortest web representation.
/// ```rust
/// use colorant::web::hex_to_web;
/// assert_eq!(hex_to_web("#FF0000").unwrap(), "red");
/// assert_eq!(hex_to_web("#aaaaaa").unwrap(), "#aaa");
/// ```
pub fn hex_to_web(hex: &str) -> Result<String> {
    parse_hex(hex).map(to_web)
}

/// Convert a web string, a CSS color name or hex string, to a lowercase hex
/// string.
///
/// Hex strings keep their length unless `force_long` is set. Names convert to
/// the 3 digit form when possible, unless `force_long` is set.
pub fn web_to_hex(web: &str, force_long: bool) -> Result<String> {
    let (bytes, long) = if web.starts_with('#') {
        (parse_hex(web)?, web.len() == 7)
    } else {
        let hex = names::name_to_hex(web).ok_or_else(|| {
            tracing::debug!(web, "unknown color name");
            Error::Parse(web.to_string(), "not a recognized color name")
        })?;
        (parse_hex(hex)?, false)
    };

    if force_long || long {
        Ok(to_long(bytes))
    } else {
        Ok(to_short(bytes).unwrap_or_else(|| to_long(bytes)))
    }
}

/// Parse a web string: a CSS color name, `#rgb` or `#rrggbb`.
pub fn web_to_rgb(web: &str) -> Result<Rgb> {
    web_to_hex(web, true).and_then(|hex| hex_to_rgb(&hex))
}

/// Look up an xkcd color survey name.
pub fn xkcd_to_rgb(name: &str) -> Result<Rgb> {
    let hex = xkcd::name_to_hex(name).ok_or_else(|| {
        tracing::debug!(name, "unknown xkcd color name");
        Error::Parse(name.to_string(), "not an xkcd color name")
    })?;
    hex_to_rgb(hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_rounds_ties_down() {
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(1.0), 255);
        assert_eq!(quantize(0.5), 0x7f);
        assert_eq!(quantize(0.999999), 255);
        assert_eq!(quantize(128.0 / 255.0), 0x80);
    }

    #[test]
    fn hex_output() {
        assert_eq!(rgb_to_hex(&Rgb::new(0.0, 1.0, 0.0)), "#00ff00");
        assert_eq!(rgb_to_hexs(&Rgb::new(0.0, 1.0, 0.0)), "#0f0");
        assert_eq!(rgb_to_hexs(&Rgb::new(0.0, 0.999999, 1.0)), "#0ff");
        assert_eq!(rgb_to_hexs(&Rgb::new(0.23, 1.0, 1.0)), "#3bffff");
    }

    #[test]
    fn web_output_is_the_shortest_form() {
        assert_eq!(rgb_to_web(&Rgb::new(1.0, 0.0, 0.0)), "red");
        assert_eq!(rgb_to_web(&Rgb::new(0.0, 1.0, 1.0)), "cyan");
        assert_eq!(rgb_to_web(&Rgb::new(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0)), "#aaa");
        assert_eq!(hex_to_web("#fa3b2c").unwrap(), "#fa3b2c");
        assert_eq!(hex_to_web("#abc").unwrap(), "#abc");
        assert_eq!(hex_to_web("#acacac").unwrap(), "#acacac");
    }

    #[test]
    fn hex_input() {
        assert_eq!(hex_to_rgb("#00ff00").unwrap(), Rgb::new(0.0, 1.0, 0.0));
        assert_eq!(hex_to_rgb("#0F0").unwrap(), Rgb::new(0.0, 1.0, 0.0));
        assert_eq!(hex_to_rgb("#aaa").unwrap(), hex_to_rgb("#aaaaaa").unwrap());

        for invalid in ["#aa", "#aaaa", "#foo", "fff", "", "#", "#ff00ff0"] {
            assert!(matches!(hex_to_rgb(invalid), Err(Error::Parse(..))), "{invalid}");
        }
    }

    #[test]
    fn web_to_hex_forms() {
        assert_eq!(web_to_hex("red", false).unwrap(), "#f00");
        assert_eq!(web_to_hex("RED", true).unwrap(), "#ff0000");
        assert_eq!(web_to_hex("#aaa", false).unwrap(), "#aaa");
        assert_eq!(web_to_hex("#aaa", true).unwrap(), "#aaaaaa");
        assert_eq!(web_to_hex("#AAAAAA", false).unwrap(), "#aaaaaa");
        assert_eq!(
            web_to_hex("pinky", false),
            Err(Error::Parse("pinky".into(), "not a recognized color name"))
        );
        assert!(web_to_hex("#aaaa", false).is_err());
    }

    #[test]
    fn web_input() {
        assert_eq!(web_to_rgb("blue").unwrap(), Rgb::new(0.0, 0.0, 1.0));
        assert_eq!(web_to_rgb("#00f").unwrap(), Rgb::new(0.0, 0.0, 1.0));
        assert!(web_to_rgb("bleu").is_err());
        assert_eq!(xkcd_to_rgb("cloudy_blue").unwrap(), hex_to_rgb("#acc2d9").unwrap());
        assert!(xkcd_to_rgb("blue-ish").is_err());
    }
}
