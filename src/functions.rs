//! Conversion functions working on plain component arrays and strings.
//!
//! These do not validate their input. Use [`Color`](crate::Color) to have
//! components checked against their domain.
//!
//! ```rust
//! use colorant::functions::*;
//! assert_eq!(hsl2rgb([0.0, 1.0, 0.5]), [1.0, 0.0, 0.0]);
//! assert_eq!(rgb2hex([0.0, 1.0, 0.0], false), "#0f0");
//! assert_eq!(web2hex("red", true).unwrap(), "#ff0000");
//! ```

use crate::color::Component;
use crate::error::Result;
use crate::models::{Cmy, Cmyk, Convert, Hsl, Hsv, Rgb, Yiq};
use crate::web;

/// Three components of any colorspace.
pub type Triple = [Component; 3];

macro_rules! rgb_conversions {
    ($($to:ident, $from:ident => $model:ident;)*) => {
        $(
            #[doc = concat!("Convert RGB components to ", stringify!($model), ".")]
            pub fn $to(rgb: Triple) -> Triple {
                $model::from_rgb(&Rgb::from(rgb)).to_array()
            }

            #[doc = concat!("Convert ", stringify!($model), " components to RGB.")]
            pub fn $from(values: Triple) -> Triple {
                $model::from(values).to_rgb().to_array()
            }
        )*
    };
}

rgb_conversions! {
    rgb2hsl, hsl2rgb => Hsl;
    rgb2hsv, hsv2rgb => Hsv;
    rgb2yiq, yiq2rgb => Yiq;
    rgb2cmy, cmy2rgb => Cmy;
}

/// Convert CMY components to CMYK.
pub fn cmy2cmyk(cmy: Triple) -> [Component; 4] {
    Cmy::from(cmy).to_cmyk().to_array()
}

/// Convert CMYK components to CMY.
pub fn cmyk2cmy(cmyk: [Component; 4]) -> Triple {
    Cmyk::from(cmyk).to_cmy().to_array()
}

/// Convert RGB components to a hex string, the 3 digit form when possible
/// unless `force_long` is set.
pub fn rgb2hex(rgb: Triple, force_long: bool) -> String {
    let rgb = Rgb::from(rgb);
    if force_long {
        web::rgb_to_hex(&rgb)
    } else {
        web::rgb_to_hexs(&rgb)
    }
}

/// Parse a `#rgb` or `#rrggbb` hex string into RGB components.
pub fn hex2rgb(hex: &str) -> Result<Triple> {
    web::hex_to_rgb(hex).map(|rgb| rgb.to_array())
}

/// Convert a hex string to the shortest web form.
pub fn hex2web(hex: &str) -> Result<String> {
    web::hex_to_web(hex)
}

/// Convert a web string to a hex string. See [`web::web_to_hex`].
pub fn web2hex(web: &str, force_long: bool) -> Result<String> {
    web::web_to_hex(web, force_long)
}

/// Convert HSL components to a hex string, the 3 digit form when possible.
pub fn hsl2hex(hsl: Triple) -> String {
    rgb2hex(hsl2rgb(hsl), false)
}

/// Parse a hex string into HSL components.
pub fn hex2hsl(hex: &str) -> Result<Triple> {
    hex2rgb(hex).map(rgb2hsl)
}

/// Convert RGB components to the shortest web form.
pub fn rgb2web(rgb: Triple) -> String {
    web::rgb_to_web(&Rgb::from(rgb))
}

/// Parse a web string into RGB components.
pub fn web2rgb(web: &str) -> Result<Triple> {
    web::web_to_rgb(web).map(|rgb| rgb.to_array())
}

/// Parse a web string into HSL components.
pub fn web2hsl(web: &str) -> Result<Triple> {
    web2rgb(web).map(rgb2hsl)
}

/// Convert HSL components to the shortest web form.
pub fn hsl2web(hsl: Triple) -> String {
    rgb2web(hsl2rgb(hsl))
}

/// Return `nb + 1` HSL triples stepping linearly in HSL from `begin_hsl` to
/// `end_hsl`, both included. With `nb == 0` only `begin_hsl` is returned.
pub fn color_scale(begin_hsl: Triple, end_hsl: Triple, nb: usize) -> Vec<Triple> {
    let step: Triple = match nb {
        0 => [0.0; 3],
        _ => [0, 1, 2].map(|i| (end_hsl[i] - begin_hsl[i]) / nb as Component),
    };

    (0..=nb)
        .map(|r| [0, 1, 2].map(|i| begin_hsl[i] + step[i] * r as Component))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn conversions() {
        assert_eq!(rgb2hsl([1.0, 0.0, 0.0]), [0.0, 1.0, 0.5]);
        assert_eq!(hsv2rgb([0.0, 0.0, 0.25]), [0.25, 0.25, 0.25]);
        assert_eq!(rgb2cmy([1.0, 0.5, 0.0]), [0.0, 0.5, 1.0]);
        assert_eq!(cmy2cmyk([1.0, 1.0, 1.0]), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(cmyk2cmy([0.0, 0.0, 0.0, 1.0]), [1.0, 1.0, 1.0]);

        let [r, g, b] = yiq2rgb(rgb2yiq([0.2, 0.4, 0.6]));
        assert_component_eq!(r, 0.2);
        assert_component_eq!(g, 0.4);
        assert_component_eq!(b, 0.6);
    }

    #[test]
    fn text_conversions() {
        assert_eq!(rgb2hex([0.0, 0.999999, 1.0], false), "#0ff");
        assert_eq!(rgb2hex([0.0, 0.999999, 1.0], true), "#00ffff");
        assert_eq!(hex2rgb("#0f0").unwrap(), [0.0, 1.0, 0.0]);
        assert_eq!(hex2web("#ff0000").unwrap(), "red");
        assert_eq!(hsl2hex([0.0, 1.0, 0.5]), "#f00");
        assert_eq!(hex2hsl("#f00").unwrap(), [0.0, 1.0, 0.5]);
        assert_eq!(rgb2web([0.0, 0.0, 1.0]), "blue");
        assert_eq!(web2rgb("white").unwrap(), [1.0, 1.0, 1.0]);
        assert_eq!(web2hsl("black").unwrap(), [0.0, 0.0, 0.0]);
        assert_eq!(hsl2web([2.0 / 3.0, 1.0, 0.5]), "blue");
        assert!(hex2rgb("#aa").is_err());
    }

    #[test]
    fn scales() {
        let hexes = color_scale([0.0, 1.0, 0.5], [1.0, 1.0, 0.5], 3)
            .into_iter()
            .map(hsl2hex)
            .collect::<Vec<_>>();
        assert_eq!(hexes, ["#f00", "#0f0", "#00f", "#f00"]);

        let grays = color_scale([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], 15)
            .into_iter()
            .map(hsl2hex)
            .collect::<Vec<_>>();
        assert_eq!(grays.len(), 16);
        assert_eq!(grays[0], "#000");
        assert_eq!(grays[1], "#111");
        assert_eq!(grays[14], "#eee");
        assert_eq!(grays[15], "#fff");

        assert_eq!(color_scale([0.1, 0.2, 0.3], [0.4, 0.5, 0.6], 0), [[0.1, 0.2, 0.3]]);
    }
}
