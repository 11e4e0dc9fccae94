//! The CSS color keywords and lookups between names and hex values.
//!
//! The table is listed in ascending hex order. When several names share a hex
//! value, the first one listed is the one colors are displayed with: `cyan`
//! over `aqua`, `magenta` over `fuchsia` and `gray` over `grey`.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::models::{Convert, Hsl, Rgb};
use crate::web;

/// All CSS color keywords with their 6 digit hex value.
#[rustfmt::skip]
pub static CSS_COLORS: &[(&str, &str)] = &[
    ("black", "#000000"),
    ("navy", "#000080"),
    ("darkblue", "#00008b"),
    ("mediumblue", "#0000cd"),
    ("blue", "#0000ff"),
    ("darkgreen", "#006400"),
    ("green", "#008000"),
    ("teal", "#008080"),
    ("darkcyan", "#008b8b"),
    ("deepskyblue", "#00bfff"),
    ("darkturquoise", "#00ced1"),
    ("mediumspringgreen", "#00fa9a"),
    ("lime", "#00ff00"),
    ("springgreen", "#00ff7f"),
    ("cyan", "#00ffff"),
    ("aqua", "#00ffff"),
    ("midnightblue", "#191970"),
    ("dodgerblue", "#1e90ff"),
    ("lightseagreen", "#20b2aa"),
    ("forestgreen", "#228b22"),
    ("seagreen", "#2e8b57"),
    ("darkslategray", "#2f4f4f"),
    ("darkslategrey", "#2f4f4f"),
    ("limegreen", "#32cd32"),
    ("mediumseagreen", "#3cb371"),
    ("turquoise", "#40e0d0"),
    ("royalblue", "#4169e1"),
    ("steelblue", "#4682b4"),
    ("darkslateblue", "#483d8b"),
    ("mediumturquoise", "#48d1cc"),
    ("indigo", "#4b0082"),
    ("darkolivegreen", "#556b2f"),
    ("cadetblue", "#5f9ea0"),
    ("cornflowerblue", "#6495ed"),
    ("rebeccapurple", "#663399"),
    ("mediumaquamarine", "#66cdaa"),
    ("dimgray", "#696969"),
    ("dimgrey", "#696969"),
    ("slateblue", "#6a5acd"),
    ("olivedrab", "#6b8e23"),
    ("slategray", "#708090"),
    ("slategrey", "#708090"),
    ("lightslategray", "#778899"),
    ("lightslategrey", "#778899"),
    ("mediumslateblue", "#7b68ee"),
    ("lawngreen", "#7cfc00"),
    ("chartreuse", "#7fff00"),
    ("aquamarine", "#7fffd4"),
    ("maroon", "#800000"),
    ("purple", "#800080"),
    ("olive", "#808000"),
    ("gray", "#808080"),
    ("grey", "#808080"),
    ("skyblue", "#87ceeb"),
    ("lightskyblue", "#87cefa"),
    ("blueviolet", "#8a2be2"),
    ("darkred", "#8b0000"),
    ("darkmagenta", "#8b008b"),
    ("saddlebrown", "#8b4513"),
    ("darkseagreen", "#8fbc8f"),
    ("lightgreen", "#90ee90"),
    ("mediumpurple", "#9370db"),
    ("darkviolet", "#9400d3"),
    ("palegreen", "#98fb98"),
    ("darkorchid", "#9932cc"),
    ("yellowgreen", "#9acd32"),
    ("sienna", "#a0522d"),
    ("brown", "#a52a2a"),
    ("darkgray", "#a9a9a9"),
    ("darkgrey", "#a9a9a9"),
    ("lightblue", "#add8e6"),
    ("greenyellow", "#adff2f"),
    ("paleturquoise", "#afeeee"),
    ("lightsteelblue", "#b0c4de"),
    ("powderblue", "#b0e0e6"),
    ("firebrick", "#b22222"),
    ("darkgoldenrod", "#b8860b"),
    ("mediumorchid", "#ba55d3"),
    ("rosybrown", "#bc8f8f"),
    ("darkkhaki", "#bdb76b"),
    ("silver", "#c0c0c0"),
    ("mediumvioletred", "#c71585"),
    ("indianred", "#cd5c5c"),
    ("peru", "#cd853f"),
    ("chocolate", "#d2691e"),
    ("tan", "#d2b48c"),
    ("lightgray", "#d3d3d3"),
    ("lightgrey", "#d3d3d3"),
    ("thistle", "#d8bfd8"),
    ("orchid", "#da70d6"),
    ("goldenrod", "#daa520"),
    ("palevioletred", "#db7093"),
    ("crimson", "#dc143c"),
    ("gainsboro", "#dcdcdc"),
    ("plum", "#dda0dd"),
    ("burlywood", "#deb887"),
    ("lightcyan", "#e0ffff"),
    ("lavender", "#e6e6fa"),
    ("darksalmon", "#e9967a"),
    ("violet", "#ee82ee"),
    ("palegoldenrod", "#eee8aa"),
    ("lightcoral", "#f08080"),
    ("khaki", "#f0e68c"),
    ("aliceblue", "#f0f8ff"),
    ("honeydew", "#f0fff0"),
    ("azure", "#f0ffff"),
    ("sandybrown", "#f4a460"),
    ("wheat", "#f5deb3"),
    ("beige", "#f5f5dc"),
    ("whitesmoke", "#f5f5f5"),
    ("mintcream", "#f5fffa"),
    ("ghostwhite", "#f8f8ff"),
    ("salmon", "#fa8072"),
    ("antiquewhite", "#faebd7"),
    ("linen", "#faf0e6"),
    ("lightgoldenrodyellow", "#fafad2"),
    ("oldlace", "#fdf5e6"),
    ("red", "#ff0000"),
    ("magenta", "#ff00ff"),
    ("fuchsia", "#ff00ff"),
    ("deeppink", "#ff1493"),
    ("orangered", "#ff4500"),
    ("tomato", "#ff6347"),
    ("hotpink", "#ff69b4"),
    ("coral", "#ff7f50"),
    ("darkorange", "#ff8c00"),
    ("lightsalmon", "#ffa07a"),
    ("orange", "#ffa500"),
    ("lightpink", "#ffb6c1"),
    ("pink", "#ffc0cb"),
    ("gold", "#ffd700"),
    ("peachpuff", "#ffdab9"),
    ("navajowhite", "#ffdead"),
    ("moccasin", "#ffe4b5"),
    ("bisque", "#ffe4c4"),
    ("mistyrose", "#ffe4e1"),
    ("blanchedalmond", "#ffebcd"),
    ("papayawhip", "#ffefd5"),
    ("lavenderblush", "#fff0f5"),
    ("seashell", "#fff5ee"),
    ("cornsilk", "#fff8dc"),
    ("lemonchiffon", "#fffacd"),
    ("floralwhite", "#fffaf0"),
    ("snow", "#fffafa"),
    ("yellow", "#ffff00"),
    ("lightyellow", "#ffffe0"),
    ("ivory", "#fffff0"),
    ("white", "#ffffff"),
];

struct Lookup {
    by_name: HashMap<&'static str, &'static str>,
    by_hex: HashMap<&'static str, &'static str>,
}

fn lookup() -> &'static Lookup {
    static LOOKUP: OnceLock<Lookup> = OnceLock::new();

    LOOKUP.get_or_init(|| {
        let mut by_hex = HashMap::with_capacity(CSS_COLORS.len());
        for &(name, hex) in CSS_COLORS {
            by_hex.entry(hex).or_insert(name);
        }

        Lookup {
            by_name: CSS_COLORS.iter().copied().collect(),
            by_hex,
        }
    })
}

/// Find the 6 digit hex value of a CSS color name, ignoring ASCII case.
pub fn name_to_hex(name: &str) -> Option<&'static str> {
    let by_name = &lookup().by_name;
    by_name
        .get(name)
        .or_else(|| by_name.get(name.to_ascii_lowercase().as_str()))
        .copied()
}

/// Find the preferred CSS color name of a lowercase 6 digit hex value.
pub fn hex_to_name(hex: &str) -> Option<&'static str> {
    lookup().by_hex.get(hex).copied()
}

/// The 6 digit hex value of a named color.
/// ```rust
/// assert_eq!(colorant::names::hex("Tomato"), Some("#ff6347"));
/// ```
pub fn hex(name: &str) -> Option<&'static str> {
    name_to_hex(name)
}

/// The RGB components of a named color.
pub fn rgb(name: &str) -> Option<Rgb> {
    name_to_hex(name).and_then(|hex| web::hex_to_rgb(hex).ok())
}

/// The HSL components of a named color.
pub fn hsl(name: &str) -> Option<Hsl> {
    rgb(name).map(|rgb| Hsl::from_rgb(&rgb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn table_is_complete_and_sorted() {
        assert_eq!(CSS_COLORS.len(), 148);
        assert!(CSS_COLORS.windows(2).all(|w| w[0].1 <= w[1].1));
        assert!(CSS_COLORS
            .iter()
            .all(|(name, hex)| hex.len() == 7 && name.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn first_name_wins_reverse_lookups() {
        assert_eq!(hex_to_name("#00ffff"), Some("cyan"));
        assert_eq!(hex_to_name("#ff00ff"), Some("magenta"));
        assert_eq!(hex_to_name("#808080"), Some("gray"));
        assert_eq!(hex_to_name("#2f4f4f"), Some("darkslategray"));
        assert_eq!(hex_to_name("#663399"), Some("rebeccapurple"));
        assert_eq!(hex_to_name("#fa3b2c"), None);
    }

    #[test]
    fn every_alias_is_still_accepted() {
        assert_eq!(name_to_hex("aqua"), Some("#00ffff"));
        assert_eq!(name_to_hex("fuchsia"), Some("#ff00ff"));
        assert_eq!(name_to_hex("lightgrey"), Some("#d3d3d3"));
    }

    #[test]
    fn names_ignore_case() {
        assert_eq!(name_to_hex("RED"), Some("#ff0000"));
        assert_eq!(name_to_hex("DarkSlateBlue"), Some("#483d8b"));
        assert_eq!(name_to_hex("pinky"), None);
    }

    #[test]
    fn quick_access() {
        assert_eq!(hex("white"), Some("#ffffff"));
        assert_eq!(rgb("blue"), Some(Rgb::new(0.0, 0.0, 1.0)));

        let hsl = hsl("lime").unwrap();
        assert_component_eq!(hsl.hue, 1.0 / 3.0);
        assert_component_eq!(hsl.saturation, 1.0);
        assert_component_eq!(hsl.luminance, 0.5);

        assert_eq!(rgb("no such color"), None);
    }
}
