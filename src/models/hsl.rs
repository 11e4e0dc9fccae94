//! Model a color with the HSL notation.

use crate::color::{Component, HasSpace, Space};

colorant_macros::gen_model! {
    /// A color specified with the HSL notation.
    pub struct Hsl {
        /// The hue component of the color, as a fraction of a full turn.
        pub hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The luminance component of the color.
        luminance: Component,
    }
}

impl HasSpace for Hsl {
    const SPACE: Space = Space::Hsl;
}
