//! Model a color with the HSV notation.

use crate::color::{Component, HasSpace, Space};

colorant_macros::gen_model! {
    /// A color specified with the HSV notation.
    pub struct Hsv {
        /// The hue component of the color, as a fraction of a full turn.
        pub hue: Component,
        /// The saturation component of the color.
        pub saturation: Component,
        /// The value component of the color.
        pub value: Component,
    }
}

impl HasSpace for Hsv {
    const SPACE: Space = Space::Hsv;
}
