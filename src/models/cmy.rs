//! Model a color in the CMY colorspace.

use crate::color::{Component, HasSpace, Space};

colorant_macros::gen_model! {
    /// A color specified with subtractive cyan, magenta and yellow.
    pub struct Cmy {
        /// The cyan component of the color.
        pub cyan: Component,
        /// The magenta component of the color.
        pub magenta: Component,
        /// The yellow component of the color.
        pub yellow: Component,
    }
}

impl HasSpace for Cmy {
    const SPACE: Space = Space::Cmy;
}
