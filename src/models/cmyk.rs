//! Model a color in the CMYK colorspace.

use crate::color::{Component, HasSpace, Space};

colorant_macros::gen_model! {
    /// A color specified with cyan, magenta, yellow and a key (black)
    /// component.
    pub struct Cmyk {
        /// The cyan component of the color.
        pub cyan: Component,
        /// The magenta component of the color.
        pub magenta: Component,
        /// The yellow component of the color.
        pub yellow: Component,
        /// The key (black) component of the color.
        pub key: Component,
    }
}

impl HasSpace for Cmyk {
    const SPACE: Space = Space::Cmyk;
}
