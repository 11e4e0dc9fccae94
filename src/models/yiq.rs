//! Model a color in the YIQ colorspace.

use crate::color::{Component, HasSpace, Space};

colorant_macros::gen_model! {
    /// A color specified with luma and two signed chrominance components.
    pub struct Yiq {
        /// The luma component of the color, in `[0, 1]`.
        pub luma: Component,
        /// The in-phase chrominance component, roughly orange to blue.
        pub in_phase: Component,
        /// The quadrature chrominance component, roughly purple to green.
        pub quadrature: Component,
    }
}

impl HasSpace for Yiq {
    const SPACE: Space = Space::Yiq;
}
