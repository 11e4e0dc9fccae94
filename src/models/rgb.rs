//! Model a color in the RGB colorspace.

use crate::color::{Component, Components, HasSpace, Space};

colorant_macros::gen_model! {
    /// A color specified with red, green and blue components in `[0, 1]`.
    pub struct Rgb {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

impl HasSpace for Rgb {
    const SPACE: Space = Space::Rgb;
}

impl From<Rgb> for Components {
    fn from(value: Rgb) -> Self {
        Components(value.red, value.green, value.blue)
    }
}

impl From<Components> for Rgb {
    fn from(value: Components) -> Self {
        Rgb::new(value.0, value.1, value.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Model;

    #[test]
    fn basic_rgb_colors() {
        let rgb = Rgb::new(0.1, 0.2, 0.3);
        assert_eq!(rgb.red, 0.1);
        assert_eq!(rgb.green, 0.2);
        assert_eq!(rgb.blue, 0.3);
        assert_eq!(rgb.to_array(), [0.1, 0.2, 0.3]);
        assert_eq!(Rgb::from([0.1, 0.2, 0.3]), rgb);
        assert_eq!(Components::from(rgb), Components(0.1, 0.2, 0.3));
    }

    #[test]
    fn model_description() {
        assert_eq!(Rgb::NAME, "rgb");
        assert_eq!(Rgb::COMPONENTS, ["red", "green", "blue"]);
        assert_eq!(Rgb::SPACE, Space::Rgb);
        assert_eq!(Rgb::from_values(&[1.0, 0.5, 0.0]), Some(Rgb::new(1.0, 0.5, 0.0)));
        assert_eq!(Rgb::from_values(&[1.0, 0.5]), None);
    }
}
