//! Models are structs that represent a color in one colorspace, with a named
//! field for each component. They are the typed way to read and write a
//! [`Color`](crate::Color).

use crate::color::{Component, HasSpace};

mod cmy;
mod cmyk;
mod hsl;
mod hsv;
mod rgb;
mod yiq;

pub use cmy::Cmy;
pub use cmyk::Cmyk;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use rgb::Rgb;
pub use yiq::Yiq;

/// A trait implemented by every color model. Generated by `gen_model!`.
pub trait Model: Sized {
    /// The name of the colorspace of the model.
    const NAME: &'static str;

    /// Names of the components, in tuple order.
    const COMPONENTS: &'static [&'static str];

    /// Return the components in tuple order.
    fn to_values(&self) -> Vec<Component>;

    /// Build a model from components in tuple order. Returns `None` when the
    /// number of values does not match the number of components.
    fn from_values(values: &[Component]) -> Option<Self>;
}

/// Conversion of a model to and from RGB, the colorspace colors are stored
/// in.
pub trait Convert: Model + HasSpace {
    /// Convert a color in the RGB colorspace to this model.
    fn from_rgb(rgb: &Rgb) -> Self;

    /// Convert this model to the RGB colorspace.
    fn to_rgb(&self) -> Rgb;
}
