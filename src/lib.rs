//! colorant represents a single color and converts it between the RGB, HSL,
//! HSV, YIQ, CMY and CMYK colorspaces and a compact web format: a CSS color
//! name, `#rgb` or `#rrggbb`.
//!
//! ```rust
//! use colorant::Color;
//!
//! let mut c = Color::parse("blue").unwrap();
//! assert_eq!(c.hex(), "#0000ff");
//!
//! c.set_luminance(0.25).unwrap();
//! assert_eq!(c.web(), "#00007f");
//!
//! c.set("hsl_hue", 0.0).unwrap();
//! assert_eq!(c.web(), "#7f0000");
//! ```
//!
//! Besides conversions, colors can be compared with a configurable
//! [`Equality`], picked for arbitrary values with a [`Picker`], and
//! interpolated with [`Color::range_to`]. A [`ColorFactory`] builds colors
//! sharing one configuration.

#![deny(missing_docs)]

mod attribute;
mod color;
mod convert;
mod equality;
mod error;
mod factory;
pub mod functions;
mod init;
mod interpolate;
mod math;
pub mod models;
pub mod names;
mod pick;
pub mod web;
mod xkcd;


pub use attribute::{resolve, Attribute, Value};
pub use color::{Color, Component, Components, Domain, HasSpace, Space, Spaces, FLOAT_ERROR};
pub use equality::{Equality, HslEquivalence, RgbEquivalence};
pub use error::{Error, Result};
pub use factory::{make_color_factory, ColorFactory, Config};
pub use init::Init;
pub use interpolate::Range;
pub use pick::{
    ByDisplay, DigestRgbPicker, HashKey, KeyExtractor, PickKey, Pickable, Picker, RgbColorPicker,
    Spec, StableHasher, TypedHashKey,
};
