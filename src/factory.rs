//! Configuration carried by colors, and factories that bind it.
//!
//! A [`ColorFactory`] builds colors the same way [`Color`] does, but every
//! color it produces carries the factory's [`Config`] instead of the default
//! one.
//!
//! ```rust
//! use colorant::{make_color_factory, HslEquivalence};
//! let factory = make_color_factory().equality(HslEquivalence);
//! let a = factory.parse("red").unwrap();
//! let b = factory.copy(&a);
//! assert!(a == b);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::color::{Color, Component, Space};
use crate::equality::{Equality, RgbEquivalence};
use crate::error::Result;
use crate::init::Init;
use crate::models::Rgb;
use crate::pick::{KeyExtractor, Pickable, Picker, RgbColorPicker, TypedHashKey};

/// The strategies a color is built with and passes on to the colors derived
/// from it.
#[derive(Clone)]
pub struct Config {
    /// Decides whether two colors are equal.
    pub equality: Arc<dyn Equality>,
    /// Maps pick keys to colors.
    pub picker: Arc<dyn Picker>,
    /// Reduces values to pick keys.
    pub pick_key: Arc<dyn KeyExtractor>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            equality: Arc::new(RgbEquivalence),
            picker: Arc::new(RgbColorPicker),
            pick_key: Arc::new(TypedHashKey),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config").finish_non_exhaustive()
    }
}

/// Builds colors that all share one [`Config`].
#[derive(Clone, Debug, Default)]
pub struct ColorFactory {
    config: Config,
}

impl ColorFactory {
    /// A factory with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory binding an existing configuration.
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Replace the equality strategy.
    pub fn equality(mut self, equality: impl Equality + 'static) -> Self {
        self.config.equality = Arc::new(equality);
        self
    }

    /// Replace the picker.
    pub fn picker(mut self, picker: impl Picker + 'static) -> Self {
        self.config.picker = Arc::new(picker);
        self
    }

    /// Replace the pick key extractor.
    pub fn pick_key(mut self, pick_key: impl KeyExtractor + 'static) -> Self {
        self.config.pick_key = Arc::new(pick_key);
        self
    }

    /// The configuration bound to every color of this factory.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Start building a color with this factory's configuration.
    pub fn init<'a>(&self) -> Init<'a> {
        Init::new(Some(self.config.clone()))
    }

    /// A black color.
    pub fn black(&self) -> Color {
        Color::with_config(Rgb::new(0.0, 0.0, 0.0), self.config.clone())
    }

    /// Parse a web string. See [`Color::parse`].
    pub fn parse(&self, web: &str) -> Result<Color> {
        self.init().web(web).build()
    }

    /// Create a color from a full tuple of components in `space`.
    pub fn from_space(&self, space: Space, values: &[Component]) -> Result<Color> {
        self.init().tuple(space, values).build()
    }

    /// Pick a reproducible color for a value with this factory's picker and
    /// pick key extractor.
    pub fn pick_for<T: Pickable>(&self, obj: &T) -> Result<Color> {
        self.init().pick_for(obj).build()
    }

    /// Copy a color. The copy carries this factory's configuration, not the
    /// one of `color`.
    pub fn copy(&self, color: &Color) -> Color {
        Color::with_config(color.rgb, self.config.clone())
    }
}

/// Create a factory with the default configuration. Use the builder methods
/// of [`ColorFactory`] to replace the equality strategy, picker or pick key
/// extractor.
pub fn make_color_factory() -> ColorFactory {
    ColorFactory::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equality::HslEquivalence;
    use crate::pick::{HashKey, PickKey, Spec};

    fn gray_is_gray(a: &Color, b: &Color) -> bool {
        a.hsl().saturation < 0.1 && b.hsl().saturation < 0.1
    }

    #[test]
    fn colors_carry_the_factory_config() {
        let factory = make_color_factory().equality(gray_is_gray);

        let white = factory.parse("white").unwrap();
        let black = factory.black();
        assert!(white == black);
        assert!(Color::parse("white").unwrap() != black);

        // Derived colors keep the configuration.
        let copy = white.clone();
        assert!(copy == black);
        assert!(white.factory().parse("gray").unwrap() == black);
    }

    #[test]
    fn copy_uses_the_factory_config() {
        let hsl = make_color_factory().equality(HslEquivalence);
        let a = Color::init().rgb([0.5, 0.5, 0.5]).build().unwrap();
        let b = Color::init().rgb([0.5, 0.5, 0.499]).build().unwrap();
        assert!(a == b);

        let a = hsl.copy(&a);
        assert_eq!(a.hex(), "#7f7f7f");
        assert!(a != b);
    }

    #[test]
    fn factory_pick_uses_its_picker_and_key() {
        let factory = make_color_factory()
            .pick_key(HashKey)
            .picker(|key: &PickKey| {
                Spec::Tuple(Space::Hsv, vec![key.0[0] as Component / 256.0, 1.0, 1.0])
            });

        let a = factory.pick_for(&7_u8).unwrap();
        let b = factory.pick_for(&7_u16).unwrap();
        // HashKey ignores the type, but u8 and u16 hash to different bytes.
        assert_ne!(a.hex(), b.hex());
        assert_eq!(a.hex(), factory.pick_for(&7_u8).unwrap().hex());
    }

    #[test]
    fn factory_shortcuts() {
        let factory = ColorFactory::new();
        let c = factory.from_space(Space::Cmyk, &[0.0, 0.0, 0.0, 1.0]).unwrap();
        assert_eq!(c.web(), "black");
        assert!(factory.from_space(Space::Cmyk, &[0.0, 0.0, 0.0]).is_err());
        assert_eq!(format!("{:?}", factory.config()), "Config { .. }");
    }
}
