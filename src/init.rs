//! Building colors from keywords.
//!
//! A color is built from at most one base: a value to pick a color for,
//! another color, a web string, an xkcd name or a full tuple of one
//! colorspace. Without a base it starts black. Single attributes are then
//! written on top of a base, except on a tuple. Combining two bases is an
//! error.
//!
//! ```rust
//! use colorant::{Color, Error};
//! let c = Color::init().set("red", 1.0).set("blue", 1.0).build().unwrap();
//! assert_eq!(c.web(), "magenta");
//!
//! let c = Color::init().web("blue").set("luminance", 0.75).build().unwrap();
//! assert_eq!(c.hex(), "#7f7fff");
//!
//! let err = Color::init().rgb([1.0, 0.0, 0.0]).set("red", 1.0).build().unwrap_err();
//! assert_eq!(err, Error::Conflict("rgb".into(), "red".into()));
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::attribute::Value;
use crate::color::{Color, Component, Space};
use crate::equality::Equality;
use crate::error::{Error, Result};
use crate::factory::Config;
use crate::models::Rgb;
use crate::pick::{KeyExtractor, Pickable, Picker};
use crate::web;

/// A builder for a [`Color`]. Created with [`Color::init`] or
/// [`ColorFactory::init`](crate::ColorFactory::init).
#[must_use]
pub struct Init<'a> {
    binding: Option<Config>,
    equality: Option<Arc<dyn Equality>>,
    picker: Option<Arc<dyn Picker>>,
    pick_key: Option<Arc<dyn KeyExtractor>>,
    pick_for: Option<&'a dyn Pickable>,
    color: Option<&'a Color>,
    web: Option<&'a str>,
    xkcd: Option<&'a str>,
    tuples: Vec<(Space, Vec<Component>)>,
    attributes: BTreeMap<&'a str, Value>,
}

macro_rules! tuple_keywords {
    ($($name:ident($space:ident, $n:literal);)*) => {
        $(
            #[doc = concat!("Build from a full ", stringify!($name), " tuple.")]
            pub fn $name(self, values: [Component; $n]) -> Self {
                self.tuple(Space::$space, &values)
            }
        )*
    };
}

impl<'a> Init<'a> {
    pub(crate) fn new(binding: Option<Config>) -> Self {
        Self {
            binding,
            equality: None,
            picker: None,
            pick_key: None,
            pick_for: None,
            color: None,
            web: None,
            xkcd: None,
            tuples: Vec::new(),
            attributes: BTreeMap::new(),
        }
    }

    /// Pick the color for a value with the configured picker.
    pub fn pick_for<T: Pickable>(mut self, obj: &'a T) -> Self {
        self.pick_for = Some(obj);
        self
    }

    /// Copy another color. Its configuration is used unless a factory or an
    /// override on this builder supplies one.
    pub fn color(mut self, color: &'a Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Parse a web string: a CSS color name, `#rgb` or `#rrggbb`.
    pub fn web(mut self, web: &'a str) -> Self {
        self.web = Some(web);
        self
    }

    /// Look up an xkcd color survey name.
    pub fn xkcd(mut self, name: &'a str) -> Self {
        self.xkcd = Some(name);
        self
    }

    /// Build from a full tuple of components in `space`.
    pub fn tuple(mut self, space: Space, values: &[Component]) -> Self {
        self.tuples.push((space, values.to_vec()));
        self
    }

    tuple_keywords! {
        cmy(Cmy, 3);
        cmyk(Cmyk, 4);
        hsl(Hsl, 3);
        hsv(Hsv, 3);
        rgb(Rgb, 3);
        yiq(Yiq, 3);
    }

    /// Set a single attribute, bare or qualified. Attributes are written in
    /// order of their names, on top of the base or on black without one.
    /// They can not be combined with a tuple.
    pub fn set(mut self, name: &'a str, value: impl Into<Value>) -> Self {
        self.attributes.insert(name, value.into());
        self
    }

    /// Override the equality strategy.
    pub fn equality(mut self, equality: impl Equality + 'static) -> Self {
        self.equality = Some(Arc::new(equality));
        self
    }

    /// Override the picker.
    pub fn picker(mut self, picker: impl Picker + 'static) -> Self {
        self.picker = Some(Arc::new(picker));
        self
    }

    /// Override the pick key extractor.
    pub fn pick_key(mut self, pick_key: impl KeyExtractor + 'static) -> Self {
        self.pick_key = Some(Arc::new(pick_key));
        self
    }

    /// The supplied sources that exclude each other, in order of precedence.
    /// Attributes only count when a tuple is given.
    fn sources(&self) -> Vec<String> {
        let mut sources = Vec::new();
        if self.pick_for.is_some() {
            sources.push("pick_for".to_string());
        }
        if self.color.is_some() {
            sources.push("color".to_string());
        }
        if self.web.is_some() {
            sources.push("web".to_string());
        }
        if self.xkcd.is_some() {
            sources.push("xkcd".to_string());
        }
        sources.extend(self.tuples.iter().map(|(space, _)| space.to_string()));
        if !self.tuples.is_empty() {
            if let Some(name) = self.attributes.keys().next() {
                sources.push(name.to_string());
            }
        }
        sources
    }

    fn config(&self) -> Config {
        let mut config = self
            .binding
            .clone()
            .or_else(|| self.color.map(|color| color.config.clone()))
            .unwrap_or_default();

        if let Some(equality) = &self.equality {
            config.equality = Arc::clone(equality);
        }
        if let Some(picker) = &self.picker {
            config.picker = Arc::clone(picker);
        }
        if let Some(pick_key) = &self.pick_key {
            config.pick_key = Arc::clone(pick_key);
        }

        config
    }

    /// Build the color.
    pub fn build(self) -> Result<Color> {
        if let [first, second, ..] = &self.sources()[..] {
            tracing::debug!(%first, %second, "conflicting sources");
            return Err(Error::Conflict(first.clone(), second.clone()));
        }

        let config = self.config();

        let rgb = if let Some(obj) = self.pick_for {
            let key = config.pick_key.key(obj);
            config.picker.pick(&key).to_rgb()?
        } else if let Some(color) = self.color {
            color.rgb
        } else if let Some(web) = self.web {
            web::web_to_rgb(web)?
        } else if let Some(name) = self.xkcd {
            web::xkcd_to_rgb(name)?
        } else if let Some((space, values)) = self.tuples.first() {
            space.to_rgb(values)?
        } else {
            Rgb::new(0.0, 0.0, 0.0)
        };

        let mut color = Color::with_config(rgb, config);
        for (name, value) in self.attributes {
            color.set(name, value)?;
        }

        tracing::trace!(?color, "built color");

        Ok(color)
    }
}
