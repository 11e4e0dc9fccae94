//! A [`Color`] represents a single color. It is stored as RGB and can be read
//! or written through any of the supported colorspaces.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::error::{Error, Result};
use crate::factory::{ColorFactory, Config};
use crate::init::Init;
use crate::models::{Cmy, Cmyk, Convert, Hsl, Hsv, Model, Rgb, Yiq};
use crate::pick::Pickable;
use crate::web;

/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Tolerance used to soften range checks and rounding of components.
pub const FLOAT_ERROR: Component = 0.000_000_5;

/// Represent three components of a color, in any colorspace.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

bitflags! {
    /// A set of colorspaces.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Spaces : u8 {
        /// The CMY colorspace.
        const CMY = 1 << 0;
        /// The CMYK colorspace.
        const CMYK = 1 << 1;
        /// The HSL colorspace.
        const HSL = 1 << 2;
        /// The HSV colorspace.
        const HSV = 1 << 3;
        /// The RGB colorspace.
        const RGB = 1 << 4;
        /// The YIQ colorspace.
        const YIQ = 1 << 5;
    }
}

/// The colorspaces a [`Color`] can be read and written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Space {
    /// Cyan, magenta and yellow, the subtractive complement of RGB.
    Cmy = 0,
    /// CMY with the shared black amount extracted into a key component.
    Cmyk = 1,
    /// Hue, saturation and luminance.
    Hsl = 2,
    /// Hue, saturation and value.
    Hsv = 3,
    /// Red, green and blue. This is how a [`Color`] is stored.
    Rgb = 4,
    /// Luma, in-phase and quadrature, as used by NTSC.
    Yiq = 5,
}

/// The range of values a single component accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Domain {
    /// Any value in `[0, 1]`.
    Unit,
    /// Any finite value. It is a fraction of a turn, so it wraps into
    /// `[0, 1)`.
    Cyclic,
    /// Any finite value, positive or negative.
    Signed,
}

impl Space {
    /// All colorspaces, sorted by name.
    pub const ALL: [Space; 6] = [
        Space::Cmy,
        Space::Cmyk,
        Space::Hsl,
        Space::Hsv,
        Space::Rgb,
        Space::Yiq,
    ];

    /// The lowercase name of the colorspace, also used as the prefix of
    /// qualified attribute names.
    pub fn name(self) -> &'static str {
        match self {
            Space::Cmy => Cmy::NAME,
            Space::Cmyk => Cmyk::NAME,
            Space::Hsl => Hsl::NAME,
            Space::Hsv => Hsv::NAME,
            Space::Rgb => Rgb::NAME,
            Space::Yiq => Yiq::NAME,
        }
    }

    /// Names of the components of this colorspace, in tuple order.
    pub fn components(self) -> &'static [&'static str] {
        match self {
            Space::Cmy => Cmy::COMPONENTS,
            Space::Cmyk => Cmyk::COMPONENTS,
            Space::Hsl => Hsl::COMPONENTS,
            Space::Hsv => Hsv::COMPONENTS,
            Space::Rgb => Rgb::COMPONENTS,
            Space::Yiq => Yiq::COMPONENTS,
        }
    }

    /// Find the position of a component in the tuple of this colorspace.
    pub fn component_index(self, name: &str) -> Option<usize> {
        self.components().iter().position(|c| *c == name)
    }

    /// The domain of the component at `index`.
    pub fn domain(self, index: usize) -> Domain {
        match (self, index) {
            (Space::Hsl | Space::Hsv, 0) => Domain::Cyclic,
            (Space::Yiq, 1 | 2) => Domain::Signed,
            _ => Domain::Unit,
        }
    }

    /// The flag representing this colorspace in a set of [`Spaces`].
    pub fn flag(self) -> Spaces {
        match self {
            Space::Cmy => Spaces::CMY,
            Space::Cmyk => Spaces::CMYK,
            Space::Hsl => Spaces::HSL,
            Space::Hsv => Spaces::HSV,
            Space::Rgb => Spaces::RGB,
            Space::Yiq => Spaces::YIQ,
        }
    }

    /// Look up a colorspace by its name.
    pub fn from_name(name: &str) -> Option<Space> {
        Space::ALL.into_iter().find(|space| space.name() == name)
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Implemented by models to tag them with their colorspace.
pub trait HasSpace {
    /// The colorspace of the model.
    const SPACE: Space;
}

/// A single color.
///
/// The color is stored as RGB with each component in `[0, 1]`. Every other
/// representation is computed when it is read, and every write converts back
/// to RGB. A color also carries the [`Config`] it was built with: the
/// equality strategy, picker and pick key extractor. Derived colors (clones,
/// range elements, interpolations) inherit it.
#[derive(Clone)]
pub struct Color {
    pub(crate) rgb: Rgb,
    pub(crate) config: Config,
}

macro_rules! component_accessors {
    ($($get:ident, $set:ident => $space:ident[$index:expr];)*) => {
        $(
            #[doc = concat!("Return the ", stringify!($get), " component of the color.")]
            pub fn $get(&self) -> Component {
                self.to_space(Space::$space)[$index]
            }

            #[doc = concat!("Set the ", stringify!($get), " component of the color.")]
            pub fn $set(&mut self, value: Component) -> Result<()> {
                self.set_component(Space::$space, $index, value)
            }
        )*
    };
}

impl Color {
    /// Create a black color with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Rgb::new(0.0, 0.0, 0.0), Config::default())
    }

    pub(crate) fn with_config(rgb: Rgb, config: Config) -> Self {
        Self { rgb, config }
    }

    /// Start building a color from keywords. See [`Init`].
    pub fn init<'a>() -> Init<'a> {
        Init::new(None)
    }

    /// Parse a color from a web string: a CSS color name, `#rgb` or
    /// `#rrggbb`.
    /// ```rust
    /// use colorant::Color;
    /// let blue = Color::parse("blue").unwrap();
    /// assert_eq!(blue.hex(), "#0000ff");
    /// ```
    pub fn parse(web: &str) -> Result<Self> {
        Self::init().web(web).build()
    }

    /// Create a color from RGB components.
    pub fn from_rgb(red: Component, green: Component, blue: Component) -> Result<Self> {
        Self::from_space(Space::Rgb, &[red, green, blue])
    }

    /// Create a color from a full tuple of components in `space`.
    pub fn from_space(space: Space, values: &[Component]) -> Result<Self> {
        Self::init().tuple(space, values).build()
    }

    /// Create a color from an xkcd color survey name, e.g. `"cloudy_blue"`.
    pub fn from_xkcd(name: &str) -> Result<Self> {
        Self::init().xkcd(name).build()
    }

    /// Pick a reproducible color for an arbitrary value, using the default
    /// picker and pick key extractor.
    pub fn pick_for<T: Pickable>(obj: &T) -> Result<Self> {
        Self::init().pick_for(obj).build()
    }

    /// The configuration this color was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// A factory producing colors with the same configuration as this one.
    pub fn factory(&self) -> ColorFactory {
        ColorFactory::from_config(self.config.clone())
    }

    /// Read the full tuple of this color in `space`.
    pub fn to_space(&self, space: Space) -> Vec<Component> {
        space.from_rgb(&self.rgb)
    }

    /// Replace this color with the full tuple `values` given in `space`.
    ///
    /// Nothing is changed when the tuple does not describe a valid color.
    pub fn set_space(&mut self, space: Space, values: &[Component]) -> Result<()> {
        self.rgb = space.to_rgb(values)?;
        Ok(())
    }

    /// Replace a single component of `space`.
    ///
    /// The full tuple is read, the component at `index` replaced and the
    /// whole tuple converted back to RGB.
    pub fn set_component(&mut self, space: Space, index: usize, value: Component) -> Result<()> {
        let mut values = self.to_space(space);
        let Some(slot) = values.get_mut(index) else {
            return Err(Error::UnknownAttribute(format!("{space}[{index}]")));
        };
        *slot = value;
        tracing::trace!(%space, index, value, "set component");
        self.set_space(space, &values)
    }

    /// Convert this color to the given model.
    pub fn to_model<M: Convert>(&self) -> M {
        M::from_rgb(&self.rgb)
    }

    /// Replace this color with the given model.
    pub fn set_model<M: Convert>(&mut self, model: M) -> Result<()> {
        self.set_space(M::SPACE, &model.to_values())
    }

    /// The color in the RGB colorspace.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// The color in the HSL colorspace.
    pub fn hsl(&self) -> Hsl {
        self.to_model()
    }

    /// The color in the HSV colorspace.
    pub fn hsv(&self) -> Hsv {
        self.to_model()
    }

    /// The color in the YIQ colorspace.
    pub fn yiq(&self) -> Yiq {
        self.to_model()
    }

    /// The color in the CMY colorspace.
    pub fn cmy(&self) -> Cmy {
        self.to_model()
    }

    /// The color in the CMYK colorspace.
    pub fn cmyk(&self) -> Cmyk {
        self.to_model()
    }

    /// Replace the color with RGB components.
    pub fn set_rgb(&mut self, rgb: Rgb) -> Result<()> {
        self.set_model(rgb)
    }

    /// Replace the color with HSL components.
    pub fn set_hsl(&mut self, hsl: Hsl) -> Result<()> {
        self.set_model(hsl)
    }

    /// Replace the color with HSV components.
    pub fn set_hsv(&mut self, hsv: Hsv) -> Result<()> {
        self.set_model(hsv)
    }

    /// Replace the color with YIQ components.
    pub fn set_yiq(&mut self, yiq: Yiq) -> Result<()> {
        self.set_model(yiq)
    }

    /// Replace the color with CMY components.
    pub fn set_cmy(&mut self, cmy: Cmy) -> Result<()> {
        self.set_model(cmy)
    }

    /// Replace the color with CMYK components.
    pub fn set_cmyk(&mut self, cmyk: Cmyk) -> Result<()> {
        self.set_model(cmyk)
    }

    // Only the component names declared by a single colorspace get typed
    // accessors. The others are reached through the models or `get`/`set`.
    component_accessors! {
        red, set_red => Rgb[0];
        green, set_green => Rgb[1];
        blue, set_blue => Rgb[2];
        luminance, set_luminance => Hsl[2];
        value, set_value => Hsv[2];
        luma, set_luma => Yiq[0];
        in_phase, set_in_phase => Yiq[1];
        quadrature, set_quadrature => Yiq[2];
        key, set_key => Cmyk[3];
    }

    /// The 6 digit hex representation, e.g. `#ff0000`.
    pub fn hex(&self) -> String {
        web::rgb_to_hex(&self.rgb)
    }

    /// The shortest hex representation, `#f00` when the digits allow it.
    pub fn hexs(&self) -> String {
        web::rgb_to_hexs(&self.rgb)
    }

    /// The shortest web representation: a color name, `#rgb` or `#rrggbb`.
    pub fn web(&self) -> String {
        web::rgb_to_web(&self.rgb)
    }

    /// Replace the color with a `#rgb` or `#rrggbb` hex string.
    pub fn set_hex(&mut self, hex: &str) -> Result<()> {
        self.rgb = web::hex_to_rgb(hex)?;
        Ok(())
    }

    /// Replace the color with a web string: a color name or hex string.
    pub fn set_web(&mut self, web: &str) -> Result<()> {
        self.rgb = web::web_to_rgb(web)?;
        Ok(())
    }

    /// Replace the color with an xkcd color survey name.
    pub fn set_xkcd(&mut self, name: &str) -> Result<()> {
        self.rgb = web::xkcd_to_rgb(name)?;
        Ok(())
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.web())
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Color {}>", self.web())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn default_color_is_black() {
        let c = Color::default();
        assert_eq!(c.rgb(), Rgb::new(0.0, 0.0, 0.0));
        assert_eq!(c.web(), "black");
    }

    #[test]
    fn spaces_are_sorted_by_name() {
        let names = Space::ALL.map(Space::name);
        assert_eq!(names, ["cmy", "cmyk", "hsl", "hsv", "rgb", "yiq"]);

        let mut sorted = names;
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn space_lookup() {
        assert_eq!(Space::from_name("hsv"), Some(Space::Hsv));
        assert_eq!(Space::from_name("HSV"), None);
        assert_eq!(Space::Cmyk.components(), ["cyan", "magenta", "yellow", "key"]);
        assert_eq!(Space::Yiq.component_index("quadrature"), Some(2));
        assert_eq!(Space::Hsl.domain(0), Domain::Cyclic);
        assert_eq!(Space::Yiq.domain(1), Domain::Signed);
        assert_eq!(Space::Yiq.domain(0), Domain::Unit);
        assert_eq!(Space::Cmyk.flag(), Spaces::CMYK);
    }

    #[test]
    fn named_colors_end_to_end() {
        assert_eq!(Color::parse("blue").unwrap().hex(), "#0000ff");

        let magenta = Color::init()
            .set("red", 1.0)
            .set("green", 0.0)
            .set("blue", 1.0)
            .build()
            .unwrap();
        assert_eq!(magenta.web(), "magenta");

        let red = Color::from_space(Space::Hsl, &[0.0, 1.0, 0.5]).unwrap();
        assert_eq!(red.web(), "red");

        assert_eq!(Color::parse("#fa3b2c").unwrap().web(), "#fa3b2c");
    }

    #[test]
    fn string_forms() {
        let c = Color::parse("#7f7f7f").unwrap();
        assert_eq!(c.to_string(), "#7f7f7f");
        assert_eq!(format!("{c:?}"), "<Color #7f7f7f>");

        let c: Color = "Red".parse().unwrap();
        assert_eq!(format!("{c:?}"), "<Color red>");
    }

    #[test]
    fn typed_component_accessors() {
        let mut c = Color::parse("blue").unwrap();
        assert_eq!(c.blue(), 1.0);
        assert_component_eq!(c.luminance(), 0.5);
        assert_component_eq!(c.hsl().hue, 2.0 / 3.0);

        c.set_luminance(0.25).unwrap();
        assert_eq!(c.hex(), "#00007f");

        c.set_red(1.0).unwrap();
        assert_component_eq!(c.red(), 1.0);
        assert_component_eq!(c.blue(), 0.5);

        c.set_key(1.0).unwrap();
        assert_eq!(c.web(), "black");
    }

    #[test]
    fn writing_hue_keeps_saturation_and_luminance() {
        let mut c = Color::parse("blue").unwrap();
        let mut hsl = c.hsl();
        hsl.hue = 0.0;
        c.set_hsl(hsl).unwrap();
        assert_eq!(c.hexs(), "#f00");
        assert_eq!(c.hsl(), Hsl::new(0.0, 1.0, 0.5));
    }

    #[test]
    fn invalid_writes_leave_the_color_untouched() {
        let mut c = Color::parse("blue").unwrap();
        assert!(matches!(c.set_luminance(1.5), Err(Error::Domain(_))));
        assert!(matches!(c.set_red(-0.5), Err(Error::Domain(_))));
        assert!(matches!(c.set_hex("#12"), Err(Error::Parse(..))));
        assert_eq!(c.hex(), "#0000ff");
    }

    #[test]
    fn hue_wraps_around() {
        let zero = Color::from_space(Space::Hsl, &[0.0, 0.7, 0.4]).unwrap();
        let one = Color::from_space(Space::Hsl, &[1.0, 0.7, 0.4]).unwrap();
        assert_component_eq!(zero.red(), one.red());
        assert_component_eq!(zero.green(), one.green());
        assert_component_eq!(zero.blue(), one.blue());

        let mut c = Color::new();
        c.set_hsv(Hsv::new(1.25, 1.0, 1.0)).unwrap();
        assert_component_eq!(c.hsv().hue, 0.25);
    }

    #[test]
    fn xkcd_names() {
        let mut c = Color::from_xkcd("cloudy_blue").unwrap();
        assert_eq!(c.hex(), "#acc2d9");

        c.set_xkcd("toxic_green").unwrap();
        assert_eq!(c.hex(), "#61de2a");

        assert!(Color::from_xkcd("no_such_color").is_err());
    }
}
