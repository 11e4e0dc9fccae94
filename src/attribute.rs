//! Access to the attributes of a [`Color`] by name.
//!
//! Every colorspace and every component can be reached by name. Components
//! can be named bare (`"saturation"`) or qualified with their colorspace
//! (`"hsl_saturation"`). A bare name declared by more than one colorspace is
//! ambiguous and has to be qualified.
//!
//! ```rust
//! use colorant::{Color, Value};
//! let mut c = Color::parse("blue").unwrap();
//! assert_eq!(c.get("hsl_saturation").unwrap(), Value::Number(1.0));
//! c.set("red", 1.0).unwrap();
//! assert_eq!(c.get("web").unwrap(), Value::from("magenta"));
//! assert!(c.get("saturation").is_err());
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::color::{Color, Component, Space, Spaces};
use crate::error::{Error, Result};

/// A readable and writable attribute of a [`Color`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// The full tuple of a colorspace, e.g. `"hsl"`.
    Tuple(Space),
    /// A single component of a colorspace, given by its index in the tuple.
    Component(Space, usize),
    /// The 6 digit hex form, `"hex"`.
    Hex,
    /// The shortest hex form, `"hexs"`.
    HexShort,
    /// The shortest web form, `"web"`.
    Web,
}

struct Registry {
    qualified: HashMap<String, (Space, usize)>,
    bare: HashMap<&'static str, Spaces>,
}

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();

    REGISTRY.get_or_init(|| {
        let mut qualified = HashMap::new();
        let mut bare: HashMap<&'static str, Spaces> = HashMap::new();

        for space in Space::ALL {
            for (index, component) in space.components().iter().enumerate() {
                qualified.insert(format!("{space}_{component}"), (space, index));
                *bare.entry(*component).or_insert(Spaces::empty()) |= space.flag();
            }
        }

        Registry { qualified, bare }
    })
}

/// Resolve an attribute name.
pub fn resolve(name: &str) -> Result<Attribute> {
    match name {
        "hex" => return Ok(Attribute::Hex),
        "hexs" => return Ok(Attribute::HexShort),
        "web" => return Ok(Attribute::Web),
        _ => {}
    }

    if let Some(space) = Space::from_name(name) {
        return Ok(Attribute::Tuple(space));
    }

    let registry = registry();

    if let Some(&(space, index)) = registry.qualified.get(name) {
        return Ok(Attribute::Component(space, index));
    }

    let Some(&spaces) = registry.bare.get(name) else {
        tracing::debug!(name, "unknown attribute");
        return Err(Error::UnknownAttribute(name.to_string()));
    };

    let candidates = Space::ALL
        .into_iter()
        .filter(|space| spaces.contains(space.flag()))
        .collect::<Vec<_>>();

    match candidates[..] {
        [space] => space
            .component_index(name)
            .map(|index| Attribute::Component(space, index))
            .ok_or_else(|| Error::UnknownAttribute(name.to_string())),
        _ => {
            tracing::debug!(name, ?spaces, "ambiguous attribute");
            Err(Error::AmbiguousAttribute {
                name: name.to_string(),
                alternatives: candidates
                    .into_iter()
                    .map(|space| format!("{space}_{name}"))
                    .collect(),
            })
        }
    }
}

/// A value read from or written to a named attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A single component.
    Number(Component),
    /// The full tuple of a colorspace.
    Tuple(Vec<Component>),
    /// A hex or web string.
    Text(String),
}

impl Value {
    fn shape(&self) -> &'static str {
        match self {
            Value::Number(_) => "a number",
            Value::Tuple(_) => "a tuple",
            Value::Text(_) => "text",
        }
    }
}

impl From<Component> for Value {
    fn from(value: Component) -> Self {
        Value::Number(value)
    }
}

impl From<Vec<Component>> for Value {
    fn from(value: Vec<Component>) -> Self {
        Value::Tuple(value)
    }
}

impl From<&[Component]> for Value {
    fn from(value: &[Component]) -> Self {
        Value::Tuple(value.to_vec())
    }
}

impl<const N: usize> From<[Component; N]> for Value {
    fn from(value: [Component; N]) -> Self {
        Value::Tuple(value.to_vec())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl Color {
    /// Read an attribute by name.
    pub fn get(&self, name: &str) -> Result<Value> {
        Ok(match resolve(name)? {
            Attribute::Tuple(space) => Value::Tuple(self.to_space(space)),
            Attribute::Component(space, index) => Value::Number(self.to_space(space)[index]),
            Attribute::Hex => Value::Text(self.hex()),
            Attribute::HexShort => Value::Text(self.hexs()),
            Attribute::Web => Value::Text(self.web()),
        })
    }

    /// Write an attribute by name.
    ///
    /// Writing a component reads the full tuple of its colorspace, replaces
    /// the component and converts the tuple back. Nothing is changed when the
    /// write fails.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let attribute = resolve(name)?;
        let value = value.into();

        tracing::trace!(name, ?attribute, ?value, "set attribute");

        match (attribute, &value) {
            (Attribute::Tuple(space), Value::Tuple(values)) => self.set_space(space, values),
            (Attribute::Component(space, index), Value::Number(v)) => {
                self.set_component(space, index, *v)
            }
            (Attribute::Hex | Attribute::HexShort, Value::Text(hex)) => self.set_hex(hex),
            (Attribute::Web, Value::Text(web)) => self.set_web(web),
            (attribute, value) => {
                let expected = match attribute {
                    Attribute::Tuple(_) => Value::Tuple(vec![]),
                    Attribute::Component(..) => Value::Number(0.0),
                    _ => Value::Text(String::new()),
                };
                Err(Error::Domain(format!(
                    "{name} takes {}, got {}",
                    expected.shape(),
                    value.shape()
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn qualified_names() {
        assert_eq!(resolve("hsl_hue"), Ok(Attribute::Component(Space::Hsl, 0)));
        assert_eq!(resolve("cmyk_key"), Ok(Attribute::Component(Space::Cmyk, 3)));
        assert_eq!(resolve("cmy_cyan"), Ok(Attribute::Component(Space::Cmy, 0)));
        assert_eq!(resolve("yiq_in_phase"), Ok(Attribute::Component(Space::Yiq, 1)));
    }

    #[test]
    fn bare_names() {
        assert_eq!(resolve("red"), Ok(Attribute::Component(Space::Rgb, 0)));
        assert_eq!(resolve("luminance"), Ok(Attribute::Component(Space::Hsl, 2)));
        assert_eq!(resolve("value"), Ok(Attribute::Component(Space::Hsv, 2)));
        assert_eq!(resolve("key"), Ok(Attribute::Component(Space::Cmyk, 3)));
        assert_eq!(resolve("hsv"), Ok(Attribute::Tuple(Space::Hsv)));
        assert_eq!(resolve("hexs"), Ok(Attribute::HexShort));
    }

    #[test]
    fn ambiguous_names_list_qualified_alternatives() {
        let err = resolve("saturation").unwrap_err();
        assert_eq!(
            err,
            Error::AmbiguousAttribute {
                name: "saturation".into(),
                alternatives: vec!["hsl_saturation".into(), "hsv_saturation".into()],
            }
        );
        assert_eq!(
            err.to_string(),
            "ambiguous attribute \"saturation\", use one of: hsl_saturation, hsv_saturation"
        );

        let Err(Error::AmbiguousAttribute { alternatives, .. }) = resolve("cyan") else {
            panic!("cyan is declared by cmy and cmyk");
        };
        assert_eq!(alternatives, ["cmy_cyan", "cmyk_cyan"]);

        assert!(Color::new().get("saturation").is_err());
        assert!(Color::new().get("hue").is_err());
    }

    #[test]
    fn unknown_names() {
        for name in ["lightness", "hsl_red", "rgb_", "Red", ""] {
            assert_eq!(resolve(name), Err(Error::UnknownAttribute(name.into())));
        }
    }

    #[test]
    fn get_and_set() {
        let mut c = Color::new();
        assert_eq!(c.get("hsl").unwrap(), Value::Tuple(vec![0.0, 0.0, 0.0]));
        assert_eq!(c.get("hex").unwrap(), Value::from("#000000"));

        c.set("hsl", [0.0, 1.0, 0.5]).unwrap();
        assert_eq!(c.get("web").unwrap(), Value::from("red"));
        assert_eq!(c.get("hexs").unwrap(), Value::from("#f00"));

        c.set("hsv_hue", 2.0 / 3.0).unwrap();
        assert_eq!(c.hex(), "#0000ff");

        c.set("web", "lime").unwrap();
        assert_eq!(c.get("green").unwrap(), Value::Number(1.0));

        c.set("hex", "#FFF").unwrap();
        assert_eq!(c.web(), "white");

        let Value::Number(luma) = c.get("luma").unwrap() else {
            panic!("luma is a number");
        };
        assert_component_eq!(luma, 1.0);
    }

    #[test]
    fn values_of_the_wrong_shape_are_rejected() {
        let mut c = Color::parse("blue").unwrap();
        assert_eq!(
            c.set("red", "high"),
            Err(Error::Domain("red takes a number, got text".into()))
        );
        assert!(matches!(c.set("hsl", 0.5), Err(Error::Domain(_))));
        assert!(matches!(c.set("web", [1.0, 0.0, 0.0]), Err(Error::Domain(_))));
        assert!(matches!(c.set("rgb", [1.0, 0.0]), Err(Error::Domain(_))));
        assert!(matches!(c.set("saturation", 0.5), Err(Error::AmbiguousAttribute { .. })));
        assert_eq!(c.web(), "blue");
    }
}
