//! Each colorspace is modeled with its own type. Every model converts to and
//! from RGB, which is how a [`Color`](crate::Color) is stored. Conversions
//! between two other colorspaces go through RGB.
//!
//! NOTE: Hue is a fraction of a full turn in `[0, 1)`. When a color has no
//!       chroma, hue and saturation are both 0.
//! NOTE: Converting a model to RGB does not validate it. Validation happens
//!       in [`Space::to_rgb`], which is what colors use for every write.
//!
//! ```rust
//! use colorant::models::{Convert, Hsl, Rgb};
//! let red = Hsl::new(0.0, 1.0, 0.5).to_rgb();
//! assert_eq!(red, Rgb::new(1.0, 0.0, 0.0));
//! assert_eq!(red.to_cmyk().key, 0.0);
//! ```

use crate::{
    color::{Component, Components, Domain, Space, FLOAT_ERROR},
    error::{Error, Result},
    models::{Cmy, Cmyk, Convert, Hsl, Hsv, Model, Rgb, Yiq},
};

impl Space {
    /// Convert RGB components to the full tuple of this colorspace.
    pub fn from_rgb(self, rgb: &Rgb) -> Vec<Component> {
        macro_rules! from_rgb {
            ($m:ident) => {{
                $m::from_rgb(rgb).to_values()
            }};
        }

        match self {
            Space::Cmy => from_rgb!(Cmy),
            Space::Cmyk => from_rgb!(Cmyk),
            Space::Hsl => from_rgb!(Hsl),
            Space::Hsv => from_rgb!(Hsv),
            Space::Rgb => from_rgb!(Rgb),
            Space::Yiq => from_rgb!(Yiq),
        }
    }

    /// Convert a full tuple of this colorspace to RGB.
    ///
    /// Each value is checked against the [`Domain`] of its component, and
    /// the result must lie within the RGB gamut. Values that overshoot by
    /// less than [`FLOAT_ERROR`] are clamped.
    pub fn to_rgb(self, values: &[Component]) -> Result<Rgb> {
        let expected = self.components().len();
        if values.len() != expected {
            return Err(Error::Domain(format!(
                "{self} takes {expected} components, got {}",
                values.len()
            )));
        }

        let values = values
            .iter()
            .enumerate()
            .map(|(index, &value)| self.check(index, value))
            .collect::<Result<Vec<_>>>()?;

        macro_rules! to_rgb {
            ($m:ident) => {{
                $m::from_values(&values).map(|model| model.to_rgb())
            }};
        }

        let rgb = match self {
            Space::Cmy => to_rgb!(Cmy),
            Space::Cmyk => to_rgb!(Cmyk),
            Space::Hsl => to_rgb!(Hsl),
            Space::Hsv => to_rgb!(Hsv),
            Space::Rgb => to_rgb!(Rgb),
            Space::Yiq => to_rgb!(Yiq),
        }
        .ok_or_else(|| Error::Domain(format!("{self} takes {expected} components")))?;

        tracing::trace!(space = %self, ?values, ?rgb, "converted to rgb");

        into_gamut(self, rgb)
    }

    fn check(self, index: usize, value: Component) -> Result<Component> {
        let name = self.components()[index];

        if !value.is_finite() {
            tracing::debug!(space = %self, name, value, "rejected component");
            return Err(Error::Domain(format!(
                "{self}_{name} must be a finite number, got {value}"
            )));
        }

        match self.domain(index) {
            Domain::Unit if !in_unit_range(value) => {
                tracing::debug!(space = %self, name, value, "rejected component");
                Err(Error::Domain(format!(
                    "{self}_{name} must be between 0 and 1, got {value}"
                )))
            }
            Domain::Unit => Ok(value.clamp(0.0, 1.0)),
            Domain::Cyclic | Domain::Signed => Ok(value),
        }
    }
}

fn in_unit_range(value: Component) -> bool {
    (-FLOAT_ERROR..=1.0 + FLOAT_ERROR).contains(&value)
}

fn into_gamut(space: Space, rgb: Rgb) -> Result<Rgb> {
    if rgb.to_array().into_iter().all(in_unit_range) {
        Ok(Components::from(rgb).map(|v| v.clamp(0.0, 1.0)).into())
    } else {
        tracing::debug!(%space, ?rgb, "out of gamut");
        Err(Error::Domain(format!(
            "{space} components are outside of the rgb gamut: ({}, {}, {})",
            rgb.red, rgb.green, rgb.blue
        )))
    }
}

impl Convert for Rgb {
    fn from_rgb(rgb: &Rgb) -> Self {
        *rgb
    }

    fn to_rgb(&self) -> Rgb {
        *self
    }
}

impl Convert for Hsl {
    fn from_rgb(rgb: &Rgb) -> Self {
        let Components(hue, saturation, luminance) = util::rgb_to_hsl(&(*rgb).into());
        Hsl::new(hue, saturation, luminance)
    }

    fn to_rgb(&self) -> Rgb {
        util::hsl_to_rgb(&Components(self.hue, self.saturation, self.luminance)).into()
    }
}

impl Convert for Hsv {
    fn from_rgb(rgb: &Rgb) -> Self {
        let Components(hue, saturation, value) = util::rgb_to_hsv(&(*rgb).into());
        Hsv::new(hue, saturation, value)
    }

    fn to_rgb(&self) -> Rgb {
        util::hsv_to_rgb(&Components(self.hue, self.saturation, self.value)).into()
    }
}

impl Convert for Yiq {
    fn from_rgb(rgb: &Rgb) -> Self {
        let Components(luma, in_phase, quadrature) = util::rgb_to_yiq(&(*rgb).into());
        Yiq::new(luma, in_phase, quadrature)
    }

    fn to_rgb(&self) -> Rgb {
        util::yiq_to_rgb(&Components(self.luma, self.in_phase, self.quadrature)).into()
    }
}

impl Convert for Cmy {
    fn from_rgb(rgb: &Rgb) -> Self {
        let Components(cyan, magenta, yellow) = util::complement(&(*rgb).into());
        Cmy::new(cyan, magenta, yellow)
    }

    fn to_rgb(&self) -> Rgb {
        util::complement(&Components(self.cyan, self.magenta, self.yellow)).into()
    }
}

impl Convert for Cmyk {
    fn from_rgb(rgb: &Rgb) -> Self {
        Cmy::from_rgb(rgb).to_cmyk()
    }

    fn to_rgb(&self) -> Rgb {
        self.to_cmy().to_rgb()
    }
}

impl Rgb {
    /// Convert a color in the RGB colorspace to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        Hsl::from_rgb(self)
    }

    /// Convert a color in the RGB colorspace to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        Hsv::from_rgb(self)
    }

    /// Convert a color in the RGB colorspace to the YIQ colorspace.
    pub fn to_yiq(&self) -> Yiq {
        Yiq::from_rgb(self)
    }

    /// Convert a color in the RGB colorspace to the CMY colorspace.
    pub fn to_cmy(&self) -> Cmy {
        Cmy::from_rgb(self)
    }

    /// Convert a color in the RGB colorspace to the CMYK colorspace.
    pub fn to_cmyk(&self) -> Cmyk {
        Cmyk::from_rgb(self)
    }
}

impl Cmy {
    /// Extract the shared black amount into a key component.
    pub fn to_cmyk(&self) -> Cmyk {
        let (Components(cyan, magenta, yellow), key) =
            util::cmy_to_cmyk(&Components(self.cyan, self.magenta, self.yellow));
        Cmyk::new(cyan, magenta, yellow, key)
    }
}

impl Cmyk {
    /// Fold the key component back into cyan, magenta and yellow.
    pub fn to_cmy(&self) -> Cmy {
        let Components(cyan, magenta, yellow) =
            util::cmyk_to_cmy(&Components(self.cyan, self.magenta, self.yellow), self.key);
        Cmy::new(cyan, magenta, yellow)
    }
}

mod util {
    use crate::{
        color::{Component, Components},
        math::{almost_zero, from_rows, normalize_hue, transform},
    };

    /// NTSC 1953 RGB to YIQ matrix.
    #[rustfmt::skip]
    pub const RGB_TO_YIQ: [[Component; 3]; 3] = [
        [0.299, 0.587, 0.114],
        [0.595716, -0.274453, -0.321263],
        [0.211456, -0.522591, 0.311135],
    ];

    /// Exact inverse of [`RGB_TO_YIQ`].
    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    pub const YIQ_TO_RGB: [[Component; 3]; 3] = [
        [1.0, 0.9562957197589484, 0.6210244164652612],
        [1.0, -0.2721220993185105, -0.6473805968256952],
        [1.0, -1.1069890167364904, 1.7046149983646484],
    ];

    /// Calculate the hue from RGB components and return it along with the min
    /// and max RGB values.
    fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if almost_zero(delta) {
            0.0
        } else {
            let sector = if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };
            normalize_hue(sector / 6.0)
        };

        (hue, min, max)
    }

    /// Convert from RGB to the HSL notation.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let luminance = (min + max) / 2.0;
        let delta = max - min;

        let saturation = if almost_zero(delta) {
            0.0
        } else {
            (delta / (1.0 - (2.0 * luminance - 1.0).abs())).min(1.0)
        };

        Components(hue, saturation, luminance)
    }

    /// Convert from the HSL notation to RGB.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, luminance) = *from;

        if saturation <= 0.0 {
            return Components(luminance, luminance, luminance);
        }

        let hue = normalize_hue(hue);

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue * 12.0) % 12.0;
                let a = saturation * luminance.min(1.0 - luminance);
                luminance - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
            }};
        }

        Components(f!(0.0), f!(8.0), f!(4.0))
    }

    /// Convert from RGB to the HSV notation.
    pub fn rgb_to_hsv(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let delta = max - min;

        let saturation = if almost_zero(delta) || almost_zero(max) {
            0.0
        } else {
            delta / max
        };

        Components(hue, saturation, max)
    }

    /// Convert from the HSV notation to RGB.
    pub fn hsv_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, value) = *from;

        if saturation <= 0.0 {
            return Components(value, value, value);
        }

        let hue = normalize_hue(hue);

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue * 6.0) % 6.0;
                value - value * saturation * k.min(4.0 - k).clamp(0.0, 1.0)
            }};
        }

        Components(f!(5.0), f!(3.0), f!(1.0))
    }

    /// Convert from RGB to the YIQ colorspace.
    pub fn rgb_to_yiq(from: &Components) -> Components {
        transform(&from_rows(RGB_TO_YIQ), from)
    }

    /// Convert from the YIQ colorspace to RGB.
    pub fn yiq_to_rgb(from: &Components) -> Components {
        transform(&from_rows(YIQ_TO_RGB), from)
    }

    /// RGB and CMY are each other's complement, so this converts both ways.
    pub fn complement(from: &Components) -> Components {
        from.map(|v| 1.0 - v)
    }

    /// Split CMY into CMY without the shared black amount, and the key.
    pub fn cmy_to_cmyk(from: &Components) -> (Components, Component) {
        let key = from.0.min(from.1).min(from.2);

        if almost_zero(1.0 - key) {
            return (Components(0.0, 0.0, 0.0), 1.0);
        }

        (from.map(|v| (v - key) / (1.0 - key)), key)
    }

    /// Recompose CMY from CMY without black and the key.
    pub fn cmyk_to_cmy(from: &Components, key: Component) -> Components {
        from.map(|v| v * (1.0 - key) + key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::math::{from_rows, transform};

    #[test]
    fn test_conversions() {
        use Space as S;

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        let tests: &[(Space, &[Component])] = &[
            (S::Rgb, &[0.823529411764706, 0.411764705882353, 0.117647058823529]),
            (S::Hsl, &[0.069444444444444, 0.75, 0.470588235294118]),
            (S::Hsv, &[0.069444444444444, 0.857142857142857, 0.823529411764706]),
            (S::Yiq, &[0.501352941176471, 0.339783941176471, -0.004440176470588]),
            (S::Cmy, &[0.176470588235294, 0.588235294117647, 0.882352941176471]),
            (S::Cmyk, &[0.0, 0.5, 0.857142857142857, 0.176470588235294]),
        ];

        for (source_space, source) in tests {
            for (dest_space, dest) in tests {
                println!("{:?} -> {:?}", source_space, dest_space);
                let rgb = source_space.to_rgb(source).unwrap();
                let values = dest_space.from_rgb(&rgb);
                assert_eq!(values.len(), dest.len());
                for (actual, expected) in values.iter().zip(dest.iter()) {
                    assert_component_eq!(*actual, *expected);
                }
            }
        }
    }

    #[test]
    fn every_space_round_trips_through_rgb() {
        let steps = (0..=10).map(|i| i as Component / 10.0);

        for red in steps.clone() {
            for green in steps.clone() {
                for blue in steps.clone() {
                    let rgb = Rgb::new(red, green, blue);
                    for space in Space::ALL {
                        let back = space.to_rgb(&space.from_rgb(&rgb)).unwrap();
                        assert_component_eq!(back.red, red);
                        assert_component_eq!(back.green, green);
                        assert_component_eq!(back.blue, blue);
                    }
                }
            }
        }
    }

    #[test]
    fn hue_is_zero_if_there_is_no_chroma() {
        for v in [0.0, 0.5, 1.0] {
            let hsl = Rgb::new(v, v, v).to_hsl();
            assert_eq!(hsl.hue, 0.0);
            assert_eq!(hsl.saturation, 0.0);
            assert_eq!(hsl.luminance, v);

            let hsv = Rgb::new(v, v, v).to_hsv();
            assert_eq!(hsv.hue, 0.0);
            assert_eq!(hsv.saturation, 0.0);
            assert_eq!(hsv.value, v);
        }
    }

    #[test]
    fn primary_hues() {
        assert_eq!(Rgb::new(1.0, 0.0, 0.0).to_hsl(), Hsl::new(0.0, 1.0, 0.5));
        assert_component_eq!(Rgb::new(0.0, 1.0, 0.0).to_hsl().hue, 1.0 / 3.0);
        assert_component_eq!(Rgb::new(0.0, 0.0, 1.0).to_hsv().hue, 2.0 / 3.0);
        assert_component_eq!(Rgb::new(1.0, 0.0, 1.0).to_hsv().hue, 5.0 / 6.0);
    }

    #[test]
    fn hue_one_is_hue_zero() {
        let zero = Hsl::new(0.0, 0.6, 0.3).to_rgb();
        let one = Hsl::new(1.0, 0.6, 0.3).to_rgb();
        assert_component_eq!(zero.red, one.red);
        assert_component_eq!(zero.green, one.green);
        assert_component_eq!(zero.blue, one.blue);

        let zero = Hsv::new(0.0, 0.6, 0.3).to_rgb();
        let one = Hsv::new(1.0, 0.6, 0.3).to_rgb();
        assert_component_eq!(zero.red, one.red);
        assert_component_eq!(zero.green, one.green);
        assert_component_eq!(zero.blue, one.blue);
    }

    #[test]
    fn black_has_only_a_key() {
        assert_eq!(Rgb::new(0.0, 0.0, 0.0).to_cmyk(), Cmyk::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Cmyk::new(0.3, 0.6, 0.9, 1.0).to_rgb(), Rgb::new(0.0, 0.0, 0.0));
        assert_eq!(Rgb::new(1.0, 1.0, 1.0).to_cmyk(), Cmyk::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn yiq_inverse_matches_computed_inverse() {
        let inverse = from_rows(util::RGB_TO_YIQ).inverse().unwrap();
        let exact = from_rows(util::YIQ_TO_RGB);
        for basis in [
            Components(1.0, 0.0, 0.0),
            Components(0.0, 1.0, 0.0),
            Components(0.0, 0.0, 1.0),
        ] {
            let a = transform(&inverse, &basis);
            let b = transform(&exact, &basis);
            assert_component_eq!(a.0, b.0);
            assert_component_eq!(a.1, b.1);
            assert_component_eq!(a.2, b.2);
        }
    }

    #[test]
    fn yiq_components_are_signed() {
        let yiq = Rgb::new(0.0, 0.0, 1.0).to_yiq();
        assert_component_eq!(yiq.luma, 0.114);
        assert!(yiq.in_phase < 0.0);
        assert!(yiq.quadrature > 0.0);
    }

    #[test]
    fn out_of_domain_tuples_are_rejected() {
        assert!(matches!(
            Space::Hsl.to_rgb(&[0.0, 1.5, 0.5]),
            Err(Error::Domain(m)) if m == "hsl_saturation must be between 0 and 1, got 1.5"
        ));
        assert!(Space::Rgb.to_rgb(&[0.0, Component::NAN, 0.0]).is_err());
        assert!(Space::Rgb.to_rgb(&[0.0, 0.0]).is_err());
        assert!(Space::Cmyk.to_rgb(&[0.0, 0.0, 0.0]).is_err());
        // Luma 1 with strong chroma does not fit in RGB.
        assert!(Space::Yiq.to_rgb(&[1.0, 0.5, 0.5]).is_err());
    }

    #[test]
    fn tiny_overshoot_is_clamped() {
        let rgb = Space::Rgb.to_rgb(&[1.0 + FLOAT_ERROR / 2.0, -FLOAT_ERROR / 2.0, 0.5]).unwrap();
        assert_eq!(rgb, Rgb::new(1.0, 0.0, 0.5));
    }

    #[test]
    fn any_hue_is_accepted() {
        let rgb = Space::Hsv.to_rgb(&[-2.75, 1.0, 1.0]).unwrap();
        let expected = Space::Hsv.to_rgb(&[0.25, 1.0, 1.0]).unwrap();
        assert_eq!(rgb, expected);
    }
}
