//! Linear interpolation between colors.

use std::iter::FusedIterator;

use num_traits::Float;

use crate::color::{Color, Component};
use crate::error::{Error, Result};
use crate::models::Rgb;

/// Endpoints are exact: `lerp(a, b, 0) == a` and `lerp(a, b, 1) == b`.
fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a * (T::one() - t) + b * t
}

fn lerp_rgb(left: &Rgb, right: &Rgb, t: Component) -> Rgb {
    Rgb::new(
        lerp(left.red, right.red, t),
        lerp(left.green, right.green, t),
        lerp(left.blue, right.blue, t),
    )
}

impl Color {
    /// Linearly interpolate each RGB component from this color to another,
    /// using `t` in `[0, 1]` as the progress between them. The result carries
    /// the configuration of this color.
    pub fn interpolate(&self, other: &Self, t: Component) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color::with_config(lerp_rgb(&self.rgb, &other.rgb, t), self.config.clone())
    }

    /// A sequence of `steps` colors going from this color to `end`, both
    /// included.
    ///
    /// ```rust
    /// use colorant::Color;
    /// let black = Color::parse("black").unwrap();
    /// let white = Color::parse("white").unwrap();
    /// let range = black.range_to(&white, 3).unwrap();
    /// let webs: Vec<_> = range.map(|c| c.web()).collect();
    /// assert_eq!(webs, ["black", "#7f7f7f", "white"]);
    /// ```
    pub fn range_to(&self, end: &Color, steps: usize) -> Result<Range> {
        if steps < 2 {
            tracing::debug!(steps, "range needs at least 2 steps");
            return Err(Error::Domain(format!(
                "a range needs at least 2 steps, got {steps}"
            )));
        }

        Ok(Range {
            start: self.clone(),
            end: end.rgb,
            front: 0,
            back: steps,
            steps,
        })
    }
}

/// Iterator over the colors of a range, returned by [`Color::range_to`].
///
/// Every color carries the configuration of the start color.
#[derive(Clone, Debug)]
pub struct Range {
    start: Color,
    end: Rgb,
    front: usize,
    back: usize,
    steps: usize,
}

impl Range {
    fn at(&self, index: usize) -> Color {
        let t = index as Component / (self.steps - 1) as Component;
        Color::with_config(
            lerp_rgb(&self.start.rgb, &self.end, t),
            self.start.config.clone(),
        )
    }
}

impl Iterator for Range {
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        if self.front >= self.back {
            return None;
        }
        let color = self.at(self.front);
        self.front += 1;
        Some(color)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Range {
    fn next_back(&mut self) -> Option<Color> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.at(self.back))
    }
}

impl ExactSizeIterator for Range {}

impl FusedIterator for Range {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::equality::HslEquivalence;
    use crate::factory::ColorFactory;

    #[test]
    fn basic() {
        let left = Color::from_rgb(0.1, 0.2, 0.3).unwrap();
        let right = Color::from_rgb(0.5, 0.6, 0.7).unwrap();
        let mixed = left.interpolate(&right, 0.5);
        assert_component_eq!(mixed.red(), 0.3);
        assert_component_eq!(mixed.green(), 0.4);
        assert_component_eq!(mixed.blue(), 0.5);

        assert_eq!(left.interpolate(&right, 0.0).rgb(), left.rgb());
        assert_eq!(left.interpolate(&right, 1.0).rgb(), right.rgb());
        assert_eq!(left.interpolate(&right, 7.0).rgb(), right.rgb());
    }

    #[test]
    fn endpoints_are_exact() {
        let start = Color::parse("tomato").unwrap();
        let end = Color::from_rgb(0.1, 0.7, 0.3).unwrap();

        for steps in 2..20 {
            let colors = start.range_to(&end, steps).unwrap().collect::<Vec<_>>();
            assert_eq!(colors.len(), steps);
            assert_eq!(colors[0].rgb(), start.rgb());
            assert_eq!(colors[steps - 1].rgb(), end.rgb());
        }
    }

    #[test]
    fn black_to_white() {
        let black = Color::parse("black").unwrap();
        let white = Color::parse("white").unwrap();
        let luminances = black
            .range_to(&white, 3)
            .unwrap()
            .map(|c| c.luminance())
            .collect::<Vec<_>>();
        assert_eq!(luminances, [0.0, 0.5, 1.0]);
    }

    #[test]
    fn too_few_steps() {
        let black = Color::new();
        assert!(matches!(black.range_to(&black, 1), Err(Error::Domain(_))));
        assert!(matches!(black.range_to(&black, 0), Err(Error::Domain(_))));
    }

    #[test]
    fn restartable_and_double_ended() {
        let red = Color::parse("red").unwrap();
        let blue = Color::parse("blue").unwrap();
        let range = red.range_to(&blue, 5).unwrap();
        assert_eq!(range.len(), 5);

        let forward = range.clone().map(|c| c.hex()).collect::<Vec<_>>();
        let mut backward = range.clone().rev().map(|c| c.hex()).collect::<Vec<_>>();
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(forward, ["#ff0000", "#bf0040", "#7f007f", "#4000bf", "#0000ff"]);

        let mut range = range;
        assert_eq!(range.next().unwrap().web(), "red");
        assert_eq!(range.next_back().unwrap().web(), "blue");
        assert_eq!(range.len(), 3);
    }

    #[test]
    fn range_carries_the_start_config() {
        let factory = ColorFactory::new().equality(HslEquivalence);
        let start = factory.parse("white").unwrap();
        let end = Color::parse("black").unwrap();
        let gray = Color::from_rgb(0.5, 0.5, 0.499).unwrap();

        let middle = start.range_to(&end, 3).unwrap().nth(1).unwrap();
        assert_eq!(middle.hex(), gray.hex());
        assert!(middle != gray);
        assert!(gray == middle);
    }
}
