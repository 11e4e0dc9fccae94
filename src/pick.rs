//! Picking a reproducible color for an arbitrary value.
//!
//! Picking happens in two steps. A [`KeyExtractor`] reduces the value to a
//! [`PickKey`], a digest that only depends on the content of the value. A
//! [`Picker`] then maps the key to a color [`Spec`]. Both steps hash with
//! [`StableHasher`], so the same value gets the same color on every run and
//! every machine.
//!
//! ```rust
//! use colorant::Color;
//! let a = Color::pick_for(&"main.rs").unwrap();
//! let b = Color::pick_for(&"main.rs").unwrap();
//! assert_eq!(a.hex(), b.hex());
//! assert_eq!(a.hsl().saturation, 1.0);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use sha2::{Digest, Sha256, Sha384};

use crate::color::{Component, Space};
use crate::error::Result;
use crate::models::Rgb;
use crate::web;

/// A [`Hasher`] feeding everything it is given into SHA-256.
///
/// Integers are written little-endian and `usize`/`isize` as 64 bits, so the
/// result does not depend on the platform.
#[derive(Clone, Default)]
pub struct StableHasher {
    digest: Sha256,
}

impl StableHasher {
    /// Create a hasher with nothing written to it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the hasher and return the full digest.
    pub fn finish_key(self) -> PickKey {
        let mut bytes = [0; 32];
        bytes.copy_from_slice(&self.digest.finalize());
        PickKey(bytes)
    }
}

macro_rules! write_le {
    ($($name:ident($ty:ty)),* $(,)?) => {
        $(
            fn $name(&mut self, i: $ty) {
                self.write(&i.to_le_bytes());
            }
        )*
    };
}

impl Hasher for StableHasher {
    fn finish(&self) -> u64 {
        let digest = self.digest.clone().finalize();
        let mut bytes = [0; 8];
        bytes.copy_from_slice(&digest[..8]);
        u64::from_be_bytes(bytes)
    }

    fn write(&mut self, bytes: &[u8]) {
        self.digest.update(bytes);
    }

    write_le! {
        write_u16(u16),
        write_u32(u32),
        write_u64(u64),
        write_u128(u128),
        write_i16(i16),
        write_i32(i32),
        write_i64(i64),
        write_i128(i128),
    }

    fn write_usize(&mut self, i: usize) {
        self.write_u64(i as u64);
    }

    fn write_isize(&mut self, i: isize) {
        self.write_i64(i as i64);
    }
}

/// A stable digest identifying a picked value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PickKey(pub [u8; 32]);

impl PickKey {
    /// The raw bytes of the digest.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// A value a color can be picked for.
///
/// Implemented for every [`Hash`] type. Wrap types that can only be
/// displayed in [`ByDisplay`].
///
/// The content is fed through [`Hash`], so keys are as stable as the `Hash`
/// impl of the type. The std impls and [`std::any::type_name`] are only
/// promised stable for one compiler, and type names of user types contain
/// their module path. For colors that must not change across compiler
/// upgrades or moved types, use [`HashKey`] with a `Hash` impl written by
/// hand.
pub trait Pickable {
    /// The name of the type of the value, used to separate equal content of
    /// different types.
    fn type_name(&self) -> &'static str;

    /// Feed the content of the value into `state`.
    fn hash_content(&self, state: &mut StableHasher);
}

impl<T: Hash + ?Sized> Pickable for T {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn hash_content(&self, state: &mut StableHasher) {
        self.hash(state);
    }
}

/// Make a value that can only be displayed pickable, by its text.
#[derive(Clone, Copy, Debug)]
pub struct ByDisplay<T>(pub T);

impl<T: fmt::Display> Hash for ByDisplay<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::any::type_name::<T>().hash(state);
        self.0.to_string().hash(state);
    }
}

/// Reduce a value to a [`PickKey`].
pub trait KeyExtractor: Send + Sync {
    /// Compute the key of `obj`.
    fn key(&self, obj: &dyn Pickable) -> PickKey;
}

impl<F> KeyExtractor for F
where
    F: Fn(&dyn Pickable) -> PickKey + Send + Sync,
{
    fn key(&self, obj: &dyn Pickable) -> PickKey {
        self(obj)
    }
}

/// The default key extractor. Hashes the type name along with the content, so
/// `1_i32` and `1_u8` get different keys. The same goes for text: `"x"` and
/// `String::from("x")` get different keys, use [`HashKey`] to give them the
/// same color.
///
/// Type names are only guaranteed to be stable for a single build of a
/// program.
#[derive(Clone, Copy, Debug, Default)]
pub struct TypedHashKey;

impl KeyExtractor for TypedHashKey {
    fn key(&self, obj: &dyn Pickable) -> PickKey {
        let mut hasher = StableHasher::new();
        obj.type_name().hash(&mut hasher);
        obj.hash_content(&mut hasher);
        hasher.finish_key()
    }
}

/// Hash only the content of a value. Values of different types with the same
/// content share a key.
#[derive(Clone, Copy, Debug, Default)]
pub struct HashKey;

impl KeyExtractor for HashKey {
    fn key(&self, obj: &dyn Pickable) -> PickKey {
        let mut hasher = StableHasher::new();
        obj.hash_content(&mut hasher);
        hasher.finish_key()
    }
}

/// A description of a color a [`Picker`] decided on.
#[derive(Clone, Debug, PartialEq)]
pub enum Spec {
    /// A web string, a CSS color name or hex string.
    Web(String),
    /// A full tuple of components in a colorspace.
    Tuple(Space, Vec<Component>),
}

impl Spec {
    /// Convert the description to RGB.
    pub fn to_rgb(&self) -> Result<Rgb> {
        match self {
            Spec::Web(web) => web::web_to_rgb(web),
            Spec::Tuple(space, values) => space.to_rgb(values),
        }
    }
}

/// Map a [`PickKey`] to a color.
pub trait Picker: Send + Sync {
    /// Decide on a color for `key`.
    fn pick(&self, key: &PickKey) -> Spec;
}

impl<F> Picker for F
where
    F: Fn(&PickKey) -> Spec + Send + Sync,
{
    fn pick(&self, key: &PickKey) -> Spec {
        self(key)
    }
}

/// Scale the top 53 bits of the first 8 bytes to `[0, 1)`.
fn unit_from_bytes(bytes: &[u8]) -> Component {
    let mut head = [0; 8];
    head.copy_from_slice(&bytes[..8]);
    (u64::from_be_bytes(head) >> 11) as Component / (1_u64 << 53) as Component
}

/// The default picker. Derives a hue from the key and returns a fully
/// saturated color at half luminance.
#[derive(Clone, Copy, Debug, Default)]
pub struct RgbColorPicker;

impl Picker for RgbColorPicker {
    fn pick(&self, key: &PickKey) -> Spec {
        let digest = Sha256::digest(key.as_bytes());
        let hue = unit_from_bytes(&digest);
        tracing::trace!(hue, "picked hue");
        Spec::Tuple(Space::Hsl, vec![hue, 1.0, 0.5])
    }
}

/// Split a SHA-384 digest of the key into three equal parts, one per RGB
/// channel. Colors are not restricted to full saturation.
#[derive(Clone, Copy, Debug, Default)]
pub struct DigestRgbPicker;

impl Picker for DigestRgbPicker {
    fn pick(&self, key: &PickKey) -> Spec {
        let digest = Sha384::digest(key.as_bytes());
        let [red, green, blue] = [0, 1, 2].map(|i| {
            let mut part = [0; 16];
            part.copy_from_slice(&digest[i * 16..(i + 1) * 16]);
            u128::from_be_bytes(part) as Component / u128::MAX as Component
        });
        Spec::Web(web::rgb_to_hex(&Rgb::new(red, green, blue)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, ColorFactory};

    #[test]
    fn stable_hasher_is_little_endian() {
        let mut a = StableHasher::new();
        a.write_u32(1);
        let mut b = StableHasher::new();
        b.write(&[1, 0, 0, 0]);
        assert_eq!(a.finish(), b.finish());
        assert_eq!(a.finish_key(), b.finish_key());

        let mut c = StableHasher::new();
        c.write_usize(1);
        let mut d = StableHasher::new();
        d.write_u64(1);
        assert_eq!(c.finish_key(), d.finish_key());
    }

    #[test]
    fn same_value_same_color() {
        let a = Color::pick_for(&"something").unwrap();
        let b = Color::pick_for(&"something").unwrap();
        assert_eq!(a.hex(), b.hex());
        assert_ne!(Color::pick_for(&"something else").unwrap().hex(), a.hex());
    }

    #[test]
    fn small_integers_get_distinct_colors() {
        // Fixed values, so a change of the hashing scheme does not go
        // unnoticed.
        assert_eq!(Color::pick_for(&0).unwrap().hex(), "#00ff41");
        assert_eq!(Color::pick_for(&1).unwrap().hex(), "#3600ff");
    }

    #[test]
    fn picked_colors_are_saturated() {
        for i in 0..32_u64 {
            let hsl = Color::pick_for(&i).unwrap().hsl();
            approx::assert_abs_diff_eq!(hsl.saturation, 1.0, epsilon = 1e-6);
            approx::assert_abs_diff_eq!(hsl.luminance, 0.5, epsilon = 1e-6);
        }
    }

    #[test]
    fn key_extractors() {
        let typed = TypedHashKey;
        assert_ne!(typed.key(&1_i32), typed.key(&1_u32));
        assert_eq!(typed.key(&1_i32), typed.key(&1_i32));

        let untyped = HashKey;
        assert_eq!(untyped.key(&1_i32), untyped.key(&1_u32));
        assert_eq!(untyped.key(&"a"), untyped.key(&String::from("a")));
    }

    #[test]
    fn text_keys_depend_on_the_key_extractor() {
        let text = String::from("x");

        let typed = Color::pick_for(&"x").unwrap();
        assert_ne!(typed.hex(), Color::pick_for(&text).unwrap().hex());

        let factory = ColorFactory::new().pick_key(HashKey);
        let a = factory.pick_for(&"x").unwrap();
        let b = factory.pick_for(&text).unwrap();
        assert_eq!(a.hex(), b.hex());
    }

    #[test]
    fn by_display() {
        struct Label;
        impl fmt::Display for Label {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("label")
            }
        }

        let a = Color::pick_for(&ByDisplay(Label)).unwrap();
        let b = Color::pick_for(&ByDisplay(Label)).unwrap();
        assert_eq!(a.hex(), b.hex());
    }

    #[test]
    fn digest_picker() {
        let factory = ColorFactory::new().picker(DigestRgbPicker);
        let a = factory.pick_for(&"Something").unwrap();
        let b = factory.pick_for(&"Something").unwrap();
        let c = factory.pick_for(&"Something else").unwrap();
        assert_eq!(a.hex(), b.hex());
        assert_ne!(a.hex(), c.hex());
    }

    #[test]
    fn custom_picker_and_key() {
        let factory = ColorFactory::new()
            .pick_key(|_: &dyn Pickable| PickKey([0; 32]))
            .picker(|_: &PickKey| Spec::Web("tomato".to_string()));
        assert_eq!(factory.pick_for(&42).unwrap().web(), "tomato");
    }
}
