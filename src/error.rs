//! Errors raised while building, reading or writing a [`Color`].
//!
//! [`Color`]: crate::Color

use thiserror::Error;

/// Everything that can go wrong with a color value.
///
/// Errors are raised at the call that triggers them and leave any color
/// involved in its previous, valid state.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// A string is not a valid web, hex or named color.
    #[error("{0:?} is not a valid color: {1}")]
    Parse(String, &'static str),

    /// A bare attribute name is declared by more than one colorspace.
    #[error("ambiguous attribute {name:?}, use one of: {}", alternatives.join(", "))]
    AmbiguousAttribute {
        /// The bare name that was requested.
        name: String,
        /// Qualified alternatives, sorted by colorspace name.
        alternatives: Vec<String>,
    },

    /// The attribute does not match any colorspace or component.
    #[error("unknown attribute {0:?}")]
    UnknownAttribute(String),

    /// A value is outside of the domain required by the operation.
    #[error("{0}")]
    Domain(String),

    /// Two mutually exclusive construction keywords were supplied together.
    #[error("can not combine `{0}` with `{1}` when building a color")]
    Conflict(String, String),
}

/// Result type for color operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::Parse("#12".into(), "need 3 or 6 hex digits after '#'").to_string(),
            "\"#12\" is not a valid color: need 3 or 6 hex digits after '#'"
        );
        assert_eq!(
            Error::UnknownAttribute("lightness".into()).to_string(),
            "unknown attribute \"lightness\""
        );
        assert_eq!(
            Error::Domain("a range needs at least 2 steps, got 1".into()).to_string(),
            "a range needs at least 2 steps, got 1"
        );
    }
}
