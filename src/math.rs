//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};

use crate::color::{Component, Components, FLOAT_ERROR};

pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a transform from a 3x3 matrix given in rows, so that
/// `transform(m, v)` computes `m * v`.
pub fn from_rows(m: [[Component; 3]; 3]) -> Transform {
    // euclid multiplies row vectors, so the matrix is stored transposed.
    Transform::new(
        m[0][0], m[1][0], m[2][0], 0.0, //
        m[0][1], m[1][1], m[2][1], 0.0, //
        m[0][2], m[1][2], m[2][2], 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, from: &Components) -> Components {
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(from.0, from.1, from.2));
    Components(x, y, z)
}

/// True if the value is zero, allowing for rounding errors.
pub fn almost_zero(value: Component) -> bool {
    value.abs() < FLOAT_ERROR
}

/// Wrap a hue given as a fraction of a turn into `[0, 1)`.
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue.rem_euclid(1.0);
    // rem_euclid rounds tiny negative values up to exactly 1.0.
    if hue >= 1.0 {
        0.0
    } else {
        hue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_rows() {
        let m = from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let r = transform(&m, &Components(1.0, 0.0, -1.0));
        assert_eq!(r, Components(-2.0, -2.0, -2.0));
        let r = transform(&m, &Components(0.0, 1.0, 0.0));
        assert_eq!(r, Components(2.0, 5.0, 8.0));
    }

    #[test]
    fn hue_wraps_into_one_turn() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(1.0), 0.0);
        assert_eq!(normalize_hue(1.25), 0.25);
        assert_eq!(normalize_hue(-0.25), 0.75);
        assert_eq!(normalize_hue(-1e-20), 0.0);
    }
}
