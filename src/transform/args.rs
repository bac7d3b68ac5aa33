// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Argument forms accepted by `translate` and `scale`

use nalgebra::Vector3;

/// Translation amount. Two components leave `z` at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset(pub Vector3<f64>);

impl From<(f64, f64)> for Offset {
    fn from((x, y): (f64, f64)) -> Self {
        Self(Vector3::new(x, y, 0.0))
    }
}

impl From<(f64, f64, f64)> for Offset {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self(Vector3::new(x, y, z))
    }
}

impl From<Vector3<f64>> for Offset {
    fn from(v: Vector3<f64>) -> Self {
        Self(v)
    }
}

/// Scale factors.
///
/// One factor scales all three axes, two factors leave `z` at 1 and
/// three are applied independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaling(pub Vector3<f64>);

impl Scaling {
    /// Resolve the optional-argument form used by scripts
    pub fn from_parts(x: f64, y: Option<f64>, z: Option<f64>) -> Self {
        match (y, z) {
            (None, None) => Self::from(x),
            (Some(y), None) => Self::from((x, y)),
            (y, Some(z)) => Self::from((x, y.unwrap_or(x), z)),
        }
    }
}

impl From<f64> for Scaling {
    fn from(s: f64) -> Self {
        Self(Vector3::new(s, s, s))
    }
}

impl From<(f64, f64)> for Scaling {
    fn from((x, y): (f64, f64)) -> Self {
        Self(Vector3::new(x, y, 1.0))
    }
}

impl From<(f64, f64, f64)> for Scaling {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self(Vector3::new(x, y, z))
    }
}

impl From<Vector3<f64>> for Scaling {
    fn from(v: Vector3<f64>) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_overloads() {
        assert_eq!(Scaling::from(2.0).0, Vector3::new(2.0, 2.0, 2.0));
        assert_eq!(Scaling::from((2.0, 3.0)).0, Vector3::new(2.0, 3.0, 1.0));
        assert_eq!(Scaling::from((2.0, 3.0, 4.0)).0, Vector3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_scale_from_parts_matches_overloads() {
        assert_eq!(Scaling::from_parts(2.0, None, None), Scaling::from(2.0));
        assert_eq!(Scaling::from_parts(2.0, Some(3.0), None), Scaling::from((2.0, 3.0)));
        assert_eq!(
            Scaling::from_parts(2.0, Some(3.0), Some(4.0)),
            Scaling::from((2.0, 3.0, 4.0))
        );
    }

    #[test]
    fn test_two_component_offset_has_zero_z() {
        assert_eq!(Offset::from((10.0, -5.0)).0, Vector3::new(10.0, -5.0, 0.0));
    }
}
