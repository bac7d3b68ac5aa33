// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Curve evaluation for bezier and Catmull-Rom segments

use nalgebra::Point3;

fn weighted(points: &[Point3<f64>], weights: &[f64]) -> Point3<f64> {
    let coords = points
        .iter()
        .zip(weights)
        .fold(nalgebra::Vector3::zeros(), |acc, (p, w)| acc + p.coords * *w);
    Point3::from(coords)
}

/// Point on a cubic bezier at `t` in `[0, 1]`
pub fn cubic_bezier(
    p0: &Point3<f64>,
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    p3: &Point3<f64>,
    t: f64,
) -> Point3<f64> {
    let u = 1.0 - t;
    weighted(
        &[*p0, *p1, *p2, *p3],
        &[u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t],
    )
}

/// Point on a quadratic bezier at `t` in `[0, 1]`
pub fn quadratic_bezier(p0: &Point3<f64>, p1: &Point3<f64>, p2: &Point3<f64>, t: f64) -> Point3<f64> {
    let u = 1.0 - t;
    weighted(&[*p0, *p1, *p2], &[u * u, 2.0 * u * t, t * t])
}

/// Point on the Catmull-Rom span between `p1` and `p2`.
///
/// `tightness` 0 is the standard spline; 1 collapses the span to a
/// straight segment.
pub fn catmull_rom(
    p0: &Point3<f64>,
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    p3: &Point3<f64>,
    t: f64,
    tightness: f64,
) -> Point3<f64> {
    let s = tightness;
    let basis = [
        [(s - 1.0) / 2.0, (s + 3.0) / 2.0, (-3.0 - s) / 2.0, (1.0 - s) / 2.0],
        [1.0 - s, (-5.0 - s) / 2.0, s + 2.0, (s - 1.0) / 2.0],
        [(s - 1.0) / 2.0, 0.0, (1.0 - s) / 2.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
    ];
    let powers = [t * t * t, t * t, t, 1.0];

    let mut weights = [0.0; 4];
    for (col, weight) in weights.iter_mut().enumerate() {
        *weight = (0..4).map(|row| powers[row] * basis[row][col]).sum();
    }
    weighted(&[*p0, *p1, *p2, *p3], &weights)
}

/// Evenly spaced parameters `i / detail` for `i` in `first..=detail`
pub(crate) fn steps(detail: u32, first: u32) -> impl Iterator<Item = f64> {
    let detail = detail.max(1);
    (first..=detail).map(move |i| i as f64 / detail as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point3<f64> {
        Point3::new(x, y, 0.0)
    }

    #[test]
    fn test_bezier_end_points() {
        let (a, b, c, d) = (p(0.0, 0.0), p(1.0, 2.0), p(3.0, 2.0), p(4.0, 0.0));
        assert_relative_eq!(cubic_bezier(&a, &b, &c, &d, 0.0), a);
        assert_relative_eq!(cubic_bezier(&a, &b, &c, &d, 1.0), d);
        assert_relative_eq!(cubic_bezier(&a, &b, &c, &d, 0.5), p(2.0, 1.5));
    }

    #[test]
    fn test_quadratic_midpoint() {
        let q = quadratic_bezier(&p(0.0, 0.0), &p(1.0, 2.0), &p(2.0, 0.0), 0.5);
        assert_relative_eq!(q, p(1.0, 1.0));
    }

    #[test]
    fn test_catmull_rom_interpolates_inner_points() {
        let pts = [p(0.0, 0.0), p(1.0, 1.0), p(2.0, 0.0), p(3.0, 1.0)];
        for s in [0.0, 0.5, -1.0] {
            assert_relative_eq!(catmull_rom(&pts[0], &pts[1], &pts[2], &pts[3], 0.0, s), pts[1], epsilon = 1e-12);
            assert_relative_eq!(catmull_rom(&pts[0], &pts[1], &pts[2], &pts[3], 1.0, s), pts[2], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_full_tightness_is_linear() {
        let pts = [p(-5.0, 3.0), p(0.0, 0.0), p(2.0, 2.0), p(9.0, -4.0)];
        let mid = catmull_rom(&pts[0], &pts[1], &pts[2], &pts[3], 0.5, 1.0);
        assert_relative_eq!(mid, p(1.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_steps_skip_start() {
        let ts: Vec<f64> = steps(4, 1).collect();
        assert_eq!(ts, vec![0.25, 0.5, 0.75, 1.0]);
        assert_eq!(steps(0, 0).count(), 2);
    }
}
