// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Local-space generators for the 2D and stroke primitives

use super::curves::{catmull_rom, cubic_bezier, steps};
use super::{ArcMode, RectMode};
use crate::geometry::{RawPrimitive, ShapeMode};
use nalgebra::{Point3, Vector3};

/// Planar polygon from ordered corners: fan faces, closed outline
fn polygon(points: &[Point3<f64>]) -> RawPrimitive {
    let mut raw = RawPrimitive::new(ShapeMode::Triangles);
    let (min, max) = points.iter().fold(
        (Point3::new(f64::MAX, f64::MAX, 0.0), Point3::new(f64::MIN, f64::MIN, 0.0)),
        |(lo, hi), p| (lo.inf(p), hi.sup(p)),
    );
    let span = |lo: f64, hi: f64, v: f64| if hi > lo { (v - lo) / (hi - lo) } else { 0.0 };

    for p in points {
        raw.push_vertex(
            *p,
            Vector3::z(),
            [span(min.x, max.x, p.x), span(min.y, max.y, p.y)],
        );
    }

    let n = points.len();
    raw.faces = (1..n.saturating_sub(1)).map(|i| [0, i, i + 1]).collect();
    raw.edges = (0..n).map(|i| [i, (i + 1) % n]).collect();
    raw
}

pub(crate) fn triangle(points: &[Point3<f64>; 3]) -> RawPrimitive {
    polygon(points)
}

pub(crate) fn quad(points: &[Point3<f64>; 4]) -> RawPrimitive {
    polygon(points)
}

/// Resolve `rect` arguments to a top-left corner and size
pub(crate) fn resolve_rect(mode: RectMode, x: f64, y: f64, w: f64, h: f64) -> (f64, f64, f64, f64) {
    match mode {
        RectMode::Corner => (x, y, w, h),
        RectMode::Corners => (x.min(w), y.min(h), (w - x).abs(), (h - y).abs()),
        RectMode::Center => (x - w / 2.0, y - h / 2.0, w, h),
        RectMode::Radius => (x - w, y - h, 2.0 * w, 2.0 * h),
    }
}

pub(crate) fn rect(mode: RectMode, x: f64, y: f64, width: f64, height: f64) -> RawPrimitive {
    let (x, y, w, h) = resolve_rect(mode, x, y, width, height);
    polygon(&[
        Point3::new(x, y, 0.0),
        Point3::new(x + w, y, 0.0),
        Point3::new(x + w, y + h, 0.0),
        Point3::new(x, y + h, 0.0),
    ])
}

/// Elliptical arc around `(x, y)` with diameters `width` and `height`.
///
/// A full turn with [`ArcMode::Open`] is an ellipse.
#[allow(clippy::too_many_arguments)]
pub(crate) fn arc(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    start: f64,
    stop: f64,
    mode: ArcMode,
    detail: u32,
) -> RawPrimitive {
    let detail = detail.max(1) as usize;
    let mut raw = RawPrimitive::new(ShapeMode::Triangles);
    let (rx, ry) = (width / 2.0, height / 2.0);

    let center = match mode {
        ArcMode::Chord => None,
        ArcMode::Open | ArcMode::Pie => {
            Some(raw.push_vertex(Point3::new(x, y, 0.0), Vector3::z(), [0.5, 0.5]))
        }
    };
    let first = raw.vertex_count();

    for t in steps(detail as u32, 0) {
        let (sin, cos) = (start + (stop - start) * t).sin_cos();
        raw.push_vertex(
            Point3::new(x + rx * cos, y + ry * sin, 0.0),
            Vector3::z(),
            [0.5 + cos / 2.0, 0.5 + sin / 2.0],
        );
    }
    let last = raw.vertex_count() - 1;

    raw.faces = match center {
        Some(c) => (first..last).map(|i| [c, i, i + 1]).collect(),
        None => (first + 1..last).map(|i| [first, i, i + 1]).collect(),
    };

    raw.edges = (first..last).map(|i| [i, i + 1]).collect();
    match (mode, center) {
        (ArcMode::Pie, Some(c)) => raw.edges.extend([[c, first], [last, c]]),
        (ArcMode::Chord, _) => raw.edges.push([last, first]),
        _ => {}
    }
    raw
}

fn polyline(points: Vec<Point3<f64>>) -> RawPrimitive {
    let mut raw = RawPrimitive::new(ShapeMode::Lines);
    let n = points.len();
    for (i, p) in points.into_iter().enumerate() {
        let u = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 };
        raw.push_vertex(p, Vector3::z(), [u, 0.0]);
    }
    raw.edges = (1..n).map(|i| [i - 1, i]).collect();
    raw
}

pub(crate) fn line(from: Point3<f64>, to: Point3<f64>) -> RawPrimitive {
    polyline(vec![from, to])
}

pub(crate) fn bezier(points: &[Point3<f64>; 4], detail: u32) -> RawPrimitive {
    let [p0, p1, p2, p3] = points;
    polyline(
        steps(detail, 0)
            .map(|t| cubic_bezier(p0, p1, p2, p3, t))
            .collect(),
    )
}

pub(crate) fn curve(points: &[Point3<f64>; 4], detail: u32, tightness: f64) -> RawPrimitive {
    let [p0, p1, p2, p3] = points;
    polyline(
        steps(detail, 0)
            .map(|t| catmull_rom(p0, p1, p2, p3, t, tightness))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{PI, TAU};

    fn area(raw: &RawPrimitive) -> f64 {
        raw.faces
            .iter()
            .map(|&[a, b, c]| {
                let (a, b, c) = (raw.vertices[a], raw.vertices[b], raw.vertices[c]);
                (b - a).cross(&(c - a)).z / 2.0
            })
            .sum()
    }

    #[test]
    fn test_rect_modes() {
        assert_eq!(resolve_rect(RectMode::Corner, 1.0, 2.0, 3.0, 4.0), (1.0, 2.0, 3.0, 4.0));
        assert_eq!(resolve_rect(RectMode::Corners, 4.0, 6.0, 1.0, 2.0), (1.0, 2.0, 3.0, 4.0));
        assert_eq!(resolve_rect(RectMode::Center, 0.0, 0.0, 4.0, 2.0), (-2.0, -1.0, 4.0, 2.0));
        assert_eq!(resolve_rect(RectMode::Radius, 0.0, 0.0, 2.0, 1.0), (-2.0, -1.0, 4.0, 2.0));
    }

    #[test]
    fn test_rect_geometry() {
        let raw = rect(RectMode::Corner, 0.0, 0.0, 3.0, 2.0);
        assert_eq!(raw.vertex_count(), 4);
        assert_eq!(raw.faces, vec![[0, 1, 2], [0, 2, 3]]);
        assert_eq!(raw.edges.len(), 4);
        assert_relative_eq!(area(&raw), 6.0);
        assert_eq!(raw.uvs[2], [1.0, 1.0]);
    }

    #[test]
    fn test_triangle_is_single_face() {
        let raw = triangle(&[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(0.0, 3.0, 0.0),
        ]);
        assert_eq!(raw.faces, vec![[0, 1, 2]]);
        assert_eq!(raw.edges, vec![[0, 1], [1, 2], [2, 0]]);
    }

    #[test]
    fn test_full_ellipse_area_converges() {
        let raw = arc(0.0, 0.0, 20.0, 10.0, 0.0, TAU, ArcMode::Open, 200);
        assert_eq!(raw.vertex_count(), 1 + 201);
        assert_eq!(raw.faces.len(), 200);
        assert_relative_eq!(area(&raw), PI * 10.0 * 5.0, max_relative = 1e-3);
    }

    #[test]
    fn test_chord_has_no_centre() {
        let raw = arc(0.0, 0.0, 2.0, 2.0, 0.0, PI, ArcMode::Chord, 4);
        assert_eq!(raw.vertex_count(), 5);
        assert_eq!(raw.faces.len(), 3);
        assert_eq!(raw.edges.last(), Some(&[4, 0]));
    }

    #[test]
    fn test_pie_outline_closes_through_centre() {
        let raw = arc(0.0, 0.0, 2.0, 2.0, 0.0, PI / 2.0, ArcMode::Pie, 3);
        assert_eq!(raw.edges.len(), 3 + 2);
        assert!(raw.edges.contains(&[0, 1]));
        assert!(raw.edges.contains(&[4, 0]));
    }

    #[test]
    fn test_stroke_primitives_have_no_faces() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 1.0, 1.0);
        let l = line(a, b);
        assert!(l.faces.is_empty());
        assert_eq!(l.edges, vec![[0, 1]]);

        let bz = bezier(&[a, b, b, a], 10);
        assert_eq!(bz.vertex_count(), 11);
        assert_eq!(bz.edges.len(), 10);
        assert!(bz.faces.is_empty());
    }

    #[test]
    fn test_curve_spans_inner_points() {
        let pts = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 1.0, 0.0),
            Point3::new(3.0, 1.0, 0.0),
        ];
        let raw = curve(&pts, 8, 0.0);
        assert_relative_eq!(raw.vertices[0], pts[1], epsilon = 1e-12);
        assert_relative_eq!(raw.vertices[8], pts[2], epsilon = 1e-12);
    }
}
