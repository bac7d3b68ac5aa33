// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Ear-clipping tessellation of simple polygons

use nalgebra::{Point3, Vector3};

const EPSILON: f64 = 1e-12;

/// Triangulate a simple (non self-intersecting) polygon.
///
/// The polygon is projected onto the plane its Newell normal is most
/// aligned with. Returned triangles keep the winding of the input.
/// Degenerate input that has no ears left is finished as a fan.
pub fn triangulate_polygon(points: &[Point3<f64>]) -> Vec<[usize; 3]> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    let projected = project(points);
    let mut ring: Vec<usize> = (0..n).collect();
    let reversed = signed_area(&projected) < 0.0;
    if reversed {
        ring.reverse();
    }

    let mut triangles = Vec::with_capacity(n - 2);
    let emit = |triangles: &mut Vec<[usize; 3]>, a: usize, b: usize, c: usize| {
        triangles.push(if reversed { [c, b, a] } else { [a, b, c] });
    };

    while ring.len() > 3 {
        let m = ring.len();
        let ear = (0..m).find(|&i| {
            let (a, b, c) = (ring[(i + m - 1) % m], ring[i], ring[(i + 1) % m]);
            is_ear(&projected, &ring, a, b, c)
        });

        match ear {
            Some(i) => {
                emit(&mut triangles, ring[(i + m - 1) % m], ring[i], ring[(i + 1) % m]);
                ring.remove(i);
            }
            None => break,
        }
    }

    for i in 1..ring.len().saturating_sub(1) {
        emit(&mut triangles, ring[0], ring[i], ring[i + 1]);
    }

    triangles
}

fn newell_normal(points: &[Point3<f64>]) -> Vector3<f64> {
    let mut normal = Vector3::zeros();
    for (i, current) in points.iter().enumerate() {
        let next = &points[(i + 1) % points.len()];
        normal.x += (current.y - next.y) * (current.z + next.z);
        normal.y += (current.z - next.z) * (current.x + next.x);
        normal.z += (current.x - next.x) * (current.y + next.y);
    }
    normal
}

fn project(points: &[Point3<f64>]) -> Vec<[f64; 2]> {
    let normal = newell_normal(points);
    let (ax, ay) = (normal.x.abs(), normal.y.abs());
    let az = normal.z.abs();
    points
        .iter()
        .map(|p| {
            if az >= ax && az >= ay {
                [p.x, p.y]
            } else if ax >= ay {
                [p.y, p.z]
            } else {
                [p.z, p.x]
            }
        })
        .collect()
}

fn signed_area(points: &[[f64; 2]]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let (p, q) = (points[i], points[(i + 1) % n]);
            p[0] * q[1] - q[0] * p[1]
        })
        .sum::<f64>()
        / 2.0
}

fn cross(o: [f64; 2], a: [f64; 2], b: [f64; 2]) -> f64 {
    (a[0] - o[0]) * (b[1] - o[1]) - (a[1] - o[1]) * (b[0] - o[0])
}

fn is_ear(points: &[[f64; 2]], ring: &[usize], a: usize, b: usize, c: usize) -> bool {
    let (pa, pb, pc) = (points[a], points[b], points[c]);
    if cross(pa, pb, pc) <= EPSILON {
        return false;
    }

    ring.iter()
        .filter(|&&i| i != a && i != b && i != c)
        .all(|&i| {
            let p = points[i];
            !(cross(pa, pb, p) >= 0.0 && cross(pb, pc, p) >= 0.0 && cross(pc, pa, p) >= 0.0)
        })
}
