// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Local-space generators for the 3D stock primitives

use super::Detail;
use crate::geometry::{RawPrimitive, ShapeMode};
use nalgebra::{Point3, Vector3};
use std::collections::HashSet;
use std::f64::consts::{PI, TAU};

/// Unique undirected edges of a triangle list, in first-seen order
pub(crate) fn triangle_edges(faces: &[[usize; 3]]) -> Vec<[usize; 2]> {
    let mut seen = HashSet::new();
    let mut edges = Vec::new();
    for &[a, b, c] in faces {
        for (u, v) in [(a, b), (b, c), (c, a)] {
            if seen.insert((u.min(v), u.max(v))) {
                edges.push([u, v]);
            }
        }
    }
    edges
}

/// Faces of a row-major `(detail.x + 1) * (detail.y + 1)` vertex grid
fn grid_faces(detail: Detail) -> Vec<[usize; 3]> {
    let row = detail.x as usize + 1;
    let mut faces = Vec::with_capacity(2 * (detail.x * detail.y) as usize);
    for j in 0..detail.y as usize {
        for i in 0..detail.x as usize {
            let a = j * row + i;
            let b = a + 1;
            let c = a + row + 1;
            let d = a + row;
            faces.push([a, b, d]);
            faces.push([d, b, c]);
        }
    }
    faces
}

fn finish(mut raw: RawPrimitive) -> RawPrimitive {
    raw.edges = triangle_edges(&raw.faces);
    raw
}

pub(crate) fn plane(width: f64, height: f64, detail: Detail) -> RawPrimitive {
    let detail = detail.at_least_one();
    let mut raw = RawPrimitive::new(ShapeMode::Triangles);

    for j in 0..=detail.y {
        let v = j as f64 / detail.y as f64;
        for i in 0..=detail.x {
            let u = i as f64 / detail.x as f64;
            raw.push_vertex(
                Point3::new((u - 0.5) * width, (v - 0.5) * height, 0.0),
                Vector3::z(),
                [u, v],
            );
        }
    }

    raw.faces = grid_faces(detail);
    finish(raw)
}

/// Axis-aligned box centred on the origin, four vertices per face
pub(crate) fn cuboid(width: f64, height: f64, depth: f64) -> RawPrimitive {
    let half = Vector3::new(width / 2.0, height / 2.0, depth / 2.0);
    let mut raw = RawPrimitive::new(ShapeMode::Triangles);

    // (outward normal, u axis, v axis) with u x v = normal
    let faces = [
        (Vector3::x(), -Vector3::z(), Vector3::y()),
        (-Vector3::x(), Vector3::z(), Vector3::y()),
        (Vector3::y(), Vector3::z(), Vector3::x()),
        (-Vector3::y(), Vector3::x(), Vector3::z()),
        (Vector3::z(), Vector3::x(), Vector3::y()),
        (-Vector3::z(), -Vector3::x(), Vector3::y()),
    ];

    for (normal, u, v) in faces {
        let center = normal.component_mul(&half);
        let (u, v) = (u.component_mul(&half), v.component_mul(&half));
        let k = raw.vertex_count();

        for (corner, uv) in [
            (-u - v, [0.0, 0.0]),
            (u - v, [1.0, 0.0]),
            (u + v, [1.0, 1.0]),
            (v - u, [0.0, 1.0]),
        ] {
            raw.push_vertex(Point3::from(center + corner), normal, uv);
        }

        raw.faces.push([k, k + 1, k + 2]);
        raw.faces.push([k, k + 2, k + 3]);
        raw.edges
            .extend([[k, k + 1], [k + 1, k + 2], [k + 2, k + 3], [k + 3, k]]);
    }

    raw
}

/// Latitude/longitude sphere, poles on the Y axis
pub(crate) fn sphere(radius: f64, detail: Detail) -> RawPrimitive {
    let detail = detail.at_least_one();
    let mut raw = RawPrimitive::new(ShapeMode::Triangles);

    for j in 0..=detail.y {
        let v = j as f64 / detail.y as f64;
        let phi = PI * v - PI / 2.0;
        let (sin_phi, cos_phi) = phi.sin_cos();

        for i in 0..=detail.x {
            let u = i as f64 / detail.x as f64;
            let (sin_theta, cos_theta) = (TAU * u).sin_cos();
            let normal = Vector3::new(cos_phi * sin_theta, sin_phi, cos_phi * cos_theta);
            raw.push_vertex(Point3::from(normal * radius), normal, [u, v]);
        }
    }

    raw.faces = grid_faces(detail);
    finish(raw)
}

/// Cone frustum along Y from `-height / 2` (bottom radius) to `+height / 2`
pub(crate) fn truncated_cone(
    bottom_radius: f64,
    top_radius: f64,
    height: f64,
    detail: Detail,
    bottom_cap: bool,
    top_cap: bool,
) -> RawPrimitive {
    let detail = detail.at_least_one();
    let mut raw = RawPrimitive::new(ShapeMode::Triangles);
    let slant = (bottom_radius - top_radius).atan2(height);
    let (sin_slant, cos_slant) = slant.sin_cos();

    for j in 0..=detail.y {
        let v = j as f64 / detail.y as f64;
        let y = height * v - height / 2.0;
        let ring_radius = bottom_radius + (top_radius - bottom_radius) * v;

        for i in 0..=detail.x {
            let u = i as f64 / detail.x as f64;
            let (sin, cos) = (TAU * u).sin_cos();
            raw.push_vertex(
                Point3::new(sin * ring_radius, y, cos * ring_radius),
                Vector3::new(sin * cos_slant, sin_slant, cos * cos_slant),
                [u, v],
            );
        }
    }
    raw.faces = grid_faces(detail);

    if bottom_cap && bottom_radius != 0.0 {
        cap(&mut raw, bottom_radius, -height / 2.0, -1.0, detail.x);
    }
    if top_cap && top_radius != 0.0 {
        cap(&mut raw, top_radius, height / 2.0, 1.0, detail.x);
    }

    finish(raw)
}

/// Fan-triangulated disc at height `y` facing `side` (+1 up, -1 down)
fn cap(raw: &mut RawPrimitive, radius: f64, y: f64, side: f64, segments: u32) {
    let normal = Vector3::new(0.0, side, 0.0);
    let center = raw.push_vertex(Point3::new(0.0, y, 0.0), normal, [0.5, 0.5]);

    for i in 0..=segments {
        let (sin, cos) = (TAU * i as f64 / segments as f64).sin_cos();
        raw.push_vertex(
            Point3::new(sin * radius, y, cos * radius),
            normal,
            [0.5 + sin / 2.0, 0.5 + cos / 2.0],
        );
    }

    for i in 0..segments as usize {
        let (r0, r1) = (center + 1 + i, center + 2 + i);
        let face = if side > 0.0 {
            [center, r0, r1]
        } else {
            [center, r1, r0]
        };
        raw.faces.push(face);
    }
}

/// Torus around the Z axis
pub(crate) fn torus(radius: f64, tube_radius: f64, detail: Detail) -> RawPrimitive {
    let detail = detail.at_least_one();
    let mut raw = RawPrimitive::new(ShapeMode::Triangles);

    for j in 0..=detail.y {
        let v = j as f64 / detail.y as f64;
        let (sin_phi, cos_phi) = (TAU * v).sin_cos();

        for i in 0..=detail.x {
            let u = i as f64 / detail.x as f64;
            let (sin_theta, cos_theta) = (TAU * u).sin_cos();
            let ring = radius + tube_radius * cos_phi;
            raw.push_vertex(
                Point3::new(ring * cos_theta, ring * sin_theta, tube_radius * sin_phi),
                Vector3::new(cos_phi * cos_theta, cos_phi * sin_theta, sin_phi),
                [u, v],
            );
        }
    }

    raw.faces = grid_faces(detail);
    finish(raw)
}
