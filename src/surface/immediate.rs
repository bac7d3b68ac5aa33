// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CPU reference implementation of the scratch surface

use super::curves::{catmull_rom, cubic_bezier, quadratic_bezier, steps};
use super::{flat, solids, ArcMode, EndMode, Primitive, RectMode, Surface};
use super::tess::triangulate_polygon;
use crate::config::SurfaceConfig;
use crate::geometry::{Color, RawPrimitive, ShapeMode};
use nalgebra::{Point3, Vector3};
use std::f64::consts::TAU;
use tracing::{trace, warn};

/// State saved by `push()` and restored by `pop()`
#[derive(Debug, Clone, Copy, PartialEq)]
struct Style {
    fill: Color,
    rect_mode: RectMode,
    curve_tightness: f64,
    normal: Vector3<f64>,
}

impl Style {
    fn initial(config: &SurfaceConfig) -> Self {
        Self {
            fill: config.fill,
            rect_mode: config.rect_mode,
            curve_tightness: 0.0,
            normal: Vector3::z(),
        }
    }
}

/// An open `begin_shape` session
#[derive(Debug, Clone)]
struct Recording {
    mode: ShapeMode,
    raw: RawPrimitive,
    curve_points: Vec<Point3<f64>>,
}

impl Recording {
    fn push(&mut self, style: &Style, position: Point3<f64>, uv: [f64; 2]) {
        self.raw.push_vertex(position, style.normal, uv);
        self.raw.vertex_colors.push(style.fill);
    }
}

/// Deterministic immediate-mode surface.
///
/// Stock primitives come back without vertex colors so the builder
/// bakes the active fill into them. Recorded shapes carry the fill that
/// was active when each vertex was issued.
#[derive(Debug, Clone)]
pub struct ImmediateSurface {
    config: SurfaceConfig,
    style: Style,
    saved: Vec<Style>,
    recording: Option<Recording>,
}

impl ImmediateSurface {
    pub fn new() -> Self {
        Self::with_config(SurfaceConfig::default())
    }

    pub fn with_config(config: SurfaceConfig) -> Self {
        Self {
            style: Style::initial(&config),
            config,
            saved: Vec::new(),
            recording: None,
        }
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Whether a `begin_shape` session is open
    pub fn is_recording(&self) -> bool {
        self.recording.is_some()
    }

    fn recording(&mut self, call: &str) -> Option<&mut Recording> {
        if self.recording.is_none() {
            trace!(call, "ignored outside begin_shape/end_shape");
        }
        self.recording.as_mut()
    }
}

impl Default for ImmediateSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for ImmediateSurface {
    fn begin_shape(&mut self, mode: ShapeMode) {
        if self.recording.is_some() {
            trace!("begin_shape while recording; discarding the open shape");
        }
        self.recording = Some(Recording {
            mode,
            raw: RawPrimitive::new(mode),
            curve_points: Vec::new(),
        });
    }

    fn vertex(&mut self, position: Point3<f64>, uv: Option<[f64; 2]>) {
        let style = self.style;
        if let Some(rec) = self.recording("vertex") {
            rec.push(&style, position, uv.unwrap_or([0.0, 0.0]));
        }
    }

    fn bezier_vertex(&mut self, control1: Point3<f64>, control2: Point3<f64>, end: Point3<f64>) {
        let style = self.style;
        let detail = self.config.bezier_detail;
        let Some(rec) = self.recording("bezier_vertex") else {
            return;
        };
        let Some(&start) = rec.raw.vertices.last() else {
            warn!("bezier_vertex() needs a preceding vertex(); ignored");
            return;
        };
        for t in steps(detail, 1) {
            rec.push(&style, cubic_bezier(&start, &control1, &control2, &end, t), [0.0, 0.0]);
        }
    }

    fn quadratic_vertex(&mut self, control: Point3<f64>, end: Point3<f64>) {
        let style = self.style;
        let detail = self.config.bezier_detail;
        let Some(rec) = self.recording("quadratic_vertex") else {
            return;
        };
        let Some(&start) = rec.raw.vertices.last() else {
            warn!("quadratic_vertex() needs a preceding vertex(); ignored");
            return;
        };
        for t in steps(detail, 1) {
            rec.push(&style, quadratic_bezier(&start, &control, &end, t), [0.0, 0.0]);
        }
    }

    fn curve_vertex(&mut self, point: Point3<f64>) {
        let style = self.style;
        let detail = self.config.curve_detail;
        let Some(rec) = self.recording("curve_vertex") else {
            return;
        };
        rec.curve_points.push(point);

        let n = rec.curve_points.len();
        if n < 4 {
            return;
        }
        let [p0, p1, p2, p3] = [
            rec.curve_points[n - 4],
            rec.curve_points[n - 3],
            rec.curve_points[n - 2],
            rec.curve_points[n - 1],
        ];
        // the first span also emits its start point; later spans share it
        let first = if n == 4 { 0 } else { 1 };
        for t in steps(detail, first) {
            let p = catmull_rom(&p0, &p1, &p2, &p3, t, style.curve_tightness);
            rec.push(&style, p, [0.0, 0.0]);
        }
    }

    fn curve_tightness(&mut self, tightness: f64) {
        self.style.curve_tightness = tightness;
    }

    fn normal(&mut self, normal: Vector3<f64>) {
        self.style.normal = normal;
    }

    fn end_shape(&mut self, close: EndMode) -> RawPrimitive {
        let Some(Recording { mode, mut raw, .. }) = self.recording.take() else {
            trace!("end_shape without begin_shape");
            return RawPrimitive::default();
        };
        let n = raw.vertex_count();

        match mode {
            ShapeMode::Quads => {
                let quads = n / 4;
                if n % 4 != 0 {
                    warn!(
                        vertex_count = n,
                        trailing = n % 4,
                        "quad stream is not a multiple of 4; trailing vertices are dropped"
                    );
                }
                let triangles: Vec<[usize; 3]> = (0..quads)
                    .flat_map(|q| {
                        let k = 4 * q;
                        [[k, k + 1, k + 2], [k, k + 2, k + 3]]
                    })
                    .collect();
                let mut soup = expand(&raw, &triangles);
                soup.edges = (0..quads)
                    .flat_map(|q| {
                        let s = 6 * q;
                        [[s, s + 1], [s + 1, s + 2], [s + 2, s + 5], [s + 5, s]]
                    })
                    .collect();
                soup
            }
            ShapeMode::Tess => {
                let triangles = triangulate_polygon(&raw.vertices);
                let mut soup = expand(&raw, &triangles);

                // outline of the original polygon, through each vertex's first copy
                let mut first_copy = vec![None; n];
                for (slot, &i) in triangles.iter().flatten().enumerate() {
                    first_copy[i].get_or_insert(slot);
                }
                soup.edges = shape_edges(ShapeMode::Tess, n, close)
                    .into_iter()
                    .filter_map(|[a, b]| Some([first_copy[a]?, first_copy[b]?]))
                    .collect();
                soup
            }
            _ => {
                raw.edges = shape_edges(mode, n, close);
                raw
            }
        }
    }

    fn primitive(&mut self, shape: &Primitive) -> RawPrimitive {
        let config = &self.config;
        match *shape {
            Primitive::Plane {
                width,
                height,
                detail,
            } => solids::plane(width, height, detail.unwrap_or(config.plane_detail)),
            Primitive::Box {
                width,
                height,
                depth,
            } => solids::cuboid(width, height, depth),
            Primitive::Sphere { radius, detail } => {
                solids::sphere(radius, detail.unwrap_or(config.sphere_detail))
            }
            Primitive::Cylinder {
                radius,
                height,
                detail,
                bottom_cap,
                top_cap,
            } => solids::truncated_cone(
                radius,
                radius,
                height,
                detail.unwrap_or(config.cylinder_detail),
                bottom_cap,
                top_cap,
            ),
            Primitive::Cone {
                radius,
                height,
                detail,
                cap,
            } => solids::truncated_cone(
                radius,
                0.0,
                height,
                detail.unwrap_or(config.cone_detail),
                cap,
                false,
            ),
            Primitive::Torus {
                radius,
                tube_radius,
                detail,
            } => solids::torus(radius, tube_radius, detail.unwrap_or(config.torus_detail)),
            Primitive::Triangle { points } => flat::triangle(&points),
            Primitive::Quad { points } => flat::quad(&points),
            Primitive::Rect {
                x,
                y,
                width,
                height,
            } => flat::rect(self.style.rect_mode, x, y, width, height),
            Primitive::Ellipse {
                x,
                y,
                width,
                height,
                detail,
            } => flat::arc(
                x,
                y,
                width,
                height,
                0.0,
                TAU,
                ArcMode::Open,
                detail.unwrap_or(config.ellipse_detail),
            ),
            Primitive::Arc {
                x,
                y,
                width,
                height,
                start,
                stop,
                mode,
                detail,
            } => flat::arc(
                x,
                y,
                width,
                height,
                start,
                stop,
                mode,
                detail.unwrap_or(config.ellipse_detail),
            ),
            Primitive::Line { from, to } => flat::line(from, to),
            Primitive::Bezier { points } => flat::bezier(&points, config.bezier_detail),
            Primitive::Curve { points } => {
                flat::curve(&points, config.curve_detail, self.style.curve_tightness)
            }
        }
    }

    fn fill(&mut self, color: Color) {
        self.style.fill = color;
    }

    fn fill_color(&self) -> Color {
        self.style.fill
    }

    fn rect_mode(&mut self, mode: RectMode) {
        self.style.rect_mode = mode;
    }

    fn push(&mut self) {
        self.saved.push(self.style);
    }

    fn pop(&mut self) {
        if let Some(style) = self.saved.pop() {
            self.style = style;
        }
    }

    fn reset(&mut self) {
        self.style = Style::initial(&self.config);
        self.saved.clear();
        self.recording = None;
    }
}

/// Copy the vertices of `triangles` into a flat triangle soup
fn expand(raw: &RawPrimitive, triangles: &[[usize; 3]]) -> RawPrimitive {
    let mut soup = RawPrimitive::new(ShapeMode::Triangles);
    for &i in triangles.iter().flatten() {
        soup.push_vertex(raw.vertices[i], raw.normals[i], raw.uvs[i]);
        soup.vertex_colors.push(raw.vertex_colors[i]);
    }
    soup
}

/// Outline edges of an `n`-vertex stream recorded in `mode`
fn shape_edges(mode: ShapeMode, n: usize, close: EndMode) -> Vec<[usize; 2]> {
    match mode {
        ShapeMode::Points => Vec::new(),
        ShapeMode::Lines => (0..n / 2).map(|i| [2 * i, 2 * i + 1]).collect(),
        ShapeMode::Triangles => (0..n / 3)
            .flat_map(|t| {
                let k = 3 * t;
                [[k, k + 1], [k + 1, k + 2], [k + 2, k]]
            })
            .collect(),
        ShapeMode::TriangleStrip => {
            let mut edges = if n >= 2 { vec![[0, 1]] } else { Vec::new() };
            for i in 2..n {
                edges.extend([[i - 2, i], [i - 1, i]]);
            }
            edges
        }
        ShapeMode::TriangleFan => {
            let mut edges: Vec<[usize; 2]> = (1..n).map(|i| [0, i]).collect();
            edges.extend((2..n).map(|i| [i - 1, i]));
            edges
        }
        ShapeMode::QuadStrip => {
            let mut edges: Vec<[usize; 2]> = (0..n / 2).map(|k| [2 * k, 2 * k + 1]).collect();
            edges.extend((0..n.saturating_sub(2)).map(|i| [i, i + 2]));
            edges
        }
        ShapeMode::Quads | ShapeMode::Tess => {
            let mut edges: Vec<[usize; 2]> = (1..n).map(|i| [i - 1, i]).collect();
            if close == EndMode::Close && n > 2 {
                edges.push([n - 1, 0]);
            }
            edges
        }
    }
}
