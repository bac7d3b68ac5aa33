// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Builder module - records drawing calls into one retained mesh
//!
//! A [`GeometryBuilder`] owns a transform stack, a scratch [`Surface`] and an
//! [`Accumulator`]. Every drawing call is forwarded to the surface, and the
//! local-space fragment it returns is baked into world space with the
//! current transform before the next call is issued.

mod accumulator;

pub use accumulator::Accumulator;

use crate::error::Result;
use crate::geometry::{Color, Fragment, Geometry, RawPrimitive, ShapeMode};
use crate::surface::{ArcMode, EndMode, ImmediateSurface, Primitive, RectMode, Surface};
use crate::topology::derive_faces;
use crate::transform::{Offset, Scaling, TransformStack};
use nalgebra::{Matrix4, Point3, Vector3};
use tracing::debug;

/// Retained-mode geometry recorder bound to one scratch surface
#[derive(Debug)]
pub struct GeometryBuilder<S: Surface = ImmediateSurface> {
    surface: S,
    stack: TransformStack,
    accumulator: Accumulator,
}

impl GeometryBuilder<ImmediateSurface> {
    /// Builder over a default [`ImmediateSurface`]
    pub fn immediate(id: impl Into<String>) -> Self {
        Self::new(id, ImmediateSurface::new())
    }
}

impl<S: Surface> GeometryBuilder<S> {
    pub fn new(id: impl Into<String>, surface: S) -> Self {
        Self {
            surface,
            stack: TransformStack::new(),
            accumulator: Accumulator::new(id),
        }
    }

    /// Consume the builder, returning the finished geometry and the surface
    pub fn finish(self) -> (Geometry, S) {
        (self.accumulator.into_geometry(), self.surface)
    }

    /// Geometry accumulated so far
    pub fn geometry(&self) -> &Geometry {
        self.accumulator.geometry()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    // Transform stack

    pub fn push(&mut self) {
        self.stack.push();
        self.surface.push();
    }

    /// Restore the transform saved by the matching `push`.
    ///
    /// Fails with [`BuildError::UnbalancedPop`](crate::BuildError::UnbalancedPop)
    /// when nothing was pushed; the build must then be abandoned.
    pub fn pop(&mut self) -> Result<()> {
        self.stack.pop()?;
        self.surface.pop();
        Ok(())
    }

    pub fn translate(&mut self, offset: impl Into<Offset>) {
        self.stack.translate(offset);
    }

    pub fn scale(&mut self, factors: impl Into<Scaling>) {
        self.stack.scale(factors);
    }

    /// Rotate about Z by `angle` radians
    pub fn rotate(&mut self, angle: f64) {
        self.stack.rotate(angle);
    }

    pub fn rotate_x(&mut self, angle: f64) {
        self.stack.rotate_x(angle);
    }

    pub fn rotate_y(&mut self, angle: f64) {
        self.stack.rotate_y(angle);
    }

    pub fn rotate_z(&mut self, angle: f64) {
        self.stack.rotate_z(angle);
    }

    /// Replace the current transform with a column-major matrix
    pub fn apply_matrix(&mut self, columns: &[f64; 16]) {
        self.stack.apply_matrix(columns);
    }

    /// Compose a column-major matrix onto the current transform
    pub fn multiply_matrix(&mut self, columns: &[f64; 16]) {
        self.stack.multiply_matrix(columns);
    }

    pub fn reset_matrix(&mut self) {
        self.stack.reset_matrix();
    }

    pub fn transform(&self) -> &Matrix4<f64> {
        self.stack.current()
    }

    pub fn normal_matrix(&self) -> Matrix4<f64> {
        self.stack.normal_matrix()
    }

    /// Stack depth, 1 when nothing is pushed
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    // Style

    pub fn fill(&mut self, color: impl Into<Color>) {
        self.surface.fill(color.into());
    }

    pub fn rect_mode(&mut self, mode: RectMode) {
        self.surface.rect_mode(mode);
    }

    // Custom shapes

    pub fn begin_shape(&mut self, mode: ShapeMode) {
        self.surface.begin_shape(mode);
    }

    pub fn vertex(&mut self, x: f64, y: f64, z: f64) {
        self.surface.vertex(Point3::new(x, y, z), None);
    }

    pub fn vertex_uv(&mut self, x: f64, y: f64, z: f64, u: f64, v: f64) {
        self.surface.vertex(Point3::new(x, y, z), Some([u, v]));
    }

    pub fn bezier_vertex(&mut self, control1: Point3<f64>, control2: Point3<f64>, end: Point3<f64>) {
        self.surface.bezier_vertex(control1, control2, end);
    }

    pub fn quadratic_vertex(&mut self, control: Point3<f64>, end: Point3<f64>) {
        self.surface.quadratic_vertex(control, end);
    }

    pub fn curve_vertex(&mut self, x: f64, y: f64, z: f64) {
        self.surface.curve_vertex(Point3::new(x, y, z));
    }

    pub fn curve_tightness(&mut self, tightness: f64) {
        self.surface.curve_tightness(tightness);
    }

    /// Normal attached to subsequent shape vertices
    pub fn normal(&mut self, x: f64, y: f64, z: f64) {
        self.surface.normal(Vector3::new(x, y, z));
    }

    /// Close the recording, derive its triangles and bake it
    pub fn end_shape(&mut self, close: EndMode) {
        let mut raw = self.surface.end_shape(close);
        raw.faces = derive_faces(raw.vertex_count(), raw.mode);
        self.harvest(&raw);
    }

    // Stock primitives

    pub fn primitive(&mut self, shape: &Primitive) {
        let raw = self.surface.primitive(shape);
        self.harvest(&raw);
    }

    pub fn plane(&mut self, width: f64, height: f64) {
        self.primitive(&Primitive::plane(width, height));
    }

    /// p5's `box`
    pub fn cuboid(&mut self, width: f64, height: f64, depth: f64) {
        self.primitive(&Primitive::cuboid(width, height, depth));
    }

    pub fn cube(&mut self, size: f64) {
        self.cuboid(size, size, size);
    }

    pub fn sphere(&mut self, radius: f64) {
        self.primitive(&Primitive::sphere(radius));
    }

    pub fn cylinder(&mut self, radius: f64, height: f64) {
        self.primitive(&Primitive::cylinder(radius, height));
    }

    pub fn cone(&mut self, radius: f64, height: f64) {
        self.primitive(&Primitive::cone(radius, height));
    }

    pub fn torus(&mut self, radius: f64, tube_radius: f64) {
        self.primitive(&Primitive::torus(radius, tube_radius));
    }

    pub fn triangle(&mut self, a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) {
        self.primitive(&Primitive::Triangle { points: [a, b, c] });
    }

    pub fn quad(&mut self, a: Point3<f64>, b: Point3<f64>, c: Point3<f64>, d: Point3<f64>) {
        self.primitive(&Primitive::Quad {
            points: [a, b, c, d],
        });
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.primitive(&Primitive::Rect {
            x,
            y,
            width,
            height,
        });
    }

    pub fn circle(&mut self, x: f64, y: f64, diameter: f64) {
        self.primitive(&Primitive::circle(x, y, diameter));
    }

    pub fn ellipse(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.primitive(&Primitive::ellipse(x, y, width, height));
    }

    #[allow(clippy::too_many_arguments)]
    pub fn arc(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        start: f64,
        stop: f64,
        mode: ArcMode,
    ) {
        self.primitive(&Primitive::Arc {
            x,
            y,
            width,
            height,
            start,
            stop,
            mode,
            detail: None,
        });
    }

    pub fn line(&mut self, from: Point3<f64>, to: Point3<f64>) {
        self.primitive(&Primitive::Line { from, to });
    }

    pub fn bezier(&mut self, points: [Point3<f64>; 4]) {
        self.primitive(&Primitive::Bezier { points });
    }

    pub fn curve(&mut self, points: [Point3<f64>; 4]) {
        self.primitive(&Primitive::Curve { points });
    }

    // Composition

    /// Embed a finished geometry, re-placed by the current transform
    pub fn merge_geometry(&mut self, other: &Geometry) {
        debug!(id = %other.id, vertices = other.vertex_count(), "merging geometry");
        self.append(other.fragment());
    }

    /// Alias of [`merge_geometry`](Self::merge_geometry)
    pub fn model(&mut self, other: &Geometry) {
        self.merge_geometry(other);
    }

    fn harvest(&mut self, raw: &RawPrimitive) {
        debug!(
            mode = ?raw.mode,
            vertices = raw.vertex_count(),
            faces = raw.faces.len(),
            edges = raw.edges.len(),
            "harvested primitive"
        );
        self.append(raw.fragment());
    }

    fn append(&mut self, fragment: Fragment<'_>) {
        let normal_matrix = self.stack.normal_matrix();
        self.accumulator.append(
            fragment,
            self.stack.current(),
            &normal_matrix,
            self.surface.fill_color(),
        );
    }
}
