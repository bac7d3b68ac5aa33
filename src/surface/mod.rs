// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Surface module - the immediate-mode drawing surface a builder delegates to
//!
//! A [`Surface`] turns one drawing call into local-space geometry and hands
//! it back as a [`RawPrimitive`]. The builder never reads surface state
//! across calls; everything it needs arrives in the returned value.

mod curves;
mod flat;
mod immediate;
mod pool;
mod primitive;
mod solids;
mod tess;

pub use curves::{catmull_rom, cubic_bezier, quadratic_bezier};
pub use immediate::ImmediateSurface;
pub use pool::SurfacePool;
pub use primitive::{ArcMode, Detail, EndMode, Primitive, RectMode};
pub use tess::triangulate_polygon;

use crate::geometry::{Color, RawPrimitive, ShapeMode};
use nalgebra::{Point3, Vector3};

/// External immediate-mode drawing surface.
///
/// Shape recording follows `begin_shape`, any number of vertex calls, then
/// `end_shape`. The surface may rewrite the stream before returning it
/// (tessellating polygons, splitting quads), and reports the mode the
/// returned vertices must be triangulated with. Faces on a returned shape
/// are ignored; the builder derives them from that mode.
pub trait Surface {
    fn begin_shape(&mut self, mode: ShapeMode);

    fn vertex(&mut self, position: Point3<f64>, uv: Option<[f64; 2]>);

    fn bezier_vertex(&mut self, control1: Point3<f64>, control2: Point3<f64>, end: Point3<f64>);

    fn quadratic_vertex(&mut self, control: Point3<f64>, end: Point3<f64>);

    fn curve_vertex(&mut self, point: Point3<f64>);

    fn curve_tightness(&mut self, tightness: f64);

    /// Normal attached to subsequent vertices
    fn normal(&mut self, normal: Vector3<f64>);

    fn end_shape(&mut self, close: EndMode) -> RawPrimitive;

    /// Emit a stock primitive, complete with faces
    fn primitive(&mut self, shape: &Primitive) -> RawPrimitive;

    fn fill(&mut self, color: Color);

    /// The fill that unpainted vertices default to
    fn fill_color(&self) -> Color;

    fn rect_mode(&mut self, mode: RectMode);

    /// Mirror of the builder's `push()`
    fn push(&mut self) {}

    /// Mirror of the builder's `pop()`
    fn pop(&mut self) {}

    /// Return to the freshly created state
    fn reset(&mut self);
}
