// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Script module - JSON command lists replayed against a builder
//!
//! ```json
//! { "id": "pillar", "commands": [
//!     { "op": "push" },
//!     { "op": "translate", "x": 10, "y": 0 },
//!     { "op": "box" },
//!     { "op": "pop" }
//! ] }
//! ```

mod command;

pub use command::{Command, Coords};

use crate::builder::GeometryBuilder;
use crate::config::SurfaceConfig;
use crate::error::{BuildError, Result};
use crate::geometry::Geometry;
use crate::surface::{EndMode, ImmediateSurface, Primitive, Surface};
use crate::transform::Scaling;
use anyhow::Context;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// A named sequence of builder commands
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub id: String,
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl Script {
    pub fn from_json(source: &str) -> anyhow::Result<Self> {
        serde_json::from_str(source).context("Failed to parse build script")
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {:?}", path))?;
        Self::from_json(&source).with_context(|| format!("Invalid script: {:?}", path))
    }

    /// Apply every command in order, stopping at the first failure
    pub fn replay<S: Surface>(&self, builder: &mut GeometryBuilder<S>) -> Result<()> {
        for (index, command) in self.commands.iter().enumerate() {
            apply(builder, index, command)?;
        }
        Ok(())
    }
}

/// Build `script` on a fresh [`ImmediateSurface`] configured by `config`
pub fn build_script(script: &Script, config: &SurfaceConfig) -> Result<Geometry> {
    let surface = ImmediateSurface::with_config(config.clone());
    let mut builder = GeometryBuilder::new(script.id.clone(), surface);
    script.replay(&mut builder)?;
    let (geometry, _) = builder.finish();
    info!(
        id = %geometry.id,
        commands = script.commands.len(),
        vertices = geometry.vertex_count(),
        "script built"
    );
    Ok(geometry)
}

fn point(index: usize, coords: &[f64]) -> Result<Point3<f64>> {
    match *coords {
        [x, y] => Ok(Point3::new(x, y, 0.0)),
        [x, y, z] => Ok(Point3::new(x, y, z)),
        _ => Err(BuildError::script(
            index,
            format!("expected 2 or 3 coordinates, got {}", coords.len()),
        )),
    }
}

fn points<const N: usize>(index: usize, list: &[Coords]) -> Result<[Point3<f64>; N]> {
    if list.len() != N {
        return Err(BuildError::script(
            index,
            format!("expected {} points, got {}", N, list.len()),
        ));
    }
    let mut out = [Point3::origin(); N];
    for (slot, coords) in out.iter_mut().zip(list) {
        *slot = point(index, coords)?;
    }
    Ok(out)
}

fn matrix(index: usize, values: &[f64]) -> Result<[f64; 16]> {
    values.try_into().map_err(|_| {
        BuildError::script(
            index,
            format!("matrix needs 16 values, got {}", values.len()),
        )
    })
}

fn apply<S: Surface>(builder: &mut GeometryBuilder<S>, index: usize, command: &Command) -> Result<()> {
    match command {
        Command::Push => builder.push(),
        Command::Pop => builder.pop()?,
        Command::Translate { x, y, z } => builder.translate((*x, *y, *z)),
        Command::Scale { x, y, z } => builder.scale(Scaling::from_parts(*x, *y, *z)),
        Command::Rotate { angle } => builder.rotate(*angle),
        Command::RotateX { angle } => builder.rotate_x(*angle),
        Command::RotateY { angle } => builder.rotate_y(*angle),
        Command::RotateZ { angle } => builder.rotate_z(*angle),
        Command::ApplyMatrix { matrix: m } => builder.apply_matrix(&matrix(index, m)?),
        Command::MultiplyMatrix { matrix: m } => builder.multiply_matrix(&matrix(index, m)?),
        Command::ResetMatrix => builder.reset_matrix(),

        Command::Fill { color } => builder.fill(*color),
        Command::RectMode { mode } => builder.rect_mode(*mode),

        Command::BeginShape { mode } => builder.begin_shape(*mode),
        Command::Vertex { x, y, z, u, v } => match (u, v) {
            (Some(u), Some(v)) => builder.vertex_uv(*x, *y, *z, *u, *v),
            (None, None) => builder.vertex(*x, *y, *z),
            _ => return Err(BuildError::script(index, "vertex needs both u and v")),
        },
        Command::BezierVertex {
            control1,
            control2,
            end,
        } => builder.bezier_vertex(
            point(index, control1)?,
            point(index, control2)?,
            point(index, end)?,
        ),
        Command::QuadraticVertex { control, end } => {
            builder.quadratic_vertex(point(index, control)?, point(index, end)?)
        }
        Command::CurveVertex { x, y, z } => builder.curve_vertex(*x, *y, *z),
        Command::CurveTightness { tightness } => builder.curve_tightness(*tightness),
        Command::Normal { x, y, z } => builder.normal(*x, *y, *z),
        Command::EndShape { close } => {
            builder.end_shape(if *close { EndMode::Close } else { EndMode::Open })
        }

        Command::Plane {
            width,
            height,
            detail,
        } => builder.primitive(&Primitive::Plane {
            width: *width,
            height: height.unwrap_or(*width),
            detail: *detail,
        }),
        Command::Box {
            width,
            height,
            depth,
        } => {
            let height = height.unwrap_or(*width);
            builder.cuboid(*width, height, depth.unwrap_or(height));
        }
        Command::Sphere { radius, detail } => builder.primitive(&Primitive::Sphere {
            radius: *radius,
            detail: *detail,
        }),
        Command::Cylinder {
            radius,
            height,
            detail,
            bottom_cap,
            top_cap,
        } => builder.primitive(&Primitive::Cylinder {
            radius: *radius,
            height: *height,
            detail: *detail,
            bottom_cap: *bottom_cap,
            top_cap: *top_cap,
        }),
        Command::Cone {
            radius,
            height,
            detail,
            cap,
        } => builder.primitive(&Primitive::Cone {
            radius: *radius,
            height: *height,
            detail: *detail,
            cap: *cap,
        }),
        Command::Torus {
            radius,
            tube_radius,
            detail,
        } => builder.primitive(&Primitive::Torus {
            radius: *radius,
            tube_radius: *tube_radius,
            detail: *detail,
        }),
        Command::Triangle { points: list } => {
            let [a, b, c] = points(index, list)?;
            builder.triangle(a, b, c);
        }
        Command::Quad { points: list } => {
            let [a, b, c, d] = points(index, list)?;
            builder.quad(a, b, c, d);
        }
        Command::Rect {
            x,
            y,
            width,
            height,
        } => builder.rect(*x, *y, *width, height.unwrap_or(*width)),
        Command::Circle { x, y, diameter } => builder.circle(*x, *y, *diameter),
        Command::Ellipse {
            x,
            y,
            width,
            height,
            detail,
        } => builder.primitive(&Primitive::Ellipse {
            x: *x,
            y: *y,
            width: *width,
            height: height.unwrap_or(*width),
            detail: *detail,
        }),
        Command::Arc {
            x,
            y,
            width,
            height,
            start,
            stop,
            mode,
            detail,
        } => builder.primitive(&Primitive::Arc {
            x: *x,
            y: *y,
            width: *width,
            height: *height,
            start: *start,
            stop: *stop,
            mode: *mode,
            detail: *detail,
        }),
        Command::Line { from, to } => builder.line(point(index, from)?, point(index, to)?),
        Command::Bezier { points: list } => builder.bezier(points(index, list)?),
        Command::Curve { points: list } => builder.curve(points(index, list)?),
    }
    Ok(())
}
