// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Script command definitions

use crate::geometry::{Color, ShapeMode};
use crate::surface::{ArcMode, Detail, RectMode};
use serde::{Deserialize, Serialize};

/// A point given as `[x, y]` or `[x, y, z]`
pub type Coords = Vec<f64>;

fn default_size() -> f64 {
    50.0
}

fn default_tube() -> f64 {
    10.0
}

fn enabled() -> bool {
    true
}

/// One builder call, tagged by `op`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    // Transforms
    Push,
    Pop,
    Translate {
        x: f64,
        y: f64,
        #[serde(default)]
        z: f64,
    },
    /// A single factor scales uniformly
    Scale {
        x: f64,
        y: Option<f64>,
        z: Option<f64>,
    },
    Rotate {
        angle: f64,
    },
    RotateX {
        angle: f64,
    },
    RotateY {
        angle: f64,
    },
    RotateZ {
        angle: f64,
    },
    /// 16 column-major numbers
    ApplyMatrix {
        matrix: Vec<f64>,
    },
    MultiplyMatrix {
        matrix: Vec<f64>,
    },
    ResetMatrix,

    // Style
    Fill {
        color: Color,
    },
    RectMode {
        mode: RectMode,
    },

    // Custom shapes
    BeginShape {
        #[serde(default)]
        mode: ShapeMode,
    },
    Vertex {
        x: f64,
        y: f64,
        #[serde(default)]
        z: f64,
        u: Option<f64>,
        v: Option<f64>,
    },
    BezierVertex {
        control1: Coords,
        control2: Coords,
        end: Coords,
    },
    QuadraticVertex {
        control: Coords,
        end: Coords,
    },
    CurveVertex {
        x: f64,
        y: f64,
        #[serde(default)]
        z: f64,
    },
    CurveTightness {
        tightness: f64,
    },
    Normal {
        x: f64,
        y: f64,
        z: f64,
    },
    EndShape {
        #[serde(default)]
        close: bool,
    },

    // Stock primitives
    Plane {
        #[serde(default = "default_size")]
        width: f64,
        height: Option<f64>,
        detail: Option<Detail>,
    },
    /// Height and depth default to the width
    Box {
        #[serde(default = "default_size")]
        width: f64,
        height: Option<f64>,
        depth: Option<f64>,
    },
    Sphere {
        #[serde(default = "default_size")]
        radius: f64,
        detail: Option<Detail>,
    },
    Cylinder {
        #[serde(default = "default_size")]
        radius: f64,
        #[serde(default = "default_size")]
        height: f64,
        detail: Option<Detail>,
        #[serde(default = "enabled")]
        bottom_cap: bool,
        #[serde(default = "enabled")]
        top_cap: bool,
    },
    Cone {
        #[serde(default = "default_size")]
        radius: f64,
        #[serde(default = "default_size")]
        height: f64,
        detail: Option<Detail>,
        #[serde(default = "enabled")]
        cap: bool,
    },
    Torus {
        #[serde(default = "default_size")]
        radius: f64,
        #[serde(default = "default_tube")]
        tube_radius: f64,
        detail: Option<Detail>,
    },
    Triangle {
        points: Vec<Coords>,
    },
    Quad {
        points: Vec<Coords>,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: Option<f64>,
    },
    Circle {
        x: f64,
        y: f64,
        diameter: f64,
    },
    Ellipse {
        x: f64,
        y: f64,
        width: f64,
        height: Option<f64>,
        detail: Option<u32>,
    },
    Arc {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        start: f64,
        stop: f64,
        #[serde(default)]
        mode: ArcMode,
        detail: Option<u32>,
    },
    Line {
        from: Coords,
        to: Coords,
    },
    Bezier {
        points: Vec<Coords>,
    },
    Curve {
        points: Vec<Coords>,
    },
}

impl Command {
    /// Name of the `op` tag
    pub fn name(&self) -> &'static str {
        match self {
            Command::Push => "push",
            Command::Pop => "pop",
            Command::Translate { .. } => "translate",
            Command::Scale { .. } => "scale",
            Command::Rotate { .. } => "rotate",
            Command::RotateX { .. } => "rotate_x",
            Command::RotateY { .. } => "rotate_y",
            Command::RotateZ { .. } => "rotate_z",
            Command::ApplyMatrix { .. } => "apply_matrix",
            Command::MultiplyMatrix { .. } => "multiply_matrix",
            Command::ResetMatrix => "reset_matrix",
            Command::Fill { .. } => "fill",
            Command::RectMode { .. } => "rect_mode",
            Command::BeginShape { .. } => "begin_shape",
            Command::Vertex { .. } => "vertex",
            Command::BezierVertex { .. } => "bezier_vertex",
            Command::QuadraticVertex { .. } => "quadratic_vertex",
            Command::CurveVertex { .. } => "curve_vertex",
            Command::CurveTightness { .. } => "curve_tightness",
            Command::Normal { .. } => "normal",
            Command::EndShape { .. } => "end_shape",
            Command::Plane { .. } => "plane",
            Command::Box { .. } => "box",
            Command::Sphere { .. } => "sphere",
            Command::Cylinder { .. } => "cylinder",
            Command::Cone { .. } => "cone",
            Command::Torus { .. } => "torus",
            Command::Triangle { .. } => "triangle",
            Command::Quad { .. } => "quad",
            Command::Rect { .. } => "rect",
            Command::Circle { .. } => "circle",
            Command::Ellipse { .. } => "ellipse",
            Command::Arc { .. } => "arc",
            Command::Line { .. } => "line",
            Command::Bezier { .. } => "bezier",
            Command::Curve { .. } => "curve",
        }
    }
}
