// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Local-space output of a single surface call

use super::{Color, Fragment};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// How a recorded vertex stream is assembled into primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeMode {
    Points,
    Lines,
    Triangles,
    TriangleStrip,
    TriangleFan,
    Quads,
    QuadStrip,
    /// Arbitrary polygon, tessellated by the surface
    #[default]
    Tess,
}

/// Geometry a surface produced for exactly one primitive or shape call.
///
/// Faces and edges index into `vertices` starting at zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPrimitive {
    pub vertices: Vec<Point3<f64>>,
    pub normals: Vec<Vector3<f64>>,
    pub uvs: Vec<[f64; 2]>,
    pub faces: Vec<[usize; 3]>,
    pub edges: Vec<[usize; 2]>,
    pub vertex_colors: Vec<Color>,
    pub mode: ShapeMode,
}

impl RawPrimitive {
    pub fn new(mode: ShapeMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Add a vertex and return its index
    pub fn push_vertex(&mut self, position: Point3<f64>, normal: Vector3<f64>, uv: [f64; 2]) -> usize {
        let index = self.vertices.len();
        self.vertices.push(position);
        self.normals.push(normal);
        self.uvs.push(uv);
        index
    }

    pub fn fragment(&self) -> Fragment<'_> {
        Fragment {
            vertices: &self.vertices,
            normals: &self.normals,
            uvs: &self.uvs,
            faces: &self.faces,
            edges: &self.edges,
            vertex_colors: &self.vertex_colors,
        }
    }
}
