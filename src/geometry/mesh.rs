// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Baked geometry representation

use super::{BoundingBox, Color};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A finished static mesh.
///
/// `faces` and `edges` hold absolute indices into `vertices`. The
/// per-vertex arrays (`vertex_normals`, `uvs`, `vertex_colors`) run
/// parallel to `vertices` whenever every appended fragment was well formed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Handle the renderer keys cached buffers by
    pub id: String,
    pub vertices: Vec<Point3<f64>>,
    pub vertex_normals: Vec<Vector3<f64>>,
    pub faces: Vec<[usize; 3]>,
    pub uvs: Vec<[f64; 2]>,
    pub edges: Vec<[usize; 2]>,
    pub vertex_colors: Vec<Color>,
}

/// Borrowed view of mesh data about to be appended to a geometry
#[derive(Debug, Clone, Copy)]
pub struct Fragment<'a> {
    pub vertices: &'a [Point3<f64>],
    pub normals: &'a [Vector3<f64>],
    pub uvs: &'a [[f64; 2]],
    pub faces: &'a [[usize; 3]],
    pub edges: &'a [[usize; 2]],
    pub vertex_colors: &'a [Color],
}

impl Geometry {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.vertices)
    }

    /// Vertex colors as a flat RGBA channel, four floats per vertex
    pub fn vertex_colors_flat(&self) -> Vec<f32> {
        self.vertex_colors.iter().flat_map(|c| c.to_array()).collect()
    }

    /// Geometric normal of a face from its winding (not normalized)
    pub fn face_normal(&self, face: &[usize; 3]) -> Vector3<f64> {
        let [a, b, c] = face.map(|i| self.vertices[i]);
        (b - a).cross(&(c - a))
    }

    /// Whether every face and edge references an existing vertex
    pub fn indices_in_bounds(&self) -> bool {
        let n = self.vertices.len();
        self.faces.iter().flatten().all(|&i| i < n) && self.edges.iter().flatten().all(|&i| i < n)
    }

    pub fn fragment(&self) -> Fragment<'_> {
        Fragment {
            vertices: &self.vertices,
            normals: &self.vertex_normals,
            uvs: &self.uvs,
            faces: &self.faces,
            edges: &self.edges,
            vertex_colors: &self.vertex_colors,
        }
    }
}
