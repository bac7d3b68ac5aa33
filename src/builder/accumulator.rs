// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! World-space mesh accumulation

use crate::geometry::{Color, Fragment, Geometry};
use nalgebra::Matrix4;

/// Grows one [`Geometry`] by appending transformed fragments.
///
/// Nothing is ever removed. Face and edge indices of each fragment are
/// shifted by the vertex count at the moment it is appended, so they
/// always point at that fragment's own vertices.
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    geometry: Geometry,
}

impl Accumulator {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            geometry: Geometry::new(id),
        }
    }

    /// Append `fragment`, placing positions with `transform` and normals
    /// with `normal_matrix`. Missing vertex colors are filled with `fill`.
    pub fn append(
        &mut self,
        fragment: Fragment<'_>,
        transform: &Matrix4<f64>,
        normal_matrix: &Matrix4<f64>,
        fill: Color,
    ) {
        let geometry = &mut self.geometry;
        let offset = geometry.vertices.len();
        let count = fragment.vertices.len();

        geometry
            .vertices
            .extend(fragment.vertices.iter().map(|p| transform.transform_point(p)));
        geometry.vertex_normals.extend(
            fragment
                .normals
                .iter()
                .map(|n| normal_matrix.transform_vector(n)),
        );

        geometry.faces.extend(
            fragment
                .faces
                .iter()
                .map(|f| [f[0] + offset, f[1] + offset, f[2] + offset]),
        );
        geometry
            .edges
            .extend(fragment.edges.iter().map(|e| [e[0] + offset, e[1] + offset]));

        geometry.uvs.extend_from_slice(fragment.uvs);

        let given = fragment.vertex_colors.len().min(count);
        geometry
            .vertex_colors
            .extend_from_slice(&fragment.vertex_colors[..given]);
        geometry
            .vertex_colors
            .extend(std::iter::repeat(fill).take(count - given));
    }

    pub fn vertex_count(&self) -> usize {
        self.geometry.vertex_count()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn into_geometry(self) -> Geometry {
        self.geometry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{RawPrimitive, ShapeMode};
    use crate::transform::normal_matrix;
    use nalgebra::{Point3, Vector3};

    fn triangle() -> RawPrimitive {
        let mut raw = RawPrimitive::new(ShapeMode::Triangles);
        raw.push_vertex(Point3::origin(), Vector3::z(), [0.0, 0.0]);
        raw.push_vertex(Point3::new(1.0, 0.0, 0.0), Vector3::z(), [1.0, 0.0]);
        raw.push_vertex(Point3::new(0.0, 1.0, 0.0), Vector3::z(), [0.0, 1.0]);
        raw.faces.push([0, 1, 2]);
        raw.edges.extend([[0, 1], [1, 2], [2, 0]]);
        raw
    }

    #[test]
    fn test_second_append_is_offset() {
        let mut acc = Accumulator::new("t");
        let identity = Matrix4::identity();
        let raw = triangle();
        acc.append(raw.fragment(), &identity, &identity, Color::WHITE);
        acc.append(raw.fragment(), &identity, &identity, Color::WHITE);

        let geometry = acc.into_geometry();
        assert_eq!(geometry.faces, vec![[0, 1, 2], [3, 4, 5]]);
        assert_eq!(geometry.edges[3..], [[3, 4], [4, 5], [5, 3]]);
        assert!(geometry.indices_in_bounds());
    }

    #[test]
    fn test_translation_moves_points_not_normals() {
        let mut acc = Accumulator::new("t");
        let transform = Matrix4::new_translation(&Vector3::new(5.0, 0.0, 0.0));
        acc.append(
            triangle().fragment(),
            &transform,
            &normal_matrix(&transform),
            Color::WHITE,
        );

        let geometry = acc.geometry();
        assert_eq!(geometry.vertices[1], Point3::new(6.0, 0.0, 0.0));
        assert_eq!(geometry.vertex_normals[1], Vector3::z());
        assert_eq!(geometry.uvs[2], [0.0, 1.0]);
    }

    #[test]
    fn test_colors_padded_with_fill() {
        let mut acc = Accumulator::new("t");
        let identity = Matrix4::identity();
        let mut raw = triangle();
        raw.vertex_colors.push(Color::BLACK);
        let fill = Color::rgb(1.0, 0.0, 0.0);
        acc.append(raw.fragment(), &identity, &identity, fill);

        assert_eq!(acc.geometry().vertex_colors, vec![Color::BLACK, fill, fill]);
    }
}
