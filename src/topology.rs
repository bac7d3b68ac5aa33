// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Face derivation for recorded vertex streams

use crate::geometry::ShapeMode;
use tracing::warn;

/// Triangulate a flat vertex stream of `vertex_count` entries.
///
/// Strips alternate winding so every triangle faces the same way; fans
/// pivot on vertex 0. Point and line streams have no faces. Every other
/// mode is read as consecutive triples, and trailing vertices that do
/// not complete a triple are left untriangulated.
pub fn derive_faces(vertex_count: usize, mode: ShapeMode) -> Vec<[usize; 3]> {
    match mode {
        ShapeMode::Points | ShapeMode::Lines => Vec::new(),
        ShapeMode::TriangleStrip | ShapeMode::QuadStrip => (2..vertex_count)
            .map(|i| {
                if i % 2 == 0 {
                    [i, i - 1, i - 2]
                } else {
                    [i, i - 2, i - 1]
                }
            })
            .collect(),
        ShapeMode::TriangleFan => (2..vertex_count).map(|i| [0, i - 1, i]).collect(),
        ShapeMode::Triangles | ShapeMode::Quads | ShapeMode::Tess => {
            let trailing = vertex_count % 3;
            if trailing != 0 {
                warn!(
                    vertex_count,
                    trailing, "vertex stream is not a multiple of 3; trailing vertices are not triangulated"
                );
            }
            (0..vertex_count / 3)
                .map(|t| [3 * t, 3 * t + 1, 3 * t + 2])
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangles_consume_triples() {
        assert_eq!(
            derive_faces(6, ShapeMode::Triangles),
            vec![[0, 1, 2], [3, 4, 5]]
        );
    }

    #[test]
    fn test_trailing_vertices_dropped() {
        assert_eq!(derive_faces(5, ShapeMode::Triangles), vec![[0, 1, 2]]);
        assert!(derive_faces(2, ShapeMode::Triangles).is_empty());
    }

    #[test]
    fn test_strip_alternates_winding() {
        assert_eq!(
            derive_faces(4, ShapeMode::TriangleStrip),
            vec![[2, 1, 0], [3, 1, 2]]
        );
    }

    #[test]
    fn test_quad_strip_uses_strip_rule() {
        assert_eq!(
            derive_faces(6, ShapeMode::QuadStrip),
            derive_faces(6, ShapeMode::TriangleStrip)
        );
        assert_eq!(derive_faces(6, ShapeMode::QuadStrip).len(), 4);
    }

    #[test]
    fn test_fan_pivots_on_first_vertex() {
        assert_eq!(
            derive_faces(5, ShapeMode::TriangleFan),
            vec![[0, 1, 2], [0, 2, 3], [0, 3, 4]]
        );
    }

    #[test]
    fn test_short_streams_have_no_faces() {
        for mode in [
            ShapeMode::TriangleStrip,
            ShapeMode::TriangleFan,
            ShapeMode::Triangles,
        ] {
            assert!(derive_faces(0, mode).is_empty());
            assert!(derive_faces(1, mode).is_empty());
            assert!(derive_faces(2, mode).is_empty());
        }
    }

    #[test]
    fn test_points_and_lines_have_no_faces() {
        assert!(derive_faces(6, ShapeMode::Points).is_empty());
        assert!(derive_faces(6, ShapeMode::Lines).is_empty());
    }
}
