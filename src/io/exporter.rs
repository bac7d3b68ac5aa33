// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! STL and JSON exporters

use crate::geometry::Geometry;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use stl_io::{Normal, Triangle, Vertex};

/// Export the faces of `geometry` as binary STL.
///
/// Facet normals come from each face's winding; edges and stroke-only
/// parts have no STL representation and are dropped.
pub fn export_stl(geometry: &Geometry, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let triangles: Vec<Triangle> = geometry
        .faces
        .iter()
        .map(|face| {
            let normal = geometry.face_normal(face);
            let normal = normal.try_normalize(f64::EPSILON).unwrap_or(normal);
            let [a, b, c] = face.map(|i| {
                let p = geometry.vertices[i];
                Vertex::new([p.x as f32, p.y as f32, p.z as f32])
            });
            Triangle {
                normal: Normal::new([normal.x as f32, normal.y as f32, normal.z as f32]),
                vertices: [a, b, c],
            }
        })
        .collect();

    let mut file = BufWriter::new(
        File::create(path).with_context(|| format!("Failed to create STL file: {:?}", path))?,
    );
    stl_io::write_stl(&mut file, triangles.iter())
        .with_context(|| format!("Failed to write STL file: {:?}", path))?;
    Ok(())
}

/// Serialize the full geometry, edges and colors included, as JSON
pub fn export_json(geometry: &Geometry, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("Failed to create JSON file: {:?}", path))?;
    serde_json::to_writer_pretty(BufWriter::new(file), geometry)
        .with_context(|| format!("Failed to write JSON file: {:?}", path))?;
    Ok(())
}
