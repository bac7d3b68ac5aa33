// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! GLTF/GLB exporter

use crate::geometry::Geometry;
use anyhow::{bail, Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{json, Map, Value};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const FLOAT: u32 = 5126;
const UNSIGNED_INT: u32 = 5125;
const ARRAY_BUFFER: u32 = 34962;
const ELEMENT_ARRAY_BUFFER: u32 = 34963;

/// Export geometry to binary GLB when `binary` is set, else to GLTF.
///
/// GLTF output embeds its buffer as a base64 data URI.
pub fn export(geometry: &Geometry, path: impl AsRef<Path>, binary: bool) -> Result<()> {
    let path = path.as_ref();
    if geometry.is_empty() {
        bail!("Cannot export geometry '{}' without vertices", geometry.id);
    }

    let result = if binary {
        export_glb(geometry, path)
    } else {
        export_gltf_embedded(geometry, path)
    };
    result.with_context(|| format!("Failed to export glTF: {:?}", path))
}

/// Export geometry to GLB (binary GLTF)
fn export_glb(geometry: &Geometry, path: &Path) -> Result<()> {
    let (mut gltf, buffer_data) = create_gltf_json(geometry);
    gltf["buffers"] = json!([{ "byteLength": buffer_data.len() }]);

    let json_string = serde_json::to_string(&gltf)?;
    let json_length = align_to_multiple_of_four(json_string.len());
    let buffer_length = align_to_multiple_of_four(buffer_data.len());
    let total_length = 12 + 8 + json_length + 8 + buffer_length;

    let mut file = File::create(path)?;

    // GLB header
    file.write_all(&0x46546C67u32.to_le_bytes())?; // magic: "glTF"
    file.write_all(&2u32.to_le_bytes())?; // version
    file.write_all(&(total_length as u32).to_le_bytes())?;

    // JSON chunk, space padded
    file.write_all(&(json_length as u32).to_le_bytes())?;
    file.write_all(&0x4E4F534Au32.to_le_bytes())?; // type: "JSON"
    file.write_all(json_string.as_bytes())?;
    file.write_all(&vec![b' '; json_length - json_string.len()])?;

    // BIN chunk, zero padded
    file.write_all(&(buffer_length as u32).to_le_bytes())?;
    file.write_all(&0x004E4942u32.to_le_bytes())?; // type: "BIN\0"
    file.write_all(&buffer_data)?;
    file.write_all(&vec![0; buffer_length - buffer_data.len()])?;

    Ok(())
}

/// Export geometry to a self-contained .gltf
fn export_gltf_embedded(geometry: &Geometry, path: &Path) -> Result<()> {
    let (mut gltf, buffer_data) = create_gltf_json(geometry);
    gltf["buffers"] = json!([{
        "byteLength": buffer_data.len(),
        "uri": format!("data:application/octet-stream;base64,{}", STANDARD.encode(&buffer_data)),
    }]);

    std::fs::write(path, serde_json::to_string_pretty(&gltf)?)?;
    Ok(())
}

/// Appends views and accessors over one shared buffer
#[derive(Default)]
struct BufferWriter {
    data: Vec<u8>,
    views: Vec<Value>,
    accessors: Vec<Value>,
}

impl BufferWriter {
    /// Write `values` as one view and return the accessor index
    fn push_f32(
        &mut self,
        values: &[f32],
        kind: &str,
        count: usize,
        target: u32,
        bounds: Option<(Value, Value)>,
    ) -> usize {
        let offset = self.data.len();
        for v in values {
            self.data.extend_from_slice(&v.to_le_bytes());
        }
        self.finish_view(offset, target);

        let mut accessor = json!({
            "bufferView": self.views.len() - 1,
            "componentType": FLOAT,
            "count": count,
            "type": kind,
        });
        if let Some((min, max)) = bounds {
            accessor["min"] = min;
            accessor["max"] = max;
        }
        self.accessors.push(accessor);
        self.accessors.len() - 1
    }

    fn push_indices(&mut self, indices: &[u32]) -> usize {
        let offset = self.data.len();
        for i in indices {
            self.data.extend_from_slice(&i.to_le_bytes());
        }
        self.finish_view(offset, ELEMENT_ARRAY_BUFFER);

        self.accessors.push(json!({
            "bufferView": self.views.len() - 1,
            "componentType": UNSIGNED_INT,
            "count": indices.len(),
            "type": "SCALAR",
        }));
        self.accessors.len() - 1
    }

    fn finish_view(&mut self, offset: usize, target: u32) {
        self.views.push(json!({
            "buffer": 0,
            "byteOffset": offset,
            "byteLength": self.data.len() - offset,
            "target": target,
        }));
    }
}

fn create_gltf_json(geometry: &Geometry) -> (Value, Vec<u8>) {
    let count = geometry.vertex_count();
    let mut writer = BufferWriter::default();
    let mut attributes = Map::new();

    let positions: Vec<f32> = geometry
        .vertices
        .iter()
        .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
        .collect();
    let bbox = geometry.bounding_box();
    let bounds = (
        json!([bbox.min.x as f32, bbox.min.y as f32, bbox.min.z as f32]),
        json!([bbox.max.x as f32, bbox.max.y as f32, bbox.max.z as f32]),
    );
    let position = writer.push_f32(&positions, "VEC3", count, ARRAY_BUFFER, Some(bounds));
    attributes.insert("POSITION".into(), position.into());

    // glTF wants unit normals; baked normals keep their transformed length
    if geometry.vertex_normals.len() == count {
        let normals: Vec<f32> = geometry
            .vertex_normals
            .iter()
            .flat_map(|n| {
                let n = n.try_normalize(f64::EPSILON).unwrap_or(*n);
                [n.x as f32, n.y as f32, n.z as f32]
            })
            .collect();
        let normal = writer.push_f32(&normals, "VEC3", count, ARRAY_BUFFER, None);
        attributes.insert("NORMAL".into(), normal.into());
    }

    if geometry.uvs.len() == count {
        let uvs: Vec<f32> = geometry
            .uvs
            .iter()
            .flat_map(|[u, v]| [*u as f32, *v as f32])
            .collect();
        let texcoord = writer.push_f32(&uvs, "VEC2", count, ARRAY_BUFFER, None);
        attributes.insert("TEXCOORD_0".into(), texcoord.into());
    }

    if geometry.vertex_colors.len() == count {
        let color = writer.push_f32(&geometry.vertex_colors_flat(), "VEC4", count, ARRAY_BUFFER, None);
        attributes.insert("COLOR_0".into(), color.into());
    }

    let mut primitive = json!({ "attributes": attributes, "mode": 0 });
    if !geometry.faces.is_empty() {
        let indices: Vec<u32> = geometry.faces.iter().flatten().map(|&i| i as u32).collect();
        primitive["indices"] = writer.push_indices(&indices).into();
        primitive["mode"] = 4.into();
    }

    let gltf = json!({
        "asset": {
            "generator": "buildgeom",
            "version": "2.0"
        },
        "scene": 0,
        "scenes": [{ "nodes": [0] }],
        "nodes": [{ "mesh": 0, "name": geometry.id }],
        "meshes": [{ "name": geometry.id, "primitives": [primitive] }],
        "accessors": writer.accessors,
        "bufferViews": writer.views,
    });

    (gltf, writer.data)
}

fn align_to_multiple_of_four(n: usize) -> usize {
    (n + 3) & !3
}
