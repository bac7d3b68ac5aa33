// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Round-trip export tests

use anyhow::Result;
use buildgeom::io::{self, Format};
use buildgeom::{demo, Geometry};
use serde_json::Value;
use std::fs::File;
use tempfile::NamedTempFile;

#[test]
fn test_roundtrip_stl_export() -> Result<()> {
    let tree = demo::tree(42)?;

    let file = NamedTempFile::with_suffix(".stl")?;
    io::export_stl(&tree, file.path())?;

    let stl = stl_io::read_stl(&mut File::open(file.path())?)?;
    assert_eq!(stl.faces.len(), tree.face_count());

    let bbox = tree.bounding_box();
    for v in &stl.vertices {
        assert!(v[1] as f64 >= bbox.min.y - 1e-3 && v[1] as f64 <= bbox.max.y + 1e-3);
    }
    Ok(())
}

#[test]
fn test_roundtrip_json_export() -> Result<()> {
    let shapes = demo::shapes()?;

    let file = NamedTempFile::with_suffix(".json")?;
    io::export(&shapes, file.path(), None)?;

    let loaded: Geometry = serde_json::from_str(&std::fs::read_to_string(file.path())?)?;
    assert_eq!(loaded, shapes);
    Ok(())
}

#[test]
fn test_gltf_accessors_describe_geometry() -> Result<()> {
    let tree = demo::colored_tree(5)?;

    let file = NamedTempFile::with_suffix(".gltf")?;
    io::export(&tree, file.path(), Some(Format::Gltf))?;

    let gltf: Value = serde_json::from_str(&std::fs::read_to_string(file.path())?)?;
    let primitive = &gltf["meshes"][0]["primitives"][0];
    let accessor = |name: &str| &gltf["accessors"][primitive["attributes"][name].as_u64().unwrap() as usize];

    assert_eq!(accessor("POSITION")["count"].as_u64(), Some(tree.vertex_count() as u64));
    assert_eq!(accessor("COLOR_0")["type"], "VEC4");
    assert_eq!(accessor("TEXCOORD_0")["type"], "VEC2");

    let indices = &gltf["accessors"][primitive["indices"].as_u64().unwrap() as usize];
    assert_eq!(indices["count"].as_u64(), Some(3 * tree.face_count() as u64));
    assert_eq!(gltf["nodes"][0]["name"], "colored-tree");
    Ok(())
}

#[test]
fn test_glb_chunks_are_aligned() -> Result<()> {
    let shapes = demo::shapes()?;

    let file = NamedTempFile::with_suffix(".glb")?;
    io::export(&shapes, file.path(), None)?;

    let bytes = std::fs::read(file.path())?;
    let word = |at: usize| u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]) as usize;

    assert_eq!(&bytes[0..4], b"glTF");
    assert_eq!(word(8), bytes.len());
    let json_length = word(12);
    assert_eq!(json_length % 4, 0);
    assert_eq!(&bytes[16..20], b"JSON");

    let json: Value = serde_json::from_slice(&bytes[20..20 + json_length])?;
    let bin_length = word(20 + json_length);
    assert_eq!(&bytes[24 + json_length..28 + json_length], b"BIN\0");
    assert!(bin_length >= json["buffers"][0]["byteLength"].as_u64().unwrap() as usize);
    Ok(())
}

#[test]
fn test_explicit_format_wins_over_extension() -> Result<()> {
    let tree = demo::tree(3)?;

    let glb = NamedTempFile::with_suffix(".bin")?;
    io::export(&tree, glb.path(), Some(Format::Glb))?;
    assert_eq!(&std::fs::read(glb.path())?[0..4], b"glTF");

    let gltf = NamedTempFile::with_suffix(".glb")?;
    io::export(&tree, gltf.path(), Some(Format::Gltf))?;
    let json: Value = serde_json::from_str(&std::fs::read_to_string(gltf.path())?)?;
    assert_eq!(json["asset"]["version"], "2.0");
    Ok(())
}

#[test]
fn test_unknown_extension_needs_format() {
    let file = NamedTempFile::with_suffix(".obj").unwrap();
    let geometry = demo::shapes().unwrap();
    assert!(io::export(&geometry, file.path(), None).is_err());
}
