// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - exporting finished geometry

mod export_gltf;
mod exporter;

pub use export_gltf::export as export_gltf;
pub use exporter::{export_json, export_stl};

use crate::geometry::Geometry;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Gltf,
    Glb,
    Stl,
    Json,
}

impl Format {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "gltf" => Some(Format::Gltf),
            "glb" => Some(Format::Glb),
            "stl" => Some(Format::Stl),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

/// Write `geometry` to `path`, using `format` or else the extension
pub fn export(geometry: &Geometry, path: &Path, format: Option<Format>) -> Result<()> {
    let Some(format) = format.or_else(|| Format::from_path(path)) else {
        bail!("Cannot infer output format from {:?}; pass one explicitly", path);
    };
    match format {
        Format::Gltf => export_gltf(geometry, path, false),
        Format::Glb => export_gltf(geometry, path, true),
        Format::Stl => export_stl(geometry, path),
        Format::Json => export_json(geometry, path),
    }
}
