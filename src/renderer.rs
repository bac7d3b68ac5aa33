// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Hooks into the host renderer that draws finished geometry

use crate::geometry::Geometry;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Shader used to draw retained models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelShader {
    /// Shade with the material fill, ignoring baked colors
    #[default]
    Flat,
    /// Shade with the baked `vertex_colors` channel
    VertexColor,
}

/// A renderer that caches GPU buffers per geometry id
pub trait GeometryRenderer {
    /// Drop any buffers cached under `id`
    fn free_buffers(&mut self, id: &str);

    fn use_model_shader(&mut self, shader: ModelShader);
}

/// Tell `renderer` to release the buffers of `geometry`.
///
/// Geometry without an id cannot be keyed; this is reported and otherwise
/// ignored.
pub fn free_geometry<R: GeometryRenderer + ?Sized>(renderer: &mut R, geometry: &Geometry) {
    if geometry.id.is_empty() {
        error!("free_geometry() called on geometry without an id; nothing was freed");
        return;
    }
    debug!(id = %geometry.id, "freeing geometry buffers");
    renderer.free_buffers(&geometry.id);
}

/// Draw models with their material fill
pub fn flat_model_colors<R: GeometryRenderer + ?Sized>(renderer: &mut R) {
    renderer.use_model_shader(ModelShader::Flat);
}

/// Draw models with their baked vertex colors
pub fn shaded_model_colors<R: GeometryRenderer + ?Sized>(renderer: &mut R) {
    renderer.use_model_shader(ModelShader::VertexColor);
}
