// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! buildgeom
//!
//! Retained-mode geometry builder. Immediate-mode drawing calls (stock
//! primitives, custom vertex shapes, push/pop scoped transforms) are
//! recorded against a scratch surface and baked into one static mesh with
//! positions, normals, UVs, faces, edges and per-vertex colors.
//!
//! ```no_run
//! let pillars = buildgeom::build("pillars", |b| {
//!     b.push();
//!     b.translate((10.0, 0.0, 0.0));
//!     b.cube(50.0);
//!     b.pop()?;
//!     b.cube(50.0);
//!     Ok(())
//! })?;
//! assert_eq!(pillars.vertex_count(), 48);
//! # Ok::<(), buildgeom::BuildError>(())
//! ```

pub mod builder;
pub mod config;
pub mod demo;
pub mod error;
pub mod geometry;
pub mod io;
pub mod renderer;
pub mod script;
pub mod surface;
pub mod topology;
pub mod transform;

pub use builder::GeometryBuilder;
pub use config::{Config, SurfaceConfig};
pub use error::{BuildError, Result};
pub use geometry::{BoundingBox, Color, Geometry, RawPrimitive, ShapeMode};
pub use renderer::{
    flat_model_colors, free_geometry, shaded_model_colors, GeometryRenderer, ModelShader,
};
pub use script::{build_script, Script};
pub use surface::{EndMode, ImmediateSurface, Primitive, Surface, SurfacePool};

use tracing::debug;

/// Build a geometry on a fresh [`ImmediateSurface`].
///
/// The callback runs to completion before the geometry is returned. If it
/// fails the partially built geometry is dropped.
pub fn build<F>(id: impl Into<String>, callback: F) -> Result<Geometry>
where
    F: FnOnce(&mut GeometryBuilder) -> Result<()>,
{
    build_with(ImmediateSurface::new(), id, callback).map(|(geometry, _)| geometry)
}

/// Build on a caller-supplied surface, handing it back afterwards
pub fn build_with<S, F>(surface: S, id: impl Into<String>, callback: F) -> Result<(Geometry, S)>
where
    S: Surface,
    F: FnOnce(&mut GeometryBuilder<S>) -> Result<()>,
{
    let mut builder = GeometryBuilder::new(id, surface);
    callback(&mut builder)?;
    Ok(finish(builder))
}

/// Build on a surface checked out of `pool`.
///
/// The surface goes back to the pool whether or not the callback succeeds.
pub fn build_pooled<S, F>(
    pool: &mut SurfacePool<S>,
    id: impl Into<String>,
    callback: F,
) -> Result<Geometry>
where
    S: Surface,
    F: FnOnce(&mut GeometryBuilder<S>) -> Result<()>,
{
    let mut builder = GeometryBuilder::new(id, pool.checkout());
    let outcome = callback(&mut builder);
    let (geometry, surface) = finish(builder);
    pool.restore(surface);
    outcome.map(|()| geometry)
}

fn finish<S: Surface>(builder: GeometryBuilder<S>) -> (Geometry, S) {
    let (geometry, surface) = builder.finish();
    debug!(
        id = %geometry.id,
        vertices = geometry.vertex_count(),
        faces = geometry.face_count(),
        edges = geometry.edge_count(),
        "geometry built"
    );
    (geometry, surface)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_tags_id() {
        let geometry = build("sphere", |b| {
            b.sphere(10.0);
            Ok(())
        })
        .unwrap();
        assert_eq!(geometry.id, "sphere");
        assert!(!geometry.is_empty());
    }

    #[test]
    fn test_pooled_surface_returned_after_error() {
        let mut pool = SurfacePool::immediate(SurfaceConfig::default());
        let result = build_pooled(&mut pool, "bad", |b| {
            b.fill(Color::BLACK);
            b.pop()
        });

        assert!(matches!(result, Err(BuildError::UnbalancedPop { .. })));
        assert_eq!(pool.idle(), 1);
        assert_eq!(pool.checkout().fill_color(), Color::WHITE);
    }

    #[test]
    fn test_build_with_returns_surface() {
        let (geometry, surface) = build_with(ImmediateSurface::new(), "c", |b| {
            b.fill(Color::BLACK);
            b.circle(0.0, 0.0, 4.0);
            Ok(())
        })
        .unwrap();
        assert_eq!(surface.fill_color(), Color::BLACK);
        assert!(geometry.vertex_colors.iter().all(|c| *c == Color::BLACK));
    }
}
