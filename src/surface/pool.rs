// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Reusable scratch surfaces

use super::{ImmediateSurface, Surface};
use crate::config::SurfaceConfig;
use tracing::trace;

/// Pool of idle surfaces. A checked-out surface is owned by its builder
/// until it is handed back with [`SurfacePool::restore`].
pub struct SurfacePool<S: Surface> {
    idle: Vec<S>,
    factory: Box<dyn Fn() -> S + Send + Sync>,
    created: usize,
}

impl<S: Surface> SurfacePool<S> {
    pub fn new(factory: impl Fn() -> S + Send + Sync + 'static) -> Self {
        Self {
            idle: Vec::new(),
            factory: Box::new(factory),
            created: 0,
        }
    }

    /// Take an idle surface or create a fresh one
    pub fn checkout(&mut self) -> S {
        match self.idle.pop() {
            Some(surface) => surface,
            None => {
                self.created += 1;
                trace!(created = self.created, "creating scratch surface");
                (self.factory)()
            }
        }
    }

    /// Reset a surface and return it to the pool
    pub fn restore(&mut self, mut surface: S) {
        surface.reset();
        self.idle.push(surface);
    }

    /// Surfaces waiting to be checked out
    pub fn idle(&self) -> usize {
        self.idle.len()
    }

    /// Surfaces created over the pool's lifetime
    pub fn created(&self) -> usize {
        self.created
    }
}

impl SurfacePool<ImmediateSurface> {
    pub fn immediate(config: SurfaceConfig) -> Self {
        Self::new(move || ImmediateSurface::with_config(config.clone()))
    }
}

impl<S: Surface> std::fmt::Debug for SurfacePool<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfacePool")
            .field("idle", &self.idle.len())
            .field("created", &self.created)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Color, ShapeMode};

    #[test]
    fn test_surfaces_are_reused() {
        let mut pool = SurfacePool::immediate(SurfaceConfig::default());
        let first = pool.checkout();
        pool.restore(first);
        let _again = pool.checkout();

        assert_eq!(pool.created(), 1);
        assert_eq!(pool.idle(), 0);
    }

    #[test]
    fn test_restore_resets_state() {
        let mut pool = SurfacePool::immediate(SurfaceConfig::default());
        let mut surface = pool.checkout();
        surface.fill(Color::BLACK);
        surface.begin_shape(ShapeMode::Tess);
        pool.restore(surface);

        let surface = pool.checkout();
        assert_eq!(surface.fill_color(), Color::WHITE);
        assert!(!surface.is_recording());
    }
}
