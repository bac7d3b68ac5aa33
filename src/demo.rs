// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Stock scenes

use crate::builder::GeometryBuilder;
use crate::error::Result;
use crate::geometry::{Color, Geometry, ShapeMode};
use crate::surface::{EndMode, Surface};
use nalgebra::Point3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_4, PI, TAU};

/// `#857259`
fn bark() -> Color {
    Color::from_rgba8(0x85, 0x72, 0x59, 0xff)
}

/// `#8ae887`
fn leaves() -> Color {
    Color::from_rgba8(0x8a, 0xe8, 0x87, 0xff)
}

/// Depth at which branches end in a leaf ball
const TREE_DEPTH: u32 = 5;

/// Two cones plus one shape in each of the tess, strip and curve modes
pub fn shapes() -> Result<Geometry> {
    crate::build("shapes", |builder| {
        builder.push();
        builder.translate((100.0, -50.0));
        builder.scale(0.5);
        builder.rotate_x(FRAC_PI_4);
        builder.cone(50.0, 50.0);
        builder.pop()?;
        builder.cone(50.0, 50.0);

        builder.begin_shape(ShapeMode::Tess);
        builder.vertex(-20.0, -50.0, 0.0);
        builder.quadratic_vertex(Point3::new(-40.0, -70.0, 0.0), Point3::new(0.0, -60.0, 0.0));
        builder.end_shape(EndMode::Open);

        builder.begin_shape(ShapeMode::TriangleStrip);
        for y in (20..=60).step_by(10) {
            for x in [20.0, 60.0] {
                builder.vertex(x, y as f64, 0.0);
            }
        }
        builder.end_shape(EndMode::Open);

        builder.begin_shape(ShapeMode::Tess);
        builder.vertex(-100.0, -120.0, 0.0);
        builder.vertex(-120.0, -110.0, 0.0);
        builder.vertex(-105.0, -100.0, 0.0);
        builder.end_shape(EndMode::Open);
        Ok(())
    })
}

/// Randomly branching tree of cylinders capped with spheres
pub fn tree(seed: u64) -> Result<Geometry> {
    grow("tree", seed, None)
}

/// [`tree`] with bark and leaf colors baked into the vertices
pub fn colored_tree(seed: u64) -> Result<Geometry> {
    grow("colored-tree", seed, Some((bark(), leaves())))
}

fn grow(id: &str, seed: u64, palette: Option<(Color, Color)>) -> Result<Geometry> {
    let mut rng = StdRng::seed_from_u64(seed);
    crate::build(id, |builder| {
        builder.translate((0.0, 200.0));
        builder.scale(0.7);
        branch(builder, &mut rng, 0, palette)
    })
}

fn branch<S: Surface>(
    builder: &mut GeometryBuilder<S>,
    rng: &mut StdRng,
    depth: u32,
    palette: Option<(Color, Color)>,
) -> Result<()> {
    builder.push();
    builder.translate((0.0, -50.0));
    if let Some((bark, _)) = palette {
        builder.fill(bark);
    }
    builder.cylinder(15.0, 100.0);
    builder.translate((0.0, -50.0));

    if depth >= TREE_DEPTH {
        if let Some((_, leaves)) = palette {
            builder.fill(leaves);
        }
        builder.sphere(30.0);
    } else {
        let children = rng.gen_range(1.0..3.0_f64).round() as usize;
        for _ in 0..children {
            builder.push();
            builder.rotate_z(rng.gen_range(-0.3..0.3) * PI);
            builder.rotate_y(rng.gen_range(0.0..TAU));
            branch(builder, rng, depth + 1, palette)?;
            builder.pop()?;
        }
    }
    builder.pop()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_is_reproducible() {
        let a = tree(7).unwrap();
        let b = tree(7).unwrap();
        assert_eq!(a, b);
        assert!(a.indices_in_bounds());
    }

    #[test]
    fn test_colored_tree_uses_palette() {
        let geometry = colored_tree(3).unwrap();
        assert_eq!(geometry.vertex_colors.len(), geometry.vertex_count());
        assert_eq!(geometry.vertex_colors[0], bark());
        assert_eq!(geometry.vertex_colors.last(), Some(&leaves()));
    }

    #[test]
    fn test_shapes_has_all_parts() {
        let geometry = shapes().unwrap();
        assert!(geometry.face_count() > 0);
        assert!(geometry.indices_in_bounds());
        assert!(geometry.vertex_colors.iter().all(|c| *c == Color::WHITE));
    }
}
