// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Stock primitive parameters

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Tessellation detail along two parametric directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
    pub x: u32,
    pub y: u32,
}

impl Detail {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Detail with both directions raised to at least one segment
    pub fn at_least_one(self) -> Self {
        Self::new(self.x.max(1), self.y.max(1))
    }
}

/// Interpretation of `rect` arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RectMode {
    /// `(x, y)` is the top-left corner, then width and height
    #[default]
    Corner,
    /// `(x, y)` and `(w, h)` are opposite corners
    Corners,
    /// `(x, y)` is the centre, then width and height
    Center,
    /// `(x, y)` is the centre, then half-width and half-height
    Radius,
}

/// How an arc's fill and outline are closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArcMode {
    /// Filled like a pie, outline left open
    #[default]
    Open,
    /// Filled between the end points
    Chord,
    /// Filled and outlined through the centre
    Pie,
}

/// Whether `end_shape` joins the last vertex back to the first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndMode {
    #[default]
    Open,
    Close,
}

/// A stock primitive. `None` detail means the surface default.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Plane {
        width: f64,
        height: f64,
        detail: Option<Detail>,
    },
    Box {
        width: f64,
        height: f64,
        depth: f64,
    },
    Sphere {
        radius: f64,
        detail: Option<Detail>,
    },
    Cylinder {
        radius: f64,
        height: f64,
        detail: Option<Detail>,
        bottom_cap: bool,
        top_cap: bool,
    },
    Cone {
        radius: f64,
        height: f64,
        detail: Option<Detail>,
        cap: bool,
    },
    Torus {
        radius: f64,
        tube_radius: f64,
        detail: Option<Detail>,
    },
    Triangle {
        points: [Point3<f64>; 3],
    },
    Quad {
        points: [Point3<f64>; 4],
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// Centre and diameters
    Ellipse {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        detail: Option<u32>,
    },
    Arc {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        start: f64,
        stop: f64,
        mode: ArcMode,
        detail: Option<u32>,
    },
    Line {
        from: Point3<f64>,
        to: Point3<f64>,
    },
    /// End points at `points[0]` and `points[3]`
    Bezier {
        points: [Point3<f64>; 4],
    },
    /// Catmull-Rom span from `points[1]` to `points[2]`
    Curve {
        points: [Point3<f64>; 4],
    },
}

impl Primitive {
    pub fn plane(width: f64, height: f64) -> Self {
        Self::Plane {
            width,
            height,
            detail: None,
        }
    }

    pub fn cuboid(width: f64, height: f64, depth: f64) -> Self {
        Self::Box {
            width,
            height,
            depth,
        }
    }

    pub fn sphere(radius: f64) -> Self {
        Self::Sphere {
            radius,
            detail: None,
        }
    }

    pub fn cylinder(radius: f64, height: f64) -> Self {
        Self::Cylinder {
            radius,
            height,
            detail: None,
            bottom_cap: true,
            top_cap: true,
        }
    }

    pub fn cone(radius: f64, height: f64) -> Self {
        Self::Cone {
            radius,
            height,
            detail: None,
            cap: true,
        }
    }

    pub fn torus(radius: f64, tube_radius: f64) -> Self {
        Self::Torus {
            radius,
            tube_radius,
            detail: None,
        }
    }

    pub fn circle(x: f64, y: f64, diameter: f64) -> Self {
        Self::ellipse(x, y, diameter, diameter)
    }

    pub fn ellipse(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::Ellipse {
            x,
            y,
            width,
            height,
            detail: None,
        }
    }

    /// Override the tessellation detail of a primitive that has one
    pub fn with_detail(self, x: u32, y: u32) -> Self {
        let grid = Detail::new(x, y);
        let detail = Some(grid);
        match self {
            Self::Plane { width, height, .. } => Self::Plane {
                width,
                height,
                detail,
            },
            Self::Sphere { radius, .. } => Self::Sphere { radius, detail },
            Self::Cylinder {
                radius,
                height,
                bottom_cap,
                top_cap,
                ..
            } => Self::Cylinder {
                radius,
                height,
                detail,
                bottom_cap,
                top_cap,
            },
            Self::Cone {
                radius,
                height,
                cap,
                ..
            } => Self::Cone {
                radius,
                height,
                detail,
                cap,
            },
            Self::Torus {
                radius,
                tube_radius,
                ..
            } => Self::Torus {
                radius,
                tube_radius,
                detail,
            },
            Self::Ellipse {
                x,
                y,
                width,
                height,
                ..
            } => Self::Ellipse {
                x,
                y,
                width,
                height,
                detail: Some(grid.x),
            },
            Self::Arc {
                x,
                y,
                width,
                height,
                start,
                stop,
                mode,
                ..
            } => Self::Arc {
                x,
                y,
                width,
                height,
                start,
                stop,
                mode,
                detail: Some(grid.x),
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_detail_sets_grid() {
        assert_eq!(
            Primitive::sphere(10.0).with_detail(6, 4),
            Primitive::Sphere {
                radius: 10.0,
                detail: Some(Detail::new(6, 4))
            }
        );
    }

    #[test]
    fn test_with_detail_on_ellipse_uses_x() {
        match Primitive::circle(0.0, 0.0, 10.0).with_detail(7, 99) {
            Primitive::Ellipse { detail, width, height, .. } => {
                assert_eq!(detail, Some(7));
                assert_eq!(width, height);
            }
            other => panic!("unexpected primitive {:?}", other),
        }
    }

    #[test]
    fn test_with_detail_ignored_for_box() {
        let cuboid = Primitive::cuboid(1.0, 2.0, 3.0);
        assert_eq!(cuboid.clone().with_detail(5, 5), cuboid);
    }

    #[test]
    fn test_detail_floor() {
        assert_eq!(Detail::new(0, 3).at_least_one(), Detail::new(1, 3));
    }
}
