// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - baked meshes and the raw fragments they are built from

mod bbox;
mod color;
mod mesh;
mod raw;

pub use bbox::BoundingBox;
pub use color::{Color, ParseColorError};
pub use mesh::{Fragment, Geometry};
pub use raw::{RawPrimitive, ShapeMode};
