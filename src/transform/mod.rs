// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Transform module - push/pop scoped coordinate transforms

mod args;
mod normal;
mod stack;

pub use args::{Offset, Scaling};
pub use normal::normal_matrix;
pub use stack::TransformStack;
