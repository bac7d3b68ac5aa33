// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Push/pop scoped transform stack

use super::{normal_matrix, Offset, Scaling};
use crate::error::{BuildError, Result};
use nalgebra::{Matrix4, Rotation3, Vector3};

/// Stack of 4x4 affine transforms with an identity root.
///
/// Only the top entry is ever modified. `push` stores a copy of the top,
/// so composing onto the new top never touches a saved entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformStack {
    top: Matrix4<f64>,
    saved: Vec<Matrix4<f64>>,
}

impl TransformStack {
    pub fn new() -> Self {
        Self {
            top: Matrix4::identity(),
            saved: Vec::new(),
        }
    }

    /// Number of entries, including the root
    pub fn depth(&self) -> usize {
        self.saved.len() + 1
    }

    pub fn push(&mut self) {
        self.saved.push(self.top);
    }

    pub fn pop(&mut self) -> Result<()> {
        match self.saved.pop() {
            Some(previous) => {
                self.top = previous;
                Ok(())
            }
            None => Err(BuildError::UnbalancedPop {
                depth: self.depth(),
            }),
        }
    }

    /// The transform in effect for the next appended primitive
    pub fn current(&self) -> &Matrix4<f64> {
        &self.top
    }

    /// Inverse-transpose of the current transform's linear part
    pub fn normal_matrix(&self) -> Matrix4<f64> {
        normal_matrix(&self.top)
    }

    pub fn translate(&mut self, offset: impl Into<Offset>) {
        let Offset(v) = offset.into();
        self.compose(&Matrix4::new_translation(&v));
    }

    pub fn scale(&mut self, factors: impl Into<Scaling>) {
        let Scaling(s) = factors.into();
        self.compose(&Matrix4::new_nonuniform_scaling(&s));
    }

    /// Rotate about the Z axis
    pub fn rotate(&mut self, angle: f64) {
        self.rotate_z(angle);
    }

    pub fn rotate_x(&mut self, angle: f64) {
        self.rotate_about(Vector3::x_axis(), angle);
    }

    pub fn rotate_y(&mut self, angle: f64) {
        self.rotate_about(Vector3::y_axis(), angle);
    }

    pub fn rotate_z(&mut self, angle: f64) {
        self.rotate_about(Vector3::z_axis(), angle);
    }

    /// Replace the top with a column-major matrix
    pub fn apply_matrix(&mut self, columns: &[f64; 16]) {
        self.top = Matrix4::from_column_slice(columns);
    }

    /// Post-multiply the top by a column-major matrix
    pub fn multiply_matrix(&mut self, columns: &[f64; 16]) {
        self.compose(&Matrix4::from_column_slice(columns));
    }

    pub fn reset_matrix(&mut self) {
        self.top = Matrix4::identity();
    }

    fn rotate_about(&mut self, axis: nalgebra::Unit<Vector3<f64>>, angle: f64) {
        self.compose(&Rotation3::from_axis_angle(&axis, angle).to_homogeneous());
    }

    fn compose(&mut self, local: &Matrix4<f64>) {
        self.top *= local;
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_root_is_identity() {
        let stack = TransformStack::new();
        assert_eq!(stack.depth(), 1);
        assert_eq!(*stack.current(), Matrix4::identity());
    }

    #[test]
    fn test_pop_below_root_fails() {
        let mut stack = TransformStack::new();
        assert_eq!(stack.pop(), Err(BuildError::UnbalancedPop { depth: 1 }));
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_push_pop_restores_transform() {
        let mut stack = TransformStack::new();
        stack.translate((1.0, 2.0, 3.0));
        let before = *stack.current();

        stack.push();
        stack.rotate_y(0.7);
        stack.scale(3.0);
        stack.push();
        stack.translate((5.0, 0.0));
        stack.pop().unwrap();
        stack.pop().unwrap();

        assert_eq!(*stack.current(), before);
    }

    #[test]
    fn test_composition_is_local() {
        // translate then scale: the scale applies in the translated frame
        let mut stack = TransformStack::new();
        stack.translate((10.0, 0.0, 0.0));
        stack.scale(2.0);
        let p = stack.current().transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p, Point3::new(12.0, 0.0, 0.0));
    }

    #[test]
    fn test_rotate_is_rotate_z() {
        let mut a = TransformStack::new();
        let mut b = TransformStack::new();
        a.rotate(0.3);
        b.rotate_z(0.3);
        assert_eq!(a.current(), b.current());

        let p = a.current().transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p, Point3::new(0.3f64.cos(), 0.3f64.sin(), 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_x_quarter_turn() {
        let mut stack = TransformStack::new();
        stack.rotate_x(FRAC_PI_2);
        let p = stack.current().transform_point(&Point3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(p, Point3::new(0.0, 0.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_apply_matrix_replaces_top() {
        let mut stack = TransformStack::new();
        stack.translate((4.0, 4.0, 4.0));
        let mut columns = [0.0; 16];
        columns[0] = 2.0;
        columns[5] = 2.0;
        columns[10] = 2.0;
        columns[15] = 1.0;
        columns[12] = 1.0;
        stack.apply_matrix(&columns);

        let p = stack.current().transform_point(&Point3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(p, Point3::new(3.0, 2.0, 2.0));
    }

    #[test]
    fn test_multiply_matrix_composes() {
        let mut stack = TransformStack::new();
        stack.translate((1.0, 0.0, 0.0));
        let translation = Matrix4::new_translation(&Vector3::new(0.0, 2.0, 0.0));
        let columns: [f64; 16] = translation.as_slice().try_into().unwrap();
        stack.multiply_matrix(&columns);

        let p = stack.current().transform_point(&Point3::origin());
        assert_relative_eq!(p, Point3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_reset_matrix_only_touches_top() {
        let mut stack = TransformStack::new();
        stack.translate((1.0, 0.0, 0.0));
        stack.push();
        stack.scale(5.0);
        stack.reset_matrix();
        assert_eq!(*stack.current(), Matrix4::identity());
        stack.pop().unwrap();
        assert_eq!(
            *stack.current(),
            Matrix4::new_translation(&Vector3::new(1.0, 0.0, 0.0))
        );
    }
}
