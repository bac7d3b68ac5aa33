// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Normal matrix derivation

use nalgebra::{Matrix3, Matrix4};

/// Inverse-transpose of the upper-left 3x3 block of `transform`,
/// embedded in a 4x4 matrix with no translation.
///
/// A singular block has no inverse; its cofactor matrix is used instead.
/// The cofactor matrix equals `det * inverse_transpose`, so directions of
/// surviving axes are kept and collapsed axes map to zero instead of NaN.
pub fn normal_matrix(transform: &Matrix4<f64>) -> Matrix4<f64> {
    let linear: Matrix3<f64> = transform.fixed_view::<3, 3>(0, 0).into_owned();
    let normal = linear
        .try_inverse()
        .map(|inverse| inverse.transpose())
        .unwrap_or_else(|| cofactor(&linear));
    normal.to_homogeneous()
}

fn cofactor(m: &Matrix3<f64>) -> Matrix3<f64> {
    let (c0, c1, c2) = (m.column(0), m.column(1), m.column(2));
    Matrix3::from_columns(&[c1.cross(&c2), c2.cross(&c0), c0.cross(&c1)])
}
