use super::{Matrix3, Matrix9x3, Vector9};
use serde::{Deserialize, Serialize};

/// Holds the raw kinematic quantities at an integration point
///
/// All arrays are row-major. `phi` follows the 9-Voigt order (11, 22, 33, 23, 13, 12, 32, 31, 21)
/// and the rows of `grad_phi` follow the same order with the columns holding ∂/∂x_k.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct KinematicInput {
    /// Gradient of the macro-displacement w.r.t. the current coordinates (3x3)
    pub grad_u: [[f64; 3]; 3],

    /// Micro-displacement (9)
    pub phi: [f64; 9],

    /// Gradient of the micro-displacement w.r.t. the current coordinates (9x3)
    pub grad_phi: [[f64; 3]; 9],
}

impl KinematicInput {
    /// Allocates a new instance from nalgebra objects
    pub fn from_matrices(grad_u: &Matrix3, phi: &Vector9, grad_phi: &Matrix9x3) -> Self {
        let mut res = KinematicInput::default();
        for i in 0..3 {
            for j in 0..3 {
                res.grad_u[i][j] = grad_u[(i, j)];
            }
        }
        for m in 0..9 {
            res.phi[m] = phi[m];
            for k in 0..3 {
                res.grad_phi[m][k] = grad_phi[(m, k)];
            }
        }
        res
    }

    /// Returns the gradient of the macro-displacement as a matrix
    pub fn grad_u_matrix(&self) -> Matrix3 {
        Matrix3::from_fn(|i, j| self.grad_u[i][j])
    }

    /// Returns the micro-displacement as a 9-Voigt vector
    pub fn phi_vector(&self) -> Vector9 {
        Vector9::from_column_slice(&self.phi)
    }

    /// Returns the gradient of the micro-displacement as a 9x3 matrix
    pub fn grad_phi_matrix(&self) -> Matrix9x3 {
        Matrix9x3::from_fn(|m, k| self.grad_phi[m][k])
    }

    /// Returns a sample state with finite macro and micro deformations
    pub fn sample() -> Self {
        KinematicInput {
            grad_u: [[0.2, 0.1, 0.0], [0.1, 0.001, 0.0], [0.0, 0.0, 0.0]],
            phi: [0.1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            grad_phi: [
                [0.13890017, -0.3598602, -0.08048856],
                [-0.18572739, 0.06847269, 0.22931628],
                [-0.01829735, -0.48731265, -0.25277529],
                [0.26626212, 0.4844646, -0.31965177],
                [0.49197846, 0.19051656, -0.0365349],
                [-0.06607774, -0.33526875, -0.15803078],
                [0.09738707, -0.49482218, -0.39584868],
                [-0.45599864, 0.08585038, -0.09432794],
                [0.23055539, 0.07564162, 0.24051469],
            ],
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
