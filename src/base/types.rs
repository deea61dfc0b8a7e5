use nalgebra::{SMatrix, SVector};

/// Second-order tensor in full form
pub type Matrix3 = SMatrix<f64, 3, 3>;

/// Third-order tensor as 3x9 (column = Voigt index of the last two slots)
pub type Matrix3x9 = SMatrix<f64, 3, 9>;

/// Gradient of the micro-displacement: row = Voigt index of (i,J), column = k
pub type Matrix9x3 = SMatrix<f64, 9, 3>;

/// Second-order tensor in 9-Voigt form
pub type Vector9 = SVector<f64, 9>;

/// Third-order tensor in 27-Voigt form
pub type Vector27 = SVector<f64, 27>;

/// Derivative of a second-order tensor w.r.t. a second-order tensor
pub type Matrix9 = SMatrix<f64, 9, 9>;

/// Derivative of a second-order tensor w.r.t. a third-order tensor
pub type Matrix9x27 = SMatrix<f64, 9, 27>;

/// Derivative of a third-order tensor w.r.t. a second-order tensor
pub type Matrix27x9 = SMatrix<f64, 27, 9>;

/// Derivative of a third-order tensor w.r.t. a third-order tensor
pub type Matrix27 = SMatrix<f64, 27, 27>;
