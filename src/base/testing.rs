use nalgebra::{SMatrix, SVector};

/// Computes the Jacobian of a vector function using the five-point central difference formula
#[allow(dead_code)]
pub(crate) fn numerical_jacobian<const R: usize, const C: usize, F>(x: &SVector<f64, C>, mut f: F) -> SMatrix<f64, R, C>
where
    F: FnMut(&SVector<f64, C>) -> SVector<f64, R>,
{
    let mut jac = SMatrix::<f64, R, C>::zeros();
    let mut xx = *x;
    for c in 0..C {
        let h = 1e-4 * f64::max(1.0, f64::abs(x[c]));
        xx[c] = x[c] - 2.0 * h;
        let f_m2 = f(&xx);
        xx[c] = x[c] - h;
        let f_m1 = f(&xx);
        xx[c] = x[c] + h;
        let f_p1 = f(&xx);
        xx[c] = x[c] + 2.0 * h;
        let f_p2 = f(&xx);
        xx[c] = x[c];
        let d = (f_m2 - 8.0 * f_m1 + 8.0 * f_p1 - f_p2) / (12.0 * h);
        jac.set_column(c, &d);
    }
    jac
}

/// Returns the largest absolute difference between two matrices scaled by the largest entry of the reference
#[allow(dead_code)]
pub(crate) fn relative_difference<const R: usize, const C: usize>(
    a: &SMatrix<f64, R, C>,
    reference: &SMatrix<f64, R, C>,
) -> f64 {
    let scale = f64::max(1.0, reference.amax());
    (a - reference).amax() / scale
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
