use super::{Matrix3, Matrix3x9, Matrix9x3, Vector27, Vector9, CYCLIC_PERMUTATION, IJ_VOIGT, TRANSPOSE_ROW, VOIGT_IJ};
use nalgebra::SMatrix;

/// Returns the 9-Voigt index of the (i,j) component
#[inline]
pub fn voigt_index(i: usize, j: usize) -> usize {
    IJ_VOIGT[i][j]
}

/// Returns the 27-Voigt index of the (i,j,k) component
#[inline]
pub fn voigt3_index(i: usize, j: usize, k: usize) -> usize {
    9 * i + IJ_VOIGT[j][k]
}

/// Returns the (i,j,k) component corresponding to a 27-Voigt index
#[inline]
pub fn voigt3_components(n: usize) -> (usize, usize, usize) {
    let (j, k) = VOIGT_IJ[n % 9];
    (n / 9, j, k)
}

/// Packs a second-order tensor into its 9-Voigt vector
pub fn t2_to_voigt(a: &Matrix3) -> Vector9 {
    Vector9::from_fn(|m, _| {
        let (i, j) = VOIGT_IJ[m];
        a[(i, j)]
    })
}

/// Unpacks a 9-Voigt vector into a second-order tensor
pub fn voigt_to_t2(v: &Vector9) -> Matrix3 {
    Matrix3::from_fn(|i, j| v[IJ_VOIGT[i][j]])
}

/// Packs a third-order tensor (3x9 form) into its 27-Voigt vector
pub fn t3_to_voigt(a: &Matrix3x9) -> Vector27 {
    Vector27::from_fn(|n, _| a[(n / 9, n % 9)])
}

/// Unpacks a 27-Voigt vector into a third-order tensor (3x9 form)
pub fn voigt_to_t3(v: &Vector27) -> Matrix3x9 {
    Matrix3x9::from_fn(|i, c| v[9 * i + c])
}

/// Packs the 9x3 gradient of the micro-displacement into a 27-Voigt vector
///
/// The component `∂φ_iJ/∂x_k` goes to position `9 i + voigt(J,k)`.
pub fn grad_phi_to_voigt(grad_phi: &Matrix9x3) -> Vector27 {
    Vector27::from_fn(|n, _| {
        let (i, jj, k) = voigt3_components(n);
        grad_phi[(IJ_VOIGT[i][jj], k)]
    })
}

/// Unpacks a 27-Voigt vector into the 9x3 gradient of the micro-displacement
pub fn voigt_to_grad_phi(v: &Vector27) -> Matrix9x3 {
    Matrix9x3::from_fn(|m, k| {
        let (i, jj) = VOIGT_IJ[m];
        v[voigt3_index(i, jj, k)]
    })
}

/// Applies the right positive cyclic permutation (M_ijk = T_jki)
pub fn cyclic_permute(t: &Vector27) -> Vector27 {
    Vector27::from_fn(|n, _| t[CYCLIC_PERMUTATION[n]])
}

/// Symmetrizes a Voigt-packed tangent term by adding the transposed row to each row
///
/// ```text
/// sym(T)[r] = T[r] + T[t(r)]    t = 0,1,2,6,7,8,3,4,5
/// ```
///
/// Rows 0..2 are thus doubled and the off-diagonal rows are swap-added.
pub fn symmetrize_rows<const C: usize>(t: &SMatrix<f64, 9, C>) -> SMatrix<f64, 9, C> {
    SMatrix::<f64, 9, C>::from_fn(|r, c| t[(r, c)] + t[(TRANSPOSE_ROW[r], c)])
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Matrix9;

    #[test]
    fn voigt_indices_are_consistent() {
        for m in 0..9 {
            let (i, j) = VOIGT_IJ[m];
            assert_eq!(voigt_index(i, j), m);
        }
        for n in 0..27 {
            let (i, j, k) = voigt3_components(n);
            assert_eq!(voigt3_index(i, j, k), n);
        }
        assert_eq!(voigt3_index(0, 0, 0), 0);
        assert_eq!(voigt3_index(1, 2, 0), 16);
        assert_eq!(voigt3_index(2, 1, 0), 26);
    }

    #[test]
    fn second_order_packing_works() {
        #[rustfmt::skip]
        let a = Matrix3::new(
            11.0, 12.0, 13.0,
            21.0, 22.0, 23.0,
            31.0, 32.0, 33.0,
        );
        let v = t2_to_voigt(&a);
        assert_eq!(v.as_slice(), &[11.0, 22.0, 33.0, 23.0, 13.0, 12.0, 32.0, 31.0, 21.0]);
        assert_eq!(voigt_to_t2(&v), a);
    }

    #[test]
    fn third_order_packing_works() {
        let a = Matrix3x9::from_fn(|i, c| {
            let (j, k) = VOIGT_IJ[c];
            (100 * (i + 1) + 10 * (j + 1) + (k + 1)) as f64
        });
        let v = t3_to_voigt(&a);
        assert_eq!(v[0], 111.0);
        assert_eq!(v[3], 123.0);
        assert_eq!(v[9 + 8], 221.0);
        assert_eq!(v[18 + 6], 332.0);
        assert_eq!(voigt_to_t3(&v), a);
    }

    #[test]
    fn grad_phi_packing_works() {
        let g = Matrix9x3::from_fn(|m, k| (10 * m + k) as f64);
        let v = grad_phi_to_voigt(&g);
        // ∂φ_23/∂x_1 is row 3 of grad_phi and lands at 9*1 + voigt(2,0)
        assert_eq!(v[9 + 7], 30.0);
        // ∂φ_21/∂x_2 is row 8 of grad_phi and lands at 9*1 + voigt(0,1)
        assert_eq!(v[9 + 5], 81.0);
        assert_eq!(voigt_to_grad_phi(&v), g);
    }

    #[test]
    fn cyclic_permute_works() {
        let t = Vector27::from_fn(|n, _| {
            let (i, j, k) = voigt3_components(n);
            (100 * (i + 1) + 10 * (j + 1) + (k + 1)) as f64
        });
        let m = cyclic_permute(&t);
        for n in 0..27 {
            let (i, j, k) = voigt3_components(n);
            assert_eq!(m[n], t[voigt3_index(j, k, i)]);
        }
        assert_eq!(m[voigt3_index(0, 1, 2)], 231.0);

        // three applications give back the input vector
        let back = cyclic_permute(&cyclic_permute(&m));
        assert_eq!(back, t);
        assert_ne!(m, t);
    }

    #[test]
    fn symmetrize_rows_works() {
        let t = Matrix9::from_fn(|r, c| (10 * r + c) as f64);
        let s = symmetrize_rows(&t);
        assert_eq!(s[(0, 4)], 8.0);
        assert_eq!(s[(2, 1)], 42.0);
        assert_eq!(s[(3, 0)], 30.0 + 60.0);
        assert_eq!(s[(6, 0)], 30.0 + 60.0);
        assert_eq!(s[(8, 2)], 52.0 + 82.0);

        // the rows of a packed symmetric tensor derivative are paired
        for r in 0..9 {
            for c in 0..9 {
                assert_eq!(s[(r, c)], s[(TRANSPOSE_ROW[r], c)]);
            }
        }
    }
}
