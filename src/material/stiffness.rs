use super::stiffness_tables::{A_TABLE, B_TABLE, C_TABLE, D_TABLE};
use crate::base::{voigt3_components, Matrix27, Matrix9, ParamMicromorphic, VOIGT_IJ};
use nalgebra::SMatrix;

/// Holds the stiffness tensors in sparse (triplet) form
///
/// Each triplet is (row, column, value); only the structural nonzeros are stored.
#[derive(Clone, Debug)]
pub struct StiffnessTriplets {
    /// Macro-strain stiffness A (9x9)
    pub aa: Vec<(usize, usize, f64)>,

    /// Micro-strain stiffness B (9x9)
    pub bb: Vec<(usize, usize, f64)>,

    /// Higher-order stiffness C (27x27)
    pub cc: Vec<(usize, usize, f64)>,

    /// Macro/micro coupling stiffness D (9x9)
    pub dd: Vec<(usize, usize, f64)>,
}

/// Holds the dense stiffness tensors
#[derive(Clone, Debug)]
pub struct StiffnessTensors {
    /// Macro-strain stiffness A (9x9)
    pub aa: Matrix9,

    /// Micro-strain stiffness B (9x9)
    pub bb: Matrix9,

    /// Higher-order stiffness C (27x27)
    pub cc: Matrix27,

    /// Macro/micro coupling stiffness D (9x9)
    pub dd: Matrix9,
}

impl StiffnessTriplets {
    /// Allocates a new instance from the coefficient tables
    pub fn new(param: &ParamMicromorphic) -> Self {
        let p = param;
        StiffnessTriplets {
            aa: scatter_table(&A_TABLE, &[p.lambda, p.mu]),
            bb: scatter_table(&B_TABLE, &[p.eta, p.tau, p.kappa, p.nu, p.sigma]),
            cc: scatter_table(&C_TABLE, &p.taus),
            dd: scatter_table(&D_TABLE, &[p.tau, p.sigma]),
        }
    }
}

impl StiffnessTensors {
    /// Allocates a new instance (from the coefficient tables)
    pub fn new(param: &ParamMicromorphic) -> Self {
        StiffnessTensors::from_triplets(&StiffnessTriplets::new(param))
    }

    /// Allocates a new instance by scattering the triplets
    pub fn from_triplets(triplets: &StiffnessTriplets) -> Self {
        StiffnessTensors {
            aa: to_dense(&triplets.aa),
            bb: to_dense(&triplets.bb),
            cc: to_dense(&triplets.cc),
            dd: to_dense(&triplets.dd),
        }
    }

    /// Allocates a new instance by evaluating the isotropic index forms
    ///
    /// ```text
    /// A_KLMN = λ δKL δMN + μ (δKM δLN + δKN δLM)
    /// B_KLMN = (η - τ) δKL δMN + κ δKM δLN + ν δKN δLM - σ (δKM δLN + δKN δLM)
    /// D_KLMN = τ δKL δMN + σ (δKM δLN + δKN δLM)
    /// C_KLMNPQ = τ1 (δKL δMN δPQ + δKQ δLM δNP) + τ2 (δKL δMP δNQ + δKM δLQ δNP) + ...
    /// ```
    pub fn from_isotropic_forms(param: &ParamMicromorphic) -> Self {
        let p = param;
        let d = |a: usize, b: usize| if a == b { 1.0 } else { 0.0 };
        let aa = Matrix9::from_fn(|r, c| {
            let ((k, l), (m, n)) = (VOIGT_IJ[r], VOIGT_IJ[c]);
            p.lambda * d(k, l) * d(m, n) + p.mu * (d(k, m) * d(l, n) + d(k, n) * d(l, m))
        });
        let bb = Matrix9::from_fn(|r, c| {
            let ((k, l), (m, n)) = (VOIGT_IJ[r], VOIGT_IJ[c]);
            (p.eta - p.tau) * d(k, l) * d(m, n) + p.kappa * d(k, m) * d(l, n) + p.nu * d(k, n) * d(l, m)
                - p.sigma * (d(k, m) * d(l, n) + d(k, n) * d(l, m))
        });
        let dd = Matrix9::from_fn(|r, c| {
            let ((k, l), (m, n)) = (VOIGT_IJ[r], VOIGT_IJ[c]);
            p.tau * d(k, l) * d(m, n) + p.sigma * (d(k, m) * d(l, n) + d(k, n) * d(l, m))
        });
        let t = &p.taus;
        let cc = Matrix27::from_fn(|r, c| {
            let (k, l, m) = voigt3_components(r);
            let (n, pp, q) = voigt3_components(c);
            t[0] * (d(k, l) * d(m, n) * d(pp, q) + d(k, q) * d(l, m) * d(n, pp))
                + t[1] * (d(k, l) * d(m, pp) * d(n, q) + d(k, m) * d(l, q) * d(n, pp))
                + t[2] * d(k, l) * d(m, q) * d(n, pp)
                + t[3] * d(k, n) * d(l, m) * d(pp, q)
                + t[4] * (d(k, m) * d(l, n) * d(pp, q) + d(k, pp) * d(l, m) * d(n, q))
                + t[5] * d(k, m) * d(l, pp) * d(n, q)
                + t[6] * d(k, n) * d(l, pp) * d(m, q)
                + t[7] * (d(k, pp) * d(l, q) * d(m, n) + d(k, q) * d(l, n) * d(m, pp))
                + t[8] * d(k, n) * d(l, q) * d(m, pp)
                + t[9] * d(k, pp) * d(l, n) * d(m, q)
                + t[10] * d(k, q) * d(l, pp) * d(m, n)
        });
        StiffnessTensors { aa, bb, cc, dd }
    }
}

/// Evaluates a coefficient table into (row, column, value) triplets
fn scatter_table<const P: usize>(table: &[(usize, usize, [f64; P])], params: &[f64; P]) -> Vec<(usize, usize, f64)> {
    table
        .iter()
        .map(|(r, c, mult)| {
            let value: f64 = mult.iter().zip(params).map(|(m, p)| m * p).sum();
            (*r, *c, value)
        })
        .collect()
}

/// Assembles a dense matrix from triplets (duplicates are summed)
fn to_dense<const N: usize>(triplets: &[(usize, usize, f64)]) -> SMatrix<f64, N, N> {
    let mut res = SMatrix::<f64, N, N>::zeros();
    for (r, c, value) in triplets {
        res[(*r, *c)] += value;
    }
    res
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{StiffnessTensors, StiffnessTriplets};
    use crate::base::ParamMicromorphic;
    use approx::assert_relative_eq;

    #[test]
    fn triplets_have_the_structural_nonzeros() {
        let param = ParamMicromorphic::sample();
        let triplets = StiffnessTriplets::new(&param);
        assert_eq!(triplets.aa.len(), 21);
        assert_eq!(triplets.bb.len(), 21);
        assert_eq!(triplets.dd.len(), 21);
        assert_eq!(triplets.cc.len(), 183);
    }

    #[test]
    fn dense_values_are_correct() {
        let p = ParamMicromorphic::sample();
        let stiff = StiffnessTensors::new(&p);
        let (aa, bb, dd) = (&stiff.aa, &stiff.bb, &stiff.dd);

        assert_eq!(aa[(0, 0)], p.lambda + 2.0 * p.mu);
        assert_eq!(aa[(0, 1)], p.lambda);
        assert_eq!(aa[(3, 3)], p.mu);
        assert_eq!(aa[(3, 6)], p.mu);
        assert_eq!(aa[(3, 4)], 0.0);

        assert_relative_eq!(
            bb[(0, 0)],
            p.eta + p.kappa + p.nu - 2.0 * p.sigma - p.tau,
            epsilon = 1e-12
        );
        assert_relative_eq!(bb[(1, 2)], p.eta - p.tau, epsilon = 1e-12);
        assert_relative_eq!(bb[(4, 4)], p.kappa - p.sigma, epsilon = 1e-12);
        assert_relative_eq!(bb[(4, 7)], p.nu - p.sigma, epsilon = 1e-12);

        assert_relative_eq!(dd[(2, 2)], 2.0 * p.sigma + p.tau, epsilon = 1e-12);
        assert_eq!(dd[(2, 0)], p.tau);
        assert_eq!(dd[(8, 5)], p.sigma);

        let t = &p.taus;
        let c00 = 2.0 * t[0] + 2.0 * t[1] + t[2] + t[3] + 2.0 * t[4] + t[5] + t[6] + 2.0 * t[7] + t[8] + t[9] + t[10];
        assert_relative_eq!(stiff.cc[(0, 0)], c00, epsilon = 1e-12);
        assert_relative_eq!(stiff.cc[(0, 1)], t[0] + t[3] + t[4], epsilon = 1e-12);
        assert_relative_eq!(stiff.cc[(0, 17)], t[0] + t[1] + t[2], epsilon = 1e-12);
    }

    #[test]
    fn stiffness_tensors_are_symmetric() {
        let stiff = StiffnessTensors::new(&ParamMicromorphic::sample());
        assert_eq!(stiff.aa, stiff.aa.transpose());
        assert_eq!(stiff.bb, stiff.bb.transpose());
        assert_eq!(stiff.cc, stiff.cc.transpose());
        assert_eq!(stiff.dd, stiff.dd.transpose());
    }

    #[test]
    fn table_and_index_forms_agree() {
        let fparams: Vec<f64> = (0..18).map(|i| 1.0 + 0.37 * (i as f64) - 0.01 * (i * i) as f64).collect();
        for param in [ParamMicromorphic::sample(), ParamMicromorphic::from_slice(&fparams).unwrap()] {
            let from_table = StiffnessTensors::new(&param);
            let from_forms = StiffnessTensors::from_isotropic_forms(&param);
            assert_relative_eq!(from_table.aa, from_forms.aa, epsilon = 1e-12);
            assert_relative_eq!(from_table.bb, from_forms.bb, epsilon = 1e-12);
            assert_relative_eq!(from_table.cc, from_forms.cc, epsilon = 1e-12);
            assert_relative_eq!(from_table.dd, from_forms.dd, epsilon = 1e-12);

            // the forms produce no nonzero outside the table
            let count = |m: &[f64]| m.iter().filter(|v| **v != 0.0).count();
            assert!(count(from_forms.cc.as_slice()) <= 183);
            assert!(count(from_forms.aa.as_slice()) <= 21);
        }
    }
}
