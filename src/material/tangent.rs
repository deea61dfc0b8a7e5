use super::{dgamma_dff, dgamma_dgrad_chi, dpsi_dchi, dpsi_dff, drcg_dff};
use super::{DeformationMeasures, StiffnessTensors, StressTerms};
use crate::base::{symmetrize_rows, voigt3_components, voigt_index, voigt_to_t3, CYCLIC_PERMUTATION, VOIGT_IJ};
use crate::base::{Matrix27, Matrix27x9, Matrix3, Matrix9, Matrix9x27};
use nalgebra::SMatrix;

/// Holds the four additive terms of ∂S/∂C
///
/// ```text
/// t0 = A/2
/// t1_IJOP = D_IQOP (C⁻¹Ψ)_JQ / 2
/// t2_IJOP = (X Ψᵀ)_IR ∂C⁻¹_JR/∂C_OP
/// t3_IJOP = (C:Γ)_IQR Γ_SQR ∂C⁻¹_JS/∂C_OP
/// ```
#[derive(Clone, Debug)]
pub struct RcgTerms {
    /// Macro-strain term A/2
    pub t0: Matrix9,

    /// Coupling term through D and C⁻¹Ψ
    pub t1: Matrix9,

    /// Micro-strain term through ∂C⁻¹/∂C
    pub t2: Matrix9,

    /// Higher-order term through ∂C⁻¹/∂C
    pub t3: Matrix9,
}

/// Holds the three additive terms of ∂S/∂Ψ
///
/// ```text
/// p0 = D
/// p1_IJOP = B_IQOP (C⁻¹Ψ)_JQ
/// p2_IJOP = X_IP C⁻¹_JO
/// ```
#[derive(Clone, Debug)]
pub struct PsiTerms {
    /// Coupling stiffness D
    pub p0: Matrix9,

    /// Micro-strain term through B and C⁻¹Ψ
    pub p1: Matrix9,

    /// Term from X and C⁻¹
    pub p2: Matrix9,
}

/// Holds the two additive terms of ∂S/∂Γ
///
/// ```text
/// g0_IJTUW = C_IQRTUW (C⁻¹Γ)_JQR
/// g1_IJTUW = (C:Γ)_IUW C⁻¹_JT
/// ```
#[derive(Clone, Debug)]
pub struct GammaTerms {
    /// Higher-order stiffness contracted with C⁻¹Γ
    pub g0: Matrix9x27,

    /// C:Γ combined with C⁻¹
    pub g1: Matrix9x27,
}

/// Holds the derivatives of the stresses w.r.t. the deformation measures (C, Ψ, Γ)
///
/// M does not depend on C nor Ψ; thus ∂M/∂C = 0 and ∂M/∂Ψ = 0.
#[derive(Clone, Debug)]
pub struct ReferenceTangents {
    /// ∂S/∂C
    pub dpk2_drcg: Matrix9,

    /// ∂S/∂Ψ
    pub dpk2_dpsi: Matrix9,

    /// ∂S/∂Γ
    pub dpk2_dgamma: Matrix9x27,

    /// ∂Σ/∂C
    pub dsigma_drcg: Matrix9,

    /// ∂Σ/∂Ψ
    pub dsigma_dpsi: Matrix9,

    /// ∂Σ/∂Γ
    pub dsigma_dgamma: Matrix9x27,

    /// ∂M/∂Γ
    pub dm_dgamma: Matrix27,
}

/// Holds the derivatives of the stresses w.r.t. the fundamental deformation quantities (F, χ, ∇χ)
#[derive(Clone, Debug)]
pub struct DeformationTangents {
    /// ∂S/∂F
    pub dpk2_dff: Matrix9,

    /// ∂S/∂χ
    pub dpk2_dchi: Matrix9,

    /// ∂S/∂∇χ
    pub dpk2_dgrad_chi: Matrix9x27,

    /// ∂Σ/∂F
    pub dsigma_dff: Matrix9,

    /// ∂Σ/∂χ
    pub dsigma_dchi: Matrix9,

    /// ∂Σ/∂∇χ
    pub dsigma_dgrad_chi: Matrix9x27,

    /// ∂M/∂F
    pub dm_dff: Matrix27x9,

    /// ∂M/∂χ (zero)
    pub dm_dchi: Matrix27x9,

    /// ∂M/∂∇χ
    pub dm_dgrad_chi: Matrix27,
}

impl RcgTerms {
    /// Computes the terms
    pub fn new(stiff: &StiffnessTensors, def: &DeformationMeasures, terms: &StressTerms) -> Self {
        let drcg_inv = drcg_inv_drcg(&def.rcg_inv);
        let yy = voigt_to_t3(&terms.c_gamma) * def.gamma.transpose();
        RcgTerms {
            t0: 0.5 * stiff.aa,
            t1: contract_rows_right(&(0.5 * stiff.dd), &terms.rcg_inv_psi),
            t2: contract_rows_left(&(terms.xx * def.psi.transpose()), &drcg_inv),
            t3: contract_rows_left(&yy, &drcg_inv),
        }
    }

    /// Returns ∂S/∂C
    pub fn dpk2(&self) -> Matrix9 {
        self.t0 + self.t1 + self.t2 + self.t3
    }

    /// Returns ∂Σ/∂C (the first term is not symmetrized)
    pub fn dsigma(&self) -> Matrix9 {
        self.t0 + symmetrize_rows(&(self.t1 + self.t2 + self.t3))
    }
}

impl PsiTerms {
    /// Computes the terms
    pub fn new(stiff: &StiffnessTensors, def: &DeformationMeasures, terms: &StressTerms) -> Self {
        let p2 = Matrix9::from_fn(|r, c| {
            let (ii, jj) = VOIGT_IJ[r];
            let (o, p) = VOIGT_IJ[c];
            terms.xx[(ii, p)] * def.rcg_inv[(jj, o)]
        });
        PsiTerms {
            p0: stiff.dd,
            p1: contract_rows_right(&stiff.bb, &terms.rcg_inv_psi),
            p2,
        }
    }

    /// Returns ∂S/∂Ψ
    pub fn dpk2(&self) -> Matrix9 {
        self.p0 + self.p1 + self.p2
    }

    /// Returns ∂Σ/∂Ψ (the first term is not symmetrized)
    pub fn dsigma(&self) -> Matrix9 {
        self.p0 + symmetrize_rows(&self.p1) + symmetrize_rows(&self.p2)
    }
}

impl GammaTerms {
    /// Computes the terms
    pub fn new(stiff: &StiffnessTensors, def: &DeformationMeasures, terms: &StressTerms) -> Self {
        let g0 = Matrix9x27::from_fn(|r, c| {
            let (ii, jj) = VOIGT_IJ[r];
            (0..9)
                .map(|q| stiff.cc[(9 * ii + q, c)] * terms.rcg_inv_gamma[9 * jj + q])
                .sum()
        });
        let g1 = Matrix9x27::from_fn(|r, c| {
            let (ii, jj) = VOIGT_IJ[r];
            let (t, u, w) = voigt3_components(c);
            terms.c_gamma[9 * ii + voigt_index(u, w)] * def.rcg_inv[(jj, t)]
        });
        GammaTerms { g0, g1 }
    }

    /// Returns ∂S/∂Γ
    pub fn dpk2(&self) -> Matrix9x27 {
        self.g0 + self.g1
    }

    /// Returns ∂Σ/∂Γ
    pub fn dsigma(&self) -> Matrix9x27 {
        symmetrize_rows(&self.g0) + symmetrize_rows(&self.g1)
    }
}

impl ReferenceTangents {
    /// Computes the derivatives w.r.t. (C, Ψ, Γ)
    ///
    /// The PK2 and Σ derivatives are assembled from the same term sets.
    pub fn new(stiff: &StiffnessTensors, def: &DeformationMeasures, terms: &StressTerms) -> Self {
        let rcg_terms = RcgTerms::new(stiff, def, terms);
        let psi_terms = PsiTerms::new(stiff, def, terms);
        let gamma_terms = GammaTerms::new(stiff, def, terms);
        ReferenceTangents {
            dpk2_drcg: rcg_terms.dpk2(),
            dpk2_dpsi: psi_terms.dpk2(),
            dpk2_dgamma: gamma_terms.dpk2(),
            dsigma_drcg: rcg_terms.dsigma(),
            dsigma_dpsi: psi_terms.dsigma(),
            dsigma_dgamma: gamma_terms.dsigma(),
            dm_dgamma: dm_dgamma(stiff),
        }
    }
}

impl DeformationTangents {
    /// Applies the chain rule through ∂(C, Ψ, Γ)/∂(F, χ, ∇χ)
    pub fn new(reference: &ReferenceTangents, def: &DeformationMeasures) -> Self {
        let drcg_dff = drcg_dff(&def.ff);
        let dpsi_dff = dpsi_dff(&def.chi);
        let dpsi_dchi = dpsi_dchi(&def.ff);
        let dgamma_dff = dgamma_dff(&def.grad_chi);
        let dgamma_dgrad_chi = dgamma_dgrad_chi(&def.ff);
        let r = reference;
        DeformationTangents {
            dpk2_dff: r.dpk2_drcg * drcg_dff + r.dpk2_dpsi * dpsi_dff + r.dpk2_dgamma * dgamma_dff,
            dpk2_dchi: r.dpk2_dpsi * dpsi_dchi,
            dpk2_dgrad_chi: r.dpk2_dgamma * dgamma_dgrad_chi,
            dsigma_dff: r.dsigma_drcg * drcg_dff + r.dsigma_dpsi * dpsi_dff + r.dsigma_dgamma * dgamma_dff,
            dsigma_dchi: r.dsigma_dpsi * dpsi_dchi,
            dsigma_dgrad_chi: r.dsigma_dgamma * dgamma_dgrad_chi,
            dm_dff: r.dm_dgamma * dgamma_dff,
            dm_dchi: Matrix27x9::zeros(),
            dm_dgrad_chi: r.dm_dgamma * dgamma_dgrad_chi,
        }
    }
}

/// Computes ∂C⁻¹/∂C
///
/// ```text
/// ∂C⁻¹_JR/∂C_OP = -C⁻¹_JO C⁻¹_PR
/// ```
pub fn drcg_inv_drcg(rcg_inv: &Matrix3) -> Matrix9 {
    Matrix9::from_fn(|r, c| {
        let (jj, rr) = VOIGT_IJ[r];
        let (o, p) = VOIGT_IJ[c];
        -rcg_inv[(jj, o)] * rcg_inv[(p, rr)]
    })
}

/// Computes ∂M/∂Γ by relabeling the rows of the higher-order stiffness with the cyclic permutation
pub fn dm_dgamma(stiff: &StiffnessTensors) -> Matrix27 {
    Matrix27::from_fn(|r, c| stiff.cc[(CYCLIC_PERMUTATION[r], c)])
}

/// Contracts the second slot of the rows of h with the rows of g
///
/// ```text
/// out_IJc = h_IQc g_JQ
/// ```
fn contract_rows_right<const N: usize>(h: &SMatrix<f64, 9, N>, g: &Matrix3) -> SMatrix<f64, 9, N> {
    SMatrix::<f64, 9, N>::from_fn(|r, c| {
        let (ii, jj) = VOIGT_IJ[r];
        (0..3).map(|q| h[(voigt_index(ii, q), c)] * g[(jj, q)]).sum()
    })
}

/// Contracts g with the first slot of the rows of h
///
/// ```text
/// out_IJc = g_IR h_JRc
/// ```
fn contract_rows_left<const N: usize>(g: &Matrix3, h: &SMatrix<f64, 9, N>) -> SMatrix<f64, 9, N> {
    SMatrix::<f64, 9, N>::from_fn(|r, c| {
        let (ii, jj) = VOIGT_IJ[r];
        (0..3).map(|rr| g[(ii, rr)] * h[(voigt_index(jj, rr), c)]).sum()
    })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{numerical_jacobian, relative_difference, t2_to_voigt, t3_to_voigt, voigt_to_t2};
    use crate::base::{KinematicInput, Matrix3x9, ParamMicromorphic, Vector27, Vector9};
    use crate::material::{green_lagrange_strain, Stresses};

    struct Sample {
        stiff: StiffnessTensors,
        def: DeformationMeasures,
        reference: ReferenceTangents,
    }

    fn sample() -> Sample {
        let stiff = StiffnessTensors::new(&ParamMicromorphic::sample());
        let def = DeformationMeasures::new(&KinematicInput::sample()).unwrap();
        let terms = StressTerms::new(&stiff, &def);
        let reference = ReferenceTangents::new(&stiff, &def, &terms);
        Sample { stiff, def, reference }
    }

    // evaluates the stresses with (C, Ψ, Γ) replaced
    fn stresses_at(s: &Sample, rcg: &Vector9, psi: &Vector9, gamma: &Vector27) -> Stresses {
        let mut def = s.def.clone();
        def.rcg = voigt_to_t2(rcg);
        def.rcg_inv = def.rcg.try_inverse().unwrap();
        def.psi = voigt_to_t2(psi);
        def.gamma = voigt_to_t3(gamma);
        def.ee = t2_to_voigt(&green_lagrange_strain(&def.rcg));
        def.ee_micro = psi - t2_to_voigt(&Matrix3::identity());
        def.gamma_v = *gamma;
        let terms = StressTerms::new(&s.stiff, &def);
        let mut stresses = Stresses::new();
        stresses.calculate(&s.stiff, &def, &terms);
        stresses
    }

    #[test]
    fn drcg_inv_drcg_works() {
        let s = sample();
        let x = t2_to_voigt(&s.def.rcg);
        let num = numerical_jacobian(&x, |x| t2_to_voigt(&voigt_to_t2(x).try_inverse().unwrap()));
        assert!(relative_difference(&drcg_inv_drcg(&s.def.rcg_inv), &num) < 1e-9);
    }

    #[test]
    fn derivatives_wrt_rcg_work() {
        let s = sample();
        let (psi, gamma) = (t2_to_voigt(&s.def.psi), s.def.gamma_v);
        let x = t2_to_voigt(&s.def.rcg);
        let num_pk2 = numerical_jacobian(&x, |x| stresses_at(&s, x, &psi, &gamma).pk2);
        let num_sigma = numerical_jacobian(&x, |x| stresses_at(&s, x, &psi, &gamma).sigma);
        let num_m = numerical_jacobian(&x, |x| stresses_at(&s, x, &psi, &gamma).m);
        assert!(relative_difference(&s.reference.dpk2_drcg, &num_pk2) < 1e-8);
        assert!(relative_difference(&s.reference.dsigma_drcg, &num_sigma) < 1e-8);
        assert!(num_m.amax() < 1e-8);
    }

    #[test]
    fn derivatives_wrt_psi_work() {
        let s = sample();
        let (rcg, gamma) = (t2_to_voigt(&s.def.rcg), s.def.gamma_v);
        let x = t2_to_voigt(&s.def.psi);
        let num_pk2 = numerical_jacobian(&x, |x| stresses_at(&s, &rcg, x, &gamma).pk2);
        let num_sigma = numerical_jacobian(&x, |x| stresses_at(&s, &rcg, x, &gamma).sigma);
        let num_m = numerical_jacobian(&x, |x| stresses_at(&s, &rcg, x, &gamma).m);
        assert!(relative_difference(&s.reference.dpk2_dpsi, &num_pk2) < 1e-8);
        assert!(relative_difference(&s.reference.dsigma_dpsi, &num_sigma) < 1e-8);
        assert!(num_m.amax() < 1e-8);
    }

    #[test]
    fn derivatives_wrt_gamma_work() {
        let s = sample();
        let (rcg, psi) = (t2_to_voigt(&s.def.rcg), t2_to_voigt(&s.def.psi));
        let x = s.def.gamma_v;
        let num_pk2 = numerical_jacobian(&x, |x| stresses_at(&s, &rcg, &psi, x).pk2);
        let num_sigma = numerical_jacobian(&x, |x| stresses_at(&s, &rcg, &psi, x).sigma);
        let num_m = numerical_jacobian(&x, |x| stresses_at(&s, &rcg, &psi, x).m);
        assert!(relative_difference(&s.reference.dpk2_dgamma, &num_pk2) < 1e-8);
        assert!(relative_difference(&s.reference.dsigma_dgamma, &num_sigma) < 1e-8);
        assert!(relative_difference(&s.reference.dm_dgamma, &num_m) < 1e-8);
    }

    #[test]
    fn term_sets_assemble_the_reference_tangents() {
        let s = sample();
        let terms = StressTerms::new(&s.stiff, &s.def);
        let rcg_terms = RcgTerms::new(&s.stiff, &s.def, &terms).clone();
        let psi_terms = PsiTerms::new(&s.stiff, &s.def, &terms).clone();
        let gamma_terms = GammaTerms::new(&s.stiff, &s.def, &terms).clone();
        assert_eq!(rcg_terms.dpk2(), s.reference.dpk2_drcg);
        assert_eq!(psi_terms.dsigma(), s.reference.dsigma_dpsi);
        assert_eq!(gamma_terms.dsigma(), s.reference.dsigma_dgamma);
        assert_eq!(psi_terms.p0, s.stiff.dd);
        assert_eq!(rcg_terms.t0, 0.5 * s.stiff.aa);
        assert!(format!("{:?}", gamma_terms).contains("g0"));
    }

    #[test]
    fn sigma_terms_are_paired() {
        // rows of ∂Σ/∂X for the pairs (3,6), (4,7), (5,8) coincide because Σ is symmetric
        let s = sample();
        for (a, b) in [(3, 6), (4, 7), (5, 8)] {
            for c in 0..9 {
                assert_eq!(s.reference.dsigma_dpsi[(a, c)], s.reference.dsigma_dpsi[(b, c)]);
                assert_eq!(s.reference.dsigma_drcg[(a, c)], s.reference.dsigma_drcg[(b, c)]);
            }
            for c in 0..27 {
                assert_eq!(s.reference.dsigma_dgamma[(a, c)], s.reference.dsigma_dgamma[(b, c)]);
            }
        }
    }

    #[test]
    fn dm_dgamma_is_the_permuted_stiffness() {
        let s = sample();
        let gamma = s.def.gamma_v;
        let mut stresses = Stresses::new();
        let terms = StressTerms::new(&s.stiff, &s.def);
        stresses.calculate(&s.stiff, &s.def, &terms);
        let linear = s.reference.dm_dgamma * gamma;
        for n in 0..27 {
            assert!(f64::abs(linear[n] - stresses.m[n]) < 1e-13);
        }
        assert_eq!(s.reference.dm_dgamma.row(1), s.stiff.cc.row(17));
    }

    #[test]
    fn deformation_tangents_work() {
        let s = sample();
        let dt = DeformationTangents::new(&s.reference, &s.def);
        let (ff, chi, grad_chi) = (s.def.ff, s.def.chi, s.def.grad_chi);
        let calc = |ff: &Matrix3, chi: &Matrix3, grad_chi: &Matrix3x9| {
            let def = DeformationMeasures::from_fundamental(ff, chi, grad_chi).unwrap();
            let terms = StressTerms::new(&s.stiff, &def);
            let mut stresses = Stresses::new();
            stresses.calculate(&s.stiff, &def, &terms);
            stresses
        };

        let x = t2_to_voigt(&ff);
        let num_pk2 = numerical_jacobian(&x, |x| calc(&voigt_to_t2(x), &chi, &grad_chi).pk2);
        let num_sigma = numerical_jacobian(&x, |x| calc(&voigt_to_t2(x), &chi, &grad_chi).sigma);
        let num_m = numerical_jacobian(&x, |x| calc(&voigt_to_t2(x), &chi, &grad_chi).m);
        assert!(relative_difference(&dt.dpk2_dff, &num_pk2) < 1e-8);
        assert!(relative_difference(&dt.dsigma_dff, &num_sigma) < 1e-8);
        assert!(relative_difference(&dt.dm_dff, &num_m) < 1e-8);

        let x = t2_to_voigt(&chi);
        let num_pk2 = numerical_jacobian(&x, |x| calc(&ff, &voigt_to_t2(x), &grad_chi).pk2);
        let num_sigma = numerical_jacobian(&x, |x| calc(&ff, &voigt_to_t2(x), &grad_chi).sigma);
        let num_m = numerical_jacobian(&x, |x| calc(&ff, &voigt_to_t2(x), &grad_chi).m);
        assert!(relative_difference(&dt.dpk2_dchi, &num_pk2) < 1e-8);
        assert!(relative_difference(&dt.dsigma_dchi, &num_sigma) < 1e-8);
        assert!(num_m.amax() < 1e-8);
        assert_eq!(dt.dm_dchi, Matrix27x9::zeros());

        let x = t3_to_voigt(&grad_chi);
        let num_pk2 = numerical_jacobian(&x, |x| calc(&ff, &chi, &voigt_to_t3(x)).pk2);
        let num_sigma = numerical_jacobian(&x, |x| calc(&ff, &chi, &voigt_to_t3(x)).sigma);
        let num_m = numerical_jacobian(&x, |x| calc(&ff, &chi, &voigt_to_t3(x)).m);
        assert!(relative_difference(&dt.dpk2_dgrad_chi, &num_pk2) < 1e-8);
        assert!(relative_difference(&dt.dsigma_dgrad_chi, &num_sigma) < 1e-8);
        assert!(relative_difference(&dt.dm_dgrad_chi, &num_m) < 1e-8);
    }
}
