use super::{DeformationMeasures, StiffnessTensors};
use crate::base::{cyclic_permute, t2_to_voigt, t3_to_voigt, voigt_to_t2, voigt_to_t3};
use crate::base::{Matrix3, Vector27, Vector9};
use serde::{Deserialize, Serialize};

/// Holds the stresses in the reference configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Stresses {
    /// Second Piola-Kirchhoff stress (9-Voigt)
    pub pk2: Vector9,

    /// Symmetric micro-stress Σ (9-Voigt)
    pub sigma: Vector9,

    /// Higher-order couple stress M (27-Voigt)
    pub m: Vector27,
}

/// Holds intermediate quantities shared by the stresses and their derivatives
///
/// ```text
/// X = B:ℰ + D:E      C⁻¹Ψ      C:Γ      C⁻¹Γ
/// ```
#[derive(Clone, Debug)]
pub struct StressTerms {
    /// X = B:ℰ + D:E (unpacked)
    pub xx: Matrix3,

    /// C⁻¹ Ψ
    pub rcg_inv_psi: Matrix3,

    /// C:Γ (27-Voigt; before the cyclic permutation)
    pub c_gamma: Vector27,

    /// C⁻¹ Γ (27-Voigt)
    pub rcg_inv_gamma: Vector27,
}

impl Stresses {
    /// Allocates a new instance with zero stresses
    pub fn new() -> Self {
        Stresses {
            pk2: Vector9::zeros(),
            sigma: Vector9::zeros(),
            m: Vector27::zeros(),
        }
    }

    /// Computes the stresses
    ///
    /// ```text
    /// mix = X (C⁻¹Ψ)ᵀ + (C:Γ) (C⁻¹Γ)ᵀ
    /// S = A:E + D:ℰ + mix
    /// Σ = A:E + D:ℰ + mix + mixᵀ
    /// M_ijk = (C:Γ)_jki
    /// ```
    pub fn calculate(&mut self, stiff: &StiffnessTensors, def: &DeformationMeasures, terms: &StressTerms) {
        let c_gamma_t3 = voigt_to_t3(&terms.c_gamma);
        let rcg_inv_gamma_t3 = voigt_to_t3(&terms.rcg_inv_gamma);
        let mix = terms.xx * terms.rcg_inv_psi.transpose() + c_gamma_t3 * rcg_inv_gamma_t3.transpose();
        let common = stiff.aa * def.ee + stiff.dd * def.ee_micro;
        self.pk2 = common + t2_to_voigt(&mix);
        self.sigma = common + t2_to_voigt(&(mix + mix.transpose()));
        self.m = cyclic_permute(&terms.c_gamma);
    }

    /// Returns the largest absolute difference between Σ and Σᵀ
    pub fn sigma_asymmetry(&self) -> f64 {
        let sig = voigt_to_t2(&self.sigma);
        (sig - sig.transpose()).amax()
    }
}

impl StressTerms {
    /// Computes the intermediate quantities
    pub fn new(stiff: &StiffnessTensors, def: &DeformationMeasures) -> Self {
        StressTerms {
            xx: voigt_to_t2(&(stiff.bb * def.ee_micro + stiff.dd * def.ee)),
            rcg_inv_psi: def.rcg_inv * def.psi,
            c_gamma: stiff.cc * def.gamma_v,
            rcg_inv_gamma: t3_to_voigt(&(def.rcg_inv * def.gamma)),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{StressTerms, Stresses};
    use crate::base::{KinematicInput, Matrix9x3, ParamMicromorphic, Vector27, Vector9};
    use crate::material::{DeformationMeasures, StiffnessTensors};
    use approx::assert_relative_eq;

    fn calc(param: &ParamMicromorphic, input: &KinematicInput) -> Stresses {
        let stiff = StiffnessTensors::new(param);
        let def = DeformationMeasures::new(input).unwrap();
        let terms = StressTerms::new(&stiff, &def);
        let mut stresses = Stresses::new();
        stresses.calculate(&stiff, &def, &terms);
        stresses
    }

    #[test]
    fn undeformed_state_gives_zero_stresses() {
        let stresses = calc(&ParamMicromorphic::sample(), &KinematicInput::default());
        assert_relative_eq!(stresses.pk2, Vector9::zeros(), epsilon = 1e-15);
        assert_relative_eq!(stresses.sigma, Vector9::zeros(), epsilon = 1e-15);
        assert_relative_eq!(stresses.m, Vector27::zeros(), epsilon = 1e-15);
        assert_eq!(Stresses::default(), Stresses::new());
    }

    #[test]
    fn sigma_is_symmetric() {
        let stresses = calc(&ParamMicromorphic::sample(), &KinematicInput::sample());
        assert!(stresses.sigma_asymmetry() < 1e-12);
        assert!(stresses.sigma[3] != 0.0);
    }

    #[test]
    fn zero_grad_phi_gives_zero_couple_stress() {
        let sample = KinematicInput::sample();
        let input = KinematicInput::from_matrices(&sample.grad_u_matrix(), &sample.phi_vector(), &Matrix9x3::zeros());
        let stresses = calc(&ParamMicromorphic::sample(), &input);
        assert_eq!(stresses.m, Vector27::zeros());
    }

    #[test]
    fn classical_limit_works() {
        let param = ParamMicromorphic::sample_classical();
        let input = KinematicInput::sample();
        let stresses = calc(&param, &input);
        let stiff = StiffnessTensors::new(&param);
        let def = DeformationMeasures::new(&input).unwrap();
        let correct = stiff.aa * def.ee;
        assert_relative_eq!(stresses.pk2, correct, epsilon = 1e-12);
        assert_relative_eq!(stresses.sigma, correct, epsilon = 1e-12);
        assert_eq!(stresses.m, Vector27::zeros());
    }

    #[test]
    fn calculate_works() {
        let stresses = calc(&ParamMicromorphic::sample(), &KinematicInput::sample());
        #[rustfmt::skip]
        let pk2 = Vector9::from_column_slice(&[
            2.594705947654252e+02, 2.155707072800437e+02, 2.128165652843470e+02,
           -5.113514316102448e-01, 1.526909194565202e+00, 1.999316985000103e+01,
           -6.330867399298179e-01, 5.953706382339072e-01, 2.319374427339855e+01,
        ]);
        #[rustfmt::skip]
        let sigma = Vector9::from_column_slice(&[
            2.647472595029059e+02, 2.186775865518315e+02, 2.161811441502329e+02,
           -1.144438171540063e+00, 2.122279832799109e+00, 2.280464958610454e+01,
           -1.144438171540063e+00, 2.122279832799109e+00, 2.280464958610454e+01,
        ]);
        assert_relative_eq!(stresses.pk2, pk2, epsilon = 1e-10, max_relative = 1e-12);
        assert_relative_eq!(stresses.sigma, sigma, epsilon = 1e-10, max_relative = 1e-12);
        assert_relative_eq!(stresses.m[0], -4.863121025729378e-01, epsilon = 1e-12);
        assert_relative_eq!(stresses.m[3], 2.456364407003606e+00, epsilon = 1e-12);
        assert_relative_eq!(stresses.m[26], 1.600719867454876e+00, epsilon = 1e-12);
    }
}
