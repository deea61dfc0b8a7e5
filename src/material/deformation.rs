use crate::base::{grad_phi_to_voigt, t2_to_voigt, t3_to_voigt, voigt3_index, voigt_index, voigt_to_t2, voigt_to_t3};
use crate::base::KinematicInput;
use crate::base::{Matrix3, Matrix3x9, Vector27, Vector9};
use crate::StrError;

/// Holds the deformation measures of the micromorphic continuum
///
/// ```text
/// F = (I - ∇u)⁻¹      χ = I + φ      ∇χ_iJK = g_iJl F_lK    (g_iJk = ∂φ_iJ/∂x_k)
/// C = Fᵀ F           Ψ = Fᵀ χ       Γ_IJK = F_iI ∇χ_iJK
/// E = (C - I)/2      ℰ = Ψ - I
/// ```
#[derive(Clone, Debug)]
pub struct DeformationMeasures {
    /// Deformation gradient F
    pub ff: Matrix3,

    /// Inverse of the deformation gradient
    pub ff_inv: Matrix3,

    /// Determinant of the deformation gradient J
    pub jj: f64,

    /// Micro-deformation tensor χ
    pub chi: Matrix3,

    /// Gradient of χ w.r.t. the current coordinates (3x9: column = Voigt index of (J,k))
    pub grad_chi_current: Matrix3x9,

    /// Gradient of χ w.r.t. the reference coordinates (3x9: column = Voigt index of (J,K))
    pub grad_chi: Matrix3x9,

    /// Right Cauchy-Green deformation tensor C
    pub rcg: Matrix3,

    /// Inverse of the right Cauchy-Green deformation tensor
    pub rcg_inv: Matrix3,

    /// Micro-deformation measure Ψ
    pub psi: Matrix3,

    /// Higher-order deformation measure Γ (3x9)
    pub gamma: Matrix3x9,

    /// Green-Lagrange strain E (9-Voigt)
    pub ee: Vector9,

    /// Micro-strain ℰ (9-Voigt)
    pub ee_micro: Vector9,

    /// Higher-order deformation measure Γ (27-Voigt)
    pub gamma_v: Vector27,
}

impl DeformationMeasures {
    /// Computes the deformation measures from the raw kinematic input
    pub fn new(input: &KinematicInput) -> Result<Self, StrError> {
        let grad_u = input.grad_u_matrix();
        let ff = deformation_gradient(&grad_u)?;
        let ff_inv = Matrix3::identity() - grad_u;
        let chi = micro_deformation(&input.phi_vector());
        let grad_chi_current = voigt_to_t3(&grad_phi_to_voigt(&input.grad_phi_matrix()));
        let grad_chi = pull_back_grad_chi(&grad_chi_current, &ff);
        DeformationMeasures::assemble(ff, ff_inv, chi, grad_chi_current, grad_chi)
    }

    /// Computes the deformation measures given F, χ, and the referential ∇χ
    ///
    /// The current gradient of χ is recovered with F⁻¹ such that both gradients remain consistent.
    pub fn from_fundamental(ff: &Matrix3, chi: &Matrix3, grad_chi: &Matrix3x9) -> Result<Self, StrError> {
        let ff_inv = ff.try_inverse().ok_or("the deformation gradient is singular")?;
        let grad_chi_current = pull_back_grad_chi(grad_chi, &ff_inv);
        DeformationMeasures::assemble(*ff, ff_inv, *chi, grad_chi_current, *grad_chi)
    }

    /// Computes the derived measures given F and its inverse
    fn assemble(
        ff: Matrix3,
        ff_inv: Matrix3,
        chi: Matrix3,
        grad_chi_current: Matrix3x9,
        grad_chi: Matrix3x9,
    ) -> Result<Self, StrError> {
        let jj = ff.determinant();
        let rcg = ff.transpose() * ff;
        let rcg_inv = rcg
            .try_inverse()
            .ok_or("the right Cauchy-Green deformation tensor is singular")?;
        let psi = ff.transpose() * chi;
        let gamma = ff.transpose() * grad_chi;
        let ee = t2_to_voigt(&green_lagrange_strain(&rcg));
        let ee_micro = t2_to_voigt(&(psi - Matrix3::identity()));
        let gamma_v = t3_to_voigt(&gamma);
        let finite = |m: &[f64]| m.iter().all(|v| v.is_finite());
        if !(jj.is_finite()
            && finite(ff.as_slice())
            && finite(ff_inv.as_slice())
            && finite(rcg_inv.as_slice())
            && finite(psi.as_slice())
            && finite(grad_chi_current.as_slice())
            && finite(gamma.as_slice()))
        {
            return Err("the deformation measures are not finite");
        }
        Ok(DeformationMeasures {
            ff,
            ff_inv,
            jj,
            chi,
            grad_chi_current,
            grad_chi,
            rcg,
            rcg_inv,
            psi,
            gamma,
            ee,
            ee_micro,
            gamma_v,
        })
    }
}

/// Computes the deformation gradient F = (I - ∇u)⁻¹ from the gradient of the displacement
/// w.r.t. the current coordinates
pub fn deformation_gradient(grad_u: &Matrix3) -> Result<Matrix3, StrError> {
    (Matrix3::identity() - grad_u)
        .try_inverse()
        .ok_or("cannot compute the deformation gradient because I - ∇u is singular")
}

/// Computes the micro-deformation tensor χ = I + φ from the 9-Voigt micro-displacement
pub fn micro_deformation(phi: &Vector9) -> Matrix3 {
    Matrix3::identity() + voigt_to_t2(phi)
}

/// Computes the Green-Lagrange strain E = (C - I)/2 from the right Cauchy-Green tensor
pub fn green_lagrange_strain(rcg: &Matrix3) -> Matrix3 {
    0.5 * (rcg - Matrix3::identity())
}

/// Contracts the last slot of a third-order tensor with a second-order tensor
///
/// ```text
/// out_iJK = g_iJl a_lK
/// ```
fn pull_back_grad_chi(g: &Matrix3x9, a: &Matrix3) -> Matrix3x9 {
    let g_v = t3_to_voigt(g);
    let mut out = Matrix3x9::zeros();
    for i in 0..3 {
        for jj in 0..3 {
            for kk in 0..3 {
                let mut sum = 0.0;
                for l in 0..3 {
                    sum += g_v[voigt3_index(i, jj, l)] * a[(l, kk)];
                }
                out[(i, voigt_index(jj, kk))] = sum;
            }
        }
    }
    out
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Matrix9x3;
    use approx::assert_relative_eq;

    #[test]
    fn deformation_gradient_captures_errors() {
        assert_eq!(
            deformation_gradient(&Matrix3::identity()).err(),
            Some("cannot compute the deformation gradient because I - ∇u is singular")
        );
        let mut input = KinematicInput::default();
        input.grad_u = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        assert!(DeformationMeasures::new(&input).is_err());
    }

    #[test]
    fn non_finite_micro_displacement_is_captured() {
        let mut input = KinematicInput::sample();
        input.phi[3] = f64::NAN;
        assert_eq!(
            DeformationMeasures::new(&input).err(),
            Some("the deformation measures are not finite")
        );

        let mut input = KinematicInput::sample();
        input.grad_phi[2][1] = f64::INFINITY;
        assert_eq!(
            DeformationMeasures::new(&input).err(),
            Some("the deformation measures are not finite")
        );

        let mut input = KinematicInput::sample();
        input.grad_u[0][1] = f64::NAN;
        assert!(DeformationMeasures::new(&input).is_err());

        let def = DeformationMeasures::new(&KinematicInput::sample()).unwrap();
        let mut chi = def.chi;
        chi[(1, 2)] = f64::NEG_INFINITY;
        assert_eq!(
            DeformationMeasures::from_fundamental(&def.ff, &chi, &def.grad_chi).err(),
            Some("the deformation measures are not finite")
        );
    }

    #[test]
    fn undeformed_state_works() {
        let def = DeformationMeasures::new(&KinematicInput::default()).unwrap();
        assert_eq!(def.ff, Matrix3::identity());
        assert_eq!(def.chi, Matrix3::identity());
        assert_eq!(def.jj, 1.0);
        assert_eq!(def.ee, Vector9::zeros());
        assert_eq!(def.ee_micro, Vector9::zeros());
        assert_eq!(def.gamma_v, Vector27::zeros());
    }

    #[test]
    fn new_works() {
        let input = KinematicInput::sample();
        let def = DeformationMeasures::new(&input).unwrap();

        // F (I - ∇u) = I
        let a = Matrix3::identity() - input.grad_u_matrix();
        assert_relative_eq!(def.ff * a, Matrix3::identity(), epsilon = 1e-14);
        assert_relative_eq!(def.ff[(0, 0)], 1.265838824125697, epsilon = 1e-14);
        assert_relative_eq!(def.ff[(0, 1)], 0.1267105930055753, epsilon = 1e-14);
        assert_relative_eq!(def.ff_inv, a, epsilon = 1e-14);
        assert_relative_eq!(def.jj, def.ff.determinant(), epsilon = 1e-15);

        // χ
        assert_eq!(def.chi[(0, 0)], 1.1);
        assert_eq!(def.chi[(1, 1)], 1.0);
        assert_eq!(def.chi[(0, 1)], 0.0);

        // current gradient is a relabeling of ∇φ
        let grad_phi = input.grad_phi_matrix();
        for i in 0..3 {
            for jj in 0..3 {
                for k in 0..3 {
                    assert_eq!(def.grad_chi_current[(i, voigt_index(jj, k))], grad_phi[(voigt_index(i, jj), k)]);
                }
            }
        }

        // referential gradient
        assert_relative_eq!(def.grad_chi[(0, 0)], 0.1302271285225544, epsilon = 1e-14);
        assert_relative_eq!(def.grad_chi[(0, 1)], -0.3482295666497719, epsilon = 1e-14);
        assert_relative_eq!(def.grad_chi[(2, 8)], 0.06057712231373542, epsilon = 1e-14);

        // derived measures
        let ff = def.ff;
        assert_relative_eq!(def.rcg, ff.transpose() * ff, epsilon = 1e-15);
        assert_relative_eq!(def.rcg * def.rcg_inv, Matrix3::identity(), epsilon = 1e-14);
        assert_relative_eq!(def.psi, ff.transpose() * def.chi, epsilon = 1e-15);
        assert_relative_eq!(def.ee[0], 0.5 * (def.rcg[(0, 0)] - 1.0), epsilon = 1e-15);
        assert_relative_eq!(def.ee[5], 0.5 * def.rcg[(0, 1)], epsilon = 1e-15);
        assert_relative_eq!(def.ee_micro[0], def.psi[(0, 0)] - 1.0, epsilon = 1e-15);
        assert_relative_eq!(def.ee_micro[8], def.psi[(1, 0)], epsilon = 1e-15);
        let mut gamma_ijk = 0.0;
        for i in 0..3 {
            gamma_ijk += ff[(i, 2)] * def.grad_chi[(i, voigt_index(0, 1))];
        }
        assert_relative_eq!(def.gamma_v[voigt3_index(2, 0, 1)], gamma_ijk, epsilon = 1e-15);
    }

    #[test]
    fn from_fundamental_works() {
        let input = KinematicInput::sample();
        let def = DeformationMeasures::new(&input).unwrap();
        let other = DeformationMeasures::from_fundamental(&def.ff, &def.chi, &def.grad_chi).unwrap();
        assert_relative_eq!(other.grad_chi_current, def.grad_chi_current, epsilon = 1e-14);
        assert_relative_eq!(other.gamma_v, def.gamma_v, epsilon = 1e-15);
        assert_eq!(
            DeformationMeasures::from_fundamental(&Matrix3::zeros(), &def.chi, &def.grad_chi).err(),
            Some("the deformation gradient is singular")
        );
        let zero = Matrix9x3::zeros();
        let zero_grad = KinematicInput::from_matrices(&input.grad_u_matrix(), &input.phi_vector(), &zero);
        let def = DeformationMeasures::new(&zero_grad).unwrap();
        assert_eq!(def.gamma_v, Vector27::zeros());
    }
}
