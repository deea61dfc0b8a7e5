//! Derivatives of the deformation measures w.r.t. the fundamental deformation quantities
//!
//! Rows follow the Voigt index of the differentiated quantity and columns the Voigt index of the
//! independent variable.

use crate::base::{voigt3_components, voigt_index, Matrix27, Matrix27x9, Matrix3, Matrix3x9, Matrix9, VOIGT_IJ};

#[inline]
fn delta(a: usize, b: usize) -> f64 {
    if a == b {
        1.0
    } else {
        0.0
    }
}

/// Computes ∂C/∂F
///
/// ```text
/// ∂C_IJ/∂F_kK = δ_IK F_kJ + F_kI δ_JK
/// ```
pub fn drcg_dff(ff: &Matrix3) -> Matrix9 {
    Matrix9::from_fn(|r, c| {
        let (ii, jj) = VOIGT_IJ[r];
        let (k, kk) = VOIGT_IJ[c];
        delta(ii, kk) * ff[(k, jj)] + ff[(k, ii)] * delta(jj, kk)
    })
}

/// Computes ∂Ψ/∂F
///
/// ```text
/// ∂Ψ_IJ/∂F_kK = δ_IK χ_kJ
/// ```
pub fn dpsi_dff(chi: &Matrix3) -> Matrix9 {
    Matrix9::from_fn(|r, c| {
        let (ii, jj) = VOIGT_IJ[r];
        let (k, kk) = VOIGT_IJ[c];
        delta(ii, kk) * chi[(k, jj)]
    })
}

/// Computes ∂Ψ/∂χ
///
/// ```text
/// ∂Ψ_IJ/∂χ_kK = F_kI δ_JK
/// ```
pub fn dpsi_dchi(ff: &Matrix3) -> Matrix9 {
    Matrix9::from_fn(|r, c| {
        let (ii, jj) = VOIGT_IJ[r];
        let (k, kk) = VOIGT_IJ[c];
        ff[(k, ii)] * delta(jj, kk)
    })
}

/// Computes ∂Γ/∂F
///
/// ```text
/// ∂Γ_IJK/∂F_lL = δ_IL ∇χ_lJK
/// ```
pub fn dgamma_dff(grad_chi: &Matrix3x9) -> Matrix27x9 {
    Matrix27x9::from_fn(|r, c| {
        let ii = r / 9;
        let (l, ll) = VOIGT_IJ[c];
        delta(ii, ll) * grad_chi[(l, r % 9)]
    })
}

/// Computes ∂Γ/∂∇χ
///
/// ```text
/// ∂Γ_IJK/∂∇χ_lLM = F_lI δ_JL δ_KM
/// ```
pub fn dgamma_dgrad_chi(ff: &Matrix3) -> Matrix27 {
    Matrix27::from_fn(|r, c| {
        let (ii, jj, kk) = voigt3_components(r);
        let (l, ll, mm) = voigt3_components(c);
        ff[(l, ii)] * delta(jj, ll) * delta(kk, mm)
    })
}

/// Computes ∂F/∂(∇u) with ∇u taken w.r.t. the current coordinates
///
/// ```text
/// ∂F_iI/∂u_k,l = F_ik F_lI
/// ```
pub fn dff_dgrad_u(ff: &Matrix3) -> Matrix9 {
    Matrix9::from_fn(|r, c| {
        let (i, ii) = VOIGT_IJ[r];
        let (k, l) = VOIGT_IJ[c];
        ff[(i, k)] * ff[(l, ii)]
    })
}

/// Computes ∂(∇χ)/∂F with the current gradient of χ held fixed
///
/// ```text
/// ∂∇χ_iJK/∂F_lL = g_iJl δ_KL
/// ```
pub fn dgrad_chi_dff(grad_chi_current: &Matrix3x9) -> Matrix27x9 {
    Matrix27x9::from_fn(|r, c| {
        let (i, jj, kk) = voigt3_components(r);
        let (l, ll) = VOIGT_IJ[c];
        grad_chi_current[(i, voigt_index(jj, l))] * delta(kk, ll)
    })
}

/// Computes ∂(∇χ)/∂(∇φ) with ∇φ packed as 27-Voigt (see `grad_phi_to_voigt`)
///
/// ```text
/// ∂∇χ_iJK/∂φ_mN,p = δ_im δ_JN F_pK
/// ```
pub fn dgrad_chi_dgrad_phi(ff: &Matrix3) -> Matrix27 {
    Matrix27::from_fn(|r, c| {
        let (i, jj, kk) = voigt3_components(r);
        let (m, nn, p) = voigt3_components(c);
        delta(i, m) * delta(jj, nn) * ff[(p, kk)]
    })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
