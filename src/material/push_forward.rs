use super::{DeformationMeasures, DeformationTangents, Stresses, TotalDerivativeMaps};
use crate::base::{voigt3_components, voigt3_index, voigt_to_t2, VOIGT_IJ};
use crate::base::{Matrix27, Matrix27x9, Matrix3, Matrix9, Matrix9x27, Vector27, Vector9};
use serde::{Deserialize, Serialize};

/// Holds the stresses in the current configuration
///
/// ```text
/// σ = F S Fᵀ / J
/// s = F Σ Fᵀ / J
/// m_ijk = F_iI χ_jJ χ_kK M_IJK / J
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct CurrentStresses {
    /// Cauchy stress σ (9-Voigt)
    pub cauchy: Vector9,

    /// Symmetric micro-stress s (9-Voigt)
    pub s: Vector9,

    /// Higher-order couple stress m (27-Voigt)
    pub m: Vector27,
}

/// Holds the derivatives of the current stresses w.r.t. the raw kinematic input (∇u, φ, ∇φ)
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct CurrentTangents {
    /// Dσ/D∇u
    pub dcauchy_dgrad_u: Matrix9,

    /// Dσ/Dφ
    pub dcauchy_dphi: Matrix9,

    /// Dσ/D∇φ
    pub dcauchy_dgrad_phi: Matrix9x27,

    /// Ds/D∇u
    pub ds_dgrad_u: Matrix9,

    /// Ds/Dφ
    pub ds_dphi: Matrix9,

    /// Ds/D∇φ
    pub ds_dgrad_phi: Matrix9x27,

    /// Dm/D∇u
    pub dm_dgrad_u: Matrix27x9,

    /// Dm/Dφ
    pub dm_dphi: Matrix27x9,

    /// Dm/D∇φ
    pub dm_dgrad_phi: Matrix27,
}

impl CurrentStresses {
    /// Allocates a new instance with zero stresses
    pub fn new() -> Self {
        CurrentStresses {
            cauchy: Vector9::zeros(),
            s: Vector9::zeros(),
            m: Vector27::zeros(),
        }
    }

    /// Maps the reference stresses to the current configuration
    pub fn calculate(&mut self, def: &DeformationMeasures, stresses: &Stresses) {
        let pp = second_order_push(def);
        let qq = third_order_push(def);
        self.cauchy = pp * stresses.pk2;
        self.s = pp * stresses.sigma;
        self.m = qq * stresses.m;
    }
}

impl CurrentTangents {
    /// Allocates a new instance with zero derivatives
    pub fn new() -> Self {
        CurrentTangents {
            dcauchy_dgrad_u: Matrix9::zeros(),
            dcauchy_dphi: Matrix9::zeros(),
            dcauchy_dgrad_phi: Matrix9x27::zeros(),
            ds_dgrad_u: Matrix9::zeros(),
            ds_dphi: Matrix9::zeros(),
            ds_dgrad_phi: Matrix9x27::zeros(),
            dm_dgrad_u: Matrix27x9::zeros(),
            dm_dphi: Matrix27x9::zeros(),
            dm_dgrad_phi: Matrix27::zeros(),
        }
    }

    /// Maps the reference derivatives to the current configuration and computes the total derivatives
    ///
    /// `current` must hold the stresses already mapped by [CurrentStresses::calculate].
    pub fn calculate(
        &mut self,
        def: &DeformationMeasures,
        stresses: &Stresses,
        current: &CurrentStresses,
        dt: &DeformationTangents,
    ) {
        let pp = second_order_push(def);
        let qq = third_order_push(def);
        let maps = TotalDerivativeMaps::new(def);

        // σ
        let dcauchy_dff = explicit_second_order_dff(def, &stresses.pk2, &current.cauchy) + pp * dt.dpk2_dff;
        (self.dcauchy_dgrad_u, self.dcauchy_dphi, self.dcauchy_dgrad_phi) =
            maps.apply(&dcauchy_dff, &(pp * dt.dpk2_dchi), &(pp * dt.dpk2_dgrad_chi));

        // s
        let ds_dff = explicit_second_order_dff(def, &stresses.sigma, &current.s) + pp * dt.dsigma_dff;
        (self.ds_dgrad_u, self.ds_dphi, self.ds_dgrad_phi) =
            maps.apply(&ds_dff, &(pp * dt.dsigma_dchi), &(pp * dt.dsigma_dgrad_chi));

        // m
        let (explicit_dff, explicit_dchi) = explicit_third_order(def, &stresses.m, &current.m);
        let dm_dff = explicit_dff + qq * dt.dm_dff;
        let dm_dchi = explicit_dchi + qq * dt.dm_dchi;
        (self.dm_dgrad_u, self.dm_dphi, self.dm_dgrad_phi) = maps.apply(&dm_dff, &dm_dchi, &(qq * dt.dm_dgrad_chi));
    }
}

/// Returns the operator P such that (F A Fᵀ / J) = P : A
///
/// ```text
/// P_ijIJ = F_iI F_jJ / J
/// ```
fn second_order_push(def: &DeformationMeasures) -> Matrix9 {
    let ff = &def.ff;
    Matrix9::from_fn(|r, c| {
        let (i, j) = VOIGT_IJ[r];
        let (ii, jj) = VOIGT_IJ[c];
        ff[(i, ii)] * ff[(j, jj)] / def.jj
    })
}

/// Returns the operator Q such that (F_iI χ_jJ χ_kK A_IJK / J) = Q : A
fn third_order_push(def: &DeformationMeasures) -> Matrix27 {
    let (ff, chi) = (&def.ff, &def.chi);
    Matrix27::from_fn(|r, c| {
        let (i, j, k) = voigt3_components(r);
        let (ii, jj, kk) = voigt3_components(c);
        ff[(i, ii)] * chi[(j, jj)] * chi[(k, kk)] / def.jj
    })
}

/// Computes the derivative of (F A Fᵀ / J) w.r.t. F with A held fixed
///
/// ```text
/// ∂a_ij/∂F_kK = -a_ij F⁻¹_Kk + (δ_ik (A Fᵀ)_Kj + (F A)_iK δ_jk) / J
/// ```
fn explicit_second_order_dff(def: &DeformationMeasures, reference: &Vector9, current: &Vector9) -> Matrix9 {
    let aa = voigt_to_t2(reference);
    let a_ft: Matrix3 = aa * def.ff.transpose();
    let f_a: Matrix3 = def.ff * aa;
    Matrix9::from_fn(|r, c| {
        let (i, j) = VOIGT_IJ[r];
        let (k, kk) = VOIGT_IJ[c];
        let mut value = -current[r] * def.ff_inv[(kk, k)];
        if i == k {
            value += a_ft[(kk, j)] / def.jj;
        }
        if j == k {
            value += f_a[(i, kk)] / def.jj;
        }
        value
    })
}

/// Computes the derivatives of (F_iI χ_jJ χ_kK A_IJK / J) w.r.t. F and χ with A held fixed
///
/// ```text
/// ∂m_ijk/∂F_lL = -m_ijk F⁻¹_Ll + δ_il χ_jJ χ_kK A_LJK / J
/// ∂m_ijk/∂χ_lL = (δ_jl F_iI χ_kK A_ILK + δ_kl F_iI χ_jJ A_IJL) / J
/// ```
fn explicit_third_order(def: &DeformationMeasures, reference: &Vector27, current: &Vector27) -> (Matrix27x9, Matrix27x9) {
    let (ff, chi) = (&def.ff, &def.chi);

    // partially pushed tensors: a1_Ljk = χ_jJ χ_kK A_LJK, a2_iLk = F_iI χ_kK A_ILK, a3_ijL = F_iI χ_jJ A_IJL
    let mut a1 = Vector27::zeros();
    let mut a2 = Vector27::zeros();
    let mut a3 = Vector27::zeros();
    for n in 0..27 {
        let (p, q, t) = voigt3_components(n);
        for a in 0..3 {
            for b in 0..3 {
                a1[n] += chi[(q, a)] * chi[(t, b)] * reference[voigt3_index(p, a, b)];
                a2[n] += ff[(p, a)] * chi[(t, b)] * reference[voigt3_index(a, q, b)];
                a3[n] += ff[(p, a)] * chi[(q, b)] * reference[voigt3_index(a, b, t)];
            }
        }
    }

    let dff = Matrix27x9::from_fn(|r, c| {
        let (i, j, k) = voigt3_components(r);
        let (l, ll) = VOIGT_IJ[c];
        let mut value = -current[r] * def.ff_inv[(ll, l)];
        if i == l {
            value += a1[voigt3_index(ll, j, k)] / def.jj;
        }
        value
    });
    let dchi = Matrix27x9::from_fn(|r, c| {
        let (i, j, k) = voigt3_components(r);
        let (l, ll) = VOIGT_IJ[c];
        let mut value = 0.0;
        if j == l {
            value += a2[voigt3_index(i, ll, k)];
        }
        if k == l {
            value += a3[voigt3_index(i, j, ll)];
        }
        value / def.jj
    });
    (dff, dchi)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
