use super::{dff_dgrad_u, dgrad_chi_dff, dgrad_chi_dgrad_phi, DeformationMeasures, DeformationTangents};
use crate::base::{Matrix27, Matrix27x9, Matrix9, Matrix9x27};
use nalgebra::SMatrix;
use serde::{Deserialize, Serialize};

/// Holds the maps from derivatives w.r.t. (F, χ, ∇χ) to derivatives w.r.t. (∇u, φ, ∇φ)
///
/// ```text
/// D(·)/D∇u = (∂(·)/∂F + ∂(·)/∂∇χ : ∂∇χ/∂F) : ∂F/∂∇u
/// D(·)/Dφ  = ∂(·)/∂χ
/// D(·)/D∇φ = ∂(·)/∂∇χ : ∂∇χ/∂∇φ
/// ```
#[derive(Clone, Debug)]
pub struct TotalDerivativeMaps {
    /// ∂F/∂∇u
    pub dff_dgrad_u: Matrix9,

    /// ∂∇χ/∂F with ∇φ fixed
    pub dgrad_chi_dff: Matrix27x9,

    /// ∂∇χ/∂∇φ
    pub dgrad_chi_dgrad_phi: Matrix27,
}

/// Holds the derivatives of the reference stresses w.r.t. the raw kinematic input (∇u, φ, ∇φ)
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Tangents {
    /// DS/D∇u
    pub dpk2_dgrad_u: Matrix9,

    /// DS/Dφ
    pub dpk2_dphi: Matrix9,

    /// DS/D∇φ
    pub dpk2_dgrad_phi: Matrix9x27,

    /// DΣ/D∇u
    pub dsigma_dgrad_u: Matrix9,

    /// DΣ/Dφ
    pub dsigma_dphi: Matrix9,

    /// DΣ/D∇φ
    pub dsigma_dgrad_phi: Matrix9x27,

    /// DM/D∇u
    pub dm_dgrad_u: Matrix27x9,

    /// DM/Dφ
    pub dm_dphi: Matrix27x9,

    /// DM/D∇φ
    pub dm_dgrad_phi: Matrix27,
}

impl TotalDerivativeMaps {
    /// Allocates a new instance
    pub fn new(def: &DeformationMeasures) -> Self {
        TotalDerivativeMaps {
            dff_dgrad_u: dff_dgrad_u(&def.ff),
            dgrad_chi_dff: dgrad_chi_dff(&def.grad_chi_current),
            dgrad_chi_dgrad_phi: dgrad_chi_dgrad_phi(&def.ff),
        }
    }

    /// Converts the derivatives of a quantity with R components
    ///
    /// Returns `(D/D∇u, D/Dφ, D/D∇φ)`.
    pub fn apply<const R: usize>(
        &self,
        d_dff: &SMatrix<f64, R, 9>,
        d_dchi: &SMatrix<f64, R, 9>,
        d_dgrad_chi: &SMatrix<f64, R, 27>,
    ) -> (SMatrix<f64, R, 9>, SMatrix<f64, R, 9>, SMatrix<f64, R, 27>) {
        let d_dgrad_u = (d_dff + d_dgrad_chi * self.dgrad_chi_dff) * self.dff_dgrad_u;
        let d_dgrad_phi = d_dgrad_chi * self.dgrad_chi_dgrad_phi;
        (d_dgrad_u, *d_dchi, d_dgrad_phi)
    }
}

impl Tangents {
    /// Allocates a new instance with zero derivatives
    pub fn new() -> Self {
        Tangents {
            dpk2_dgrad_u: Matrix9::zeros(),
            dpk2_dphi: Matrix9::zeros(),
            dpk2_dgrad_phi: Matrix9x27::zeros(),
            dsigma_dgrad_u: Matrix9::zeros(),
            dsigma_dphi: Matrix9::zeros(),
            dsigma_dgrad_phi: Matrix9x27::zeros(),
            dm_dgrad_u: Matrix27x9::zeros(),
            dm_dphi: Matrix27x9::zeros(),
            dm_dgrad_phi: Matrix27::zeros(),
        }
    }

    /// Computes the total derivatives from the derivatives w.r.t. (F, χ, ∇χ)
    pub fn calculate(&mut self, def: &DeformationMeasures, dt: &DeformationTangents) {
        let maps = TotalDerivativeMaps::new(def);
        (self.dpk2_dgrad_u, self.dpk2_dphi, self.dpk2_dgrad_phi) =
            maps.apply(&dt.dpk2_dff, &dt.dpk2_dchi, &dt.dpk2_dgrad_chi);
        (self.dsigma_dgrad_u, self.dsigma_dphi, self.dsigma_dgrad_phi) =
            maps.apply(&dt.dsigma_dff, &dt.dsigma_dchi, &dt.dsigma_dgrad_chi);
        (self.dm_dgrad_u, self.dm_dphi, self.dm_dgrad_phi) = maps.apply(&dt.dm_dff, &dt.dm_dchi, &dt.dm_dgrad_chi);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
