use super::N_PARAMS;
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds the parameters of the linear micromorphic elasticity model
///
/// The flat parameter vector is ordered as:
///
/// ```text
/// λ, μ, η, τ, κ, ν, σ, τ1, τ2, ..., τ11
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct ParamMicromorphic {
    /// Lamé's first parameter of the macro-scale (A tensor)
    pub lambda: f64,

    /// Shear modulus of the macro-scale (A tensor)
    pub mu: f64,

    /// η parameter of the micro-scale (B tensor)
    pub eta: f64,

    /// τ parameter coupling macro and micro strains (B and D tensors)
    pub tau: f64,

    /// κ parameter of the micro-scale (B tensor)
    pub kappa: f64,

    /// ν parameter of the micro-scale (B tensor)
    pub nu: f64,

    /// σ parameter coupling macro and micro strains (B and D tensors)
    pub sigma: f64,

    /// τ1 to τ11 parameters of the higher-order (C tensor)
    pub taus: [f64; 11],
}

impl ParamMicromorphic {
    /// Allocates a new instance from the flat parameter vector
    pub fn from_slice(fparams: &[f64]) -> Result<Self, StrError> {
        if fparams.len() != N_PARAMS {
            return Err("the micromorphic linear elasticity model requires exactly 18 parameters");
        }
        if fparams.iter().any(|v| !v.is_finite()) {
            return Err("the material parameters must be finite numbers");
        }
        let mut taus = [0.0; 11];
        taus.copy_from_slice(&fparams[7..N_PARAMS]);
        Ok(ParamMicromorphic {
            lambda: fparams[0],
            mu: fparams[1],
            eta: fparams[2],
            tau: fparams[3],
            kappa: fparams[4],
            nu: fparams[5],
            sigma: fparams[6],
            taus,
        })
    }

    /// Returns the flat parameter vector
    pub fn to_vec(&self) -> Vec<f64> {
        let mut res = vec![self.lambda, self.mu, self.eta, self.tau, self.kappa, self.nu, self.sigma];
        res.extend_from_slice(&self.taus);
        res
    }

    /// Returns sample parameters
    pub fn sample() -> Self {
        ParamMicromorphic {
            lambda: 696.47,
            mu: 65.84,
            eta: -7.69,
            tau: -51.92,
            kappa: 38.61,
            nu: -27.31,
            sigma: 5.13,
            taus: [1.85, -0.19, -1.08, -1.57, 2.29, -0.61, 5.97, -2.02, 2.38, -0.32, -3.25],
        }
    }

    /// Returns sample parameters with all micro-scale and higher-order parameters set to zero
    pub fn sample_classical() -> Self {
        ParamMicromorphic {
            lambda: 696.47,
            mu: 65.84,
            eta: 0.0,
            tau: 0.0,
            kappa: 0.0,
            nu: 0.0,
            sigma: 0.0,
            taus: [0.0; 11],
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
