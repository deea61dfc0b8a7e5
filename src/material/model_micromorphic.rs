use super::{CurrentStresses, CurrentTangents, LinearElasticity, Stresses, Tangents};
use crate::base::{KinematicInput, ParamMicromorphic};
use crate::StrError;

/// Specifies the essential functions for micromorphic material models
pub trait MicromorphicModelTrait: Send {
    /// Returns the number of state variables
    fn n_state_variables(&self) -> usize;

    /// Computes PK2, Σ, and M in the reference configuration
    fn evaluate_stresses(&self, input: &KinematicInput, stresses: &mut Stresses) -> Result<(), StrError>;

    /// Computes PK2, Σ, M and their total derivatives w.r.t. (∇u, φ, ∇φ)
    fn evaluate_stresses_and_tangents(
        &self,
        input: &KinematicInput,
        stresses: &mut Stresses,
        tangents: &mut Tangents,
    ) -> Result<(), StrError>;

    /// Computes σ, s, m in the current configuration and, optionally, their total derivatives
    fn evaluate_current(
        &self,
        input: &KinematicInput,
        current: &mut CurrentStresses,
        tangents: Option<&mut CurrentTangents>,
    ) -> Result<(), StrError>;
}

/// Holds the actual micromorphic model implementation
pub struct ModelMicromorphic {
    /// Holds the actual model implementation
    pub actual: Box<dyn MicromorphicModelTrait>,
}

impl ModelMicromorphic {
    /// Allocates a new instance given the model name and the flat parameter vector
    ///
    /// The recognized names are `LinearElasticity` and `micromorphic_linear_elasticity`.
    pub fn new(name: &str, fparams: &[f64]) -> Result<Self, StrError> {
        let actual: Box<dyn MicromorphicModelTrait> = match name {
            "LinearElasticity" | "micromorphic_linear_elasticity" => {
                let param = ParamMicromorphic::from_slice(fparams)?;
                Box::new(LinearElasticity::new(&param))
            }
            _ => return Err("the model name is not available in the model library"),
        };
        log::debug!("allocated micromorphic model {} with {} parameters", name, fparams.len());
        Ok(ModelMicromorphic { actual })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
