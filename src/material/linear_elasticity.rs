use super::{CurrentStresses, CurrentTangents, DeformationMeasures, DeformationTangents, MicromorphicModelTrait};
use super::{ReferenceTangents, StiffnessTensors, StressTerms, Stresses, Tangents};
use crate::base::{KinematicInput, ParamMicromorphic};
use crate::StrError;

/// Implements the micromorphic linear elasticity model
///
/// The stiffness tensors are assembled once at construction; evaluations do not mutate the model.
pub struct LinearElasticity {
    /// Holds the material parameters
    pub param: ParamMicromorphic,

    /// Holds the stiffness tensors A, B, C, D
    pub stiffness: StiffnessTensors,
}

impl LinearElasticity {
    /// Allocates a new instance
    pub fn new(param: &ParamMicromorphic) -> Self {
        LinearElasticity {
            param: *param,
            stiffness: StiffnessTensors::new(param),
        }
    }

    /// Computes the reference stresses and the data needed by the derivatives
    fn stresses(&self, input: &KinematicInput, stresses: &mut Stresses) -> Result<(DeformationMeasures, StressTerms), StrError> {
        let def = DeformationMeasures::new(input)?;
        let terms = StressTerms::new(&self.stiffness, &def);
        stresses.calculate(&self.stiffness, &def, &terms);
        Ok((def, terms))
    }
}

impl MicromorphicModelTrait for LinearElasticity {
    /// Returns the number of state variables
    fn n_state_variables(&self) -> usize {
        0
    }

    /// Computes PK2, Σ, and M in the reference configuration
    fn evaluate_stresses(&self, input: &KinematicInput, stresses: &mut Stresses) -> Result<(), StrError> {
        self.stresses(input, stresses)?;
        Ok(())
    }

    /// Computes PK2, Σ, M and their total derivatives w.r.t. (∇u, φ, ∇φ)
    fn evaluate_stresses_and_tangents(
        &self,
        input: &KinematicInput,
        stresses: &mut Stresses,
        tangents: &mut Tangents,
    ) -> Result<(), StrError> {
        let (def, terms) = self.stresses(input, stresses)?;
        let reference = ReferenceTangents::new(&self.stiffness, &def, &terms);
        let dt = DeformationTangents::new(&reference, &def);
        tangents.calculate(&def, &dt);
        Ok(())
    }

    /// Computes σ, s, m in the current configuration and, optionally, their total derivatives
    fn evaluate_current(
        &self,
        input: &KinematicInput,
        current: &mut CurrentStresses,
        tangents: Option<&mut CurrentTangents>,
    ) -> Result<(), StrError> {
        let mut stresses = Stresses::new();
        let (def, terms) = self.stresses(input, &mut stresses)?;
        current.calculate(&def, &stresses);
        if let Some(tangents) = tangents {
            let reference = ReferenceTangents::new(&self.stiffness, &def, &terms);
            let dt = DeformationTangents::new(&reference, &def);
            tangents.calculate(&def, &stresses, current, &dt);
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
