//! Makes available common structures needed to evaluate the model
//!
//! You may write `use micromorph::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{KinematicInput, ParamMicromorphic};
pub use crate::interface::{evaluate_model, evaluate_model_current, evaluate_model_with_tangents};
pub use crate::interface::{ModelArgs, ModelResults, CODE_EVALUATION_FAILURE, CODE_MALFORMED_ARGS, CODE_SUCCESS};
pub use crate::material::{CurrentStresses, CurrentTangents, MicromorphicModelTrait, ModelMicromorphic};
pub use crate::material::{Stresses, Tangents};
pub use crate::StrError;
