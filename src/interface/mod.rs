//! Implements the host-facing interface: evaluation arguments, return codes, and results

mod evaluate_model;
mod model_args;
mod model_results;
pub use crate::interface::evaluate_model::*;
pub use crate::interface::model_args::*;
pub use crate::interface::model_results::*;
