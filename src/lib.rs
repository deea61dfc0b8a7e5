//! Micromorphic linear elasticity: stresses and consistent tangents at an integration point
//!
//! The [material] module holds the deformation measures, stiffness tensors, stresses, and their
//! derivatives. The [interface] module exposes the name-keyed model evaluation with integer return
//! codes as required by host finite element codes.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod interface;
pub mod material;
pub mod prelude;
