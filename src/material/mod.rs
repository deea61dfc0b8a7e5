//! Implements the micromorphic linear elasticity model: deformation measures, stiffness, stresses, and tangents

mod deformation;
mod kinematics;
mod linear_elasticity;
mod model_micromorphic;
mod push_forward;
mod stiffness;
mod stiffness_tables;
mod stress;
mod tangent;
mod total_derivatives;
pub use crate::material::deformation::*;
pub use crate::material::kinematics::*;
pub use crate::material::linear_elasticity::*;
pub use crate::material::model_micromorphic::*;
pub use crate::material::push_forward::*;
pub use crate::material::stiffness::*;
pub use crate::material::stress::*;
pub use crate::material::tangent::*;
pub use crate::material::total_derivatives::*;
