//! Implements the base structures: tensor packing, parameters, and inputs

mod constants;
mod kinematic_input;
mod parameters;
mod testing;
mod types;
mod voigt;
pub use crate::base::constants::*;
pub use crate::base::kinematic_input::*;
pub use crate::base::parameters::*;
pub use crate::base::types::*;
pub use crate::base::voigt::*;

#[allow(unused_imports)]
pub(crate) use crate::base::testing::*;
