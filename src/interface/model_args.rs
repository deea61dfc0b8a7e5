use crate::base::{KinematicInput, ParamMicromorphic};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the arguments of a material model evaluation at one integration point
///
/// The previous kinematic state and the additional degrees of freedom are part of the host
/// contract; the elastic model does not use them.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ModelArgs {
    /// Name of the model in the model library
    pub model_name: String,

    /// Current time and time increment `[t, dt]`
    pub time: Vec<f64>,

    /// Flat material parameters
    pub fparams: Vec<f64>,

    /// Kinematic state at the current step
    pub current: KinematicInput,

    /// Kinematic state at the previous step
    #[serde(default)]
    pub previous: KinematicInput,

    /// State variables (returned unchanged)
    #[serde(default)]
    pub sdvs: Vec<f64>,

    /// Additional degrees of freedom at the current step
    #[serde(default)]
    pub current_add_dof: Vec<f64>,

    /// Additional degrees of freedom at the previous step
    #[serde(default)]
    pub previous_add_dof: Vec<f64>,

    /// Gradients of the additional degrees of freedom at the current step
    #[serde(default)]
    pub current_add_grad_dof: Vec<Vec<f64>>,

    /// Gradients of the additional degrees of freedom at the previous step
    #[serde(default)]
    pub previous_add_grad_dof: Vec<Vec<f64>>,
}

impl ModelArgs {
    /// Allocates a new instance with zero previous state and no state variables
    pub fn new(model_name: &str, fparams: &[f64], current: &KinematicInput) -> Self {
        ModelArgs {
            model_name: model_name.to_string(),
            time: vec![0.0, 0.0],
            fparams: fparams.to_vec(),
            current: *current,
            previous: KinematicInput::default(),
            sdvs: Vec::new(),
            current_add_dof: Vec::new(),
            previous_add_dof: Vec::new(),
            current_add_grad_dof: Vec::new(),
            previous_add_grad_dof: Vec::new(),
        }
    }

    /// Returns the arguments of the reference case
    pub fn sample() -> Self {
        let fparams = ParamMicromorphic::sample().to_vec();
        let mut args = ModelArgs::new("LinearElasticity", &fparams, &KinematicInput::sample());
        args.time = vec![10.0, 2.5];
        args
    }

    /// Returns `(t, dt)` if the time slice holds exactly two finite values
    pub fn time_and_increment(&self) -> Result<(f64, f64), StrError> {
        match self.time.as_slice() {
            [t, dt] if t.is_finite() && dt.is_finite() => Ok((*t, *dt)),
            [_, _] => Err("the time and time increment must be finite numbers"),
            _ => Err("the time slice must hold the current time and the time increment"),
        }
    }

    /// Reads a JSON file containing the arguments
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let input = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(input);
        let args = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(args)
    }

    /// Writes a JSON file with the arguments
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
