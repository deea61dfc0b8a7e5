use super::{evaluate_model, evaluate_model_current, evaluate_model_with_tangents, ModelArgs};
use crate::material::{CurrentStresses, CurrentTangents, Stresses, Tangents};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::path::Path;

/// Holds the results of one evaluation as written by the command-line driver
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ModelResults {
    /// Return code (0 means success)
    pub code: i32,

    /// Diagnostic message (empty on success)
    pub message: String,

    /// State variables (unchanged)
    pub sdvs: Vec<f64>,

    /// Stresses in the reference configuration
    pub stresses: Option<Stresses>,

    /// Derivatives of the reference stresses
    pub tangents: Option<Tangents>,

    /// Stresses in the current configuration
    pub current_stresses: Option<CurrentStresses>,

    /// Derivatives of the current stresses
    pub current_tangents: Option<CurrentTangents>,
}

impl ModelResults {
    /// Runs the selected evaluation
    ///
    /// # Input
    ///
    /// * `with_tangents` -- also computes the nine derivative blocks
    /// * `current` -- computes the stresses in the current configuration instead of the reference one
    pub fn compute(args: &ModelArgs, with_tangents: bool, current: bool) -> Self {
        let mut message = String::new();
        let mut sdvs = Vec::new();
        let mut results = ModelResults {
            code: 0,
            message: String::new(),
            sdvs: Vec::new(),
            stresses: None,
            tangents: None,
            current_stresses: None,
            current_tangents: None,
        };
        if current {
            let mut stresses = CurrentStresses::new();
            let mut tangents = CurrentTangents::new();
            let option = if with_tangents { Some(&mut tangents) } else { None };
            results.code = evaluate_model_current(args, &mut stresses, option, &mut sdvs, &mut message);
            if results.code == 0 {
                results.current_stresses = Some(stresses);
                results.current_tangents = if with_tangents { Some(tangents) } else { None };
            }
        } else if with_tangents {
            let mut stresses = Stresses::new();
            let mut tangents = Tangents::new();
            results.code = evaluate_model_with_tangents(args, &mut stresses, &mut tangents, &mut sdvs, &mut message);
            if results.code == 0 {
                results.stresses = Some(stresses);
                results.tangents = Some(tangents);
            }
        } else {
            let mut stresses = Stresses::new();
            results.code = evaluate_model(args, &mut stresses, &mut sdvs, &mut message);
            if results.code == 0 {
                results.stresses = Some(stresses);
            }
        }
        results.message = message;
        results.sdvs = sdvs;
        results
    }

    /// Returns the results as a pretty-printed JSON string
    pub fn to_json(&self) -> Result<String, StrError> {
        serde_json::to_string_pretty(&self).map_err(|_| "cannot serialize results")
    }

    /// Writes a JSON file with the results
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
