use super::ModelArgs;
use crate::material::{CurrentStresses, CurrentTangents, ModelMicromorphic, Stresses, Tangents};
use crate::StrError;

/// Return code indicating a successful evaluation
pub const CODE_SUCCESS: i32 = 0;

/// Return code indicating that the kinematic state could not be evaluated (e.g., singular I - ∇u)
pub const CODE_EVALUATION_FAILURE: i32 = 1;

/// Return code indicating malformed arguments (parameters, time, or model name)
pub const CODE_MALFORMED_ARGS: i32 = 2;

/// Computes PK2, Σ, and M in the reference configuration
///
/// # Output
///
/// * `stresses` -- the reference stresses (untouched on failure)
/// * `sdvs` -- receives the state variables unchanged
/// * `output_message` -- receives the diagnostic message on failure (cleared on success)
///
/// Returns [CODE_SUCCESS], [CODE_EVALUATION_FAILURE], or [CODE_MALFORMED_ARGS].
pub fn evaluate_model(
    args: &ModelArgs,
    stresses: &mut Stresses,
    sdvs: &mut Vec<f64>,
    output_message: &mut String,
) -> i32 {
    run(args, sdvs, output_message, |model| {
        let mut res = Stresses::new();
        model.actual.evaluate_stresses(&args.current, &mut res)?;
        *stresses = res;
        Ok(())
    })
}

/// Computes PK2, Σ, M and the nine derivative blocks w.r.t. (∇u, φ, ∇φ) in the reference configuration
///
/// The outputs are written only on success. See [evaluate_model] for the other arguments.
pub fn evaluate_model_with_tangents(
    args: &ModelArgs,
    stresses: &mut Stresses,
    tangents: &mut Tangents,
    sdvs: &mut Vec<f64>,
    output_message: &mut String,
) -> i32 {
    run(args, sdvs, output_message, |model| {
        let mut res = Stresses::new();
        let mut res_tangents = Tangents::new();
        model
            .actual
            .evaluate_stresses_and_tangents(&args.current, &mut res, &mut res_tangents)?;
        *stresses = res;
        *tangents = res_tangents;
        Ok(())
    })
}

/// Computes σ, s, and m in the current configuration and, optionally, the nine derivative blocks
///
/// The outputs are written only on success. See [evaluate_model] for the other arguments.
pub fn evaluate_model_current(
    args: &ModelArgs,
    current: &mut CurrentStresses,
    tangents: Option<&mut CurrentTangents>,
    sdvs: &mut Vec<f64>,
    output_message: &mut String,
) -> i32 {
    run(args, sdvs, output_message, |model| {
        let mut res = CurrentStresses::new();
        match tangents {
            Some(tangents) => {
                let mut res_tangents = CurrentTangents::new();
                model.actual.evaluate_current(&args.current, &mut res, Some(&mut res_tangents))?;
                *tangents = res_tangents;
            }
            None => model.actual.evaluate_current(&args.current, &mut res, None)?,
        }
        *current = res;
        Ok(())
    })
}

/// Validates the arguments, allocates the model, and runs the evaluation
fn run<F>(args: &ModelArgs, sdvs: &mut Vec<f64>, output_message: &mut String, evaluate: F) -> i32
where
    F: FnOnce(&ModelMicromorphic) -> Result<(), StrError>,
{
    output_message.clear();
    sdvs.clone_from(&args.sdvs);
    let model = match args
        .time_and_increment()
        .and_then(|_| ModelMicromorphic::new(&args.model_name, &args.fparams))
    {
        Ok(model) => model,
        Err(message) => return fail(CODE_MALFORMED_ARGS, message, output_message),
    };
    match evaluate(&model) {
        Ok(()) => {
            log::debug!("evaluated {} at t = {}", args.model_name, args.time[0]);
            CODE_SUCCESS
        }
        Err(message) => fail(CODE_EVALUATION_FAILURE, message, output_message),
    }
}

/// Records the failure and returns the code
fn fail(code: i32, message: StrError, output_message: &mut String) -> i32 {
    log::warn!("evaluation failed with code {}: {}", code, message);
    output_message.push_str(message);
    code
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
