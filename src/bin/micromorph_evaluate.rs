use micromorph::prelude::*;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "micromorph_evaluate",
    about = "Evaluates the micromorphic linear elasticity model given a JSON file with the arguments"
)]
struct Options {
    /// JSON file with the model arguments
    input: String,

    /// Computes the derivatives w.r.t. (∇u, φ, ∇φ)
    #[structopt(long)]
    tangents: bool,

    /// Returns the stresses in the current configuration
    #[structopt(long)]
    current: bool,

    /// Writes the results to this JSON file instead of printing them
    #[structopt(short, long)]
    output: Option<String>,
}

fn main() -> Result<(), StrError> {
    // logging is controlled by RUST_LOG
    env_logger::init();

    // parse options
    let options = Options::from_args();

    // load data
    let args = ModelArgs::read_json(&options.input)?;

    // evaluate
    let results = ModelResults::compute(&args, options.tangents, options.current);

    // output
    match &options.output {
        Some(path) => results.write_json(path)?,
        None => println!("{}", results.to_json()?),
    }
    if results.code != CODE_SUCCESS {
        std::process::exit(results.code);
    }
    Ok(())
}
