use argh::FromArgs;
use std::{path::PathBuf, process::ExitCode};

use myproc::{
    args::ArgsError,
    error::{MyProcError, EXIT_SUCCESS},
    imgproc::profile::LineAxis,
    profile::{self, ProfileRequest},
};

#[derive(FromArgs)]
/// Export the intensity profile of one image row or column as CSV
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// path to the output csv file, stdout when omitted
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,

    /// the row to sample
    #[argh(option)]
    row: Option<usize>,

    /// the column to sample
    #[argh(option)]
    column: Option<usize>,

    /// sample the R, G and B channels instead of the luminance
    #[argh(switch)]
    rgb: bool,
}

fn run(args: Args) -> Result<(), MyProcError> {
    let (axis, index) = match (args.row, args.column) {
        (Some(row), None) => (LineAxis::Row, row),
        (None, Some(column)) => (LineAxis::Column, column),
        _ => {
            return Err(ArgsError::InvalidParameter {
                name: "--row/--column",
                reason: "exactly one of --row or --column is required".to_string(),
            }
            .into())
        }
    };

    let request = ProfileRequest {
        input: args.input,
        axis,
        index,
        rgb: args.rgb,
    };

    let line = profile::extract_profile(&request)?;
    log::info!(
        "sampled {} values from {}",
        line.len(),
        request.input.display()
    );

    profile::write_profile(&line, args.output.as_deref())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Args = argh::from_env();

    match run(args) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
