use std::{panic, process::ExitCode};

use myproc::{
    args::{self, USAGE},
    dispatch,
    error::{MyProcError, EXIT_SUCCESS, EXIT_UNKNOWN},
};

fn run(argv: &[String]) -> Result<(), MyProcError> {
    let config = args::parse_args(argv)?;
    dispatch::run(&config)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let argv: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned())
        .collect();

    if args::wants_help(&argv) {
        print!("{USAGE}");
        return ExitCode::from(EXIT_SUCCESS);
    }

    // keep the panic report out of stderr, the exit code carries it
    panic::set_hook(Box::new(|info| log::debug!("panic: {info}")));

    match panic::catch_unwind(|| run(&argv)) {
        Ok(Ok(())) => ExitCode::from(EXIT_SUCCESS),
        Ok(Err(err)) => {
            if err.shows_usage() {
                eprint!("{USAGE}");
            }
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
        Err(_) => {
            eprintln!("Unknown error.");
            ExitCode::from(EXIT_UNKNOWN)
        }
    }
}
