use std::path::Path;
use std::process::ExitCode;

use clap::{Arg, Command};
use tracing::debug;

use modl::interpret::{self, RuntimeContext};
use modl::lexing;
use modl::problem;

fn main() -> ExitCode {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    tracing_subscriber::fmt::init();

    let matches = Command::new("modl")
        .version(VERSION)
        .propagate_version(true)
        .author("Aleksei Fedorov")
        .about("The Modl model language.")
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("run")
                .about("Interpret the given program and print its output")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the program you want to run."),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Recognize the program's statements without executing them")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the program you want to check."),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("run", submatches)) => match submatches.get_one::<String>("filename") {
            Some(filename) => run(Path::new(filename)),
            None => ExitCode::FAILURE,
        },
        Some(("check", submatches)) => match submatches.get_one::<String>("filename") {
            Some(filename) => check(Path::new(filename)),
            None => ExitCode::FAILURE,
        },
        _ => {
            println!("usage: modl [COMMAND] ...");
            println!("Try '--help' for more information.");
            ExitCode::FAILURE
        }
    }
}

fn run(filename: &Path) -> ExitCode {
    let content = match lexing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            return ExitCode::FAILURE;
        }
    };

    let tokens = match lexing::tokenize(&content) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprintln!("{}", problem::full_error(&error, filename, &content));
            return ExitCode::FAILURE;
        }
    };

    let mut context = RuntimeContext::new();
    let result = interpret::run(&tokens, &mut context);

    // Everything the program printed before a failure is still emitted.
    for line in context.lines() {
        println!("{}", line);
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", problem::full_error(&error, filename, &content));
            ExitCode::FAILURE
        }
    }
}

fn check(filename: &Path) -> ExitCode {
    let content = match lexing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            return ExitCode::FAILURE;
        }
    };

    let tokens = match lexing::tokenize(&content) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprintln!("{}", problem::full_error(&error, filename, &content));
            return ExitCode::FAILURE;
        }
    };

    match interpret::check(&tokens) {
        Ok(kinds) => {
            debug!(?kinds);
            println!(
                "{}: {} statement{} recognized",
                filename.to_string_lossy(),
                kinds.len(),
                if kinds.len() == 1 { "" } else { "s" }
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", problem::full_error(&error, filename, &content));
            ExitCode::FAILURE
        }
    }
}
