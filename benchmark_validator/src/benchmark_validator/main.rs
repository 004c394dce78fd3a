//!
//! The benchmark validator binary.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let arguments = match Arguments::try_parse() {
        Ok(arguments) => arguments,
        Err(error) => error.exit(),
    };

    let exit_code = match main_inner(arguments) {
        Ok(outcome) => outcome.exit_code(),
        Err(error) => {
            eprintln!("{error:?}");
            benchmark_validator::EXIT_CODE_ERROR
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<benchmark_validator::Outcome> {
    println!(
        "    {} benchmark results in {:?} (threshold {})",
        "Checking".bright_green().bold(),
        arguments.input_path,
        arguments.threshold,
    );

    let report = benchmark_validator::Report::load(arguments.input_path.as_path())?;

    let validator = benchmark_validator::Validator::new(arguments.threshold, arguments.quiet);
    let mut stdout = std::io::stdout().lock();
    let outcome = validator.check(report.benchmarks.as_slice(), &mut stdout)?;

    match outcome {
        benchmark_validator::Outcome::Passed { checked } => println!(
            "    {} benchmark validation ({checked} iteration runs checked)",
            "Passed".bright_green().bold(),
        ),
        benchmark_validator::Outcome::Failed(ref violation) => println!(
            "    {} benchmark validation at record {}",
            "Failed".bright_red().bold(),
            violation.index,
        ),
    }

    Ok(outcome)
}
