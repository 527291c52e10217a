//! Titlewave - Command-line tool for emitting animated heading markup, CSS and pages

use std::process::ExitCode;

use titlewave::cli;

fn main() -> ExitCode {
    cli::run()
}
