//! Stylesheet command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::stylesheet::{stylesheet, StyleOptions};

use super::{write_output, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the css command
pub fn run_css(minify: bool, output: Option<&Path>) -> ExitCode {
    let css = match stylesheet(&StyleOptions { minify }) {
        Ok(css) => css,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = write_output(path, &css) {
                eprintln!("Error: Failed to write '{}': {}", path.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
            println!("Saved: {}", path.display());
        }
        None => println!("{}", css.trim_end()),
    }

    ExitCode::from(EXIT_SUCCESS)
}
