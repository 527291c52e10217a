//! Page command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::config::{load_config, merge_cli_overrides, CliOverrides};
use crate::page::render_page;
use crate::stylesheet::StyleOptions;

use super::{write_output, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the page command
pub fn run_page(
    text: &str,
    output: Option<&Path>,
    config_path: Option<&Path>,
    minify: bool,
    lang: Option<String>,
) -> ExitCode {
    let mut config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let overrides = CliOverrides {
        minify: minify.then_some(true),
        lang,
        ..Default::default()
    };
    merge_cli_overrides(&mut config, &overrides);

    let errors = config.validate();
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("Error: {}", error);
        }
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let html = match render_page(&config.page, text, &StyleOptions { minify: config.build.minify })
    {
        Ok(html) => html,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.build.out.join("index.html"));

    if let Err(e) = write_output(&output_path, &html) {
        eprintln!("Error: Failed to write '{}': {}", output_path.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }

    println!("Saved: {}", output_path.display());
    ExitCode::from(EXIT_SUCCESS)
}
