//! Split command implementation

use std::process::ExitCode;

use crate::split::{split_text, to_markup};

use super::{SplitFormat, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the split command
pub fn run_split(text: &str, format: SplitFormat) -> ExitCode {
    let segments = split_text(text);

    match format {
        SplitFormat::Markup => println!("{}", to_markup(&segments)),
        SplitFormat::Json => match serde_json::to_string_pretty(&segments) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: Failed to serialize segments: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        },
    }

    ExitCode::from(EXIT_SUCCESS)
}
