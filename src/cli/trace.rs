//! Trace command implementation
//!
//! Mounts the animator on an in-memory page and steps simulated time one
//! tick period at a time, printing the heading state after each step.

use std::process::ExitCode;
use std::time::Duration;

use crate::animator::{AnimationState, Animator, TICK_PERIOD};
use crate::error::Result;
use crate::host::MemoryPage;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the trace command
pub fn run_trace(text: &str, ms: u64, json: bool) -> ExitCode {
    let printed = trace(text, ms, |at, state| println!("{}", format_row(at, state, json)));
    match printed {
        Ok(_) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Emit the heading state at time zero and after every tick up to `ms`.
///
/// Rows are handed to `emit` as they are produced. Returns the row count.
fn trace<F>(text: &str, ms: u64, mut emit: F) -> Result<u64>
where
    F: FnMut(u64, &AnimationState),
{
    let page = MemoryPage::with_heading(text);
    let mut animator = Animator::mount(&page)?;
    animator.ready()?;

    let period = TICK_PERIOD.as_millis() as u64;
    emit(0, &animator.state());
    let mut rows = 1;
    let mut at = 0u64;
    while let Some(next) = at.checked_add(period).filter(|next| *next <= ms) {
        animator.advance(Duration::from_millis(period))?;
        at = next;
        emit(at, &animator.state());
        rows += 1;
    }
    Ok(rows)
}

fn format_row(at: u64, state: &AnimationState, json: bool) -> String {
    let effect = state.effect.map(|e| e.name()).unwrap_or("none");
    if json {
        serde_json::json!({
            "ms": at,
            "effect": effect,
            "animating": state.animating,
            "generation": state.generation,
        })
        .to_string()
    } else {
        format!(
            "{:>6}ms  {:<5} {}  gen {}",
            at,
            effect,
            if state.animating { "animating" } else { "idle" },
            state.generation
        )
    }
}
