//! Titlewave - Staggered per-character heading animations
//!
//! This library provides functionality to:
//! - Split heading text into per-character glyphs with staggered delays
//! - Cycle a heading through the `jump`, `pop` and `flip` effects on a timer
//! - Emit the companion stylesheet and a standalone host page
//! - Drive a live DOM heading from WebAssembly (`wasm` feature)

pub mod animator;
pub mod cli;
pub mod config;
pub mod cycle;
pub mod effect;
pub mod error;
pub mod host;
pub mod interval;
pub mod logging;
pub mod page;
pub mod split;
pub mod stylesheet;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use animator::{AnimationState, Animator, Phase, TICK_PERIOD};
pub use effect::Effect;
pub use error::{Error, Result};
