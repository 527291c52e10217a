//! Companion stylesheet generation
//!
//! The heading only animates when the page carries CSS that maps the
//! `animate` class to a keyframe rule named by `--animation` and delayed by
//! each glyph's `--delay`. This module emits that CSS, one `@keyframes` block
//! per [`Effect`], and runs it through lightningcss so the output is always
//! valid and optionally minified.

use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};

use crate::effect::Effect;
use crate::error::Result;
use crate::host::{ANIMATE_CLASS, ANIMATION_PROPERTY, HEADING_SELECTOR};
use crate::split::DELAY_PROPERTY;

/// Length of one glyph's animation
const GLYPH_DURATION: &str = "0.6s";

/// Options controlling stylesheet output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleOptions {
    /// Minify the output
    pub minify: bool,
}

/// Keyframe stops for an effect
pub fn keyframes(effect: Effect) -> &'static str {
    match effect {
        Effect::Jump => {
            "0%, 100% { transform: translateY(0); }\n  50% { transform: translateY(-0.4em); }"
        }
        Effect::Pop => "0%, 100% { transform: scale(1); }\n  50% { transform: scale(1.4); }",
        Effect::Flip => {
            "from { transform: rotateY(0deg); }\n  to { transform: rotateY(360deg); }"
        }
    }
}

/// Unprocessed stylesheet source
pub fn source() -> String {
    let mut css = format!(
        "{sel} span {{\n  display: inline-block;\n}}\n\n\
         {sel}.{class} span {{\n  \
         animation-name: var({anim});\n  \
         animation-duration: {duration};\n  \
         animation-timing-function: ease-in-out;\n  \
         animation-delay: var({delay});\n  \
         animation-fill-mode: both;\n}}\n",
        sel = HEADING_SELECTOR,
        class = ANIMATE_CLASS,
        anim = ANIMATION_PROPERTY,
        duration = GLYPH_DURATION,
        delay = DELAY_PROPERTY,
    );

    for effect in Effect::ALL {
        css.push_str(&format!("\n@keyframes {} {{\n  {}\n}}\n", effect.name(), keyframes(effect)));
    }
    css
}

/// Generate the stylesheet, validated and printed by lightningcss
pub fn stylesheet(options: &StyleOptions) -> Result<String> {
    let css = source();
    let mut sheet = StyleSheet::parse(&css, ParserOptions::default())?;
    if options.minify {
        sheet.minify(MinifyOptions::default())?;
    }

    let printed = sheet.to_css(PrinterOptions { minify: options.minify, ..Default::default() })?;
    Ok(printed.code)
}
