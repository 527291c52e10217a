//! Heading splitter
//!
//! Breaks heading text into per-character segments so each glyph can be
//! animated independently. Every non-whitespace character becomes a
//! [`Segment::Glyph`] carrying a staggered delay; whitespace passes through
//! untouched.
//!
//! # Example
//!
//! ```
//! use titlewave::split::split_markup;
//!
//! assert_eq!(
//!     split_markup("A B"),
//!     r#"<span style="--delay: 0s">A</span> <span style="--delay: 0.1s">B</span>"#
//! );
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

/// Custom property each glyph receives
pub const DELAY_PROPERTY: &str = "--delay";

/// Stagger between consecutive glyphs, in tenths of a second
const STAGGER_TENTHS: u32 = 1;

/// Animation delay for a glyph, stored in tenths of a second.
///
/// Displays in shortest decimal form: `0s`, `0.1s`, `1s`, `1.2s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Delay {
    tenths: u32,
}

impl Delay {
    /// Delay for the glyph at zero-based position `index`
    pub fn for_index(index: usize) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX / STAGGER_TENTHS);
        Self { tenths: index.saturating_mul(STAGGER_TENTHS) }
    }

    /// Delay in tenths of a second
    pub fn tenths(self) -> u32 {
        self.tenths
    }

    /// Delay in seconds
    pub fn as_secs_f64(self) -> f64 {
        f64::from(self.tenths) / 10.0
    }
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.tenths / 10;
        let frac = self.tenths % 10;
        if frac == 0 {
            write!(f, "{}s", whole)
        } else {
            write!(f, "{}.{}s", whole, frac)
        }
    }
}

impl Serialize for Delay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One piece of split heading text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    /// A wrapped character with its position among glyphs
    Glyph { ch: char, index: usize, delay: Delay },
    /// A whitespace character left unwrapped
    Space { ch: char },
}

impl Segment {
    /// The character this segment renders
    pub fn ch(&self) -> char {
        match self {
            Segment::Glyph { ch, .. } | Segment::Space { ch } => *ch,
        }
    }

    /// Whether this segment is wrapped in its own element
    pub fn is_glyph(&self) -> bool {
        matches!(self, Segment::Glyph { .. })
    }
}

/// Split text into glyph and whitespace segments.
///
/// Glyph indices count wrapped characters only, so whitespace never shifts
/// the stagger.
pub fn split_text(text: &str) -> Vec<Segment> {
    let mut index = 0;
    text.chars()
        .map(|ch| {
            if is_space(ch) {
                Segment::Space { ch }
            } else {
                let segment = Segment::Glyph { ch, index, delay: Delay::for_index(index) };
                index += 1;
                segment
            }
        })
        .collect()
}

/// Whether `ch` is left unwrapped.
///
/// Unicode `White_Space` plus the byte-order mark U+FEFF, which browsers
/// treat as whitespace in `\s`.
pub fn is_space(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{FEFF}'
}

/// Number of wrapped characters in `segments`
pub fn glyph_count(segments: &[Segment]) -> usize {
    segments.iter().filter(|s| s.is_glyph()).count()
}

/// Render segments as inline HTML.
///
/// Each glyph becomes `<span style="--delay: Ns">c</span>`. Characters with
/// meaning in HTML are escaped, in glyphs and whitespace alike.
pub fn to_markup(segments: &[Segment]) -> String {
    let mut out = String::with_capacity(segments.len() * 32);
    for segment in segments {
        match segment {
            Segment::Glyph { ch, delay, .. } => {
                out.push_str("<span style=\"");
                out.push_str(DELAY_PROPERTY);
                out.push_str(": ");
                out.push_str(&delay.to_string());
                out.push_str("\">");
                push_escaped(&mut out, *ch);
                out.push_str("</span>");
            }
            Segment::Space { ch } => out.push(*ch),
        }
    }
    out
}

/// Split text and render it as markup in one step
pub fn split_markup(text: &str) -> String {
    to_markup(&split_text(text))
}

/// Escape `text` for use as HTML text content or a quoted attribute value
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        push_escaped(&mut out, ch);
    }
    out
}

fn push_escaped(out: &mut String, ch: char) {
    match ch {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(ch),
    }
}
