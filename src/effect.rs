//! Animation identifiers
//!
//! The heading cycles through a fixed, ordered set of named effects. Each name
//! is written into the `--animation` custom property and doubles as the
//! `@keyframes` name in the companion stylesheet.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A named visual effect applied to the whole heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    /// Characters hop up and land again
    Jump,
    /// Characters swell and settle
    Pop,
    /// Characters spin about their vertical axis
    Flip,
}

impl Effect {
    /// Every effect, in cycling order
    pub const ALL: [Effect; 3] = [Effect::Jump, Effect::Pop, Effect::Flip];

    /// The identifier written into `--animation`
    pub fn name(self) -> &'static str {
        match self {
            Effect::Jump => "jump",
            Effect::Pop => "pop",
            Effect::Flip => "flip",
        }
    }

    /// Position of this effect in [`Effect::ALL`]
    pub fn index(self) -> usize {
        match self {
            Effect::Jump => 0,
            Effect::Pop => 1,
            Effect::Flip => 2,
        }
    }
}

impl Default for Effect {
    fn default() -> Self {
        Effect::Jump
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown effect name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown effect '{0}', expected one of: jump, pop, flip")]
pub struct UnknownEffect(pub String);

impl FromStr for Effect {
    type Err = UnknownEffect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Effect::ALL
            .into_iter()
            .find(|effect| effect.name() == s)
            .ok_or_else(|| UnknownEffect(s.to_string()))
    }
}
