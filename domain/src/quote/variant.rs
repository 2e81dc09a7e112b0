//! Variant mode value object

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Stylistic variant applied to a quote before it is stored
///
/// This is a closed set: every mode must have a transformer registered in
/// [`Quote::render`](crate::quote::entities::Quote::render).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantMode {
    /// Identity - the quote is stored as written
    Normal,
    /// Letter substitution plus a stutter prefix on u-words
    Uwu,
    /// Word-by-word pig-latin with sentence capitalization
    Piglatin,
}

impl VariantMode {
    /// The command sub-verb that selects this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantMode::Normal => "normal",
            VariantMode::Uwu => "uwu",
            VariantMode::Piglatin => "piglatin",
        }
    }
}

impl std::fmt::Display for VariantMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string does not name a known variant mode
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown variant mode: {0}")]
pub struct UnknownVariant(pub String);

impl FromStr for VariantMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(VariantMode::Normal),
            "uwu" => Ok(VariantMode::Uwu),
            "piglatin" => Ok(VariantMode::Piglatin),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}
