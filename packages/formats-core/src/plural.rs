//! Plural Categories
//!
//! The six CLDR plural categories and their fixed integer encoding
//! (`zero` = 0 ... `other` = 5). `other` is the single category of every
//! non-pluralized string.

use crate::error::RuleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CLDR plural categories, ordered by their rule number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Zero = 0,
    One = 1,
    Two = 2,
    Few = 3,
    Many = 4,
    Other = 5,
}

impl PluralCategory {
    pub const ALL: [PluralCategory; 6] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
        PluralCategory::Other,
    ];

    pub fn rule_number(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }

    pub fn from_rule_number(number: u8) -> Result<Self, RuleError> {
        PluralCategory::ALL
            .get(number as usize)
            .copied()
            .ok_or_else(|| RuleError {
                attempted: number.to_string(),
                valid: Self::allowed_numbers(),
            })
    }

    pub fn from_name(name: &str) -> Result<Self, RuleError> {
        PluralCategory::ALL
            .iter()
            .copied()
            .find(|category| category.name() == name)
            .ok_or_else(|| RuleError {
                attempted: name.to_string(),
                valid: Self::allowed_names(),
            })
    }

    /// The exact-match numeric token (`=0`, `=1`, `=2`) equivalent to this
    /// category, if there is one.
    pub fn numeric_token(self) -> Option<&'static str> {
        match self {
            PluralCategory::Zero => Some("=0"),
            PluralCategory::One => Some("=1"),
            PluralCategory::Two => Some("=2"),
            _ => None,
        }
    }

    pub fn allowed_names() -> String {
        PluralCategory::ALL
            .iter()
            .map(|category| category.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn allowed_numbers() -> String {
        PluralCategory::ALL
            .iter()
            .map(|category| category.rule_number().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PluralCategory {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PluralCategory::from_name(s)
    }
}

impl TryFrom<u8> for PluralCategory {
    type Error = RuleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        PluralCategory::from_rule_number(value)
    }
}

impl From<PluralCategory> for u8 {
    fn from(category: PluralCategory) -> u8 {
        category.rule_number()
    }
}

/// How a category token was spelled in source: `one` or `=1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralSyntax {
    #[default]
    Named,
    Numeric,
}

/// Returns the equivalent category name for an exact-match numeric token.
///
/// `=0`, `=1` and `=2` become `zero`, `one` and `two`; any other token is
/// returned unchanged, so `=5` later fails category validation.
pub fn normalize_plural_token(token: &str) -> &str {
    match token {
        "=0" => "zero",
        "=1" => "one",
        "=2" => "two",
        other => other,
    }
}

/// Name to rule number, for format handlers that key forms by integer.
pub fn get_rule_number(name: &str) -> Result<u8, RuleError> {
    PluralCategory::from_name(name).map(PluralCategory::rule_number)
}

/// Rule number to name.
pub fn get_rule_string(number: u8) -> Result<&'static str, RuleError> {
    PluralCategory::from_rule_number(number).map(PluralCategory::name)
}
