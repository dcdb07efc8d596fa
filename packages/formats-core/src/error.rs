//! Error Module
//!
//! Error types shared by the parse and compile phases.

use crate::plural::PluralCategory;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] PluralParseError),

    #[error(transparent)]
    Rule(#[from] RuleError),

    /// A unit was constructed with a set of forms that violates the
    /// singular/plural cardinality rules.
    #[error("Invalid forms for string with key \"{key}\": {reason}")]
    InvalidForms { key: String, reason: String },

    /// The first entry of a plural expression does not hold a
    /// `<hash>_pl_<n>` placeholder, so no sibling placeholders can be derived.
    #[error("Pluralized entry with key \"{key}\" does not carry a placeholder to derive plural placeholders from")]
    MissingPlaceholderRoot { key: String },

    /// The template and the stringset disagree about the document structure.
    #[error("Template and stringset are out of sync: placeholder \"{placeholder}\" was not found at or after offset {position}")]
    TemplateDesync { placeholder: String, position: usize },

    #[error("Unknown format \"{0}\"")]
    UnknownFormat(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Failure reported by an external format handler.
    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}

/// An integer or textual plural rule that does not name a plural category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{attempted} is not a valid rule value. Valid choices are {valid}")]
pub struct RuleError {
    pub attempted: String,
    pub valid: String,
}

/// Diagnostic raised by the plural expression parser.
///
/// Always carries the offending key and the full original value so that a
/// format handler can report it without any further context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.describe())]
pub struct PluralParseError {
    pub key: String,
    pub value: String,
    pub kind: PluralParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluralParseErrorKind {
    /// Text left over outside of every `<token> {...}` span.
    Malformed { residual: String },
    /// Tokens that are not plural category names.
    InvalidCategories { tokens: Vec<String> },
    /// A plural argument without a single category span.
    Empty,
    /// Two spans resolve to the same category.
    DuplicateCategory { category: PluralCategory },
}

impl PluralParseError {
    pub fn new(key: &str, value: &str, kind: PluralParseErrorKind) -> Self {
        PluralParseError {
            key: key.to_string(),
            value: value.to_string(),
            kind,
        }
    }

    fn describe(&self) -> String {
        match &self.kind {
            PluralParseErrorKind::Malformed { residual } => format!(
                "Invalid format of pluralized entry with key: \"{}\", serialized translations: \"{}\". \
                 Could not parse the string at or near the following chunk: \"{}\". \
                 It contains either invalid braces (\"{{\", \"}}\") or invalid characters.",
                self.key, self.value, residual
            ),
            PluralParseErrorKind::InvalidCategories { tokens } => format!(
                "Invalid plural rule(s): \"{}\" in pluralized entry with key: {}, value: \"{}\". \
                 Allowed values are: {}",
                tokens.join(", "),
                self.key,
                self.value,
                PluralCategory::allowed_names()
            ),
            PluralParseErrorKind::Empty => format!(
                "Pluralized entry with key: \"{}\", value: \"{}\" does not contain any plural rule",
                self.key, self.value
            ),
            PluralParseErrorKind::DuplicateCategory { category } => format!(
                "Plural rule \"{}\" appears more than once in pluralized entry with key: {}, value: \"{}\"",
                category, self.key, self.value
            ),
        }
    }
}
