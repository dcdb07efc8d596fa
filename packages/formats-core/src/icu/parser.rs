//! Plural Expression Parser
//!
//! Recognizes values shaped like
//!
//! ```text
//! { item_count, plural,
//!     one { You have {file_count} file. }
//!     other { You have {file_count} files. }
//! }
//! ```
//!
//! and extracts one string per plural category, along with the exact span of
//! the value a template should replace. Only the `plural` argument type is
//! understood; any other argument type, or a value of a different shape, is
//! not a plural expression and parses to `None`.

use crate::chars;
use crate::config::IcuParserConfig;
use crate::error::{PluralParseError, PluralParseErrorKind};
use crate::icu::lexer::{self, PluralItem};
use crate::plural::{normalize_plural_token, PluralCategory, PluralSyntax};
use crate::strings::OpenString;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// `{ <identifier> , <argument> , <body> }`, whitespace insignificant.
static MESSAGE_FORMAT_STRUCTURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\s*\{\s*([A-Za-z\-_\d]+)\s*,\s*([A-Za-z_]+)\s*,\s*(.*)\}\s*$").unwrap()
});

pub const PLURAL_ARG: &str = "plural";

/// One `<token> {<content>}` entry as it appears in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralEntry {
    pub category: PluralCategory,
    /// The token as spelled in source, e.g. `one` or `=1`.
    pub token: String,
    /// The content including its enclosing braces.
    pub content: String,
}

impl PluralEntry {
    /// The content without its enclosing braces.
    pub fn text(&self) -> &str {
        let content = self.content.as_str();
        content
            .strip_prefix(chars::LBRACE)
            .and_then(|c| c.strip_suffix(chars::RBRACE))
            .unwrap_or(content)
    }

    pub fn syntax(&self) -> PluralSyntax {
        if self.token.starts_with(chars::EQ) {
            PluralSyntax::Numeric
        } else {
            PluralSyntax::Named
        }
    }
}

/// A parsed plural expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcuString {
    pub key: String,
    /// Entries in source order.
    pub entries: Vec<PluralEntry>,
    /// Offset of the whole value in the document.
    pub value_span_start: usize,
    /// Offset of `replace_text` inside the value.
    pub replace_start: usize,
    /// The part of the value a template replaces: from the first category
    /// token up to, and including, the second-to-last closing brace.
    pub replace_text: String,
}

impl IcuString {
    pub fn new(key: impl Into<String>, entries: Vec<PluralEntry>) -> Self {
        IcuString {
            key: key.into(),
            entries,
            value_span_start: 0,
            replace_start: 0,
            replace_text: String::new(),
        }
    }

    /// Category texts without their enclosing braces.
    pub fn strings_by_category(&self) -> BTreeMap<PluralCategory, String> {
        self.entries
            .iter()
            .map(|entry| (entry.category, entry.text().to_string()))
            .collect()
    }

    /// How each category was spelled, so a compiled value can keep `=1`
    /// where the source used it.
    pub fn syntax_by_category(&self) -> BTreeMap<PluralCategory, PluralSyntax> {
        self.entries
            .iter()
            .map(|entry| (entry.category, entry.syntax()))
            .collect()
    }

    /// Absolute offset of `replace_text` in the document.
    pub fn document_replace_start(&self) -> usize {
        self.value_span_start + self.replace_start
    }

    pub fn document_replace_end(&self) -> usize {
        self.document_replace_start() + self.replace_text.len()
    }

    pub fn to_open_string(&self) -> crate::error::Result<OpenString> {
        OpenString::from_forms(self.key.clone(), self.strings_by_category())
    }
}

/// Parser for plural expressions embedded in string values.
///
/// ```
/// use formats_core::icu::IcuParser;
///
/// let parser = IcuParser::default();
/// let icu = parser
///     .parse("key", "{cnt, plural, one {table} other {tables}}", 0)
///     .unwrap()
///     .unwrap();
/// assert_eq!(icu.replace_text, "one {table} other {tables}");
///
/// // Other argument types are not plural expressions.
/// let select = parser.parse("key", "{cnt, select, one {table} other {tables}}", 0);
/// assert_eq!(select, Ok(None));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IcuParser {
    config: IcuParserConfig,
}

impl IcuParser {
    pub fn new(config: IcuParserConfig) -> Self {
        IcuParser { config }
    }

    pub fn allows_numeric_plural_values(&self) -> bool {
        self.config.allow_numeric_plural_values
    }

    /// Parse `value`, found at `value_offset` in its document.
    ///
    /// Returns `Ok(None)` when the value is not a plural expression and
    /// should be handled as an ordinary string.
    pub fn parse(
        &self,
        key: &str,
        value: &str,
        value_offset: usize,
    ) -> Result<Option<IcuString>, PluralParseError> {
        let Some(captures) = MESSAGE_FORMAT_STRUCTURE.captures(value) else {
            return Ok(None);
        };
        let (Some(argument), Some(body)) = (captures.get(2), captures.get(3)) else {
            return Ok(None);
        };

        if argument.as_str() != PLURAL_ARG {
            debug!(key, argument = argument.as_str(), "unsupported message format argument");
            return Ok(None);
        }

        self.parse_pluralized(key, value, value_offset, body.start(), body.as_str())
    }

    fn parse_pluralized(
        &self,
        key: &str,
        value: &str,
        value_offset: usize,
        body_start: usize,
        body: &str,
    ) -> Result<Option<IcuString>, PluralParseError> {
        let error = |kind| PluralParseError::new(key, value, kind);

        if !self.config.allow_numeric_plural_values && lexer::contains_numeric_item(body) {
            debug!(key, "numeric plural syntax disabled, treating value as a plain string");
            return Ok(None);
        }

        let items = lexer::scan_items(body);

        let residual = lexer::residual(body, &items);
        if !residual.is_empty() {
            return Err(error(PluralParseErrorKind::Malformed { residual }));
        }

        let entries = resolve_entries(&items).map_err(&error)?;
        let first = items
            .first()
            .ok_or_else(|| error(PluralParseErrorKind::Empty))?;

        // Everything before the first token stays in the template, including
        // the whitespace after the argument's trailing comma. The closing
        // brace of the expression itself stays as well.
        let replace_start = body_start + first.start;
        let replace_end = value
            .rfind(chars::RBRACE)
            .and_then(|last| value[..last].rfind(chars::RBRACE))
            .map(|second_last| second_last + 1)
            .filter(|&end| end >= replace_start)
            .ok_or_else(|| {
                error(PluralParseErrorKind::Malformed {
                    residual: value.to_string(),
                })
            })?;

        debug!(key, entries = entries.len(), "parsed plural expression");

        Ok(Some(IcuString {
            key: key.to_string(),
            entries,
            value_span_start: value_offset,
            replace_start,
            replace_text: value[replace_start..replace_end].to_string(),
        }))
    }
}

fn resolve_entries(items: &[PluralItem<'_>]) -> Result<Vec<PluralEntry>, PluralParseErrorKind> {
    let mut invalid = Vec::new();
    let mut entries = Vec::with_capacity(items.len());

    for item in items {
        match PluralCategory::from_name(normalize_plural_token(item.token)) {
            Ok(category) => entries.push(PluralEntry {
                category,
                token: item.token.to_string(),
                content: item.content.to_string(),
            }),
            Err(_) => invalid.push(item.token.to_string()),
        }
    }

    if !invalid.is_empty() {
        return Err(PluralParseErrorKind::InvalidCategories { tokens: invalid });
    }

    let mut seen = HashSet::new();
    if let Some(duplicate) = entries.iter().find(|entry| !seen.insert(entry.category)) {
        return Err(PluralParseErrorKind::DuplicateCategory {
            category: duplicate.category,
        });
    }

    Ok(entries)
}
