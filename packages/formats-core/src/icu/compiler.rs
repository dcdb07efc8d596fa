//! Plural Expression Compiler
//!
//! Serializes per-category content back into plural syntax, and adapts the
//! placeholders of a template to the plural categories of a target locale.

use crate::error::{Error, Result};
use crate::icu::parser::IcuString;
use crate::plural::{PluralCategory, PluralSyntax};
use crate::strings::OpenString;
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Marker between a placeholder's hash and its plural ordinal.
const PLURAL_PLACEHOLDER_MARKER: &str = "_pl_";

#[derive(Debug, Clone, Copy, Default)]
pub struct IcuCompiler;

impl IcuCompiler {
    pub fn new() -> Self {
        IcuCompiler
    }

    /// Concatenate `<token> {<content>}` for every category, in ascending
    /// category order, separated by `delimiter`.
    ///
    /// A category is rendered as `=0`/`=1`/`=2` only when `syntax_by_category`
    /// asks for [`PluralSyntax::Numeric`] and the category has a numeric
    /// form; otherwise the category name is used.
    pub fn serialize_strings<'s, I>(
        &self,
        strings_by_category: I,
        delimiter: &str,
        syntax_by_category: Option<&BTreeMap<PluralCategory, PluralSyntax>>,
    ) -> String
    where
        I: IntoIterator<Item = (&'s PluralCategory, &'s String)>,
    {
        let mut entries: Vec<_> = strings_by_category.into_iter().collect();
        entries.sort_by_key(|(category, _)| **category);

        entries
            .into_iter()
            .map(|(category, content)| {
                let numeric = syntax_by_category
                    .and_then(|syntax| syntax.get(category))
                    .filter(|syntax| **syntax == PluralSyntax::Numeric)
                    .and_then(|_| category.numeric_token());
                let token = numeric.unwrap_or_else(|| category.name());
                format!("{} {{{}}}", token, content)
            })
            .collect::<Vec<_>>()
            .join(delimiter)
    }

    /// All forms of a string, named syntax, single-space delimited.
    pub fn serialize_string(&self, string: &OpenString) -> String {
        self.serialize_strings(string.forms(), " ", None)
    }

    /// The translated forms of a pluralized string, ready to be spliced into
    /// a compiled document.
    pub fn compile_pluralized(
        &self,
        string: &OpenString,
        delimiter: &str,
        syntax_by_category: Option<&BTreeMap<PluralCategory, PluralSyntax>>,
    ) -> String {
        self.serialize_strings(string.forms(), delimiter, syntax_by_category)
    }

    /// One placeholder per target category.
    ///
    /// `icu_string` must hold placeholders (`<hash>_pl_<n>`), as it does when
    /// it was parsed from a template. The hash of its first entry is reused
    /// and ordinals `0..n` are assigned in the order `target_categories` is
    /// given, so a target locale receives exactly the placeholders it needs,
    /// however many categories the source had.
    pub fn create_placeholders_by_category(
        icu_string: &IcuString,
        target_categories: &[PluralCategory],
    ) -> Result<IndexMap<PluralCategory, String>> {
        let root = icu_string
            .entries
            .first()
            .map(|entry| entry.text().trim())
            .and_then(|placeholder| {
                placeholder
                    .rfind(PLURAL_PLACEHOLDER_MARKER)
                    .map(|pos| &placeholder[..pos + PLURAL_PLACEHOLDER_MARKER.len()])
            })
            .ok_or_else(|| Error::MissingPlaceholderRoot {
                key: icu_string.key.clone(),
            })?;

        Ok(target_categories
            .iter()
            .enumerate()
            .map(|(ordinal, category)| (*category, format!("{}{}", root, ordinal)))
            .collect())
    }

    /// The placeholder part of a plural template for the given target
    /// categories, e.g. `one {<hash>_pl_0} other {<hash>_pl_1}`.
    pub fn serialize_placeholder_string(
        &self,
        icu_string: &IcuString,
        target_categories: &[PluralCategory],
    ) -> Result<String> {
        let placeholders = Self::create_placeholders_by_category(icu_string, target_categories)?;
        Ok(self.serialize_strings(&placeholders, " ", None))
    }
}
