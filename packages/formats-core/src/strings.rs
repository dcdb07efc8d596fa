//! Translatable Strings
//!
//! An [`OpenString`] is one string extracted from a source document: a key,
//! an optional context, one text per plural category and some pass-through
//! metadata for translators. Its placeholder ([`OpenString::template_replacement`])
//! is what a template holds in place of the text, and what the compile phase
//! looks for when putting translations back.
//!
//! ```
//! use formats_core::strings::OpenString;
//!
//! let string = OpenString::new("greeting", "hello world");
//! assert!(string.template_replacement().ends_with("_tr"));
//! assert_eq!(string.string(), "hello world");
//! ```

use crate::config::StringDefaults;
use crate::digest;
use crate::error::{Error, Result};
use crate::plural::PluralCategory;
use once_cell::unsync::OnceCell;
use std::collections::BTreeMap;

/// The ordered collection of strings extracted from (or compiled into) one
/// document.
pub type Stringset = Vec<OpenString>;

const SINGULAR_SUFFIX: &str = "tr";
const PLURAL_SUFFIX: &str = "pl";

#[derive(Debug, Clone)]
pub struct OpenString {
    pub key: String,
    context: Vec<String>,
    forms: BTreeMap<PluralCategory, String>,
    pluralized: bool,

    pub order: Option<usize>,
    pub character_limit: Option<usize>,
    pub occurrences: Vec<String>,
    pub developer_comment: String,
    pub flags: String,
    pub fuzzy: bool,
    pub obsolete: bool,

    template_replacement: OnceCell<String>,
}

impl OpenString {
    /// A non-pluralized string; its text is stored under `other`.
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        let mut forms = BTreeMap::new();
        forms.insert(PluralCategory::Other, text.into());
        Self::from_parts(key.into(), forms, false)
    }

    /// Build a string from its forms.
    ///
    /// Two or more forms make a pluralized string. A single form must be
    /// `other` and yields a non-pluralized string.
    pub fn from_forms(
        key: impl Into<String>,
        forms: BTreeMap<PluralCategory, String>,
    ) -> Result<Self> {
        let key = key.into();
        match forms.len() {
            0 => Err(Error::InvalidForms {
                key,
                reason: "at least one form is required".to_string(),
            }),
            1 if !forms.contains_key(&PluralCategory::Other) => Err(Error::InvalidForms {
                key,
                reason: "a single form must use the \"other\" rule".to_string(),
            }),
            n => Ok(Self::from_parts(key, forms, n > 1)),
        }
    }

    fn from_parts(key: String, forms: BTreeMap<PluralCategory, String>, pluralized: bool) -> Self {
        let defaults = StringDefaults::default();
        OpenString {
            key,
            context: Vec::new(),
            forms,
            pluralized,
            order: defaults.order,
            character_limit: defaults.character_limit,
            occurrences: defaults.occurrences,
            developer_comment: defaults.developer_comment,
            flags: defaults.flags,
            fuzzy: defaults.fuzzy,
            obsolete: defaults.obsolete,
            template_replacement: OnceCell::new(),
        }
    }

    pub fn with_context(mut self, context: Vec<String>) -> Self {
        self.context = context;
        self.template_replacement = OnceCell::new();
        self
    }

    /// Replace all metadata with the given defaults.
    pub fn with_defaults(mut self, defaults: &StringDefaults) -> Self {
        self.order = defaults.order;
        self.character_limit = defaults.character_limit;
        self.occurrences = defaults.occurrences.clone();
        self.developer_comment = defaults.developer_comment.clone();
        self.flags = defaults.flags.clone();
        self.fuzzy = defaults.fuzzy;
        self.obsolete = defaults.obsolete;
        self
    }

    pub fn with_order(mut self, order: usize) -> Self {
        self.order = Some(order);
        self
    }

    /// Force the pluralized flag.
    ///
    /// Only meant for placeholder-only strings, e.g. a stringset whose text
    /// is each string's own placeholder, used to rewrite a template before
    /// the real compile.
    pub fn with_pluralized(mut self, pluralized: bool) -> Self {
        self.pluralized = pluralized;
        self.template_replacement = OnceCell::new();
        self
    }

    pub fn context(&self) -> &[String] {
        &self.context
    }

    pub fn forms(&self) -> &BTreeMap<PluralCategory, String> {
        &self.forms
    }

    pub fn is_pluralized(&self) -> bool {
        self.pluralized
    }

    /// The text of a non-pluralized string (the `other` form).
    pub fn string(&self) -> &str {
        self.forms
            .get(&PluralCategory::Other)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn template_replacement(&self) -> &str {
        self.template_replacement.get_or_init(|| {
            let suffix = if self.pluralized {
                PLURAL_SUFFIX
            } else {
                SINGULAR_SUFFIX
            };
            format!("{}_{}", digest::string_hash(&self.key, &self.context), suffix)
        })
    }

    /// The hash part of the placeholder, without the type suffix.
    pub fn string_hash(&self) -> &str {
        let replacement = self.template_replacement();
        &replacement[..replacement.len() - PLURAL_SUFFIX.len() - 1]
    }

    /// Placeholder for one plural form, `<hash>_pl_<ordinal>`.
    pub fn plural_placeholder(&self, ordinal: usize) -> String {
        format!("{}_{}_{}", self.string_hash(), PLURAL_SUFFIX, ordinal)
    }

    /// One `_pl_` placeholder per form, numbered in ascending category order.
    pub fn placeholders_by_category(&self) -> BTreeMap<PluralCategory, String> {
        self.forms
            .keys()
            .enumerate()
            .map(|(ordinal, category)| (*category, self.plural_placeholder(ordinal)))
            .collect()
    }
}

/// Sort a stringset by `order`; strings without an order keep their relative
/// position after the ordered ones.
pub fn sort_by_order(stringset: &mut Stringset) {
    stringset.sort_by_key(|string| string.order.unwrap_or(usize::MAX));
}
