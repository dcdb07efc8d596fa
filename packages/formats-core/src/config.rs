//! Configuration
//!
//! Explicit, default-valued settings for the parser, the ordered compiler and
//! the metadata new strings start out with. Everything deserializes from
//! JSON; missing fields keep their defaults.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Settings for [`crate::icu::IcuParser`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IcuParserConfig {
    /// Accept the `=0`/`=1`/`=2` exact-match syntax. When disabled, any
    /// `=N {...}` span makes the whole value a plain, non-pluralized string.
    pub allow_numeric_plural_values: bool,
}

impl Default for IcuParserConfig {
    fn default() -> Self {
        IcuParserConfig {
            allow_numeric_plural_values: true,
        }
    }
}

/// Settings for [`crate::compilers::OrderedCompiler`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderedCompilerConfig {
    /// Line template for one plural form. `{rule}` is replaced with the
    /// category name and `{string}` with the translation; `{{` and `}}`
    /// produce literal braces.
    pub plural_template: String,
}

impl Default for OrderedCompilerConfig {
    fn default() -> Self {
        OrderedCompilerConfig {
            plural_template: "{rule}: {string}".to_string(),
        }
    }
}

/// Metadata every new [`crate::strings::OpenString`] starts with.
///
/// None of these fields take part in placeholder derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringDefaults {
    pub order: Option<usize>,
    pub character_limit: Option<usize>,
    pub occurrences: Vec<String>,
    pub developer_comment: String,
    pub flags: String,
    pub fuzzy: bool,
    pub obsolete: bool,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub icu_parser: IcuParserConfig,
    pub ordered_compiler: OrderedCompilerConfig,
    pub string_defaults: StringDefaults,
}

impl Config {
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
