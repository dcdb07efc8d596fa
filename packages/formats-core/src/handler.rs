//! Format Handlers
//!
//! A [`Handler`] is the scanner for one concrete file format: it turns a
//! document into a template plus a stringset, and a template plus a
//! (translated) stringset back into a document. The core ships no formats;
//! callers register theirs in a [`FormatRegistry`].

use crate::error::{Error, Result};
use crate::strings::{OpenString, Stringset};
use indexmap::IndexMap;
use std::fmt;
use tracing::debug;

pub trait Handler {
    /// Identifier the format is registered under.
    fn name(&self) -> &str;

    /// File extension, without the leading dot.
    fn extension(&self) -> &str;

    /// Extract the translatable strings of `content`, returning the template
    /// and the stringset in template order.
    fn parse(&self, content: &str) -> Result<(String, Stringset)>;

    /// Rebuild a document from a template produced by [`Handler::parse`].
    fn compile(&self, template: &str, stringset: &[OpenString]) -> Result<String>;
}

pub type BoxedHandler = Box<dyn Handler + Send + Sync>;

/// Format handlers by name, in registration order.
#[derive(Default)]
pub struct FormatRegistry {
    handlers: IndexMap<String, BoxedHandler>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under its own name, replacing any handler that was
    /// registered under the same name.
    pub fn register<H>(&mut self, handler: H) -> &mut Self
    where
        H: Handler + Send + Sync + 'static,
    {
        let name = handler.name().to_string();
        debug!(format = name.as_str(), "registering format handler");
        self.handlers.insert(name, Box::new(handler));
        self
    }

    pub fn get(&self, name: &str) -> Result<&(dyn Handler + Send + Sync)> {
        self.handlers
            .get(name)
            .map(|handler| handler.as_ref())
            .ok_or_else(|| Error::UnknownFormat(name.to_string()))
    }

    /// The first registered handler for `extension` (with or without the
    /// leading dot).
    pub fn by_extension(&self, extension: &str) -> Option<&(dyn Handler + Send + Sync)> {
        let extension = extension.trim_start_matches('.');
        self.handlers
            .values()
            .find(|handler| handler.extension().eq_ignore_ascii_case(extension))
            .map(|handler| handler.as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn parse(&self, format: &str, content: &str) -> Result<(String, Stringset)> {
        let handler = self.get(format)?;
        let (template, stringset) = handler.parse(content)?;
        debug!(format, strings = stringset.len(), "parsed document");
        Ok((template, stringset))
    }

    pub fn compile(&self, format: &str, template: &str, stringset: &[OpenString]) -> Result<String> {
        let handler = self.get(format)?;
        debug!(format, strings = stringset.len(), "compiling document");
        handler.compile(template, stringset)
    }
}

impl fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("formats", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
