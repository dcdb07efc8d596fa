#![allow(dead_code)]

//! Test Utilities
//!
//! A minimal `key = value` format used to drive the whole
//! parse -> template -> compile cycle. Blank lines and `#` comments are
//! kept verbatim; every other line holding a `=` is an entry whose value is
//! either a plain string or a plural expression.

use formats_core::error::{Error, Result};
use formats_core::handler::Handler;
use formats_core::icu::{IcuCompiler, IcuParser};
use formats_core::plural::PluralCategory;
use formats_core::strings::{OpenString, Stringset};
use formats_core::transcriber::Transcriber;

pub struct KeyValueHandler {
    parser: IcuParser,
}

impl Default for KeyValueHandler {
    fn default() -> Self {
        KeyValueHandler {
            parser: IcuParser::default(),
        }
    }
}

impl KeyValueHandler {
    pub fn new(parser: IcuParser) -> Self {
        KeyValueHandler { parser }
    }

    /// Rewrite the plural placeholders of `template` so every plural entry
    /// carries exactly one placeholder per target category.
    pub fn adapt_template(&self, template: &str, categories: &[PluralCategory]) -> Result<String> {
        let compiler = IcuCompiler::new();
        let mut transcriber = Transcriber::new(template);
        for entry in entries(template) {
            if let Some(icu) = self.parser.parse(entry.key, entry.value, entry.offset)? {
                transcriber.copy_until(icu.document_replace_start());
                transcriber.add(compiler.serialize_placeholder_string(&icu, categories)?);
                transcriber.skip_until(icu.document_replace_end());
            }
        }
        transcriber.copy_until(template.len());
        Ok(transcriber.into_destination())
    }
}

impl Handler for KeyValueHandler {
    fn name(&self) -> &str {
        "key-value"
    }

    fn extension(&self) -> &str {
        "kv"
    }

    fn parse(&self, content: &str) -> Result<(String, Stringset)> {
        let compiler = IcuCompiler::new();
        let mut transcriber = Transcriber::new(content);
        let mut stringset = Vec::new();

        for (order, entry) in entries(content).into_iter().enumerate() {
            match self.parser.parse(entry.key, entry.value, entry.offset)? {
                Some(icu) => {
                    let string = icu.to_open_string()?.with_order(order);
                    transcriber.copy_until(icu.document_replace_start());
                    transcriber.add(compiler.serialize_strings(
                        &string.placeholders_by_category(),
                        " ",
                        Some(&icu.syntax_by_category()),
                    ));
                    transcriber.skip_until(icu.document_replace_end());
                    stringset.push(string);
                }
                None => {
                    let string = OpenString::new(entry.key, entry.value).with_order(order);
                    transcriber.copy_until(entry.offset);
                    transcriber.add(string.template_replacement());
                    transcriber.skip(entry.value.len());
                    stringset.push(string);
                }
            }
        }

        transcriber.copy_until(content.len());
        Ok((transcriber.into_destination(), stringset))
    }

    fn compile(&self, template: &str, stringset: &[OpenString]) -> Result<String> {
        let compiler = IcuCompiler::new();
        let mut transcriber = Transcriber::new(template);
        let mut strings = stringset.iter();

        for entry in entries(template) {
            let string = strings.next().ok_or_else(|| {
                Error::Handler(anyhow::anyhow!("no string left for key \"{}\"", entry.key))
            })?;
            match self.parser.parse(entry.key, entry.value, entry.offset)? {
                Some(icu) => {
                    transcriber.copy_until(icu.document_replace_start());
                    transcriber.add(compiler.compile_pluralized(
                        string,
                        " ",
                        Some(&icu.syntax_by_category()),
                    ));
                    transcriber.skip_until(icu.document_replace_end());
                }
                None => {
                    let placeholder = string.template_replacement();
                    let position = entry.value.find(placeholder).ok_or_else(|| {
                        Error::TemplateDesync {
                            placeholder: placeholder.to_string(),
                            position: entry.offset,
                        }
                    })?;
                    transcriber.copy_until(entry.offset + position);
                    transcriber.add(string.string());
                    transcriber.skip(placeholder.len());
                }
            }
        }

        transcriber.copy_until(template.len());
        Ok(transcriber.into_destination())
    }
}

struct Entry<'a> {
    key: &'a str,
    value: &'a str,
    offset: usize,
}

fn entries(content: &str) -> Vec<Entry<'_>> {
    let mut entries = Vec::new();
    let mut line_start = 0;
    for line in content.split_inclusive('\n') {
        let start = line_start;
        line_start += line.len();

        let text = line.trim_end();
        let trimmed = text.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some(eq) = text.find('=') else {
            continue;
        };
        let raw = &text[eq + 1..];
        let value = raw.trim_start();
        entries.push(Entry {
            key: text[..eq].trim(),
            value,
            offset: start + eq + 1 + (raw.len() - value.len()),
        });
    }
    entries
}

/// Replace every form of every string with `f(category, text)`.
pub fn translate(stringset: &[OpenString], f: impl Fn(PluralCategory, &str) -> String) -> Stringset {
    stringset
        .iter()
        .map(|string| {
            let forms = string
                .forms()
                .iter()
                .map(|(category, text)| (*category, f(*category, text)))
                .collect();
            OpenString::from_forms(string.key.clone(), forms)
                .unwrap()
                .with_context(string.context().to_vec())
        })
        .collect()
}
