//! Ordered Reinsertion
//!
//! Compiles a template for formats whose placeholders occur in the same
//! order as the units of the stringset, without re-scanning the format.
//! Pluralized units are written out with one rendered line per category,
//! using [`OrderedCompilerConfig::plural_template`].

use crate::chars;
use crate::config::OrderedCompilerConfig;
use crate::error::{Error, Result};
use crate::strings::OpenString;
use crate::transcriber::Transcriber;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct OrderedCompiler {
    config: OrderedCompilerConfig,
}

impl OrderedCompiler {
    pub fn new(config: OrderedCompilerConfig) -> Self {
        OrderedCompiler { config }
    }

    /// Replace every placeholder of `template` with its translation.
    ///
    /// `stringset` must be in template order. A placeholder that cannot be
    /// found after the previous one means the template and the stringset are
    /// out of sync, and the whole compile fails with
    /// [`Error::TemplateDesync`].
    ///
    /// A pluralized placeholder that sits alone on its line (only whitespace
    /// around it) becomes one line per category, each carrying the original
    /// indentation and trailing whitespace. Anywhere else its renderings are
    /// spliced inline.
    pub fn compile(&self, template: &str, stringset: &[OpenString]) -> Result<String> {
        let mut transcriber = Transcriber::new(template);

        for string in stringset {
            let placeholder = string.template_replacement();
            let from = transcriber.ptr();
            let position = template[from..]
                .find(placeholder)
                .map(|offset| from + offset)
                .ok_or_else(|| Error::TemplateDesync {
                    placeholder: placeholder.to_string(),
                    position: from,
                })?;
            let after = position + placeholder.len();
            debug!(key = string.key.as_str(), position, "reinserting string");

            if !string.is_pluralized() {
                transcriber.copy_until(position);
                transcriber.add(string.string());
                transcriber.skip_until(after);
                continue;
            }

            let line_start = template[..position]
                .rfind(chars::NEWLINE)
                .map_or(0, |newline| newline + 1);
            let line_end = template[after..]
                .find(chars::NEWLINE)
                .map(|offset| after + offset);
            let indent = &template[line_start..position];
            let tail = &template[after..line_end.unwrap_or(template.len())];

            let isolated = line_start >= from
                && indent.chars().all(chars::is_whitespace)
                && tail.chars().all(chars::is_whitespace);

            if isolated {
                transcriber.copy_until(line_start);
                self.add_plural_lines(&mut transcriber, string, indent, tail, line_end.is_some());
                transcriber.skip_until(line_end.map_or(template.len(), |end| end + 1));
            } else {
                transcriber.copy_until(position);
                for (category, text) in string.forms() {
                    transcriber.add(render_plural_line(
                        &self.config.plural_template,
                        category.name(),
                        text,
                    ));
                }
                transcriber.skip_until(after);
            }
        }

        transcriber.copy_until(template.len());
        Ok(transcriber.into_destination())
    }

    fn add_plural_lines(
        &self,
        transcriber: &mut Transcriber<'_>,
        string: &OpenString,
        indent: &str,
        tail: &str,
        terminated: bool,
    ) {
        let count = string.forms().len();
        for (index, (category, text)) in string.forms().iter().enumerate() {
            let mut line = String::with_capacity(indent.len() + text.len() + tail.len() + 1);
            line.push_str(indent);
            line.push_str(&render_plural_line(
                &self.config.plural_template,
                category.name(),
                text,
            ));
            line.push_str(tail);
            // The last line only ends with a newline if the template line did.
            if terminated || index + 1 < count {
                line.push(chars::NEWLINE);
            }
            transcriber.add(line);
        }
    }
}

/// Fill a plural line template: `{rule}` and `{string}` are substituted,
/// `{{` and `}}` are literal braces, anything else is kept as is.
pub fn render_plural_line(template: &str, rule: &str, string: &str) -> String {
    let mut rendered = String::with_capacity(template.len() + rule.len() + string.len());
    let mut rest = template;

    while let Some(code) = rest.chars().next() {
        if let Some(after) = rest.strip_prefix("{{") {
            rendered.push(chars::LBRACE);
            rest = after;
        } else if let Some(after) = rest.strip_prefix("}}") {
            rendered.push(chars::RBRACE);
            rest = after;
        } else if let Some(after) = rest.strip_prefix("{rule}") {
            rendered.push_str(rule);
            rest = after;
        } else if let Some(after) = rest.strip_prefix("{string}") {
            rendered.push_str(string);
            rest = after;
        } else {
            rendered.push(code);
            rest = &rest[code.len_utf8()..];
        }
    }
    rendered
}
