#![deny(clippy::all)]

/*!
 * Formats Core
 *
 * Building blocks for localization file formats: translatable strings and
 * their placeholders, CLDR plural categories, plural expression parsing and
 * serialization, position-tracked template rewriting and the handler
 * contract concrete formats implement.
 */

pub mod chars;
pub mod compilers;
pub mod config;
pub mod digest;
pub mod error;
pub mod handler;
pub mod icu;
pub mod plural;
pub mod strings;
pub mod transcriber;

pub use compilers::OrderedCompiler;
pub use config::Config;
pub use error::{Error, Result};
pub use handler::{FormatRegistry, Handler};
pub use icu::{IcuCompiler, IcuParser, IcuString};
pub use plural::{PluralCategory, PluralSyntax};
pub use strings::{OpenString, Stringset};
pub use transcriber::Transcriber;
