//! Plural Expressions
//!
//! Parsing and serializing of ICU message-format plural expressions,
//! `{ count, plural, one {...} other {...} }`, embedded in string values.

pub mod compiler;
pub mod lexer;
pub mod parser;

pub use compiler::IcuCompiler;
pub use parser::{IcuParser, IcuString, PluralEntry};
