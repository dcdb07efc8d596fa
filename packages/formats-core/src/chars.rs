/*
 * Character Codes
 *
 * Characters that carry meaning inside plural expressions and templates.
 */

//! Character constants used by the scanners and compilers

// Line breaks
pub const NEWLINE: char = '\n';

// Punctuation
pub const EQ: char = '=';

// Braces
pub const LBRACE: char = '{';
pub const RBRACE: char = '}';

/// Whitespace as matched by `\s` in the plural grammar: Unicode
/// `White_Space`, non-breaking space included.
pub fn is_whitespace(code: char) -> bool {
    code.is_whitespace()
}

/// Characters allowed in a plural category token: `=` followed by ASCII
/// alphanumerics, or alphanumerics alone.
pub fn is_token_char(code: char) -> bool {
    code == EQ || code.is_ascii_alphanumeric()
}
