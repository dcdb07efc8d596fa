//! Plural Body Lexer
//!
//! Finds `<token> {<content>}` spans inside the body of a plural expression
//! (the part after `{count, plural,`). Content may contain nested brace
//! pairs. Braces are always structural: an apostrophe never quotes a brace,
//! so `it's` or a trailing `users'` cannot swallow the boundary of a sibling
//! span.

use crate::chars;

/// One `<token> {<content>}` span. Offsets are byte offsets into the scanned
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluralItem<'a> {
    /// The category token as spelled in source, e.g. `one` or `=1`.
    pub token: &'a str,
    /// The content including its enclosing braces.
    pub content: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Scan the top level of `text` for plural items, left to right.
///
/// Any token made of `=` and ASCII alphanumerics is accepted here; category
/// validation happens later. Text that is not part of an item is skipped and
/// shows up in [`residual`].
pub fn scan_items(text: &str) -> Vec<PluralItem<'_>> {
    let mut items = Vec::new();
    let mut pos = 0;
    while let Some(code) = text[pos..].chars().next() {
        if !chars::is_whitespace(code) {
            if let Some(item) = match_item_at(text, pos) {
                pos = item.end;
                items.push(item);
                continue;
            }
        }
        pos += code.len_utf8();
    }
    items
}

/// Whether `text` holds an exact-match numeric item (`=<digits> {...}`)
/// anywhere, nested content included.
pub fn contains_numeric_item(text: &str) -> bool {
    text.match_indices(chars::EQ).any(|(pos, _)| {
        match_item_at(text, pos).is_some_and(|item| {
            item.token.len() > 1 && item.token[1..].bytes().all(|b| b.is_ascii_digit())
        })
    })
}

/// Whatever is left of `text` once every item is cut out, with escaped
/// newlines and tabs unescaped and surrounding whitespace trimmed.
pub fn residual(text: &str, items: &[PluralItem<'_>]) -> String {
    let mut remaining = String::with_capacity(text.len());
    let mut pos = 0;
    for item in items {
        remaining.push_str(&text[pos..item.start]);
        pos = item.end;
    }
    remaining.push_str(&text[pos..]);

    remaining
        .replace("\\n", "\n")
        .replace("\\t", "\t")
        .trim_matches(chars::is_whitespace)
        .to_string()
}

/// Try to read an item starting exactly at `pos`.
pub fn match_item_at(text: &str, pos: usize) -> Option<PluralItem<'_>> {
    let token_len = text[pos..]
        .find(|c: char| !chars::is_token_char(c))
        .unwrap_or(text.len() - pos);
    if token_len == 0 {
        return None;
    }
    let token_end = pos + token_len;

    let brace = token_end
        + text[token_end..]
            .find(|c: char| !chars::is_whitespace(c))
            .unwrap_or(text.len() - token_end);
    if !text[brace..].starts_with(chars::LBRACE) {
        return None;
    }
    let end = find_balanced_end(text, brace)?;

    Some(PluralItem {
        token: &text[pos..token_end],
        content: &text[brace..end],
        start: pos,
        end,
    })
}

/// Given the offset of a `{`, return the offset just past its matching `}`.
pub fn find_balanced_end(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, code) in text[open..].char_indices() {
        match code {
            chars::LBRACE => depth += 1,
            chars::RBRACE => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(open + offset + code.len_utf8());
                }
            }
            _ => {}
        }
    }
    None
}
