//! JSDoc-style tag parser — one doc block in, one [`FunctionRecord`] out.
//!
//! Every line is classified on its own by [`classify`]; [`parse_block`]
//! folds the classified lines into the record. Recognized tags:
//!
//! - `@name <name>`
//! - `@param <key> [description]`
//! - `@method <signature> [description]`
//! - `@return <text>`
//!
//! Any other gutter line (`* text`) is description.

use crate::model::FunctionRecord;

/// Classification of a single doc block line.
#[derive(Debug, PartialEq, Eq)]
pub enum Line<'a> {
    Description(&'a str),
    /// A bare `*` gutter line.
    Blank,
    Name(&'a str),
    Param { key: &'a str, text: &'a str },
    Method { signature: &'a str, text: &'a str },
    Return(&'a str),
    /// Delimiters, lines without a `* ` gutter, unknown or empty tags.
    Ignored,
}

/// Classify one line of a doc block.
///
/// Payloads keep their trailing whitespace; only a CRLF `\r` is dropped.
pub fn classify(line: &str) -> Line<'_> {
    let line = line.trim_start();
    let line = line.strip_suffix('\r').unwrap_or(line);
    let Some(rest) = line.strip_prefix('*') else {
        return Line::Ignored;
    };
    if rest.trim().is_empty() {
        return Line::Blank;
    }
    // `*/`, `**`, `*foo`: no gutter
    if !rest.starts_with(char::is_whitespace) {
        return Line::Ignored;
    }

    let body = rest.trim_start_matches(|c: char| c == '*' || c.is_whitespace());
    if body.is_empty() {
        return Line::Blank;
    }
    if !body.starts_with('@') {
        return Line::Description(body);
    }

    let (tag, payload) = split_first_word(body);
    if payload.is_empty() {
        return Line::Ignored;
    }
    match tag {
        "@name" => Line::Name(payload),
        "@param" => {
            let (key, text) = split_first_word(payload);
            Line::Param { key, text }
        }
        "@method" => {
            let (signature, text) = split_first_word(payload);
            Line::Method { signature, text }
        }
        "@return" => Line::Return(payload),
        _ => Line::Ignored,
    }
}

/// Split at the first whitespace run: `"key some text"` → `("key", "some text")`.
fn split_first_word(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(idx) => (&s[..idx], s[idx..].trim_start()),
        None => (s, ""),
    }
}

/// Parse a raw doc block (delimiters included) into a record.
///
/// Description lines keep their line terminator. Blank gutter lines count
/// as empty description lines once the description has started, up to the
/// first tag line; after that they are dropped.
pub fn parse_block(block: &str) -> FunctionRecord {
    let mut record = FunctionRecord::default();
    let mut seen_tag = false;

    for raw in block.split('\n') {
        match classify(raw) {
            Line::Description(text) => {
                record.description.push_str(text);
                record.description.push('\n');
            }
            Line::Blank => {
                if !seen_tag && !record.description.is_empty() {
                    record.description.push('\n');
                }
            }
            Line::Name(name) => {
                seen_tag = true;
                record.name = name.to_string();
            }
            Line::Param { key, text } => {
                seen_tag = true;
                record.params.insert(key.to_string(), text.to_string());
            }
            Line::Method { signature, text } => {
                seen_tag = true;
                record.methods.insert(signature.to_string(), text.to_string());
            }
            Line::Return(text) => {
                seen_tag = true;
                record.returns = text.to_string();
            }
            Line::Ignored => {}
        }
    }

    record
}
