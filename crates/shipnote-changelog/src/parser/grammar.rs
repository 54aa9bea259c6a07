//! Entry grammar
//!
//! ```text
//! entry   = "-" ws+ owner? description pair
//! owner   = "@" handle ws+
//! handle  = (alnum | "_" | "-")+
//! pair    = "#" digit+ "(" prefix url-char+ ")"
//! ```
//!
//! Matching runs in two passes. [`split_candidates`] cuts the entries region
//! into one candidate per dash line, each ending at its first reference pair
//! or before the next dash line. [`decompose`] then splits a single candidate
//! into its fields. Bounding candidates by dash lines first keeps a wrapped
//! description from running into the following entry, and cutting at the
//! first pair keeps `#digits` or parentheses inside descriptions harmless.

use super::types::{Candidate, DecomposeError, RawEntry, ReferencePair};

/// Byte cursor over a string slice
struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn at(src: &'a str, pos: usize) -> Self {
        Self { src, pos }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.bump();
        }
        &self.src[start..self.pos]
    }
}

fn is_handle_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Whether a line opens a new entry: optional indent, `-`, then whitespace
pub fn is_dash_line(line: &str) -> bool {
    let mut chars = line.trim_start().chars();
    chars.next() == Some('-') && chars.next().is_some_and(char::is_whitespace)
}

/// Find the first `#digits(prefix...)` pair in `text`
pub fn find_reference_pair<'a>(text: &'a str, url_prefix: &str) -> Option<ReferencePair<'a>> {
    let mut search_from = 0;
    while let Some(offset) = text[search_from..].find('#') {
        let start = search_from + offset;
        if let Some(pair) = parse_pair(text, start, url_prefix) {
            return Some(pair);
        }
        search_from = start + 1;
    }
    None
}

/// Parse a pair whose `#` sits at `start`
fn parse_pair<'a>(text: &'a str, start: usize, url_prefix: &str) -> Option<ReferencePair<'a>> {
    let mut cursor = Cursor::at(text, start);
    if !cursor.eat('#') {
        return None;
    }

    let code = cursor.eat_while(|c| c.is_ascii_digit());
    if code.is_empty() || !cursor.eat('(') {
        return None;
    }

    if !cursor.rest().starts_with(url_prefix) {
        return None;
    }
    let url = cursor.eat_while(|c| c != ')' && !c.is_whitespace());
    if url.len() <= url_prefix.len() || !cursor.eat(')') {
        return None;
    }

    Some(ReferencePair {
        start,
        end: cursor.pos,
        code,
        url,
    })
}

/// Coarse pass: one candidate per dash line.
///
/// A candidate spans its dash line and any continuation lines, and is cut
/// right after its first reference pair. Text before the first dash line is
/// not part of any candidate.
pub fn split_candidates<'a>(region: &'a str, url_prefix: &str) -> Vec<Candidate<'a>> {
    let mut starts: Vec<(usize, usize)> = Vec::new();
    let mut offset = 0;
    for (index, line) in region.split('\n').enumerate() {
        if is_dash_line(line) {
            let indent = line.len() - line.trim_start().len();
            starts.push((offset + indent, index + 1));
        }
        offset += line.len() + 1;
    }

    starts
        .iter()
        .enumerate()
        .map(|(i, &(start, line))| {
            let end = starts
                .get(i + 1)
                .map(|&(next, _)| next)
                .unwrap_or(region.len());
            let block = &region[start..end];
            let text = match find_reference_pair(block, url_prefix) {
                Some(pair) => &block[..pair.end],
                None => block.trim_end(),
            };
            Candidate { text, line }
        })
        .collect()
}

/// Fine pass: split one candidate into owner, description, code and URL
pub fn decompose<'a>(text: &'a str, url_prefix: &str) -> Result<RawEntry<'a>, DecomposeError> {
    let mut cursor = Cursor::new(text);
    cursor.eat_while(char::is_whitespace);

    if !cursor.eat('-') || cursor.eat_while(char::is_whitespace).is_empty() {
        return Err(DecomposeError::MissingDash);
    }

    let owner = parse_owner(&mut cursor)?;

    let body = cursor.rest();
    let pair = find_reference_pair(body, url_prefix).ok_or(DecomposeError::MissingReference)?;

    Ok(RawEntry {
        owner,
        description: &body[..pair.start],
        code: pair.code,
        url: pair.url,
    })
}

fn parse_owner<'a>(cursor: &mut Cursor<'a>) -> Result<Option<&'a str>, DecomposeError> {
    if cursor.peek() != Some('@') {
        return Ok(None);
    }

    let start = cursor.pos;
    cursor.bump();
    if cursor.eat_while(is_handle_char).is_empty() {
        return Err(DecomposeError::MalformedOwner);
    }
    let owner = &cursor.src[start..cursor.pos];

    if cursor.eat_while(char::is_whitespace).is_empty() {
        return Err(DecomposeError::MalformedOwner);
    }

    Ok(Some(owner))
}
