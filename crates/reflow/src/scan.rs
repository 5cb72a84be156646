//! Scanner that classifies console text into spans.
//!
//! A single left-to-right pass splits the input into words, blank runs,
//! explicit line breaks, markup tags, and bare URLs. Classification
//! never fails: anything that does not form a well-formed tag or URL is
//! plain text.

use crate::span::{Span, SpanKind};

/// Scanner for markup-tagged console text.
///
/// Yields [`Span`]s that partition the input exactly — concatenating
/// every span's text in order reproduces the input byte-for-byte.
///
/// # Examples
///
/// ```
/// use reflow::scan::Scanner;
/// use reflow::span::SpanKind;
///
/// let spans: Vec<_> = Scanner::new("<info>ok</info>").collect();
/// assert_eq!(spans.len(), 3);
/// assert_eq!(spans[0].kind, SpanKind::Tag);
/// assert_eq!(spans[1].text, "ok");
/// ```
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    /// A URL detected mid-word; handed out on the next call.
    pending: Option<Span<'a>>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner over the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            pending: None,
        }
    }

    /// Get the remaining input.
    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Consume one explicit line break (`\r\n` or `\n`).
    fn consume_newline(&mut self) -> Span<'a> {
        let start = self.pos;
        let len = if self.remaining().starts_with("\r\n") {
            2
        } else {
            1
        };
        self.pos += len;
        Span::new(SpanKind::Newline, start, &self.input[start..self.pos])
    }

    /// Consume a run of blank characters, stopping before any line break.
    fn consume_space(&mut self) -> Span<'a> {
        let start = self.pos;
        while self.pos < self.input.len() {
            let rest = self.remaining();
            if rest.starts_with('\n') || rest.starts_with("\r\n") {
                break;
            }
            match rest.chars().next() {
                Some(c) if c.is_whitespace() => self.pos += c.len_utf8(),
                _ => break,
            }
        }
        Span::new(SpanKind::Space, start, &self.input[start..self.pos])
    }

    /// Consume a plain run, splitting out a URL when one starts inside it.
    ///
    /// The run ends at whitespace or at a `<` that opens a well-formed
    /// tag. When `scheme://` is found, the scheme is the maximal letter
    /// run ending at the colon; any word prefix before it is emitted
    /// first and the URL is parked in `pending`.
    fn consume_plain(&mut self) -> Span<'a> {
        let start = self.pos;
        while self.pos < self.input.len() {
            let rest = self.remaining();
            let c = match rest.chars().next() {
                Some(c) => c,
                None => break,
            };
            if c.is_whitespace() {
                break;
            }
            if c == '<' && tag_len(rest).is_some() {
                break;
            }
            if rest.starts_with("://") {
                let scheme_start = scheme_start(self.input, start, self.pos);
                if scheme_start < self.pos {
                    let end = url_end(self.input, self.pos);
                    self.pos = end;
                    let url =
                        Span::new(SpanKind::Url, scheme_start, &self.input[scheme_start..end]);
                    if scheme_start > start {
                        self.pending = Some(url);
                        return Span::new(
                            SpanKind::Word,
                            start,
                            &self.input[start..scheme_start],
                        );
                    }
                    return url;
                }
            }
            self.pos += c.len_utf8();
        }
        Span::new(SpanKind::Word, start, &self.input[start..self.pos])
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(span) = self.pending.take() {
            return Some(span);
        }
        if self.pos >= self.input.len() {
            return None;
        }

        let rest = self.remaining();
        if rest.starts_with('\n') || rest.starts_with("\r\n") {
            return Some(self.consume_newline());
        }
        match rest.chars().next() {
            Some(c) if c.is_whitespace() => Some(self.consume_space()),
            Some('<') if tag_len(rest).is_some() => {
                let start = self.pos;
                let len = tag_len(rest).unwrap_or(0);
                self.pos += len;
                Some(Span::new(SpanKind::Tag, start, &self.input[start..self.pos]))
            }
            Some(_) => Some(self.consume_plain()),
            None => None,
        }
    }
}

/// Convenience entry point: scan the whole input into a vector.
///
/// # Examples
///
/// ```
/// use reflow::scan::scan;
///
/// let spans = scan("Visit https://example.com now");
/// assert_eq!(spans.len(), 5);
/// ```
pub fn scan(input: &str) -> Vec<Span<'_>> {
    Scanner::new(input).collect()
}

/// Byte length of a well-formed tag at the start of `rest`, or `None`.
///
/// The grammar is `<name …>` / `</name …>` / `</>`: an optional slash,
/// a name of ASCII letters (required for opening tags), then an opaque
/// remainder up to `>`. A tag may not contain `<` or a line break; when
/// matching fails the leading `<` is plain text.
fn tag_len(rest: &str) -> Option<usize> {
    let body = rest.strip_prefix('<')?;
    let (closing, body) = match body.strip_prefix('/') {
        Some(after) => (true, after),
        None => (false, body),
    };

    let name_len = body.chars().take_while(|c| c.is_ascii_alphabetic()).count();
    if name_len == 0 && !closing {
        return None;
    }

    for (idx, c) in body[name_len..].char_indices() {
        match c {
            '>' => {
                let slash = if closing { 1 } else { 0 };
                return Some(1 + slash + name_len + idx + 1);
            }
            '<' | '\n' | '\r' => return None,
            _ => {}
        }
    }
    None
}

/// Start of the scheme: walk back over the letter run ending at `colon`.
fn scheme_start(input: &str, word_start: usize, colon: usize) -> usize {
    let bytes = input.as_bytes();
    let mut i = colon;
    while i > word_start && bytes[i - 1].is_ascii_alphabetic() {
        i -= 1;
    }
    i
}

/// End of a URL beginning at `colon` (the `://` position): everything up
/// to whitespace or a `<` that opens a well-formed tag.
fn url_end(input: &str, colon: usize) -> usize {
    let mut pos = colon + 3;
    while pos < input.len() {
        let rest = &input[pos..];
        let c = match rest.chars().next() {
            Some(c) => c,
            None => break,
        };
        if c.is_whitespace() {
            break;
        }
        if c == '<' && tag_len(rest).is_some() {
            break;
        }
        pos += c.len_utf8();
    }
    pos
}
