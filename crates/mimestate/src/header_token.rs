use bstr::BString;
use std::ops::Range;

/// The tspecials set from RFC 2045, used when lexing structured
/// Content-* header values with `;` separated parameters.
pub const RFC2045_TSPECIALS: &[u8] = b"()<>@,;:\\\"/[]?=";

/// The specials set from RFC 822, used when no other set is supplied.
pub const RFC822_SPECIALS: &[u8] = b"()<>@,;:\\\".[]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderTokenKind {
    /// A word
    Token,
    /// A quoted string; the value is the unquoted text
    QuotedString,
    /// A single special character
    Special(u8),
}

/// One lexed token. The value bytes live in the scratch buffer that
/// was passed to `header_token`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderToken {
    pub kind: HeaderTokenKind,
    span: Range<usize>,
}

impl HeaderToken {
    pub fn value<'a>(&self, scratch: &'a [u8]) -> &'a [u8] {
        &scratch[self.span.clone()]
    }

    pub fn is_special(&self, c: u8) -> bool {
        self.kind == HeaderTokenKind::Special(c)
    }
}

/// Lex up to `max` tokens from the front of `*cursor`, advancing the
/// cursor past the consumed text.
///
/// Linear whitespace and RFC 822 comments are skipped. A `"` begins a
/// quoted string whose value is stored unquoted; a byte from
/// `tspecials` forms a single-character token; any other run of bytes
/// forms a word token. When `separator` is reached outside a quoted
/// string or comment it is consumed and lexing stops, so repeated
/// calls walk separator-delimited groups.
///
/// Token values are appended to `scratch`, which is cleared on entry
/// and must outlive the returned tokens. Returns the number of tokens
/// found, or `None` when the cursor was already at the end of input.
pub fn header_token(
    tokens: &mut Vec<HeaderToken>,
    max: usize,
    scratch: &mut BString,
    cursor: &mut &[u8],
    tspecials: Option<&[u8]>,
    separator: Option<u8>,
) -> Option<usize> {
    let specials = tspecials.unwrap_or(RFC822_SPECIALS);
    tokens.clear();
    scratch.clear();

    let mut input = *cursor;
    let mut exhausted = false;
    let mut saw_separator = false;

    loop {
        while input.first().is_some_and(|b| b.is_ascii_whitespace()) {
            input = &input[1..];
        }
        let Some(&c) = input.first() else {
            exhausted = true;
            break;
        };
        if Some(c) == separator {
            input = &input[1..];
            saw_separator = true;
            break;
        }
        if c == b'(' {
            skip_comment(&mut input);
            continue;
        }
        if tokens.len() >= max {
            break;
        }
        if c == b'"' {
            input = &input[1..];
            let start = scratch.len();
            lex_quoted_string(&mut input, scratch);
            tokens.push(HeaderToken {
                kind: HeaderTokenKind::QuotedString,
                span: start..scratch.len(),
            });
            continue;
        }
        if specials.contains(&c) {
            let start = scratch.len();
            scratch.push(c);
            tokens.push(HeaderToken {
                kind: HeaderTokenKind::Special(c),
                span: start..scratch.len(),
            });
            input = &input[1..];
            continue;
        }
        let start = scratch.len();
        while let Some(&c) = input.first() {
            if c.is_ascii_whitespace()
                || Some(c) == separator
                || c == b'('
                || c == b'"'
                || specials.contains(&c)
            {
                break;
            }
            scratch.push(c);
            input = &input[1..];
        }
        tokens.push(HeaderToken {
            kind: HeaderTokenKind::Token,
            span: start..scratch.len(),
        });
    }

    *cursor = input;
    if tokens.is_empty() && exhausted && !saw_separator {
        None
    } else {
        Some(tokens.len())
    }
}

/// Skip a parenthesized comment, honoring nesting and backslash
/// escapes. The cursor starts at the opening parenthesis.
fn skip_comment(input: &mut &[u8]) {
    let mut depth = 0usize;
    while let Some(&c) = input.first() {
        *input = &input[1..];
        match c {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return;
                }
            }
            b'\\' => {
                if !input.is_empty() {
                    *input = &input[1..];
                }
            }
            _ => {}
        }
    }
}

/// Consume up to the closing quote, appending the unquoted value to
/// `scratch`. CR and LF are dropped so that folded values come out as
/// one run of text. The cursor starts just past the opening quote.
fn lex_quoted_string(input: &mut &[u8], scratch: &mut BString) {
    while let Some(&c) = input.first() {
        *input = &input[1..];
        match c {
            b'"' => return,
            b'\\' => {
                if let Some(&escaped) = input.first() {
                    scratch.push(escaped);
                    *input = &input[1..];
                }
            }
            b'\r' | b'\n' => {}
            _ => scratch.push(c),
        }
    }
}
