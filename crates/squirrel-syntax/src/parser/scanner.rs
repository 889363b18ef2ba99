//! Hand-written scanners for tokens whose extent depends on their content.
//!
//! Logos recognizes only the opener of these tokens (`/*`, `//`, `"`, `@"`, `'`).
//! Each scanner receives the source starting at that opener and reports how many
//! bytes the whole token spans. Returned lengths always fall on char boundaries:
//! scanning stops only right after an ASCII delimiter or at the end of input.
//!
//! All scanners are iterative, so arbitrarily long comments and strings
//! cost no stack.

/// Extent of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scanned {
    pub len: usize,
    /// `false` when input ended before the closing delimiter.
    pub terminated: bool,
}

impl Scanned {
    fn closed(len: usize) -> Self {
        Self {
            len,
            terminated: true,
        }
    }

    fn open(len: usize) -> Self {
        Self {
            len,
            terminated: false,
        }
    }
}

/// `/* ... */`. A `*` not followed by `/` stays part of the body.
pub fn block_comment(text: &str) -> Scanned {
    debug_assert!(text.starts_with("/*"));

    #[derive(Clone, Copy)]
    enum State {
        Body,
        Star,
    }

    let mut state = State::Body;
    for (i, &b) in text.as_bytes().iter().enumerate().skip(2) {
        state = match (state, b) {
            (State::Star, b'/') => return Scanned::closed(i + 1),
            (_, b'*') => State::Star,
            _ => State::Body,
        };
    }
    Scanned::open(text.len())
}

/// `// ...` up to (not including) the line break.
/// A backslash continues the comment onto the next line.
pub fn line_comment(text: &str) -> usize {
    debug_assert!(text.starts_with("//"));

    let bytes = text.as_bytes();
    let mut i = 2;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 1;
                if bytes.get(i) == Some(&b'\r') && bytes.get(i + 1) == Some(&b'\n') {
                    i += 2;
                } else if i < bytes.len() {
                    i += 1;
                }
            }
            b'\n' => return i,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// `"..."` with backslash escapes. Escapes are skipped here and validated
/// by the literal decoder.
pub fn string(text: &str) -> Scanned {
    debug_assert!(text.starts_with('"'));

    let bytes = text.as_bytes();
    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Scanned::closed(i + 1),
            _ => i += 1,
        }
    }
    Scanned::open(bytes.len())
}

/// `@"..."`: no escapes, line breaks are content, `""` stands for one quote.
pub fn verbatim_string(text: &str) -> Scanned {
    debug_assert!(text.starts_with("@\""));

    #[derive(Clone, Copy)]
    enum State {
        Body,
        /// Saw a quote that is either the closer or the first half of `""`.
        Quote,
    }

    let mut state = State::Body;
    for (i, &b) in text.as_bytes().iter().enumerate().skip(2) {
        state = match (state, b) {
            (State::Body, b'"') => State::Quote,
            (State::Body, _) => State::Body,
            (State::Quote, b'"') => State::Body,
            (State::Quote, _) => return Scanned::closed(i),
        };
    }
    match state {
        State::Quote => Scanned::closed(text.len()),
        State::Body => Scanned::open(text.len()),
    }
}

/// `'x'` or `'\esc'`. Scans to the closing quote on the same line; the decoder
/// decides whether the body is exactly one character.
pub fn char_literal(text: &str) -> Scanned {
    debug_assert!(text.starts_with('\''));

    let bytes = text.as_bytes();
    let mut i = 1;
    if bytes.get(i) == Some(&b'\\') {
        i += 2;
    }
    while i < bytes.len() {
        match bytes[i] {
            b'\'' => return Scanned::closed(i + 1),
            b'\n' => return Scanned::open(i),
            _ => i += 1,
        }
    }
    Scanned::open(bytes.len().min(i))
}

/// Legacy integer form `'''…'''`. Returns `None` when the text does not
/// contain a complete single-line instance, in which case the opener is a
/// plain char literal.
pub fn quoted_integer(text: &str) -> Option<usize> {
    let body = text.strip_prefix("'''")?;
    let end = body.find("'''")?;
    let content = &body[..end];
    if content.is_empty() || content.contains('\n') {
        return None;
    }
    Some(end + 6)
}
