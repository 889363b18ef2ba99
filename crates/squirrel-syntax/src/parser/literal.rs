//! Decoding of literal token text into values.
//!
//! The lexer runs these decoders once to validate literal tokens; the typed AST
//! runs them again on demand to expose values. Offsets in [`LiteralError`] are
//! relative to the start of the decoded text.

/// Notation an integer literal was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    Decimal,
    Hexadecimal,
    Octal,
    /// Legacy `'''…'''` form: the bytes between the quotes, big-endian.
    Quoted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntegerValue {
    pub value: i64,
    pub radix: Radix,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LiteralError {
    #[error("invalid escape sequence `{text}`")]
    InvalidEscape {
        offset: usize,
        len: usize,
        text: String,
    },

    #[error("char literal must contain exactly one character")]
    InvalidChar,

    #[error("integer literal `{0}` does not fit in 64 bits")]
    IntegerOverflow(String),

    #[error("malformed {0} literal")]
    Malformed(&'static str),
}

impl LiteralError {
    /// Byte range of the offending part, relative to the decoded text.
    pub fn span(&self, text_len: usize) -> (usize, usize) {
        match self {
            LiteralError::InvalidEscape { offset, len, .. } => (*offset, *len),
            _ => (0, text_len),
        }
    }
}

pub fn decode_integer(text: &str) -> Result<IntegerValue, LiteralError> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    if let Some(body) = digits
        .strip_prefix("'''")
        .and_then(|rest| rest.strip_suffix("'''"))
    {
        if body.is_empty() {
            return Err(LiteralError::Malformed("integer"));
        }
        let value = body
            .bytes()
            .fold(0i64, |acc, b| acc.wrapping_shl(8) | i64::from(b));
        return Ok(IntegerValue {
            value: apply_sign(negative, value),
            radix: Radix::Quoted,
        });
    }

    if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        let value = fold_digits(hex, 16)?;
        return Ok(IntegerValue {
            value: apply_sign(negative, value),
            radix: Radix::Hexadecimal,
        });
    }

    if digits.len() > 1 && digits.starts_with('0') {
        let value = fold_digits(&digits[1..], 8)?;
        return Ok(IntegerValue {
            value: apply_sign(negative, value),
            radix: Radix::Octal,
        });
    }

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LiteralError::Malformed("integer"));
    }
    let magnitude: i128 = digits
        .parse()
        .map_err(|_| LiteralError::IntegerOverflow(text.to_string()))?;
    let signed = if negative { -magnitude } else { magnitude };
    let value =
        i64::try_from(signed).map_err(|_| LiteralError::IntegerOverflow(text.to_string()))?;
    Ok(IntegerValue {
        value,
        radix: Radix::Decimal,
    })
}

/// Hexadecimal and octal literals wrap around on overflow.
fn fold_digits(digits: &str, radix: u32) -> Result<i64, LiteralError> {
    if digits.is_empty() {
        return Err(LiteralError::Malformed("integer"));
    }
    digits.chars().try_fold(0i64, |acc, c| {
        let d = c
            .to_digit(radix)
            .ok_or(LiteralError::Malformed("integer"))?;
        Ok(acc.wrapping_mul(i64::from(radix)).wrapping_add(i64::from(d)))
    })
}

fn apply_sign(negative: bool, value: i64) -> i64 {
    if negative { value.wrapping_neg() } else { value }
}

/// Accepts `1.5`, `-1.5` and the exponent form `1.e5`.
pub fn decode_float(text: &str) -> Result<f64, LiteralError> {
    let normalized = match text.find(['e', 'E']) {
        Some(pos) if text[..pos].ends_with('.') => format!("{}0{}", &text[..pos], &text[pos..]),
        _ => text.to_string(),
    };
    normalized
        .parse()
        .map_err(|_| LiteralError::Malformed("float"))
}

/// Decodes one escape sequence at the start of `text` (which begins with `\`).
/// Returns the character and the number of bytes consumed.
pub fn decode_escape(text: &str) -> Result<(char, usize), LiteralError> {
    debug_assert!(text.starts_with('\\'));

    let invalid = |len: usize| LiteralError::InvalidEscape {
        offset: 0,
        len,
        text: text[..len].to_string(),
    };

    let Some(c) = text[1..].chars().next() else {
        return Err(invalid(1));
    };

    let simple = match c {
        'a' => Some('\x07'),
        'b' => Some('\x08'),
        'f' => Some('\x0C'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'v' => Some('\x0B'),
        '\'' | '"' | '\\' | '?' => Some(c),
        _ => None,
    };
    if let Some(decoded) = simple {
        return Ok((decoded, 2));
    }

    match c {
        '0'..='7' => {
            let digits = text[1..]
                .bytes()
                .take(3)
                .take_while(|b| (b'0'..=b'7').contains(b))
                .count();
            let value = u32::from_str_radix(&text[1..1 + digits], 8).map_err(|_| invalid(1 + digits))?;
            let decoded = char::from_u32(value).ok_or_else(|| invalid(1 + digits))?;
            Ok((decoded, 1 + digits))
        }
        'x' => {
            let digits = count_hex(&text[2..], 2);
            if digits < 2 {
                return Err(invalid(2 + digits));
            }
            let value = u32::from_str_radix(&text[2..4], 16).map_err(|_| invalid(4))?;
            let decoded = char::from_u32(value).ok_or_else(|| invalid(4))?;
            Ok((decoded, 4))
        }
        'u' if text[2..].starts_with('{') => {
            let digits = count_hex(&text[3..], usize::MAX);
            let close = 3 + digits;
            if digits == 0 || !text[close..].starts_with('}') {
                return Err(invalid(close.min(text.len())));
            }
            let len = close + 1;
            let value = u32::from_str_radix(&text[3..close], 16).map_err(|_| invalid(len))?;
            let decoded = char::from_u32(value).ok_or_else(|| invalid(len))?;
            Ok((decoded, len))
        }
        'u' => {
            let digits = count_hex(&text[2..], 4);
            if digits < 4 {
                return Err(invalid(2 + digits));
            }
            let value = u32::from_str_radix(&text[2..6], 16).map_err(|_| invalid(6))?;
            let decoded = char::from_u32(value).ok_or_else(|| invalid(6))?;
            Ok((decoded, 6))
        }
        // Any other character stands for itself.
        _ => Ok((c, 1 + c.len_utf8())),
    }
}

fn count_hex(text: &str, max: usize) -> usize {
    text.bytes()
        .take(max)
        .take_while(|b| b.is_ascii_hexdigit())
        .count()
}

/// Decodes the body of a quoted string token, including its quotes.
pub fn decode_string(text: &str) -> Result<String, LiteralError> {
    let body = text
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(LiteralError::Malformed("string"))?;
    decode_escaped(body, 1)
}

fn decode_escaped(body: &str, base: usize) -> Result<String, LiteralError> {
    let mut out = String::with_capacity(body.len());
    let mut i = 0;
    while i < body.len() {
        let rest = &body[i..];
        if rest.starts_with('\\') {
            let (c, len) = decode_escape(rest).map_err(|err| shift(err, base + i))?;
            out.push(c);
            i += len;
        } else {
            let c = rest.chars().next().unwrap_or_default();
            out.push(c);
            i += c.len_utf8();
        }
    }
    Ok(out)
}

fn shift(err: LiteralError, by: usize) -> LiteralError {
    match err {
        LiteralError::InvalidEscape { offset, len, text } => LiteralError::InvalidEscape {
            offset: offset + by,
            len,
            text,
        },
        other => other,
    }
}

/// Decodes a char token like `'a'` or `'\n'`.
pub fn decode_char(text: &str) -> Result<char, LiteralError> {
    let body = text
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .ok_or(LiteralError::Malformed("char"))?;

    if body.starts_with('\\') {
        let (c, len) = decode_escape(body).map_err(|err| shift(err, 1))?;
        if len != body.len() {
            return Err(LiteralError::InvalidChar);
        }
        return Ok(c);
    }

    let mut chars = body.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(LiteralError::InvalidChar),
    }
}

/// Raw content of a verbatim string token, exactly as written between the delimiters.
pub fn verbatim_content(text: &str) -> &str {
    let body = text.strip_prefix("@\"").unwrap_or(text);
    body.strip_suffix('"').unwrap_or(body)
}

/// Value of a verbatim string: its content with each `""` collapsed to `"`.
pub fn decode_verbatim(text: &str) -> Result<String, LiteralError> {
    if !text.starts_with("@\"") || text.len() < 3 || !text.ends_with('"') {
        return Err(LiteralError::Malformed("verbatim string"));
    }
    Ok(verbatim_content(text).replace("\"\"", "\""))
}
