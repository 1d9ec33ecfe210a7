use thiserror::Error;

/// Quoting convention a string literal was lexed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    /// Single-quoted: only `\\` and `\'` are recognized escapes.
    Single,
    /// Double-quoted: full escape grammar (`\n`, `\t`, octal, `\xHH`,
    /// `\u{...}`, ...).
    Double,
}

impl QuoteStyle {
    fn quote_char(self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EscapeError {
    #[error("hex escape with no hex digits at byte {0}")]
    TruncatedHex(usize),
    #[error("malformed unicode escape at byte {0}")]
    MalformedUnicode(usize),
    #[error("escape at byte {0} is not a valid code point")]
    InvalidCodePoint(usize),
}

/// Decode a string-literal token into the characters it represents at
/// runtime. `raw` is the token exactly as lexed, including the surrounding
/// quotes. Fails on malformed escapes; a failed span is skipped by the
/// scanner, never the whole scan.
pub fn decode(raw: &str, style: QuoteStyle) -> Result<String, EscapeError> {
    decode_impl(strip_quotes(raw, style), style, false)
}

/// Infallible decode used only to seed the line counter. Identical to
/// `decode` except malformed escapes are kept verbatim instead of failing.
/// Escapes that decode to a newline produce a real newline, so a `\n`
/// written in source advances the count exactly like an embedded newline.
pub fn decode_for_line_count(raw: &str, style: QuoteStyle) -> String {
    match decode_impl(strip_quotes(raw, style), style, true) {
        Ok(decoded) => decoded,
        // lenient mode never returns Err
        Err(_) => strip_quotes(raw, style).to_string(),
    }
}

fn strip_quotes(raw: &str, style: QuoteStyle) -> &str {
    let quote = style.quote_char();
    let body = raw.strip_prefix(quote).unwrap_or(raw);
    body.strip_suffix(quote).unwrap_or(body)
}

fn decode_impl(body: &str, style: QuoteStyle, lenient: bool) -> Result<String, EscapeError> {
    let mut out = String::with_capacity(body.len());
    let mut i = 0;

    while let Some(rel) = body[i..].find('\\') {
        let esc = i + rel;
        out.push_str(&body[i..esc]);

        let rest = &body[esc + 1..];
        let next = match rest.chars().next() {
            Some(c) => c,
            None => {
                // trailing lone backslash
                out.push('\\');
                i = esc + 1;
                continue;
            }
        };

        match style {
            QuoteStyle::Single => {
                match next {
                    '\\' | '\'' => {
                        out.push(next);
                        i = esc + 2;
                    }
                    _ => {
                        // backslash stays literal, `next` is consumed on
                        // the following iteration
                        out.push('\\');
                        i = esc + 1;
                    }
                }
            }
            QuoteStyle::Double => {
                i = match decode_double_escape(&mut out, rest, esc, lenient) {
                    Ok(consumed) => esc + 1 + consumed,
                    Err(e) => return Err(e),
                };
            }
        }
    }

    out.push_str(&body[i..]);
    Ok(out)
}

/// Decode one escape body (the text after the backslash) for the
/// double-quoted grammar, appending to `out`. Returns the number of bytes
/// of `rest` consumed.
fn decode_double_escape(
    out: &mut String,
    rest: &str,
    esc_offset: usize,
    lenient: bool,
) -> Result<usize, EscapeError> {
    let next = rest.chars().next().unwrap_or('\\');
    match next {
        'n' => {
            out.push('\n');
            Ok(1)
        }
        'r' => {
            out.push('\r');
            Ok(1)
        }
        't' => {
            out.push('\t');
            Ok(1)
        }
        'v' => {
            out.push('\u{0B}');
            Ok(1)
        }
        'f' => {
            out.push('\u{0C}');
            Ok(1)
        }
        'e' => {
            out.push('\u{1B}');
            Ok(1)
        }
        '\\' | '$' | '"' => {
            out.push(next);
            Ok(1)
        }
        '0'..='7' => {
            // up to three octal digits, value truncated to a byte
            let digits: String = rest
                .chars()
                .take(3)
                .take_while(|c| ('0'..='7').contains(c))
                .collect();
            let value = u32::from_str_radix(&digits, 8).unwrap_or(0) & 0xFF;
            out.push(char::from_u32(value).unwrap_or('\u{FFFD}'));
            Ok(digits.len())
        }
        'x' => {
            let digits: String = rest[1..]
                .chars()
                .take(2)
                .take_while(|c| c.is_ascii_hexdigit())
                .collect();
            if digits.is_empty() {
                if lenient {
                    out.push_str("\\x");
                    return Ok(1);
                }
                return Err(EscapeError::TruncatedHex(esc_offset));
            }
            let value = u32::from_str_radix(&digits, 16).unwrap_or(0);
            out.push(char::from_u32(value).unwrap_or('\u{FFFD}'));
            Ok(1 + digits.len())
        }
        'u' => {
            if !rest[1..].starts_with('{') {
                // `\u` without a brace is not an escape, keep it literal
                out.push('\\');
                return Ok(0);
            }
            match decode_unicode_escape(&rest[2..], esc_offset) {
                Ok((ch, digit_len)) => {
                    out.push(ch);
                    // 'u' + '{' + digits + '}'
                    Ok(2 + digit_len + 1)
                }
                Err(e) => {
                    if lenient {
                        out.push_str("\\u");
                        return Ok(1);
                    }
                    Err(e)
                }
            }
        }
        other => {
            // unknown escapes keep the backslash and the character
            out.push('\\');
            out.push(other);
            Ok(other.len_utf8())
        }
    }
}

fn decode_unicode_escape(body: &str, esc_offset: usize) -> Result<(char, usize), EscapeError> {
    let close = body
        .find('}')
        .ok_or(EscapeError::MalformedUnicode(esc_offset))?;
    let digits = &body[..close];
    if digits.is_empty() || digits.len() > 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(EscapeError::MalformedUnicode(esc_offset));
    }
    let value =
        u32::from_str_radix(digits, 16).map_err(|_| EscapeError::MalformedUnicode(esc_offset))?;
    let ch = char::from_u32(value).ok_or(EscapeError::InvalidCodePoint(esc_offset))?;
    Ok((ch, digits.len()))
}
