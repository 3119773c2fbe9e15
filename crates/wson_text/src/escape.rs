use alloc::borrow::Cow;
use alloc::string::String;

use crate::EscapeError;

/// Introduces an escape sequence.
pub(crate) const QUOTE: u8 = b'`';

/// Escape code of a special character.
#[inline]
pub(crate) const fn escape_code(c: u8) -> Option<u8> {
    match c {
        b'{' => Some(b'o'),
        b'}' => Some(b'c'),
        b'[' => Some(b'a'),
        b']' => Some(b'e'),
        b':' => Some(b'i'),
        b'#' => Some(b'l'),
        b'|' => Some(b'p'),
        b'`' => Some(b'q'),
        _ => None,
    }
}

/// Special character of an escape code.
#[inline]
pub(crate) const fn unescape_code(c: u8) -> Option<u8> {
    match c {
        b'o' => Some(b'{'),
        b'c' => Some(b'}'),
        b'a' => Some(b'['),
        b'e' => Some(b']'),
        b'i' => Some(b':'),
        b'l' => Some(b'#'),
        b'p' => Some(b'|'),
        b'q' => Some(b'`'),
        _ => None,
    }
}

/// Escapes the special characters of `s`.
///
/// Borrows `s` when nothing needs escaping.
///
/// # Examples
///
/// ```
/// assert_eq!(wson_text::escape("plain"), "plain");
/// assert_eq!(wson_text::escape("a:b|c"), "a`ib`pc");
/// assert_eq!(wson_text::escape("`{}`"), "`q`o`c`q");
/// ```
pub fn escape(s: &str) -> Cow<'_, str> {
    if s.bytes().any(|c| escape_code(c).is_some()) {
        let mut out = String::with_capacity(s.len() + 8);
        escape_into(&mut out, s);
        Cow::Owned(out)
    } else {
        Cow::Borrowed(s)
    }
}

/// Appends the escaped form of `s` to `out`.
pub fn escape_into(out: &mut String, s: &str) {
    let mut start = 0;
    for (index, c) in s.bytes().enumerate() {
        if let Some(code) = escape_code(c) {
            out.push_str(&s[start..index]);
            out.push(QUOTE as char);
            out.push(code as char);
            start = index + 1;
        }
    }
    out.push_str(&s[start..]);
}

/// Reverses [`escape`].
///
/// # Examples
///
/// ```
/// assert_eq!(wson_text::unescape("a`ib").unwrap(), "a:b");
/// assert_eq!(wson_text::unescape("bad`x").unwrap_err().pos, 4);
/// ```
pub fn unescape(s: &str) -> Result<Cow<'_, str>, EscapeError> {
    if !s.as_bytes().contains(&QUOTE) {
        return Ok(Cow::Borrowed(s));
    }

    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut start = 0;
    let mut index = 0;
    while index < bytes.len() {
        if bytes[index] == QUOTE {
            out.push_str(&s[start..index]);
            let Some(&code) = bytes.get(index + 1) else {
                return Err(EscapeError { pos: index + 1 });
            };
            let Some(c) = unescape_code(code) else {
                return Err(EscapeError { pos: index + 1 });
            };
            out.push(c as char);
            index += 2;
            start = index;
        } else {
            index += 1;
        }
    }
    out.push_str(&s[start..]);
    Ok(Cow::Owned(out))
}

// -----------------------------------------------------------------------------
// Tests
