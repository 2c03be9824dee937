use std::collections::BTreeMap;
use std::fmt;

use crate::header::{is_print_ascii, Token};

/// Parameters of one structured-data element, name to value.
///
/// Values are stored unescaped, escaping is applied only when encoding.
pub type Params = BTreeMap<String, String>;

/// Structured-data elements keyed by SD-ID.
///
/// A sorted map keeps the encoded output stable across calls.
pub type StructuredData = BTreeMap<String, Params>;

/// Characters which must be backslash-prefixed inside a PARAM-VALUE.
#[inline]
fn needs_escape(ch: char) -> bool {
    matches!(ch, '\\' | '=' | ']' | '"')
}

/// Writes a param value with every special character prefixed by a
/// backslash. Single pass over the input, so inserted backslashes are
/// never escaped again.
pub(crate) struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(pos) = rest.find(needs_escape) {
            f.write_str(&rest[..pos])?;
            f.write_str("\\")?;
            // every special character is a single byte
            f.write_str(&rest[pos..pos + 1])?;
            rest = &rest[pos + 1..];
        }
        f.write_str(rest)
    }
}

/// Escape a param value into an owned string.
pub fn escape_param_value(value: &str) -> String {
    Escaped(value).to_string()
}

const SD_NAME_MAX: usize = 32;

/// SD-NAME: printable ASCII except `=`, `]` and `"`.
#[inline]
fn is_sd_name_char(ch: char) -> bool {
    is_print_ascii(ch) && !matches!(ch, '=' | ']' | '"')
}

/// An SD-ID or PARAM-NAME as written on the wire.
pub(crate) fn sd_name(value: &str) -> Token<'_> {
    Token {
        value,
        max: SD_NAME_MAX,
        allowed: is_sd_name_char,
    }
}

/// One `[ID name="value" ...]` block. Params whose name has no valid
/// character left are skipped, the caller skips such elements.
pub(crate) struct Element<'a> {
    pub id: &'a str,
    pub params: &'a Params,
}

impl fmt::Display for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", sd_name(self.id))?;
        for (name, value) in self.params {
            let name = sd_name(name);
            if name.is_empty() {
                continue;
            }
            write!(f, " {}=\"{}\"", name, Escaped(value))?;
        }
        f.write_str("]")
    }
}
