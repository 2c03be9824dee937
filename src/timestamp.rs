use std::fmt;

use chrono::{DateTime, FixedOffset, SecondsFormat};

/// Formats a timestamp the way both wire formats carry it: RFC 3339 with
/// whole seconds, `Z` for a zero offset and `+hh:mm` otherwise.
pub(crate) struct Rfc3339<'a>(pub &'a DateTime<FixedOffset>);

impl fmt::Display for Rfc3339<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}
