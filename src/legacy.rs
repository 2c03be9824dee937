//! Records in the legacy drain format, where the message follows the header
//! directly and there is no structured data.

use std::fmt;

use chrono::{DateTime, FixedOffset};

use crate::header::{name, Header};
use crate::value::FieldValue;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegacyRecord {
    pub header: Header,
    pub message: String,
}

impl LegacyRecord {
    pub fn new(header: Header, message: impl Into<String>) -> Self {
        LegacyRecord {
            header,
            message: message.into(),
        }
    }

    pub fn timestamp(&self) -> &DateTime<FixedOffset> {
        &self.header.timestamp
    }

    pub fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            name::MESSAGE => Some(FieldValue::Str(&self.message)),
            _ => self.header.field(key),
        }
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

/// `<PRI>VERSION TIMESTAMP HOSTNAME APPNAME PROCID MSGID MESSAGE`
///
/// The message is written as is and may contain spaces. The separator before
/// it is always present, even for an empty message.
impl fmt::Display for LegacyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.header, self.message)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn header() -> Header {
        let ts = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .unwrap();
        Header::new(14, ts).with_appname("app")
    }

    #[test]
    fn encode() {
        let record = LegacyRecord::new(header(), "hello");
        assert_eq!(
            record.bytes(),
            b"<14>1 2024-01-02T03:04:05Z - app - - hello".to_vec()
        );
    }

    #[test]
    fn message_is_not_escaped() {
        let record = LegacyRecord::new(header(), r#"a "quoted" ]=\ message"#);
        assert_eq!(
            record.to_string(),
            r#"<14>1 2024-01-02T03:04:05Z - app - - a "quoted" ]=\ message"#
        );
    }

    #[test]
    fn empty_message_keeps_separator() {
        let record = LegacyRecord::new(header(), "");
        assert_eq!(record.to_string(), "<14>1 2024-01-02T03:04:05Z - app - - ");
    }

    #[test]
    fn field_lookup() {
        let record = LegacyRecord::new(header(), "hello");
        assert_eq!(record.field("Message"), Some(FieldValue::Str("hello")));
        assert_eq!(record.field("AppName"), Some(FieldValue::Str("app")));
        assert_eq!(record.field("message"), None);
        assert_eq!(record.field("origin"), None);
    }
}
