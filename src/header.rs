//! Header fields shared by both record formats.

use std::fmt::{self, Write};

use chrono::{DateTime, FixedOffset};

use crate::priority::Priority;
use crate::timestamp::Rfc3339;
use crate::value::FieldValue;

/// Field names understood by [`Record::field`](crate::Record::field).
/// Matching is exact and case-sensitive.
pub mod name {
    pub const PRI: &str = "Pri";
    pub const VERSION: &str = "Version";
    pub const TIMESTAMP: &str = "Timestamp";
    pub const HOSTNAME: &str = "Hostname";
    pub const APPNAME: &str = "AppName";
    pub const PROCID: &str = "ProcId";
    pub const MSGID: &str = "MsgId";
    pub const MESSAGE: &str = "Message";
}

/// Placeholder written for empty optional header fields.
pub const NILVALUE: &str = "-";

// RFC 5424 section 6 field lengths
const HOSTNAME_MAX: usize = 255;
const APPNAME_MAX: usize = 48;
const PROCID_MAX: usize = 128;
const MSGID_MAX: usize = 32;

/// PRINTUSASCII, the character set of every header field.
#[inline]
pub(crate) fn is_print_ascii(ch: char) -> bool {
    matches!(ch, '!'..='~')
}

/// A header field or SD name as written on the wire: characters outside
/// `allowed` are dropped and the rest cut to `max`. Writes NILVALUE when
/// nothing is left.
pub(crate) struct Token<'a> {
    pub value: &'a str,
    pub max: usize,
    pub allowed: fn(char) -> bool,
}

impl<'a> Token<'a> {
    pub(crate) fn header(value: &'a str, max: usize) -> Self {
        Token {
            value,
            max,
            allowed: is_print_ascii,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        !self.value.chars().any(self.allowed)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str(NILVALUE);
        }

        let allowed = self.allowed;
        for ch in self.value.chars().filter(|ch| allowed(*ch)).take(self.max) {
            f.write_char(ch)?;
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub priority: Priority,
    pub version: u32,
    pub timestamp: DateTime<FixedOffset>,
    // empty means absent, rendered as NILVALUE. Stored as given, encoding
    // drops characters a header field can't carry.
    pub hostname: String,
    pub appname: String,
    pub procid: String,
    pub msgid: String,
}

impl Header {
    /// A header with protocol version 1 and every optional field absent.
    pub fn new(priority: u32, timestamp: DateTime<FixedOffset>) -> Self {
        Header {
            priority: Priority::new(priority),
            version: 1,
            timestamp,
            hostname: String::new(),
            appname: String::new(),
            procid: String::new(),
            msgid: String::new(),
        }
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    pub fn with_appname(mut self, appname: impl Into<String>) -> Self {
        self.appname = appname.into();
        self
    }

    pub fn with_procid(mut self, procid: impl Into<String>) -> Self {
        self.procid = procid.into();
        self
    }

    pub fn with_msgid(mut self, msgid: impl Into<String>) -> Self {
        self.msgid = msgid.into();
        self
    }

    /// Looks up one of the fixed header names. `Message` is not part of the
    /// header and is resolved by the record itself.
    pub fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        let value = match key {
            name::PRI => FieldValue::Int(i64::from(self.priority.value())),
            name::VERSION => FieldValue::Int(i64::from(self.version)),
            name::TIMESTAMP => FieldValue::Time(&self.timestamp),
            name::HOSTNAME => FieldValue::Str(&self.hostname),
            name::APPNAME => FieldValue::Str(&self.appname),
            name::PROCID => FieldValue::Str(&self.procid),
            name::MSGID => FieldValue::Str(&self.msgid),
            _ => return None,
        };

        Some(value)
    }
}

/// `<PRI>VERSION TIMESTAMP HOSTNAME APPNAME PROCID MSGID`, no trailing space.
///
/// Optional fields keep only printable ASCII, cut to their RFC 5424 length.
impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}>{} {} {} {} {} {}",
            self.priority,
            self.version,
            Rfc3339(&self.timestamp),
            Token::header(&self.hostname, HOSTNAME_MAX),
            Token::header(&self.appname, APPNAME_MAX),
            Token::header(&self.procid, PROCID_MAX),
            Token::header(&self.msgid, MSGID_MAX),
        )
    }
}
