use std::fmt;

use crate::{Error, Facility, Severity};

/// The `PRI` part of a syslog message, `facility * 8 + severity`.
///
/// Only the combined value is stored, facility and severity are always
/// derived from it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(u32);

impl Priority {
    pub const fn new(value: u32) -> Self {
        Priority(value)
    }

    pub fn from_parts(facility: Facility, severity: Severity) -> Self {
        Priority(facility.code() * 8 + severity.code())
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn facility(self) -> u32 {
        self.0 >> 3
    }

    pub const fn severity(self) -> u32 {
        self.0 & 0x7
    }

    /// Named facility, if the code is one RFC 5424 defines.
    pub fn facility_kind(self) -> Result<Facility, Error> {
        Facility::try_from(self.facility())
    }

    pub fn severity_kind(self) -> Severity {
        Severity::from_code(self.severity())
    }
}

impl From<u32> for Priority {
    fn from(value: u32) -> Self {
        Priority(value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
