use crate::Error;

/// Syslog Severities from RFC 5424.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[allow(non_camel_case_types)]
pub enum Severity {
    EMERG = 0,
    ALERT = 1,
    CRIT = 2,
    ERR = 3,
    WARNING = 4,
    NOTICE = 5,
    INFO = 6,
    DEBUG = 7,
}

/// Convert a severity code (as used in the wire serialization) into a
/// `Severity`, rejecting anything above 7.
impl TryFrom<u32> for Severity {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value > 7 {
            return Err(Error::BadSeverity(value));
        }

        Ok(Severity::from_code(value))
    }
}

impl Severity {
    /// Severity from the low three bits of `code`, every value maps to one.
    pub(crate) fn from_code(code: u32) -> Self {
        match code & 0x7 {
            0 => Severity::EMERG,
            1 => Severity::ALERT,
            2 => Severity::CRIT,
            3 => Severity::ERR,
            4 => Severity::WARNING,
            5 => Severity::NOTICE,
            6 => Severity::INFO,
            _ => Severity::DEBUG,
        }
    }

    /// Convert a syslog severity into a unique string representation
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::EMERG => "emerg",
            Severity::ALERT => "alert",
            Severity::CRIT => "crit",
            Severity::ERR => "err",
            Severity::WARNING => "warning",
            Severity::NOTICE => "notice",
            Severity::INFO => "info",
            Severity::DEBUG => "debug",
        }
    }

    pub fn code(self) -> u32 {
        self as u32
    }
}
