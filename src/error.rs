use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("bad facility {0}, expected 0..=23")]
    BadFacility(u32),
    #[error("bad severity {0}, expected 0..=7")]
    BadSeverity(u32),
    #[error("invalid pattern for field {field:?}: {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },
}
