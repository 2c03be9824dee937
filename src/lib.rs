//! Syslog records and the filters a log relay uses to decide which records to
//! forward.
//!
//! Two wire formats are supported. [`LegacyRecord`] is the drain format, a
//! syslog header followed directly by the message. [`StructuredRecord`] is
//! [RFC 5424](https://tools.ietf.org/html/rfc5424), which adds Structured
//! Data elements between the header and the message. Both are wrapped by
//! [`Record`], which gives named field lookup and the canonical encoding.
//!
//! [`Filter`]s are assembled once and evaluated against many records.
//!
//! # Example
//!
//! ```
//! use chrono::{FixedOffset, TimeZone};
//! use syslog_relay::{Filter, Header, LegacyRecord, Record};
//!
//! let ts = FixedOffset::east_opt(0)
//!     .unwrap()
//!     .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
//!     .unwrap();
//! let record = Record::from(LegacyRecord::new(
//!     Header::new(14, ts).with_appname("app"),
//!     "hello world",
//! ));
//!
//! let filter = Filter::all_of([
//!     Filter::contains("AppName", "app"),
//!     Filter::matches_pattern("Message", "w[a-z]+d").unwrap(),
//! ]);
//!
//! if filter.passes(&record) {
//!     assert_eq!(record.bytes(), b"<14>1 2024-01-02T03:04:05Z - app - - hello world");
//! }
//! ```

mod error;
mod facility;
pub mod filter;
pub mod header;
mod legacy;
mod message;
mod priority;
pub mod rfc5424;
mod severity;
pub mod structured_data;
mod timestamp;
mod value;

pub use error::Error;
pub use facility::Facility;
pub use filter::Filter;
pub use header::Header;
pub use legacy::LegacyRecord;
pub use message::Record;
pub use priority::Priority;
pub use rfc5424::StructuredRecord;
pub use severity::Severity;
pub use structured_data::{Params, StructuredData};
pub use value::FieldValue;
