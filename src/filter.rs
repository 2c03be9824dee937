//! Predicates deciding whether a record is admitted.
//!
//! Filters are built once and then shared, `passes` takes `&self` and never
//! mutates anything, so one instance can be evaluated from many threads.
//! Field types are checked at evaluation time: a string test applied to a
//! non-string or missing field does not pass, it never errors.

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use tracing::{debug, trace};

use crate::message::Record;
use crate::value::FieldValue;
use crate::Error;

/// Signature of the function wrapped by [`Filter::Custom`].
pub type Predicate = dyn Fn(&Record) -> bool + Send + Sync;

#[derive(Clone)]
pub enum Filter {
    /// Admits every record.
    AlwaysPass,
    /// Admits a record only if every sub-filter does. Evaluated in order,
    /// stops at the first sub-filter that fails.
    AllOf(Vec<Arc<Filter>>),
    /// The field is a string containing `needle`, compared byte-wise.
    Contains { field: String, needle: String },
    /// The field is a string in which `pattern` matches somewhere.
    MatchesPattern { field: String, pattern: Regex },
    Custom(Arc<Predicate>),
}

impl Filter {
    pub fn always_pass() -> Self {
        Filter::AlwaysPass
    }

    /// Combine filters, accepting both owned and already shared ones.
    pub fn all_of<I, F>(filters: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Arc<Filter>>,
    {
        Filter::AllOf(filters.into_iter().map(Into::into).collect())
    }

    pub fn contains(field: impl Into<String>, needle: impl Into<String>) -> Self {
        Filter::Contains {
            field: field.into(),
            needle: needle.into(),
        }
    }

    /// Compiles `pattern`, failing here rather than at evaluation time.
    pub fn matches_pattern(field: impl Into<String>, pattern: &str) -> Result<Self, Error> {
        let field = field.into();
        let pattern = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
            field: field.clone(),
            source,
        })?;

        debug!(message = "Compiled pattern filter.", %field, pattern = pattern.as_str());

        Ok(Filter::MatchesPattern { field, pattern })
    }

    pub fn matches_regex(field: impl Into<String>, pattern: Regex) -> Self {
        Filter::MatchesPattern {
            field: field.into(),
            pattern,
        }
    }

    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&Record) -> bool + Send + Sync + 'static,
    {
        Filter::Custom(Arc::new(f))
    }

    pub fn passes(&self, record: &Record) -> bool {
        match self {
            Filter::AlwaysPass => true,
            Filter::AllOf(filters) => filters.iter().all(|f| f.passes(record)),
            Filter::Contains { field, needle } => match string_field(record, field) {
                Some(value) => value.contains(needle.as_str()),
                None => false,
            },
            Filter::MatchesPattern { field, pattern } => match string_field(record, field) {
                Some(value) => pattern.is_match(value),
                None => false,
            },
            Filter::Custom(f) => f(record),
        }
    }
}

/// The field's value if it exists and is a string.
fn string_field<'a>(record: &'a Record, field: &str) -> Option<&'a str> {
    match record.field(field) {
        Some(FieldValue::Str(value)) => Some(value),
        Some(other) => {
            trace!(message = "Field is not a string.", field, kind = other.kind());
            None
        }
        None => {
            trace!(message = "Field not found.", field);
            None
        }
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::AlwaysPass => f.write_str("AlwaysPass"),
            Filter::AllOf(filters) => f.debug_tuple("AllOf").field(filters).finish(),
            Filter::Contains { field, needle } => f
                .debug_struct("Contains")
                .field("field", field)
                .field("needle", needle)
                .finish(),
            Filter::MatchesPattern { field, pattern } => f
                .debug_struct("MatchesPattern")
                .field("field", field)
                .field("pattern", &pattern.as_str())
                .finish(),
            Filter::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chrono::{FixedOffset, TimeZone};

    use super::*;
    use crate::{Header, LegacyRecord, StructuredRecord};

    fn record(message: &str) -> Record {
        let ts = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .unwrap();
        LegacyRecord::new(Header::new(14, ts).with_appname("app"), message).into()
    }

    #[test]
    fn always_pass() {
        assert!(Filter::always_pass().passes(&record("foo bar baz")));
        assert!(Filter::always_pass().passes(&record("")));
    }

    #[test]
    fn contains() {
        let msg = record("foo bar baz");

        assert!(Filter::contains("Message", "bar").passes(&msg));
        assert!(!Filter::contains("Message", "qwijibo").passes(&msg));
        assert!(!Filter::contains("Message", "BAR").passes(&msg));
        assert!(Filter::contains("Message", "").passes(&msg));
    }

    #[test]
    fn contains_wrong_type_or_missing() {
        let msg = record("14");

        assert!(!Filter::contains("Pri", "14").passes(&msg));
        assert!(!Filter::contains("Timestamp", "2024").passes(&msg));
        assert!(!Filter::contains("Nope", "").passes(&msg));
    }

    #[test]
    fn matches_pattern() {
        let msg = record("foo bar baz");

        assert!(Filter::matches_pattern("Message", "[a-z]a[a-z]")
            .unwrap()
            .passes(&msg));
        assert!(!Filter::matches_pattern("Message", "[0-9]+")
            .unwrap()
            .passes(&msg));
        // search, not full match
        assert!(Filter::matches_pattern("Message", "ba")
            .unwrap()
            .passes(&msg));
    }

    #[test]
    fn matches_pattern_wrong_type() {
        let msg = record("foo");
        let filter = Filter::matches_pattern("Version", ".*").unwrap();
        assert!(!filter.passes(&msg));
    }

    #[test]
    fn invalid_pattern() {
        let err = Filter::matches_pattern("Message", "(unclosed").unwrap_err();
        match err {
            Error::InvalidPattern { field, .. } => assert_eq!(field, "Message"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn custom() {
        let msg = record("foo bar baz");

        let ok = Filter::custom(|r| r.message().contains("bar"));
        assert!(ok.passes(&msg));

        let bad = Filter::custom(|r| r.message().contains("qwijibo"));
        assert!(!bad.passes(&msg));
    }

    #[test]
    fn all_of() {
        let msg = record("foo bar baz");

        let ok = Filter::all_of([
            Filter::contains("Message", "bar"),
            Filter::contains("Message", "foo"),
        ]);
        assert!(ok.passes(&msg));

        let bad = Filter::all_of([
            Filter::contains("Message", "qwijibo"),
            Filter::contains("Message", "monkey"),
        ]);
        assert!(!bad.passes(&msg));

        let mixed = Filter::all_of([
            Filter::contains("Message", "foo"),
            Filter::contains("Message", "monkey"),
        ]);
        assert!(!mixed.passes(&msg));
    }

    #[test]
    fn all_of_empty() {
        assert!(Filter::all_of(Vec::<Filter>::new()).passes(&record("anything")));
    }

    #[test]
    fn all_of_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = {
            let calls = Arc::clone(&calls);
            Filter::custom(move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                true
            })
        };
        let counter = Arc::new(counter);

        let failing = Filter::all_of([
            Arc::clone(&counter),
            Arc::new(Filter::contains("Message", "qwijibo")),
            Arc::clone(&counter),
        ]);
        assert!(!failing.passes(&record("foo")));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let passing = Filter::all_of([Arc::clone(&counter), Arc::clone(&counter)]);
        assert!(passing.passes(&record("foo")));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn structured_table_field_is_not_a_string() {
        let ts = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .unwrap();
        let msg: Record = StructuredRecord::new(Header::new(14, ts), "hello")
            .with_element("origin", [("ip", "10.0.0.1")])
            .into();

        assert!(!Filter::contains("origin", "10.0").passes(&msg));
        assert!(Filter::custom(|r| r
            .field("origin")
            .and_then(|v| v.as_table())
            .and_then(|p| p.get("ip"))
            .is_some_and(|ip| ip.starts_with("10.")))
        .passes(&msg));
    }

    #[test]
    fn debug_output() {
        let filter = Filter::all_of([
            Filter::contains("Message", "a"),
            Filter::custom(|_| true),
        ]);
        assert_eq!(
            format!("{filter:?}"),
            r#"AllOf([Contains { field: "Message", needle: "a" }, Custom(..)])"#
        );
    }
}
