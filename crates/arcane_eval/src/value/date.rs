//! Plain date triple (`spec.md` §9 REDESIGN FLAGS: "encode Date as a plain
//! triple"). Calendar arithmetic (e.g. `add_days`) is a host builtin's
//! concern, not this crate's; this type only parses and formats.

use std::fmt;

/// A 1-indexed (month, day, year) triple, compared and printed as
/// `MM/DD/YYYY` (`spec.md` §3.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateValue {
    pub month: u32,
    pub day: u32,
    pub year: i32,
}

impl DateValue {
    #[must_use]
    pub fn new(month: u32, day: u32, year: i32) -> Self {
        DateValue { month, day, year }
    }

    /// Parse `MM/DD/YYYY`. Returns `None` on any malformed input; the
    /// `cdate` builtin is responsible for turning that into a runtime error.
    #[must_use]
    pub fn parse_mdy(text: &str) -> Option<Self> {
        let mut parts = text.split('/');
        let month = parts.next()?.parse().ok()?;
        let day = parts.next()?.parse().ok()?;
        let year = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(DateValue { month, day, year })
    }

    /// Ordered triple used for both equality and relational comparison
    /// (`spec.md` §4.2: "date comparison by ordered triple (year, month,
    /// day)").
    #[must_use]
    pub fn ordering_key(self) -> (i32, u32, u32) {
        (self.year, self.month, self.day)
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.month, self.day, self.year)
    }
}
