//! Field-level checks over a JSON object.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::Violation;

/// Length of the canonical hyphenated UUID form.
const HYPHENATED_UUID_LEN: usize = 36;

/// Accumulates violations while reading fields from an input object.
///
/// Every accessor returns `None` exactly when it recorded a violation, so
/// callers can build the typed value once all accessors returned `Some`.
#[derive(Debug)]
pub struct Fields<'a> {
    object: &'a Map<String, Value>,
    violations: Vec<Violation>,
}

impl<'a> Fields<'a> {
    /// Start reading `input`, which must be a JSON object.
    pub fn of(input: &'a Value) -> Result<Self, Vec<Violation>> {
        match input.as_object() {
            Some(object) => Ok(Self {
                object,
                violations: Vec::new(),
            }),
            None => Err(vec![Violation::new(
                "body",
                "isObject",
                "request body must be a JSON object",
            )]),
        }
    }

    /// Consume the reader and return what it recorded.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Value of `name`, treating JSON `null` as absent.
    fn present(&self, name: &str) -> Option<&'a Value> {
        self.object.get(name).filter(|v| !v.is_null())
    }

    fn reject(&mut self, name: &str, constraint: &str, message: String) {
        self.violations
            .push(Violation::new(name, constraint, message));
    }

    /// A string that is present and not empty. Whitespace counts as content.
    pub fn required_string(&mut self, name: &str) -> Option<String> {
        match self.present(name) {
            None => {
                self.reject(name, "isNotEmpty", format!("{} should not be empty", name));
                None
            }
            Some(Value::String(s)) if s.is_empty() => {
                self.reject(name, "isNotEmpty", format!("{} should not be empty", name));
                None
            }
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.reject(name, "isString", format!("{} must be a string", name));
                None
            }
        }
    }

    /// A string that may be absent.
    pub fn optional_string(&mut self, name: &str) -> Option<Option<String>> {
        match self.present(name) {
            None => Some(None),
            Some(Value::String(s)) => Some(Some(s.clone())),
            Some(_) => {
                self.reject(name, "isString", format!("{} must be a string", name));
                None
            }
        }
    }

    /// A required UUID in canonical hyphenated form.
    pub fn uuid(&mut self, name: &str) -> Option<Uuid> {
        let Some(value) = self.present(name) else {
            self.reject(
                name,
                "isDefined",
                format!("{} should not be null or undefined", name),
            );
            return None;
        };

        match value.as_str().and_then(parse_uuid) {
            Some(id) => Some(id),
            None => {
                self.reject(name, "isUuid", format!("{} must be a UUID", name));
                None
            }
        }
    }

    /// An ISO-8601 date or date-time string that may be absent.
    pub fn optional_date(&mut self, name: &str) -> Option<Option<DateTime<Utc>>> {
        let Some(value) = self.present(name) else {
            return Some(None);
        };

        match value.as_str().and_then(parse_iso8601) {
            Some(date) => Some(Some(date)),
            None => {
                self.reject(
                    name,
                    "isDateString",
                    format!("{} must be a valid ISO 8601 date string", name),
                );
                None
            }
        }
    }

    /// A JSON boolean. Strings and numbers are not coerced.
    pub fn boolean(&mut self, name: &str) -> Option<bool> {
        match self.present(name) {
            Some(Value::Bool(b)) => Some(*b),
            _ => {
                self.reject(name, "isBoolean", format!("{} must be a boolean value", name));
                None
            }
        }
    }
}

/// Parse a UUID, accepting only the 36-character hyphenated form.
pub fn parse_uuid(raw: &str) -> Option<Uuid> {
    if raw.len() != HYPHENATED_UUID_LEN {
        return None;
    }
    Uuid::parse_str(raw).ok()
}

/// Parse an ISO-8601 date or date-time.
///
/// Accepts extended (`2025-03-01`) and basic (`20250301`) dates, optionally
/// followed by `T` or a space and a time (`09:30`, `09:30:00.250`,
/// `0930`, `093000`) with an optional zone (`Z`, `+01`, `+0100`,
/// `+01:00`). A missing time means midnight; a missing zone means UTC.
pub fn parse_iso8601(raw: &str) -> Option<DateTime<Utc>> {
    if !raw.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }

    let (date, rest) = split_date(raw)?;
    if rest.is_empty() {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    let rest = rest
        .strip_prefix(['T', 't', ' '])
        .filter(|r| r.starts_with(|c: char| c.is_ascii_digit()))?;
    let (time, offset) = split_zone(rest)?;
    let naive = date.and_time(parse_time(time)?);

    match offset {
        None => Some(naive.and_utc()),
        Some(offset) => naive
            .and_local_timezone(offset)
            .single()
            .map(|dt| dt.with_timezone(&Utc)),
    }
}

/// Split off a leading extended or basic calendar date.
fn split_date(raw: &str) -> Option<(NaiveDate, &str)> {
    if let Some(date) = raw
        .get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    {
        return Some((date, &raw[10..]));
    }

    let basic = raw.get(..8).filter(|d| d.bytes().all(|b| b.is_ascii_digit()))?;
    let date = NaiveDate::parse_from_str(basic, "%Y%m%d").ok()?;
    Some((date, &raw[8..]))
}

/// Split a time-of-day from its trailing zone designator, if any.
fn split_zone(raw: &str) -> Option<(&str, Option<FixedOffset>)> {
    if let Some(time) = raw.strip_suffix(['Z', 'z']) {
        return Some((time, FixedOffset::east_opt(0)));
    }

    match raw.rfind(['+', '-']) {
        Some(at) => Some((&raw[..at], Some(parse_offset(&raw[at..])?))),
        None => Some((raw, None)),
    }
}

/// Parse `±HH`, `±HHMM` or `±HH:MM`.
fn parse_offset(raw: &str) -> Option<FixedOffset> {
    let sign = match raw.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };

    let digits = &raw[1..];
    let (hours, minutes) = match digits.len() {
        2 => (digits, "00"),
        4 => (digits.get(..2)?, digits.get(2..)?),
        5 if digits.as_bytes()[2] == b':' => (digits.get(..2)?, digits.get(3..)?),
        _ => return None,
    };
    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    ["%H:%M:%S%.f", "%H:%M", "%H%M%S%.f", "%H%M"]
        .into_iter()
        .find_map(|format| NaiveTime::parse_from_str(raw, format).ok())
}
