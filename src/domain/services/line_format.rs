//! Result line formatting
//!
//! Every field is wrapped in double quotes. Quotes inside a value are
//! doubled, and each run of `\r`/`\n` characters becomes a single space
//! when more content follows it. Fields are separated by `;`.

use std::fmt;

use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};

const QUOTE: char = '"';
const SEPARATOR: char = ';';

/// ISO-8601 with milliseconds and a `+HHMM` offset
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Accumulates escaped, quoted fields into one line
#[derive(Debug, Default, Clone)]
pub struct LineBuilder {
    buf: String,
}

impl LineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    /// Append one field. `None` renders as an empty field (`""`).
    pub fn field(&mut self, value: Option<&str>) -> &mut Self {
        if !self.buf.is_empty() {
            self.buf.push(SEPARATOR);
        }
        self.buf.push(QUOTE);
        if let Some(value) = value {
            push_escaped(&mut self.buf, value);
        }
        self.buf.push(QUOTE);
        self
    }

    /// Append a field holding `value`'s text.
    pub fn str_field(&mut self, value: &str) -> &mut Self {
        self.field(Some(value))
    }

    /// Append a field holding `value`'s `Display` output.
    pub fn display_field(&mut self, value: impl fmt::Display) -> &mut Self {
        self.field(Some(&value.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

fn push_escaped(out: &mut String, value: &str) {
    let mut pending_break = false;
    for c in value.chars() {
        match c {
            '\r' | '\n' => {
                pending_break = true;
                continue;
            }
            _ => {
                if pending_break {
                    out.push(' ');
                    pending_break = false;
                }
                if c == QUOTE {
                    out.push(QUOTE);
                }
            }
        }
        out.push(c);
    }
}

/// Escape and quote a single value on its own
pub fn escape_field(value: Option<&str>) -> String {
    let mut builder = LineBuilder::new();
    builder.field(value);
    builder.finish()
}

/// Render epoch milliseconds with [`TIMESTAMP_FORMAT`] in the given offset.
///
/// Values chrono cannot represent fall back to the raw millisecond count.
pub fn format_timestamp(millis: i64, offset: &FixedOffset) -> String {
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(utc) => utc
            .with_timezone(offset)
            .format(TIMESTAMP_FORMAT)
            .to_string(),
        None => millis.to_string(),
    }
}

/// Render epoch milliseconds with the local offset in effect at that instant.
pub fn format_timestamp_local(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(local) => local.format(TIMESTAMP_FORMAT).to_string(),
        None => millis.to_string(),
    }
}
