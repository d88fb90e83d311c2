//! MeasurementEvent entity - one request measured by a load test
//!
//! An event carries the per-request data of a result line. The static
//! identifiers (daemon, process, thread, layer, ...) come from the
//! `LoggerContext` instead.

use uuid::Uuid;

use crate::domain::value_objects::{ExtraArg, TimeInterval};

/// A single measured request
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementEvent {
    /// Error message; `Some` marks the request as failed
    pub error_message: Option<String>,
    /// Milliseconds since the Unix epoch, taken before measuring
    pub timestamp: i64,
    pub ti1: TimeInterval,
    pub ti2: TimeInterval,
    /// Request type (e.g. `GET` or `POST` for HTTP)
    pub request_type: String,
    pub uri: String,
    pub uri_alias: String,
    /// Shared by all requests of one operation execution
    pub execution_id: Uuid,
    /// Unique per request
    pub request_id: Uuid,
    pub extra_args: Vec<ExtraArg>,
}

impl MeasurementEvent {
    /// Create a successful event with unmeasured intervals and no extras
    pub fn new(
        timestamp: i64,
        request_type: impl Into<String>,
        uri: impl Into<String>,
        uri_alias: impl Into<String>,
        execution_id: Uuid,
        request_id: Uuid,
    ) -> Self {
        Self {
            error_message: None,
            timestamp,
            ti1: TimeInterval::new(),
            ti2: TimeInterval::new(),
            request_type: request_type.into(),
            uri: uri.into(),
            uri_alias: uri_alias.into(),
            execution_id,
            request_id,
            extra_args: Vec::new(),
        }
    }

    /// Mark the event as failed
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn with_intervals(mut self, ti1: TimeInterval, ti2: TimeInterval) -> Self {
        self.ti1 = ti1;
        self.ti2 = ti2;
        self
    }

    /// Append one extra value
    pub fn with_extra(mut self, arg: impl Into<ExtraArg>) -> Self {
        self.extra_args.push(arg.into());
        self
    }

    /// Append several extra values in order
    pub fn with_extras<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<ExtraArg>,
    {
        self.extra_args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn is_error(&self) -> bool {
        self.error_message.is_some()
    }
}
