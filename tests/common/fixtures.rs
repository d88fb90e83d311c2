//! Test fixtures - the canonical event used across contract tests.

use chrono::FixedOffset;
use perflog::{LoggerContext, MeasurementEvent};
use uuid::Uuid;

pub const EXECUTION_ID: &str = "3d5c1f0e-9a7b-4c2d-8e6f-5a4b3c2d1e0f";
pub const REQUEST_ID: &str = "a1b2c3d4-e5f6-4789-8abc-def012345678";
pub const LOCAL_ADDRESS: &str = "192.168.0.42";

/// `1` ms after the epoch, rendered in UTC
pub const TIMESTAMP: &str = "1970-01-01T00:00:00.001+0000";

/// Context with daemon 1, process 2, thread 3, layer `client`
pub fn context() -> LoggerContext {
    context_for_thread(3)
}

pub fn context_for_thread(thread_id: i32) -> LoggerContext {
    LoggerContext::builder()
        .daemon_id(1)
        .process_id(2)
        .thread_id(thread_id)
        .local_address(LOCAL_ADDRESS.parse().unwrap())
        .layer("client")
        .operation("operation")
        .target("target")
        .utc_offset(FixedOffset::east_opt(0).unwrap())
        .build()
}

/// Successful GET with unmeasured intervals and no extras
pub fn event() -> MeasurementEvent {
    MeasurementEvent::new(
        1,
        "GET",
        "http://localhost/someUri",
        "someUriAlias",
        Uuid::parse_str(EXECUTION_ID).unwrap(),
        Uuid::parse_str(REQUEST_ID).unwrap(),
    )
}

/// The line `event()` produces, with an optional error and raw extra fields
pub fn expected_line(error: Option<&str>, extras: &[&str]) -> String {
    let status = if error.is_some() { "ERROR" } else { "SUCCESS" };
    let mut line = format!(
        "\"1\";\"2\";\"3\";\"{TIMESTAMP}\";\"-1\";\"-1\";\"operation\";\"target\";\"{status}\";\"{}\";\
         \"GET\";\"http://localhost/someUri\";\"someUriAlias\";\"/{LOCAL_ADDRESS}\";\"client\";\
         \"{EXECUTION_ID}\";\"{REQUEST_ID}\"",
        error.unwrap_or("")
    );
    for extra in extras {
        line.push_str(&format!(";\"{extra}\""));
    }
    line
}
