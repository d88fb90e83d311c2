//! Contract tests for the result line format.

use std::time::{Duration, Instant};

use perflog::{DefaultResultLogger, ExtraArg, ResultLogger, TimeInterval};

use crate::common::*;

fn log(event: &mut perflog::MeasurementEvent) -> String {
    let (sink, lines) = RecordingSink::new();
    let mut logger = DefaultResultLogger::new(sink, context());
    logger.log_result(event).unwrap();
    last_line(&lines)
}

/// CONTRACT: A successful event without extras has exactly 17 quoted fields
/// in fixed order, with `SUCCESS` and an empty error field.
#[test]
fn contract_success_line_without_extras() {
    let line = log(&mut event());
    assert_eq!(line, expected_line(None, &[]));
}

/// CONTRACT: The canonical line is stable byte for byte.
#[test]
fn contract_canonical_line_snapshot() {
    let line = log(&mut event());
    insta::assert_snapshot!(line, @r#""1";"2";"3";"1970-01-01T00:00:00.001+0000";"-1";"-1";"operation";"target";"SUCCESS";"";"GET";"http://localhost/someUri";"someUriAlias";"/192.168.0.42";"client";"3d5c1f0e-9a7b-4c2d-8e6f-5a4b3c2d1e0f";"a1b2c3d4-e5f6-4789-8abc-def012345678""#);
}

/// CONTRACT: The local address field is `host/ip`, or `/ip` when the
/// address was given without a host name.
#[test]
fn contract_local_address_field_text() {
    let line = log(&mut event());
    assert!(line.contains(";\"someUriAlias\";\"/192.168.0.42\";\"client\";"));

    let named = perflog::LoggerContext::builder()
        .daemon_id(1)
        .process_id(2)
        .thread_id(3)
        .host_name("loadgen01")
        .local_address("10.0.0.5".parse().unwrap())
        .layer("client")
        .build();
    let (sink, lines) = RecordingSink::new();
    let mut logger = DefaultResultLogger::new(sink, named);
    logger.log_result(&mut event()).unwrap();
    assert!(last_line(&lines).contains(";\"someUriAlias\";\"loadgen01/10.0.0.5\";\"client\";"));
}

/// CONTRACT: Extras are appended in order; a null extra is written as the
/// text `null`, not as an empty field.
#[test]
fn contract_extras_appended_with_literal_null() {
    let mut e = event().with_extras([
        ExtraArg::from("extra1"),
        ExtraArg::from("extra2"),
        ExtraArg::Null,
    ]);
    let line = log(&mut e);
    assert_eq!(line, expected_line(None, &["extra1", "extra2", "null"]));
}

/// CONTRACT: Quotes are doubled and line break runs collapse to one space
/// inside a field; trailing breaks vanish.
#[test]
fn contract_extra_with_quotes_and_line_breaks() {
    let unnormalized = "  foo\"\"  bar\r\nbaz\r\n\r\nblubb\n\n\n\"blah\"   blah\n42\n";
    let normalized = "  foo\"\"\"\"  bar baz blubb \"\"blah\"\"   blah 42";

    let line = log(&mut event().with_extra(unnormalized));
    assert_eq!(line, expected_line(None, &[normalized]));
}

/// CONTRACT: An error message switches the status to `ERROR` and fills the
/// error field.
#[test]
fn contract_error_line() {
    let message = "my little test error message";
    let line = log(&mut event().with_error(message));
    assert_eq!(line, expected_line(Some(message), &[]));
}

/// CONTRACT: Error messages are escaped like every other field.
#[test]
fn contract_error_message_is_escaped() {
    let line = log(&mut event().with_error("bad \"response\"\r\nbody"));
    assert_eq!(
        line,
        expected_line(Some("bad \"\"response\"\" body"), &[])
    );
}

/// CONTRACT: Field values containing `;` stay inside their quotes and never
/// shift the field order.
#[test]
fn contract_semicolons_do_not_shift_fields() {
    let mut e = perflog::MeasurementEvent::new(
        1,
        "POST",
        "http://localhost/a;b",
        "alias;x",
        event().execution_id,
        event().request_id,
    );
    let line = log(&mut e);
    assert!(line.contains(";\"POST\";\"http://localhost/a;b\";\"alias;x\";"));
    assert!(line.starts_with("\"1\";\"2\";\"3\";"));
}

/// CONTRACT: Measured intervals are written as whole milliseconds.
#[test]
fn contract_intervals_in_milliseconds() {
    let start = Instant::now();
    let mut e = event().with_intervals(
        TimeInterval::with_marks(start, start + Duration::from_micros(1_500_900)),
        TimeInterval::new(),
    );
    let line = log(&mut e);
    assert!(line.contains(&format!("\"{TIMESTAMP}\";\"1500\";\"-1\";")));
}

/// CONTRACT: Integer and boolean extras use their plain text form.
#[test]
fn contract_scalar_extras() {
    let mut e = event().with_extra(200i64).with_extra(false).with_extra(Some(-3i64));
    let line = log(&mut e);
    assert_eq!(line, expected_line(None, &["200", "false", "-3"]));
}
