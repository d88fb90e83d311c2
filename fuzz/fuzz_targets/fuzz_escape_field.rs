#![no_main]

use libfuzzer_sys::fuzz_target;
use perflog::domain::services::escape_field;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = std::str::from_utf8(data) {
        let field = escape_field(Some(value));
        assert!(field.starts_with('"') && field.ends_with('"'));
        assert!(!field.contains(['\r', '\n']));
    }
});
