/// Property-based roundtrip tests.
///
/// Uses `proptest` to build random records through the public builder API and
/// verify that `decode(encode(r)) == r`:
///
/// - Structured format: any record, any text (unicode, quotes, control
///   characters, separator-looking substrings).
/// - Delimited format: records without debug entries or process metadata,
///   with values drawn from an alphabet without `=`, so no value can contain
///   a separator literal (every separator ends in `=`).
///
/// Also checks cleaner and append invariants over random input.
use proptest::prelude::*;
use serde_json::json;
use typerr_core::{clean, decode, encode, Level, Note, Record, WireFormat};

// ============================================================================
// Strategies
// ============================================================================

/// Arbitrary text with edge cases that stress the structured form.
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,30}",
        "\\PC{0,20}",
        Just(String::new()),
        Just("error: code=01".to_string()),
        Just(", message=, info=, httpStatus=".to_string()),
        Just(r#"{"a":"b","c":["d"]}"#.to_string()),
        Just("line1\nline2\ttab".to_string()),
        Just("say \"hi\" \\ back".to_string()),
        Just("caf\u{00e9} \u{4f60}\u{597d}".to_string()),
    ]
}

/// Text that the delimited form can carry.
fn arb_delimited_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ,.:;/_-]{0,30}",
        Just(String::new()),
        Just("a, b".to_string()),
        Just("error: code".to_string()),
        Just("\u{00e9}\u{4f60}".to_string()),
    ]
}

fn arb_note() -> impl Strategy<Value = Note> {
    prop_oneof![
        arb_text().prop_map(Note::Text),
        arb_text().prop_map(Note::Error),
        (any::<i64>(), arb_text()).prop_map(|(n, s)| Note::structured(&json!({"n": n, "s": s}))),
        any::<bool>().prop_map(Note::from),
    ]
}

fn arb_level() -> impl Strategy<Value = Level> {
    prop_oneof![Just(Level::Error), Just(Level::Info)]
}

/// A record built only through the builder API.
fn arb_record() -> impl Strategy<Value = Record> {
    (
        arb_text(),
        arb_text(),
        prop::collection::vec(arb_note(), 0..5),
        prop::collection::vec(arb_note(), 0..3),
        any::<u16>(),
        any::<i32>(),
        prop::option::of((any::<u32>(), arb_text())),
        arb_level(),
    )
        .prop_map(|(code, message, info, debug, http, rpc, process, level)| {
            let r = Record::new(code, message)
                .with_level(level)
                .add_info(info)
                .add_debug(debug)
                .with_http_status(http)
                .with_rpc_status(rpc);
            match process {
                Some((id, name)) => r.with_process(id, name),
                None => r,
            }
        })
}

fn arb_delimited_record() -> impl Strategy<Value = Record> {
    (
        arb_delimited_text(),
        arb_delimited_text(),
        prop::collection::vec(arb_delimited_text(), 0..5),
        any::<u16>(),
        any::<i32>(),
        arb_level(),
    )
        .prop_map(|(code, message, info, http, rpc, level)| {
            Record::new(code, message)
                .with_level(level)
                .add_info(info)
                .with_http_status(http)
                .with_rpc_status(rpc)
        })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Core roundtrip property for the default format.
    #[test]
    fn structured_roundtrip(record in arb_record()) {
        let line = encode(&record, WireFormat::Structured);
        let decoded = decode(&line);
        prop_assert!(decoded.is_ok(), "decode failed for {:?}", line);
        prop_assert_eq!(decoded.unwrap(), record);
    }

    /// Roundtrip for the delimited format on the fields it carries.
    #[test]
    fn delimited_roundtrip(record in arb_delimited_record()) {
        let line = encode(&record, WireFormat::Delimited);
        let decoded = decode(&line);
        prop_assert!(decoded.is_ok(), "decode failed for {:?}", line);
        prop_assert_eq!(decoded.unwrap(), record);
    }

    /// Encoded output is always a single line.
    #[test]
    fn structured_is_single_line(record in arb_record()) {
        prop_assert!(!encode(&record, WireFormat::Structured).contains('\n'));
    }

    /// Display is the structured encoding.
    #[test]
    fn display_is_structured(record in arb_record()) {
        prop_assert_eq!(record.to_string(), encode(&record, WireFormat::Structured));
    }

    /// Decoding arbitrary input never panics.
    #[test]
    fn decode_never_panics(input in "\\PC{0,60}") {
        let _ = decode(&input);
    }

    /// Decoding arbitrary tagged delimited input never panics.
    #[test]
    fn decode_tagged_never_panics(tail in "[a-z=, :0-9]{0,60}") {
        let _ = decode(&format!("error: code={tail}"));
    }

    /// Chained and batched appends produce the same cleaned sequence.
    #[test]
    fn append_monotonicity(a in arb_note(), b in arb_note()) {
        let base = Record::new("01", "x");
        let chained = base.add_info([a.clone()]).add_info([b.clone()]);
        let batched = base.add_info([a.clone(), b.clone()]);
        let expected = vec![a.render(), b.render()];
        prop_assert_eq!(chained.info(), expected.as_slice());
        prop_assert_eq!(batched.info(), expected.as_slice());
        prop_assert!(base.info().is_empty());
    }

    /// Text without double quotes is never changed by the cleaner.
    #[test]
    fn clean_without_quotes_is_identity(s in "[^\"]{0,40}") {
        prop_assert_eq!(clean(&s), s);
    }

    /// Every replacement is at most as long as its pattern.
    #[test]
    fn clean_never_grows(s in "\\PC{0,40}") {
        prop_assert!(clean(&s).len() <= s.len());
    }
}
