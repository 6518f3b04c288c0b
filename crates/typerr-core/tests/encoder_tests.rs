use typerr_core::{encode, Level, Record, WireFormat};

fn general_error() -> Record {
    Record::new("01", "general error")
        .with_http_status(500)
        .with_rpc_status(13)
}

// ============================================================================
// Structured form
// ============================================================================

#[test]
fn structured_matches_wire_format() {
    let r = general_error().add_info(["raw error"]).add_info(["raw error 2"]);
    assert_eq!(
        encode(&r, WireFormat::Structured),
        r#"error: {"code":"01","message":"general error","info":["raw error","raw error 2"],"http_status":500,"rpc_status":13}"#
    );
}

#[test]
fn structured_is_display_output() {
    let r = general_error().add_info(["x"]);
    assert_eq!(r.to_string(), encode(&r, WireFormat::Structured));
    assert_eq!(r.encode(WireFormat::Structured), r.to_string());
}

#[test]
fn structured_empty_record() {
    assert_eq!(
        Record::new("", "").to_string(),
        r#"error: {"code":"","message":"","info":[]}"#
    );
}

#[test]
fn structured_omits_zero_statuses() {
    let r = Record::new("01", "x").with_rpc_status(5);
    assert_eq!(
        r.to_string(),
        r#"error: {"code":"01","message":"x","info":[],"rpc_status":5}"#
    );
}

#[test]
fn structured_includes_debug_and_process() {
    let r = Record::new("01", "x")
        .add_debug(["trace id 9"])
        .with_process(77, "api");
    assert_eq!(
        r.to_string(),
        r#"error: {"code":"01","message":"x","info":[],"debug":["trace id 9"],"process_id":77,"process_name":"api"}"#
    );
}

#[test]
fn structured_info_level_tag() {
    let r = Record::info_record().with_message("cache warmed");
    assert_eq!(
        r.to_string(),
        r#"info: {"code":"","message":"cache warmed","info":[]}"#
    );
}

#[test]
fn structured_escapes_json_in_values() {
    let r = Record::new("a\"b", "line1\nline2");
    assert_eq!(
        r.to_string(),
        r#"error: {"code":"a\"b","message":"line1\nline2","info":[]}"#
    );
}

#[test]
fn structured_is_single_line() {
    let r = Record::new("01", "multi\nline").add_info(["a\nb"]);
    assert!(!r.to_string().contains('\n'));
}

#[test]
fn structured_does_not_carry_level_field() {
    assert!(!general_error().to_string().contains("\"level\""));
}

// ============================================================================
// Delimited form
// ============================================================================

#[test]
fn delimited_without_info() {
    assert_eq!(
        encode(&general_error(), WireFormat::Delimited),
        "error: code=01, message=general error, httpStatus=500, rpcStatus=13"
    );
}

#[test]
fn delimited_one_marker_per_info_entry() {
    let r = general_error().add_info(["a", "b"]);
    assert_eq!(
        encode(&r, WireFormat::Delimited),
        "error: code=01, message=general error, httpStatus=500, rpcStatus=13, info=a, info=b"
    );
}

#[test]
fn delimited_writes_zero_statuses() {
    assert_eq!(
        encode(&Record::new("", ""), WireFormat::Delimited),
        "error: code=, message=, httpStatus=0, rpcStatus=0"
    );
}

#[test]
fn delimited_drops_debug_and_process() {
    let r = Record::new("01", "x").add_debug(["secret"]).with_process(1, "p");
    let line = encode(&r, WireFormat::Delimited);
    assert!(!line.contains("secret"));
    assert_eq!(line, "error: code=01, message=x, httpStatus=0, rpcStatus=0");
}

#[test]
fn delimited_info_level_tag() {
    let r = Record::new("02", "ok").with_level(Level::Info);
    assert_eq!(
        encode(&r, WireFormat::Delimited),
        "info: code=02, message=ok, httpStatus=0, rpcStatus=0"
    );
}

#[test]
fn delimited_negative_rpc_status() {
    let r = Record::new("x", "y").with_rpc_status(-1);
    assert!(encode(&r, WireFormat::Delimited).ends_with("rpcStatus=-1"));
}

// ============================================================================
// WireFormat
// ============================================================================

#[test]
fn wire_format_parse_and_display() {
    assert_eq!("structured".parse::<WireFormat>().unwrap(), WireFormat::Structured);
    assert_eq!("JSON".parse::<WireFormat>().unwrap(), WireFormat::Structured);
    assert_eq!(" delimited ".parse::<WireFormat>().unwrap(), WireFormat::Delimited);
    assert!("csv".parse::<WireFormat>().is_err());
    assert_eq!(WireFormat::Delimited.to_string(), "delimited");
    assert_eq!(WireFormat::default(), WireFormat::Structured);
}
