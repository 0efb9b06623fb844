use crate::errors::{TimingLineFault, TranscriptError};
use crate::transcript::{
    classify_line, is_timing_line, parse_caption_records, parse_time_marker, CaptionRecord,
    TimeMarker, TranscriptLine,
};

fn record(index: usize, start: u32, end: u32, text: &str) -> CaptionRecord {
    CaptionRecord {
        index,
        start,
        end,
        text: text.to_string(),
    }
}

#[test]
fn test_timing_line_shapes() {
    for line in ["0:05", "12:34", "123:45", "1:2:3", "12:3:4", "ab:cd"] {
        assert!(is_timing_line(line), "{} should look like a timing line", line);
    }
    for line in [
        "Hello world",
        "Note: hi",
        "12:34 intro",
        "1234:56",
        ":30",
        "12:",
        "12::30",
        "1:5",
        "0:5",
        "12:345",
    ] {
        assert!(!is_timing_line(line), "{} should be caption text", line);
    }
}

#[test]
fn test_parse_time_marker() {
    assert_eq!(
        parse_time_marker("1:05"),
        Ok(TimeMarker {
            minutes: 1,
            seconds: 5
        })
    );
    assert_eq!(parse_time_marker("123:45").map(|m| m.offset()), Ok(123 * 60 + 45));
    // Seconds past 59 are taken as given
    assert_eq!(parse_time_marker("1:75").map(|m| m.offset()), Ok(135));

    assert_eq!(
        parse_time_marker("1:2:3"),
        Err(TimingLineFault::WrongPartCount(3))
    );
    assert_eq!(parse_time_marker("ab:12"), Err(TimingLineFault::InvalidMinutes));
    assert_eq!(parse_time_marker("ab:cd"), Err(TimingLineFault::InvalidMinutes));
    assert_eq!(parse_time_marker("12:cd"), Err(TimingLineFault::InvalidSeconds));
    assert_eq!(parse_time_marker("1:5"), Err(TimingLineFault::InvalidSeconds));
}

#[test]
fn test_classify_line() {
    assert_eq!(classify_line(1, "   \t"), Ok(None));
    assert_eq!(
        classify_line(2, "  Hello there \r"),
        Ok(Some(TranscriptLine::Fragment("Hello there")))
    );
    assert_eq!(
        classify_line(3, " 0:10 "),
        Ok(Some(TranscriptLine::Marker(TimeMarker {
            minutes: 0,
            seconds: 10
        })))
    );

    let err = classify_line(7, "12:3:4").unwrap_err();
    assert_eq!(err.line_number(), 7);
    assert_eq!(
        err,
        TranscriptError::malformed(7, "12:3:4", TimingLineFault::WrongPartCount(3))
    );
}

#[test]
fn test_short_seconds_line_is_caption_text() {
    assert_eq!(
        classify_line(3, "1:5"),
        Ok(Some(TranscriptLine::Fragment("1:5")))
    );

    let records = parse_caption_records("0:00\nHi\n1:5\nBye").unwrap();
    assert_eq!(records, vec![record(1, 0, 3, "Hi\n1:5\nBye")]);
}

#[test]
fn test_alternating_markers_and_text() {
    let records = parse_caption_records("0:00\nHello world\n0:05\nBye").unwrap();
    assert_eq!(
        records,
        vec![record(1, 0, 5, "Hello world"), record(2, 5, 8, "Bye")]
    );
}

#[test]
fn test_multiline_caption_closed_by_marker() {
    let records = parse_caption_records("1:05\nLine one\nLine two\n1:10\n").unwrap();
    assert_eq!(records, vec![record(1, 65, 70, "Line one\nLine two")]);
}

#[test]
fn test_blank_lines_do_not_split_captions() {
    let records = parse_caption_records("0:01\n\nfirst\n\n   \nsecond\n0:04").unwrap();
    assert_eq!(records, vec![record(1, 1, 4, "first\nsecond")]);
}

#[test]
fn test_identical_markers_emit_nothing_between() {
    let records = parse_caption_records("0:10\n\n0:10\nText").unwrap();
    assert_eq!(records, vec![record(1, 10, 13, "Text")]);
}

#[test]
fn test_zero_length_caption_is_dropped_without_gap() {
    let records = parse_caption_records("0:10\nlost\n0:10\nkept\n0:12\ntail").unwrap();
    assert_eq!(
        records,
        vec![record(1, 10, 12, "kept"), record(2, 12, 15, "tail")]
    );
}

#[test]
fn test_backwards_marker_drops_pending_caption() {
    let records = parse_caption_records("0:20\nlate\n0:10\nearly\n0:15").unwrap();
    assert_eq!(records, vec![record(1, 10, 15, "early")]);
}

#[test]
fn test_text_before_first_marker_starts_at_zero() {
    let records = parse_caption_records("intro\n0:04\nnext").unwrap();
    assert_eq!(
        records,
        vec![record(1, 0, 4, "intro"), record(2, 4, 7, "next")]
    );
}

#[test]
fn test_markers_only_yield_no_records() {
    assert!(parse_caption_records("0:01\n0:02\n0:03\n").unwrap().is_empty());
    assert!(parse_caption_records("").unwrap().is_empty());
    assert!(parse_caption_records("\n \n\t\n").unwrap().is_empty());
}

#[test]
fn test_malformed_marker_aborts_whole_transcript() {
    let err = parse_caption_records("0:00\nHello\n1:2:3\nWorld\n0:09").unwrap_err();
    assert_eq!(
        err,
        TranscriptError::malformed(3, "1:2:3", TimingLineFault::WrongPartCount(3))
    );

    let err = parse_caption_records("0:00\nHello\nab:cd\n").unwrap_err();
    assert_eq!(err.line_number(), 3);
}

#[test]
fn test_caption_record_serializes_offsets() {
    let json = serde_json::to_value(record(2, 65, 70, "Hi")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"index": 2, "start": 65, "end": 70, "text": "Hi"})
    );
}
