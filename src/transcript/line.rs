use super::types::{TimeMarker, TranscriptLine};
use crate::errors::{TimingLineFault, TranscriptError};
use once_cell::sync::Lazy;
use regex::Regex;

// Anything shaped like `12:34`, `1:2:3` or `ab:cd` is treated as a timing line,
// except a `minutes:seconds` pair whose numeric seconds are not two digits (`1:5`).
// There is no way to write caption text with this shape.
static TIMING_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9A-Za-z]{1,3}(?::[0-9A-Za-z]{1,3})+$").expect("valid timing pattern")
});

/// Classify one raw input line.
///
/// Returns `Ok(None)` for blank lines. `line_number` is 1-based and only used
/// for error reporting.
pub fn classify_line(
    line_number: usize,
    raw: &str,
) -> Result<Option<TranscriptLine<'_>>, TranscriptError> {
    let line = raw.trim();
    if line.is_empty() {
        return Ok(None);
    }

    if !is_timing_line(line) {
        return Ok(Some(TranscriptLine::Fragment(line)));
    }

    parse_time_marker(line)
        .map(|marker| Some(TranscriptLine::Marker(marker)))
        .map_err(|reason| TranscriptError::malformed(line_number, line, reason))
}

/// Check whether an already trimmed line has the shape of a timing line
pub fn is_timing_line(line: &str) -> bool {
    if !TIMING_SHAPE.is_match(line) {
        return false;
    }
    match line.split_once(':') {
        Some((_, seconds)) if !seconds.contains(':') && is_ascii_digits(seconds) => {
            seconds.len() == 2
        }
        _ => true,
    }
}

/// Parse a trimmed `M:SS`, `MM:SS` or `MMM:SS` marker
pub fn parse_time_marker(line: &str) -> Result<TimeMarker, TimingLineFault> {
    let parts: Vec<&str> = line.split(':').collect();
    let [minutes, seconds] = parts[..] else {
        return Err(TimingLineFault::WrongPartCount(parts.len()));
    };

    if !(1..=3).contains(&minutes.len()) || !is_ascii_digits(minutes) {
        return Err(TimingLineFault::InvalidMinutes);
    }
    if seconds.len() != 2 || !is_ascii_digits(seconds) {
        return Err(TimingLineFault::InvalidSeconds);
    }

    // At most three digits each, so these cannot overflow
    let minutes = minutes
        .parse::<u32>()
        .map_err(|_| TimingLineFault::InvalidMinutes)?;
    let seconds = seconds
        .parse::<u32>()
        .map_err(|_| TimingLineFault::InvalidSeconds)?;

    Ok(TimeMarker { minutes, seconds })
}

fn is_ascii_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
