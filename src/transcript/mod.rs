mod line;
mod parser;
mod types;

pub use line::{classify_line, is_timing_line, parse_time_marker};
pub use parser::{parse_caption_records, TAIL_DURATION_SECS};
pub use types::{CaptionRecord, TimeMarker, TranscriptLine};

#[cfg(test)]
pub mod unit_test;
