use super::line::classify_line;
use super::types::{CaptionRecord, TranscriptLine};
use crate::errors::TranscriptError;
use log::{debug, warn};

/// Duration given to the last caption, which has no closing marker
pub const TAIL_DURATION_SECS: u32 = 3;

/// Running state of the single forward pass over a transcript.
///
/// `pending` holds the caption text seen since the last marker and is empty
/// between captions, so there is no separate idle state.
#[derive(Debug)]
pub(crate) struct CaptionAccumulator {
    records: Vec<CaptionRecord>,
    next_index: usize,
    previous_offset: u32,
    pending: String,
}

impl CaptionAccumulator {
    pub(crate) fn new() -> Self {
        Self {
            records: Vec::new(),
            next_index: 1,
            previous_offset: 0,
            pending: String::new(),
        }
    }

    pub(crate) fn push(mut self, line: TranscriptLine<'_>) -> Self {
        match line {
            TranscriptLine::Marker(marker) => self.close_at(marker.offset()),
            TranscriptLine::Fragment(text) => self.append(text),
        }
        self
    }

    fn append(&mut self, text: &str) {
        if !self.pending.is_empty() {
            self.pending.push('\n');
        }
        self.pending.push_str(text);
        let trimmed_len = self.pending.trim_end().len();
        self.pending.truncate(trimmed_len);
    }

    fn close_at(&mut self, offset: u32) {
        let text = std::mem::take(&mut self.pending);
        let start = std::mem::replace(&mut self.previous_offset, offset);

        if text.is_empty() {
            return;
        }
        if offset == start {
            debug!("Dropping zero-length caption at {}s", start);
            return;
        }
        if offset < start {
            warn!(
                "Dropping caption {:?}: marker {}s is earlier than {}s",
                text, offset, start
            );
            return;
        }
        self.emit(start, offset, text);
    }

    fn emit(&mut self, start: u32, end: u32, text: String) {
        debug!("Caption #{}: {}s -> {}s", self.next_index, start, end);
        self.records.push(CaptionRecord {
            index: self.next_index,
            start,
            end,
            text,
        });
        self.next_index += 1;
    }

    pub(crate) fn finish(mut self) -> Vec<CaptionRecord> {
        if !self.pending.is_empty() {
            let text = std::mem::take(&mut self.pending);
            let start = self.previous_offset;
            self.emit(start, start + TAIL_DURATION_SECS, text);
        }
        self.records
    }
}

/// Turn a whole transcript into caption records.
///
/// Any malformed timing line aborts the conversion; no partial result is
/// returned in that case.
pub fn parse_caption_records(transcript: &str) -> Result<Vec<CaptionRecord>, TranscriptError> {
    let accumulator = transcript.split('\n').enumerate().try_fold(
        CaptionAccumulator::new(),
        |acc, (i, raw)| {
            Ok::<_, TranscriptError>(match classify_line(i + 1, raw)? {
                Some(line) => acc.push(line),
                None => acc,
            })
        },
    )?;

    Ok(accumulator.finish())
}
