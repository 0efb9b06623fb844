pub mod transcript;
pub use transcript::{parse_caption_records, CaptionRecord, TimeMarker};

pub mod subtitles;
pub use subtitles::{format_timestamp, render_srt};

pub mod batch;
pub use batch::{
    convert_batch, BatchReport, FileOutcome, FileReport, LocalDirectory, SubtitleSink,
    TranscriptSource,
};

pub mod errors;
pub use errors::{ConverterError, ConverterResult, TimingLineFault, TranscriptError};

/// Convert the full text of one transcript into an SRT document.
///
/// An empty string means the transcript held no captions and nothing should
/// be written. A malformed timing line anywhere fails the whole transcript.
pub fn convert_transcript(transcript: &str) -> Result<String, TranscriptError> {
    let records = parse_caption_records(transcript)?;
    Ok(render_srt(&records))
}
