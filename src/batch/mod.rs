mod source;

pub use source::{LocalDirectory, SubtitleSink, TranscriptSource};

#[cfg(test)]
pub use source::{MockSubtitleSink, MockTranscriptSource};

use crate::convert_transcript;
use crate::errors::{ConverterResult, TranscriptError};
use log::{debug, info, warn};
use std::io;

const TRANSCRIPT_EXTENSION: &str = ".txt";
const SUBTITLE_EXTENSION: &str = ".srt";

/// Check whether a file name is a transcript candidate (`?.txt` or longer)
pub fn is_candidate_name(name: &str) -> bool {
    name.len() > TRANSCRIPT_EXTENSION.len() && name.ends_with(TRANSCRIPT_EXTENSION)
}

/// Name of the subtitle file produced for a transcript
pub fn target_name(name: &str) -> String {
    let stem = name.strip_suffix(TRANSCRIPT_EXTENSION).unwrap_or(name);
    format!("{}{}", stem, SUBTITLE_EXTENSION)
}

/// What happened to a single transcript
#[derive(Debug)]
pub enum FileOutcome {
    Converted { target: String },
    /// The transcript held no captions, nothing was written
    SkippedEmpty,
    SkippedParseError(TranscriptError),
    /// Reading the transcript or writing the subtitles failed
    SkippedIo(io::Error),
}

impl FileOutcome {
    pub fn is_converted(&self) -> bool {
        matches!(self, FileOutcome::Converted { .. })
    }
}

#[derive(Debug)]
pub struct FileReport {
    pub source: String,
    pub outcome: FileOutcome,
}

/// Per-file outcomes of one batch run, in processing order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub entries: Vec<FileReport>,
}

impl BatchReport {
    pub fn converted_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.outcome.is_converted())
            .count()
    }

    pub fn nothing_converted(&self) -> bool {
        self.converted_count() == 0
    }
}

/// Convert every candidate transcript of `source`, writing results to `sink`.
///
/// A failing file is recorded in the report and the batch moves on; only a
/// failure to list the candidates is returned as an error.
pub fn convert_batch<S, K>(source: &S, sink: &K) -> ConverterResult<BatchReport>
where
    S: TranscriptSource + ?Sized,
    K: SubtitleSink + ?Sized,
{
    let names = source.candidates()?;
    info!("Converting {} transcript(s)", names.len());

    let entries = names
        .into_iter()
        .map(|name| {
            let outcome = convert_file(source, sink, &name);
            FileReport {
                source: name,
                outcome,
            }
        })
        .collect();

    Ok(BatchReport { entries })
}

fn convert_file<S, K>(source: &S, sink: &K, name: &str) -> FileOutcome
where
    S: TranscriptSource + ?Sized,
    K: SubtitleSink + ?Sized,
{
    let transcript = match source.read_transcript(name) {
        Ok(transcript) => transcript,
        Err(e) => {
            warn!("Error reading file {}: {}", name, e);
            return FileOutcome::SkippedIo(e);
        }
    };

    let srt = match convert_transcript(&transcript) {
        Ok(srt) => srt,
        Err(e) => {
            warn!("Ignoring file {}: {}", name, e);
            return FileOutcome::SkippedParseError(e);
        }
    };

    if srt.is_empty() {
        debug!("No captions in {}", name);
        return FileOutcome::SkippedEmpty;
    }

    let target = target_name(name);
    match sink.write_subtitles(&target, &srt) {
        Ok(()) => {
            info!("Created {}", target);
            FileOutcome::Converted { target }
        }
        Err(e) => {
            warn!("Error writing srt file {}: {}", target, e);
            FileOutcome::SkippedIo(e)
        }
    }
}
