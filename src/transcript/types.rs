use serde::Serialize;

/// A `minutes:seconds` offset from the start of the transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeMarker {
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeMarker {
    /// Elapsed time in whole seconds.
    pub fn offset(&self) -> u32 {
        self.minutes * 60 + self.seconds
    }
}

/// A non-blank transcript line after classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptLine<'a> {
    Marker(TimeMarker),
    Fragment(&'a str),
}

/// One timed caption, ready to be rendered as an SRT block
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CaptionRecord {
    pub index: usize,
    /// Start offset in seconds
    pub start: u32,
    /// End offset in seconds
    pub end: u32,
    pub text: String,
}
