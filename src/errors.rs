use std::io;
use thiserror::Error;

/// Enumeration of all possible errors that can occur while converting transcripts
#[derive(Debug, Error)]
pub enum ConverterError {
    #[error("Transcript error: {0}")]
    Transcript(#[from] TranscriptError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Transcript parsing errors. Any of these aborts conversion of the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscriptError {
    /// A marker-shaped line that is not a valid `minutes:seconds` marker
    #[error("incorrect timing line {line_number} ({line:?}): {reason}")]
    MalformedTimingLine {
        line_number: usize,
        line: String,
        reason: TimingLineFault,
    },
}

impl TranscriptError {
    pub fn malformed(line_number: usize, line: impl Into<String>, reason: TimingLineFault) -> Self {
        TranscriptError::MalformedTimingLine {
            line_number,
            line: line.into(),
            reason,
        }
    }

    /// 1-based line number of the offending line.
    pub fn line_number(&self) -> usize {
        match self {
            TranscriptError::MalformedTimingLine { line_number, .. } => *line_number,
        }
    }
}

/// Why a timing line was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimingLineFault {
    #[error("expected 2 colon-separated parts, found {0}")]
    WrongPartCount(usize),
    #[error("minutes must be 1 to 3 digits")]
    InvalidMinutes,
    #[error("seconds must be exactly 2 digits")]
    InvalidSeconds,
}

// Conversion to io::Error for callers working in io::Result
impl From<TranscriptError> for io::Error {
    fn from(err: TranscriptError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

impl From<ConverterError> for io::Error {
    fn from(err: ConverterError) -> Self {
        match err {
            ConverterError::Io(err) => err,
            other => io::Error::other(other),
        }
    }
}

// Type alias for Result with ConverterError
pub type ConverterResult<T> = Result<T, ConverterError>;
