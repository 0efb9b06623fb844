use super::utils::format_timestamp;
use crate::transcript::CaptionRecord;

/// Render caption records as an SRT document.
///
/// An empty slice renders as an empty string. Otherwise the document starts
/// with one blank line and every block ends with a blank separator line.
pub fn render_srt(records: &[CaptionRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut srt = String::from("\n");
    for record in records {
        srt.push_str(&format_block(record));
    }
    srt
}

fn format_block(record: &CaptionRecord) -> String {
    format!(
        "{}\n{} --> {}\n{}\n\n",
        record.index,
        format_timestamp(record.start),
        format_timestamp(record.end),
        record.text
    )
}
