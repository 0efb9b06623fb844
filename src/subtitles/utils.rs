/// Format a whole-second offset as an SRT timestamp.
///
/// Hours are not padded, minutes and seconds always take two digits and the
/// millisecond field is always `000`.
pub fn format_timestamp(total_seconds: u32) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds - hours * 3600) / 60;
    let secs = total_seconds - hours * 3600 - minutes * 60;

    format!("{}:{:02}:{:02},000", hours, minutes, secs)
}
