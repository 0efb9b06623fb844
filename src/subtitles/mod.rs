mod utils;
mod writer;

pub use utils::format_timestamp;
pub use writer::render_srt;
