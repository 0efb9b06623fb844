use super::is_candidate_name;
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where transcripts come from
#[cfg_attr(test, mockall::automock)]
pub trait TranscriptSource {
    /// Names of the candidate transcripts, in processing order
    fn candidates(&self) -> io::Result<Vec<String>>;
    fn read_transcript(&self, name: &str) -> io::Result<String>;
}

/// Where converted subtitles go
#[cfg_attr(test, mockall::automock)]
pub trait SubtitleSink {
    fn write_subtitles(&self, name: &str, contents: &str) -> io::Result<()>;
}

/// A directory on the local filesystem, used both as source and sink
#[derive(Debug, Clone)]
pub struct LocalDirectory {
    root: PathBuf,
}

impl LocalDirectory {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        LocalDirectory {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TranscriptSource for LocalDirectory {
    fn candidates(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                debug!("Skipping non UTF-8 file name {:?}", entry.file_name());
                continue;
            };
            if !is_candidate_name(&name) {
                continue;
            }
            // Follows symlinks, so a link to a regular file still counts
            match fs::metadata(entry.path()) {
                Ok(meta) if meta.is_file() => names.push(name),
                Ok(_) => debug!("Skipping {}: not a regular file", name),
                Err(e) => debug!("Skipping {}: {}", name, e),
            }
        }

        names.sort();
        Ok(names)
    }

    fn read_transcript(&self, name: &str) -> io::Result<String> {
        let bytes = fs::read(self.root.join(name))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl SubtitleSink for LocalDirectory {
    fn write_subtitles(&self, name: &str, contents: &str) -> io::Result<()> {
        fs::write(self.root.join(name), contents)
    }
}
