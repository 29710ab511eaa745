use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use texprep_core::{ProgressEvent, ReportSink};

/// Renders one human-readable progress line per event. Sizes print as
/// `(width, height)` tuples.
pub fn render_line(event: &ProgressEvent) -> String {
    match event {
        ProgressEvent::OriginalSize {
            path,
            width,
            height,
        } => format!("Original size of {}: ({}, {})", path, width, height),
        ProgressEvent::Resized {
            path,
            width,
            height,
        } => format!("Resized {} to ({}, {})", path, width, height),
        ProgressEvent::FileNotFound { path } => format!("File not found: {}", path),
        ProgressEvent::Failed { path, message } => {
            format!("Error resizing {}: {}", path, message)
        }
    }
}

pub struct StdoutReporter;

impl ReportSink for StdoutReporter {
    fn emit(&self, event: ProgressEvent) {
        println!("{}", render_line(&event));
    }
}

/// Appends one JSON line per event. Its own I/O failures are dropped so
/// reporting never disturbs the resize pass.
pub struct FileReporter {
    path: PathBuf,
}

impl FileReporter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn write_line(&self, line: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).context("creating report log parent directory")?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .context("opening report file")?;
        writeln!(file, "{}", line).context("writing report line")?;
        Ok(())
    }
}

impl ReportSink for FileReporter {
    fn emit(&self, event: ProgressEvent) {
        if let Ok(line) = serde_json::to_string(&event) {
            let _ = self.write_line(&line);
        }
    }
}
