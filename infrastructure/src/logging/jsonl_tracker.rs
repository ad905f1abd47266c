//! JSONL file writer for run events.
//!
//! Each [`RunEvent`] is serialized as a single JSON line with `type`,
//! `timestamp` and `run_id` fields, appended to the file via a buffered writer.

use council_application::ports::run_tracker::{RunEvent, RunTracker};
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL run tracker that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlRunTracker {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
    run_id: String,
}

impl JsonlRunTracker {
    /// Create a new tracker appending to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>, run_id: impl Into<String>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create run log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match File::options().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open run log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
            run_id: run_id.into(),
        })
    }

    /// Run id derived from the current UTC time, e.g. `run-20260101T120000123`
    pub fn generate_run_id() -> String {
        format!("run-{}", chrono::Utc::now().format("%Y%m%dT%H%M%S%3f"))
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::other("run log writer poisoned"))?;
        writeln!(writer, "{}", line)?;
        writer.flush()
    }
}

impl RunTracker for JsonlRunTracker {
    fn record(&self, event: RunEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        // Build the record: merge payload with type + timestamp + run_id
        let record = if let Value::Object(mut map) = event.payload {
            map.insert(
                "type".to_string(),
                Value::String(event.event_type.to_string()),
            );
            map.insert("timestamp".to_string(), Value::String(timestamp));
            map.insert("run_id".to_string(), Value::String(self.run_id.clone()));
            Value::Object(map)
        } else {
            serde_json::json!({
                "type": event.event_type,
                "timestamp": timestamp,
                "run_id": self.run_id,
                "data": event.payload,
            })
        };

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Err(e) = self.write_line(&line) {
            warn!("Could not write run log {}: {}", self.path.display(), e);
        }
    }
}

impl Drop for JsonlRunTracker {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
