//! Append-only audit trail of service operations.
//!
//! Every entry is a short category label (`"Find Author - Warning"`) plus a
//! free-text message. Recording never fails or blocks the caller: sinks that
//! can hit I/O errors report them through `tracing` and carry on.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::{mpsc, oneshot};
use tracing::{info, warn};

/// Severity part of an audit category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuditLevel {
    Access,
    Success,
    Warning,
    Error,
}

impl AuditLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditLevel::Access => "Access",
            AuditLevel::Success => "Success",
            AuditLevel::Warning => "Warning",
            AuditLevel::Error => "Error",
        }
    }
}

/// Build the `"<Action> - <Level>"` category label.
pub fn category(action: &str, level: AuditLevel) -> String {
    format!("{} - {}", action, level.as_str())
}

/// Sink for audit entries.
pub trait AuditLog: Send + Sync {
    fn record(&self, category: &str, message: &str);
}

/// Emits entries as `tracing` events on the `audit` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingAuditLog;

impl AuditLog for TracingAuditLog {
    fn record(&self, category: &str, message: &str) {
        info!(target: "audit", %category, "{}", message);
    }
}

/// Discards every entry.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopAuditLog;

impl AuditLog for NoopAuditLog {
    fn record(&self, _category: &str, _message: &str) {}
}

enum FileWrite {
    Line(String),
    Flush(oneshot::Sender<()>),
}

/// Appends one timestamped line per entry to a text file. Lines are handed to a
/// writer task so `record` never blocks the caller on file I/O.
pub struct FileAuditLog {
    tx: mpsc::UnboundedSender<FileWrite>,
}

impl FileAuditLog {
    /// Open (or create) the file for appending and start its writer task.
    /// Must be called inside a tokio runtime.
    pub async fn open<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path).await?;
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(write_lines(path, file, rx));
        Ok(Self { tx })
    }

    /// Resolves once every line recorded so far has reached the file.
    pub async fn flush(&self) {
        let (done, wait) = oneshot::channel();
        if self.tx.send(FileWrite::Flush(done)).is_ok() {
            let _ = wait.await;
        }
    }
}

async fn write_lines(path: PathBuf, mut file: File, mut rx: mpsc::UnboundedReceiver<FileWrite>) {
    while let Some(msg) = rx.recv().await {
        match msg {
            FileWrite::Line(line) => {
                if let Err(e) = file.write_all(line.as_bytes()).await {
                    warn!(path = %path.display(), error = %e, "audit log write failed");
                }
            }
            FileWrite::Flush(done) => {
                if let Err(e) = file.flush().await {
                    warn!(path = %path.display(), error = %e, "audit log flush failed");
                }
                let _ = done.send(());
            }
        }
    }
}

impl AuditLog for FileAuditLog {
    fn record(&self, category: &str, message: &str) {
        let line = format!(
            "[{}] [{}] {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            category,
            message
        );
        if self.tx.send(FileWrite::Line(line)).is_err() {
            warn!(%category, "audit writer stopped; entry dropped");
        }
    }
}

/// In-memory sink for tests and doc examples
pub mod memory {
    use super::*;

    #[derive(Default)]
    pub struct MemoryAuditLog {
        entries: Mutex<Vec<(String, String)>>,
    }

    impl MemoryAuditLog {
        pub fn entries(&self) -> Vec<(String, String)> {
            match self.entries.lock() {
                Ok(e) => e.clone(),
                Err(poisoned) => poisoned.into_inner().clone(),
            }
        }

        pub fn categories(&self) -> Vec<String> {
            self.entries().into_iter().map(|(c, _)| c).collect()
        }

        pub fn contains(&self, category: &str) -> bool {
            self.entries().iter().any(|(c, _)| c == category)
        }
    }

    impl AuditLog for MemoryAuditLog {
        fn record(&self, category: &str, message: &str) {
            let mut entries = match self.entries.lock() {
                Ok(e) => e,
                Err(poisoned) => poisoned.into_inner(),
            };
            entries.push((category.to_string(), message.to_string()));
        }
    }
}
