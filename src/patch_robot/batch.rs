//! Batch driver: applies the patcher to each path independently and
//! collects structured outcomes for the caller to report.
//!
//! The driver continues on error: a failing path never prevents later
//! paths from being attempted, and every failure is recorded with its
//! path. Printing and exit codes are the binary's job; nothing here
//! touches stdout or stderr.

use crate::error::PatchError;
use crate::patcher::patch_file;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Per-path result, in argument order.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<(), PatchError>,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
    pub messages: Vec<CmdMessage>,
}

impl BatchReport {
    pub fn patched(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.patched()
    }

    pub fn all_patched(&self) -> bool {
        self.failed() == 0
    }

    fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}

/// Patch each path in order. No state is shared between iterations; an
/// empty batch yields an empty, successful report.
pub fn run(paths: &[PathBuf]) -> BatchReport {
    let mut report = BatchReport::default();

    for path in paths {
        let result = patch_file(path);
        match &result {
            Ok(()) => {
                report.add_message(CmdMessage::success(format!("Patched {}", path.display())))
            }
            Err(e) => report.add_message(CmdMessage::error(format!("{}: {}", path.display(), e))),
        }
        report.outcomes.push(FileOutcome {
            path: path.clone(),
            result,
        });
    }

    report
}
