use crate::table::TagTable;
use crate::walker::WalkStats;

pub mod report;
pub mod scan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// What happened to one candidate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Decoded; `recorded` values were new to the table.
    Decoded { recorded: usize },
    NotDicom,
    MissingDataset,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    pub walk: WalkStats,
    pub decoded: usize,
    pub not_dicom: usize,
    pub missing_dataset: usize,
}

impl ScanStats {
    pub fn tally(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Decoded { .. } => self.decoded += 1,
            FileOutcome::NotDicom => self.not_dicom += 1,
            FileOutcome::MissingDataset => self.missing_dataset += 1,
        }
    }

    pub fn skipped(&self) -> usize {
        self.not_dicom + self.missing_dataset
    }
}

#[derive(Debug, Default)]
pub struct ScanResult {
    pub table: TagTable,
    pub stats: ScanStats,
    pub messages: Vec<CmdMessage>,
}

impl ScanResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}
