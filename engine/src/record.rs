use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::tictactoe::CELL_COUNT;

/// What gets stored for a finished game. The history alone replays the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub difficulty: u8,
    pub history: Vec<usize>,
}

impl GameRecord {
    pub fn validate(&self) -> Result<(), String> {
        if self.history.len() > CELL_COUNT {
            return Err(format!(
                "history holds {} moves, a game has at most {}",
                self.history.len(),
                CELL_COUNT
            ));
        }
        if let Some(index) = self.history.iter().find(|&&index| index >= CELL_COUNT) {
            return Err(format!("history contains invalid cell {}", index));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum RecordError {
    Io(std::io::Error),
    Serialize(serde_yaml_ng::Error),
    Invalid(String),
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordError::Io(e) => write!(f, "IO error: {}", e),
            RecordError::Serialize(e) => write!(f, "Serialization error: {}", e),
            RecordError::Invalid(reason) => write!(f, "Invalid record: {}", reason),
        }
    }
}

impl std::error::Error for RecordError {}

impl From<std::io::Error> for RecordError {
    fn from(e: std::io::Error) -> Self {
        RecordError::Io(e)
    }
}

impl From<serde_yaml_ng::Error> for RecordError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        RecordError::Serialize(e)
    }
}

pub trait RecordSink {
    fn store(&self, record: &GameRecord) -> Result<(), RecordError>;
}

const DOCUMENT_SEPARATOR: &str = "---";

/// Appends each record to a file as its own YAML document.
pub struct YamlFileRecordSink {
    path: PathBuf,
}

impl YamlFileRecordSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSink for YamlFileRecordSink {
    fn store(&self, record: &GameRecord) -> Result<(), RecordError> {
        let document = serde_yaml_ng::to_string(record)?;
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        // leading newline closes whatever the file ended with
        write!(file, "\n{}\n{}", DOCUMENT_SEPARATOR, document)?;
        Ok(())
    }
}

pub fn load_records(path: &Path) -> Result<Vec<GameRecord>, RecordError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    Ok(parse_documents(&content))
}

/// Documents that do not decode as a record are skipped, so one damaged entry
/// never hides the records stored after it.
fn parse_documents(content: &str) -> Vec<GameRecord> {
    let mut records = Vec::new();
    let mut document = String::new();

    for line in content.lines().chain(std::iter::once(DOCUMENT_SEPARATOR)) {
        if line.trim_end() != DOCUMENT_SEPARATOR {
            document.push_str(line);
            document.push('\n');
            continue;
        }

        if !document.trim().is_empty() {
            match serde_yaml_ng::from_str::<GameRecord>(&document) {
                Ok(record) => records.push(record),
                Err(e) => crate::log!("Skipping unreadable game record: {}", e),
            }
        }
        document.clear();
    }

    records
}

/// Fire and forget: the game never learns whether storing worked.
pub fn submit_record(sink: &dyn RecordSink, record: &GameRecord) {
    let result = record
        .validate()
        .map_err(RecordError::Invalid)
        .and_then(|_| sink.store(record));

    match result {
        Ok(()) => crate::log!("Game record stored ({} moves)", record.history.len()),
        Err(e) => crate::log!("Dropping game record: {}", e),
    }
}
