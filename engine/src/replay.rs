use std::fmt;
use std::path::Path;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::game_state::GameState;
use crate::types::{GameStatus, Mark};

pub const RECORD_FILE_EXTENSION: &str = "tttrecord";
pub const RECORD_VERSION: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedMove {
    pub mark: Mark,
    pub index: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub version: u32,
    pub engine_version: String,
    pub seed: u64,
    pub moves: Vec<RecordedMove>,
    pub outcome: GameStatus,
}

pub struct GameRecorder {
    engine_version: String,
    seed: u64,
    moves: Vec<RecordedMove>,
}

impl GameRecorder {
    pub fn new(engine_version: String, seed: u64) -> Self {
        Self {
            engine_version,
            seed,
            moves: Vec::new(),
        }
    }

    pub fn record_move(&mut self, mark: Mark, index: usize) {
        self.moves.push(RecordedMove { mark, index });
    }

    pub fn finalize(&mut self, outcome: GameStatus) -> GameRecord {
        GameRecord {
            version: RECORD_VERSION,
            engine_version: self.engine_version.clone(),
            seed: self.seed,
            moves: std::mem::take(&mut self.moves),
            outcome,
        }
    }
}

#[derive(Debug)]
pub enum RecordError {
    IoError(std::io::Error),
    FormatError(serde_yaml_ng::Error),
    UnsupportedVersion { found: u32, expected: u32 },
    InvalidMove(String),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::IoError(e) => write!(f, "IO error: {}", e),
            RecordError::FormatError(e) => write!(f, "Format error: {}", e),
            RecordError::UnsupportedVersion { found, expected } => {
                write!(
                    f,
                    "Unsupported record version: found {}, expected {}",
                    found, expected
                )
            }
            RecordError::InvalidMove(msg) => write!(f, "Invalid recorded move: {}", msg),
        }
    }
}

impl std::error::Error for RecordError {}

impl From<std::io::Error> for RecordError {
    fn from(e: std::io::Error) -> Self {
        RecordError::IoError(e)
    }
}

impl From<serde_yaml_ng::Error> for RecordError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        RecordError::FormatError(e)
    }
}

pub fn record_to_yaml(record: &GameRecord) -> Result<String, RecordError> {
    Ok(serde_yaml_ng::to_string(record)?)
}

pub fn record_from_yaml(content: &str) -> Result<GameRecord, RecordError> {
    let record: GameRecord = serde_yaml_ng::from_str(content)?;
    if record.version != RECORD_VERSION {
        return Err(RecordError::UnsupportedVersion {
            found: record.version,
            expected: RECORD_VERSION,
        });
    }
    Ok(record)
}

pub fn save_record(path: &Path, record: &GameRecord) -> Result<(), RecordError> {
    let content = record_to_yaml(record)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_record(path: &Path) -> Result<GameRecord, RecordError> {
    let content = std::fs::read_to_string(path)?;
    record_from_yaml(&content)
}

pub fn generate_record_filename(engine_version: &str) -> String {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    format!(
        "tictactoe_{}_{}.{}",
        engine_version, timestamp, RECORD_FILE_EXTENSION
    )
}

// Re-drives the recorded moves through a fresh game; the result must land
// on the recorded outcome.
pub fn replay_record(record: &GameRecord) -> Result<GameState, RecordError> {
    let mut state = GameState::new();
    for recorded in &record.moves {
        state
            .place_mark(recorded.mark, recorded.index)
            .map_err(|e| {
                RecordError::InvalidMove(format!(
                    "{} at cell {}: {}",
                    recorded.mark, recorded.index, e
                ))
            })?;
    }
    if state.status() != record.outcome {
        return Err(RecordError::InvalidMove(format!(
            "replay ended {}, record says {}",
            state.status(),
            record.outcome
        )));
    }
    Ok(state)
}
