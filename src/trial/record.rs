//! Session result log
//!
//! Defines the serialization format for a completed experiment session: one
//! record per rating trial plus the questionnaire item scores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// Current session log format version
pub const CURRENT_FORMAT_VERSION: &str = "1.0";

/// Outcome of one completed rating trial
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialRecord {
    /// Which stimulus was shown (e.g. an image name)
    pub stimulus_id: String,
    /// Nominal speed presented, in rating units (speed / 10)
    pub nominal_speed: i32,
    /// The participant's ordinal score, 1..=N
    pub score: u8,
}

/// Session log metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogMetadata {
    /// Unique session ID
    pub id: Uuid,
    /// Participant or session label
    pub participant: String,
    /// Session start time
    pub started_at: DateTime<Utc>,
    /// Session end time
    pub ended_at: Option<DateTime<Utc>>,
    /// Total rating trials recorded
    pub trial_count: usize,
    /// Version of the log format
    pub format_version: String,
}

impl LogMetadata {
    /// Create metadata for a new session
    pub fn new(participant: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            participant,
            started_at: Utc::now(),
            ended_at: None,
            trial_count: 0,
            format_version: CURRENT_FORMAT_VERSION.to_string(),
        }
    }

    /// Finalize the session with end time and trial count
    pub fn finalize(&mut self, trial_count: usize) {
        self.ended_at = Some(Utc::now());
        self.trial_count = trial_count;
    }
}

impl Default for LogMetadata {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            participant: String::new(),
            started_at: Utc::now(),
            ended_at: None,
            trial_count: 0,
            format_version: CURRENT_FORMAT_VERSION.to_string(),
        }
    }
}

/// Everything one experiment session produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionLog {
    /// Session metadata
    pub metadata: LogMetadata,
    /// One record per completed rating trial, in presentation order
    pub records: Vec<TrialRecord>,
    /// Questionnaire item scores, in item order
    pub questionnaire_scores: Vec<u8>,
}

impl SessionLog {
    /// Create a new empty session log
    pub fn new(participant: String) -> Self {
        Self {
            metadata: LogMetadata::new(participant),
            records: Vec::new(),
            questionnaire_scores: Vec::new(),
        }
    }

    /// Append a completed rating trial
    pub fn add_record(&mut self, record: TrialRecord) {
        self.records.push(record);
    }

    /// Append one questionnaire item score
    pub fn add_questionnaire_score(&mut self, score: u8) {
        self.questionnaire_scores.push(score);
    }

    /// Number of rating trials recorded
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether any rating trial has been recorded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of the questionnaire item scores
    pub fn questionnaire_total(&self) -> u32 {
        self.questionnaire_scores.iter().map(|&s| s as u32).sum()
    }

    /// Finalize the log
    pub fn finalize(&mut self) {
        self.metadata.finalize(self.records.len());
    }

    /// Save the log to a file
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a log from a file.
    ///
    /// Logs a warning if the file was saved with an unknown format version,
    /// but still attempts to deserialize it (forward-compatible via
    /// `#[serde(default)]` on the metadata).
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let log: SessionLog = serde_json::from_str(&content)?;
        if log.metadata.format_version != CURRENT_FORMAT_VERSION {
            tracing::warn!(
                participant = %log.metadata.participant,
                found = %log.metadata.format_version,
                expected = CURRENT_FORMAT_VERSION,
                "Session log has different format version; some fields may use default values"
            );
        }
        Ok(log)
    }
}
