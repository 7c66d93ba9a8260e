//! Football match outcome prediction
//!
//! Serves a pre-trained three-way outcome classifier: look up two teams,
//! assemble a feature vector from kickoff time and rolling form, and report
//! win/draw/loss probabilities.

pub mod artifacts;
pub mod features;
pub mod model;
pub mod predict;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Unique identifier for a team, assigned by the training pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub i64);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Team({})", self.0)
    }
}

/// Match outcome categories, in the model's output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    AwayWin,
    Draw,
    HomeWin,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::AwayWin => write!(f, "Away win"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::HomeWin => write!(f, "Home win"),
        }
    }
}

/// A single prediction request: two distinct teams and a kickoff slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchQuery {
    pub home_team: String,
    pub away_team: String,
    pub date: NaiveDate,
    pub kickoff: NaiveTime,
}

/// Application-wide errors
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("Failed to load artifact {path}: {message}")]
    ArtifactLoad { path: String, message: String },

    #[error("Unknown team: {0}")]
    UnknownTeam(String),

    #[error("Home and away team must differ (got {0} for both)")]
    SameTeam(String),

    #[error("Malformed model output: {0}")]
    MalformedModelOutput(String),

    #[error("Model inference failed: {0}")]
    Inference(#[from] ort::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, PredictError>;

/// Application configuration loaded from config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub artifacts: ArtifactConfig,
    pub defaults: DefaultsConfig,
}

/// Paths to the artifact trio produced by the training pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactConfig {
    pub model_path: String,
    pub catalog_path: String,
    pub form_path: String,
}

/// Placeholder kickoff slot used when a prediction omits date or time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub match_date: NaiveDate,
    pub kickoff_time: NaiveTime,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            artifacts: ArtifactConfig {
                model_path: "artifacts/outcome_model.onnx".to_string(),
                catalog_path: "artifacts/team_catalog.json".to_string(),
                form_path: "artifacts/team_form.json".to_string(),
            },
            defaults: DefaultsConfig {
                match_date: NaiveDate::from_ymd_opt(2025, 8, 12).unwrap(),
                kickoff_time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
            },
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PredictError::Config(format!("Failed to read config file {}: {}", path, e))
        })?;
        toml::from_str(&content)
            .map_err(|e| PredictError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PredictError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
