//! Rolling-average form table

use crate::{PredictError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Per-team rolling-average statistics in a fixed, model-defined column order.
///
/// One row per team: the most recent known form. The same table serves home
/// and away lookups; form is not tracked separately by venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamForm {
    columns: Vec<String>,
    teams: HashMap<String, Vec<f32>>,
}

impl TeamForm {
    /// Load the form table from a JSON artifact
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| PredictError::ArtifactLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let form: TeamForm =
            serde_json::from_str(&content).map_err(|e| PredictError::ArtifactLoad {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        form.check().map_err(|message| PredictError::ArtifactLoad {
            path: path.display().to_string(),
            message,
        })?;
        Ok(form)
    }

    /// Build a form table directly from its parts
    pub fn from_parts(columns: Vec<String>, teams: HashMap<String, Vec<f32>>) -> Result<Self> {
        let form = TeamForm { columns, teams };
        form.check().map_err(PredictError::Config)?;
        Ok(form)
    }

    fn check(&self) -> std::result::Result<(), String> {
        if self.teams.is_empty() {
            return Err("form table contains no teams".to_string());
        }
        for (team, row) in &self.teams {
            if row.len() != self.columns.len() {
                return Err(format!(
                    "form row for {} has {} values, expected {}",
                    team,
                    row.len(),
                    self.columns.len()
                ));
            }
        }
        Ok(())
    }

    /// Most recent rolling-average row for a team
    pub fn row(&self, name: &str) -> Result<&[f32]> {
        self.teams
            .get(name)
            .map(|row| row.as_slice())
            .ok_or_else(|| PredictError::UnknownTeam(name.to_string()))
    }

    /// Column names in row order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of statistics per row
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of teams with a form row
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}
