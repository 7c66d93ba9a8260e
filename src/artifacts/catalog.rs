//! Team name to identifier catalog

use crate::{PredictError, Result, TeamId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Mapping from team display name to the identifier the model was trained with.
///
/// Immutable after load. Names iterate in sorted order, which is the order
/// selection lists are presented in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamCatalog(BTreeMap<String, i64>);

impl TeamCatalog {
    /// Load the catalog from a JSON artifact
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| PredictError::ArtifactLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let catalog: TeamCatalog =
            serde_json::from_str(&content).map_err(|e| PredictError::ArtifactLoad {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        if catalog.0.is_empty() {
            return Err(PredictError::ArtifactLoad {
                path: path.display().to_string(),
                message: "catalog contains no teams".to_string(),
            });
        }
        Ok(catalog)
    }

    /// Build a catalog directly from name/id pairs
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, i64)>,
    {
        TeamCatalog(entries.into_iter().collect())
    }

    /// Look up the model identifier for a team
    pub fn id(&self, name: &str) -> Result<TeamId> {
        self.0
            .get(name)
            .copied()
            .map(TeamId)
            .ok_or_else(|| PredictError::UnknownTeam(name.to_string()))
    }

    /// Check whether a team is present
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Team names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|s| s.as_str())
    }

    /// Number of teams in the catalog
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
