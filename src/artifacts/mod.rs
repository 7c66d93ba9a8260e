//! Read-only prediction artifacts
//!
//! Loads the trained classifier, team catalog, and rolling-form table
//! produced by the training pipeline.

pub mod catalog;
pub mod form;

pub use catalog::TeamCatalog;
pub use form::TeamForm;

use crate::model::OnnxOutcomeModel;
use crate::{ArtifactConfig, Result};

/// The artifact trio loaded once at startup.
///
/// All three files come from a single training run and are only valid
/// together: a catalog from one run paired with a model from another yields
/// plausible-looking but wrong predictions, and nothing at this layer can
/// detect the mismatch. Load once, then treat as read-only.
#[derive(Debug)]
pub struct ArtifactSet {
    pub model: OnnxOutcomeModel,
    pub catalog: TeamCatalog,
    pub form: TeamForm,
}

impl ArtifactSet {
    /// Load all three artifacts together, or fail without a partial result
    pub fn load(config: &ArtifactConfig) -> Result<Self> {
        let catalog = TeamCatalog::load(&config.catalog_path)?;
        let form = TeamForm::load(&config.form_path)?;
        let model = OnnxOutcomeModel::load(&config.model_path)?;

        log::info!(
            "Loaded artifacts: {} teams, {} form columns, model {}",
            catalog.len(),
            form.width(),
            config.model_path
        );

        Ok(ArtifactSet {
            model,
            catalog,
            form,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_catalog(dir: &std::path::Path) -> String {
        let path = dir.join("team_catalog.json");
        std::fs::write(&path, r#"{"Arsenal": 1, "Chelsea": 2}"#).unwrap();
        path.display().to_string()
    }

    fn write_form(dir: &std::path::Path) -> String {
        let path = dir.join("team_form.json");
        std::fs::write(
            &path,
            r#"{"columns": ["goals_rolling"], "teams": {"Arsenal": [1.5], "Chelsea": [1.2]}}"#,
        )
        .unwrap();
        path.display().to_string()
    }

    #[test]
    fn test_missing_form_fails_whole_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = ArtifactConfig {
            model_path: dir.path().join("model.onnx").display().to_string(),
            catalog_path: write_catalog(dir.path()),
            form_path: dir.path().join("missing_form.json").display().to_string(),
        };

        let err = ArtifactSet::load(&config).unwrap_err();
        assert!(matches!(err, crate::PredictError::ArtifactLoad { .. }));
    }

    #[test]
    fn test_missing_model_fails_whole_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = ArtifactConfig {
            model_path: dir.path().join("missing_model.onnx").display().to_string(),
            catalog_path: write_catalog(dir.path()),
            form_path: write_form(dir.path()),
        };

        let err = ArtifactSet::load(&config).unwrap_err();
        assert!(matches!(err, crate::PredictError::ArtifactLoad { .. }));
    }
}
