//! The trained outcome classifier
//!
//! The classifier is an opaque ONNX artifact exported by the training
//! pipeline; this module loads it and reads its probability output. Its
//! internal structure is not modelled here.

use crate::{Outcome, PredictError, Result};
use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use serde::Serialize;
use std::path::Path;

/// A three-way outcome distribution in the model's fixed output order.
///
/// The positional order `[away, draw, home]` is a contract with the trained
/// model; it is not alphabetical and is never re-derived here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutcomeProbabilities {
    pub away: f32,
    pub draw: f32,
    pub home: f32,
}

impl OutcomeProbabilities {
    /// Tolerance for the distribution summing to one
    pub const SUM_TOLERANCE: f32 = 0.01;

    /// Validate a raw model output as a probability distribution
    pub fn from_slice(probs: &[f32]) -> Result<Self> {
        if probs.len() != 3 {
            return Err(PredictError::MalformedModelOutput(format!(
                "expected 3 probabilities, got {}",
                probs.len()
            )));
        }
        for &p in probs {
            if !p.is_finite() || p < 0.0 {
                return Err(PredictError::MalformedModelOutput(format!(
                    "invalid probability {}",
                    p
                )));
            }
        }
        let sum: f32 = probs.iter().sum();
        if (sum - 1.0).abs() > Self::SUM_TOLERANCE {
            return Err(PredictError::MalformedModelOutput(format!(
                "probabilities sum to {}",
                sum
            )));
        }
        Ok(OutcomeProbabilities {
            away: probs[0],
            draw: probs[1],
            home: probs[2],
        })
    }

    /// Probability of a specific outcome
    pub fn get(&self, outcome: Outcome) -> f32 {
        match outcome {
            Outcome::AwayWin => self.away,
            Outcome::Draw => self.draw,
            Outcome::HomeWin => self.home,
        }
    }
}

/// Interface to the trained classifier
pub trait OutcomeModel {
    /// Run the classifier on an assembled feature vector
    fn predict_proba(&mut self, features: &[f32]) -> Result<OutcomeProbabilities>;
}

/// ONNX-backed classifier loaded from disk
#[derive(Debug)]
pub struct OnnxOutcomeModel {
    session: Session,
    output_name: String,
    path: String,
}

impl OnnxOutcomeModel {
    /// Load the classifier from an ONNX file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let session = (|| {
            Session::builder()?
                .with_optimization_level(GraphOptimizationLevel::Level3)?
                // Single-threaded for determinism
                .with_intra_threads(1)?
                .commit_from_file(path)
        })()
        .map_err(|e| PredictError::ArtifactLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let output_name = session
            .outputs()
            .first()
            .map(|o| o.name().to_string())
            .ok_or_else(|| PredictError::ArtifactLoad {
                path: path.display().to_string(),
                message: "model declares no outputs".to_string(),
            })?;

        Ok(OnnxOutcomeModel {
            session,
            output_name,
            path: path.display().to_string(),
        })
    }

    /// Path the model was loaded from
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl OutcomeModel for OnnxOutcomeModel {
    fn predict_proba(&mut self, features: &[f32]) -> Result<OutcomeProbabilities> {
        let mut input = Array2::<f32>::zeros((1, features.len()));
        for (i, &v) in features.iter().enumerate() {
            input[[0, i]] = v;
        }

        let input_tensor = Value::from_array(input)?;
        let outputs = self.session.run(ort::inputs![input_tensor])?;

        let output = outputs.get(&self.output_name).ok_or_else(|| {
            PredictError::MalformedModelOutput(format!("missing output {}", self.output_name))
        })?;
        let tensor = output.try_extract_tensor::<f32>()?;

        OutcomeProbabilities::from_slice(tensor.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_distribution() {
        let probs = OutcomeProbabilities::from_slice(&[0.10, 0.15, 0.75]).unwrap();
        assert_eq!(probs.away, 0.10);
        assert_eq!(probs.draw, 0.15);
        assert_eq!(probs.home, 0.75);
        assert_eq!(probs.get(Outcome::HomeWin), 0.75);
    }

    #[test]
    fn test_wrong_arity() {
        let err = OutcomeProbabilities::from_slice(&[0.5, 0.5]).unwrap_err();
        assert!(matches!(err, PredictError::MalformedModelOutput(_)));

        let err = OutcomeProbabilities::from_slice(&[0.25, 0.25, 0.25, 0.25]).unwrap_err();
        assert!(matches!(err, PredictError::MalformedModelOutput(_)));
    }

    #[test]
    fn test_bad_sum() {
        let err = OutcomeProbabilities::from_slice(&[0.1, 0.1, 0.1]).unwrap_err();
        assert!(matches!(err, PredictError::MalformedModelOutput(_)));
    }

    #[test]
    fn test_sum_within_tolerance() {
        // Floating-point slack from the model is accepted
        assert!(OutcomeProbabilities::from_slice(&[0.333, 0.333, 0.333]).is_ok());
    }

    #[test]
    fn test_negative_probability() {
        let err = OutcomeProbabilities::from_slice(&[-0.1, 0.5, 0.6]).unwrap_err();
        assert!(matches!(err, PredictError::MalformedModelOutput(_)));
    }

    #[test]
    fn test_non_finite_probability() {
        let err = OutcomeProbabilities::from_slice(&[f32::NAN, 0.5, 0.5]).unwrap_err();
        assert!(matches!(err, PredictError::MalformedModelOutput(_)));
    }
}
