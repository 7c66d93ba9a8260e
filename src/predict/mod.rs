//! Prediction and presentation
//!
//! Runs the classifier on an assembled vector and turns its distribution
//! into a headline verdict and a probability breakdown.

use serde::Serialize;

use crate::model::{OutcomeModel, OutcomeProbabilities};
use crate::Result;

/// Probability above which a side is declared the favorite
pub const FAVORITE_THRESHOLD: f32 = 0.60;

/// Width of the breakdown bars, in character cells
const BAR_WIDTH: usize = 30;

/// Headline verdict for a match
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Verdict {
    HomeWin { confidence: f32 },
    AwayWin { confidence: f32 },
    TooClose,
}

/// Full prediction output for one match
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResult {
    pub home_team: String,
    pub away_team: String,
    pub probabilities: OutcomeProbabilities,
    pub verdict: Verdict,
}

impl PredictionResult {
    /// Headline message for display
    pub fn headline(&self) -> String {
        match self.verdict {
            Verdict::HomeWin { .. } => format!("{} Wins!", self.home_team),
            Verdict::AwayWin { .. } => format!("{} Wins!", self.away_team),
            Verdict::TooClose => "Too Close to Call".to_string(),
        }
    }

    /// Favorite confidence, if a favorite was declared
    pub fn confidence(&self) -> Option<f32> {
        match self.verdict {
            Verdict::HomeWin { confidence } | Verdict::AwayWin { confidence } => Some(confidence),
            Verdict::TooClose => None,
        }
    }

    /// Label/probability rows in away, draw, home order
    pub fn breakdown(&self) -> Vec<(String, f32)> {
        vec![
            (format!("{} Win", self.away_team), self.probabilities.away),
            ("Draw".to_string(), self.probabilities.draw),
            (format!("{} Win", self.home_team), self.probabilities.home),
        ]
    }
}

/// Run the classifier and interpret its distribution.
///
/// The home side is checked before the away side. With a distribution that
/// sums to one at most one side can clear the threshold, but the order of
/// the checks is part of the behavior and stays fixed.
pub fn predict<M: OutcomeModel>(
    model: &mut M,
    features: &[f32],
    home_team: &str,
    away_team: &str,
) -> Result<PredictionResult> {
    let probs = model.predict_proba(features)?;

    let verdict = if probs.home > FAVORITE_THRESHOLD {
        Verdict::HomeWin {
            confidence: probs.home,
        }
    } else if probs.away > FAVORITE_THRESHOLD {
        Verdict::AwayWin {
            confidence: probs.away,
        }
    } else {
        Verdict::TooClose
    };

    Ok(PredictionResult {
        home_team: home_team.to_string(),
        away_team: away_team.to_string(),
        probabilities: probs,
        verdict,
    })
}

/// Format a prediction for terminal display
pub fn format_prediction(result: &PredictionResult) -> String {
    let rows = result.breakdown();
    let label_width = rows.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str("\n┌─────────────────────────────────────────────────────────┐\n");
    out.push_str(&format!(
        "│  {} vs {}\n",
        result.home_team, result.away_team
    ));
    out.push_str("├─────────────────────────────────────────────────────────┤\n");
    out.push_str(&format!("│  Prediction:  {}\n", result.headline()));
    if let Some(confidence) = result.confidence() {
        out.push_str(&format!("│  Confidence:  {:.1}%\n", confidence * 100.0));
    }
    out.push_str("├─────────────────────────────────────────────────────────┤\n");
    for (label, prob) in rows {
        let filled = ((prob * BAR_WIDTH as f32).round() as usize).min(BAR_WIDTH);
        let bar = "█".repeat(filled);
        out.push_str(&format!(
            "│  {:<label_width$}  {:<BAR_WIDTH$} {:>5.1}%\n",
            label,
            bar,
            prob * 100.0
        ));
    }
    out.push_str("└─────────────────────────────────────────────────────────┘\n");
    out
}
