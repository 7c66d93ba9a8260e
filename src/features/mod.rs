//! Feature assembly
//!
//! Converts a match query into the model's fixed-order input vector.

use chrono::{Datelike, Timelike};

use crate::artifacts::{TeamCatalog, TeamForm};
use crate::{MatchQuery, PredictError, Result};

/// Leading features before the form vectors: home id, away id, hour, weekday
pub const BASE_FEATURES: usize = 4;

/// Assemble the model input for a match query.
///
/// The element order is the order the classifier was trained on:
/// `[home_id, away_id, hour, weekday, home_form.., away_form..]`.
/// Reordering here silently breaks compatibility with the trained model.
///
/// Weekday is 0 for Monday through 6 for Sunday. Both form lookups read the
/// same table; form is not tracked separately by venue.
pub fn assemble(query: &MatchQuery, catalog: &TeamCatalog, form: &TeamForm) -> Result<Vec<f32>> {
    if query.home_team == query.away_team {
        return Err(PredictError::SameTeam(query.home_team.clone()));
    }

    let home_id = catalog.id(&query.home_team)?;
    let away_id = catalog.id(&query.away_team)?;

    let hour = query.kickoff.hour();
    let weekday = query.date.weekday().num_days_from_monday();

    let home_form = form.row(&query.home_team)?;
    let away_form = form.row(&query.away_team)?;

    let mut features = Vec::with_capacity(BASE_FEATURES + home_form.len() + away_form.len());
    features.push(home_id.0 as f32);
    features.push(away_id.0 as f32);
    features.push(hour as f32);
    features.push(weekday as f32);
    features.extend_from_slice(home_form);
    features.extend_from_slice(away_form);

    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use std::collections::HashMap;

    fn make_catalog() -> TeamCatalog {
        TeamCatalog::from_entries([
            ("Arsenal".to_string(), 1),
            ("Chelsea".to_string(), 2),
        ])
    }

    fn make_form() -> TeamForm {
        let mut teams = HashMap::new();
        teams.insert("Arsenal".to_string(), vec![1.5, 0.8]);
        teams.insert("Chelsea".to_string(), vec![1.2, 1.0]);
        TeamForm::from_parts(
            vec!["goals_rolling".to_string(), "points_rolling".to_string()],
            teams,
        )
        .unwrap()
    }

    fn make_query(home: &str, away: &str, date: NaiveDate, kickoff: NaiveTime) -> MatchQuery {
        MatchQuery {
            home_team: home.to_string(),
            away_team: away.to_string(),
            date,
            kickoff,
        }
    }

    #[test]
    fn test_assemble_fixed_order() {
        // 2025-08-13 is a Wednesday, so weekday = 2
        let query = make_query(
            "Arsenal",
            "Chelsea",
            NaiveDate::from_ymd_opt(2025, 8, 13).unwrap(),
            NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
        );

        let features = assemble(&query, &make_catalog(), &make_form()).unwrap();
        assert_eq!(features, vec![1.0, 2.0, 15.0, 2.0, 1.5, 0.8, 1.2, 1.0]);
    }

    #[test]
    fn test_assemble_length() {
        let query = make_query(
            "Chelsea",
            "Arsenal",
            NaiveDate::from_ymd_opt(2025, 8, 16).unwrap(),
            NaiveTime::from_hms_opt(12, 30, 0).unwrap(),
        );

        let form = make_form();
        let features = assemble(&query, &make_catalog(), &form).unwrap();
        assert_eq!(features.len(), BASE_FEATURES + 2 * form.width());
        assert_eq!(&features[..4], &[2.0, 1.0, 12.0, 5.0]);
    }

    #[test]
    fn test_weekday_convention() {
        // 2025-08-11 is a Monday
        let query = make_query(
            "Arsenal",
            "Chelsea",
            NaiveDate::from_ymd_opt(2025, 8, 11).unwrap(),
            NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
        );

        let features = assemble(&query, &make_catalog(), &make_form()).unwrap();
        assert_eq!(features[3], 0.0);

        // 2025-08-17 is a Sunday
        let query = make_query(
            "Arsenal",
            "Chelsea",
            NaiveDate::from_ymd_opt(2025, 8, 17).unwrap(),
            NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
        );

        let features = assemble(&query, &make_catalog(), &make_form()).unwrap();
        assert_eq!(features[3], 6.0);
    }

    #[test]
    fn test_unknown_team() {
        let query = make_query(
            "Leeds",
            "Chelsea",
            NaiveDate::from_ymd_opt(2025, 8, 13).unwrap(),
            NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
        );

        let err = assemble(&query, &make_catalog(), &make_form()).unwrap_err();
        match err {
            PredictError::UnknownTeam(name) => assert_eq!(name, "Leeds"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_team_in_catalog_but_not_form() {
        let catalog = TeamCatalog::from_entries([
            ("Arsenal".to_string(), 1),
            ("Chelsea".to_string(), 2),
            ("Leeds".to_string(), 3),
        ]);
        let query = make_query(
            "Leeds",
            "Chelsea",
            NaiveDate::from_ymd_opt(2025, 8, 13).unwrap(),
            NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
        );

        let err = assemble(&query, &catalog, &make_form()).unwrap_err();
        match err {
            PredictError::UnknownTeam(name) => assert_eq!(name, "Leeds"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_same_team_rejected() {
        let query = make_query(
            "Arsenal",
            "Arsenal",
            NaiveDate::from_ymd_opt(2025, 8, 13).unwrap(),
            NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
        );

        let err = assemble(&query, &make_catalog(), &make_form()).unwrap_err();
        assert!(matches!(err, PredictError::SameTeam(_)));
    }
}
