//! Tournament validators
//!
//! Date ordering: registration deadline < start < end, and the deadline must
//! still be ahead of "now". All three comparisons are strict.

use super::dates::{is_future_at, parse_datetime};
use super::utils::check;
use super::FieldReport;
use crate::catalog::Sport;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const TOURNAMENT_NAME_MIN_LENGTH: usize = 3;
pub const TOURNAMENT_NAME_MAX_LENGTH: usize = 100;
pub const MIN_TEAMS: i64 = 2;
pub const MAX_TEAMS: i64 = 64;

pub const MSG_TOURNAMENT_NAME_REQUIRED: &str = "El nombre del torneo es requerido";
pub const MSG_TOURNAMENT_NAME_LENGTH: &str =
    "El nombre del torneo debe tener entre 3 y 100 caracteres";
pub const MSG_TOURNAMENT_SPORT: &str = "Selecciona un deporte válido";
pub const MSG_TOURNAMENT_DATES_INVALID: &str = "Las fechas del torneo no son válidas";
pub const MSG_DEADLINE_BEFORE_START: &str =
    "La fecha límite de inscripción debe ser anterior al inicio";
pub const MSG_START_BEFORE_END: &str = "La fecha de inicio debe ser anterior a la de fin";
pub const MSG_DEADLINE_IN_FUTURE: &str = "La fecha límite de inscripción debe ser futura";
pub const MSG_MIN_TEAMS: &str = "El torneo debe admitir al menos 2 equipos";
pub const MSG_MAX_BELOW_MIN: &str = "El máximo de equipos no puede ser menor al mínimo";
pub const MSG_MAX_TEAMS: &str = "El torneo no puede tener más de 64 equipos";

/// Tournament creation form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentDraft {
    pub name: String,
    pub sport: String,
    pub registration_deadline: String,
    pub start_date: String,
    pub end_date: String,
    pub min_teams: i64,
    pub max_teams: i64,
}

/// 3 to 100 characters once trimmed
pub fn is_valid_tournament_name(name: &str) -> bool {
    let len = name.trim().chars().count();
    (TOURNAMENT_NAME_MIN_LENGTH..=TOURNAMENT_NAME_MAX_LENGTH).contains(&len)
}

/// deadline < start < end and deadline > now
pub fn is_valid_tournament_dates_at(
    deadline: DateTime<Utc>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> bool {
    deadline < start && start < end && is_future_at(deadline, now)
}

/// Textual variant; any unparseable date makes the set invalid
pub fn is_valid_tournament_dates(deadline: &str, start: &str, end: &str) -> bool {
    match (parse_datetime(deadline), parse_datetime(start), parse_datetime(end)) {
        (Some(deadline), Some(start), Some(end)) => {
            is_valid_tournament_dates_at(deadline, start, end, Utc::now())
        }
        _ => false,
    }
}

/// min >= 2, max >= min, max <= 64
pub fn is_valid_team_limits(min_teams: i64, max_teams: i64) -> bool {
    min_teams >= MIN_TEAMS && max_teams >= min_teams && max_teams <= MAX_TEAMS
}

/// Validate a whole draft against a fixed "now"
pub fn validate_tournament_at(draft: &TournamentDraft, now: DateTime<Utc>) -> FieldReport {
    let mut errors = Vec::new();

    if draft.name.trim().is_empty() {
        errors.push(MSG_TOURNAMENT_NAME_REQUIRED.to_string());
    } else {
        check(
            &mut errors,
            is_valid_tournament_name(&draft.name),
            MSG_TOURNAMENT_NAME_LENGTH,
        );
    }

    check(
        &mut errors,
        draft.sport.parse::<Sport>().is_ok(),
        MSG_TOURNAMENT_SPORT,
    );

    match (
        parse_datetime(&draft.registration_deadline),
        parse_datetime(&draft.start_date),
        parse_datetime(&draft.end_date),
    ) {
        (Some(deadline), Some(start), Some(end)) => {
            check(&mut errors, deadline < start, MSG_DEADLINE_BEFORE_START);
            check(&mut errors, start < end, MSG_START_BEFORE_END);
            check(&mut errors, is_future_at(deadline, now), MSG_DEADLINE_IN_FUTURE);
        }
        _ => errors.push(MSG_TOURNAMENT_DATES_INVALID.to_string()),
    }

    check(&mut errors, draft.min_teams >= MIN_TEAMS, MSG_MIN_TEAMS);
    check(&mut errors, draft.max_teams >= draft.min_teams, MSG_MAX_BELOW_MIN);
    check(&mut errors, draft.max_teams <= MAX_TEAMS, MSG_MAX_TEAMS);

    FieldReport::from_errors(errors)
}

pub fn validate_tournament(draft: &TournamentDraft) -> FieldReport {
    validate_tournament_at(draft, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn draft() -> TournamentDraft {
        TournamentDraft {
            name: "Copa Otoño".to_string(),
            sport: "futbol".to_string(),
            registration_deadline: "2025-03-01".to_string(),
            start_date: "2025-03-10".to_string(),
            end_date: "2025-04-10".to_string(),
            min_teams: 4,
            max_teams: 16,
        }
    }

    #[test]
    fn test_tournament_name_bounds() {
        assert!(!is_valid_tournament_name("  ab  "));
        assert!(is_valid_tournament_name("abc"));
        assert!(is_valid_tournament_name(&"x".repeat(100)));
        assert!(!is_valid_tournament_name(&"x".repeat(101)));
    }

    #[test]
    fn test_date_ordering_is_strict() {
        let now = at(2025, 1, 1);
        assert!(is_valid_tournament_dates_at(at(2025, 2, 1), at(2025, 3, 1), at(2025, 4, 1), now));
        // deadline == start fails even though start < end
        assert!(!is_valid_tournament_dates_at(at(2025, 3, 1), at(2025, 3, 1), at(2025, 4, 1), now));
        assert!(!is_valid_tournament_dates_at(at(2025, 3, 2), at(2025, 3, 1), at(2025, 4, 1), now));
        assert!(!is_valid_tournament_dates_at(at(2025, 2, 1), at(2025, 4, 1), at(2025, 4, 1), now));
        // deadline already passed
        assert!(!is_valid_tournament_dates_at(at(2024, 12, 1), at(2025, 3, 1), at(2025, 4, 1), now));
    }

    #[test]
    fn test_textual_dates() {
        assert!(is_valid_tournament_dates("2999-01-01", "2999-02-01", "2999-03-01"));
        assert!(!is_valid_tournament_dates("2999-02-01", "2999-02-01", "2999-03-01"));
        assert!(!is_valid_tournament_dates("mañana", "2999-02-01", "2999-03-01"));
    }

    #[test]
    fn test_team_limits() {
        assert!(is_valid_team_limits(2, 2));
        assert!(is_valid_team_limits(2, 64));
        assert!(!is_valid_team_limits(1, 8));
        assert!(!is_valid_team_limits(8, 4));
        assert!(!is_valid_team_limits(2, 65));
    }

    #[test]
    fn test_validate_tournament_valid_draft() {
        let report = validate_tournament_at(&draft(), at(2025, 1, 15));
        assert!(report.is_valid, "{:?}", report.errors);
    }

    #[test]
    fn test_validate_tournament_accumulates() {
        let mut bad = draft();
        bad.name = "ab".to_string();
        bad.sport = "ajedrez".to_string();
        bad.registration_deadline = "2025-03-10".to_string();
        bad.min_teams = 1;
        bad.max_teams = 80;

        let report = validate_tournament_at(&bad, at(2025, 3, 20));
        assert_eq!(
            report.errors,
            vec![
                MSG_TOURNAMENT_NAME_LENGTH,
                MSG_TOURNAMENT_SPORT,
                MSG_DEADLINE_BEFORE_START,
                MSG_DEADLINE_IN_FUTURE,
                MSG_MIN_TEAMS,
                MSG_MAX_TEAMS,
            ]
        );
    }

    #[test]
    fn test_validate_tournament_unparseable_dates() {
        let mut bad = draft();
        bad.end_date = "fin de mes".to_string();
        let report = validate_tournament_at(&bad, at(2025, 1, 1));
        assert_eq!(report.errors, vec![MSG_TOURNAMENT_DATES_INVALID]);
    }

    #[test]
    fn test_draft_from_json() {
        let draft: TournamentDraft = serde_json::from_value(serde_json::json!({
            "name": "Liga Interfacultades",
            "sport": "voleibol",
            "registrationDeadline": "2025-05-01",
            "startDate": "2025-05-10",
            "endDate": "2025-06-10",
            "minTeams": 2,
            "maxTeams": 8
        }))
        .unwrap();
        assert!(validate_tournament_at(&draft, at(2025, 4, 1)).is_valid);
    }
}
