//! Sport, roster, position and statistic validators

use super::FieldReport;
use crate::catalog::{Catalog, Sport};
use std::collections::BTreeMap;

pub const MSG_SPORT_REQUIRED: &str = "El deporte es requerido";
pub const MSG_SPORT_INVALID: &str = "Selecciona un deporte válido";
pub const MSG_POSITION_INVALID: &str = "La posición no corresponde al deporte";

/// One of the four sport codes
pub fn is_valid_sport(code: &str) -> bool {
    code.parse::<Sport>().is_ok()
}

/// Player count within the sport's inclusive `{min, max}`
pub fn is_valid_player_count(sport: Sport, count: i64, catalog: &Catalog) -> bool {
    catalog
        .sport(sport)
        .map(|rules| count >= i64::from(rules.min_players) && count <= i64::from(rules.max_players))
        .unwrap_or(false)
}

/// Position listed for the sport
pub fn is_valid_position(sport: Sport, position: &str, catalog: &Catalog) -> bool {
    catalog
        .sport(sport)
        .map(|rules| rules.positions.iter().any(|p| p == position))
        .unwrap_or(false)
}

/// Non-negative and, when the sport caps this stat, not above the cap
pub fn is_valid_stat(sport: Sport, stat: &str, value: f64, catalog: &Catalog) -> bool {
    if !value.is_finite() || value < 0.0 {
        return false;
    }
    match catalog.sport(sport).and_then(|rules| rules.stat_limits.get(stat)) {
        Some(max) => value <= *max,
        None => true,
    }
}

/// Sport code must be known and the roster size within its limits
pub fn validate_roster(sport_code: &str, player_count: i64, catalog: &Catalog) -> FieldReport {
    if sport_code.trim().is_empty() {
        return FieldReport::required(MSG_SPORT_REQUIRED);
    }
    let sport = match sport_code.parse::<Sport>() {
        Ok(sport) => sport,
        Err(_) => return FieldReport::from_errors(vec![MSG_SPORT_INVALID.to_string()]),
    };

    let mut errors = Vec::new();
    if !is_valid_player_count(sport, player_count, catalog) {
        if let Some(rules) = catalog.sport(sport) {
            errors.push(format!(
                "Un equipo de {} debe tener entre {} y {} jugadores",
                sport, rules.min_players, rules.max_players
            ));
        } else {
            errors.push(MSG_SPORT_INVALID.to_string());
        }
    }
    FieldReport::from_errors(errors)
}

/// Check a player's position (when given) and every stat line
pub fn validate_player_stats(
    sport: Sport,
    position: Option<&str>,
    stats: &BTreeMap<String, f64>,
    catalog: &Catalog,
) -> FieldReport {
    let mut errors = Vec::new();

    if let Some(position) = position {
        if !is_valid_position(sport, position, catalog) {
            errors.push(MSG_POSITION_INVALID.to_string());
        }
    }

    for (stat, value) in stats {
        if is_valid_stat(sport, stat, *value, catalog) {
            continue;
        }
        if !value.is_finite() || *value < 0.0 {
            errors.push(format!("La estadística '{}' no puede ser negativa", stat));
        } else if let Some(max) = catalog
            .sport(sport)
            .and_then(|rules| rules.stat_limits.get(stat))
        {
            errors.push(format!(
                "La estadística '{}' no puede ser mayor a {}",
                stat, max
            ));
        }
    }

    FieldReport::from_errors(errors)
}
