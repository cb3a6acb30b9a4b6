//! Static enumerations used by the validators
//!
//! Sports, roles, faculties and upload formats. Validators take a `&Catalog`
//! instead of reading globals, so alternative tables can be swapped in.

use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Supported intramural sports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Futbol,
    Basquetbol,
    Voleibol,
    Beisbol,
}

impl Sport {
    /// Every sport, in display order
    pub const ALL: [Sport; 4] = [
        Sport::Futbol,
        Sport::Basquetbol,
        Sport::Voleibol,
        Sport::Beisbol,
    ];

    /// Wire code used by the forms
    pub fn code(&self) -> &'static str {
        match self {
            Sport::Futbol => "futbol",
            Sport::Basquetbol => "basquetbol",
            Sport::Voleibol => "voleibol",
            Sport::Beisbol => "beisbol",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Sport {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sport::ALL
            .iter()
            .copied()
            .find(|sport| sport.code() == s)
            .ok_or_else(|| ValidationError::UnknownSport(s.to_string()))
    }
}

/// Account roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Student,
    Coach,
    Admin,
}

impl UserType {
    pub const ALL: [UserType; 3] = [UserType::Student, UserType::Coach, UserType::Admin];

    pub fn code(&self) -> &'static str {
        match self {
            UserType::Student => "student",
            UserType::Coach => "coach",
            UserType::Admin => "admin",
        }
    }

    /// Parse a role code; unknown codes yield `None`
    pub fn parse(code: &str) -> Option<Self> {
        UserType::ALL.iter().copied().find(|t| t.code() == code)
    }
}

/// Roster and stat limits for one sport
#[derive(Debug, Clone, PartialEq)]
pub struct SportRules {
    /// Minimum registered players (inclusive)
    pub min_players: u32,
    /// Maximum registered players (inclusive)
    pub max_players: u32,
    /// Allowed position names
    pub positions: Vec<String>,
    /// Per-game ceilings; stats missing here are only checked for sign
    pub stat_limits: HashMap<String, f64>,
}

impl SportRules {
    fn new(min_players: u32, max_players: u32, positions: &[&str], limits: &[(&str, f64)]) -> Self {
        Self {
            min_players,
            max_players,
            positions: positions.iter().map(|p| p.to_string()).collect(),
            stat_limits: limits
                .iter()
                .map(|(stat, max)| (stat.to_string(), *max))
                .collect(),
        }
    }
}

/// Faculties students can register under
pub const DEFAULT_FACULTIES: &[&str] = &[
    "Arquitectura",
    "Ciencias",
    "Ciencias Políticas y Sociales",
    "Contaduría y Administración",
    "Derecho",
    "Economía",
    "Filosofía y Letras",
    "Ingeniería",
    "Medicina",
    "Odontología",
    "Psicología",
    "Química",
];

/// Photo formats accepted by the gallery
pub const DEFAULT_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Lookup tables consumed by the validators
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub sports: HashMap<Sport, SportRules>,
    pub faculties: Vec<String>,
    pub image_extensions: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        let mut sports = HashMap::new();
        sports.insert(
            Sport::Futbol,
            SportRules::new(
                11,
                18,
                &["portero", "defensa", "mediocampista", "delantero"],
                &[
                    ("goles", 20.0),
                    ("asistencias", 20.0),
                    ("tarjetas_amarillas", 2.0),
                    ("tarjetas_rojas", 1.0),
                ],
            ),
        );
        sports.insert(
            Sport::Basquetbol,
            SportRules::new(
                5,
                12,
                &["base", "escolta", "alero", "ala-pivot", "pivot"],
                &[
                    ("puntos", 150.0),
                    ("rebotes", 50.0),
                    ("asistencias", 50.0),
                    ("robos", 30.0),
                ],
            ),
        );
        sports.insert(
            Sport::Voleibol,
            SportRules::new(
                6,
                12,
                &["armador", "opuesto", "central", "receptor", "libero"],
                &[("puntos", 100.0), ("bloqueos", 50.0), ("aces", 50.0)],
            ),
        );
        sports.insert(
            Sport::Beisbol,
            SportRules::new(
                9,
                20,
                &[
                    "pitcher",
                    "catcher",
                    "primera base",
                    "segunda base",
                    "tercera base",
                    "shortstop",
                    "jardinero",
                ],
                &[("carreras", 30.0), ("hits", 30.0), ("ponches", 27.0)],
            ),
        );

        Self {
            sports,
            faculties: DEFAULT_FACULTIES.iter().map(|f| f.to_string()).collect(),
            image_extensions: DEFAULT_IMAGE_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}

impl Catalog {
    /// Rules for a sport, if the catalog carries them
    pub fn sport(&self, sport: Sport) -> Option<&SportRules> {
        self.sports.get(&sport)
    }
}
