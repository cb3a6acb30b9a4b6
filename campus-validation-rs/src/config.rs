//! Validation thresholds
//!
//! Defaults match the SportCampus forms. Deployments can override them through
//! `SPORTCAMPUS_*` environment variables (optionally from a `.env` file).

use crate::errors::{ValidationError, ValidationResult};
use std::env;
use std::str::FromStr;

/// Default minimum password length
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 8;

/// Default minimum player age in years (inclusive)
pub const DEFAULT_MIN_AGE: u32 = 16;

/// Default maximum player age in years (inclusive)
pub const DEFAULT_MAX_AGE: u32 = 65;

/// Default upload limit for gallery photos, in megabytes
pub const DEFAULT_MAX_FILE_SIZE_MB: f64 = 5.0;

/// Default smallest accepted image side, in pixels
pub const DEFAULT_MIN_IMAGE_DIMENSION: u32 = 100;

/// Default largest accepted image side, in pixels
pub const DEFAULT_MAX_IMAGE_DIMENSION: u32 = 4000;

/// Institutional domain fragments accepted for university emails
pub const DEFAULT_UNIVERSITY_DOMAINS: &[&str] =
    &["edu", "edu.mx", "unam.mx", "ipn.mx", "tec.mx", "udg.mx", "uanl.mx"];

const ENV_PREFIX: &str = "SPORTCAMPUS";

/// Configuration for the validation library
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationConfig {
    /// Minimum password length
    pub password_min_length: usize,
    /// Minimum age in years (inclusive)
    pub min_age: u32,
    /// Maximum age in years (inclusive)
    pub max_age: u32,
    /// Maximum upload size in megabytes
    pub max_file_size_mb: f64,
    /// Minimum image width/height in pixels
    pub min_image_dimension: u32,
    /// Maximum image width/height in pixels
    pub max_image_dimension: u32,
    /// Domain fragments accepted as institutional
    pub university_domains: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            password_min_length: DEFAULT_PASSWORD_MIN_LENGTH,
            min_age: DEFAULT_MIN_AGE,
            max_age: DEFAULT_MAX_AGE,
            max_file_size_mb: DEFAULT_MAX_FILE_SIZE_MB,
            min_image_dimension: DEFAULT_MIN_IMAGE_DIMENSION,
            max_image_dimension: DEFAULT_MAX_IMAGE_DIMENSION,
            university_domains: DEFAULT_UNIVERSITY_DOMAINS
                .iter()
                .map(|d| d.to_string())
                .collect(),
        }
    }
}

impl ValidationConfig {
    /// Load overrides from the environment, keeping the default for any
    /// malformed value.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok(), false).unwrap_or_else(|err| {
            log::warn!("Falling back to default validation config: {}", err);
            Self::default()
        })
    }

    /// Load overrides from the environment, failing on the first malformed value
    pub fn try_from_env() -> ValidationResult<Self> {
        dotenv::dotenv().ok();
        let config = Self::from_lookup(|key| env::var(key).ok(), true)?;
        config.validate_bounds()?;
        Ok(config)
    }

    /// Build a config from an arbitrary key lookup
    pub(crate) fn from_lookup<F>(lookup: F, strict: bool) -> ValidationResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let university_domains = match lookup(&env_key("UNIVERSITY_DOMAINS")) {
            Some(raw) => {
                let domains: Vec<String> = raw
                    .split(',')
                    .map(|d| d.trim().to_lowercase())
                    .filter(|d| !d.is_empty())
                    .collect();
                if domains.is_empty() {
                    if strict {
                        return Err(ValidationError::invalid_config(
                            env_key("UNIVERSITY_DOMAINS"),
                            raw,
                        ));
                    }
                    log::warn!(
                        "Empty {}, using default domains",
                        env_key("UNIVERSITY_DOMAINS")
                    );
                    defaults.university_domains.clone()
                } else {
                    domains
                }
            }
            None => defaults.university_domains.clone(),
        };

        Ok(Self {
            password_min_length: read_var(
                &lookup,
                "PASSWORD_MIN_LENGTH",
                defaults.password_min_length,
                strict,
            )?,
            min_age: read_var(&lookup, "MIN_AGE", defaults.min_age, strict)?,
            max_age: read_var(&lookup, "MAX_AGE", defaults.max_age, strict)?,
            max_file_size_mb: read_var(
                &lookup,
                "MAX_FILE_SIZE_MB",
                defaults.max_file_size_mb,
                strict,
            )?,
            min_image_dimension: read_var(
                &lookup,
                "MIN_IMAGE_DIMENSION",
                defaults.min_image_dimension,
                strict,
            )?,
            max_image_dimension: read_var(
                &lookup,
                "MAX_IMAGE_DIMENSION",
                defaults.max_image_dimension,
                strict,
            )?,
            university_domains,
        })
    }

    /// Reject ranges that can never be satisfied
    pub fn validate_bounds(&self) -> ValidationResult<()> {
        if self.password_min_length == 0 {
            return Err(ValidationError::invalid_config(
                env_key("PASSWORD_MIN_LENGTH"),
                "0",
            ));
        }
        if self.min_age > self.max_age {
            return Err(ValidationError::invalid_config(
                env_key("MIN_AGE"),
                format!("{} > max age {}", self.min_age, self.max_age),
            ));
        }
        if self.min_image_dimension > self.max_image_dimension {
            return Err(ValidationError::invalid_config(
                env_key("MIN_IMAGE_DIMENSION"),
                format!(
                    "{} > max dimension {}",
                    self.min_image_dimension, self.max_image_dimension
                ),
            ));
        }
        if !(self.max_file_size_mb > 0.0) {
            return Err(ValidationError::invalid_config(
                env_key("MAX_FILE_SIZE_MB"),
                self.max_file_size_mb.to_string(),
            ));
        }
        Ok(())
    }

    /// Upload limit converted to bytes
    pub fn max_file_size_bytes(&self) -> f64 {
        self.max_file_size_mb * 1024.0 * 1024.0
    }
}

fn env_key(name: &str) -> String {
    format!("{}_{}", ENV_PREFIX, name)
}

fn read_var<T, F>(lookup: &F, name: &str, default: T, strict: bool) -> ValidationResult<T>
where
    T: FromStr + ToString,
    F: Fn(&str) -> Option<String>,
{
    let key = env_key(name);
    match lookup(&key) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => Ok(value),
            Err(_) if strict => Err(ValidationError::invalid_config(key, raw)),
            Err(_) => {
                log::warn!(
                    "Invalid value in {}, using default {}",
                    key,
                    default.to_string()
                );
                Ok(default)
            }
        },
    }
}
