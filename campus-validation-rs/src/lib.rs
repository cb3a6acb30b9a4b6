//! # Campus Validation Library
//!
//! Form validation and sanitization for the SportCampus intramural sports app:
//! account registration, team rosters, player statistics, tournaments and
//! gallery uploads.
//!
//! ## Features
//!
//! - Field predicates (`is_*`) that never panic and treat missing input as invalid
//! - Composite validators (`validate_*`) that report every failing reason
//! - Named, reusable rule bundles for the app's forms
//! - A generic form engine that runs rule sets over JSON form data
//! - Sanitizers that clean input without judging it
//!
//! Everything is synchronous and free of shared mutable state; rules and
//! reports are `Send + Sync` and can be used from any thread.

pub mod catalog;
pub mod config;
mod engine;
mod errors;
pub mod registry;
pub mod rules;
pub mod sanitizers;
pub mod validators;

pub use catalog::{Catalog, Sport, SportRules, UserType};
pub use config::ValidationConfig;
pub use engine::{validate_form, FormReport};
pub use errors::{FieldErrors, ValidationError, ValidationResult};
pub use registry::CommonValidationRules;
pub use rules::{FormRules, Rule, RuleSet};
pub use validators::{FieldReport, PasswordStrength, StrengthLevel};

/// Re-export commonly used items for convenience
pub mod prelude {
    pub use crate::catalog::{Catalog, Sport, UserType};
    pub use crate::config::ValidationConfig;
    pub use crate::engine::{validate_form, FormReport};
    pub use crate::errors::{ValidationError, ValidationResult};
    pub use crate::registry::CommonValidationRules;
    pub use crate::rules::{FormRules, Rule, RuleSet};
    pub use crate::sanitizers::{self, sanitize_form, FieldSanitizer};
    pub use crate::validators::{self, FieldReport};
}

/// Version of the validation library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
