//! Gallery upload validators

use super::utils::check;
use super::FieldReport;
use crate::catalog::Catalog;
use crate::config::ValidationConfig;
use serde::{Deserialize, Serialize};

pub const MSG_FILE_REQUIRED: &str = "Selecciona una imagen";
pub const MSG_FILE_TYPE: &str = "Formato no permitido (usa JPG, PNG, GIF o WEBP)";

/// Metadata of a picked photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMeta {
    pub name: String,
    pub size_bytes: u64,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Lowercased extension after the last dot
pub fn file_extension(file_name: &str) -> Option<String> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .filter(|ext| !ext.is_empty())
}

/// Extension in the catalog's image allow-list (case-insensitive)
pub fn is_valid_file_type(file_name: &str, catalog: &Catalog) -> bool {
    match file_extension(file_name) {
        Some(ext) => catalog
            .image_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(&ext)),
        None => false,
    }
}

/// Size not above `max_size_mb` megabytes (1 MB = 1024 * 1024 bytes)
pub fn is_valid_file_size(size_bytes: u64, max_size_mb: f64) -> bool {
    (size_bytes as f64) <= max_size_mb * 1024.0 * 1024.0
}

/// Both sides within `[min, max]` pixels
pub fn is_valid_image_dimensions(width: u32, height: u32, min: u32, max: u32) -> bool {
    (min..=max).contains(&width) && (min..=max).contains(&height)
}

/// Check type, size and, when known, dimensions
pub fn validate_image(file: &FileMeta, catalog: &Catalog, config: &ValidationConfig) -> FieldReport {
    if file.name.trim().is_empty() {
        return FieldReport::required(MSG_FILE_REQUIRED);
    }

    let mut errors = Vec::new();
    check(&mut errors, is_valid_file_type(&file.name, catalog), MSG_FILE_TYPE);
    if !is_valid_file_size(file.size_bytes, config.max_file_size_mb) {
        errors.push(format!(
            "La imagen no puede pesar más de {} MB",
            config.max_file_size_mb
        ));
    }
    if let (Some(width), Some(height)) = (file.width, file.height) {
        if !is_valid_image_dimensions(
            width,
            height,
            config.min_image_dimension,
            config.max_image_dimension,
        ) {
            errors.push(format!(
                "Las dimensiones deben estar entre {} y {} píxeles",
                config.min_image_dimension, config.max_image_dimension
            ));
        }
    }
    FieldReport::from_errors(errors)
}
