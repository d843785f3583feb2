use crate::errors_service::ServiceError;

pub const MAX_NAME_LENGTH: usize = 255;

/// Trims a required name field and rejects blank or over-long values.
pub fn validate_name(field: &str, value: &str) -> Result<String, ServiceError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ServiceError::Validation(format!("{field} cannot be blank")));
    }
    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(ServiceError::Validation(format!(
            "{field} cannot exceed {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(value.to_string())
}

pub fn normalize_optional_text(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

pub fn validate_coordinate(field: &str, value: Option<f64>, bound: f64) -> Result<(), ServiceError> {
    match value {
        Some(v) if !v.is_finite() || v.abs() > bound => Err(ServiceError::Validation(format!(
            "{field} must be between -{bound} and {bound}"
        ))),
        _ => Ok(()),
    }
}
