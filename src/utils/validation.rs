use crate::utils::error::{Result, TrackerError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 作為除數使用的讀數必須大於零
pub fn validate_divisor(field_name: &str, value: f64) -> Result<f64> {
    if value.is_nan() || value <= 0.0 {
        return Err(TrackerError::InvalidDivisor {
            field: field_name.to_string(),
            value,
        });
    }
    Ok(value)
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(TrackerError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(value)
}

/// 步數/划水次數必須是非負整數
pub fn validate_whole_number(field_name: &str, value: f64) -> Result<u64> {
    let value = validate_finite(field_name, value)?;

    if value < 0.0 || value.fract() != 0.0 || value >= u64::MAX as f64 {
        return Err(TrackerError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a non-negative whole number".to_string(),
        });
    }
    Ok(value as u64)
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TrackerError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(TrackerError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
