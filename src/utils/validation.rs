use crate::utils::error::{GeometryError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects lengths that are not strictly positive. NaN fails too, since `NaN > 0.0` is false.
pub fn validate_positive_length(parameter: &'static str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidArgument { parameter, value })
    }
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(GeometryError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_triangle_inequality(a: f64, b: f64, c: f64) -> Result<()> {
    if a + b > c && a + c > b && b + c > a {
        Ok(())
    } else {
        Err(GeometryError::DegenerateTriangle { a, b, c })
    }
}
