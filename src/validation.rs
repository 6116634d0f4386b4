use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use thiserror::Error;

/// 24-hour "HH:MM" clock time
static CLOCK_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-1][0-9]|2[0-3]):[0-5][0-9]$").expect("valid clock regex"));

/// Rejected input, with a message per offending field
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub field_errors: HashMap<String, String>,
}

/// Input that can check its own shape before it reaches storage
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Accumulates per-field problems
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: HashMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors.entry(field.to_string()).or_insert_with(|| message.into());
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn check_range(&mut self, field: &str, value: i32, min: i32, max: i32) {
        if value < min || value > max {
            self.add(field, format!("must be between {} and {}", min, max));
        }
    }

    pub fn check_clock_time(&mut self, field: &str, value: &str) {
        if !is_clock_time(value) {
            self.add(field, "must be a 24-hour time formatted as HH:MM");
        }
    }

    /// Null and empty are accepted; anything else must be a clock time
    pub fn check_optional_clock_time(&mut self, field: &str, value: Option<&str>) {
        match value {
            None | Some("") => {}
            Some(v) => self.check_clock_time(field, v),
        }
    }

    pub fn into_result(self, message: impl Into<String>) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                message: message.into(),
                field_errors: self.errors,
            })
        }
    }
}

pub fn is_clock_time(value: &str) -> bool {
    CLOCK_TIME.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_time_pattern() {
        for ok in ["00:00", "09:00", "18:30", "23:59", "19:05"] {
            assert!(is_clock_time(ok), "{} should be accepted", ok);
        }
        for bad in ["24:00", "9:00", "12:60", "12:5", "noon", "", "12:00:00", " 12:00"] {
            assert!(!is_clock_time(bad), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_first_error_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.check_range("day", 40, 1, 31);
        errors.add("day", "second message");

        let err = errors.into_result("Invalid body").unwrap_err();
        assert_eq!(err.message, "Invalid body");
        assert_eq!(err.field_errors["day"], "must be between 1 and 31");
    }

    #[test]
    fn test_optional_clock_time_allows_blank() {
        let mut errors = FieldErrors::new();
        errors.check_optional_clock_time("start_time", None);
        errors.check_optional_clock_time("end_time", Some(""));
        assert!(errors.is_empty());

        errors.check_optional_clock_time("end_time", Some("25:00"));
        assert!(errors.contains("end_time"));
    }
}
