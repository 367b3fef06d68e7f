//! Field validation rules shared by forms

/// Validation rules for a single form field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// No constraints
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    pub const fn required() -> Self {
        Self {
            required: true,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    pub const fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub const fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub const fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value; length is counted in chars
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(format!("{} is required", field_label));
        }

        let len = value.chars().count();

        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!(
                    "{} must contain at least {} characters",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!(
                    "{} must not exceed {} characters",
                    field_label, max
                ));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if value.is_nan() {
            return Err(format!("{} must be a number", field_label));
        }

        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} must be at least {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} must be at most {}", field_label, max));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        let rules = ValidationRules::required();
        assert_eq!(
            rules.validate_string("   ", "Title"),
            Err("Title is required".to_string())
        );
        assert!(rules.validate_string("Fix login", "Title").is_ok());
    }

    #[test]
    fn test_max_length_counts_chars() {
        let rules = ValidationRules::none().with_max_length(3);
        assert!(rules.validate_string("äöü", "Code").is_ok());
        assert!(rules.validate_string("abcd", "Code").is_err());
    }

    #[test]
    fn test_number_range() {
        let rules = ValidationRules::none().with_range(0.0, 1000.0);
        assert!(rules.validate_number(0.0, "Hours").is_ok());
        assert!(rules.validate_number(1000.0, "Hours").is_ok());
        assert!(rules.validate_number(-0.5, "Hours").is_err());
        assert!(rules.validate_number(1000.5, "Hours").is_err());
        assert!(rules.validate_number(f64::NAN, "Hours").is_err());
    }
}
