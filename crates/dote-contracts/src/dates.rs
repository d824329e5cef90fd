//! Contract for commemorative dates

use dote_core::error::ValidationErrors;
use dote_models::CommemorativeDate;

use crate::base::{finish, Contract, ValidationResult};

/// Validates a commemorative date entry
#[derive(Debug, Default, Clone, Copy)]
pub struct DateContract;

impl DateContract {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_name(&self, name: &str, errors: &mut ValidationErrors) {
        if name.trim().is_empty() {
            errors.add("name", "can't be blank");
        }
    }

    pub fn validate_day(&self, day: u32, errors: &mut ValidationErrors) {
        if !(1..=31).contains(&day) {
            errors.add("day", "must be between 1 and 31");
        }
    }

    /// Months are stored zero-based, January is 0
    pub fn validate_month(&self, month: u32, errors: &mut ValidationErrors) {
        if month > 11 {
            errors.add("month", "must be between 0 and 11");
        }
    }
}

impl Contract<CommemorativeDate> for DateContract {
    fn validate(&self, entity: &CommemorativeDate) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        self.validate_name(&entity.name, &mut errors);
        self.validate_day(entity.day, &mut errors);
        self.validate_month(entity.month, &mut errors);

        finish(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(name: &str, day: u32, month: u32) -> CommemorativeDate {
        CommemorativeDate {
            id: "d1".to_string(),
            name: name.to_string(),
            day,
            month,
            client_id: None,
        }
    }

    #[test]
    fn valid_date_passes() {
        assert!(DateContract::new().validate(&date("Christmas", 25, 11)).is_ok());
    }

    #[test]
    fn day_out_of_range_is_rejected() {
        for bad_day in [0, 32] {
            let errors = DateContract::new()
                .validate(&date("Christmas", bad_day, 11))
                .unwrap_err();
            assert!(errors.has_error("day"), "day {bad_day} should fail");
        }
    }

    #[test]
    fn month_past_december_is_rejected() {
        let errors = DateContract::new()
            .validate(&date("Christmas", 25, 12))
            .unwrap_err();
        assert!(errors.has_error("month"));
    }
}
