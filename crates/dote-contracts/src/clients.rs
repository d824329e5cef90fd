//! Contract for clients

use dote_core::error::ValidationErrors;
use dote_models::{Client, ToneProfile};

use crate::base::{finish, Contract, ValidationResult};

/// Validates a client record and its brandbook sections
#[derive(Debug, Default, Clone, Copy)]
pub struct ClientContract;

impl ClientContract {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_name(&self, name: &str, errors: &mut ValidationErrors) {
        if name.trim().is_empty() {
            errors.add("name", "can't be blank");
        }
    }

    /// Tone sliders run between two poles; anything past 100 is a bad write
    pub fn validate_tone(&self, tone: &ToneProfile, errors: &mut ValidationErrors) {
        let axes = [
            ("casual_formal", tone.casual_formal),
            ("friendly_professional", tone.friendly_professional),
            ("funny_serious", tone.funny_serious),
            ("accessible_exclusive", tone.accessible_exclusive),
            ("modern_classic", tone.modern_classic),
            ("soft_imposing", tone.soft_imposing),
        ];
        for (axis, value) in axes {
            if value > 100 {
                errors.add(axis, "must be between 0 and 100");
            }
        }
    }
}

impl Contract<Client> for ClientContract {
    fn validate(&self, entity: &Client) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        self.validate_name(&entity.name, &mut errors);
        self.validate_tone(&entity.tone, &mut errors);

        finish(errors)
    }
}
