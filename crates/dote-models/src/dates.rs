//! Commemorative date model
//!
//! Calendar events used for content planning, either agency-wide or tied to
//! one client.

use chrono::NaiveDate;
use dote_core::traits::{Entity, Id, Identifiable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommemorativeDate {
    pub id: Id,
    pub name: String,
    /// Day of month, 1-31
    pub day: u32,
    /// Zero-based month, 0-11
    pub month: u32,
    /// None means the date applies to the whole agency
    pub client_id: Option<Id>,
}

impl CommemorativeDate {
    pub fn is_general(&self) -> bool {
        self.client_id.is_none()
    }

    /// Concrete occurrence in the given year. None when the day does not
    /// exist in that month (Feb 30 and friends).
    pub fn occurrence(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month + 1, self.day)
    }
}

impl Identifiable for CommemorativeDate {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for CommemorativeDate {
    const TYPE_NAME: &'static str = "CommemorativeDate";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occurrence_translates_zero_based_month() {
        let christmas = CommemorativeDate {
            id: "d1".to_string(),
            name: "Christmas".to_string(),
            day: 25,
            month: 11,
            client_id: None,
        };
        assert_eq!(
            christmas.occurrence(2023),
            NaiveDate::from_ymd_opt(2023, 12, 25)
        );
        assert!(christmas.is_general());
    }

    #[test]
    fn occurrence_rejects_impossible_days() {
        let bad = CommemorativeDate {
            id: "d2".to_string(),
            name: "Nope".to_string(),
            day: 30,
            month: 1,
            client_id: Some("1".to_string()),
        };
        assert_eq!(bad.occurrence(2023), None);
        assert!(!bad.is_general());
    }
}
