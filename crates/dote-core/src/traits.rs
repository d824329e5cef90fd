//! Core traits shared across the workspace

use chrono::NaiveDate;

/// Primary key type. Ids are short opaque strings generated by [`crate::ids`].
pub type Id = String;

/// Trait for entities that have a primary key
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Base trait for all domain entities
pub trait Entity: Identifiable + Send + Sync {
    /// Human-readable type name for error messages
    const TYPE_NAME: &'static str;
}

/// Wall-clock seam. History timestamps and "today" both come through here so
/// tests can pin the date.
pub trait Clock: Send + Sync {
    /// Current date, used for deadline and calendar math
    fn today(&self) -> NaiveDate;

    /// Display timestamp recorded on history entries
    fn now_display(&self) -> String;
}

/// System clock in the local timezone
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }

    fn now_display(&self) -> String {
        chrono::Local::now().format("%d/%m/%Y %H:%M:%S").to_string()
    }
}
