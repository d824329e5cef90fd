//! # dote-queries
//!
//! Read-side projections for Dote Ops. Everything here recomputes from the
//! stores on every call; nothing is cached or incremental.
//!
//! - `dashboard` - monthly performance stats, overdue list, upcoming dates
//! - `boards` - the job board views: my jobs, kanban groupings, timeline
//! - `directory` - team/client search and the calendar feeds

pub mod boards;
pub mod dashboard;
pub mod directory;

pub use boards::{AssigneeColumn, BoardQueries, StageColumn, TimelineCell, TimelineRow};
pub use dashboard::{DashboardQueries, MonthlyStats};
pub use directory::DirectoryQueries;
