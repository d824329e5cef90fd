//! # dote-journals
//!
//! Best-effort job history. A handful of actions append an audit line to the
//! job they touch; everything else (stage moves, piece edits) changes the job
//! silently. History never blocks the action that triggered it.

pub mod actions;
pub mod history;

pub use history::HistoryService;
