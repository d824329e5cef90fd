//! # dote-timers
//!
//! Per-piece time tracking. A process-wide [`TimeTracker`] holds the running
//! flags and accumulated seconds, a [`Ticker`] worker advances them once a
//! second, and [`TimerService`] wires the board's start/stop gesture to job
//! history.

pub mod service;
pub mod ticker;
pub mod tracker;

pub use service::TimerService;
pub use ticker::Ticker;
pub use tracker::TimeTracker;
