//! # dote-services
//!
//! Business operations for Dote Ops, one service struct per operation.
//! Services take loaded models plus params, validate through
//! `dote-contracts`, persist through the stores, and report through
//! [`ServiceResult`]. The few actions that leave an audit line do so via
//! `dote-journals`.

pub mod clients;
pub mod dates;
pub mod jobs;
pub mod result;
pub mod team;

pub use result::ServiceResult;
