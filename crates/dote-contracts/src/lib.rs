//! # dote-contracts
//!
//! Validation contracts for Dote Ops. A contract checks an entity before a
//! service writes it to the store and reports every problem at once through
//! [`ValidationErrors`](dote_core::error::ValidationErrors).
//!
//! Permissions are not part of contracts: access flags are advisory
//! navigation hints, not write guards.

pub mod base;
pub mod clients;
pub mod dates;
pub mod jobs;
pub mod team;

pub use base::*;
pub use clients::ClientContract;
pub use dates::DateContract;
pub use jobs::JobContract;
pub use team::MemberContract;
