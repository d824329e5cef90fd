//! # dote-auth
//!
//! Sign-in session and section access for Dote Ops. Authentication is the
//! mock flow carried over from the dashboard: any password signs in as long
//! as the email matches a team member. Access checks are advisory; services
//! never enforce them.

pub mod permissions;
pub mod session;

pub use permissions::{can_access, effective_permissions, Section};
pub use session::Session;
