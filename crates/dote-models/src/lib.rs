//! # dote-models
//!
//! Domain models for Dote Ops.
//!
//! Entity structs for the agency dashboard: clients with their brandbooks,
//! team members, jobs with their pieces and history, and commemorative
//! dates. Pure derived logic (progress, overdue checks, elapsed-time
//! formatting) lives next to the data it reads.

pub use dote_core::traits::{Entity, Id, Identifiable};

pub mod client;
pub mod dates;
pub mod job;
pub mod team;

pub use client::{
    BrandColor, BrandStory, Client, ClientContact, ClientPersona, ClientPlan, ClientStatus,
    ColorPalette, CorporateProfile, DigitalChannels, SocialPlatformMetric, ToneProfile,
};
pub use dates::CommemorativeDate;
pub use job::{
    format_elapsed, Job, JobHistoryEntry, JobPiece, JobProgress, JobStage, JobType, PieceStatus,
};
pub use team::{AccessPermissions, MemberStatus, Role, TeamMember};
