//! # dote-core
//!
//! Core types, traits, and utilities for Dote Ops.
//!
//! This crate provides the foundational building blocks used across all other crates:
//! - Common error types and the validation-error collection
//! - Core traits (Entity, Identifiable, Clock)
//! - Short-id generation
//! - Configuration types

pub mod config;
pub mod error;
pub mod ids;
pub mod traits;

pub use error::*;
pub use traits::*;
