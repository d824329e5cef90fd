//! The actions that write history
//!
//! Only these four call sites log. Stage moves, piece adds, status flips,
//! and reassignment leave no trace.

pub const JOB_CREATED: &str = "Job created";
pub const JOB_UPDATED_MANUALLY: &str = "Job updated manually";

pub fn removed_piece(name: &str) -> String {
    format!("Removed piece: {name}")
}

pub fn paused_timer(piece_name: &str) -> String {
    format!("Paused timer on piece: {piece_name}")
}
