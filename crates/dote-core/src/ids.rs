//! Short-id generation
//!
//! Collection ids are random base-36 strings; jobs carry a human-facing
//! `JOB-<n>` display id instead.

use rand::Rng;

const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const ID_LENGTH: usize = 9;

/// Generate a random base-36 id
pub fn new_id() -> String {
    let mut rng = rand::rng();
    (0..ID_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Generate a job display id
pub fn new_job_id() -> String {
    let mut rng = rand::rng();
    format!("JOB-{}", rng.random_range(0..1000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_short_base36() {
        let id = new_id();
        assert_eq!(id.len(), ID_LENGTH);
        assert!(id.bytes().all(|b| CHARSET.contains(&b)));
    }

    #[test]
    fn job_ids_carry_prefix_and_small_number() {
        let id = new_job_id();
        assert!(id.starts_with("JOB-"));
        let n: u32 = id[4..].parse().expect("numeric suffix");
        assert!(n < 1000);
    }
}
