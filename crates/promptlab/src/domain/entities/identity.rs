//! Identity and clock helpers shared by all entities

use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

/// Generate an opaque unique identifier (random UUID v4 text)
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current UTC time, truncated to whole microseconds
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_ids_are_unique() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_now_is_monotonic_enough() {
        let first = now();
        let second = now();
        assert!(second >= first);
    }

    #[test]
    fn test_now_has_no_sub_microsecond_part() {
        assert_eq!(now().timestamp_subsec_nanos() % 1_000, 0);
    }
}
