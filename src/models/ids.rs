//! Time-derived ids for folders and word items created at runtime.
//!
//! Ids are the current Unix time in milliseconds. If that value is already
//! taken in the target list (two adds inside one millisecond), it is bumped
//! until it is free, so ids stay unique within their scope.
use chrono::Utc;

pub fn fresh_id<F>(taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    fresh_id_from(Utc::now().timestamp_millis(), taken)
}

pub fn fresh_id_from<F>(millis: i64, taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut candidate = millis;
    loop {
        let id = candidate.to_string();
        if !taken(&id) {
            return id;
        }
        candidate += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_millis_when_free() {
        assert_eq!(fresh_id_from(1_700_000_000_000, |_| false), "1700000000000");
    }

    #[test]
    fn test_bumps_past_taken_ids() {
        let taken = ["100", "101"];
        let id = fresh_id_from(100, |id| taken.contains(&id));
        assert_eq!(id, "102");
    }

    #[test]
    fn test_fresh_id_is_numeric() {
        let id = fresh_id(|_| false);
        assert!(id.parse::<i64>().unwrap() > 0);
    }
}
