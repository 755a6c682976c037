//! Trending score
//!
//! Decay-weighted popularity used as the alternate sort key for thread
//! listings. The score is computed at query time from the current counters
//! and the thread's age; it is never persisted or cached, since it decays
//! continuously. The SQL in the thread repository mirrors this definition;
//! this function is the canonical form and the test oracle for it.

/// Weight applied to likes
pub const LIKE_WEIGHT: f64 = 1.5;

/// Weight applied to dislikes
pub const DISLIKE_WEIGHT: f64 = 1.2;

/// Weight applied to comments
pub const COMMENT_WEIGHT: f64 = 2.0;

/// Exponential decay constant in seconds (48 hours)
pub const DECAY_SECONDS: f64 = 172_800.0;

/// Compute the trending score for one thread, rounded to two decimals.
pub fn score(like_count: i64, dislike_count: i64, comment_count: i64, age_seconds: f64) -> f64 {
    let weighted = like_count as f64 * LIKE_WEIGHT
        + dislike_count as f64 * DISLIKE_WEIGHT
        + comment_count as f64 * COMMENT_WEIGHT;
    let decayed = weighted * (-age_seconds / DECAY_SECONDS).exp();
    (decayed * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_thread_is_unweighted_sum() {
        // zero age: no decay
        assert!((score(10, 5, 3, 0.0) - 27.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_decays_with_age() {
        let fresh = score(10, 0, 0, 0.0);
        let aged = score(10, 0, 0, DECAY_SECONDS);
        let ancient = score(10, 0, 0, DECAY_SECONDS * 20.0);

        assert!(aged < fresh);
        assert!(ancient <= aged);
        // e^-1 decay after one full constant
        assert!((aged - 5.52).abs() < 0.01);
    }

    #[test]
    fn test_older_thread_never_outscores_identical_newer_one() {
        for counters in [(1, 0, 0), (3, 7, 2), (100, 50, 25)] {
            let newer = score(counters.0, counters.1, counters.2, 3_600.0);
            let older = score(counters.0, counters.1, counters.2, 86_400.0);
            assert!(older <= newer);
        }
    }

    #[test]
    fn test_score_is_rounded_to_two_decimals() {
        let s = score(1, 1, 1, 12_345.0);
        assert!((s * 100.0 - (s * 100.0).round()).abs() < 1e-9);
    }

    #[test]
    fn test_zero_counters_score_zero() {
        assert_eq!(score(0, 0, 0, 0.0), 0.0);
    }
}
