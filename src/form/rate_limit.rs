/// Minimum interval between accepted submissions from this client.
pub const SUBMIT_COOLDOWN_MS: i64 = 30_000;

/// Decides whether a submit attempt at `now_ms` is allowed given the
/// timestamp of the last accepted submission (0 means "never"). Advisory
/// only — there is no server-side counterpart.
pub fn admit(now_ms: i64, last_ms: i64) -> bool {
    now_ms - last_ms >= SUBMIT_COOLDOWN_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_submission_is_admitted() {
        assert!(admit(1_000_000, 0));
    }

    #[test]
    fn cooldown_boundary() {
        let last = 1_000_000;
        assert!(!admit(last + 29_999, last));
        assert!(admit(last + 30_000, last));
    }

    #[test]
    fn within_cooldown_is_rejected() {
        assert!(!admit(1_020_000, 1_000_000));
    }
}
