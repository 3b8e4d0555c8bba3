use chrono::{DateTime, Utc};
use std::iter;
use std::num::NonZeroUsize;
use std::time::Duration;
use thiserror::Error;

const CODE_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A short-lived code students enter to mark their attendance.
#[derive(Clone, PartialEq, Debug)]
pub struct AttendanceCode {
    code: String,
    issued_at: DateTime<Utc>,
    valid_for: Duration,
}

impl AttendanceCode {
    pub fn generate(length: NonZeroUsize, valid_for: Duration, now: DateTime<Utc>) -> Self {
        let code = iter::repeat_with(|| CODE_ALPHABET[rand::random_range(0..CODE_ALPHABET.len())] as char)
            .take(length.get())
            .collect();

        AttendanceCode {
            code,
            issued_at: now,
            valid_for,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn valid_for(&self) -> Duration {
        self.valid_for
    }

    /// Time left before the code expires, zero once it has.
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        self.valid_for.saturating_sub(self.elapsed(now))
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.elapsed(now) > self.valid_for
    }

    pub fn verify(&self, input: &str, now: DateTime<Utc>) -> Result<(), CodeError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CodeError::Empty);
        }

        if !input.eq_ignore_ascii_case(&self.code) {
            return Err(CodeError::Mismatch);
        }

        if self.is_expired(now) {
            return Err(CodeError::Expired);
        }

        Ok(())
    }

    fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        // A clock that went backwards counts as no time elapsed
        now.signed_duration_since(self.issued_at).to_std().unwrap_or_default()
    }
}

#[derive(Error, Clone, PartialEq, Debug)]
pub enum CodeError {
    #[error("no attendance code was entered")]
    Empty,
    #[error("the attendance code does not match")]
    Mismatch,
    #[error("the attendance code has expired")]
    Expired,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const TEN_MINUTES: Duration = Duration::from_secs(600);

    fn issued_code() -> (AttendanceCode, DateTime<Utc>) {
        let now = Utc::now();
        let code = AttendanceCode {
            code: "X7K2QA".to_string(),
            issued_at: now,
            valid_for: TEN_MINUTES,
        };
        (code, now)
    }

    #[test]
    fn generate_uses_the_requested_length_and_alphabet() {
        let length = NonZeroUsize::new(6).unwrap();
        let code = AttendanceCode::generate(length, TEN_MINUTES, Utc::now());

        assert_eq!(code.code().len(), 6);
        assert!(code.code().bytes().all(|b| CODE_ALPHABET.contains(&b)), "unexpected character in {}", code.code());
        assert_eq!(code.valid_for(), TEN_MINUTES);
    }

    #[rstest]
    #[case::exact("X7K2QA")]
    #[case::lowercase("x7k2qa")]
    #[case::padded("  X7K2QA \n")]
    fn verify_accepts_a_matching_code(#[case] input: &str) {
        let (code, now) = issued_code();
        assert_eq!(code.verify(input, now + TimeDelta::minutes(5)), Ok(()));
    }

    #[rstest]
    #[case::empty("", CodeError::Empty)]
    #[case::blank("   ", CodeError::Empty)]
    #[case::wrong("X7K2QB", CodeError::Mismatch)]
    #[case::prefix("X7K2Q", CodeError::Mismatch)]
    fn verify_rejects_invalid_input(#[case] input: &str, #[case] expected: CodeError) {
        let (code, now) = issued_code();
        assert_eq!(code.verify(input, now), Err(expected));
    }

    #[test]
    fn verify_accepts_a_code_at_the_end_of_its_validity() {
        let (code, now) = issued_code();
        assert_eq!(code.verify("X7K2QA", now + TimeDelta::minutes(10)), Ok(()));
    }

    #[test]
    fn verify_rejects_an_expired_code() {
        let (code, now) = issued_code();
        assert_eq!(code.verify("X7K2QA", now + TimeDelta::minutes(10) + TimeDelta::seconds(1)), Err(CodeError::Expired));
    }

    #[test]
    fn remaining_counts_down_to_zero() {
        let (code, now) = issued_code();

        assert_eq!(code.remaining(now), TEN_MINUTES);
        assert_eq!(code.remaining(now + TimeDelta::minutes(4)), Duration::from_secs(360));
        assert_eq!(code.remaining(now + TimeDelta::hours(1)), Duration::ZERO);
    }
}
