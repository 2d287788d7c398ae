//! Tracking-number generation service.

use metrics::counter;
use rand::Rng;

use crate::domain::tracking::{MAX_REGISTRATION_BASE, TrackingNumber};
use crate::error::Result;

/// Service for generating and verifying postal tracking numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackingService;

impl TrackingService {
    /// Create a new tracking service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generate one tracking number from a uniformly random 8-digit base.
    ///
    /// # Errors
    ///
    /// The all-zero draw is rejected by the check-digit algorithm; the
    /// error is reported to the caller, not retried.
    pub fn generate(&self) -> Result<TrackingNumber> {
        let base = rand::rng().random_range(0..=MAX_REGISTRATION_BASE);
        let number = TrackingNumber::new(base)?;

        counter!("argen_tracking_numbers_generated_total").increment(1);
        tracing::debug!(number = %number, "tracking number generated");

        Ok(number)
    }

    /// Generate a batch of tracking numbers.
    ///
    /// # Errors
    ///
    /// Propagates the first generation failure.
    pub fn generate_batch(&self, count: u32) -> Result<Vec<TrackingNumber>> {
        (0..count).map(|_| self.generate()).collect()
    }

    /// Whether the candidate is a well-formed `TE#########BR` number with
    /// a matching check digit.
    #[must_use]
    pub fn verify(&self, candidate: &str) -> bool {
        let valid = TrackingNumber::parse(candidate).is_some();

        let outcome = if valid { "valid" } else { "invalid" };
        counter!("argen_tracking_numbers_verified_total", "outcome" => outcome).increment(1);

        valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_number_shape() {
        let service = TrackingService::new();
        for _ in 0..100 {
            let number = service.generate().unwrap().to_string();
            assert_eq!(number.len(), 13);
            assert!(number.starts_with("TE"));
            assert!(number.ends_with("BR"));
            assert!(number[2..11].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_generated_number_verifies() {
        let service = TrackingService::new();
        for _ in 0..20 {
            let number = service.generate().unwrap();
            assert!(service.verify(&number.to_string()));
        }
    }

    #[test]
    fn test_batch_size() {
        let numbers = TrackingService::new().generate_batch(25).unwrap();
        assert_eq!(numbers.len(), 25);
    }

    #[test]
    fn test_verify_rejects_tampered_numbers() {
        let service = TrackingService::new();
        assert!(service.verify("TE123456785BR"));
        assert!(!service.verify("TE123456784BR"));
        assert!(!service.verify("TE12345678BR"));
        assert!(!service.verify("garbage"));
    }
}
