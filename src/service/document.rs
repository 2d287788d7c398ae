//! Document validation service.
//!
//! Thin façade over the pure validators: classifies the input, records
//! the outcome, and shapes the verdict for the API layer.

use metrics::counter;

use crate::domain::DocumentKind;
use crate::domain::dto::DocumentVerdict;
use crate::service::validator;

/// Service for CPF/CNPJ validation verdicts.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentService;

impl DocumentService {
    /// Create a new document service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validate raw document input.
    ///
    /// Never fails: malformed input yields `valid: false`.
    #[must_use]
    pub fn validate(&self, raw: &str) -> DocumentVerdict {
        let (normalized, kind) = validator::effective_document(raw);
        let valid = match kind {
            Some(DocumentKind::Cpf) => validator::validate_cpf(&normalized),
            Some(DocumentKind::Cnpj) => validator::validate_cnpj(&normalized),
            None => false,
        };

        let outcome = if valid { "valid" } else { "invalid" };
        counter!("argen_documents_validated_total", "outcome" => outcome).increment(1);
        tracing::debug!(?kind, valid, "document validated");

        DocumentVerdict {
            valid,
            kind,
            normalized,
        }
    }
}
