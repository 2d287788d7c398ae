//! Data Transfer Objects for API requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::document::DocumentKind;

/// Standard API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (0 = success, non-zero = error).
    pub code: i32,

    /// Human-readable message.
    pub message: String,

    /// Response data (null on error).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a success response.
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data: Some(data),
        }
    }

    /// Create an error response.
    pub fn error(code: i32, message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            message: message.into(),
            data: None,
        }
    }
}

/// Request to validate a taxpayer document.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateDocumentRequest {
    /// Raw document input, punctuation and all. An empty or unparseable
    /// document is a regular `valid: false` verdict, never a request
    /// error; the caller is a form front-end relaying raw user input.
    pub document: String,
}

/// Verdict for a document validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentVerdict {
    /// Whether the document passed its check-digit algorithm.
    pub valid: bool,

    /// Kind the digit count selected; absent for over-length input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<DocumentKind>,

    /// The digit string that was actually validated (padded form for
    /// partial input).
    pub normalized: String,
}

/// Response for tracking-number generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingNumbersResponse {
    /// Generated numbers, `TE#########BR`.
    pub numbers: Vec<String>,
}

impl TrackingNumbersResponse {
    /// Create a new response.
    #[must_use]
    pub fn new(numbers: Vec<String>) -> Self {
        Self { numbers }
    }
}

/// Request to verify a tracking number's embedded check digit.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyTrackingRequest {
    /// Candidate number, `TE#########BR`.
    pub number: String,
}

/// Verdict for a tracking-number verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingVerdict {
    /// Whether the number is well-formed and its check digit matches.
    pub valid: bool,
}

/// Response for a built remessa file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemessaFileResponse {
    /// Correios drop filename, `{acronym}1{DDMM}{shipping}.SD1`.
    pub filename: String,

    /// Full fixed-width file content.
    pub content: String,

    /// Record count including the header.
    pub records: u32,

    /// Object number stamped on the detail records.
    pub object_number: String,
}

/// Request to parse a retorno file.
#[derive(Debug, Clone, Deserialize)]
pub struct ParseRetornoRequest {
    /// Raw retorno file content.
    pub content: String,
}

impl ParseRetornoRequest {
    /// Validate the request.
    ///
    /// # Errors
    ///
    /// Returns a message when the content is empty.
    pub fn validate(&self) -> Result<(), String> {
        if self.content.trim().is_empty() {
            return Err("content is required".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_success() {
        let response = ApiResponse::success(vec![1, 2, 3]);
        assert_eq!(response.code, 0);
        assert_eq!(response.message, "success");
        assert_eq!(response.data, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_api_response_error() {
        let response = ApiResponse::<()>::error(3001, "document is required");
        assert_eq!(response.code, 3001);
        assert_eq!(response.message, "document is required");
        assert!(response.data.is_none());
    }

    #[test]
    fn test_verdict_serialization_skips_absent_kind() {
        let verdict = DocumentVerdict {
            valid: false,
            kind: None,
            normalized: "123456789012345".to_string(),
        };
        let json = serde_json::to_value(&verdict).unwrap();
        assert!(json.get("kind").is_none());

        let verdict = DocumentVerdict {
            valid: true,
            kind: Some(DocumentKind::Cpf),
            normalized: "12345678909".to_string(),
        };
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["kind"], "cpf");
    }

    #[test]
    fn test_parse_request_validation() {
        let request = ParseRetornoRequest {
            content: "0line".to_string(),
        };
        assert!(request.validate().is_ok());

        let request = ParseRetornoRequest {
            content: "  \n".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
