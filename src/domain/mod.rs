//! Domain models for the AR document service.
//!
//! Core value types: taxpayer documents, tracking numbers, remessa
//! batches and retorno records, plus the API contracts.

pub mod document;
pub mod dto;
pub mod remessa;
pub mod tracking;

pub use document::DocumentKind;
pub use dto::{
    ApiResponse, DocumentVerdict, ParseRetornoRequest, RemessaFileResponse,
    TrackingNumbersResponse, TrackingVerdict, ValidateDocumentRequest, VerifyTrackingRequest,
};
pub use remessa::{
    Recipient, RemessaBatch, RemessaOperation, RetornoDetail, RetornoFile, RetornoHeader,
    RetornoTrailer,
};
pub use tracking::TrackingNumber;
