//! Remessa build and retorno parse service.
//!
//! The remessa file registers AR objects with the Correios: one header
//! record (type 8) and one detail record (type 9) per recipient, 270
//! columns each. The retorno file reports delivery outcomes back: header
//! (type 0), details (type 1), trailer (type 2). Unknown retorno record
//! types are skipped; unparseable numeric and date fields degrade to
//! empty values instead of failing the file.

use chrono::{DateTime, Local};
use metrics::counter;

use crate::config::RemessaConfig;
use crate::domain::dto::RemessaFileResponse;
use crate::domain::remessa::{
    Recipient, RemessaBatch, RetornoDetail, RetornoFile, RetornoHeader, RetornoTrailer,
    reason_description,
};
use crate::domain::tracking::{COUNTRY_SUFFIX, TrackingNumber};
use crate::error::{AppError, Result};
use crate::service::layout::{self, REMESSA_RECORD_WIDTH, RecordBuilder};

/// Remessa header record type.
const HEADER_RECORD: u8 = 8;

/// Remessa detail record type.
const DETAIL_RECORD: u8 = 9;

/// Service for building remessa files and parsing retorno files.
#[derive(Debug, Clone)]
pub struct RemessaService {
    client: RemessaConfig,
}

impl RemessaService {
    /// Create a new remessa service for the configured client.
    #[must_use]
    pub fn new(config: &RemessaConfig) -> Self {
        Self {
            client: config.clone(),
        }
    }

    /// Build the remessa file for a batch.
    ///
    /// The object number is resolved by the caller (parsed from the
    /// request or freshly generated) so the record can carry foreign
    /// service acronyms too.
    ///
    /// # Errors
    ///
    /// Returns `BadRequest` when the batch fails validation.
    pub fn build(
        &self,
        batch: &RemessaBatch,
        acronym: &str,
        number: TrackingNumber,
    ) -> Result<RemessaFileResponse> {
        batch.validate().map_err(AppError::BadRequest)?;

        let now = Local::now();
        let records = u32::try_from(batch.recipients.len())
            .map_err(|_| AppError::BadRequest("too many recipients".to_string()))?
            + 1;

        let mut sequence: u32 = 1;
        let mut lines = Vec::with_capacity(records as usize);
        lines.push(self.header_record(&now, records, batch.shipping, sequence));

        for recipient in &batch.recipients {
            sequence += 1;
            lines.push(self.detail_record(batch, recipient, acronym, number, sequence));
        }

        counter!("argen_remessa_files_built_total").increment(1);
        tracing::info!(
            shipping = batch.shipping,
            records,
            "remessa file built"
        );

        Ok(RemessaFileResponse {
            filename: self.filename(&now, batch.shipping),
            content: lines.join("\n"),
            records,
            object_number: format!("{acronym}{}{COUNTRY_SUFFIX}", number.object_digits()),
        })
    }

    /// Parse a retorno file into its structured records.
    ///
    /// # Errors
    ///
    /// Returns `MalformedFile` when the content holds no retorno record
    /// at all.
    pub fn parse(&self, content: &str) -> Result<RetornoFile> {
        let mut file = RetornoFile::default();

        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match layout::read_number(line, 1, 1) {
                Some(0) => file.header = Some(parse_header(line)),
                Some(1) => file.details.push(parse_detail(line)),
                Some(2) => file.trailer = Some(parse_trailer(line)),
                _ => {}
            }
        }

        if file.header.is_none() && file.details.is_empty() && file.trailer.is_none() {
            return Err(AppError::MalformedFile(
                "no retorno records found".to_string(),
            ));
        }

        counter!("argen_retorno_files_parsed_total").increment(1);
        Ok(file)
    }

    /// Correios drop filename: `{acronym}1{DDMM}{shipping}.SD1`.
    fn filename(&self, date: &DateTime<Local>, shipping: u32) -> String {
        format!(
            "{}1{}{shipping}.SD1",
            self.client.client_acronym,
            date.format("%d%m")
        )
    }

    fn header_record(
        &self,
        date: &DateTime<Local>,
        records: u32,
        shipping: u32,
        sequence: u32,
    ) -> String {
        let mut record = RecordBuilder::new(REMESSA_RECORD_WIDTH);

        record.put_number(HEADER_RECORD, 1, 1);
        record.put_number(self.client.client_code, 2, 5);
        record.put_number(0, 6, 20);
        record.put_text(&self.client.client_name, 21, 60);
        record.put_text(&date.format("%Y%m%d").to_string(), 61, 68);
        record.put_number(records, 69, 74);
        record.put_number(0, 75, 258);
        record.put_number(shipping, 259, 263);
        record.put_number(sequence, 264, 270);

        record.finish()
    }

    fn detail_record(
        &self,
        batch: &RemessaBatch,
        recipient: &Recipient,
        acronym: &str,
        number: TrackingNumber,
        sequence: u32,
    ) -> String {
        let mut record = RecordBuilder::new(REMESSA_RECORD_WIDTH);

        record.put_number(DETAIL_RECORD, 1, 1);
        record.put_number(self.client.client_code, 2, 5);
        record.put_text(&self.client.client_identifier, 6, 13);
        record.put_text(acronym, 14, 15);
        record.put_text(&number.object_digits(), 16, 24);
        // Origin country first; the operation code and free content then
        // overwrite the tail of its range, leaving `BR` at [25,26].
        record.put_text(COUNTRY_SUFFIX, 25, 36);
        record.put_number(batch.operation.code(), 27, 30);
        record.put_text(&batch.content, 31, 90);
        record.put_text(&recipient.name, 91, 130);
        record.put_text(&recipient.address_line(), 131, 210);
        record.put_text(&recipient.city, 211, 240);
        record.put_text(&recipient.state, 241, 242);
        record.put_number(recipient.zip_digits(), 243, 250);
        record.put_number(0, 251, 258);
        record.put_number(batch.shipping, 259, 263);
        record.put_number(sequence, 264, 270);

        record.finish()
    }
}

fn parse_header(line: &str) -> RetornoHeader {
    RetornoHeader {
        client_code: layout::read_number(line, 2, 4),
        client_name: layout::read_text(line, 21, 40),
        movement_date: layout::read_date(line, 61),
        generation_date: layout::read_date(line, 69),
        file_sequence: layout::read_number(line, 160, 5),
        record_sequence: layout::read_number(line, 165, 6),
    }
}

fn parse_detail(line: &str) -> RetornoDetail {
    let discharge_code = layout::read_text(line, 95, 2);
    let return_code = layout::read_text(line, 157, 2);

    RetornoDetail {
        client_code: layout::read_number(line, 2, 4),
        client_identifier: layout::read_text(line, 6, 8),
        object_acronym: layout::read_text(line, 14, 2),
        object_number: layout::read_number(line, 16, 9),
        origin_country: layout::read_text(line, 25, 2),
        content: layout::read_text(line, 27, 60),
        delivery_date: layout::read_date(line, 87),
        discharge_reason: reason_description(&discharge_code),
        discharge_code,
        object_batch: layout::read_text(line, 97, 8),
        receiver_name: layout::read_text(line, 105, 40),
        receiver_document: layout::read_text(line, 145, 12),
        return_reason: reason_description(&return_code),
        return_code,
        file_sequence: layout::read_number(line, 160, 5),
        record_sequence: layout::read_number(line, 165, 6),
    }
}

fn parse_trailer(line: &str) -> RetornoTrailer {
    RetornoTrailer {
        client_code: layout::read_number(line, 2, 4),
        client_name: layout::read_text(line, 21, 40),
        record_count: layout::read_number(line, 61, 6),
        file_sequence: layout::read_number(line, 160, 5),
        record_sequence: layout::read_number(line, 165, 6),
    }
}
