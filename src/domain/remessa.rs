//! Remessa batch and retorno record types.
//!
//! A remessa is the AR registration file sent to the Correios drop; the
//! retorno is the delivery-outcome file that comes back. Both are
//! fixed-width text formats; the field maps live in the service layer.

use serde::{Deserialize, Serialize};

/// Largest value of the 5-digit file (shipping) sequence field.
pub const MAX_FILE_SEQUENCE: u32 = 99_999;

/// Remessa operation carried in the detail record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemessaOperation {
    /// Register the object (code 1101).
    #[default]
    Include,
    /// Remove a previously registered object (code 1102).
    Exclude,
}

impl RemessaOperation {
    /// Numeric operation code written to the record.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Include => 1101,
            Self::Exclude => 1102,
        }
    }
}

/// Recipient of an AR object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    /// Full recipient name.
    pub name: String,

    /// Street line of the address.
    pub street: String,

    /// House/building number; free text, may be empty.
    #[serde(default)]
    pub number: String,

    /// Address complement (apartment, floor, ...).
    #[serde(default)]
    pub complement: String,

    /// Neighborhood.
    pub neighborhood: String,

    /// City.
    pub city: String,

    /// Two-letter state (UF) code.
    pub state: String,

    /// Postal code; punctuation tolerated, 8 digits required.
    pub zip_code: String,
}

impl Recipient {
    /// Single address line the detail record carries: street, number,
    /// optional complement, then neighborhood and city.
    #[must_use]
    pub fn address_line(&self) -> String {
        let mut address = format!("{} {} ", self.street, self.number);
        if !self.complement.is_empty() {
            address.push_str(&self.complement);
        }
        address.push_str(&format!(" {} {}", self.neighborhood, self.city));
        address
    }

    /// Postal code reduced to digits.
    #[must_use]
    pub fn zip_digits(&self) -> String {
        self.zip_code.chars().filter(char::is_ascii_digit).collect()
    }

    /// Validate the recipient for inclusion in a remessa.
    ///
    /// # Errors
    ///
    /// Returns a message describing the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("recipient name cannot be empty".to_string());
        }
        if self.street.trim().is_empty() {
            return Err("recipient street cannot be empty".to_string());
        }
        if self.city.trim().is_empty() {
            return Err("recipient city cannot be empty".to_string());
        }
        if self.state.len() != 2 || !self.state.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(format!("invalid UF code: {:?}", self.state));
        }
        if self.zip_digits().len() != 8 {
            return Err(format!("zip code must hold 8 digits: {:?}", self.zip_code));
        }
        Ok(())
    }
}

/// One remessa batch: an object number registered (or excluded) for a set
/// of recipients under a single file sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemessaBatch {
    /// Operation for every detail record.
    #[serde(default)]
    pub operation: RemessaOperation,

    /// File (shipping) sequence number, at most 5 digits.
    pub shipping: u32,

    /// Full object number (`XX#########BR`). Generated when absent.
    #[serde(default)]
    pub object_number: Option<String>,

    /// Free content field, truncated to 60 characters on write.
    #[serde(default)]
    pub content: String,

    /// Recipients, one detail record each.
    pub recipients: Vec<Recipient>,
}

impl RemessaBatch {
    /// Validate the batch before building the file.
    ///
    /// # Errors
    ///
    /// Returns a message describing the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.shipping == 0 {
            return Err("shipping sequence must be at least 1".to_string());
        }
        if self.shipping > MAX_FILE_SEQUENCE {
            return Err(format!(
                "shipping sequence cannot exceed {MAX_FILE_SEQUENCE}"
            ));
        }
        if self.recipients.is_empty() {
            return Err("batch needs at least one recipient".to_string());
        }
        for recipient in &self.recipients {
            recipient.validate()?;
        }
        Ok(())
    }
}

/// Parsed retorno header record (line type 0).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetornoHeader {
    /// Client code assigned by the Correios.
    pub client_code: Option<u32>,
    /// Client name.
    pub client_name: String,
    /// Movement date, `DD/MM/YYYY`, empty when unparseable.
    pub movement_date: String,
    /// File generation date, `DD/MM/YYYY`, empty when unparseable.
    pub generation_date: String,
    /// File sequence number.
    pub file_sequence: Option<u32>,
    /// Record sequence number.
    pub record_sequence: Option<u32>,
}

/// Parsed retorno detail record (line type 1).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetornoDetail {
    /// Client code assigned by the Correios.
    pub client_code: Option<u32>,
    /// Client identifier literal.
    pub client_identifier: String,
    /// Object acronym (postal service code).
    pub object_acronym: String,
    /// Object number: 8-digit base plus check digit.
    pub object_number: Option<u32>,
    /// Origin country code.
    pub origin_country: String,
    /// Free content echoed back.
    pub content: String,
    /// AR delivery date, `DD/MM/YYYY`, empty when unparseable.
    pub delivery_date: String,
    /// Discharge (baixa) code.
    pub discharge_code: String,
    /// Human-readable discharge description.
    pub discharge_reason: String,
    /// Object batch identifier.
    pub object_batch: String,
    /// Receiver name.
    pub receiver_name: String,
    /// Receiver document.
    pub receiver_document: String,
    /// Return (devolução) code.
    pub return_code: String,
    /// Human-readable return description.
    pub return_reason: String,
    /// File sequence number.
    pub file_sequence: Option<u32>,
    /// Record sequence number.
    pub record_sequence: Option<u32>,
}

/// Parsed retorno trailer record (line type 2).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetornoTrailer {
    /// Client code assigned by the Correios.
    pub client_code: Option<u32>,
    /// Client name.
    pub client_name: String,
    /// Declared record count.
    pub record_count: Option<u32>,
    /// File sequence number.
    pub file_sequence: Option<u32>,
    /// Record sequence number.
    pub record_sequence: Option<u32>,
}

/// A fully parsed retorno file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetornoFile {
    /// Header record, when present.
    pub header: Option<RetornoHeader>,
    /// Detail records in file order.
    pub details: Vec<RetornoDetail>,
    /// Trailer record, when present.
    pub trailer: Option<RetornoTrailer>,
}

/// Description for a discharge (baixa) or return (devolução) reason code.
///
/// The two Correios tables do not overlap, so a single lookup serves both
/// fields; unknown codes keep their value visible in the description.
#[must_use]
pub fn reason_description(code: &str) -> String {
    let known = match code {
        // Discharge (baixa) reasons.
        "01" => "Entregue ao destinatário",
        "02" => "Devolvido ao remetente",
        "03" => "Objeto não postado fisicamente",
        "04" => "Destruído com Autorização do Remetente",
        "18" => "Objeto extraviado",
        "20" => "Avariado",
        "29" => "Roubo",
        "37" => "Sinistro",
        "99" => "Objeto sem AR Digital",
        // Return (devolução) reasons.
        "00" => "",
        "19" => "Endereço incorreto",
        "21" => "Ausente",
        "26" => "Não procurado - Destinatário",
        "33" => "Documentação não fornecida",
        "38" => "Empresa falida",
        "48" => "Endereço sem distribuição domiciliar",
        "71" => "Mudou-se",
        "72" => "Desconhecido",
        "73" => "Recusado",
        "75" => "Endereço insuficiente",
        "76" => "Não existe o número indicado",
        "77" => "Ausente - Devolvido ao remetente",
        "78" => "Não procurado - remetente",
        "79" => "Falecido",
        _ => return format!("Código ({code}) desconhecido"),
    };
    known.to_string()
}
