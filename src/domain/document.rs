//! Taxpayer document types.

use serde::{Deserialize, Serialize};

/// Number of digits in a CPF (individual taxpayer registry number).
pub const CPF_LENGTH: usize = 11;

/// Number of digits in a CNPJ (legal-entity registry number).
pub const CNPJ_LENGTH: usize = 14;

/// Kind of Brazilian taxpayer document, selected by digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// 11-digit individual taxpayer registry number.
    Cpf,
    /// 14-digit legal-entity registry number.
    Cnpj,
}

impl DocumentKind {
    /// Kind a normalized digit count maps to, if any.
    #[must_use]
    pub const fn from_length(len: usize) -> Option<Self> {
        match len {
            CPF_LENGTH => Some(Self::Cpf),
            CNPJ_LENGTH => Some(Self::Cnpj),
            _ => None,
        }
    }

    /// Digit count this kind requires.
    #[must_use]
    pub const fn length(self) -> usize {
        match self {
            Self::Cpf => CPF_LENGTH,
            Self::Cnpj => CNPJ_LENGTH,
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cpf => write!(f, "cpf"),
            Self::Cnpj => write!(f, "cnpj"),
        }
    }
}
