//! The closed set of contract categories that select a rule module.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Contract category supplied by the caller alongside the document text.
///
/// Tags are exact and case-sensitive. Anything outside the closed set is
/// [`ContractType::Other`], which selects the generic analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    /// Residential or commercial lease.
    Locacao,
    /// Insurance policy.
    Seguro,
    /// Loan or financing agreement.
    Financiamento,
    /// Public-tender notice.
    Edital,
    /// Intellectual-property agreement.
    PropriedadeIntelectual,
    /// Services agreement (shares the intellectual-property rules).
    Servicos,
    /// Non-disclosure agreement.
    Nda,
    /// Unrecognised or unspecified category.
    #[default]
    #[serde(rename = "outro")]
    Other,
}

/// Strict parse failure for a contract tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown contract type '{0}' (expected one of: locacao, seguro, financiamento, edital, propriedade_intelectual, servicos, nda, outro)")]
pub struct UnknownContractType(pub String);

impl ContractType {
    pub const ALL: [ContractType; 8] = [
        Self::Locacao,
        Self::Seguro,
        Self::Financiamento,
        Self::Edital,
        Self::PropriedadeIntelectual,
        Self::Servicos,
        Self::Nda,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Locacao => "locacao",
            Self::Seguro => "seguro",
            Self::Financiamento => "financiamento",
            Self::Edital => "edital",
            Self::PropriedadeIntelectual => "propriedade_intelectual",
            Self::Servicos => "servicos",
            Self::Nda => "nda",
            Self::Other => "outro",
        }
    }

    /// Lenient lookup: unknown tags fall back to [`ContractType::Other`].
    pub fn from_tag(tag: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|ct| ct.as_str() == tag)
            .unwrap_or(Self::Other)
    }

    /// Lenient lookup for an optional tag; a missing tag is [`ContractType::Other`].
    pub fn from_optional_tag(tag: Option<&str>) -> Self {
        tag.map(Self::from_tag).unwrap_or(Self::Other)
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractType {
    type Err = UnknownContractType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ct| ct.as_str() == s)
            .ok_or_else(|| UnknownContractType(s.to_string()))
    }
}
