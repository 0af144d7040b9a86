//! Extraction tokens: named values pulled from a document, kept for audit.

use serde::{Deserialize, Serialize};

use crate::contract_type::ContractType;

/// A named value the engine extracted, with the surrounding source text.
///
/// `context_text` lets an auditor check the match in place without
/// re-reading the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionToken {
    pub token_name: String,
    pub token_value: String,
    pub context_text: String,
}

/// A token as persisted by the audit layer, tagged with request metadata.
///
/// Only callers build these; the engine itself never sees user or
/// document identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub user_id: String,
    pub document_id: String,
    pub contract_type: ContractType,
    pub token_name: String,
    pub token_value: String,
    pub context_text: String,
    /// ISO 8601 timestamp string.
    pub recorded_at: String,
}

impl ExtractionToken {
    /// Attach caller-supplied metadata for storage.
    pub fn into_record(
        self,
        user_id: impl Into<String>,
        document_id: impl Into<String>,
        contract_type: ContractType,
        recorded_at: impl Into<String>,
    ) -> TokenRecord {
        TokenRecord {
            user_id: user_id.into(),
            document_id: document_id.into(),
            contract_type,
            token_name: self.token_name,
            token_value: self.token_value,
            context_text: self.context_text,
            recorded_at: recorded_at.into(),
        }
    }
}
