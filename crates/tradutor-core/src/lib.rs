//! Shared types for the contract analysis engine: contract categories,
//! the risk report, and audit tokens.

pub mod contract_type;
pub mod report;
pub mod token;

pub use contract_type::{ContractType, UnknownContractType};
pub use report::{
    Alert, AlertKind, AnalysisReport, GlossaryTerm, NOT_IDENTIFIED, Recommendation,
    RecommendationKind, RiskLevel, Summary,
};
pub use token::{ExtractionToken, TokenRecord};

/// The result of one analysis run: the report and its audit tokens.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Analysis {
    pub report: AnalysisReport,
    pub tokens: Vec<ExtractionToken>,
}
