//! Contract analysis rule engine: deterministic pattern hunting over
//! extracted document text, producing a plain-language risk report and the
//! audit tokens behind it.
//!
//! The engine is a pure function. It holds no state between calls, performs
//! no I/O, and never fails on content: facts it cannot find come back as
//! [`tradutor_core::NOT_IDENTIFIED`].

pub mod classify;
pub mod document;
pub mod hunt;
mod rules;
pub mod tokens;

pub use classify::guess_contract_type;
pub use hunt::hunt;
pub use tokens::{CONTEXT_CHARS, context_window};

use tracing::debug;
use tradutor_core::{Analysis, ContractType};

use crate::rules::Extraction;

/// Analyse `text` with the rule module for `contract_type`.
pub fn analyze(text: &str, contract_type: ContractType) -> Analysis {
    let Extraction { report, fields } = match contract_type {
        ContractType::Locacao => rules::locacao::analyze(text),
        ContractType::Seguro => rules::seguro::analyze(text),
        ContractType::Financiamento => rules::financiamento::analyze(text),
        ContractType::Edital => rules::edital::analyze(text),
        ContractType::PropriedadeIntelectual | ContractType::Servicos => {
            rules::propriedade_intelectual::analyze(text)
        }
        ContractType::Nda => rules::nda::analyze(text),
        ContractType::Other => rules::generico::analyze(text),
    };
    let tokens = tokens::collect(text, &fields);

    debug!(
        contract_type = %contract_type,
        text_chars = text.chars().count(),
        score = report.summary.score,
        alerts = report.alerts.len(),
        recommendations = report.recommendations.len(),
        tokens = tokens.len(),
        "contract analysed"
    );

    Analysis { report, tokens }
}

/// Analyse with a raw caller-supplied tag.
///
/// Missing or unrecognised tags take the generic path; this never fails.
pub fn analyze_tagged(text: &str, contract_type: Option<&str>) -> Analysis {
    analyze(text, ContractType::from_optional_tag(contract_type))
}
