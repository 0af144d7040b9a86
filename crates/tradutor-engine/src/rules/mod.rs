//! One rule module per contract category.
//!
//! Each module hunts a fixed set of facts, applies independent reasoning
//! rules to the raw values, and assembles a report with that category's
//! static score and glossary.

pub(crate) mod edital;
pub(crate) mod financiamento;
pub(crate) mod generico;
pub(crate) mod locacao;
pub(crate) mod nda;
pub(crate) mod propriedade_intelectual;
pub(crate) mod seguro;

use tradutor_core::AnalysisReport;

use crate::tokens::Field;

/// What a rule module hands back to the dispatcher.
pub(crate) struct Extraction {
    pub report: AnalysisReport,
    /// Raw hunted values in declaration order, before any interpolation.
    pub fields: Vec<Field>,
}
