//! Keyword guess of a contract's category, for callers that have none.
//!
//! The chat bot receives bare PDFs with no category attached and picks one
//! from party vocabulary before calling [`crate::analyze`]. The engine never
//! guesses on its own; an explicit tag always wins.

use std::sync::LazyLock;

use regex::Regex;
use tradutor_core::ContractType;

use crate::hunt::pattern;

static LEASE_TERMS: LazyLock<Regex> = LazyLock::new(|| pattern(r"locador|locatário|aluguel"));

static SERVICE_TERMS: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"contratante|contratada|serviços"));

/// Guess a category from keywords: lease vocabulary first, then services,
/// otherwise [`ContractType::Other`].
pub fn guess_contract_type(text: &str) -> ContractType {
    let guess = if LEASE_TERMS.is_match(text) {
        ContractType::Locacao
    } else if SERVICE_TERMS.is_match(text) {
        ContractType::Servicos
    } else {
        ContractType::Other
    };
    tracing::debug!(contract_type = %guess, "guessed contract type from keywords");
    guess
}
