//! The pattern-hunting primitive: every extracted value comes from here.
//!
//! A hunt runs one anchored regular expression over the whole document and
//! returns the first match. Patterns are compiled once, case-insensitive.
//! The `regex` crate matches in linear time, so adversarial input cannot
//! trigger catastrophic backtracking.

use regex::Regex;

/// Currency amount: `1.800,00`, `1800.00`, `2500`, `12.000`.
///
/// Separators must be followed by a digit, so a trailing sentence period or
/// comma is never part of the amount.
pub(crate) const AMOUNT: &str = r"\d+(?:[.,]\d+)*";

/// Compile a case-insensitive pattern.
///
/// Panics on an invalid pattern. Patterns are compile-time constants, so a
/// failure here is a programming defect, not a content problem.
pub(crate) fn pattern(source: &str) -> Regex {
    Regex::new(&format!("(?i){source}"))
        .unwrap_or_else(|e| panic!("invalid hunting pattern {source:?}: {e}"))
}

/// Return the first capture group of the first match, the whole match when
/// the group is absent or empty, or `default` when nothing matches.
pub fn hunt(text: &str, pattern: &Regex, default: &str) -> String {
    let Some(caps) = pattern.captures(text) else {
        tracing::trace!(pattern = pattern.as_str(), "no match");
        return default.to_string();
    };
    caps.get(1)
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(&caps[0])
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradutor_core::NOT_IDENTIFIED;

    #[test]
    fn returns_first_group() {
        let re = pattern(r"aluguel.*?R\$\s*([\d.,]+)");
        assert_eq!(hunt("aluguel de R$ 900 e aluguel de R$ 1.000", &re, NOT_IDENTIFIED), "900");
    }

    #[test]
    fn falls_back_to_whole_match_without_group() {
        let re = pattern(r"benfeitorias\s+\w+");
        assert_eq!(hunt("as benfeitorias úteis", &re, NOT_IDENTIFIED), "benfeitorias úteis");
    }

    #[test]
    fn empty_group_yields_whole_match() {
        let re = pattern(r"HABILITAÇÃO(\s*)-");
        assert_eq!(hunt("habilitação-", &re, NOT_IDENTIFIED), "habilitação-");
    }

    #[test]
    fn unmatched_optional_group_yields_whole_match() {
        let re = pattern(r"multa(?:\s+de\s+(\d+))?");
        assert_eq!(hunt("há multa prevista", &re, NOT_IDENTIFIED), "multa");
    }

    #[test]
    fn missing_pattern_returns_default() {
        let re = pattern(r"CET\s+de\s+(\S+)");
        assert_eq!(hunt("", &re, NOT_IDENTIFIED), NOT_IDENTIFIED);
        assert_eq!(hunt("sem custo", &re, "N/A"), "N/A");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let re = pattern(r"índice\s+([\w-]+)");
        assert_eq!(hunt("ÍNDICE IPCA", &re, NOT_IDENTIFIED), "IPCA");
    }

    #[test]
    fn amount_stops_before_punctuation() {
        let re = pattern(&format!(r"R\$\s*({AMOUNT})"));
        assert_eq!(hunt("R$ 1.800,00, pagos", &re, NOT_IDENTIFIED), "1.800,00");
        assert_eq!(hunt("R$ 2500.", &re, NOT_IDENTIFIED), "2500");
        assert_eq!(hunt("R$ 12.000.", &re, NOT_IDENTIFIED), "12.000");
    }

    #[test]
    fn amount_keeps_dot_decimals_and_odd_groups() {
        let re = pattern(&format!(r"R\$\s*({AMOUNT})"));
        assert_eq!(hunt("R$ 1800.00 mensais", &re, NOT_IDENTIFIED), "1800.00");
        assert_eq!(hunt("R$ 1.800,5, pagos", &re, NOT_IDENTIFIED), "1.800,5");
        assert_eq!(hunt("R$ 15.00.000,00.", &re, NOT_IDENTIFIED), "15.00.000,00");
    }

    #[test]
    fn long_repetitive_input_completes() {
        let re = pattern(r"multa\s+de\s+([\w\s]+?meses?\s+de\s+aluguel)");
        let text = format!("multa de {}", "a ".repeat(100_000));
        assert_eq!(hunt(&text, &re, NOT_IDENTIFIED), NOT_IDENTIFIED);
    }
}
