//! Human-readable renderings of an analysis report.
//!
//! The card groups the report into sections for terminal reading. The chat
//! message reproduces the bot's reply: headline figures, every alert, only
//! the first recommendation, and the disclaimer.

use std::io::{self, Write};

use tradutor_core::{AlertKind, AnalysisReport, ContractType, RecommendationKind, RiskLevel};

const LABEL_WIDTH: usize = 26;

const DISCLAIMER: &str = "_Esta é uma análise automática e não substitui um advogado._";

// ── Card ──

/// Write a report as a vertical card grouped by section.
pub fn write_card(
    out: &mut impl Write,
    contract_type: ContractType,
    report: &AnalysisReport,
) -> io::Result<()> {
    let summary = &report.summary;

    writeln!(out, "=== {} ===", contract_type)?;
    writeln!(
        out,
        "score {}/100, {} risk",
        summary.score,
        risk_label(summary.risk_level)
    )?;
    writeln!(out)?;

    writeln!(out, "Summary")?;
    writeln!(out, "  {:<LABEL_WIDTH$} {}", "main_value", summary.main_value)?;
    writeln!(out, "  {:<LABEL_WIDTH$} {}", "duration", summary.duration)?;
    writeln!(out)?;

    if !report.alerts.is_empty() {
        writeln!(out, "Alerts ({})", report.alerts.len())?;
        for alert in &report.alerts {
            writeln!(
                out,
                "  {:<9} {}: {}",
                alert_tag(alert.kind),
                alert.title,
                alert.desc
            )?;
        }
        writeln!(out)?;
    }

    if !report.terms.is_empty() {
        writeln!(out, "Glossary")?;
        for term in &report.terms {
            writeln!(out, "  {:<LABEL_WIDTH$} {}", term.term, term.meaning)?;
        }
        writeln!(out)?;
    }

    if !report.recommendations.is_empty() {
        writeln!(out, "Recommendations")?;
        for rec in &report.recommendations {
            writeln!(out, "  {:<13} {}", recommendation_tag(rec.kind), rec.text)?;
        }
        writeln!(out)?;
    }

    Ok(())
}

// ── Chat ──

/// The chat bot's Markdown reply for a finished analysis.
pub fn chat_message(contract_type: ContractType, report: &AnalysisReport) -> String {
    let summary = &report.summary;
    let mut out = format!(
        "🔎 *Análise de Contrato: {}*\n\n",
        contract_type.as_str().to_uppercase()
    );
    out.push_str(&format!("💰 *Valor:* {}\n", summary.main_value));
    out.push_str(&format!("📅 *Duração:* {}\n", summary.duration));
    out.push_str(&format!("🛡️ *Nota de Segurança:* {}/100\n\n", summary.score));

    if !report.alerts.is_empty() {
        out.push_str("⚠️ *Pontos de Atenção:*\n");
        for alert in &report.alerts {
            out.push_str(&format!("- *{}*: {}\n", alert.title, alert.desc));
        }
        out.push('\n');
    }

    if let Some(first) = report.recommendations.first() {
        out.push_str(&format!("💡 *Recomendação da IA:*\n{}\n", first.text));
    }

    out.push('\n');
    out.push_str(DISCLAIMER);
    out
}

// ── Labels ──

fn risk_label(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "low",
        RiskLevel::Medium => "medium",
        RiskLevel::High => "high",
    }
}

fn alert_tag(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Danger => "[danger]",
        AlertKind::Warning => "[warning]",
        AlertKind::Info => "[info]",
        AlertKind::Success => "[ok]",
    }
}

fn recommendation_tag(kind: RecommendationKind) -> &'static str {
    match kind {
        RecommendationKind::Suggestion => "suggestion",
        RecommendationKind::Negotiation => "negotiation",
        RecommendationKind::Addition => "addition",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEASE: &str = "O LOCADOR: MARIA SILVA, aluguel mensal de R$ 1.800,00, reajuste pelo índice IGP-M, multa de 3 aluguéis.";

    fn card(contract_type: ContractType, report: &AnalysisReport) -> String {
        let mut buf = Vec::new();
        write_card(&mut buf, contract_type, report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn card_has_every_section() {
        let report = tradutor_engine::analyze(LEASE, ContractType::Locacao).report;
        let card = card(ContractType::Locacao, &report);
        assert!(card.starts_with("=== locacao ===\nscore 75/100, low risk\n"));
        assert!(card.contains("Alerts (2)"));
        assert!(card.contains("[warning] Índice de Reajuste: O índice encontrado foi: IGP-M."));
        assert!(card.contains("Glossary"));
        assert!(card.contains("Recommendations"));
        assert!(card.ends_with("\n\n"));
    }

    #[test]
    fn card_omits_empty_sections() {
        let report = tradutor_engine::analyze("", ContractType::Financiamento).report;
        let card = card(ContractType::Financiamento, &report);
        assert!(!card.contains("Alerts"));
        assert!(!card.contains("Glossary"));
        assert!(!card.contains("Recommendations"));
    }

    #[test]
    fn card_write_failure_is_reported() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let report = tradutor_engine::analyze(LEASE, ContractType::Locacao).report;
        let err = write_card(&mut Closed, ContractType::Locacao, &report).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn chat_shows_only_first_recommendation() {
        let report = tradutor_engine::analyze(LEASE, ContractType::Locacao).report;
        assert_eq!(report.recommendations.len(), 3);
        let msg = chat_message(ContractType::Locacao, &report);
        assert!(msg.starts_with("🔎 *Análise de Contrato: LOCACAO*\n\n💰 *Valor:* 1.800,00\n"));
        assert!(msg.contains("🛡️ *Nota de Segurança:* 75/100"));
        assert!(msg.contains("- *Multa Contratual*: "));
        assert!(msg.contains(&report.recommendations[0].text));
        assert!(!msg.contains(&report.recommendations[1].text));
        assert!(msg.ends_with(DISCLAIMER));
    }

    #[test]
    fn chat_without_recommendations() {
        let report = tradutor_engine::analyze("", ContractType::Nda).report;
        let msg = chat_message(ContractType::Nda, &report);
        assert!(!msg.contains("Recomendação"));
        assert!(msg.contains("⚠️ *Pontos de Atenção:*"));
    }
}
