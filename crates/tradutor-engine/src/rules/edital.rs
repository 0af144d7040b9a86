//! Public-tender notices.

use std::sync::LazyLock;

use regex::Regex;
use tradutor_core::{
    Alert, AlertKind, AnalysisReport, GlossaryTerm, NOT_IDENTIFIED, Recommendation,
    RecommendationKind, RiskLevel, Summary,
};

use super::Extraction;
use crate::hunt::{AMOUNT, hunt, pattern};
use crate::tokens::Field;

static PRAZO_ENTREGA: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"entrega\s+das?\s+propostas\s+até\s+o\s+dia\s+(\d{1,2}/\d{1,2}(?:/\d{2,4})?)")
});

static GARANTIA: LazyLock<Regex> = LazyLock::new(|| {
    pattern(&format!(
        r"garantia\s+d[ae]\s+proposta\s+no\s+valor\s+de\s+R\$\s*({AMOUNT})"
    ))
});

/// The qualification-documents section, up to the next roman-numeral
/// heading or blank line.
static DOCUMENTOS: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"DOCUMENTOS\s+DE\s+HABILITAÇÃO((?s:.)*?)(?:\n[IVX]+\s*-|\n\n)")
});

pub(crate) fn analyze(text: &str) -> Extraction {
    let prazo = hunt(text, &PRAZO_ENTREGA, NOT_IDENTIFIED);
    let garantia = hunt(text, &GARANTIA, NOT_IDENTIFIED);
    let documentos = hunt(text, &DOCUMENTOS, NOT_IDENTIFIED).trim().to_string();

    let report = AnalysisReport {
        summary: Summary {
            score: 85,
            risk_level: RiskLevel::Low,
            main_value: "Edital".into(),
            duration: "N/A".into(),
        },
        alerts: vec![
            Alert::new(
                AlertKind::Warning,
                "Prazo de Entrega",
                format!("A data limite para entrega das propostas parece ser: {prazo}."),
            ),
            Alert::new(
                AlertKind::Info,
                "Garantia da Proposta",
                format!("O valor da garantia exigida é de: {garantia}."),
            ),
        ],
        terms: vec![GlossaryTerm::new(
            "Habilitação Jurídica",
            "Comprovação de que sua empresa existe legalmente e está apta a contratar com o poder público.",
        )],
        recommendations: vec![Recommendation::new(
            RecommendationKind::Suggestion,
            "Crie um checklist com todos os documentos de habilitação e revise-os cuidadosamente para evitar desclassificação.",
        )],
    };

    Extraction {
        report,
        fields: vec![
            Field::new("prazo_entrega", prazo),
            Field::new("garantia_proposta", garantia),
            Field::new("documentos_habilitacao", documentos),
        ],
    }
}
