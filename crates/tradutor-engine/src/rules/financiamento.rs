//! Financing agreements. The one fact that matters is the CET.

use std::sync::LazyLock;

use regex::Regex;
use tradutor_core::{
    Alert, AlertKind, AnalysisReport, NOT_IDENTIFIED, Recommendation, RecommendationKind,
    RiskLevel, Summary,
};

use super::Extraction;
use crate::hunt::{hunt, pattern};
use crate::tokens::Field;

static CET_ANUAL: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"Custo\s+Efetivo\s+Total\s*\(CET\)\s+de\s+(\d+(?:[.,]\d+)?\s*%)\s+ao\s+ano")
});

pub(crate) fn analyze(text: &str) -> Extraction {
    let cet = hunt(text, &CET_ANUAL, NOT_IDENTIFIED);

    let mut alerts = Vec::new();
    let mut recommendations = Vec::new();
    if cet != NOT_IDENTIFIED {
        alerts.push(Alert::new(
            AlertKind::Info,
            "Custo Efetivo Total (CET)",
            format!(
                "O custo real do seu financiamento, incluindo juros, taxas e encargos, é de {cet} ao ano."
            ),
        ));
        recommendations.push(Recommendation::new(
            RecommendationKind::Suggestion,
            "O CET é o número mais importante para comparar propostas de financiamento. Use este valor, e não apenas a taxa de juros nominal, para tomar sua decisão.",
        ));
    }

    let report = AnalysisReport {
        summary: Summary {
            score: 70,
            risk_level: RiskLevel::Medium,
            main_value: cet.clone(),
            duration: "N/A".into(),
        },
        alerts,
        terms: Vec::new(),
        recommendations,
    };

    Extraction {
        report,
        fields: vec![Field::new("cet_anual", cet)],
    }
}
