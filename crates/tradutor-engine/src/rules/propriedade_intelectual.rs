//! Intellectual-property and services agreements share one ruleset: who
//! ends up owning what the contractor produces.

use std::sync::LazyLock;

use regex::Regex;
use tradutor_core::{
    Alert, AlertKind, AnalysisReport, NOT_IDENTIFIED, Recommendation, RecommendationKind,
    RiskLevel, Summary,
};

use super::Extraction;
use crate::hunt::{hunt, pattern};
use crate::tokens::Field;

static TITULAR: LazyLock<Regex> = LazyLock::new(|| {
    pattern(
        r"propriedade\s+intelectual(?s:.)*?pertencerá\s+(?:exclusivamente\s+)?(?:ao|à|a)\s+(CONTRATANTE|CONTRATADA)",
    )
});

pub(crate) fn analyze(text: &str) -> Extraction {
    let titular = hunt(text, &TITULAR, NOT_IDENTIFIED);

    let mut alerts = Vec::new();
    let mut recommendations = Vec::new();
    match titular.to_uppercase().as_str() {
        "CONTRATANTE" => {
            alerts.push(Alert::new(
                AlertKind::Danger,
                "Propriedade Intelectual",
                "Atenção: O contrato estipula que toda a propriedade intelectual gerada pertencerá ao CONTRATANTE.",
            ));
            recommendations.push(Recommendation::new(
                RecommendationKind::Negotiation,
                "Se você está desenvolvendo uma tecnologia reutilizável, considere negociar uma licença de uso para o contratante em vez da transferência total da propriedade.",
            ));
        }
        "CONTRATADA" => alerts.push(Alert::new(
            AlertKind::Success,
            "Propriedade Intelectual",
            "O contrato estipula que a propriedade intelectual gerada pertencerá a você (CONTRATADA).",
        )),
        _ => alerts.push(Alert::new(
            AlertKind::Warning,
            "Propriedade Intelectual",
            "A cláusula de propriedade intelectual não foi claramente identificada ou é ambígua.",
        )),
    }

    let report = AnalysisReport {
        summary: Summary {
            score: 65,
            risk_level: RiskLevel::Medium,
            main_value: "Propriedade Intelectual".into(),
            duration: "N/A".into(),
        },
        alerts,
        terms: Vec::new(),
        recommendations,
    };

    Extraction {
        report,
        fields: vec![Field::new("titular_propriedade_intelectual", titular)],
    }
}
