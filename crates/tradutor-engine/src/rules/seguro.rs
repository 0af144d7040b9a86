//! Insurance policies.

use std::sync::LazyLock;

use regex::Regex;
use tradutor_core::{
    Alert, AlertKind, AnalysisReport, GlossaryTerm, NOT_IDENTIFIED, Recommendation,
    RecommendationKind, RiskLevel, Summary,
};

use super::Extraction;
use crate::hunt::{hunt, pattern};
use crate::tokens::Field;

/// An exclusion heading followed, anywhere later, by a flood hazard.
static EXCLUSAO_ENCHENTE: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"((?:riscos\s+excluídos|não\s+há\s+cobertura)(?s:.)*?(?:enchente|inundação|alagamento))")
});

pub(crate) fn analyze(text: &str) -> Extraction {
    let exclusao = hunt(text, &EXCLUSAO_ENCHENTE, NOT_IDENTIFIED);

    let mut alerts = Vec::new();
    let mut recommendations = Vec::new();
    if exclusao != NOT_IDENTIFIED {
        alerts.push(Alert::new(
            AlertKind::Danger,
            "Exclusão de Cobertura",
            "Atenção: Sua apólice parece excluir explicitamente a cobertura para danos causados por enchentes, inundações ou alagamentos.",
        ));
        recommendations.push(Recommendation::new(
            RecommendationKind::Suggestion,
            "Se você reside em uma área de risco, é altamente recomendável contatar sua seguradora para negociar a inclusão de uma cobertura adicional para enchentes.",
        ));
    } else {
        alerts.push(Alert::new(
            AlertKind::Success,
            "Cobertura de Enchente",
            "Não foi encontrada uma cláusula de exclusão explícita para enchentes. Verifique as condições gerais para confirmar.",
        ));
    }

    let report = AnalysisReport {
        summary: Summary {
            score: 60,
            risk_level: RiskLevel::Medium,
            main_value: "Apólice".into(),
            duration: "Anual".into(),
        },
        alerts,
        terms: vec![GlossaryTerm::new(
            "Franquia",
            "Valor que você precisa pagar do próprio bolso em caso de sinistro antes que o seguro cubra o restante.",
        )],
        recommendations,
    };

    Extraction {
        report,
        fields: vec![Field::new("exclusao_enchente", exclusao)],
    }
}
