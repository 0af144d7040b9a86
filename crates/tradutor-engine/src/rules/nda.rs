//! Confidentiality agreements.

use std::sync::LazyLock;

use regex::Regex;
use tradutor_core::{Alert, AlertKind, AnalysisReport, GlossaryTerm, NOT_IDENTIFIED, RiskLevel, Summary};

use super::Extraction;
use crate::hunt::{AMOUNT, hunt, pattern};
use crate::tokens::Field;

static PRAZO_SIGILO: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"período\s+de\s+sigilo\s+de\s*([\w\s()]+?\b(?:anos?|meses|dias))\b")
});

static MULTA_QUEBRA: LazyLock<Regex> = LazyLock::new(|| {
    pattern(&format!(
        r"multa\s+por\s+quebra\s+de\s+sigilo.*?R\$\s*({AMOUNT})"
    ))
});

pub(crate) fn analyze(text: &str) -> Extraction {
    let prazo = hunt(text, &PRAZO_SIGILO, NOT_IDENTIFIED);
    let multa = hunt(text, &MULTA_QUEBRA, NOT_IDENTIFIED);

    let report = AnalysisReport {
        summary: Summary {
            score: 70,
            risk_level: RiskLevel::Low,
            main_value: "Confidencialidade".into(),
            duration: prazo.clone(),
        },
        alerts: vec![
            Alert::new(
                AlertKind::Info,
                "Duração do Sigilo",
                format!("O dever de confidencialidade permanece por: {prazo}."),
            ),
            Alert::new(
                AlertKind::Danger,
                "Multa por Quebra",
                format!("A multa por quebra de sigilo identificada é de: {multa}."),
            ),
        ],
        terms: vec![GlossaryTerm::new(
            "Informação Confidencial",
            "Qualquer dado, técnico ou comercial, que não seja de conhecimento público e que seja compartilhado entre as partes.",
        )],
        recommendations: Vec::new(),
    };

    Extraction {
        report,
        fields: vec![
            Field::new("prazo_sigilo", prazo),
            Field::new("multa_quebra_sigilo", multa),
        ],
    }
}
