//! Generic template for any contract outside the known categories.

use std::sync::LazyLock;

use regex::Regex;
use tradutor_core::{Alert, AlertKind, AnalysisReport, NOT_IDENTIFIED, RiskLevel, Summary};

use super::Extraction;
use crate::hunt::{AMOUNT, hunt, pattern};
use crate::tokens::Field;

static VALOR_TOTAL: LazyLock<Regex> =
    LazyLock::new(|| pattern(&format!(r"valor\s+total\s+de\s+R\$\s*({AMOUNT})")));

static PRAZO_EXECUCAO: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"prazo\s+de\s+execução\s+de\s*(\d+\s+\w+)"));

pub(crate) fn analyze(text: &str) -> Extraction {
    let valor = hunt(text, &VALOR_TOTAL, NOT_IDENTIFIED);
    let prazo = hunt(text, &PRAZO_EXECUCAO, NOT_IDENTIFIED);

    let report = AnalysisReport {
        summary: Summary {
            score: 80,
            risk_level: RiskLevel::Low,
            main_value: valor.clone(),
            duration: prazo.clone(),
        },
        alerts: vec![Alert::new(
            AlertKind::Info,
            "Análise Genérica",
            "Este é um modelo de análise para outros tipos de contrato.",
        )],
        terms: Vec::new(),
        recommendations: Vec::new(),
    };

    Extraction {
        report,
        fields: vec![
            Field::new("main_value", valor),
            Field::new("prazo_execucao", prazo),
        ],
    }
}
