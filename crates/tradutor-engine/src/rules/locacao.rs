//! Lease agreements.

use std::sync::LazyLock;

use regex::Regex;
use tradutor_core::{
    Alert, AlertKind, AnalysisReport, GlossaryTerm, NOT_IDENTIFIED, Recommendation,
    RecommendationKind, RiskLevel, Summary,
};

use super::Extraction;
use crate::hunt::{AMOUNT, hunt, pattern};
use crate::tokens::Field;

static VALOR_ALUGUEL: LazyLock<Regex> =
    LazyLock::new(|| pattern(&format!(r"aluguel.*?R\$\s*({AMOUNT})")));

static PRAZO_VIGENCIA: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"prazo\s+de\s+vigência\s+de\s*([\w\s()]+?\s*\b(?:meses|anos))\b"));

static INDICE_REAJUSTE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"reajust\w+\s+pelo\s+índice\s+(?:d[oa]\s+)?([\w-]+)"));

static MULTA: LazyLock<Regex> = LazyLock::new(|| {
    pattern(&format!(
        r"multa\s+de\s+(\d+(?:[.,]\d+)?\s*%|R\$\s*{AMOUNT}|(?:\d+|uma?|dois|duas|três|quatro|cinco|seis)\s+alugu(?:el|éis|eis)|[\w\s]+?meses?\s+de\s+aluguel)"
    ))
});

static LOCADOR: LazyLock<Regex> = LazyLock::new(|| pattern(r"LOCADORA?:\s*([\p{L}\s]+),"));

static LOCATARIO: LazyLock<Regex> = LazyLock::new(|| pattern(r"LOCATÁRI[OA]:\s*([\p{L}\s]+),"));

pub(crate) fn analyze(text: &str) -> Extraction {
    let main_value = hunt(text, &VALOR_ALUGUEL, NOT_IDENTIFIED);
    let duration = hunt(text, &PRAZO_VIGENCIA, NOT_IDENTIFIED);
    let indice = hunt(text, &INDICE_REAJUSTE, NOT_IDENTIFIED);
    let multa = hunt(text, &MULTA, NOT_IDENTIFIED);
    let locador = hunt(text, &LOCADOR, NOT_IDENTIFIED);
    let locatario = hunt(text, &LOCATARIO, NOT_IDENTIFIED);

    let mut recommendations = Vec::new();
    if indice.to_uppercase().contains("IGP-M") {
        recommendations.push(Recommendation::new(
            RecommendationKind::Suggestion,
            "O índice de reajuste é o IGP-M. Considere negociar a troca pelo IPCA, que historicamente tem variações mais suaves e previsíveis.",
        ));
    }
    if multa.contains('3') || multa.to_lowercase().contains("três") {
        recommendations.push(Recommendation::new(
            RecommendationKind::Negotiation,
            "A multa de 3 aluguéis é comum, mas pode ser negociada, especialmente se o prazo de desocupação for longo. Verifique a proporcionalidade da cobrança.",
        ));
    }
    if !text.to_lowercase().contains("benfeitorias") {
        recommendations.push(Recommendation::new(
            RecommendationKind::Addition,
            "O contrato não menciona benfeitorias. Recomenda-se adicionar uma cláusula que defina como reformas e melhorias serão tratadas.",
        ));
    }

    let report = AnalysisReport {
        summary: Summary {
            score: 75,
            risk_level: RiskLevel::Low,
            main_value: main_value.clone(),
            duration: duration.clone(),
        },
        alerts: vec![
            Alert::new(
                AlertKind::Warning,
                "Índice de Reajuste",
                format!("O índice encontrado foi: {indice}."),
            ),
            Alert::new(
                AlertKind::Danger,
                "Multa Contratual",
                format!("A multa por rescisão identificada foi de: {multa}."),
            ),
        ],
        terms: vec![
            GlossaryTerm::new(
                "Foro de Eleição",
                "Cidade onde ocorrerá o processo judicial caso haja briga.",
            ),
            GlossaryTerm::new("Locador", format!("A parte que aluga o imóvel: {locador}")),
            GlossaryTerm::new(
                "Locatário",
                format!("A parte que irá ocupar o imóvel: {locatario}"),
            ),
        ],
        recommendations,
    };

    Extraction {
        report,
        fields: vec![
            Field::new("main_value", main_value),
            Field::new("prazo_vigencia", duration),
            Field::new("indice_reajuste", indice),
            Field::new("multa_contratual", multa),
            Field::new("locador", locador),
            Field::new("locatario", locatario),
        ],
    }
}
