//! The structured, plain-language risk report produced for one document.

use serde::{Deserialize, Serialize};

/// Placeholder for any fact the engine could not locate in the text.
pub const NOT_IDENTIFIED: &str = "Não identificado";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Danger,
    Warning,
    Info,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Suggestion,
    Negotiation,
    Addition,
}

/// Headline figures shown at the top of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Safety score, 0 to 100.
    pub score: u8,
    pub risk_level: RiskLevel,
    /// Currency amount or label; [`NOT_IDENTIFIED`] when absent.
    pub main_value: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryTerm {
    pub term: String,
    pub meaning: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub text: String,
}

/// One analysis run's output for the presentation and persistence layers.
///
/// Every field is always present. Alerts, terms and recommendations keep the
/// order in which the rule module produced them; that order is the display
/// priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: Summary,
    pub alerts: Vec<Alert>,
    pub terms: Vec<GlossaryTerm>,
    pub recommendations: Vec<Recommendation>,
}

impl Alert {
    pub fn new(kind: AlertKind, title: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            desc: desc.into(),
        }
    }
}

impl GlossaryTerm {
    pub fn new(term: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            meaning: meaning.into(),
        }
    }
}

impl Recommendation {
    pub fn new(kind: RecommendationKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> AnalysisReport {
        AnalysisReport {
            summary: Summary {
                score: 75,
                risk_level: RiskLevel::Low,
                main_value: "1.800,00".into(),
                duration: NOT_IDENTIFIED.into(),
            },
            alerts: vec![Alert::new(
                AlertKind::Warning,
                "Índice de Reajuste",
                "O índice encontrado foi: IGP-M.",
            )],
            terms: vec![GlossaryTerm::new("Foro de Eleição", "Cidade do processo.")],
            recommendations: vec![Recommendation::new(
                RecommendationKind::Addition,
                "Adicione uma cláusula de benfeitorias.",
            )],
        }
    }

    #[test]
    fn report_json_shape() {
        let value = serde_json::to_value(sample_report()).unwrap();
        assert_eq!(value["summary"]["score"], 75);
        assert_eq!(value["summary"]["risk_level"], "low");
        assert_eq!(value["summary"]["duration"], "Não identificado");
        assert_eq!(value["alerts"][0]["type"], "warning");
        assert_eq!(value["alerts"][0]["desc"], "O índice encontrado foi: IGP-M.");
        assert_eq!(value["terms"][0]["term"], "Foro de Eleição");
        assert_eq!(value["recommendations"][0]["type"], "addition");
    }

    #[test]
    fn report_json_roundtrip() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn parses_report_stored_by_the_web_handler() {
        let json = r#"{
            "summary": { "score": 60, "risk_level": "medium", "main_value": "Apólice", "duration": "Anual" },
            "alerts": [
                { "type": "success", "title": "Cobertura de Enchente", "desc": "Sem exclusão." }
            ],
            "terms": [],
            "recommendations": []
        }"#;
        let parsed: AnalysisReport = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.summary.risk_level, RiskLevel::Medium);
        assert_eq!(parsed.alerts[0].kind, AlertKind::Success);
        assert!(parsed.recommendations.is_empty());
    }
}
