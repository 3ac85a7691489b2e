use serde::Deserialize;
use serde_json::{Map, Value};

/// A risk flagged by the agent, e.g. `{ risk, severity, impact_area, recommended_action }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct StrategicRisk {
    pub risk: String,
    pub severity: String,
    pub impact_area: String,
    pub recommended_action: String,
}

/// An action recommended by the agent.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RecommendedAction {
    pub action: String,
    pub priority: String,
    pub expected_impact: String,
    pub timeline: String,
    pub estimated_cost_usd: Option<f64>,
}

/// The long-form markdown fields of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    ExecutiveSummary,
    BoardNarrative,
    AttritionAnalysis,
    PlanningAnalysis,
    CompensationAnalysis,
    OrgHealthAnalysis,
}

impl TextField {
    /// Detailed analysis fields in the order they are consulted for fallbacks.
    pub const DETAILED: [TextField; 4] = [
        TextField::AttritionAnalysis,
        TextField::PlanningAnalysis,
        TextField::CompensationAnalysis,
        TextField::OrgHealthAnalysis,
    ];

    /// The JSON key the agent uses for this field.
    pub fn key(self) -> &'static str {
        match self {
            TextField::ExecutiveSummary => "executive_summary",
            TextField::BoardNarrative => "board_narrative",
            TextField::AttritionAnalysis => "detailed_attrition_analysis",
            TextField::PlanningAnalysis => "detailed_planning_analysis",
            TextField::CompensationAnalysis => "detailed_compensation_analysis",
            TextField::OrgHealthAnalysis => "detailed_org_health_analysis",
        }
    }
}

/// Decoded structured output of an agent.
///
/// Every field is optional. A field whose JSON value has the wrong type is
/// treated as absent rather than failing the whole report. Empty strings and
/// zero scores are kept as given; [`StructuredReport::text`] is the accessor
/// that treats empty text as missing.
///
/// A JSON array is also accepted as a report; it has no fields but keeps its
/// contents in `raw`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructuredReport {
    pub executive_summary: Option<String>,
    pub board_narrative: Option<String>,
    pub detailed_attrition_analysis: Option<String>,
    pub detailed_planning_analysis: Option<String>,
    pub detailed_compensation_analysis: Option<String>,
    pub detailed_org_health_analysis: Option<String>,

    pub workforce_health_score: Option<f64>,
    pub attrition_risk_index: Option<f64>,
    pub pay_equity_score: Option<f64>,
    pub org_health_index: Option<f64>,
    pub hiring_pipeline_score: Option<f64>,
    pub workforce_cost_projection_usd: Option<f64>,

    pub top_strategic_risks: Option<Vec<StrategicRisk>>,
    pub top_recommended_actions: Option<Vec<RecommendedAction>>,

    /// The object or array the report was read from, unchanged.
    pub raw: Value,
}

impl StructuredReport {
    /// Reads the recognised keys out of a JSON object.
    pub fn from_object(raw: Map<String, Value>) -> Self {
        let text = |field: TextField| string_field(&raw, field.key());
        let number = |key: &str| raw.get(key).and_then(Value::as_f64);

        Self {
            executive_summary: text(TextField::ExecutiveSummary),
            board_narrative: text(TextField::BoardNarrative),
            detailed_attrition_analysis: text(TextField::AttritionAnalysis),
            detailed_planning_analysis: text(TextField::PlanningAnalysis),
            detailed_compensation_analysis: text(TextField::CompensationAnalysis),
            detailed_org_health_analysis: text(TextField::OrgHealthAnalysis),
            workforce_health_score: number("workforce_health_score"),
            attrition_risk_index: number("attrition_risk_index"),
            pay_equity_score: number("pay_equity_score"),
            org_health_index: number("org_health_index"),
            hiring_pipeline_score: number("hiring_pipeline_score"),
            workforce_cost_projection_usd: number("workforce_cost_projection_usd"),
            top_strategic_risks: records(&raw, "top_strategic_risks"),
            top_recommended_actions: records(&raw, "top_recommended_actions"),
            raw: Value::Object(raw),
        }
    }

    /// A report with no recognised fields, read from a JSON array.
    pub fn from_array(items: Vec<Value>) -> Self {
        Self {
            raw: Value::Array(items),
            ..Self::default()
        }
    }

    /// The stored value of a text field, present or not, empty or not.
    pub fn field(&self, field: TextField) -> Option<&str> {
        let value = match field {
            TextField::ExecutiveSummary => &self.executive_summary,
            TextField::BoardNarrative => &self.board_narrative,
            TextField::AttritionAnalysis => &self.detailed_attrition_analysis,
            TextField::PlanningAnalysis => &self.detailed_planning_analysis,
            TextField::CompensationAnalysis => &self.detailed_compensation_analysis,
            TextField::OrgHealthAnalysis => &self.detailed_org_health_analysis,
        };
        value.as_deref()
    }

    /// A text field, with empty text treated as not yet available.
    pub fn text(&self, field: TextField) -> Option<&str> {
        self.field(field).filter(|text| !text.is_empty())
    }

    /// The source value pretty-printed with two-space indentation.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_else(|_| self.raw.to_string())
    }
}

fn string_field(raw: &Map<String, Value>, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Decodes an array of records, skipping elements that are not records.
fn records<T>(raw: &Map<String, Value>, key: &str) -> Option<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
{
    let items = raw.get(key)?.as_array()?;
    let decoded = items
        .iter()
        .filter_map(|item| match T::deserialize(item) {
            Ok(record) => Some(record),
            Err(err) => {
                log::debug!("skipping malformed {key} entry: {err}");
                None
            }
        })
        .collect();
    Some(decoded)
}
