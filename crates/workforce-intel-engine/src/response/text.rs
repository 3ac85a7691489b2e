use serde_json::Value;

use super::{
    envelope::AgentEnvelope,
    normalize::{NormalizedResponse, normalize},
    report::{StructuredReport, TextField},
};

/// Shown in chat when an agent call yields nothing displayable.
pub const CONVERSATION_PLACEHOLDER: &str = "Analysis complete. The data has been processed.";

/// Shown after a scenario simulation when the report carries no narrative.
pub const SIMULATION_PLACEHOLDER: &str = "Simulation complete. Review the updated metrics above.";

/// Picks the text to show as the answer to a conversational query.
///
/// In order: the executive summary, the board narrative, the first detailed
/// analysis (attrition, planning, compensation, org health), the report
/// object or array pretty-printed, plain text as received. When the payload held
/// neither, `response.result.text` then `response.message` are tried before
/// [`CONVERSATION_PLACEHOLDER`]. Empty strings count as missing throughout.
pub fn conversational_text(raw: &Value) -> String {
    match normalize(raw) {
        NormalizedResponse::StructuredReport(report) => report_text(&report),
        NormalizedResponse::PlainText(text) if !text.is_empty() => text,
        NormalizedResponse::PlainText(_) | NormalizedResponse::Unrecognized => {
            raw_text(raw).unwrap_or(CONVERSATION_PLACEHOLDER).to_string()
        }
    }
}

fn report_text(report: &StructuredReport) -> String {
    [TextField::ExecutiveSummary, TextField::BoardNarrative]
        .into_iter()
        .chain(TextField::DETAILED)
        .find_map(|field| report.text(field))
        .map(str::to_string)
        .unwrap_or_else(|| {
            log::debug!("report has no text fields, showing raw object");
            report.to_pretty_json()
        })
}

fn raw_text(raw: &Value) -> Option<&str> {
    let nested = raw.pointer("/response/result/text").and_then(Value::as_str);
    nested
        .or_else(|| AgentEnvelope::new(raw).message())
        .filter(|text| !text.is_empty())
}

/// Picks the text to show after a scenario simulation.
///
/// Unlike [`conversational_text`], a field counts as soon as it is present,
/// so an empty summary is shown as empty rather than skipped.
pub fn simulation_text(response: &NormalizedResponse) -> String {
    match response {
        NormalizedResponse::StructuredReport(report) => report
            .field(TextField::ExecutiveSummary)
            .or_else(|| report.field(TextField::PlanningAnalysis))
            .unwrap_or(SIMULATION_PLACEHOLDER)
            .to_string(),
        NormalizedResponse::PlainText(text) => text.clone(),
        NormalizedResponse::Unrecognized => SIMULATION_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn with_result(result: Value) -> Value {
        json!({ "success": true, "response": { "result": result } })
    }

    #[test]
    fn summary_comes_first() {
        let raw = with_result(json!({
            "board_narrative": "narrative",
            "executive_summary": "summary",
        }));
        assert_eq!(conversational_text(&raw), "summary");
    }

    #[test]
    fn empty_summary_falls_to_narrative() {
        let raw = with_result(json!({ "executive_summary": "", "board_narrative": "narrative" }));
        assert_eq!(conversational_text(&raw), "narrative");
    }

    #[test]
    fn first_detailed_field_in_fixed_order() {
        let raw = with_result(json!({
            "detailed_org_health_analysis": "org",
            "detailed_compensation_analysis": "comp",
            "detailed_planning_analysis": "",
        }));
        assert_eq!(conversational_text(&raw), "comp");
    }

    #[test]
    fn empty_object_serializes() {
        assert_eq!(conversational_text(&with_result(json!({}))), "{}");
    }

    #[test]
    fn unknown_object_serializes_pretty() {
        let raw = with_result(json!("{\"answer\": 42}"));
        assert_eq!(conversational_text(&raw), "{\n  \"answer\": 42\n}");
    }

    #[test]
    fn plain_text_is_verbatim() {
        let raw = with_result(json!("Headcount is **stable**."));
        assert_eq!(conversational_text(&raw), "Headcount is **stable**.");
    }

    #[test]
    fn message_used_when_result_missing() {
        let raw = json!({ "success": true, "response": { "message": "from message" } });
        assert_eq!(conversational_text(&raw), "from message");
    }

    #[test]
    fn empty_text_falls_back_to_message() {
        let raw = json!({ "response": { "result": "", "message": "from message" } });
        assert_eq!(conversational_text(&raw), "from message");
    }

    #[rstest]
    #[case(json!("null"))]
    #[case(json!("42"))]
    #[case(json!(false))]
    fn scalar_results_fall_back_to_message(#[case] result: Value) {
        let raw = json!({ "response": { "result": result, "message": "from message" } });
        assert_eq!(conversational_text(&raw), "from message");
    }

    #[rstest]
    #[case(json!([1, 2]))]
    #[case(json!("[1, 2]"))]
    fn array_results_serialize_pretty(#[case] result: Value) {
        assert_eq!(conversational_text(&with_result(result)), "[\n  1,\n  2\n]");
    }

    #[test]
    fn simulation_array_uses_placeholder() {
        let response = normalize(&with_result(json!([{ "executive_summary": "nested" }])));
        assert_eq!(simulation_text(&response), SIMULATION_PLACEHOLDER);
    }

    #[rstest]
    #[case(Value::Null)]
    #[case(json!({}))]
    #[case(json!({ "response": { "result": null, "message": "" } }))]
    #[case(json!({ "response": { "result": 3 } }))]
    fn placeholder_when_nothing_found(#[case] raw: Value) {
        assert_eq!(conversational_text(&raw), CONVERSATION_PLACEHOLDER);
    }

    #[test]
    fn simulation_prefers_summary_even_if_empty() {
        let report = normalize(&with_result(json!({
            "executive_summary": "",
            "detailed_planning_analysis": "planning",
        })));
        assert_eq!(simulation_text(&report), "");
    }

    #[test]
    fn simulation_uses_planning_when_no_summary() {
        let report = normalize(&with_result(json!({ "detailed_planning_analysis": "planning" })));
        assert_eq!(simulation_text(&report), "planning");
    }

    #[rstest]
    #[case(json!({}))]
    #[case(Value::Null)]
    fn simulation_placeholder(#[case] result: Value) {
        let response = normalize(&with_result(result));
        assert_eq!(simulation_text(&response), SIMULATION_PLACEHOLDER);
    }

    #[test]
    fn simulation_plain_text() {
        let response = NormalizedResponse::PlainText("headcount +85".into());
        assert_eq!(simulation_text(&response), "headcount +85");
    }
}
