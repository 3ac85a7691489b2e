use std::path::PathBuf;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListState,
};
use serde_json::Value;
use workforce_intel_engine::{
    AgentEnvelope, NormalizedResponse, StructuredReport, TextField, conversational_text, io,
    normalize, render, sample, simulation_text,
};

use crate::view;

/// Where the agent call result comes from.
#[derive(Debug, Clone)]
pub enum Source {
    Sample,
    File(PathBuf),
}

impl Source {
    pub fn label(&self) -> String {
        match self {
            Source::Sample => "sample data".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }

    pub fn read(&self) -> Result<Value, io::LoadError> {
        match self {
            Source::Sample => Ok(sample::agent_result()),
            Source::File(path) => io::read_agent_result(path),
        }
    }
}

/// The dashboard sections, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    BoardNarrative,
    Attrition,
    Planning,
    Compensation,
    OrgHealth,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Dashboard,
        Section::BoardNarrative,
        Section::Attrition,
        Section::Planning,
        Section::Compensation,
        Section::OrgHealth,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::BoardNarrative => "Board Narrative",
            Section::Attrition => "Attrition",
            Section::Planning => "Workforce Planning",
            Section::Compensation => "Compensation",
            Section::OrgHealth => "Org Health",
        }
    }

    /// The report text shown in this section.
    pub fn field(self) -> TextField {
        match self {
            Section::Dashboard => TextField::ExecutiveSummary,
            Section::BoardNarrative => TextField::BoardNarrative,
            Section::Attrition => TextField::AttritionAnalysis,
            Section::Planning => TextField::PlanningAnalysis,
            Section::Compensation => TextField::CompensationAnalysis,
            Section::OrgHealth => TextField::OrgHealthAnalysis,
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            Section::Dashboard => "No executive summary available",
            Section::BoardNarrative => "No board narrative available",
            Section::Attrition => "No attrition data available",
            Section::Planning => "No workforce planning data available",
            Section::Compensation => "No compensation data available",
            Section::OrgHealth => "No organizational health data available",
        }
    }
}

/// What the loaded agent result could be turned into.
#[derive(Debug)]
pub enum Content {
    Report(StructuredReport),
    /// A text reply with no structured fields.
    Text(String),
    /// Loading failed; shown in place of every section.
    Failed(String),
}

pub struct App {
    pub source_label: String,
    pub content: Content,
    /// Failure reported by the agent call itself.
    pub notice: Option<String>,
    /// Download link for a generated report file.
    pub artifact_url: Option<String>,
    pub section_state: ListState,
    pub scroll: u16,
}

impl App {
    pub fn load(source: &Source) -> Self {
        let label = source.label();
        match source.read() {
            Ok(raw) => Self::from_agent_result(label, &raw),
            Err(e) => {
                log::warn!("failed to load {label}: {e}");
                Self::with_content(label, Content::Failed(e.to_string()), None, None)
            }
        }
    }

    pub fn from_agent_result(source_label: String, raw: &Value) -> Self {
        let envelope = AgentEnvelope::new(raw);
        let notice = (!envelope.success())
            .then(|| envelope.error().unwrap_or("Failed to get response.").to_string());

        let artifact_url = envelope.artifact_url().map(str::to_string);

        let content = match normalize(raw) {
            NormalizedResponse::StructuredReport(report) => Content::Report(report),
            NormalizedResponse::PlainText(text) => Content::Text(text),
            NormalizedResponse::Unrecognized => Content::Text(conversational_text(raw)),
        };

        Self::with_content(source_label, content, notice, artifact_url)
    }

    fn with_content(
        source_label: String,
        content: Content,
        notice: Option<String>,
        artifact_url: Option<String>,
    ) -> Self {
        let mut section_state = ListState::default();
        section_state.select(Some(0));
        Self {
            source_label,
            content,
            notice,
            artifact_url,
            section_state,
            scroll: 0,
        }
    }

    pub fn section(&self) -> Section {
        let index = self.section_state.selected().unwrap_or(0);
        Section::ALL[index % Section::ALL.len()]
    }

    pub fn next_section(&mut self) {
        let i = match self.section_state.selected() {
            Some(i) => (i + 1) % Section::ALL.len(),
            None => 0,
        };
        self.select(i);
    }

    pub fn previous_section(&mut self) {
        let i = match self.section_state.selected() {
            Some(0) | None => Section::ALL.len() - 1,
            Some(i) => i - 1,
        };
        self.select(i);
    }

    fn select(&mut self, index: usize) {
        self.section_state.select(Some(index));
        self.scroll = 0;
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// Lines for the content panel of the selected section.
    pub fn section_lines(&self) -> Vec<Line<'static>> {
        let section = self.section();
        let mut lines = vec![];

        if let Some(notice) = &self.notice {
            lines.push(Line::from(Span::styled(
                format!("⚠ {notice}"),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::default());
        }

        match &self.content {
            Content::Failed(message) => {
                lines.push(Line::from(Span::styled(
                    "Something went wrong",
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(message.clone()));
            }
            Content::Text(text) if section == Section::Dashboard => {
                lines.extend(view::block_lines(&render(Some(text.as_str()))));
            }
            Content::Text(_) => lines.push(empty_state(section)),
            Content::Report(report) => {
                if section == Section::Dashboard {
                    lines.extend(view::dashboard_lines(report));
                    if let Some(url) = &self.artifact_url {
                        lines.push(Line::from(format!("Report: {url}")));
                    }
                    lines.push(Line::default());
                }
                match report.text(section.field()) {
                    Some(text) => lines.extend(view::block_lines(&render(Some(text)))),
                    None => lines.push(empty_state(section)),
                }
            }
        }

        lines
    }
}

/// The conversational answer as plain lines, followed by the report link if any.
pub fn answer_lines(raw: &Value) -> Vec<String> {
    let mut lines = view::plain_lines(&render(Some(conversational_text(raw).as_str())));
    if let Some(url) = AgentEnvelope::new(raw).artifact_url() {
        lines.push(String::new());
        lines.push(format!("Report: {url}"));
    }
    lines
}

/// The simulation outcome as plain lines, or the failure the call reported.
pub fn simulation_lines(raw: &Value) -> Result<Vec<String>, String> {
    let envelope = AgentEnvelope::new(raw);
    if !envelope.success() {
        return Err(envelope
            .error()
            .unwrap_or("Simulation failed. Please try again.")
            .to_string());
    }
    let text = simulation_text(&normalize(raw));
    Ok(view::plain_lines(&render(Some(text.as_str()))))
}

fn empty_state(section: Section) -> Line<'static> {
    Line::from(Span::styled(
        section.empty_message(),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text_of(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn sample_shows_every_section() {
        let mut app = App::load(&Source::Sample);
        assert!(app.notice.is_none());
        for section in Section::ALL {
            assert_eq!(app.section(), section);
            let text = text_of(&app.section_lines());
            assert!(!text.contains(&section.empty_message().to_string()));
            app.next_section();
        }
        assert_eq!(app.section(), Section::Dashboard);
    }

    #[test]
    fn missing_field_shows_empty_state() {
        let raw = json!({
            "success": true,
            "response": { "result": { "executive_summary": "hi" } },
        });
        let mut app = App::from_agent_result("test".into(), &raw);
        app.next_section();
        app.next_section();
        assert_eq!(app.section(), Section::Attrition);
        assert_eq!(
            text_of(&app.section_lines()),
            vec!["No attrition data available"]
        );
    }

    #[test]
    fn failed_call_shows_notice() {
        let raw = json!({ "success": false, "error": "agent timed out" });
        let app = App::from_agent_result("test".into(), &raw);
        let text = text_of(&app.section_lines());
        assert_eq!(text[0], "⚠ agent timed out");
        assert_eq!(
            text.last().unwrap(),
            "Analysis complete. The data has been processed."
        );
    }

    #[test]
    fn unreadable_source_falls_back() {
        let app = App::load(&Source::File(PathBuf::from("/nonexistent/result.json")));
        let text = text_of(&app.section_lines());
        assert_eq!(text[0], "Something went wrong");
        assert!(text[1].contains("File not found"));
    }

    #[test]
    fn plain_reply_renders_on_dashboard() {
        let raw = json!({ "success": true, "response": { "result": "**Short** answer" } });
        let app = App::from_agent_result("test".into(), &raw);
        assert_eq!(text_of(&app.section_lines()), vec!["Short answer"]);
    }

    #[test]
    fn artifact_link_on_dashboard() {
        let raw = json!({
            "success": true,
            "response": { "result": { "executive_summary": "hi" } },
            "module_outputs": { "artifact_files": [{ "file_url": "https://files/board.pdf" }] },
        });
        let app = App::from_agent_result("test".into(), &raw);
        let text = text_of(&app.section_lines());
        assert!(text.contains(&"Report: https://files/board.pdf".to_string()));
    }

    #[test]
    fn answer_ends_with_report_link() {
        let raw = json!({
            "success": true,
            "response": { "result": { "board_narrative": "- **Retain** engineers" } },
            "module_outputs": { "artifact_files": [{ "file_url": "https://files/board.pdf" }] },
        });
        assert_eq!(
            answer_lines(&raw),
            vec!["  • Retain engineers", "", "Report: https://files/board.pdf"]
        );
    }

    #[test]
    fn simulation_prints_planning_outcome() {
        let result = json!({ "detailed_planning_analysis": "## Impact\n1. **+85** heads" });
        let raw = json!({ "success": true, "response": { "result": result.to_string() } });
        assert_eq!(
            simulation_lines(&raw),
            Ok(vec!["Impact".to_string(), "  1. +85 heads".to_string()])
        );
    }

    #[test]
    fn simulation_without_narrative_uses_placeholder() {
        let raw = json!({ "success": true, "response": { "result": { "org_health_index": 68 } } });
        assert_eq!(
            simulation_lines(&raw),
            Ok(vec![
                "Simulation complete. Review the updated metrics above.".to_string()
            ])
        );
    }

    #[test]
    fn failed_simulation_reports_error() {
        let raw = json!({ "success": false });
        assert_eq!(
            simulation_lines(&raw),
            Err("Simulation failed. Please try again.".to_string())
        );
    }

    #[test]
    fn previous_wraps_around() {
        let mut app = App::load(&Source::Sample);
        app.scroll_down(5);
        app.previous_section();
        assert_eq!(app.section(), Section::OrgHealth);
        assert_eq!(app.scroll, 0);
    }
}
