//! Maps rendered blocks and report metrics onto terminal lines.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use workforce_intel_engine::{
    Block, HeatLevel, InlineSpan, ScoreBand, Severity, StructuredReport, format_currency,
};

const TABLE_SEPARATOR: &str = " │ ";

/// Sequential numbering for ordered list items, restarted at each heading.
#[derive(Default)]
struct Numbering {
    next: usize,
}

impl Numbering {
    /// The list marker for `block`, if it is a list item.
    fn marker(&mut self, block: &Block) -> Option<String> {
        match block {
            Block::Heading { .. } => {
                self.next = 0;
                None
            }
            Block::ListItem { ordered: true, .. } => {
                self.next += 1;
                Some(format!("{}. ", self.next))
            }
            Block::ListItem { ordered: false, .. } => Some("• ".to_string()),
            _ => None,
        }
    }
}

/// Terminal lines for a rendered markdown document. Omitted blocks produce no line.
pub fn block_lines(blocks: &[Block]) -> Vec<Line<'static>> {
    let mut numbering = Numbering::default();
    let mut lines = Vec::with_capacity(blocks.len());

    for block in blocks {
        let marker = numbering.marker(block);
        match block {
            Block::Heading { level, text } => {
                let style = heading_style(*level);
                lines.push(Line::from(
                    text.iter()
                        .map(|span| Span::styled(span.text().to_string(), style))
                        .collect::<Vec<_>>(),
                ));
            }
            Block::ListItem { text, .. } => {
                let mut spans = vec![Span::raw(format!("  {}", marker.unwrap_or_default()))];
                spans.extend(text.iter().map(inline_span));
                lines.push(Line::from(spans));
            }
            Block::TableRow { cells } => {
                let mut spans = vec![];
                for (i, cell) in cells.iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::styled(
                            TABLE_SEPARATOR,
                            Style::default().fg(Color::DarkGray),
                        ));
                    }
                    spans.extend(cell.iter().map(inline_span));
                }
                lines.push(Line::from(spans));
            }
            Block::Paragraph { text } => {
                lines.push(Line::from(text.iter().map(inline_span).collect::<Vec<_>>()));
            }
            Block::Blank => lines.push(Line::default()),
            Block::Omitted => {}
        }
    }

    lines
}

/// Plain-text lines for a rendered markdown document, for non-terminal output.
pub fn plain_lines(blocks: &[Block]) -> Vec<String> {
    let mut numbering = Numbering::default();

    blocks
        .iter()
        .filter_map(|block| {
            let marker = numbering.marker(block);
            match block {
                Block::Omitted => None,
                Block::ListItem { .. } => Some(format!(
                    "  {}{}",
                    marker.unwrap_or_default(),
                    block.plain_text()
                )),
                _ => Some(block.plain_text()),
            }
        })
        .collect()
}

fn heading_style(level: u8) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match level {
        2 => style.add_modifier(Modifier::UNDERLINED),
        3 => style.fg(Color::Cyan),
        _ => style,
    }
}

fn inline_span(span: &InlineSpan) -> Span<'static> {
    match span {
        InlineSpan::Bold(text) => {
            Span::styled(text.clone(), Style::default().add_modifier(Modifier::BOLD))
        }
        InlineSpan::Plain(text) => Span::raw(text.clone()),
    }
}

fn band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Strong => Color::Green,
        ScoreBand::Fair => Color::Yellow,
        ScoreBand::Weak => Color::LightRed,
        ScoreBand::Critical => Color::Red,
        ScoreBand::Unknown => Color::DarkGray,
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Critical => Color::Red,
        Severity::High => Color::LightRed,
        Severity::Medium => Color::Yellow,
        Severity::Low => Color::Green,
        Severity::Unknown => Color::Gray,
    }
}

fn heat_color(level: HeatLevel) -> Color {
    match level {
        HeatLevel::Severe => Color::Red,
        HeatLevel::High => Color::LightRed,
        HeatLevel::Elevated => Color::Yellow,
        HeatLevel::Moderate => Color::LightGreen,
        HeatLevel::Low => Color::Green,
    }
}

fn metric_line(label: &str, value: Option<f64>, color: Color, note: &str) -> Line<'static> {
    let value = value.map_or_else(|| "--".to_string(), |v| format!("{v:.0}"));
    Line::from(vec![
        Span::raw(format!("{label:<24}")),
        Span::styled(
            format!("{value:>4}"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {note}"), Style::default().fg(Color::DarkGray)),
    ])
}

/// A 0-100 score where higher is healthier.
fn score_line(label: &str, score: Option<f64>) -> Line<'static> {
    let band = ScoreBand::from_score(score);
    metric_line(label, score, band_color(band), band.label())
}

/// A 0-100 index where higher is riskier.
fn risk_line(label: &str, index: Option<f64>) -> Line<'static> {
    match index {
        Some(value) => {
            let color = heat_color(HeatLevel::from_value(value));
            metric_line(label, index, color, "risk")
        }
        None => metric_line(label, None, Color::DarkGray, "n/a"),
    }
}

fn label_span(label: &str) -> Span<'static> {
    let severity = Severity::parse(label);
    Span::styled(
        format!("[{label}] "),
        Style::default().fg(severity_color(severity)),
    )
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}

/// Headline scores, cost projection, risks and actions of a report.
pub fn dashboard_lines(report: &StructuredReport) -> Vec<Line<'static>> {
    let mut lines = vec![
        section_title("Key Metrics"),
        score_line("Workforce health", report.workforce_health_score),
        risk_line("Attrition risk index", report.attrition_risk_index),
        score_line("Pay equity", report.pay_equity_score),
        score_line("Org health", report.org_health_index),
        score_line("Hiring pipeline", report.hiring_pipeline_score),
        Line::from(vec![
            Span::raw(format!("{:<24}", "Workforce cost")),
            Span::styled(
                format_currency(report.workforce_cost_projection_usd),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    if let Some(risks) = report.top_strategic_risks.as_ref().filter(|r| !r.is_empty()) {
        let mut risks = risks.iter().collect::<Vec<_>>();
        risks.sort_by_key(|risk| Severity::parse(&risk.severity));

        lines.push(Line::default());
        lines.push(section_title("Top Strategic Risks"));
        for risk in risks {
            lines.push(Line::from(vec![
                label_span(&risk.severity),
                Span::styled(
                    risk.risk.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" ({})", risk.impact_area)),
            ]));
            if !risk.recommended_action.is_empty() {
                lines.push(Line::from(format!("    → {}", risk.recommended_action)));
            }
        }
    }

    if let Some(actions) = report.top_recommended_actions.as_ref().filter(|a| !a.is_empty()) {
        lines.push(Line::default());
        lines.push(section_title("Recommended Actions"));
        for action in actions {
            lines.push(Line::from(vec![
                label_span(&action.priority),
                Span::styled(
                    action.action.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    "  {} · {}",
                    action.timeline,
                    format_currency(action.estimated_cost_usd)
                )),
            ]));
            if !action.expected_impact.is_empty() {
                lines.push(Line::from(format!("    → {}", action.expected_impact)));
            }
        }
    }

    lines
}
