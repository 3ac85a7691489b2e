//! Display helpers for report scores, currency values and severity labels.

/// Formats a US dollar amount compactly: `$1.2B`, `$142.5M`, `$350K`, `$999`.
///
/// Absent values render as `$--`.
pub fn format_currency(value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return "$--".to_string();
    };

    if value >= 1_000_000_000.0 {
        format!("${:.1}B", value / 1_000_000_000.0)
    } else if value >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.0}K", value / 1_000.0)
    } else {
        format!("${}", group_thousands(value))
    }
}

/// Renders a number with `,` thousands separators and at most three decimals.
fn group_thousands(value: f64) -> String {
    let formatted = format!("{:.3}", value.abs());
    let formatted = formatted.trim_end_matches('0').trim_end_matches('.');
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted, None),
    };

    let mut grouped = String::new();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    if value < 0.0 && grouped != "0" {
        grouped.insert(0, '-');
    }
    grouped
}

/// Health band of a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Strong,
    Fair,
    Weak,
    Critical,
    Unknown,
}

impl ScoreBand {
    pub fn from_score(score: Option<f64>) -> Self {
        match score {
            None => ScoreBand::Unknown,
            Some(s) if s >= 80.0 => ScoreBand::Strong,
            Some(s) if s >= 60.0 => ScoreBand::Fair,
            Some(s) if s >= 40.0 => ScoreBand::Weak,
            Some(_) => ScoreBand::Critical,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Strong => "strong",
            ScoreBand::Fair => "fair",
            ScoreBand::Weak => "weak",
            ScoreBand::Critical => "critical",
            ScoreBand::Unknown => "n/a",
        }
    }
}

/// Severity of a risk or priority of an action, as labelled by the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Unknown,
}

impl Severity {
    /// Case-insensitive; unrecognised labels are [`Severity::Unknown`].
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "critical" => Severity::Critical,
            "high" => Severity::High,
            "medium" => Severity::Medium,
            "low" => Severity::Low,
            _ => Severity::Unknown,
        }
    }
}

/// Intensity band of a heatmap cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatLevel {
    Severe,
    High,
    Elevated,
    Moderate,
    Low,
}

impl HeatLevel {
    pub fn from_value(value: f64) -> Self {
        if value >= 80.0 {
            HeatLevel::Severe
        } else if value >= 60.0 {
            HeatLevel::High
        } else if value >= 40.0 {
            HeatLevel::Elevated
        } else if value >= 20.0 {
            HeatLevel::Moderate
        } else {
            HeatLevel::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, "$--")]
    #[case(Some(2_400_000_000.0), "$2.4B")]
    #[case(Some(142_500_000.0), "$142.5M")]
    #[case(Some(350_000.0), "$350K")]
    #[case(Some(1_000.0), "$1K")]
    #[case(Some(999.0), "$999")]
    #[case(Some(12.25), "$12.25")]
    #[case(Some(0.0), "$0")]
    #[case(Some(-12_345.0), "$-12,345")]
    #[case(Some(f64::NAN), "$--")]
    fn currency(#[case] value: Option<f64>, #[case] expected: &str) {
        assert_eq!(format_currency(value), expected);
    }

    #[rstest]
    #[case(None, ScoreBand::Unknown)]
    #[case(Some(100.0), ScoreBand::Strong)]
    #[case(Some(80.0), ScoreBand::Strong)]
    #[case(Some(72.0), ScoreBand::Fair)]
    #[case(Some(54.0), ScoreBand::Weak)]
    #[case(Some(39.9), ScoreBand::Critical)]
    #[case(Some(0.0), ScoreBand::Critical)]
    fn score_bands(#[case] score: Option<f64>, #[case] band: ScoreBand) {
        assert_eq!(ScoreBand::from_score(score), band);
    }

    #[rstest]
    #[case("Critical", Severity::Critical)]
    #[case("HIGH", Severity::High)]
    #[case(" medium ", Severity::Medium)]
    #[case("low", Severity::Low)]
    #[case("urgent", Severity::Unknown)]
    #[case("", Severity::Unknown)]
    fn severity_labels(#[case] label: &str, #[case] severity: Severity) {
        assert_eq!(Severity::parse(label), severity);
    }

    #[rstest]
    #[case(78.0, HeatLevel::High)]
    #[case(80.0, HeatLevel::Severe)]
    #[case(42.0, HeatLevel::Elevated)]
    #[case(20.0, HeatLevel::Moderate)]
    #[case(5.0, HeatLevel::Low)]
    fn heat_levels(#[case] value: f64, #[case] level: HeatLevel) {
        assert_eq!(HeatLevel::from_value(value), level);
    }
}
