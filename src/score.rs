//! Display helpers shared by the results view, the dashboard, and the CLI
//! printers: score banding (thresholds are inclusive lower bounds) and
//! column-width text truncation.

use ratatui::style::Color;

/// Qualitative band for a numeric interview score (0-10 range)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl ScoreBand {
    pub fn for_score(score: f64) -> Self {
        if score >= 8.5 {
            Self::Excellent
        } else if score >= 7.0 {
            Self::Good
        } else if score >= 6.0 {
            Self::Fair
        } else {
            Self::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Excellent => Color::Green,
            Self::Good => Color::Blue,
            Self::Fair => Color::Yellow,
            Self::NeedsImprovement => Color::Red,
        }
    }
}

/// Whether a final score earns the congratulatory line. Separate threshold
/// from the "Excellent" band.
pub fn deserves_congrats(final_score: f64) -> bool {
    final_score >= 7.0
}

/// Format a possibly missing score for display: one decimal, or a dash
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(s) => format!("{:.1}", s),
        None => "-".to_string(),
    }
}

/// Truncate a string to at most `max_len` characters for column display,
/// appending an ellipsis when shortened. Counts characters, not bytes, so
/// multi-byte names never split mid-character.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_inclusive_lower_bounds() {
        assert_eq!(ScoreBand::for_score(8.5), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_score(8.49), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(7.0), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(6.99), ScoreBand::Fair);
        assert_eq!(ScoreBand::for_score(6.0), ScoreBand::Fair);
        assert_eq!(ScoreBand::for_score(5.99), ScoreBand::NeedsImprovement);
        assert_eq!(ScoreBand::for_score(0.0), ScoreBand::NeedsImprovement);
        assert_eq!(ScoreBand::for_score(10.0), ScoreBand::Excellent);
    }

    #[test]
    fn excellent_score_is_green_and_congratulated() {
        let band = ScoreBand::for_score(9.0);
        assert_eq!(band, ScoreBand::Excellent);
        assert_eq!(band.label(), "Excellent");
        assert_eq!(band.color(), Color::Green);
        assert!(deserves_congrats(9.0));
    }

    #[test]
    fn congratulation_threshold_is_separate_from_excellent() {
        assert!(deserves_congrats(7.0));
        assert!(deserves_congrats(8.0));
        assert!(!deserves_congrats(6.9));
        assert_eq!(ScoreBand::for_score(7.5), ScoreBand::Good);
    }

    #[test]
    fn missing_score_renders_as_dash_not_zero() {
        assert_eq!(format_score(None), "-");
        assert_eq!(format_score(Some(8.25)), "8.2");
        assert_eq!(format_score(Some(9.0)), "9.0");
    }

    #[test]
    fn truncate_handles_multibyte_names() {
        let name = "ééééééééééééé"; // 13 chars, 26 bytes
        assert_eq!(truncate(name, 24), name);
        assert_eq!(truncate(name, 10), "ééééééé...");
        assert_eq!(truncate("José María de la Cruz García", 24), "José María de la Cruz...");
    }

    #[test]
    fn truncate_leaves_short_strings_alone() {
        assert_eq!(truncate("Jane Doe", 24), "Jane Doe");
        assert_eq!(truncate("", 8), "");
    }
}
