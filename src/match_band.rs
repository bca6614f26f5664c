//! Match Bands
//!
//! Maps a recipe's match percentage onto the progress bar's color band,
//! width and label. Shared by page-load bars and refreshed results.

/// Color band of a match bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchBand {
    Success,
    Sage,
    Warning,
    Alert,
}

impl MatchBand {
    /// First match wins; NaN falls through to Alert
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            MatchBand::Success
        } else if percentage >= 50.0 {
            MatchBand::Sage
        } else if percentage >= 30.0 {
            MatchBand::Warning
        } else {
            MatchBand::Alert
        }
    }

    /// CSS color for the progress element
    pub fn color(&self) -> &'static str {
        match self {
            MatchBand::Success => "var(--success)",
            MatchBand::Sage => "var(--sage-green)",
            MatchBand::Warning => "var(--warning)",
            MatchBand::Alert => "var(--terracotta)",
        }
    }
}

/// Bar width, passed through unclamped. Negative zero prints as "0%".
pub fn bar_width(percentage: f64) -> String {
    format!("{}%", percentage + 0.0)
}

/// Rounded label, half rounds toward +infinity like JavaScript's Math.round
pub fn match_label(percentage: f64) -> String {
    let rounded = percentage.round();
    // f64::round sends negative halves away from zero
    let rounded = if percentage - rounded == 0.5 { rounded + 1.0 } else { rounded };
    format!("{}%", rounded + 0.0)
}

/// Inline style of the progress element before and after it fills
pub fn progress_style(percentage: f64, filled: bool) -> String {
    if filled {
        format!(
            "width: {}; background-color: {};",
            bar_width(percentage),
            MatchBand::from_percentage(percentage).color()
        )
    } else {
        "width: 0%;".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries_go_to_higher_band() {
        assert_eq!(MatchBand::from_percentage(80.0), MatchBand::Success);
        assert_eq!(MatchBand::from_percentage(50.0), MatchBand::Sage);
        assert_eq!(MatchBand::from_percentage(30.0), MatchBand::Warning);
    }

    #[test]
    fn test_band_ranges() {
        assert_eq!(MatchBand::from_percentage(100.0), MatchBand::Success);
        assert_eq!(MatchBand::from_percentage(79.99), MatchBand::Sage);
        assert_eq!(MatchBand::from_percentage(49.9), MatchBand::Warning);
        assert_eq!(MatchBand::from_percentage(29.9), MatchBand::Alert);
        assert_eq!(MatchBand::from_percentage(0.0), MatchBand::Alert);
        assert_eq!(MatchBand::from_percentage(-5.0), MatchBand::Alert);
        assert_eq!(MatchBand::from_percentage(f64::NAN), MatchBand::Alert);
    }

    #[test]
    fn test_band_colors() {
        assert_eq!(MatchBand::Success.color(), "var(--success)");
        assert_eq!(MatchBand::Alert.color(), "var(--terracotta)");
    }

    #[test]
    fn test_bar_width_unclamped() {
        assert_eq!(bar_width(42.0), "42%");
        assert_eq!(bar_width(66.5), "66.5%");
        assert_eq!(bar_width(120.0), "120%");
    }

    #[test]
    fn test_match_label_rounding() {
        assert_eq!(match_label(42.0), "42%");
        assert_eq!(match_label(42.4), "42%");
        assert_eq!(match_label(42.5), "43%");
        assert_eq!(match_label(66.666), "67%");
        assert_eq!(match_label(0.0), "0%");
    }

    #[test]
    fn test_match_label_edge_values() {
        // Adding 0.5 to this rounds up to 1.0 in f64
        assert_eq!(match_label(0.49999999999999994), "0%");
        assert_eq!(match_label(-2.5), "-2%");
        assert_eq!(match_label(-2.6), "-3%");
        assert_eq!(match_label(-0.4), "0%");
        assert_eq!(match_label(-0.0), "0%");
    }

    #[test]
    fn test_negative_zero_width() {
        assert_eq!(bar_width(-0.0), "0%");
        assert_eq!(progress_style(-0.0, true), "width: 0%; background-color: var(--terracotta);");
    }

    #[test]
    fn test_progress_style() {
        assert_eq!(progress_style(42.0, false), "width: 0%;");
        assert_eq!(
            progress_style(42.0, true),
            "width: 42%; background-color: var(--warning);"
        );
    }
}
