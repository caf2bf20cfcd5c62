//! Small display helpers shared by composite components.

/// Badge counts above this are shown as `99+`.
pub const BADGE_OVERFLOW: u32 = 99;

/// Clamp a percentage into `0..=100`; NaN becomes 0.
#[must_use]
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Inline `width` style for a progress fill.
#[must_use]
pub fn width_style(percent: f64) -> String {
    format!("width: {}%", clamp_percent(percent))
}

/// Label for a notification count; `None` hides the badge.
#[must_use]
pub fn badge_label(count: u32) -> Option<String> {
    match count {
        0 => None,
        n if n > BADGE_OVERFLOW => Some(format!("{BADGE_OVERFLOW}+")),
        n => Some(n.to_string()),
    }
}

/// Upper-cased first character of a display name.
#[must_use]
pub fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|first| first.to_uppercase().collect())
        .unwrap_or_default()
}

/// Inline transform sliding a carousel track to `index`.
#[must_use]
pub fn slide_offset_style(index: usize) -> String {
    format!("transform: translateX(-{}%)", index.saturating_mul(100))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_clamped() {
        assert!((clamp_percent(-5.0) - 0.0).abs() < f64::EPSILON);
        assert!((clamp_percent(140.0) - 100.0).abs() < f64::EPSILON);
        assert!((clamp_percent(42.5) - 42.5).abs() < f64::EPSILON);
        assert!((clamp_percent(f64::NAN) - 0.0).abs() < f64::EPSILON);
        assert_eq!(width_style(150.0), "width: 100%");
        assert_eq!(width_style(67.0), "width: 67%");
    }

    #[test]
    fn badge_overflows_past_ninety_nine() {
        assert_eq!(badge_label(0), None);
        assert_eq!(badge_label(7).as_deref(), Some("7"));
        assert_eq!(badge_label(99).as_deref(), Some("99"));
        assert_eq!(badge_label(100).as_deref(), Some("99+"));
    }

    #[test]
    fn initial_uppercases_first_char() {
        assert_eq!(initial("ada lovelace"), "A");
        assert_eq!(initial("  émile"), "É");
        assert_eq!(initial(""), "");
    }

    #[test]
    fn slide_offset_scales_by_index() {
        assert_eq!(slide_offset_style(0), "transform: translateX(-0%)");
        assert_eq!(slide_offset_style(3), "transform: translateX(-300%)");
    }
}
