//! Shared formatting helpers for table cells and widgets.
//!
//! All pure formatting functions (no ratatui styles, no UI layout) live here.

/// Text shown in place of an absent or unusable value.
pub const PLACEHOLDER: &str = "--";

/// Format an amount as US dollars with en-IN digit grouping.
///
/// `None`, NaN and infinities render as [`PLACEHOLDER`].
///
/// `"$45,303.00"`, `"$12,34,567.00"`, `"-$1,500.50"`
pub fn format_currency(amount: Option<f64>) -> String {
    let Some(value) = amount.filter(|v| v.is_finite()) else {
        return PLACEHOLDER.to_string();
    };

    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let negative = value < 0.0 && fixed != "0.00";

    format!(
        "{}${}.{}",
        if negative { "-" } else { "" },
        group_indian(int_part),
        frac_part
    )
}

/// Groups an unsigned digit string the en-IN way: the last three digits,
/// then pairs (`1234567` -> `12,34,567`).
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Lowercases the input and capitalises the first letter of every
/// space-separated word. Empty or absent input renders as [`PLACEHOLDER`].
pub fn capitalize_words(input: Option<&str>) -> String {
    let Some(input) = input.filter(|s| !s.is_empty()) else {
        return PLACEHOLDER.to_string();
    };

    input
        .to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Format a percentage with one decimal unless it is whole: `"85%"`, `"92.5%"`.
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    if value.fract() == 0.0 {
        format!("{:.0}%", value)
    } else {
        format!("{:.1}%", value)
    }
}

/// Truncates `text` to at most `width` characters, marking the cut with `…`.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_placeholder_for_missing() {
        assert_eq!(format_currency(None), "--");
    }

    #[test]
    fn currency_groups_like_en_in() {
        assert_eq!(format_currency(Some(0.0)), "$0.00");
        assert_eq!(format_currency(Some(999.5)), "$999.50");
        assert_eq!(format_currency(Some(45303.0)), "$45,303.00");
        assert_eq!(format_currency(Some(1234567.0)), "$12,34,567.00");
        assert_eq!(format_currency(Some(123456789.25)), "$12,34,56,789.25");
    }

    #[test]
    fn currency_negative_and_nan() {
        assert_eq!(format_currency(Some(-1500.5)), "-$1,500.50");
        assert_eq!(format_currency(Some(f64::NAN)), "--");
        assert_eq!(format_currency(Some(f64::INFINITY)), "--");
        assert_eq!(format_currency(Some(-0.001)), "$0.00");
    }

    #[test]
    fn capitalize_words_lowercases_rest() {
        assert_eq!(capitalize_words(Some("HAFNIA leo")), "Hafnia Leo");
        assert_eq!(capitalize_words(Some("nord  star")), "Nord  Star");
        assert_eq!(capitalize_words(Some("")), "--");
        assert_eq!(capitalize_words(None), "--");
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(format_percent(85.0), "85%");
        assert_eq!(format_percent(92.5), "92.5%");
        assert_eq!(format_percent(f64::NAN), "--");
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("Vessels", 10), "Vessels");
        assert_eq!(truncate("Speed Percentage", 6), "Speed…");
        assert_eq!(truncate("abc", 0), "");
    }
}
