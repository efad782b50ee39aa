use crate::heat_point::HeatPoint;
use crate::risk::reduction_percent;

/// Heat risk with two decimals, e.g. `0.40`.
pub fn format_risk(heat_risk: f64) -> String {
    format!("{:.2}", heat_risk)
}

/// Population with comma thousands separators, e.g. `1,234,567`.
///
/// Locale-independent fallback for when the browser cannot format numbers.
pub fn format_population(population: u64) -> String {
    let digits = population.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Popup body shown when a marker is clicked.
///
/// `population` is the already grouped count, so the caller can use the
/// browser locale.
pub fn popup_html(point: &HeatPoint, population: &str) -> String {
    format!(
        "Heat Risk: {} extreme days/yr<br/>Population: {}",
        format_risk(point.heat_risk),
        population
    )
}

/// Summary line under the controls.
pub fn summary_line(baseline: f64, current: f64) -> String {
    format!(
        "Avg Heat Risk: {} extreme days/yr ({:.1}% reduction from baseline)",
        format_risk(current),
        reduction_percent(baseline, current)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_risk_two_decimals() {
        assert_eq!(format_risk(0.4), "0.40");
        assert_eq!(format_risk(0.126), "0.13");
        assert_eq!(format_risk(1.0), "1.00");
    }

    #[test]
    fn test_format_population_grouping() {
        assert_eq!(format_population(0), "0");
        assert_eq!(format_population(999), "999");
        assert_eq!(format_population(1000), "1,000");
        assert_eq!(format_population(123456), "123,456");
        assert_eq!(format_population(1234567), "1,234,567");
    }

    #[test]
    fn test_popup_html() {
        let point = HeatPoint::new(20.0, 20.0, 0.6, 2000);
        assert_eq!(
            popup_html(&point, &format_population(point.population)),
            "Heat Risk: 0.60 extreme days/yr<br/>Population: 2,000"
        );
    }

    #[test]
    fn test_popup_html_keeps_localized_population() {
        let point = HeatPoint::new(48.1, 11.6, 0.45, 1_488_202);
        assert_eq!(
            popup_html(&point, "1.488.202"),
            "Heat Risk: 0.45 extreme days/yr<br/>Population: 1.488.202"
        );
    }

    #[test]
    fn test_summary_line_no_reduction() {
        assert_eq!(
            summary_line(0.4, 0.4),
            "Avg Heat Risk: 0.40 extreme days/yr (0.0% reduction from baseline)"
        );
    }

    #[test]
    fn test_summary_line_half_reduction() {
        let line = summary_line(0.4, 0.2);
        assert!(line.contains("0.20 extreme days/yr"));
        assert!(line.contains("(50.0% reduction from baseline)"));
    }
}
