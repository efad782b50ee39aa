use crate::heat_point::HeatPoint;

/// Arithmetic mean of `heat_risk`, or 0 for an empty collection.
pub fn average_risk(points: &[HeatPoint]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let total: f64 = points.iter().map(|p| p.heat_risk).sum();
    let mean = total / points.len() as f64;
    if mean.is_finite() { mean } else { 0.0 }
}

/// Percentage reduction of `current` relative to `baseline`.
///
/// Returns 0 when the baseline is 0 so the summary never divides by zero.
pub fn reduction_percent(baseline: f64, current: f64) -> f64 {
    if baseline == 0.0 {
        return 0.0;
    }
    let reduction = (baseline - current) / baseline * 100.0;
    if reduction.is_finite() { reduction } else { 0.0 }
}

/// Marker colour bucket for a heat-risk value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    Mid,
    High,
}

impl RiskTier {
    const HIGH_THRESHOLD: f64 = 0.5;
    const MID_THRESHOLD: f64 = 0.3;

    /// Thresholds are strict: 0.5 is mid and 0.3 is low.
    pub fn classify(heat_risk: f64) -> Self {
        if heat_risk > Self::HIGH_THRESHOLD {
            RiskTier::High
        } else if heat_risk > Self::MID_THRESHOLD {
            RiskTier::Mid
        } else {
            RiskTier::Low
        }
    }

    pub fn for_point(point: &HeatPoint) -> Self {
        Self::classify(point.heat_risk)
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskTier::High => "red",
            RiskTier::Mid => "orange",
            RiskTier::Low => "green",
        }
    }

    /// CSS class attached to the marker icon.
    pub fn marker_class(&self) -> &'static str {
        match self {
            RiskTier::High => "marker-red",
            RiskTier::Mid => "marker-orange",
            RiskTier::Low => "marker-green",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(heat_risk: f64) -> HeatPoint {
        HeatPoint::new(0.0, 0.0, heat_risk, 100)
    }

    #[test]
    fn test_average_risk_empty_is_zero() {
        assert_eq!(average_risk(&[]), 0.0);
    }

    #[test]
    fn test_average_risk_is_mean() {
        let points = vec![point(0.2), point(0.6)];
        assert!((average_risk(&points) - 0.4).abs() < 1e-12);

        let points = vec![point(0.1), point(0.3), point(0.8), point(1.2)];
        assert!((average_risk(&points) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_average_risk_single_point() {
        assert_eq!(average_risk(&[point(0.75)]), 0.75);
    }

    #[test]
    fn test_reduction_percent() {
        assert!((reduction_percent(0.4, 0.2) - 50.0).abs() < 1e-9);
        assert!((reduction_percent(0.4, 0.4)).abs() < 1e-9);
        assert!((reduction_percent(0.4, 0.0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_reduction_percent_negative_when_risk_grows() {
        assert!((reduction_percent(0.2, 0.3) + 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_reduction_percent_zero_baseline() {
        assert_eq!(reduction_percent(0.0, 0.0), 0.0);
        assert_eq!(reduction_percent(0.0, 0.5), 0.0);
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(RiskTier::classify(0.6), RiskTier::High);
        assert_eq!(RiskTier::classify(0.4), RiskTier::Mid);
        assert_eq!(RiskTier::classify(0.1), RiskTier::Low);
    }

    #[test]
    fn test_tier_boundaries_belong_to_lower_tier() {
        assert_eq!(RiskTier::classify(0.5), RiskTier::Mid);
        assert_eq!(RiskTier::classify(0.3), RiskTier::Low);
        assert_eq!(RiskTier::classify(0.0), RiskTier::Low);
    }

    #[test]
    fn test_tier_colors() {
        assert_eq!(RiskTier::for_point(&point(0.9)).color(), "red");
        assert_eq!(RiskTier::for_point(&point(0.45)).color(), "orange");
        assert_eq!(RiskTier::for_point(&point(0.2)).marker_class(), "marker-green");
    }
}
