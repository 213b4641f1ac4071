//! Text presentation of metrics. Rounding happens here and nowhere else.

use fittrack_core::MetricKind;
use fittrack_metrics::{Change, DayComparison, WeightDirection, WeightTrend};

/// Whether higher values of `metric` are the good direction.
///
/// Eating fewer calories than yesterday counts as progress.
pub fn higher_is_better(metric: MetricKind) -> bool {
    !matches!(metric, MetricKind::Calories)
}

/// Whether a comparison moved in the good direction. `None` when unchanged.
pub fn favorable(comparison: &DayComparison) -> Option<bool> {
    match comparison.direction {
        Change::Increased => Some(higher_is_better(comparison.metric)),
        Change::Decreased => Some(!higher_is_better(comparison.metric)),
        Change::Unchanged => None,
    }
}

/// Arrow for a raw change.
pub fn arrow(change: Change) -> &'static str {
    match change {
        Change::Increased => "↑",
        Change::Decreased => "↓",
        Change::Unchanged => "=",
    }
}

/// Digits grouped by thousands, e.g. `53,200`.
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One-line weight change over a window of `days` records, e.g.
/// `1.7 kg down over 7 days`.
pub fn weight_line(trend: &WeightTrend, days: usize) -> String {
    let word = match trend.direction {
        WeightDirection::Down => "down",
        WeightDirection::Up => "up",
        WeightDirection::Flat => "flat",
    };
    let unit = if days == 1 { "day" } else { "days" };
    format!("{:.1} kg {} over {} {}", trend.delta_kg.abs(), word, days, unit)
}

/// Human label for a metric.
pub fn metric_label(metric: MetricKind) -> &'static str {
    match metric {
        MetricKind::Steps => "Steps",
        MetricKind::WorkoutMinutes => "Workout Time",
        MetricKind::Calories => "Calories",
        MetricKind::Water => "Water",
    }
}

/// One comparison row, e.g. `Steps  8,500 steps ↑ (+1300, better)`.
pub fn comparison_line(comparison: &DayComparison) -> String {
    let verdict = match favorable(comparison) {
        Some(true) => "better",
        Some(false) => "worse",
        None => "same",
    };
    format!(
        "{:<14}{} {} {} ({:+}, {})",
        metric_label(comparison.metric),
        thousands(comparison.today_value),
        comparison.metric.unit(),
        arrow(comparison.direction),
        comparison.delta,
        verdict,
    )
}

/// Percentage rounded to a whole number for display.
pub fn percent(value: f64) -> String {
    format!("{}%", value.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comparison(metric: MetricKind, delta: i64, direction: Change) -> DayComparison {
        DayComparison {
            metric,
            today_value: 1850,
            delta,
            direction,
        }
    }

    #[test]
    fn test_calorie_polarity_is_inverted() {
        let fewer = comparison(MetricKind::Calories, -200, Change::Decreased);
        assert_eq!(favorable(&fewer), Some(true));

        let more_steps = comparison(MetricKind::Steps, 1300, Change::Increased);
        assert_eq!(favorable(&more_steps), Some(true));

        let less_water = comparison(MetricKind::Water, -1, Change::Decreased);
        assert_eq!(favorable(&less_water), Some(false));

        let same = comparison(MetricKind::Water, 0, Change::Unchanged);
        assert_eq!(favorable(&same), None);
    }

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(8500), "8,500");
        assert_eq!(thousands(53_200), "53,200");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_weight_line_uses_magnitude() {
        let trend = WeightTrend {
            delta_kg: -0.6000000000000014,
            direction: WeightDirection::Up,
        };
        assert_eq!(weight_line(&trend, 7), "0.6 kg up over 7 days");
    }

    #[test]
    fn test_weight_line_names_window() {
        let trend = WeightTrend {
            delta_kg: 1.7,
            direction: WeightDirection::Down,
        };
        assert_eq!(weight_line(&trend, 3), "1.7 kg down over 3 days");
        assert_eq!(weight_line(&trend, 14), "1.7 kg down over 14 days");
    }

    #[test]
    fn test_comparison_line() {
        let line = comparison_line(&comparison(MetricKind::Calories, -200, Change::Decreased));
        assert!(line.starts_with("Calories"));
        assert!(line.contains("1,850 kcal ↓ (-200, better)"));
    }

    #[test]
    fn test_percent_rounds_for_display() {
        assert_eq!(percent(100.0 / 3.0), "33%");
        assert_eq!(percent(62.5), "63%");
    }
}
