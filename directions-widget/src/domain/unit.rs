//! Distance units and human-readable formatting.

use chrono::Duration;
use serde::{Deserialize, Serialize};

const METRES_PER_MILE: f64 = 1609.344;
const FEET_PER_MILE: f64 = 5280.0;

/// Distance formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Imperial,
    Metric,
}

impl Unit {
    /// Format a distance given in metres.
    ///
    /// ```
    /// use directions_widget::domain::Unit;
    ///
    /// assert_eq!(Unit::Metric.format_distance(1234.0), "1.23km");
    /// assert_eq!(Unit::Imperial.format_distance(1609.344), "1.00mi");
    /// ```
    pub fn format_distance(self, metres: f64) -> String {
        match self {
            Unit::Imperial => {
                let miles = metres / METRES_PER_MILE;
                if miles >= 100.0 {
                    format!("{miles:.0}mi")
                } else if miles >= 10.0 {
                    format!("{miles:.1}mi")
                } else if miles >= 0.1 {
                    format!("{miles:.2}mi")
                } else {
                    format!("{:.0}ft", miles * FEET_PER_MILE)
                }
            }
            Unit::Metric => {
                if metres >= 100_000.0 {
                    format!("{:.0}km", metres / 1000.0)
                } else if metres >= 10_000.0 {
                    format!("{:.1}km", metres / 1000.0)
                } else if metres >= 100.0 {
                    format!("{:.2}km", metres / 1000.0)
                } else {
                    format!("{metres:.0}m")
                }
            }
        }
    }
}

/// Format a duration given in seconds, e.g. `"45s"`, `"12min"`, `"1h 5min"`.
///
/// Durations beyond what `chrono` can represent are clamped to its maximum.
pub fn format_duration(seconds: f64) -> String {
    let duration =
        Duration::try_seconds(seconds.max(0.0).round() as i64).unwrap_or(Duration::MAX);
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;
    let secs = duration.num_seconds() % 60;

    if hours == 0 && mins == 0 {
        format!("{secs}s")
    } else if hours == 0 {
        format!("{mins}min")
    } else {
        format!("{hours}h {mins}min")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imperial_thresholds() {
        assert_eq!(Unit::Imperial.format_distance(METRES_PER_MILE * 150.0), "150mi");
        assert_eq!(Unit::Imperial.format_distance(METRES_PER_MILE * 12.34), "12.3mi");
        assert_eq!(Unit::Imperial.format_distance(METRES_PER_MILE), "1.00mi");
        assert_eq!(Unit::Imperial.format_distance(100.0), "328ft");
    }

    #[test]
    fn metric_thresholds() {
        assert_eq!(Unit::Metric.format_distance(150_000.0), "150km");
        assert_eq!(Unit::Metric.format_distance(12_345.0), "12.3km");
        assert_eq!(Unit::Metric.format_distance(1_234.0), "1.23km");
        assert_eq!(Unit::Metric.format_distance(42.4), "42m");
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(45.0), "45s");
        assert_eq!(format_duration(600.0), "10min");
        assert_eq!(format_duration(3900.0), "1h 5min");
        assert_eq!(format_duration(7200.0), "2h 0min");
        assert_eq!(format_duration(0.0), "0s");
    }

    #[test]
    fn out_of_range_durations_are_clamped() {
        let huge = format_duration(1e17);
        assert!(huge.ends_with("min"));
        assert_eq!(format_duration(f64::INFINITY), huge);
        assert_eq!(format_duration(f64::NEG_INFINITY), "0s");
        assert_eq!(format_duration(f64::NAN), "0s");
    }

    #[test]
    fn unit_serde() {
        assert_eq!(serde_json::to_string(&Unit::Metric).unwrap(), "\"metric\"");
        let u: Unit = serde_json::from_str("\"imperial\"").unwrap();
        assert_eq!(u, Unit::Imperial);
    }
}
