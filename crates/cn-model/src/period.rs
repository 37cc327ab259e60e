use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A closed date interval with both bounds present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl Period {
    pub fn new(start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// True when the interval is well-formed (`start < end`).
    pub fn is_ordered(&self) -> bool {
        self.start_date < self.end_date
    }

    /// True when `self` lies strictly after `other` ends.
    pub fn starts_after(&self, other: &Period) -> bool {
        self.start_date > other.end_date
    }

    /// True when `self` ends strictly before `other` starts.
    pub fn ends_before(&self, other: &Period) -> bool {
        self.end_date < other.start_date
    }
}

/// A period with only the start bound, used by business functions whose end
/// is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartOnlyPeriod {
    pub start_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).single().expect("date")
    }

    #[test]
    fn ordered_period() {
        let period = Period::new(date(2026, 1, 1), date(2026, 2, 1));
        assert!(period.is_ordered());
        let inverted = Period::new(date(2026, 2, 1), date(2026, 1, 1));
        assert!(!inverted.is_ordered());
    }

    #[test]
    fn gap_relations() {
        let first = Period::new(date(2026, 1, 1), date(2026, 2, 1));
        let second = Period::new(date(2026, 3, 1), date(2026, 4, 1));
        assert!(second.starts_after(&first));
        assert!(first.ends_before(&second));
    }

    #[test]
    fn period_uses_camel_case_wire_names() {
        let period = Period::new(date(2026, 1, 1), date(2026, 2, 1));
        let json = serde_json::to_value(period).expect("serialize");
        assert!(json.get("startDate").is_some());
        assert!(json.get("endDate").is_some());
    }
}
