//! Sales period filter

use serde::Serialize;

/// Period shown by the sales overview filter buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Week,
    Month,
    #[default]
    Year,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Week, Period::Month, Period::Year];

    pub fn name(&self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }

    /// Button caption, e.g. "1 year"
    pub fn button_label(&self) -> String {
        format!("1 {}", self.name())
    }
}

/// Exactly one active period, year by default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PeriodFilter {
    active: Period,
}

impl PeriodFilter {
    pub fn active(&self) -> Period {
        self.active
    }

    pub fn is_active(&self, period: Period) -> bool {
        self.active == period
    }

    pub fn select(&mut self, period: Period) {
        if self.active != period {
            tracing::debug!(from = self.active.name(), to = period.name(), "period filter changed");
        }
        self.active = period;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_year() {
        let filter = PeriodFilter::default();
        assert_eq!(filter.active(), Period::Year);
    }

    #[test]
    fn test_select_marks_single_active() {
        let mut filter = PeriodFilter::default();
        filter.select(Period::Week);

        let active: Vec<_> = Period::ALL.into_iter().filter(|p| filter.is_active(*p)).collect();
        assert_eq!(active, vec![Period::Week]);

        filter.select(Period::Week);
        assert!(filter.is_active(Period::Week));
        assert!(!filter.is_active(Period::Year));
    }

    #[test]
    fn test_button_label() {
        assert_eq!(Period::Month.button_label(), "1 month");
    }
}
