//! Display-window selection ("1Y / 2Y / 4Y / ALL").
//!
//! The window is applied AFTER fitting (fits always see the full history) and
//! BEFORE extremum and tick computation.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::domain::Observation;
use crate::utils::TimeUtils;

#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[strum(ascii_case_insensitive)]
pub enum TimePeriod {
    #[strum(serialize = "1y")]
    OneYear,
    #[strum(serialize = "2y")]
    TwoYears,
    #[strum(serialize = "4y")]
    FourYears,
    #[default]
    #[strum(serialize = "all")]
    All,
}

impl TimePeriod {
    pub fn years(&self) -> Option<i64> {
        match self {
            TimePeriod::OneYear => Some(1),
            TimePeriod::TwoYears => Some(2),
            TimePeriod::FourYears => Some(4),
            TimePeriod::All => None,
        }
    }

    /// Inclusive lower bound of the window, `None` when unbounded
    pub fn start_ms(&self, now_ms: i64) -> Option<i64> {
        self.years()
            .map(|years| now_ms.saturating_sub(years * TimeUtils::MS_IN_Y))
    }

    pub fn contains(&self, timestamp_ms: i64, now_ms: i64) -> bool {
        match self.start_ms(now_ms) {
            Some(start) => timestamp_ms >= start,
            None => true,
        }
    }
}

/// Copy of the observations that fall inside `period`
pub fn filter_period(series: &[Observation], period: TimePeriod, now_ms: i64) -> Vec<Observation> {
    series
        .iter()
        .filter(|obs| period.contains(obs.timestamp, now_ms))
        .copied()
        .collect()
}
