pub mod chinese;

use chrono::NaiveDate;
use std::collections::HashSet;

/// Capability contract for exchange-closure lookups.
///
/// The session clock asks this once per examined calendar day. An
/// implementation must be a pure, side-effect-free lookup and safe for
/// concurrent reads; weekends are handled by the clock itself, so only
/// extra closures (public holidays) need to be reported.
pub trait HolidayCalendar: Send + Sync {
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

/// Any plain predicate works as a calendar. Handy for tests:
/// `&|_: NaiveDate| false` is an always-open market.
impl<F> HolidayCalendar for F
where
    F: Fn(NaiveDate) -> bool + Send + Sync,
{
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self(date)
    }
}

/// Set-backed calendar built from a fixed list of closure dates.
#[derive(Debug, Clone, Default)]
pub struct StaticHolidayCalendar {
    closures: HashSet<NaiveDate>,
}

impl StaticHolidayCalendar {
    /// No closures at all: every weekday is a trading day.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            closures: dates.into_iter().collect(),
        }
    }

    /// The built-in Chinese exchange closure table (see [`chinese`]).
    pub fn chinese_exchange() -> Self {
        Self::new(
            chinese::EXCHANGE_CLOSURES
                .iter()
                .filter_map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
        )
    }

    /// Number of closure dates this calendar knows about.
    pub fn len(&self) -> usize {
        self.closures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closures.is_empty()
    }
}

impl HolidayCalendar for StaticHolidayCalendar {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.closures.contains(&date)
    }
}
