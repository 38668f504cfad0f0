use serde::{Deserialize, Serialize};

/// A contiguous exchange session window, expressed in minutes since
/// local midnight. Start is inclusive, end exclusive; both in [0, 1440).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingPeriod {
    pub start: u32,
    pub end: u32,
}

impl TradingPeriod {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Whether a minute-of-day falls inside this window ([start, end)).
    pub fn contains(&self, minute_of_day: u32) -> bool {
        minute_of_day >= self.start && minute_of_day < self.end
    }
}

/// Morning session 09:30–11:30.
pub const MORNING_SESSION: TradingPeriod = TradingPeriod::new(9 * 60 + 30, 11 * 60 + 30);

/// Afternoon session 13:00–15:00.
pub const AFTERNOON_SESSION: TradingPeriod = TradingPeriod::new(13 * 60, 15 * 60);

/// Both A-share session windows, in chronological order.
pub const TRADING_PERIODS: [TradingPeriod; 2] = [MORNING_SESSION, AFTERNOON_SESSION];

/// Result of a session-clock query. Derived fresh on every call; the
/// message is a ready-to-render countdown ("距收盘 2 小时" etc.).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingTimeStatus {
    pub is_trading: bool,
    pub message: String,
}
