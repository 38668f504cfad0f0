use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};

use crate::calendar::HolidayCalendar;
use crate::models::session::{
    TradingTimeStatus, AFTERNOON_SESSION, MORNING_SESSION, TRADING_PERIODS,
};

/// How many calendar days ahead the clock searches for the next session.
/// Bounds the only loop in this module, so a calendar that reports every
/// day as a holiday cannot hang the caller.
const NEXT_OPEN_SEARCH_DAYS: u32 = 10;

/// Fallback when no trading day exists within the search window.
pub const NO_SESSION_MESSAGE: &str = "赌场关门了";

/// Computes market open/close state against the fixed A-share session
/// windows and an injected holiday calendar.
///
/// Pure business logic: reads only `now` and the calendar, never fails,
/// never panics. The dashboard re-queries it once a minute from a timer
/// that lives outside this crate.
pub struct SessionService;

impl SessionService {
    pub fn new() -> Self {
        Self
    }

    /// Whether `date` is a trading day: Monday–Friday and not a closure
    /// reported by the calendar.
    pub fn is_trading_day(&self, date: NaiveDate, calendar: &dyn HolidayCalendar) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !calendar.is_holiday(date)
    }

    /// Whether the minute-of-day of `now` falls inside either session
    /// window. Says nothing about the day itself.
    pub fn is_session_time(&self, now: NaiveDateTime) -> bool {
        let minute = minute_of_day(now);
        TRADING_PERIODS.iter().any(|p| p.contains(minute))
    }

    /// Full session-clock query: in-session → countdown to the close of
    /// the current session; otherwise → countdown to the next open,
    /// searching at most [`NEXT_OPEN_SEARCH_DAYS`] days ahead.
    pub fn trading_status(
        &self,
        now: NaiveDateTime,
        calendar: &dyn HolidayCalendar,
    ) -> TradingTimeStatus {
        let minute = minute_of_day(now);
        let trading_day = self.is_trading_day(now.date(), calendar);

        if trading_day && self.is_session_time(now) {
            let close = if minute < MORNING_SESSION.end {
                MORNING_SESSION.end
            } else {
                AFTERNOON_SESSION.end
            };
            let remaining = ceil_minutes_until(now, at_minute(now.date(), close));
            return TradingTimeStatus {
                is_trading: true,
                message: format!("距收盘 {}", format_minutes(remaining)),
            };
        }

        // Same-day opens: before the morning bell, or the lunch gap.
        if trading_day && minute < MORNING_SESSION.start {
            return next_open_status(now, at_minute(now.date(), MORNING_SESSION.start));
        }
        if trading_day && minute >= MORNING_SESSION.end && minute < AFTERNOON_SESSION.start {
            return next_open_status(now, at_minute(now.date(), AFTERNOON_SESSION.start));
        }

        // After hours, weekend, or holiday: first trading day from tomorrow.
        let mut day = now.date();
        for _ in 0..NEXT_OPEN_SEARCH_DAYS {
            let Some(next) = day.succ_opt() else { break };
            day = next;
            if self.is_trading_day(day, calendar) {
                return next_open_status(now, at_minute(day, MORNING_SESSION.start));
            }
        }

        TradingTimeStatus {
            is_trading: false,
            message: NO_SESSION_MESSAGE.to_string(),
        }
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}

// ── Internal helpers ────────────────────────────────────────────────

fn minute_of_day(t: NaiveDateTime) -> u32 {
    t.hour() * 60 + t.minute()
}

/// `date` at `minute` minutes past midnight, seconds zeroed.
fn at_minute(date: NaiveDate, minute: u32) -> NaiveDateTime {
    let time = NaiveTime::from_hms_opt(minute / 60, minute % 60, 0).unwrap_or_default();
    date.and_time(time)
}

/// Minutes from `from` to `to`, rounded up to the next whole minute, so
/// a non-zero countdown is shown until the exact boundary instant.
fn ceil_minutes_until(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    let secs = (to - from).num_seconds();
    secs.div_euclid(60) + i64::from(secs.rem_euclid(60) != 0)
}

fn next_open_status(now: NaiveDateTime, open: NaiveDateTime) -> TradingTimeStatus {
    TradingTimeStatus {
        is_trading: false,
        message: format!("距开盘 {}", format_minutes(ceil_minutes_until(now, open))),
    }
}

/// Render a minute count as "N 分钟" / "H 小时[ M 分钟]" /
/// "D 天[ H 小时][ M 分钟]", joining only non-zero components.
pub fn format_minutes(total: i64) -> String {
    if total < 60 {
        return format!("{total} 分钟");
    }

    let hours = total / 60;
    let mins = total % 60;

    if hours < 24 {
        return if mins > 0 {
            format!("{hours} 小时 {mins} 分钟")
        } else {
            format!("{hours} 小时")
        };
    }

    let days = hours / 24;
    let hrs = hours % 24;
    let mut parts = Vec::with_capacity(3);
    if days > 0 {
        parts.push(format!("{days} 天"));
    }
    if hrs > 0 {
        parts.push(format!("{hrs} 小时"));
    }
    if mins > 0 {
        parts.push(format!("{mins} 分钟"));
    }
    parts.join(" ")
}
