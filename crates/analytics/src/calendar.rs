use crate::generator::deterministic_number;
use crate::month::MonthRef;
use crate::report::{CalendarDay, CalendarMonth, WeeklySummary};
use chrono::{Datelike, Weekday};

/// Bounds of a weekday's sample P&L draw.
pub const DAILY_PNL_MIN: i64 = 180;
pub const DAILY_PNL_MAX: i64 = 820;

/// Days per weekly summary. Weeks are counted from day 1 of the month,
/// not aligned to ISO weeks.
pub const WEEK_LENGTH: usize = 7;

/// Round trips assumed per active session when estimating trade counts.
const TRADES_PER_SESSION: u32 = 2;

pub fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// Builds the daily P&L calendar for `month`.
///
/// Weekends carry no P&L. A weekday's P&L is drawn with `seed + day_of_month`
/// as the sub-seed, so every day varies while staying reproducible.
pub fn generate_calendar(seed: u32, month: MonthRef) -> CalendarMonth {
    let days = month
        .dates()
        .map(|date| {
            let pnl = if is_weekend(date.weekday()) {
                None
            } else {
                let sub_seed = i64::from(seed) + i64::from(date.day());
                Some(deterministic_number(sub_seed, DAILY_PNL_MIN, DAILY_PNL_MAX))
            };
            CalendarDay { date, pnl }
        })
        .collect();

    CalendarMonth {
        month_label: month.label(),
        days,
    }
}

/// Rolls the calendar up into consecutive 7-day groups starting at day 1.
///
/// Each group sums the P&L of its sessions and estimates two trades per
/// session. Days without a session add nothing to either figure.
pub fn summarize_weeks(calendar: &CalendarMonth) -> Vec<WeeklySummary> {
    let mut summaries = Vec::new();

    for (index, chunk) in calendar.days.chunks(WEEK_LENGTH).enumerate() {
        let (Some(first), Some(last)) = (chunk.first(), chunk.last()) else {
            continue;
        };

        let pnl = chunk.iter().filter_map(|day| day.pnl).sum();
        let sessions = chunk.iter().filter(|day| day.is_session()).count() as u32;

        summaries.push(WeeklySummary {
            label: format!("Week {}", index + 1),
            range: format!(
                "{} \u{2013} {}",
                first.date.format("%b %-d"),
                last.date.format("%b %-d")
            ),
            start: first.date,
            end: last.date,
            pnl,
            trades: sessions * TRADES_PER_SESSION,
        });
    }

    summaries
}
