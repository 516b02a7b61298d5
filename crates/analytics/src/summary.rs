//! Figures the metrics screen derives from a generated calendar.

use crate::month::MonthRef;
use crate::report::CalendarDay;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Net P&L over every session in `days`.
pub fn total_pnl(days: &[CalendarDay]) -> i64 {
    days.iter().filter_map(|day| day.pnl).sum()
}

/// Number of sessions that closed green.
pub fn profitable_days(days: &[CalendarDay]) -> usize {
    days.iter().filter(|day| day.pnl.is_some_and(|pnl| pnl > 0)).count()
}

/// One cell of a Sunday-first month grid. Leading padding cells have no day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    pub day: Option<u32>,
    pub pnl: Option<i64>,
}

/// Lays out the month of `days` as a Sunday-first grid.
///
/// The month is taken from the first entry. Days of that month missing from
/// `days` still get a cell, with no P&L.
pub fn calendar_cells(days: &[CalendarDay]) -> Vec<CalendarCell> {
    let Some(first) = days.first() else {
        return Vec::new();
    };
    let month = MonthRef::containing(first.date);
    let by_day: HashMap<u32, Option<i64>> = days
        .iter()
        .filter(|day| MonthRef::containing(day.date) == month)
        .map(|day| (day.date.day(), day.pnl))
        .collect();

    let offset = month.first_day().weekday().num_days_from_sunday();
    let padding = (0..offset).map(|_| CalendarCell { day: None, pnl: None });
    let cells = (1..=month.days_in_month()).map(|day| CalendarCell {
        day: Some(day),
        pnl: by_day.get(&day).copied().flatten(),
    });

    padding.chain(cells).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::generate_calendar;
    use chrono::NaiveDate;

    fn day(d: u32, pnl: Option<i64>) -> CalendarDay {
        CalendarDay {
            date: NaiveDate::from_ymd_opt(2025, 11, d).unwrap(),
            pnl,
        }
    }

    #[test]
    fn totals_ignore_days_without_sessions() {
        let days = [day(1, None), day(3, Some(400)), day(4, Some(-150)), day(5, Some(0))];
        assert_eq!(total_pnl(&days), 250);
        assert_eq!(profitable_days(&days), 1);
    }

    #[test]
    fn generated_month_totals_match_weekly_rollup() {
        let month = MonthRef::new(2025, 11).unwrap();
        let calendar = generate_calendar(1, month);
        let weeks = crate::calendar::summarize_weeks(&calendar);
        let weekly: i64 = weeks.iter().map(|w| w.pnl).sum();
        assert_eq!(total_pnl(&calendar.days), weekly);
        assert_eq!(profitable_days(&calendar.days), 20);
    }

    #[test]
    fn grid_starts_on_the_first_weekday() {
        // 1 November 2025 is a Saturday: six blank cells first.
        let calendar = generate_calendar(1, MonthRef::new(2025, 11).unwrap());
        let cells = calendar_cells(&calendar.days);
        assert_eq!(cells.len(), 36);
        assert!(cells[..6].iter().all(|c| c.day.is_none() && c.pnl.is_none()));
        assert_eq!(cells[6].day, Some(1));
        assert_eq!(cells[6].pnl, None);
        assert_eq!(cells[8].day, Some(3));
        assert_eq!(cells[8].pnl, Some(698));
    }

    #[test]
    fn grid_fills_missing_days() {
        let cells = calendar_cells(&[day(3, Some(100))]);
        assert_eq!(cells.len(), 36);
        assert_eq!(cells[8].pnl, Some(100));
        assert_eq!(cells[9], CalendarCell { day: Some(4), pnl: None });
    }

    #[test]
    fn empty_input_has_no_grid() {
        assert!(calendar_cells(&[]).is_empty());
    }
}
