use crate::error::AnalyticsError;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month, the unit a metrics calendar is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "MonthParts")]
pub struct MonthRef {
    year: i32,
    month: u32,
}

/// Wire shape of a `MonthRef`; deserialized values go through `MonthRef::new`.
#[derive(Deserialize)]
struct MonthParts {
    year: i32,
    month: u32,
}

impl TryFrom<MonthParts> for MonthRef {
    type Error = AnalyticsError;

    fn try_from(parts: MonthParts) -> Result<Self, Self::Error> {
        Self::new(parts.year, parts.month)
    }
}

impl MonthRef {
    pub fn new(year: i32, month: u32) -> Result<Self, AnalyticsError> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(AnalyticsError::InvalidMonth(format!("{}-{:02}", year, month)));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month in local time. This is the only clock read in the crate.
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        // Validated in the constructors.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn days_in_month(&self) -> u32 {
        self.first_day()
            .iter_days()
            .take_while(|date| date.month() == self.month)
            .count() as u32
    }

    /// Every date of the month, in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let first = self.first_day();
        first.iter_days().take(self.days_in_month() as usize)
    }

    /// Display label, e.g. `November 2025`.
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

impl fmt::Display for MonthRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthRef {
    type Err = AnalyticsError;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AnalyticsError::InvalidMonth(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}
