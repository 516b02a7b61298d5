use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The complete metrics bundle rendered by the metrics and risk screen.
///
/// All numbers are sample data derived from the account's seed. The shape
/// (field names, units, ranges) is what the chart layer binds to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMetrics {
    /// The resolved account id. Unknown ids resolve to the default account.
    pub account_id: String,
    pub metrics_overview: MetricsOverview,
    pub trading_objectives: TradingObjectives,
    pub calendar_month: CalendarMonth,
    pub weekly_summaries: Vec<WeeklySummary>,
    pub short_long_analysis: ShortLongAnalysis,
    pub pnl_distribution_by_duration: Vec<DurationBucket>,
    pub pnl_by_trade_duration: Vec<TradeDurationPoint>,
    pub instrument_profit: Vec<InstrumentProfit>,
    pub instrument_volume: Vec<InstrumentVolume>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsOverview {
    pub avg_win: i64,
    /// Always negative.
    pub avg_loss: i64,
    /// Fraction between 0 and 1.
    pub win_rate: Decimal,
    pub profit_factor: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingObjectives {
    pub profitable_days: ProfitableDaysObjective,
    pub trailing_loss: TrailingLossObjective,
    pub hft_profit: HftProfitObjective,
    pub max_daily_loss: MaxDailyLossObjective,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitableDaysObjective {
    pub required: u32,
    pub completed: u32,
}

impl ProfitableDaysObjective {
    pub fn progress(&self) -> Decimal {
        ratio(Decimal::from(self.completed), Decimal::from(self.required))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailingLossObjective {
    pub starting_equity: i64,
    pub remaining_buffer: i64,
}

impl TrailingLossObjective {
    /// Share of starting equity still available before the trailing loss is hit.
    pub fn buffer_ratio(&self) -> Decimal {
        ratio(Decimal::from(self.remaining_buffer), Decimal::from(self.starting_equity))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HftProfitObjective {
    pub value: Decimal,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxDailyLossObjective {
    pub limit: i64,
    pub current: i64,
}

impl MaxDailyLossObjective {
    pub fn usage(&self) -> Decimal {
        ratio(Decimal::from(self.current), Decimal::from(self.limit))
    }
}

/// `numerator / denominator` clamped to `[0, 1]`; zero when the denominator is zero.
fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    (numerator / denominator).clamp(Decimal::ZERO, Decimal::ONE)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMonth {
    pub month_label: String,
    pub days: Vec<CalendarDay>,
}

/// One calendar day. `pnl` is `None` on weekends: there was no session,
/// which is not the same as a flat trading day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub pnl: Option<i64>,
}

impl CalendarDay {
    pub fn is_session(&self) -> bool {
        self.pnl.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummary {
    pub label: String,
    /// e.g. `Nov 1 – Nov 7`
    pub range: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub pnl: i64,
    pub trades: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortLongAnalysis {
    pub short: SideStats,
    pub long: SideStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideStats {
    pub wins: u32,
    pub win_rate: Decimal,
    pub pnl: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationBucket {
    pub bucket: String,
    pub pnl: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeDurationPoint {
    pub id: String,
    pub label: String,
    pub duration_seconds: u32,
    pub pnl: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentProfit {
    pub symbol: String,
    pub pnl: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentVolume {
    pub symbol: String,
    pub volume: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn progress_ratios_are_clamped() {
        let days = ProfitableDaysObjective { required: 10, completed: 8 };
        assert_eq!(days.progress(), dec!(0.8));

        let over = ProfitableDaysObjective { required: 10, completed: 14 };
        assert_eq!(over.progress(), Decimal::ONE);

        let loss = MaxDailyLossObjective { limit: 4700, current: 980 };
        assert!(loss.usage() > dec!(0.2) && loss.usage() < dec!(0.21));
    }

    #[test]
    fn zero_denominator_yields_zero() {
        let days = ProfitableDaysObjective { required: 0, completed: 3 };
        assert_eq!(days.progress(), Decimal::ZERO);
        let trailing = TrailingLossObjective { starting_equity: 0, remaining_buffer: 10 };
        assert_eq!(trailing.buffer_ratio(), Decimal::ZERO);
    }

    #[test]
    fn weekend_days_serialize_as_null() {
        let day = CalendarDay {
            date: NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
            pnl: None,
        };
        let json = serde_json::to_value(day).unwrap();
        assert_eq!(json["pnl"], serde_json::Value::Null);
        assert_eq!(json["date"], "2025-11-01");
        assert!(!day.is_session());
    }
}
