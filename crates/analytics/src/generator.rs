use crate::calendar::{generate_calendar, summarize_weeks};
use crate::month::MonthRef;
use crate::report::{
    AccountMetrics, DurationBucket, HftProfitObjective, InstrumentProfit, InstrumentVolume,
    MaxDailyLossObjective, MetricsOverview, ProfitableDaysObjective, ShortLongAnalysis, SideStats,
    TradeDurationPoint, TradingObjectives, TrailingLossObjective,
};
use configuration::{DEFAULT_ACCOUNT_ID, DeskConfig, SeedTable};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Seed used when even the default account is missing from the seed table.
const FALLBACK_SEED: u32 = 1;

/// Maps `seed` to a stable integer in `[min, max]`.
///
/// This is a trigonometric hash for display data, not a random number
/// generator: the output is not uniformly distributed and must never be used
/// for anything but sample values. The same `(seed, min, max)` always yields
/// the same integer.
pub fn deterministic_number(seed: i64, min: i64, max: i64) -> i64 {
    let s = seed as f64;
    let normalized = ((s * 17.23).sin() + (s * 3.7).cos()).abs() % 1.0;
    let scaled = min as f64 + (max - min) as f64 * normalized;
    // Half-up rounding.
    (scaled + 0.5).floor() as i64
}

/// Builds the sample metrics bundle for an account.
#[derive(Debug, Clone)]
pub struct MetricsGenerator {
    seeds: SeedTable,
    default_account_id: String,
}

impl MetricsGenerator {
    pub fn new(seeds: SeedTable, default_account_id: impl Into<String>) -> Self {
        Self {
            seeds,
            default_account_id: default_account_id.into(),
        }
    }

    pub fn from_config(config: &DeskConfig) -> Self {
        Self::new(config.seeds.clone(), config.default_account_id.clone())
    }

    pub fn default_account_id(&self) -> &str {
        &self.default_account_id
    }

    pub fn seeds(&self) -> &SeedTable {
        &self.seeds
    }

    /// Resolves an account id to the id whose metrics will be shown and its seed.
    ///
    /// Absent or unknown ids resolve to the default account.
    pub fn resolve<'a>(&'a self, account_id: Option<&'a str>) -> (&'a str, u32) {
        if let Some(id) = account_id {
            if let Some(seed) = self.seeds.seed_for(id) {
                return (id, seed);
            }
            tracing::warn!(account_id = id, "Unknown account, using default account metrics.");
        }
        let seed = self
            .seeds
            .seed_for(&self.default_account_id)
            .unwrap_or(FALLBACK_SEED);
        (self.default_account_id.as_str(), seed)
    }

    /// Computes the full metrics bundle for `account_id` in `month`.
    ///
    /// Never fails: unknown ids fall back to the default account. Calling this
    /// twice with the same arguments returns equal values.
    pub fn compute(&self, account_id: Option<&str>, month: MonthRef) -> AccountMetrics {
        let (resolved_id, seed) = self.resolve(account_id);
        tracing::debug!(account_id = resolved_id, seed, %month, "Generating account metrics.");

        let calendar_month = generate_calendar(seed, month);
        let weekly_summaries = summarize_weeks(&calendar_month);
        let s = i64::from(seed);

        AccountMetrics {
            account_id: resolved_id.to_string(),
            metrics_overview: overview(s),
            trading_objectives: objectives(s),
            calendar_month,
            weekly_summaries,
            short_long_analysis: short_long(s),
            pnl_distribution_by_duration: duration_distribution(s),
            pnl_by_trade_duration: trade_durations(s),
            instrument_profit: instrument_profit(s),
            instrument_volume: instrument_volume(s),
        }
    }
}

impl Default for MetricsGenerator {
    fn default() -> Self {
        Self::new(SeedTable::default(), DEFAULT_ACCOUNT_ID)
    }
}

fn overview(s: i64) -> MetricsOverview {
    MetricsOverview {
        avg_win: 320 + deterministic_number(s, 10, 120),
        avg_loss: -(60 + deterministic_number(s, 5, 45)),
        win_rate: dec!(0.6) + Decimal::from(deterministic_number(s, 1, 10)) / dec!(100),
        profit_factor: dec!(6) + Decimal::from(deterministic_number(s, 1, 30)) / dec!(10),
    }
}

fn objectives(s: i64) -> TradingObjectives {
    let cycle = s % 3;
    TradingObjectives {
        profitable_days: ProfitableDaysObjective {
            required: 10,
            completed: 7 + cycle as u32,
        },
        trailing_loss: TrailingLossObjective {
            starting_equity: 150_000 + s * 5_000,
            remaining_buffer: 5_000 + s * 400,
        },
        hft_profit: HftProfitObjective {
            value: dec!(0.6) + Decimal::from(cycle) * dec!(0.08),
            passed: true,
        },
        max_daily_loss: MaxDailyLossObjective {
            limit: 4_500 + s * 200,
            current: 900 + s * 80,
        },
    }
}

/// Clamps a derived count into `u32`.
fn count(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

fn short_long(s: i64) -> ShortLongAnalysis {
    let d = Decimal::from(s);
    ShortLongAnalysis {
        short: SideStats {
            wins: count(12 + s * 2),
            win_rate: dec!(0.58) + d * dec!(0.03),
            pnl: 2_800 + s * 250,
        },
        long: SideStats {
            wins: count(15 + s * 2),
            win_rate: dec!(0.64) + d * dec!(0.02),
            pnl: 3_400 + s * 180,
        },
    }
}

fn duration_distribution(s: i64) -> Vec<DurationBucket> {
    [
        ("<30s", -80 - s * 10),
        ("30s\u{2013}1m", 420 + s * 40),
        ("1\u{2013}2m", 760 + s * 60),
        ("2\u{2013}3m", 530 + s * 35),
        (">3m", 120 + s * 10),
    ]
    .into_iter()
    .map(|(bucket, pnl)| DurationBucket {
        bucket: bucket.to_string(),
        pnl,
    })
    .collect()
}

fn trade_durations(s: i64) -> Vec<TradeDurationPoint> {
    [
        (35, 180 + s * 20),
        (65, 320 + s * 30),
        (95, 510 + s * 25),
        (140, -120 + s * 15),
        (190, 720 + s * 40),
        (240, 160 + s * 18),
        (300, 40 + s * 12),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (duration_seconds, pnl))| TradeDurationPoint {
        id: format!("t{}-{}", index + 1, s),
        label: format!("T{}", index + 1),
        duration_seconds,
        pnl,
    })
    .collect()
}

const INSTRUMENTS: [&str; 4] = ["NQZ5", "MNQZ5", "ESZ5", "CLZ5"];

fn instrument_profit(s: i64) -> Vec<InstrumentProfit> {
    let pnl = [3_200 + s * 220, 980 + s * 80, 1_440 + s * 120, 120 + s * 40];
    INSTRUMENTS
        .iter()
        .zip(pnl)
        .map(|(symbol, pnl)| InstrumentProfit {
            symbol: symbol.to_string(),
            pnl,
        })
        .collect()
}

fn instrument_volume(s: i64) -> Vec<InstrumentVolume> {
    let volume = [30 + s * 6, 24 + s * 4, 18 + s * 3, 14 + s * 2];
    INSTRUMENTS
        .iter()
        .zip(volume)
        .map(|(symbol, volume)| InstrumentVolume {
            symbol: symbol.to_string(),
            volume,
        })
        .collect()
}
