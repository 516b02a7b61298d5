//! # Velocity Desk Analytics
//!
//! Deterministic sample metrics for the trader dashboard.
//!
//! ## Architectural Principles
//!
//! - **Pure Calculation:** `MetricsGenerator::compute` is a function of the account's
//!   seed and an explicit calendar month. It performs no I/O and holds no global state.
//! - **Explicit Caching:** Callers that want to reuse results own a `MetricsCache`
//!   keyed by (account id, month). Nothing is computed at load time.
//!
//! ## Public API
//!
//! - `MetricsGenerator`: resolves an account to its seed and builds `AccountMetrics`.
//! - `MonthRef`: the calendar month a calendar is generated for.
//! - `summary`: derivations the metrics screen computes from a calendar.

// Declare the modules that constitute this crate.
pub mod cache;
pub mod calendar;
pub mod error;
pub mod generator;
pub mod month;
pub mod report;
pub mod summary;

// Re-export the key components to create a clean, public-facing API.
pub use cache::MetricsCache;
pub use error::AnalyticsError;
pub use generator::{MetricsGenerator, deterministic_number};
pub use month::MonthRef;
pub use report::{
    AccountMetrics, CalendarDay, CalendarMonth, DurationBucket, InstrumentProfit,
    InstrumentVolume, MetricsOverview, SideStats, ShortLongAnalysis, TradeDurationPoint,
    TradingObjectives, WeeklySummary,
};
pub use summary::{CalendarCell, calendar_cells, profitable_days, total_pnl};
