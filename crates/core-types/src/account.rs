use crate::enums::{AccountStatus, EvaluationModel, Platform};
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A trader's evaluation or funded account as shown on the dashboard.
///
/// These are sample records, not ledger entries: balances and P&L are
/// display values and are never reconciled against trades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraderAccount {
    pub id: String,
    pub label: String,
    pub model: EvaluationModel,
    pub phase: String,
    /// Notional account size (e.g., 50000 for a 50K account).
    pub size: Decimal,
    pub balance: Decimal,
    pub profit_target: Decimal,
    /// Fraction of the profit target reached, 0.0 to 1.0.
    pub profit_target_progress: Decimal,
    pub pnl: Decimal,
    /// P&L relative to size, already expressed in percent (e.g., -0.44 means -0.44%).
    pub pnl_percent: Decimal,
    pub status: AccountStatus,
    pub trading_disabled: bool,
    /// Passed the evaluation and waiting to be upgraded to a funded account.
    pub awaiting_upgrade: bool,
    pub is_archived: bool,
    pub created_at: NaiveDate,
    pub platform: Platform,
    /// The status to restore when an archived account is brought back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_before_archive: Option<AccountStatus>,
}

impl TraderAccount {
    pub fn is_funded(&self) -> bool {
        self.model.is_funded()
    }

    /// Profit target progress as a whole percentage, as shown on progress bars.
    pub fn profit_target_percent(&self) -> Decimal {
        (self.profit_target_progress * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }

    pub fn is_profitable(&self) -> bool {
        !self.pnl.is_sign_negative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> TraderAccount {
        TraderAccount {
            id: "acc-test".to_string(),
            label: "50K Velocity Starter".to_string(),
            model: EvaluationModel::OneStep,
            phase: "Phase 1".to_string(),
            size: dec!(50000),
            balance: dec!(49780),
            profit_target: dec!(2500),
            profit_target_progress: dec!(0.18),
            pnl: dec!(-220),
            pnl_percent: dec!(-0.44),
            status: AccountStatus::New,
            trading_disabled: false,
            awaiting_upgrade: false,
            is_archived: false,
            created_at: NaiveDate::from_ymd_opt(2025, 11, 18).unwrap(),
            platform: Platform::Tradovate,
            status_before_archive: None,
        }
    }

    #[test]
    fn progress_percent_is_rounded() {
        let mut account = sample();
        assert_eq!(account.profit_target_percent(), dec!(18));
        account.profit_target_progress = dec!(0.955);
        assert_eq!(account.profit_target_percent(), dec!(96));
    }

    #[test]
    fn serializes_in_camel_case_without_restore_status() {
        let value = serde_json::to_value(sample()).unwrap();
        let progress = value["profitTargetProgress"].as_f64().unwrap();
        assert!((progress - 0.18).abs() < 1e-12);
        assert_eq!(value["model"], "one-step");
        assert_eq!(value["createdAt"], "2025-11-18");
        assert!(value.get("statusBeforeArchive").is_none());
    }

    #[test]
    fn negative_pnl_is_not_profitable() {
        let account = sample();
        assert!(!account.is_profitable());
        assert!(!account.is_funded());
    }
}
