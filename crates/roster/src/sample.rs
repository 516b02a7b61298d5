use chrono::NaiveDate;
use core_types::{AccountStatus, EvaluationModel, Platform, TraderAccount};
use rust_decimal_macros::dec;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The sample roster shown on the trader portal.
///
/// Ids match the metrics seed table, so every sample account has its own metrics.
pub fn mock_accounts() -> Vec<TraderAccount> {
    vec![
        TraderAccount {
            id: "acc-50k-starter-phase1".to_string(),
            label: "50K Velocity Starter \u{2013} Student".to_string(),
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
            created_at: date(2025, 11, 18),
            platform: Platform::Tradovate,
            status_before_archive: None,
        },
        TraderAccount {
            id: "acc-100k-starter-phase2".to_string(),
            label: "100K Velocity Starter \u{2013} Pro".to_string(),
            model: EvaluationModel::TwoStep,
            phase: "Phase 2".to_string(),
            size: dec!(100000),
            balance: dec!(105700),
            profit_target: dec!(6000),
            profit_target_progress: dec!(0.95),
            pnl: dec!(5700),
            pnl_percent: dec!(5.7),
            status: AccountStatus::Passed,
            trading_disabled: false,
            awaiting_upgrade: true,
            is_archived: false,
            created_at: date(2025, 10, 28),
            platform: Platform::Cqg,
            status_before_archive: None,
        },
        TraderAccount {
            id: "acc-150k-funded-master".to_string(),
            label: "150K Velocity Funded \u{2013} Master".to_string(),
            model: EvaluationModel::Funded,
            phase: "Live".to_string(),
            size: dec!(150000),
            balance: dec!(157200),
            profit_target: dec!(9000),
            profit_target_progress: dec!(0.85),
            pnl: dec!(7200),
            pnl_percent: dec!(4.8),
            status: AccountStatus::Live,
            trading_disabled: false,
            awaiting_upgrade: false,
            is_archived: false,
            created_at: date(2025, 10, 12),
            platform: Platform::Rithmic,
            status_before_archive: None,
        },
        TraderAccount {
            id: "acc-25k-starter-archived".to_string(),
            label: "25K Velocity Starter \u{2013} Archived".to_string(),
            model: EvaluationModel::OneStep,
            phase: "Phase 1".to_string(),
            size: dec!(25000),
            balance: dec!(24800),
            profit_target: dec!(1500),
            profit_target_progress: dec!(0.52),
            pnl: dec!(-200),
            pnl_percent: dec!(-0.8),
            status: AccountStatus::Archived,
            trading_disabled: true,
            awaiting_upgrade: false,
            is_archived: true,
            created_at: date(2025, 9, 5),
            platform: Platform::Tradovate,
            status_before_archive: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_ids_are_unique() {
        let accounts = mock_accounts();
        let ids: HashSet<_> = accounts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), accounts.len());
    }

    #[test]
    fn archived_flag_matches_status() {
        for account in mock_accounts() {
            assert_eq!(account.is_archived, account.status == AccountStatus::Archived);
        }
    }

    #[test]
    fn balances_reflect_pnl() {
        for account in mock_accounts() {
            assert_eq!(account.balance - account.size, account.pnl, "{}", account.id);
        }
    }
}
