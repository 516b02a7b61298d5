use crate::error::RosterError;
use core_types::{AccountStatus, TraderAccount};
use serde::Serialize;

/// Archives an active account or restores an archived one.
///
/// Archiving remembers the current status so restoring can put it back.
/// An account archived without a remembered status comes back as `Ongoing`.
/// Returns the account's new status.
pub fn toggle_archive(
    accounts: &mut [TraderAccount],
    id: &str,
) -> Result<AccountStatus, RosterError> {
    let account = accounts
        .iter_mut()
        .find(|account| account.id == id)
        .ok_or_else(|| RosterError::AccountNotFound(id.to_string()))?;

    if account.is_archived {
        let restored = account.status_before_archive.take().unwrap_or(
            if account.status == AccountStatus::Archived {
                AccountStatus::Ongoing
            } else {
                account.status
            },
        );
        account.is_archived = false;
        account.status = restored;
        tracing::info!(account_id = id, status = %restored, "Account restored from archive.");
    } else {
        account.status_before_archive = Some(account.status);
        account.status = AccountStatus::Archived;
        account.is_archived = true;
        tracing::info!(account_id = id, "Account archived.");
    }

    Ok(account.status)
}

/// Accounts listed on the overview, hiding archived ones unless asked.
pub fn visible_accounts(accounts: &[TraderAccount], show_archived: bool) -> Vec<&TraderAccount> {
    accounts
        .iter()
        .filter(|account| show_archived || !account.is_archived)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArchiveCounts {
    pub active: usize,
    pub archived: usize,
}

pub fn archive_counts(accounts: &[TraderAccount]) -> ArchiveCounts {
    let archived = accounts.iter().filter(|a| a.is_archived).count();
    ArchiveCounts {
        active: accounts.len() - archived,
        archived,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::mock_accounts;

    #[test]
    fn archive_then_restore_returns_original_status() {
        let mut accounts = mock_accounts();
        let status = toggle_archive(&mut accounts, "acc-100k-starter-phase2").unwrap();
        assert_eq!(status, AccountStatus::Archived);
        assert!(accounts[1].is_archived);
        assert_eq!(accounts[1].status_before_archive, Some(AccountStatus::Passed));

        let status = toggle_archive(&mut accounts, "acc-100k-starter-phase2").unwrap();
        assert_eq!(status, AccountStatus::Passed);
        assert!(!accounts[1].is_archived);
        assert_eq!(accounts[1].status_before_archive, None);
        assert_eq!(accounts, mock_accounts());
    }

    #[test]
    fn restoring_without_remembered_status_resumes_as_ongoing() {
        let mut accounts = mock_accounts();
        let status = toggle_archive(&mut accounts, "acc-25k-starter-archived").unwrap();
        assert_eq!(status, AccountStatus::Ongoing);
        assert!(!accounts[3].is_archived);
    }

    #[test]
    fn unknown_account_is_an_error() {
        let mut accounts = mock_accounts();
        let err = toggle_archive(&mut accounts, "acc-missing").unwrap_err();
        assert_eq!(err, RosterError::AccountNotFound("acc-missing".to_string()));
        assert_eq!(accounts, mock_accounts());
    }

    #[test]
    fn counts_and_visibility_follow_archive_flag() {
        let mut accounts = mock_accounts();
        assert_eq!(archive_counts(&accounts), ArchiveCounts { active: 3, archived: 1 });
        assert_eq!(visible_accounts(&accounts, false).len(), 3);
        assert_eq!(visible_accounts(&accounts, true).len(), 4);

        toggle_archive(&mut accounts, "acc-50k-starter-phase1").unwrap();
        assert_eq!(archive_counts(&accounts), ArchiveCounts { active: 2, archived: 2 });
        assert!(visible_accounts(&accounts, false).iter().all(|a| !a.is_archived));
    }
}
