use crate::archive::{ArchiveCounts, archive_counts, toggle_archive, visible_accounts};
use crate::error::RosterError;
use core_types::TraderAccount;
use serde::{Deserialize, Serialize};

/// Which account the evaluation overview is showing details for.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "accountId", rename_all = "kebab-case")]
pub enum Selection {
    #[default]
    NoSelection,
    Selected(String),
}

impl Selection {
    pub fn account_id(&self) -> Option<&str> {
        match self {
            Selection::NoSelection => None,
            Selection::Selected(id) => Some(id),
        }
    }
}

/// Card density on the overview list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    Compact,
    #[default]
    Expanded,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Compact => ViewMode::Expanded,
            ViewMode::Expanded => ViewMode::Compact,
        }
    }
}

/// Repairs a selection after the account list or the archive filter changed.
///
/// A selection that still exists and is visible is kept. Otherwise the first
/// non-archived account is selected; if every account is archived, the first
/// account is selected when archived accounts are shown, and nothing otherwise.
/// The result is stable: reconciling it again returns it unchanged.
pub fn reconcile_selection(
    accounts: &[TraderAccount],
    selection: &Selection,
    show_archived: bool,
) -> Selection {
    if let Selection::Selected(id) = selection {
        let still_visible = accounts
            .iter()
            .any(|account| &account.id == id && (show_archived || !account.is_archived));
        if still_visible {
            return selection.clone();
        }
    }

    accounts
        .iter()
        .find(|account| !account.is_archived)
        .or_else(|| if show_archived { accounts.first() } else { None })
        .map(|account| Selection::Selected(account.id.clone()))
        .unwrap_or_default()
}

/// User interactions on the evaluation overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverviewAction {
    Select(String),
    ToggleArchive(String),
    SetViewMode(ViewMode),
    SetShowArchived(bool),
}

/// Session state of the evaluation overview screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewState {
    accounts: Vec<TraderAccount>,
    selection: Selection,
    view_mode: ViewMode,
    show_archived: bool,
}

impl OverviewState {
    pub fn new(accounts: Vec<TraderAccount>) -> Self {
        let selection = reconcile_selection(&accounts, &Selection::NoSelection, false);
        Self {
            accounts,
            selection,
            view_mode: ViewMode::default(),
            show_archived: false,
        }
    }

    /// Applies one interaction, then repairs the selection.
    ///
    /// Failed actions leave the state untouched.
    pub fn apply(&mut self, action: OverviewAction) -> Result<(), RosterError> {
        match action {
            OverviewAction::Select(id) => {
                if !self.accounts.iter().any(|account| account.id == id) {
                    return Err(RosterError::AccountNotFound(id));
                }
                self.selection = Selection::Selected(id);
            }
            OverviewAction::ToggleArchive(id) => {
                toggle_archive(&mut self.accounts, &id)?;
            }
            OverviewAction::SetViewMode(mode) => self.view_mode = mode,
            OverviewAction::SetShowArchived(show) => self.show_archived = show,
        }

        let repaired = reconcile_selection(&self.accounts, &self.selection, self.show_archived);
        if repaired != self.selection {
            tracing::debug!(from = ?self.selection, to = ?repaired, "Selection repaired.");
            self.selection = repaired;
        }
        Ok(())
    }

    pub fn accounts(&self) -> &[TraderAccount] {
        &self.accounts
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn show_archived(&self) -> bool {
        self.show_archived
    }

    pub fn selected_account(&self) -> Option<&TraderAccount> {
        let id = self.selection.account_id()?;
        self.accounts.iter().find(|account| account.id == id)
    }

    pub fn visible_accounts(&self) -> Vec<&TraderAccount> {
        visible_accounts(&self.accounts, self.show_archived)
    }

    pub fn archive_counts(&self) -> ArchiveCounts {
        archive_counts(&self.accounts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::mock_accounts;
    use core_types::AccountStatus;

    fn selected(id: &str) -> Selection {
        Selection::Selected(id.to_string())
    }

    #[test]
    fn starts_on_the_first_active_account() {
        let state = OverviewState::new(mock_accounts());
        assert_eq!(state.selection(), &selected("acc-50k-starter-phase1"));
        assert_eq!(state.view_mode(), ViewMode::Expanded);
        assert!(!state.show_archived());
        assert_eq!(state.visible_accounts().len(), 3);
    }

    #[test]
    fn archiving_the_selection_moves_to_next_active() {
        let mut state = OverviewState::new(mock_accounts());
        state
            .apply(OverviewAction::ToggleArchive("acc-50k-starter-phase1".to_string()))
            .unwrap();
        assert_eq!(state.selection(), &selected("acc-100k-starter-phase2"));
        assert_eq!(state.archive_counts(), ArchiveCounts { active: 2, archived: 2 });
    }

    #[test]
    fn archived_selection_survives_while_archive_is_shown() {
        let mut state = OverviewState::new(mock_accounts());
        state.apply(OverviewAction::SetShowArchived(true)).unwrap();
        state
            .apply(OverviewAction::Select("acc-25k-starter-archived".to_string()))
            .unwrap();
        assert_eq!(state.selection(), &selected("acc-25k-starter-archived"));
        assert_eq!(state.selected_account().unwrap().status, AccountStatus::Archived);

        state.apply(OverviewAction::SetShowArchived(false)).unwrap();
        assert_eq!(state.selection(), &selected("acc-50k-starter-phase1"));
    }

    #[test]
    fn selecting_unknown_account_fails_without_change() {
        let mut state = OverviewState::new(mock_accounts());
        let before = state.clone();
        let err = state
            .apply(OverviewAction::Select("acc-nope".to_string()))
            .unwrap_err();
        assert_eq!(err, RosterError::AccountNotFound("acc-nope".to_string()));
        assert_eq!(state, before);
    }

    #[test]
    fn all_archived_falls_back_by_visibility() {
        let mut accounts = mock_accounts();
        for account in &mut accounts {
            account.is_archived = true;
        }
        assert_eq!(
            reconcile_selection(&accounts, &Selection::NoSelection, false),
            Selection::NoSelection
        );
        assert_eq!(
            reconcile_selection(&accounts, &Selection::NoSelection, true),
            selected("acc-50k-starter-phase1")
        );
    }

    #[test]
    fn reconciliation_is_a_fixed_point() {
        let accounts = mock_accounts();
        let inputs = [
            Selection::NoSelection,
            selected("acc-25k-starter-archived"),
            selected("acc-150k-funded-master"),
            selected("acc-gone"),
        ];
        for show_archived in [false, true] {
            for input in &inputs {
                let once = reconcile_selection(&accounts, input, show_archived);
                let twice = reconcile_selection(&accounts, &once, show_archived);
                assert_eq!(once, twice);
            }
        }
        assert_eq!(reconcile_selection(&[], &selected("acc-gone"), true), Selection::NoSelection);
    }

    #[test]
    fn view_mode_toggles() {
        let mut state = OverviewState::new(mock_accounts());
        state
            .apply(OverviewAction::SetViewMode(state.view_mode().toggled()))
            .unwrap();
        assert_eq!(state.view_mode(), ViewMode::Compact);
        assert_eq!(ViewMode::Compact.toggled(), ViewMode::Expanded);
    }
}
