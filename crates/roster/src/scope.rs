use crate::error::RosterError;
use core_types::TraderAccount;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account filter on the metrics and risk screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccountScope {
    #[default]
    All,
    /// Every account that is not funded yet.
    Evaluation,
    Funded,
}

impl AccountScope {
    pub fn includes(&self, account: &TraderAccount) -> bool {
        match self {
            AccountScope::All => true,
            AccountScope::Evaluation => !account.is_funded(),
            AccountScope::Funded => account.is_funded(),
        }
    }
}

impl fmt::Display for AccountScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccountScope::All => "all",
            AccountScope::Evaluation => "evaluation",
            AccountScope::Funded => "funded",
        };
        f.write_str(name)
    }
}

impl FromStr for AccountScope {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(AccountScope::All),
            "evaluation" => Ok(AccountScope::Evaluation),
            "funded" => Ok(AccountScope::Funded),
            other => Err(RosterError::InvalidScope(other.to_string())),
        }
    }
}

pub fn scoped_accounts(accounts: &[TraderAccount], scope: AccountScope) -> Vec<&TraderAccount> {
    accounts.iter().filter(|account| scope.includes(account)).collect()
}

/// Account picker on the metrics screen: one account, or the aggregate view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricsSelection {
    #[default]
    All,
    Account(String),
}

/// Keeps the picked account inside the current scope.
///
/// An account outside the scope is replaced by the first account in scope,
/// or by the aggregate view when the scope is empty.
pub fn reconcile_metrics_selection(
    accounts: &[TraderAccount],
    scope: AccountScope,
    selection: &MetricsSelection,
) -> MetricsSelection {
    let MetricsSelection::Account(id) = selection else {
        return MetricsSelection::All;
    };

    let in_scope = scoped_accounts(accounts, scope);
    if in_scope.iter().any(|account| &account.id == id) {
        return selection.clone();
    }
    in_scope
        .first()
        .map(|account| MetricsSelection::Account(account.id.clone()))
        .unwrap_or_default()
}

/// The account id to feed the metrics generator.
///
/// `None` (aggregate view, or an id not on the roster) means the generator's
/// default account.
pub fn metrics_target<'a>(
    accounts: &'a [TraderAccount],
    selection: &MetricsSelection,
) -> Option<&'a str> {
    match selection {
        MetricsSelection::All => None,
        MetricsSelection::Account(id) => accounts
            .iter()
            .find(|account| &account.id == id)
            .map(|account| account.id.as_str()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricsScreenAction {
    SetScope(AccountScope),
    Select(MetricsSelection),
}

/// Session state of the metrics and risk screen.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MetricsScreenState {
    scope: AccountScope,
    selection: MetricsSelection,
}

impl MetricsScreenState {
    /// Opens the screen, optionally preselecting an account (e.g. from an `accountId` link).
    pub fn new(accounts: &[TraderAccount], initial_account: Option<&str>) -> Self {
        let selection = initial_account
            .map(|id| MetricsSelection::Account(id.to_string()))
            .unwrap_or_default();
        let scope = AccountScope::default();
        Self {
            scope,
            selection: reconcile_metrics_selection(accounts, scope, &selection),
        }
    }

    pub fn apply(&mut self, accounts: &[TraderAccount], action: MetricsScreenAction) {
        match action {
            MetricsScreenAction::SetScope(scope) => self.scope = scope,
            MetricsScreenAction::Select(selection) => self.selection = selection,
        }
        self.selection = reconcile_metrics_selection(accounts, self.scope, &self.selection);
    }

    pub fn scope(&self) -> AccountScope {
        self.scope
    }

    pub fn selection(&self) -> &MetricsSelection {
        &self.selection
    }

    pub fn target<'a>(&self, accounts: &'a [TraderAccount]) -> Option<&'a str> {
        metrics_target(accounts, &self.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::mock_accounts;

    fn account(id: &str) -> MetricsSelection {
        MetricsSelection::Account(id.to_string())
    }

    #[test]
    fn scopes_split_on_funded_model() {
        let accounts = mock_accounts();
        assert_eq!(scoped_accounts(&accounts, AccountScope::All).len(), 4);
        let funded = scoped_accounts(&accounts, AccountScope::Funded);
        assert_eq!(funded.len(), 1);
        assert_eq!(funded[0].id, "acc-150k-funded-master");
        assert_eq!(scoped_accounts(&accounts, AccountScope::Evaluation).len(), 3);
    }

    #[test]
    fn out_of_scope_selection_moves_to_first_in_scope() {
        let accounts = mock_accounts();
        let mut state = MetricsScreenState::new(&accounts, Some("acc-100k-starter-phase2"));
        assert_eq!(state.selection(), &account("acc-100k-starter-phase2"));

        state.apply(&accounts, MetricsScreenAction::SetScope(AccountScope::Funded));
        assert_eq!(state.selection(), &account("acc-150k-funded-master"));
        assert_eq!(state.target(&accounts), Some("acc-150k-funded-master"));
    }

    #[test]
    fn empty_scope_falls_back_to_aggregate() {
        let accounts: Vec<_> = mock_accounts().into_iter().filter(|a| !a.is_funded()).collect();
        let selection = reconcile_metrics_selection(
            &accounts,
            AccountScope::Funded,
            &account("acc-50k-starter-phase1"),
        );
        assert_eq!(selection, MetricsSelection::All);
    }

    #[test]
    fn aggregate_and_unknown_ids_target_the_default_account() {
        let accounts = mock_accounts();
        let state = MetricsScreenState::new(&accounts, None);
        assert_eq!(state.selection(), &MetricsSelection::All);
        assert_eq!(state.target(&accounts), None);

        // An unknown id is outside every scope and falls back to the first account.
        let state = MetricsScreenState::new(&accounts, Some("acc-unknown"));
        assert_eq!(state.selection(), &account("acc-50k-starter-phase1"));
        assert_eq!(metrics_target(&accounts, &account("acc-unknown")), None);
    }

    #[test]
    fn parses_scope_names() {
        assert_eq!("funded".parse::<AccountScope>().unwrap(), AccountScope::Funded);
        assert_eq!(AccountScope::Evaluation.to_string(), "evaluation");
        assert_eq!(
            "live".parse::<AccountScope>().unwrap_err(),
            RosterError::InvalidScope("live".to_string())
        );
    }
}
