use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The evaluation path an account was purchased under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvaluationModel {
    OneStep,
    TwoStep,
    Funded,
}

impl EvaluationModel {
    pub const ALL: [EvaluationModel; 3] = [Self::OneStep, Self::TwoStep, Self::Funded];

    /// The marketing name shown on cards and in the checkout form.
    pub fn label(&self) -> &'static str {
        match self {
            EvaluationModel::OneStep => "Velocity Starter",
            EvaluationModel::TwoStep => "Sim-Funded",
            EvaluationModel::Funded => "Velocity Funded",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationModel::OneStep => "one-step",
            EvaluationModel::TwoStep => "two-step",
            EvaluationModel::Funded => "funded",
        }
    }

    /// Funded accounts trade live capital; everything else is still an evaluation.
    pub fn is_funded(&self) -> bool {
        matches!(self, EvaluationModel::Funded)
    }
}

impl fmt::Display for EvaluationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvaluationModel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| CoreError::InvalidInput("evaluation model".to_string(), s.to_string()))
    }
}

/// The execution platform an account is provisioned on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    Tradovate,
    Rithmic,
    Cqg,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Self::Tradovate, Self::Rithmic, Self::Cqg];

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Tradovate => "Tradovate",
            Platform::Rithmic => "Rithmic",
            Platform::Cqg => "CQG",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Tradovate => "tradovate",
            Platform::Rithmic => "rithmic",
            Platform::Cqg => "cqg",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|platform| platform.as_str() == s)
            .ok_or_else(|| CoreError::InvalidInput("platform".to_string(), s.to_string()))
    }
}

/// Lifecycle status of a trader account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccountStatus {
    New,
    Ongoing,
    Passed,
    Live,
    Archived,
}

impl AccountStatus {
    pub const ALL: [AccountStatus; 5] = [
        Self::New,
        Self::Ongoing,
        Self::Passed,
        Self::Live,
        Self::Archived,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AccountStatus::New => "New",
            AccountStatus::Ongoing => "Ongoing",
            AccountStatus::Passed => "Passed",
            AccountStatus::Live => "Live",
            AccountStatus::Archived => "Archived",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::New => "new",
            AccountStatus::Ongoing => "ongoing",
            AccountStatus::Passed => "passed",
            AccountStatus::Live => "live",
            AccountStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::InvalidInput("account status".to_string(), s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_same_strings_it_serializes() {
        for model in EvaluationModel::ALL {
            let json = serde_json::to_string(&model).unwrap();
            assert_eq!(json, format!("\"{}\"", model.as_str()));
            assert_eq!(model.as_str().parse::<EvaluationModel>().unwrap(), model);
        }
        assert_eq!("cqg".parse::<Platform>().unwrap(), Platform::Cqg);
        assert_eq!("archived".parse::<AccountStatus>().unwrap(), AccountStatus::Archived);
    }

    #[test]
    fn rejects_unknown_values() {
        let err = "three-step".parse::<EvaluationModel>().unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidInput("evaluation model".to_string(), "three-step".to_string())
        );
        assert!("ninjatrader".parse::<Platform>().is_err());
    }

    #[test]
    fn only_the_funded_model_is_funded() {
        assert!(EvaluationModel::Funded.is_funded());
        assert!(!EvaluationModel::OneStep.is_funded());
        assert!(!EvaluationModel::TwoStep.is_funded());
    }
}
