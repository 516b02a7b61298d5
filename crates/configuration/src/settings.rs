use core_types::{EvaluationModel, Platform};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The account every unknown or absent account id resolves to.
pub const DEFAULT_ACCOUNT_ID: &str = "acc-50k-starter-phase1";

/// Largest seed accepted from configuration.
pub const MAX_SEED: u32 = 1_000_000;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeskConfig {
    /// Account whose metrics are shown when no (or an unknown) account is selected.
    #[serde(default = "default_account_id")]
    pub default_account_id: String,
    /// Per-account seeds for the deterministic metrics generator.
    #[serde(default)]
    pub seeds: SeedTable,
    /// Models, sizes and platforms offered on the new-evaluation screen.
    #[serde(default)]
    pub catalog: EvaluationCatalog,
}

fn default_account_id() -> String {
    DEFAULT_ACCOUNT_ID.to_string()
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            default_account_id: default_account_id(),
            seeds: SeedTable::default(),
            catalog: EvaluationCatalog::default(),
        }
    }
}

/// Maps an account id to the small positive integer that seeds its sample metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeedTable(BTreeMap<String, u32>);

impl SeedTable {
    pub fn new(entries: impl IntoIterator<Item = (String, u32)>) -> Self {
        Self(entries.into_iter().collect())
    }

    pub fn seed_for(&self, account_id: &str) -> Option<u32> {
        self.0.get(account_id).copied()
    }

    pub fn contains(&self, account_id: &str) -> bool {
        self.0.contains_key(account_id)
    }

    pub fn account_ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(id, seed)| (id.as_str(), *seed))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SeedTable {
    fn default() -> Self {
        Self::new([
            ("acc-50k-starter-phase1".to_string(), 1),
            ("acc-100k-starter-phase2".to_string(), 2),
            ("acc-150k-funded-master".to_string(), 3),
            ("acc-25k-starter-archived".to_string(), 4),
        ])
    }
}

/// Everything a trader can pick from when starting a new evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationCatalog {
    pub models: Vec<ModelOption>,
    pub sizes: Vec<SizeOption>,
    pub platforms: Vec<PlatformOption>,
}

impl EvaluationCatalog {
    pub fn model(&self, value: EvaluationModel) -> Option<&ModelOption> {
        self.models.iter().find(|m| m.value == value)
    }

    pub fn size(&self, value: u32) -> Option<&SizeOption> {
        self.sizes.iter().find(|s| s.value == value)
    }

    pub fn platform(&self, value: Platform) -> Option<&PlatformOption> {
        self.platforms.iter().find(|p| p.value == value)
    }

    /// Display label for an account size, e.g. `$50,000`.
    pub fn size_label(&self, value: u32) -> Option<&str> {
        self.size(value).map(|s| s.label.as_str())
    }
}

impl Default for EvaluationCatalog {
    fn default() -> Self {
        Self {
            models: vec![
                ModelOption {
                    value: EvaluationModel::OneStep,
                    label: "Velocity Starter".to_string(),
                    description: "One-phase evaluation with trailing loss, daily guardrails, and quick funded upgrades.".to_string(),
                    badge: Some("Fast Track".to_string()),
                    coming_soon: false,
                },
                ModelOption {
                    value: EvaluationModel::TwoStep,
                    label: "Sim-Funded".to_string(),
                    description: "Two-step path mirroring our FT ruleset for traders who want the classic progression.".to_string(),
                    badge: None,
                    coming_soon: true,
                },
                ModelOption {
                    value: EvaluationModel::Funded,
                    label: "Velocity Funded".to_string(),
                    description: "Live trading with scaling, payouts, and Velocity-funded risk coverage.".to_string(),
                    badge: None,
                    coming_soon: false,
                },
            ],
            sizes: vec![
                SizeOption { value: 25_000, label: "$25,000".to_string(), base_price: dec!(85) },
                SizeOption { value: 50_000, label: "$50,000".to_string(), base_price: dec!(155) },
                SizeOption { value: 100_000, label: "$100,000".to_string(), base_price: dec!(230) },
                SizeOption { value: 150_000, label: "$150,000".to_string(), base_price: dec!(330) },
            ],
            platforms: vec![
                PlatformOption {
                    value: Platform::Tradovate,
                    label: "Tradovate".to_string(),
                    note: Some("Modern futures DOM, web, and mobile.".to_string()),
                },
                PlatformOption {
                    value: Platform::Rithmic,
                    label: "Rithmic".to_string(),
                    note: Some("Low-latency connectivity for active futures scalpers.".to_string()),
                },
                PlatformOption {
                    value: Platform::Cqg,
                    label: "CQG".to_string(),
                    note: Some("Desktop and mobile support with rich analytics.".to_string()),
                },
            ],
        }
    }
}

/// An evaluation model as offered in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelOption {
    pub value: EvaluationModel,
    pub label: String,
    pub description: String,
    #[serde(default)]
    pub badge: Option<String>,
    /// Listed but not purchasable yet.
    #[serde(default)]
    pub coming_soon: bool,
}

/// An account size and its one-time evaluation fee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeOption {
    pub value: u32,
    pub label: String,
    pub base_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformOption {
    pub value: Platform,
    pub label: String,
    #[serde(default)]
    pub note: Option<String>,
}
