use crate::generator::MetricsGenerator;
use crate::month::MonthRef;
use crate::report::AccountMetrics;
use std::collections::HashMap;

/// Memoizes generated metrics per (resolved account id, month).
///
/// The generator never caches on its own; callers that render the same
/// account repeatedly hold one of these and pass it the generator.
#[derive(Debug, Default)]
pub struct MetricsCache {
    entries: HashMap<(String, MonthRef), AccountMetrics>,
}

impl MetricsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(
        &mut self,
        generator: &MetricsGenerator,
        account_id: Option<&str>,
        month: MonthRef,
    ) -> &AccountMetrics {
        let (resolved_id, _) = generator.resolve(account_id);
        let key = (resolved_id.to_string(), month);

        if self.entries.contains_key(&key) {
            tracing::debug!(account_id = resolved_id, %month, "Metrics cache hit.");
        }
        self.entries
            .entry(key)
            .or_insert_with(|| generator.compute(Some(resolved_id), month))
    }

    /// Drops every entry that is not for `month`, e.g. after the month rolls over.
    pub fn retain_month(&mut self, month: MonthRef) {
        self.entries.retain(|(_, cached), _| *cached == month);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
