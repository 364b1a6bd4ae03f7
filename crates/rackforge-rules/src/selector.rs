//! The [`SettingsSelector`] merges the settings of every satisfied rule entry.

use serde_json::{Map, Value};

use crate::condition::PropertySet;
use crate::rule::RuleEntry;

/// Select the settings that apply to a machine.
///
/// Entries are evaluated in rule-set order and the settings of each satisfied
/// entry are merged into the result, later entries overwriting earlier ones.
/// A non-object `rule_set` yields an empty result; a non-object `properties`
/// is treated as an empty property set. Malformed entries are skipped.
pub fn select_applicable_settings(rule_set: &Value, properties: &Value) -> Map<String, Value> {
    let properties = PropertySet::from_value(properties);
    let mut selected = Map::new();

    for entry in satisfied_entries(rule_set, &properties) {
        if let Some(settings) = entry.settings() {
            for (key, value) in settings {
                selected.insert(key.clone(), value.clone());
            }
        }
    }

    selected
}

fn satisfied_entries<'a>(
    rule_set: &'a Value,
    properties: &PropertySet<'_>,
) -> Vec<RuleEntry<'a>> {
    let Some(entries) = rule_set.as_object() else {
        tracing::trace!("Rule set is not a mapping, nothing to select");
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|(name, value)| {
            let entry = RuleEntry::from_value(name, value);
            if entry.is_none() {
                tracing::trace!(rule = %name, "Skipping rule entry that is not a mapping");
            }
            entry
        })
        .filter(|entry| {
            if !entry.operator.is_known() {
                tracing::trace!(
                    rule = %entry.name,
                    operator = %entry.operator,
                    "Skipping rule entry with unknown condition operator"
                );
                return false;
            }
            let satisfied = entry.is_satisfied(properties);
            tracing::trace!(rule = %entry.name, satisfied, "Evaluated rule entry");
            satisfied
        })
        .collect()
}

/// Selector that holds a rule set and evaluates property sets against it.
#[derive(Debug, Clone)]
pub struct SettingsSelector {
    rule_set: Value,
}

impl SettingsSelector {
    pub fn new(rule_set: Value) -> Self {
        Self { rule_set }
    }

    /// Merge the settings of all entries satisfied by `properties`.
    pub fn select(&self, properties: &Value) -> Map<String, Value> {
        select_applicable_settings(&self.rule_set, properties)
    }

    /// Names of the entries satisfied by `properties`, in rule-set order.
    pub fn matching_rules(&self, properties: &Value) -> Vec<&str> {
        let properties = PropertySet::from_value(properties);
        satisfied_entries(&self.rule_set, &properties)
            .into_iter()
            .map(|entry| entry.name)
            .collect()
    }

    /// Names of all entries in the rule set.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rule_set
            .as_object()
            .map(|entries| entries.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Return a reference to the underlying rule set.
    pub fn rule_set(&self) -> &Value {
        &self.rule_set
    }
}
