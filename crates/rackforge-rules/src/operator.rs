//! How an entry's conditions are combined.
//!
//! The raw `conditionOperator` value is normalized before dispatch: the
//! boolean `true` means "always apply", strings are lowercased, and any other
//! value is rendered to text. Only `"true"`, `"or"` and `"and"` name an
//! evaluator; everything else is [`ConditionOperator::Unknown`] and the entry
//! never applies.

use serde_json::Value;

use crate::condition::{condition_matches, PropertySet};

/// A normalized `conditionOperator`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionOperator {
    /// Always satisfied; conditions are ignored.
    Always,
    /// At least one condition must match.
    Or,
    /// Every condition must match, and there must be at least one.
    And,
    /// No evaluator for this operator; carries the normalized text.
    Unknown(String),
}

impl ConditionOperator {
    /// Normalize a raw operator value. `None` is an absent key.
    pub fn from_value(raw: Option<&Value>) -> Self {
        match raw {
            Some(Value::Bool(true)) => ConditionOperator::Always,
            Some(Value::String(name)) => Self::from_name(name),
            Some(other) => Self::from_name(&other.to_string()),
            None => ConditionOperator::Unknown("null".to_string()),
        }
    }

    /// Dispatch on an operator name, case-insensitively.
    pub fn from_name(name: &str) -> Self {
        let normalized = name.to_lowercase();
        match normalized.as_str() {
            "true" => ConditionOperator::Always,
            "or" => ConditionOperator::Or,
            "and" => ConditionOperator::And,
            _ => ConditionOperator::Unknown(normalized),
        }
    }

    /// Whether an evaluator exists for this operator.
    pub fn is_known(&self) -> bool {
        !matches!(self, ConditionOperator::Unknown(_))
    }

    /// Evaluate a condition list under this operator.
    pub fn evaluate(&self, conditions: &[Value], properties: &PropertySet<'_>) -> bool {
        match self {
            ConditionOperator::Always => true,
            ConditionOperator::Or => conditions
                .iter()
                .any(|condition| condition_matches(condition, properties)),
            // "all of nothing" is unsatisfied, unlike Iterator::all
            ConditionOperator::And => {
                !conditions.is_empty()
                    && conditions
                        .iter()
                        .all(|condition| condition_matches(condition, properties))
            }
            ConditionOperator::Unknown(_) => false,
        }
    }
}

impl std::fmt::Display for ConditionOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConditionOperator::Always => write!(f, "true"),
            ConditionOperator::Or => write!(f, "or"),
            ConditionOperator::And => write!(f, "and"),
            ConditionOperator::Unknown(name) => write!(f, "{}", name),
        }
    }
}
