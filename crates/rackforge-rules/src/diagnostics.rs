//! Advisory checks over a rule set.
//!
//! Selection silently skips anything it cannot evaluate. Callers that want to
//! know about a misconfigured rule set run [`diagnose`] separately; its
//! findings never influence [`select_applicable_settings`](crate::select_applicable_settings).

use serde::Serialize;
use serde_json::Value;

use crate::operator::ConditionOperator;
use crate::rule::RuleEntry;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The entry still evaluates, but probably not as intended.
    Warning,
    /// The entry (or the whole rule set) can never apply.
    Error,
}

/// What is wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    RuleSetNotMapping,
    EntryNotMapping,
    UnknownOperator { operator: String },
    ConditionsNotSequence,
    EmptyConditions,
    ConditionNotMapping { index: usize },
    EmptyCondition { index: usize },
    ConditionsIgnored,
    SettingsNotMapping,
    NoSettings,
}

impl DiagnosticKind {
    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticKind::RuleSetNotMapping
            | DiagnosticKind::EntryNotMapping
            | DiagnosticKind::UnknownOperator { .. }
            | DiagnosticKind::ConditionsNotSequence
            | DiagnosticKind::EmptyConditions
            | DiagnosticKind::SettingsNotMapping => Severity::Error,
            DiagnosticKind::ConditionNotMapping { .. }
            | DiagnosticKind::EmptyCondition { .. }
            | DiagnosticKind::ConditionsIgnored
            | DiagnosticKind::NoSettings => Severity::Warning,
        }
    }
}

/// A single finding about a rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleDiagnostic {
    /// Entry the finding is about; `None` for the rule set itself.
    pub rule: Option<String>,
    pub severity: Severity,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl RuleDiagnostic {
    fn new(rule: Option<&str>, kind: DiagnosticKind) -> Self {
        Self {
            rule: rule.map(str::to_string),
            severity: kind.severity(),
            kind,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for RuleDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        match &self.rule {
            Some(rule) => write!(f, "{level}: {rule}: ")?,
            None => write!(f, "{level}: ")?,
        }
        match &self.kind {
            DiagnosticKind::RuleSetNotMapping => write!(f, "rule set is not a mapping"),
            DiagnosticKind::EntryNotMapping => write!(f, "entry is not a mapping"),
            DiagnosticKind::UnknownOperator { operator } => {
                write!(f, "unknown conditionOperator '{operator}'")
            }
            DiagnosticKind::ConditionsNotSequence => write!(f, "conditions is not a list"),
            DiagnosticKind::EmptyConditions => {
                write!(f, "no conditions, the entry never applies")
            }
            DiagnosticKind::ConditionNotMapping { index } => {
                write!(f, "condition #{index} is not a mapping and never matches")
            }
            DiagnosticKind::EmptyCondition { index } => {
                write!(f, "condition #{index} is empty and never matches")
            }
            DiagnosticKind::ConditionsIgnored => {
                write!(f, "conditions are ignored when conditionOperator is true")
            }
            DiagnosticKind::SettingsNotMapping => write!(f, "settings is not a mapping"),
            DiagnosticKind::NoSettings => write!(f, "entry has no settings"),
        }
    }
}

/// Lint a rule set, returning findings in rule-set order.
pub fn diagnose(rule_set: &Value) -> Vec<RuleDiagnostic> {
    let Some(entries) = rule_set.as_object() else {
        return vec![RuleDiagnostic::new(None, DiagnosticKind::RuleSetNotMapping)];
    };

    let mut findings = Vec::new();
    for (name, value) in entries {
        match RuleEntry::from_value(name, value) {
            Some(entry) => diagnose_entry(&entry, &mut findings),
            None => findings.push(RuleDiagnostic::new(
                Some(name),
                DiagnosticKind::EntryNotMapping,
            )),
        }
    }
    findings
}

fn diagnose_entry(entry: &RuleEntry<'_>, findings: &mut Vec<RuleDiagnostic>) {
    let mut push = |kind| findings.push(RuleDiagnostic::new(Some(entry.name), kind));

    match &entry.operator {
        ConditionOperator::Unknown(operator) => push(DiagnosticKind::UnknownOperator {
            operator: operator.clone(),
        }),
        ConditionOperator::Always => {
            if !entry.conditions().is_empty() {
                push(DiagnosticKind::ConditionsIgnored);
            }
        }
        ConditionOperator::Or | ConditionOperator::And => match entry.raw_conditions() {
            Some(Value::Array(conditions)) if !conditions.is_empty() => {
                for (index, condition) in conditions.iter().enumerate() {
                    match condition.as_object() {
                        Some(pairs) if pairs.is_empty() => {
                            push(DiagnosticKind::EmptyCondition { index })
                        }
                        Some(_) => {}
                        None => push(DiagnosticKind::ConditionNotMapping { index }),
                    }
                }
            }
            Some(Value::Array(_)) | None => push(DiagnosticKind::EmptyConditions),
            Some(_) => push(DiagnosticKind::ConditionsNotSequence),
        },
    }

    match entry.raw_settings() {
        Some(Value::Object(settings)) if settings.is_empty() => push(DiagnosticKind::NoSettings),
        Some(Value::Object(_)) => {}
        None => push(DiagnosticKind::NoSettings),
        Some(_) => push(DiagnosticKind::SettingsNotMapping),
    }
}
