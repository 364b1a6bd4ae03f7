//! # rackforge-rules
//!
//! Rule-based selection of hardware settings for a target machine.
//!
//! A rule set is a mapping of named rule entries. Each entry carries a
//! `conditionOperator`, a list of `conditions` and a `settings` payload.
//! Selection evaluates every entry against the machine's property set
//! (machine-type-model, model name, ...) and merges the settings of each
//! satisfied entry, later entries winning on key collisions.
//!
//! ## Overview
//!
//! - [`ConditionOperator`] -- how an entry's conditions are combined.
//! - [`condition_matches`] -- whether one condition object matches.
//! - [`PropertySet`] -- read-only view of the target machine's facts.
//! - [`RuleEntry`] -- borrowed view over one named rule entry.
//! - [`SettingsSelector`] / [`select_applicable_settings`] -- the selection.
//! - [`diagnose`] -- advisory lint over a rule set; never affects selection.
//!
//! Selection is total: malformed input degrades to "no match" instead of
//! failing, so partially-built rule sets still apply what they can.

pub mod condition;
pub mod diagnostics;
pub mod operator;
pub mod rule;
pub mod selector;

pub use condition::{condition_matches, PropertySet};
pub use diagnostics::{diagnose, DiagnosticKind, RuleDiagnostic, Severity};
pub use operator::ConditionOperator;
pub use rule::RuleEntry;
pub use selector::{select_applicable_settings, SettingsSelector};

/// Key holding an entry's operator.
pub const CONDITION_OPERATOR_KEY: &str = "conditionOperator";
/// Key holding an entry's condition list.
pub const CONDITIONS_KEY: &str = "conditions";
/// Key holding an entry's settings payload.
pub const SETTINGS_KEY: &str = "settings";
