//! Enumerations that select widget behaviour.
//!
//! Both enums are usable from the command line (`ValueEnum`) and from JSON
//! configuration files (kebab-case serde names).

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::filter::{contains_ignore_case, prefix_ignore_case};

/// Behavioural variant of the dropdown.
///
/// `Classic` is the older behaviour: every keystroke goes through `on_change`
/// and Enter without a highlight commits the raw text. `Modern` deduplicates
/// options and prefers the first filtered match; Tab commits like Enter.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    #[serde(alias = "Classic", alias = "older")]
    Classic,
    #[default]
    #[serde(alias = "Modern", alias = "newer")]
    Modern,
}

impl Variant {
    /// Whether identical option labels are collapsed to their first occurrence.
    pub fn dedupes(self) -> bool {
        matches!(self, Variant::Modern)
    }

    /// Whether Tab commits like Enter.
    pub fn commits_on_tab(self) -> bool {
        matches!(self, Variant::Modern)
    }

    /// Whether Enter with no highlighted option commits the first filtered match.
    pub fn falls_back_to_first_match(self) -> bool {
        matches!(self, Variant::Modern)
    }

    /// Whether every text edit is reported through `on_change`.
    pub fn reports_keystrokes(self) -> bool {
        matches!(self, Variant::Classic)
    }
}

/// Built-in filter predicates selectable from configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FilterMode {
    /// Case-insensitive substring match.
    #[default]
    Contains,
    /// Case-insensitive prefix match.
    Prefix,
}

impl FilterMode {
    pub fn predicate(self) -> fn(&str, &str, usize) -> bool {
        match self {
            FilterMode::Contains => contains_ignore_case,
            FilterMode::Prefix => prefix_ignore_case,
        }
    }
}
