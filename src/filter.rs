//! Option filtering and result capping.
//!
//! These are pure functions over an [`OptionList`]; the widget calls them on
//! every event and every render, so nothing here is cached.

use std::collections::HashSet;
use std::ops::Range;

use crate::options::OptionList;

/// Overflow label used when none is configured. `#` becomes the hidden count.
pub const DEFAULT_MAX_TEXT: &str = "+# more not shown";

/// Filter predicate: `(text, option, option_index) -> visible`.
pub type FilterFn = dyn Fn(&str, &str, usize) -> bool;

/// Case-insensitive substring match. Empty text matches everything.
pub fn contains_ignore_case(text: &str, option: &str, _index: usize) -> bool {
    option.to_lowercase().contains(&text.to_lowercase())
}

/// Case-insensitive prefix match. Empty text matches everything.
pub fn prefix_ignore_case(text: &str, option: &str, _index: usize) -> bool {
    option.to_lowercase().starts_with(&text.to_lowercase())
}

/// An option that passed the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub label: String,
    /// Position in the full option list.
    pub index: usize,
}

/// One row of the rendered menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Option(Match),
    /// Disabled placeholder standing in for results cut by the cap.
    Overflow { label: String, hidden: usize },
}

impl Entry {
    pub fn label(&self) -> &str {
        match self {
            Entry::Option(m) => &m.label,
            Entry::Overflow { label, .. } => label,
        }
    }

    pub fn is_selectable(&self) -> bool {
        matches!(self, Entry::Option(_))
    }
}

/// Options for which `filter(text, option, index)` holds, in list order.
///
/// With `dedupe`, repeated labels (exact equality) keep only their first
/// occurrence.
pub fn filter_options(
    options: &OptionList,
    text: &str,
    filter: &FilterFn,
    dedupe: bool,
) -> Vec<Match> {
    let mut seen = HashSet::new();
    options
        .iter()
        .enumerate()
        .filter(|(index, option)| filter(text, *option, *index))
        .filter(|(_, option)| !dedupe || seen.insert(*option))
        .map(|(index, label)| Match {
            label: label.to_string(),
            index,
        })
        .collect()
}

/// Convert matches into menu entries, applying the optional cap.
///
/// When `max` is non-zero and exceeded, the first `max - 1` matches are kept
/// and a single overflow entry reports how many were hidden.
pub fn cap_entries(matches: Vec<Match>, max: Option<usize>, max_text: &str) -> Vec<Entry> {
    match max {
        Some(max) if max > 0 && matches.len() > max => {
            let hidden = matches.len() - max + 1;
            let mut entries: Vec<Entry> = matches
                .into_iter()
                .take(max - 1)
                .map(Entry::Option)
                .collect();
            entries.push(Entry::Overflow {
                label: overflow_label(max_text, hidden),
                hidden,
            });
            entries
        }
        _ => matches.into_iter().map(Entry::Option).collect(),
    }
}

/// Render the overflow template, replacing every `#` with `hidden`.
pub fn overflow_label(template: &str, hidden: usize) -> String {
    template.replace('#', &hidden.to_string())
}

/// Number of leading selectable entries. The overflow row, if any, is last.
pub fn selectable_count(entries: &[Entry]) -> usize {
    entries.iter().take_while(|e| e.is_selectable()).count()
}

/// Byte range of the first case-insensitive occurrence of `text` in `option`.
pub fn highlight_range(option: &str, text: &str) -> Option<Range<usize>> {
    if text.is_empty() {
        return None;
    }
    let needle: Vec<char> = text.chars().flat_map(char::to_lowercase).collect();

    for (start, _) in option.char_indices() {
        let mut matched = 0;
        let mut end = start;
        for (offset, c) in option[start..].char_indices() {
            if matched == needle.len() {
                break;
            }
            let lower: Vec<char> = c.to_lowercase().collect();
            if !needle[matched..].starts_with(&lower) {
                break;
            }
            matched += lower.len();
            end = start + offset + c.len_utf8();
        }
        if matched == needle.len() {
            return Some(start..end);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities() -> OptionList {
        OptionList::from(["Sydney", "Melbourne", "Brisbane", "Adelaide", "Perth", "Hobart"])
    }

    fn labels(matches: &[Match]) -> Vec<&str> {
        matches.iter().map(|m| m.label.as_str()).collect()
    }

    #[test]
    fn test_empty_text_matches_everything() {
        let options = cities();
        let matches = filter_options(&options, "", &contains_ignore_case, false);
        assert_eq!(matches.len(), options.len());
        assert_eq!(matches[3], Match { label: "Adelaide".into(), index: 3 });
    }

    #[test]
    fn test_filtered_is_ordered_subset_satisfying_predicate() {
        let options = cities();
        for text in ["", "a", "E", "bri", "zzz", "RT"] {
            let matches = filter_options(&options, text, &contains_ignore_case, false);
            let mut last: Option<usize> = None;
            for m in &matches {
                assert_eq!(options.get(m.index), Some(m.label.as_str()));
                assert!(contains_ignore_case(text, &m.label, m.index));
                assert!(last.map_or(true, |l| l < m.index));
                last = Some(m.index);
            }
            assert_eq!(matches, filter_options(&options, text, &contains_ignore_case, false));
        }
    }

    #[test]
    fn test_case_insensitive_match() {
        let matches = filter_options(&cities(), "SyD", &contains_ignore_case, false);
        assert_eq!(labels(&matches), vec!["Sydney"]);
    }

    #[test]
    fn test_custom_filter_sees_index() {
        let even = |_: &str, _: &str, index: usize| index % 2 == 0;
        let matches = filter_options(&cities(), "ignored", &even, false);
        assert_eq!(labels(&matches), vec!["Sydney", "Brisbane", "Perth"]);
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        let options = OptionList::from(["Perth", "perth", "Perth", "Hobart"]);
        let deduped = filter_options(&options, "", &contains_ignore_case, true);
        assert_eq!(labels(&deduped), vec!["Perth", "perth", "Hobart"]);
        assert_eq!(deduped[2].index, 3);

        let all = filter_options(&options, "", &contains_ignore_case, false);
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_cap_appends_overflow_entry() {
        let matches = filter_options(&cities(), "e", &contains_ignore_case, false);
        assert_eq!(matches.len(), 5);

        let entries = cap_entries(matches, Some(3), DEFAULT_MAX_TEXT);
        assert_eq!(entries.len(), 3);
        assert_eq!(selectable_count(&entries), 2);
        assert_eq!(entries[0].label(), "Sydney");
        assert_eq!(entries[1].label(), "Melbourne");
        assert_eq!(
            entries[2],
            Entry::Overflow { label: "+3 more not shown".into(), hidden: 3 }
        );
        assert!(!entries[2].is_selectable());
    }

    #[test]
    fn test_cap_not_applied_within_limit() {
        let matches = filter_options(&cities(), "", &contains_ignore_case, false);
        assert_eq!(cap_entries(matches.clone(), Some(6), DEFAULT_MAX_TEXT).len(), 6);
        assert_eq!(cap_entries(matches.clone(), None, DEFAULT_MAX_TEXT).len(), 6);
        assert_eq!(selectable_count(&cap_entries(matches, Some(0), DEFAULT_MAX_TEXT)), 6);
    }

    #[test]
    fn test_cap_of_one_is_only_placeholder() {
        let matches = filter_options(&cities(), "", &contains_ignore_case, false);
        let entries = cap_entries(matches, Some(1), "(# hidden)");
        assert_eq!(entries, vec![Entry::Overflow { label: "(6 hidden)".into(), hidden: 6 }]);
        assert_eq!(selectable_count(&entries), 0);
    }

    #[test]
    fn test_overflow_label_replaces_every_placeholder() {
        assert_eq!(overflow_label("# of # left", 4), "4 of 4 left");
        assert_eq!(overflow_label("more...", 4), "more...");
    }

    #[test]
    fn test_highlight_range() {
        assert_eq!(highlight_range("Melbourne", "BOUR"), Some(3..7));
        assert_eq!(highlight_range("Melbourne", ""), None);
        assert_eq!(highlight_range("Melbourne", "xyz"), None);
        assert_eq!(highlight_range("Perth", "perth"), Some(0..5));
        // multi-byte characters keep byte offsets on char boundaries
        assert_eq!(highlight_range("Zürich", "RI"), Some(3..5));
        assert_eq!(highlight_range("ZÜRICH", "ür"), Some(1..4));
    }
}
