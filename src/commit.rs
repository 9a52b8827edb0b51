//! Resolving what a commit (Enter, Tab, click) selects.

use crate::events::SelectEvent;
use crate::fields::Variant;
use crate::filter::Entry;
use crate::options::OptionList;

/// Decide the value and option index committed for the current state.
///
/// Precedence: the highlighted entry, then an option equal to `text` ignoring
/// case, then (modern only, non-empty text) the first filtered entry, then the
/// raw text as a free-text value.
///
/// The modern variant reports the option's position in the full list. The
/// classic variant reports the highlighted row's position in the filtered
/// menu, and `None` for an option matched by text alone.
pub fn resolve_commit(
    variant: Variant,
    options: &OptionList,
    entries: &[Entry],
    active: Option<usize>,
    text: &str,
) -> SelectEvent {
    if let Some(active) = active {
        if let Some(Entry::Option(m)) = entries.get(active) {
            let index = match variant {
                Variant::Classic => active,
                Variant::Modern => m.index,
            };
            return SelectEvent { value: m.label.clone(), index: Some(index) };
        }
    }

    if let Some((index, option)) = options.find_ignore_case(text) {
        let index = match variant {
            Variant::Classic => None,
            Variant::Modern => Some(index),
        };
        return SelectEvent { value: option.to_string(), index };
    }

    if variant.falls_back_to_first_match() && !text.is_empty() {
        if let Some(Entry::Option(m)) = entries.first() {
            return SelectEvent { value: m.label.clone(), index: Some(m.index) };
        }
    }

    SelectEvent { value: text.to_string(), index: None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{cap_entries, contains_ignore_case, filter_options};

    fn setup(text: &str) -> (OptionList, Vec<Entry>) {
        let options = OptionList::from(["Sydney", "Melbourne", "Brisbane", "Adelaide"]);
        let matches = filter_options(&options, text, &contains_ignore_case, true);
        let entries = cap_entries(matches, None, "");
        (options, entries)
    }

    #[test]
    fn test_active_entry_wins() {
        let (options, entries) = setup("a");
        // only Brisbane and Adelaide contain an "a"
        assert_eq!(entries[1].label(), "Adelaide");
        let event = resolve_commit(Variant::Modern, &options, &entries, Some(1), "a");
        assert_eq!(event, SelectEvent { value: "Adelaide".into(), index: Some(3) });

        let classic = resolve_commit(Variant::Classic, &options, &entries, Some(1), "a");
        assert_eq!(classic, SelectEvent { value: "Adelaide".into(), index: Some(1) });
    }

    #[test]
    fn test_exact_match_beats_first_filtered() {
        let (options, entries) = setup("BRISBANE");
        let event = resolve_commit(Variant::Modern, &options, &entries, None, "BRISBANE");
        assert_eq!(event, SelectEvent { value: "Brisbane".into(), index: Some(2) });

        let classic = resolve_commit(Variant::Classic, &options, &entries, None, "BRISBANE");
        assert_eq!(classic, SelectEvent { value: "Brisbane".into(), index: None });
    }

    #[test]
    fn test_first_filtered_fallback_is_modern_only() {
        let (options, entries) = setup("bour");
        let modern = resolve_commit(Variant::Modern, &options, &entries, None, "bour");
        assert_eq!(modern, SelectEvent { value: "Melbourne".into(), index: Some(1) });

        let classic = resolve_commit(Variant::Classic, &options, &entries, None, "bour");
        assert_eq!(classic, SelectEvent { value: "bour".into(), index: None });
    }

    #[test]
    fn test_raw_text_when_nothing_matches() {
        let (options, entries) = setup("Darwin");
        assert!(entries.is_empty());
        let event = resolve_commit(Variant::Modern, &options, &entries, None, "Darwin");
        assert_eq!(event, SelectEvent { value: "Darwin".into(), index: None });
    }

    #[test]
    fn test_empty_text_skips_first_filtered() {
        let (options, entries) = setup("");
        let event = resolve_commit(Variant::Modern, &options, &entries, None, "");
        assert_eq!(event, SelectEvent { value: String::new(), index: None });
    }

    #[test]
    fn test_overflow_entry_is_never_committed() {
        let options = OptionList::from(["Sydney", "Melbourne", "Brisbane"]);
        let matches = filter_options(&options, "", &contains_ignore_case, true);
        let entries = cap_entries(matches, Some(1), "+#");
        let event = resolve_commit(Variant::Modern, &options, &entries, Some(0), "");
        assert_eq!(event, SelectEvent { value: String::new(), index: None });
    }
}
