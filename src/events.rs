//! Payloads the dropdown hands to its owner.

use serde::{Deserialize, Serialize};

/// A committed selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectEvent {
    pub value: String,
    /// Position of the committed option in the full option list, or `None`
    /// when the value is free text.
    pub index: Option<usize>,
}

/// The resolved text value changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub value: String,
}

/// The input lost focus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlurEvent {
    /// Text left in the input after the blur was handled.
    pub value: String,
    /// Whether the text was cleared because custom values are not allowed.
    pub cleared: bool,
}

/// Any event emitted by the dropdown, tagged for JSON-lines output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum DropdownEvent {
    Select(SelectEvent),
    Change(ChangeEvent),
    Blur(BlurEvent),
}

impl DropdownEvent {
    /// One-line summary for the event log pane.
    pub fn summary(&self) -> String {
        match self {
            DropdownEvent::Select(e) => match e.index {
                Some(i) => format!("select  \"{}\" (option {})", e.value, i),
                None => format!("select  \"{}\" (free text)", e.value),
            },
            DropdownEvent::Change(e) => format!("change  \"{}\"", e.value),
            DropdownEvent::Blur(e) if e.cleared => "blur    (cleared)".to_string(),
            DropdownEvent::Blur(e) => format!("blur    \"{}\"", e.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let event = DropdownEvent::Select(SelectEvent { value: "Sydney".into(), index: Some(0) });
        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"event":"select","value":"Sydney","index":0}"#
        );

        let free = DropdownEvent::Select(SelectEvent { value: "Darwin".into(), index: None });
        assert_eq!(
            serde_json::to_string(&free).unwrap(),
            r#"{"event":"select","value":"Darwin","index":null}"#
        );
    }

    #[test]
    fn test_summary() {
        let blur = DropdownEvent::Blur(BlurEvent { value: String::new(), cleared: true });
        assert_eq!(blur.summary(), "blur    (cleared)");
        let change = DropdownEvent::Change(ChangeEvent { value: "Perth".into() });
        assert_eq!(change.summary(), "change  \"Perth\"");
    }
}
