//! Full-screen picker built around a single dropdown.
//!
//! The app is the dropdown's owner: it records every event the widget emits,
//! shows them in a log pane, and in parent-controlled mode keeps its own
//! copy of the value and feeds it back into the widget.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame, Terminal,
};
use tracing::info;

use crate::{
    config::DropdownConfig,
    events::DropdownEvent,
    options::OptionList,
    tui::{colors::STATUS_BG, dropdown::DropdownInput},
};

/// Picker application state.
pub struct PickApp {
    dropdown: DropdownInput,
    events: Rc<RefCell<Vec<DropdownEvent>>>,
    // Owner-side copy of the value, written by change events.
    bound: Rc<RefCell<String>>,
    parent_controlled: bool,
    should_exit: bool,
}

impl PickApp {
    /// Create a picker over `options` with the dropdown focused.
    pub fn new(options: OptionList, config: DropdownConfig) -> Self {
        let events = Rc::new(RefCell::new(Vec::new()));
        let bound = Rc::new(RefCell::new(config.default_value.clone().unwrap_or_default()));
        let parent_controlled = config.parent_controlled;

        let (on_select, on_blur) = (events.clone(), events.clone());
        let (on_change, bound_slot) = (events.clone(), bound.clone());
        let mut dropdown = DropdownInput::new(options)
            .with_config(config)
            .on_select(move |e| on_select.borrow_mut().push(DropdownEvent::Select(e.clone())))
            .on_change(move |e| {
                *bound_slot.borrow_mut() = e.value.clone();
                on_change.borrow_mut().push(DropdownEvent::Change(e.clone()));
            })
            .on_blur(move |e| on_blur.borrow_mut().push(DropdownEvent::Blur(e.clone())));
        dropdown.focus();

        PickApp {
            dropdown,
            events,
            bound,
            parent_controlled,
            should_exit: false,
        }
    }

    pub fn dropdown(&self) -> &DropdownInput {
        &self.dropdown
    }

    /// Events emitted so far, oldest first.
    pub fn events(&self) -> Vec<DropdownEvent> {
        self.events.borrow().clone()
    }

    /// The owner-side value.
    pub fn bound_value(&self) -> String {
        self.bound.borrow().clone()
    }

    /// Overwrite the owner-side value; parent-controlled widgets pick it up.
    pub fn set_bound_value(&mut self, value: &str) {
        *self.bound.borrow_mut() = value.to_string();
        self.sync_bound_value();
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn sync_bound_value(&mut self) {
        if !self.parent_controlled {
            return;
        }
        let bound = self.bound.borrow().clone();
        if bound != self.dropdown.value() {
            self.dropdown.set_value(&bound);
        }
    }

    /// Dispatch one terminal event.
    ///
    /// The dropdown sees every event first. Unconsumed Esc blurs a focused
    /// dropdown and quits an unfocused one; Enter or Tab refocuses.
    pub fn handle_event(&mut self, event: &Event) {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press
                && key.modifiers.contains(KeyModifiers::CONTROL)
                && key.code == KeyCode::Char('c')
            {
                self.should_exit = true;
                return;
            }
        }

        if !self.dropdown.handle_event(event) {
            if let Event::Key(key) = event {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Esc if self.dropdown.is_focused() => self.dropdown.blur(),
                        KeyCode::Esc | KeyCode::Char('q') if !self.dropdown.is_focused() => {
                            self.should_exit = true
                        }
                        KeyCode::Enter | KeyCode::Tab if !self.dropdown.is_focused() => {
                            self.dropdown.focus()
                        }
                        _ => {}
                    }
                }
            }
        }

        self.sync_bound_value();
    }

    /// Main render function.
    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Dropdown and event log
                Constraint::Length(1), // Status bar
            ])
            .split(f.area());

        let header = Paragraph::new(Line::from(Span::styled(
            "DROPDOWN INPUT",
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White));
        f.render_widget(header, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        self.render_event_log(f, body[1]);
        self.dropdown.render(f, body[0]);
        self.render_status_bar(f, chunks[2]);
    }

    fn render_event_log(&self, f: &mut Frame, area: Rect) {
        let events = self.events.borrow();
        let visible = usize::from(area.height.saturating_sub(2));
        let skip = events.len().saturating_sub(visible);
        let items: Vec<ListItem> = events
            .iter()
            .skip(skip)
            .map(|event| ListItem::new(Line::from(format!("  {}", event.summary()))))
            .collect();

        let title = if self.parent_controlled {
            format!("Events (bound: \"{}\")", self.bound.borrow())
        } else {
            "Events".to_string()
        };
        let log = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(log, area);
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = if self.dropdown.is_focused() {
            "Type to filter, ↑↓ to move, Enter to select, Esc to close/leave, Ctrl-C to quit"
        } else {
            "Enter to edit, Esc/q to quit"
        };
        let status = Paragraph::new(status_text)
            .style(Style::default().bg(STATUS_BG).fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    /// Main event loop for the picker.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!(options = self.dropdown.options().len(), "pick session started");
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(50))? {
                let event = event::read()?;
                self.handle_event(&event);
            }

            if self.should_exit {
                break;
            }
        }
        info!(events = self.events.borrow().len(), "pick session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{BlurEvent, ChangeEvent, SelectEvent};
    use crossterm::event::KeyEvent;
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app(config: DropdownConfig) -> PickApp {
        PickApp::new(OptionList::from(["Sydney", "Melbourne", "Perth"]), config)
    }

    fn type_text(app: &mut PickApp, text: &str) {
        for c in text.chars() {
            app.handle_event(&key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_commit_is_recorded() {
        let mut app = app(DropdownConfig::default());
        type_text(&mut app, "per");
        app.handle_event(&key(KeyCode::Enter));

        assert_eq!(
            app.events(),
            vec![
                DropdownEvent::Select(SelectEvent { value: "Perth".into(), index: Some(2) }),
                DropdownEvent::Change(ChangeEvent { value: "Perth".into() }),
            ]
        );
        assert_eq!(app.bound_value(), "Perth");
    }

    #[test]
    fn test_escape_closes_then_blurs_then_quits() {
        let mut app = app(DropdownConfig::default());
        type_text(&mut app, "s");
        assert!(app.dropdown().is_open());

        app.handle_event(&key(KeyCode::Esc));
        assert!(!app.dropdown().is_open());
        assert!(app.dropdown().is_focused());

        app.handle_event(&key(KeyCode::Esc));
        assert!(!app.dropdown().is_focused());
        assert_eq!(
            app.events().last(),
            Some(&DropdownEvent::Blur(BlurEvent { value: "s".into(), cleared: false }))
        );
        assert!(!app.should_exit());

        app.handle_event(&key(KeyCode::Enter));
        assert!(app.dropdown().is_focused());
        app.handle_event(&key(KeyCode::Esc));
        app.handle_event(&key(KeyCode::Char('q')));
        assert!(app.should_exit());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app(DropdownConfig::default());
        app.handle_event(&Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(app.should_exit());
        assert_eq!(app.dropdown().value(), "");
    }

    #[test]
    fn test_parent_controlled_value_round_trips() {
        let config = DropdownConfig {
            parent_controlled: true,
            default_value: Some("Me".into()),
            ..Default::default()
        };
        let mut app = app(config);
        assert_eq!(app.bound_value(), "Me");

        type_text(&mut app, "l");
        assert_eq!(app.bound_value(), "Mel");
        assert_eq!(app.dropdown().value(), "Mel");

        app.set_bound_value("Hobart");
        assert_eq!(app.dropdown().value(), "Hobart");
    }

    #[test]
    fn test_uncontrolled_ignores_owner_value() {
        let mut app = app(DropdownConfig::default());
        type_text(&mut app, "Syd");
        app.set_bound_value("Hobart");
        assert_eq!(app.dropdown().value(), "Syd");
    }

    #[test]
    fn test_render_shows_header_and_events() {
        let mut app = app(DropdownConfig::default());
        app.handle_event(&key(KeyCode::Down));
        app.handle_event(&key(KeyCode::Enter));

        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("DROPDOWN INPUT"));
        assert!(text.contains("select  \"Sydney\" (option 0)"));
        assert!(text.contains("change  \"Sydney\""));
    }
}
