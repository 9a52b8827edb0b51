//! Text input with a filterable dropdown of suggestions.
//!
//! `DropdownInput` owns the text, the highlighted ("active") row and whether
//! the menu is open. The owner forwards crossterm events to it, renders it
//! each frame, and hears about commits, edits and blurs through callbacks.
//!
//! The active row indexes the filtered and capped menu, which is recomputed
//! from the options and the current text on every event and every render.
//! Reads clamp the stored index against the current menu, so it can never
//! point past the selectable rows.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::{Margin, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use tracing::{debug, trace};

use crate::{
    commit::resolve_commit,
    config::DropdownConfig,
    events::{BlurEvent, ChangeEvent, SelectEvent},
    filter::{cap_entries, filter_options, highlight_range, selectable_count, Entry, FilterFn},
    options::OptionList,
    tui::{
        colors::{ACTIVE_BG, ACTIVE_FG, FOCUS_BORDER, GOLD, MUTED},
        input::InputField,
    },
};

pub type SelectCallback = Box<dyn FnMut(&SelectEvent)>;
pub type ChangeCallback = Box<dyn FnMut(&ChangeEvent)>;
pub type BlurCallback = Box<dyn FnMut(&BlurEvent)>;

/// A text input combined with a filterable, navigable dropdown menu.
pub struct DropdownInput {
    options: OptionList,
    config: DropdownConfig,
    filter: Box<FilterFn>,
    input: InputField,
    active: Option<usize>,
    open: bool,
    on_select: Option<SelectCallback>,
    on_change: Option<ChangeCallback>,
    on_blur: Option<BlurCallback>,
    list_state: ListState,
    // Layout from the last render, used for mouse hit testing.
    input_area: Rect,
    menu_area: Option<Rect>,
}

impl DropdownInput {
    /// Create a dropdown over `options` with the default configuration.
    pub fn new(options: impl Into<OptionList>) -> Self {
        let config = DropdownConfig::default();
        Self {
            options: options.into(),
            filter: Box::new(config.filter.predicate()),
            config,
            input: InputField::new(),
            active: None,
            open: false,
            on_select: None,
            on_change: None,
            on_blur: None,
            list_state: ListState::default(),
            input_area: Rect::default(),
            menu_area: None,
        }
    }

    /// Apply a configuration. Resets the text to `default_value` and the
    /// filter to the configured mode, so call [`filter`](Self::filter) after this.
    pub fn with_config(mut self, config: DropdownConfig) -> Self {
        let focused = self.input.active;
        self.input = InputField::with_value(config.default_value.as_deref().unwrap_or(""));
        self.input.active = focused;
        self.filter = Box::new(config.filter.predicate());
        self.config = config;
        self.active = None;
        self
    }

    /// Use a custom filter predicate `(text, option, index) -> visible`.
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&str, &str, usize) -> bool + 'static,
    {
        self.filter = Box::new(filter);
        self
    }

    pub fn on_select<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&SelectEvent) + 'static,
    {
        self.on_select = Some(Box::new(callback));
        self
    }

    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&ChangeEvent) + 'static,
    {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn on_blur<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&BlurEvent) + 'static,
    {
        self.on_blur = Some(Box::new(callback));
        self
    }

    pub fn value(&self) -> &str {
        &self.input.value
    }

    pub fn options(&self) -> &OptionList {
        &self.options
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_focused(&self) -> bool {
        self.input.active
    }

    /// Replace the option list. The active row is re-validated on next read.
    pub fn set_options(&mut self, options: impl Into<OptionList>) {
        self.options = options.into();
    }

    /// Owner-driven value update: replaces the text without firing callbacks.
    pub fn set_value(&mut self, value: &str) {
        self.input.set_value(value);
        self.active = None;
    }

    /// Current menu rows: filtered, deduplicated per variant, then capped.
    pub fn entries(&self) -> Vec<Entry> {
        let matches = filter_options(
            &self.options,
            &self.input.value,
            &*self.filter,
            self.config.variant.dedupes(),
        );
        cap_entries(matches, self.config.max, &self.config.max_text)
    }

    /// Highlighted row, if it is still a selectable row of the current menu.
    pub fn active_index(&self) -> Option<usize> {
        self.active_in(&self.entries())
    }

    fn active_in(&self, entries: &[Entry]) -> Option<usize> {
        self.active.filter(|&i| i < selectable_count(entries))
    }

    pub fn focus(&mut self) {
        self.input.active = true;
    }

    /// Toggle the menu, as a click on the input does.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        trace!(open = self.open, "dropdown toggled");
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Handle loss of focus.
    ///
    /// Closes the menu. When custom values are disallowed and no row is
    /// highlighted, text naming an option (ignoring case) takes that option's
    /// spelling and any other text is cleared. The blur callback always fires.
    pub fn blur(&mut self) {
        let strict = !self.config.custom_values_allowed && self.active_index().is_none();

        self.input.active = false;
        self.open = false;
        self.active = None;

        let mut cleared = false;
        if strict && !self.input.value.is_empty() {
            let known = self
                .options
                .find_ignore_case(&self.input.value)
                .map(|(_, option)| option.to_string());
            match known {
                Some(option) if option != self.input.value => {
                    self.input.set_value(&option);
                    self.send_change(ChangeEvent { value: option });
                }
                Some(_) => {}
                None => {
                    self.input.set_value("");
                    self.send_change(ChangeEvent { value: String::new() });
                    cleared = true;
                }
            }
        }
        debug!(cleared, value = %self.input.value, "dropdown blurred");

        let event = BlurEvent { value: self.input.value.clone(), cleared };
        if let Some(callback) = self.on_blur.as_mut() {
            callback(&event);
        }
    }

    /// Move the highlight up, wrapping from the first row (or none) to the last.
    pub fn move_up(&mut self) {
        let entries = self.entries();
        let count = selectable_count(&entries);
        if count == 0 {
            return;
        }
        self.active = Some(match self.active_in(&entries) {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        });
        self.open = true;
    }

    /// Move the highlight down, wrapping from the last row to the first.
    pub fn move_down(&mut self) {
        let entries = self.entries();
        let count = selectable_count(&entries);
        if count == 0 {
            return;
        }
        self.active = Some(match self.active_in(&entries) {
            Some(i) => (i + 1) % count,
            None => 0,
        });
        self.open = true;
    }

    /// Commit the highlighted row, a matching option, or the typed text.
    pub fn commit(&mut self) {
        let entries = self.entries();
        let active = self.active_in(&entries);
        let event = resolve_commit(
            self.config.variant,
            &self.options,
            &entries,
            active,
            &self.input.value,
        );
        self.open = false;
        self.active = None;
        self.input.set_value(&event.value);
        debug!(value = %event.value, index = ?event.index, "option committed");

        if let Some(callback) = self.on_select.as_mut() {
            callback(&event);
        }
        self.send_change(ChangeEvent { value: event.value });
    }

    fn send_change(&mut self, event: ChangeEvent) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(&event);
        }
    }

    fn text_changed(&mut self) {
        self.active = None;
        self.open = true;
        trace!(value = %self.input.value, "text changed");

        if self.config.variant.reports_keystrokes() || self.config.parent_controlled {
            self.send_change(ChangeEvent { value: self.input.value.clone() });
        }
    }

    /// Route a terminal event. Keys are only handled while focused.
    /// Returns whether the event was consumed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) if self.is_focused() => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => false,
        }
    }

    /// Handle a key press. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match key.code {
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Enter => self.commit(),
            KeyCode::Tab if self.config.variant.commits_on_tab() => self.commit(),
            KeyCode::Esc if self.open => self.close(),
            KeyCode::Char(c) if !is_shortcut(key.modifiers) => {
                self.input.handle_char(c);
                self.text_changed();
            }
            KeyCode::Backspace => {
                if self.input.handle_backspace() {
                    self.text_changed();
                }
            }
            KeyCode::Delete => {
                if self.input.handle_delete() {
                    self.text_changed();
                }
            }
            KeyCode::Left => self.input.move_cursor_left(),
            KeyCode::Right => self.input.move_cursor_right(),
            KeyCode::Home => self.input.move_cursor_home(),
            KeyCode::End => self.input.move_cursor_end(),
            _ => return false,
        }
        true
    }

    /// Handle a mouse event against the layout of the last render.
    /// Returns whether the event was consumed.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::Moved => {
                let Some(index) = self.entry_at(mouse.column, mouse.row) else {
                    return false;
                };
                if !self.entries().get(index).is_some_and(Entry::is_selectable) {
                    return false;
                }
                self.active = Some(index);
                true
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if self.input_area.contains(Position::new(mouse.column, mouse.row)) {
                    self.focus();
                    self.toggle();
                    return true;
                }
                if let Some(index) = self.entry_at(mouse.column, mouse.row) {
                    if self.entries().get(index).is_some_and(Entry::is_selectable) {
                        self.active = Some(index);
                        self.commit();
                    }
                    return true;
                }
                if self.is_focused() {
                    self.blur();
                }
                false
            }
            _ => false,
        }
    }

    /// Menu row under a screen position, if the menu is showing.
    fn entry_at(&self, column: u16, row: u16) -> Option<usize> {
        let menu = self.menu_area?;
        let inner = menu.inner(Margin::new(1, 1));
        if !self.open || !inner.contains(Position::new(column, row)) {
            return None;
        }
        let index = self.list_state.offset() + usize::from(row - inner.y);
        (index < self.entries().len()).then_some(index)
    }

    /// Render the input at the top of `area` and, when open, the menu below it.
    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let input_area = Rect { height: area.height.min(3), ..area };
        self.input_area = input_area;
        self.menu_area = None;
        self.render_input(f, input_area);

        if !self.open {
            return;
        }
        let entries = self.entries();
        if entries.is_empty() {
            return;
        }

        let available = area.bottom().saturating_sub(input_area.bottom());
        let rows = u16::try_from(entries.len())
            .unwrap_or(u16::MAX)
            .min(self.config.menu_height.max(1));
        let height = rows.saturating_add(2).min(available);
        if height < 3 {
            return;
        }
        let menu_area = Rect {
            x: area.x,
            y: input_area.bottom(),
            width: area.width,
            height,
        };

        let items: Vec<ListItem> = entries
            .iter()
            .map(|entry| ListItem::new(entry_line(entry, &self.input.value)))
            .collect();
        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(Style::default().bg(ACTIVE_BG).fg(ACTIVE_FG))
            .highlight_symbol("► ");

        self.list_state.select(self.active_in(&entries));
        f.render_widget(Clear, menu_area);
        f.render_stateful_widget(menu, menu_area, &mut self.list_state);
        self.menu_area = Some(menu_area);
    }

    fn render_input(&self, f: &mut Frame, area: Rect) {
        let border = if self.is_focused() {
            Style::default().fg(FOCUS_BORDER)
        } else {
            Style::default()
        };
        let mut block = Block::default().borders(Borders::ALL).border_style(border);
        if let Some(title) = &self.config.title {
            block = block.title(title.as_str());
        }

        let line = match &self.config.placeholder {
            Some(placeholder) if self.input.value.is_empty() => {
                Line::from(Span::styled(placeholder.as_str(), Style::default().fg(MUTED)))
            }
            _ => Line::from(self.input.value.as_str()),
        };
        let width = usize::from(area.width.saturating_sub(2));
        let scroll = u16::try_from(self.input.scroll_for(width)).unwrap_or(u16::MAX);
        f.render_widget(Paragraph::new(line).block(block).scroll((0, scroll)), area);

        if self.is_focused() && area.height >= 3 {
            let column = u16::try_from(self.input.cursor_column()).unwrap_or(u16::MAX);
            let x = area.x.saturating_add(1).saturating_add(column.saturating_sub(scroll));
            f.set_cursor_position((x, area.y + 1));
        }
    }
}

/// Ctrl or Alt alone marks a shortcut. Both together is AltGr on some
/// layouts and still types a character.
fn is_shortcut(modifiers: KeyModifiers) -> bool {
    let chord = modifiers & (KeyModifiers::CONTROL | KeyModifiers::ALT);
    chord == KeyModifiers::CONTROL || chord == KeyModifiers::ALT
}

/// Menu line for an entry, with the part matching `text` emphasised.
fn entry_line<'a>(entry: &'a Entry, text: &str) -> Line<'a> {
    match entry {
        Entry::Option(m) => match highlight_range(&m.label, text) {
            Some(range) => Line::from(vec![
                Span::raw(&m.label[..range.start]),
                Span::styled(
                    &m.label[range.clone()],
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                ),
                Span::raw(&m.label[range.end..]),
            ]),
            None => Line::from(m.label.as_str()),
        },
        Entry::Overflow { label, .. } => Line::from(Span::styled(
            label.as_str(),
            Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
        )),
    }
}
