//! # dropdown_input
//!
//! A text input combined with a filterable, keyboard and mouse navigable
//! dropdown of suggestions, for `ratatui` terminal interfaces.
//!
//! ## Key Features
//!
//! - **Filtering**: options are filtered as the user types, case-insensitively
//!   by default, or with any `(text, option, index) -> bool` predicate
//! - **Capping**: long result lists are cut to a maximum with a disabled
//!   "+N more not shown" row
//! - **Navigation**: ↑/↓ cycle through matches with wrap-around, the mouse
//!   highlights on hover and commits on click
//! - **Commit resolution**: Enter (and Tab) commits the highlighted match, an
//!   exact option match, the first match, or the typed text
//! - **Callbacks**: `on_select`, `on_change` and `on_blur` report to the owner
//!
//! ## Example
//!
//! ```no_run
//! use dropdown_input::{DropdownConfig, DropdownInput};
//!
//! let config = DropdownConfig { max: Some(5), ..Default::default() };
//! let mut dropdown = DropdownInput::new(["Sydney", "Melbourne", "Brisbane"])
//!     .with_config(config)
//!     .on_select(|e| println!("selected {} ({:?})", e.value, e.index));
//! dropdown.focus();
//! // forward crossterm events with `dropdown.handle_event(&event)`
//! // and draw with `dropdown.render(frame, area)`
//! ```
//!
//! The `ddi` binary wraps the widget in a full-screen picker and prints the
//! emitted events as JSON lines.

pub mod commit;
pub mod config;
pub mod error;
pub mod events;
pub mod fields;
pub mod filter;
pub mod logging;
pub mod options;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod dropdown;
    pub mod input;
    pub mod run;
}

pub use config::DropdownConfig;
pub use error::{Error, Result};
pub use events::{BlurEvent, ChangeEvent, DropdownEvent, SelectEvent};
pub use fields::{FilterMode, Variant};
pub use options::OptionList;
pub use tui::dropdown::DropdownInput;
