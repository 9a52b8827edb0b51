//! Command implementations for the `ddi` binary.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use clap_complete::{generate, Shell};
use tracing::info;

use dropdown_input::{
    filter::Entry,
    tui::{app::PickApp, run::run_pick_tui},
    DropdownConfig, DropdownInput, Error, FilterMode, OptionList, Result, Variant,
};

#[derive(Subcommand)]
pub enum Commands {
    /// Pick a value interactively; emitted events are printed as JSON lines.
    Pick {
        #[command(flatten)]
        source: OptionSource,
        #[command(flatten)]
        widget: WidgetArgs,
    },

    /// Print the menu rows the dropdown shows for some text.
    Filter {
        /// Text typed into the input.
        text: String,
        #[command(flatten)]
        source: OptionSource,
        #[command(flatten)]
        widget: WidgetArgs,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Where the options come from.
#[derive(Args, Debug, Clone, Default)]
pub struct OptionSource {
    /// Options to choose from.
    pub options: Vec<String>,
    /// Read options from a file: a JSON array of strings or one per line.
    #[arg(long, short = 'f')]
    pub options_file: Option<PathBuf>,
}

impl OptionSource {
    /// Options from the file (if any) followed by those given as arguments.
    pub fn load(&self) -> Result<OptionList> {
        let mut items = Vec::new();
        if let Some(path) = &self.options_file {
            items.extend(OptionList::load(path)?.iter().map(str::to_string));
        }
        items.extend(self.options.iter().cloned());
        if items.is_empty() {
            return Err(Error::EmptyOptions);
        }
        Ok(OptionList::new(items))
    }
}

/// Dropdown settings; flags override values from `--config`.
#[derive(Args, Debug, Clone, Default)]
pub struct WidgetArgs {
    /// JSON configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Initial input text.
    #[arg(long)]
    pub default: Option<String>,
    /// Maximum menu rows, including the "+N more" row.
    #[arg(long)]
    pub max: Option<usize>,
    /// Overflow row template; '#' is replaced by the hidden count.
    #[arg(long)]
    pub max_text: Option<String>,
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,
    #[arg(long, value_enum)]
    pub filter: Option<FilterMode>,
    /// Clear free text that matches no option when the input loses focus.
    #[arg(long)]
    pub strict: bool,
    /// Report every edit and let the picker feed its value back.
    #[arg(long)]
    pub parent_controlled: bool,
    /// Title shown on the input border.
    #[arg(long)]
    pub title: Option<String>,
    /// Placeholder shown while the input is empty.
    #[arg(long)]
    pub placeholder: Option<String>,
}

impl WidgetArgs {
    /// Build the configuration: file values first, then flags.
    pub fn resolve(&self) -> Result<DropdownConfig> {
        let mut config = match &self.config {
            Some(path) => DropdownConfig::load(path)?,
            None => DropdownConfig::default(),
        };
        if let Some(value) = &self.default {
            config.default_value = Some(value.clone());
        }
        if let Some(max) = self.max {
            config.max = Some(max);
        }
        if let Some(text) = &self.max_text {
            config.max_text = text.clone();
        }
        if let Some(variant) = self.variant {
            config.variant = variant;
        }
        if let Some(filter) = self.filter {
            config.filter = filter;
        }
        if self.strict {
            config.custom_values_allowed = false;
        }
        if self.parent_controlled {
            config.parent_controlled = true;
        }
        if let Some(title) = &self.title {
            config.title = Some(title.clone());
        }
        if let Some(placeholder) = &self.placeholder {
            config.placeholder = Some(placeholder.clone());
        }
        Ok(config)
    }
}

fn load_inputs(source: &OptionSource, widget: &WidgetArgs) -> (OptionList, DropdownConfig) {
    match source.load().and_then(|options| Ok((options, widget.resolve()?))) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Run the interactive picker and print emitted events.
pub fn cmd_pick(source: &OptionSource, widget: &WidgetArgs) {
    let (options, config) = load_inputs(source, widget);
    info!(options = options.len(), variant = ?config.variant, "launching picker");

    let events = match run_pick_tui(PickApp::new(options, config)) {
        Ok(events) => events,
        Err(e) => {
            eprintln!("UI error: {e}");
            std::process::exit(1);
        }
    };
    for event in events {
        match serde_json::to_string(&event) {
            Ok(line) => println!("{line}"),
            Err(e) => eprintln!("Failed to encode event: {e}"),
        }
    }
}

/// Print the rows the dropdown would show for `text`.
///
/// Each row is `<option index>\t<label>`; the overflow row puts `+<hidden count>`
/// in the index column.
pub fn cmd_filter(text: &str, source: &OptionSource, widget: &WidgetArgs) {
    let (options, config) = load_inputs(source, widget);
    for line in filter_lines(text, options, config) {
        println!("{line}");
    }
}

fn filter_lines(text: &str, options: OptionList, config: DropdownConfig) -> Vec<String> {
    let mut dropdown = DropdownInput::new(options).with_config(config);
    dropdown.set_value(text);
    dropdown
        .entries()
        .iter()
        .map(|entry| match entry {
            Entry::Option(m) => format!("{}\t{}", m.index, m.label),
            Entry::Overflow { label, hidden } => format!("+{}\t{}", hidden, label),
        })
        .collect()
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    use crate::cli::Cli;
    use clap::CommandFactory;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}
