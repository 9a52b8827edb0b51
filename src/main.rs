//! # ddi - Dropdown Input picker
//!
//! A terminal picker around the `dropdown_input` widget.
//!
//! ## Quick Start
//!
//! ```bash
//! # Pick interactively; events are printed as JSON lines on exit
//! ddi pick Sydney Melbourne Brisbane Adelaide Perth Hobart --max 4
//!
//! # Options from a file, strict mode (free text is cleared on blur)
//! ddi pick -f cities.txt --strict --placeholder "Search..."
//!
//! # Show what the menu would contain for some text
//! ddi filter bri -f cities.txt
//! ```
//!
//! Pass `--log <file>` to write diagnostics; `DDI_LOG` sets the filter.

use clap::Parser;

use dropdown_input::logging::init_file_logging;

mod cli;
mod cmd;

use cli::Cli;
use cmd::*;

fn main() {
    let cli = Cli::parse();

    if let Some(path) = cli.log.as_ref() {
        if let Err(e) = init_file_logging(path) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    match cli.command {
        Commands::Pick { source, widget } => cmd_pick(&source, &widget),
        Commands::Filter { text, source, widget } => cmd_filter(&text, &source, &widget),
        Commands::Completions { shell } => cmd_completions(shell),
    }
}
