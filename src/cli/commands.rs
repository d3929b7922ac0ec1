use std::error::Error;

use clap::{Parser, Subcommand};

use crate::services::theme::{ThemeCategory, ThemePaths, ThemeSelection, ThemeService};

use super::formatting;

/// Top-level argument parser.
#[derive(Parser)]
#[command(name = "themesync")]
#[command(about = "Synchronize GTK, Qt/Kvantum, icon and cursor themes across desktop backends")]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// The operations the engine exposes to frontends.
#[derive(Subcommand)]
pub enum Commands {
    /// List installed themes, for one category or all of them
    List {
        /// Category to list (gtk, kvantum, icon or cursor)
        category: Option<String>,
    },

    /// Show the active theme per category
    Current,

    /// Validate a selection and write it through every relevant backend
    Apply {
        /// GTK widget theme name
        #[arg(long)]
        gtk: Option<String>,

        /// Kvantum style name
        #[arg(long)]
        kvantum: Option<String>,

        /// Icon theme name
        #[arg(long)]
        icon: Option<String>,

        /// Cursor theme name
        #[arg(long)]
        cursor: Option<String>,
    },
}

/// Executes a parsed command against the user's real configuration and
/// returns the text to print.
///
/// # Errors
/// Returns an error when the configuration root cannot be resolved, a
/// category name does not parse, an authoritative backend file is malformed,
/// or an empty apply is requested.
pub fn run(cli: Cli) -> Result<String, Box<dyn Error>> {
    let service = ThemeService::new(ThemePaths::from_env()?);

    match cli.command {
        Commands::List { category } => {
            let inventory = service.inventory();
            match category {
                Some(raw) => {
                    let category: ThemeCategory = raw.parse()?;
                    Ok(formatting::format_inventory(
                        category,
                        inventory.themes(category),
                    ))
                }
                None => {
                    let sections: Vec<String> = ThemeCategory::ALL
                        .iter()
                        .map(|c| formatting::format_inventory(*c, inventory.themes(*c)))
                        .collect();
                    Ok(sections.join("\n\n"))
                }
            }
        }
        Commands::Current => {
            let selection = service.current_selection()?;
            Ok(formatting::format_selection(&selection))
        }
        Commands::Apply {
            gtk,
            kvantum,
            icon,
            cursor,
        } => {
            let selection = ThemeSelection {
                gtk,
                kvantum,
                icon,
                cursor,
            };
            if selection.is_empty() {
                return Err(
                    "no selection given; pass at least one of --gtk, --kvantum, --icon, --cursor"
                        .into(),
                );
            }
            let report = service.apply(&selection)?;
            Ok(formatting::format_report(&report))
        }
    }
}
