//! Memobook - Single-user memo manager
//!
//! Main entry point for the `mb` CLI.

mod commands;
mod shell;

use clap::Parser;
use commands::{Cli, Commands};
use dialoguer::{theme::ColorfulTheme, Confirm};
use memobook::config::{validate_config_result, MemobookConfig};
use memobook::{style, Intent, LoadOutcome, MemoError, Outcome, Session, View};
use std::path::Path;
use std::process;

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if let Err(e) = memobook::logging::init(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if let Err(e) = run(cli) {
        eprintln!("{} {}", style::error("Error:"), e);
        if e.is_persistence() {
            eprintln!("{}", style::warning("Your last change may not survive a restart."));
        }
        process::exit(1);
    }
}

fn run(cli: Cli) -> memobook::Result<()> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(MemobookConfig::default_path);

    if let Commands::Init = cli.command {
        return handle_init_command(&config_path);
    }

    let mut config = MemobookConfig::load_or_default(&config_path)?;
    if let Some(file) = cli.file {
        config.memo_file = file;
    }
    validate_config_result(&config)?;

    let mut session = Session::from_config(&config);
    report_load(&session);

    match cli.command {
        Commands::Init => unreachable!("handled above"),

        Commands::Add { content } => match session.dispatch(Intent::Add(content))? {
            Outcome::View(view) => {
                println!("{}", style::success("Added memo"));
                if let Some(row) = view.rows.last() {
                    print_row(row.position, &row.label);
                }
            }
            _ => {
                return Err(MemoError::Other("Memo content cannot be empty".to_string()));
            }
        },

        Commands::List => {
            let view = session.view();
            println!(
                "{} {} memos",
                style::header("Memos:"),
                style::count(view.rows.len())
            );
            print_view(&view);
        }

        Commands::Search { term } => {
            if let Outcome::View(view) = session.dispatch(Intent::Search(term.clone()))? {
                println!(
                    "Search results for '{}': {} memos",
                    term,
                    style::count(view.rows.len())
                );
                print_view(&view);
            }
        }

        Commands::Edit { index, content } => {
            let selection = session.view().select_positions([index]);
            let intent = Intent::EditSelected { selection, content };
            match session.dispatch(intent)? {
                Outcome::View(view) => {
                    println!("{}", style::success("Updated memo"));
                    if let Some(row) = view.rows.iter().find(|r| r.position == index) {
                        print_row(row.position, &row.label);
                    }
                }
                _ => {
                    return Err(MemoError::Other("Memo content cannot be empty".to_string()));
                }
            }
        }

        Commands::Delete { indices, yes } => {
            let view = session.view();
            let targets: Vec<_> = view
                .rows
                .iter()
                .filter(|row| indices.contains(&row.position))
                .collect();

            if targets.is_empty() {
                println!("{}", style::dim("No memos at the given positions"));
                return Ok(());
            }

            for row in &targets {
                print_row(row.position, &row.label);
            }
            if !yes && !confirm_delete(targets.len()) {
                println!("{}", style::dim("Cancelled"));
                return Ok(());
            }

            let removed = targets.len();
            session.dispatch(Intent::DeleteSelected(view.select_positions(indices)))?;
            println!("{} {} memos", style::success("Deleted"), removed);
        }

        Commands::Sort => {
            if let Outcome::View(view) = session.dispatch(Intent::SortDescending)? {
                if !config.persist_sort {
                    println!(
                        "{}",
                        style::dim("Sort order is not saved (persist_sort: false)")
                    );
                }
                print_view(&view);
            }
        }

        Commands::Shell => {
            shell::run(&mut session)?;
        }
    }

    Ok(())
}

fn handle_init_command(config_path: &Path) -> memobook::Result<()> {
    if config_path.exists() {
        println!(
            "Configuration already exists at {}",
            config_path.display()
        );
        return Ok(());
    }

    let config = MemobookConfig::new();
    config.save(config_path)?;

    println!("{} {}", style::success("Created"), config_path.display());
    println!("Memo file: {}", config.memo_file.display());
    Ok(())
}

fn report_load(session: &Session) {
    let path = session.store().path().display();
    match session.load_outcome() {
        LoadOutcome::Corrupt(reason) => eprintln!(
            "{} {} is not a valid memo file ({}); starting with no memos",
            style::warning("Warning:"),
            path,
            reason
        ),
        LoadOutcome::Unreadable(reason) => eprintln!(
            "{} could not read {} ({}); starting with no memos",
            style::warning("Warning:"),
            path,
            reason
        ),
        LoadOutcome::Loaded(_) | LoadOutcome::Missing | LoadOutcome::Empty => {}
    }
}

/// Ask before deleting; any prompt failure counts as "no"
pub(crate) fn confirm_delete(count: usize) -> bool {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Delete {} selected memo(s)?", count))
        .default(false)
        .interact()
        .unwrap_or(false)
}

fn print_view(view: &View) {
    if view.rows.is_empty() {
        println!("{}", style::dim("(no memos)"));
        return;
    }
    for row in &view.rows {
        print_row(row.position, &row.label);
    }
}

fn print_row(position: usize, label: &str) {
    println!("{} {}", style::position(position), style::label(label));
}
