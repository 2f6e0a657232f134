//! Interactive memo shell
//!
//! Reads one command per line, dispatches it, and redraws the list. Row
//! numbers typed by the user refer to the list as last displayed, which may
//! be a search result.

use memobook::{style, Intent, MemoError, Outcome, Result, Session, View};
use std::fmt::Display;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  add <text>             Add a memo
  search [term]          Show memos containing term (empty shows all)
  list                   Show all memos
  edit <row> <text>      Replace the text of a row
  delete <row> [row...]  Delete rows (asks for confirmation)
  sort                   Sort newest first
  help                   Show this help
  quit                   Save and exit";

/// One parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add(String),
    Search(String),
    List,
    Edit { row: usize, content: String },
    Delete(Vec<usize>),
    Sort,
    Help,
    Quit,
}

/// Parse a shell line; `Ok(None)` for a blank line
pub fn parse_line(line: &str) -> std::result::Result<Option<ShellCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "add" | "a" => ShellCommand::Add(rest.to_string()),
        "search" | "s" | "/" => ShellCommand::Search(rest.to_string()),
        "list" | "ls" | "l" => ShellCommand::List,
        "edit" | "e" => {
            let (row, content) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| "usage: edit <row> <text>".to_string())?;
            ShellCommand::Edit {
                row: parse_row(row)?,
                content: content.trim().to_string(),
            }
        }
        "delete" | "del" | "rm" | "d" => {
            let rows = rest
                .split_whitespace()
                .map(parse_row)
                .collect::<std::result::Result<Vec<_>, _>>()?;
            if rows.is_empty() {
                return Err("usage: delete <row> [row...]".to_string());
            }
            ShellCommand::Delete(rows)
        }
        "sort" => ShellCommand::Sort,
        "help" | "h" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("unknown command '{}' (try 'help')", other)),
    };

    Ok(Some(command))
}

fn parse_row(text: &str) -> std::result::Result<usize, String> {
    text.parse()
        .map_err(|_| format!("'{}' is not a row number", text))
}

/// Run the shell on the process's stdin and stdout
pub fn run(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(session, stdin.lock(), stdout.lock(), crate::confirm_delete)
}

/// Run the shell until `quit` or end of input
///
/// End of input behaves like `quit`. Bad input lines and output failures
/// never skip the final save; only a failed final save is returned.
pub fn run_with<R, W, C>(session: &mut Session, input: R, mut out: W, mut confirm: C) -> Result<()>
where
    R: BufRead,
    W: Write,
    C: FnMut(usize) -> bool,
{
    let mut view = session.view();
    say(&mut out, HELP);
    print_rows(&mut out, &view);

    let mut lines = input.lines();

    loop {
        let _ = write!(out, "{} ", style::dim("memo>"));
        let _ = out.flush();

        let line = match lines.next() {
            None => {
                say(&mut out, "");
                break;
            }
            Some(Ok(line)) => line,
            Some(Err(e)) if e.kind() == io::ErrorKind::InvalidData => {
                tracing::warn!(error = %e, "Skipped unreadable shell input");
                say(&mut out, style::warning("Input line is not valid UTF-8, ignored"));
                continue;
            }
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Shell input failed, saving and exiting");
                say(&mut out, style::warning(&format!("Input error: {}", e)));
                break;
            }
        };

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                say(&mut out, style::warning(&message));
                continue;
            }
        };

        let intent = match command {
            ShellCommand::Add(content) => Intent::Add(content),
            ShellCommand::Search(term) => Intent::Search(term),
            ShellCommand::List => Intent::Search(String::new()),
            ShellCommand::Edit { row, content } => {
                if row >= view.rows.len() {
                    say(&mut out, style::warning(&format!("No row {} in the current list", row)));
                    continue;
                }
                Intent::EditSelected {
                    selection: view.select_rows([row]),
                    content,
                }
            }
            ShellCommand::Delete(rows) => {
                let selection = view.select_rows(rows);
                if selection.is_empty() {
                    say(&mut out, style::warning("No matching rows"));
                    continue;
                }
                if !confirm(selection.indices().len()) {
                    continue;
                }
                Intent::DeleteSelected(selection)
            }
            ShellCommand::Sort => Intent::SortDescending,
            ShellCommand::Help => {
                say(&mut out, HELP);
                continue;
            }
            ShellCommand::Quit => break,
        };

        match session.dispatch(intent) {
            Ok(Outcome::View(next)) => {
                view = next;
                print_rows(&mut out, &view);
            }
            Ok(Outcome::Ignored) => say(&mut out, style::dim("Nothing to do")),
            Ok(Outcome::Quit) => return Ok(()),
            Err(e @ MemoError::Persistence { .. }) => {
                say(&mut out, format!("{} {}", style::error("Save failed:"), e));
                say(&mut out, style::warning("Your last change may not survive a restart."));
                view = session.view();
            }
            Err(e) => {
                say(&mut out, format!("{} {}", style::error("Error:"), e));
                view = session.view();
                print_rows(&mut out, &view);
            }
        }
    }

    session.dispatch(Intent::Quit).map(|_| ())
}

// Write failures on the terminal are ignored so the loop still reaches its final save.
fn say<W: Write>(out: &mut W, text: impl Display) {
    let _ = writeln!(out, "{}", text);
}

fn print_rows<W: Write>(out: &mut W, view: &View) {
    if view.rows.is_empty() {
        say(out, style::dim("(no memos)"));
        return;
    }
    for (row, entry) in view.rows.iter().enumerate() {
        say(out, format!("{} {}", style::position(row), style::label(&entry.label)));
    }
}
