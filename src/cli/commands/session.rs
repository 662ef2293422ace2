//! `pharm session <collection>`: a line-oriented list screen on stdin.
//!
//! Deletes and edits go through a `CollectionView`, so each one leaves an
//! undo prompt that the next `undo` (or `dismiss`) consumes.

use std::io::Write;
use std::sync::Arc;

use clap::ValueEnum;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::{utils, OutputFormat};
use crate::client::{ApiClient, CollectionView, HttpResource};
use crate::database::models::{Product, Record, Release, Stock, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SessionResource {
    Products,
    Stocks,
    Releases,
    Users,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    List,
    Add(Vec<String>),
    Update(i32, Vec<String>),
    Delete(i32),
    Undo,
    Dismiss,
    Help,
    Quit,
}

const HELP: &str = "commands: list | add field=value... | update <id> field=value... \
                    | delete <id> | undo | dismiss | quit";

/// Parses one input line; `Ok(None)` for a blank line
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };

    let id = |words: &mut std::str::SplitWhitespace<'_>| -> Result<i32, String> {
        let raw = words.next().ok_or_else(|| format!("{} needs an id", verb))?;
        raw.parse().map_err(|_| format!("'{}' is not a valid id", raw))
    };

    let command = match verb {
        "list" | "ls" => SessionCommand::List,
        "add" => SessionCommand::Add(words.map(str::to_string).collect()),
        "update" | "edit" => {
            let key = id(&mut words)?;
            SessionCommand::Update(key, words.map(str::to_string).collect())
        }
        "delete" | "rm" => SessionCommand::Delete(id(&mut words)?),
        "undo" => SessionCommand::Undo,
        "dismiss" => SessionCommand::Dismiss,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        other => return Err(format!("unknown command '{}'; try help", other)),
    };
    Ok(Some(command))
}

pub async fn run(
    resource: SessionResource,
    client: ApiClient,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    match resource {
        SessionResource::Products => session::<Product>(client, output_format).await,
        SessionResource::Stocks => session::<Stock>(client, output_format).await,
        SessionResource::Releases => session::<Release>(client, output_format).await,
        SessionResource::Users => session::<User>(client, output_format).await,
    }
}

async fn session<T: Record + Default>(
    client: ApiClient,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let mut view = CollectionView::new(Arc::new(HttpResource::<T>::new(client)));
    view.refresh().await?;
    utils::output_records(output_format, T::COLLECTION, view.records())?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt::<T>()?;

    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(Some(SessionCommand::Quit)) => break,
            Ok(Some(command)) => {
                if let Err(e) = execute(&mut view, command, output_format).await {
                    utils::output_error(output_format, &e.to_string())?;
                }
            }
            Ok(None) => {}
            Err(message) => utils::output_error(output_format, &message)?,
        }
        prompt::<T>()?;
    }
    Ok(())
}

async fn execute<T: Record + Default>(
    view: &mut CollectionView<T, HttpResource<T>>,
    command: SessionCommand,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    match command {
        SessionCommand::List => {
            view.refresh().await?;
            utils::output_records(output_format, T::COLLECTION, view.records())?;
        }
        SessionCommand::Add(fields) => {
            let record: T = utils::apply_assignments(&T::default(), &fields)?;
            let created = view.add(record).await?;
            utils::output_success(output_format, &format!("Created {}", created.label()), None)?;
        }
        SessionCommand::Update(key, fields) => {
            let Some(current) = view.find(key).cloned() else {
                let message = format!("No {} with id {}", T::COLLECTION, key);
                return utils::output_error(output_format, &message);
            };
            let record = utils::apply_assignments(&current, &fields)?;
            view.save(key, record).await?;
            show_prompt(view, output_format)?;
        }
        SessionCommand::Delete(key) => {
            if !view.remove(key).await? {
                let message = format!("No {} with id {}", T::COLLECTION, key);
                return utils::output_error(output_format, &message);
            }
            show_prompt(view, output_format)?;
        }
        SessionCommand::Undo => {
            if !view.has_pending_undo() {
                return utils::output_error(output_format, "Nothing to undo");
            }
            view.undo().await?;
            show_prompt(view, output_format)?;
        }
        SessionCommand::Dismiss => view.dismiss(),
        SessionCommand::Help => println!("{}", HELP),
        SessionCommand::Quit => {}
    }
    Ok(())
}

fn show_prompt<T: Record + Default>(
    view: &CollectionView<T, HttpResource<T>>,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    match view.message() {
        Some(message) => utils::output_success(output_format, message, None),
        None => Ok(()),
    }
}

fn prompt<T: Record>() -> anyhow::Result<()> {
    print!("{}> ", T::COLLECTION);
    std::io::stdout().flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mutations() {
        assert_eq!(parse_command("delete 4"), Ok(Some(SessionCommand::Delete(4))));
        assert_eq!(
            parse_command("update 2 quantity=5 drug_name=Insulin"),
            Ok(Some(SessionCommand::Update(
                2,
                vec!["quantity=5".to_string(), "drug_name=Insulin".to_string()]
            )))
        );
        assert_eq!(parse_command("  undo "), Ok(Some(SessionCommand::Undo)));
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!(parse_command("delete"), Err("delete needs an id".to_string()));
        assert_eq!(parse_command("delete x"), Err("'x' is not a valid id".to_string()));
        assert!(parse_command("frobnicate").is_err());
    }
}
