//! State command implementation.
//!
//! Inspects and edits the saved input snapshot.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use printcost_core::InputField;

use crate::cli::{OutputFormat, Session};
use crate::commands::{note_source, open_snapshot, print_input, report_findings};
use crate::error::CliResult;
use crate::output::{print_header, print_info, print_json, print_output, print_success};

/// Arguments for the state command.
#[derive(Args, Debug)]
pub struct StateArgs {
    #[command(subcommand)]
    pub command: StateCommand,
}

/// State subcommands.
#[derive(Subcommand, Debug)]
pub enum StateCommand {
    /// Show the saved input (or the defaults if none is saved)
    Show,

    /// Set one field and save
    Set(SetArgs),

    /// Delete the saved input
    Reset,

    /// Show the state file location
    Path,

    /// List editable field keys
    Fields,
}

/// Arguments for set subcommand.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Field key, e.g. variable.part_mass
    pub key: String,

    /// New value
    pub value: String,
}

/// One editable field.
#[derive(Debug, Serialize, Tabled)]
pub struct FieldInfo {
    #[tabled(rename = "Key")]
    pub key: &'static str,
    #[tabled(rename = "Kind")]
    pub kind: &'static str,
    #[tabled(rename = "Description")]
    pub description: &'static str,
}

impl FieldInfo {
    fn all() -> Vec<Self> {
        InputField::all()
            .iter()
            .map(|field| Self {
                key: field.key(),
                kind: field.kind().as_str(),
                description: field.description(),
            })
            .collect()
    }
}

/// Execute the state command.
pub fn execute(args: StateArgs, session: &Session) -> CliResult<()> {
    match args.command {
        StateCommand::Show => execute_show(session),
        StateCommand::Set(set_args) => execute_set(set_args, session),
        StateCommand::Reset => execute_reset(session),
        StateCommand::Path => execute_path(session),
        StateCommand::Fields => execute_fields(session),
    }
}

/// Show the saved input.
fn execute_show(session: &Session) -> CliResult<()> {
    let (input, source) = open_snapshot(session).load_with_source()?;
    note_source(source, session);
    print_input(&input, "Saved Input", session)
}

/// Set one field.
fn execute_set(args: SetArgs, session: &Session) -> CliResult<()> {
    let field: InputField = args.key.parse()?;
    let input = open_snapshot(session).update_text(field, &args.value)?;
    let value = input.value_of(field);

    report_findings(&input, Some(field), session);

    match session.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "key": field.key(),
            "value": value,
        }))?,
        OutputFormat::Minimal => println!("{value}"),
        OutputFormat::Table | OutputFormat::Csv => {
            if !session.quiet {
                print_success(&format!("Set {} = {}", field.key(), value));
            }
        }
    }
    Ok(())
}

/// Delete the saved input.
fn execute_reset(session: &Session) -> CliResult<()> {
    let removed = open_snapshot(session).reset()?;
    if !session.quiet {
        if removed {
            print_success("Reset saved input to defaults");
        } else {
            print_info("Nothing saved; already using defaults");
        }
    }
    Ok(())
}

/// Show the state file location.
fn execute_path(session: &Session) -> CliResult<()> {
    let path = &session.state_path;
    let exists = path.exists();
    match session.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "path": path.display().to_string(),
            "exists": exists,
        }))?,
        OutputFormat::Minimal | OutputFormat::Csv => println!("{}", path.display()),
        OutputFormat::Table => {
            print_info(&format!("State file: {}", path.display()));
            if exists {
                print_info("Status: exists");
            } else {
                print_info("Status: not created yet (using defaults)");
            }
        }
    }
    Ok(())
}

/// List editable fields.
fn execute_fields(session: &Session) -> CliResult<()> {
    let fields = FieldInfo::all();
    match session.format {
        OutputFormat::Table => {
            print_header("Editable Fields");
            print_output(&fields, session.format)?;
        }
        OutputFormat::Json | OutputFormat::Csv | OutputFormat::Minimal => {
            print_output(&fields, session.format)?
        }
    }
    Ok(())
}
