use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use tracing_subscriber::{EnvFilter, fmt};

use parent_helpers_application::{Action, Screen, Store, Wizard};
use parent_helpers_core::profile::{AgentType, ProfileDetails, ProfileEdit};
use parent_helpers_infrastructure::{HelperPaths, JsonProfileRepository, JsonSavedResponseRepository};
use parent_helpers_interaction::OpenAIApiClient;

mod helper;
mod input;
mod render;

use helper::CliHelper;
use input::Command;

type Repl = Editor<CliHelper, DefaultHistory>;

#[derive(Parser)]
#[command(name = "parent-helpers")]
#[command(about = "Parent Helpers - build a parenting coach persona and chat with it", long_about = None)]
struct Args {
    /// Directory holding the profile and saved-response files
    #[arg(long, env = "PARENT_HELPERS_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// OpenAI model, overriding secret.json and OPENAI_MODEL_NAME
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the screens
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let paths = match args.data_dir {
        Some(dir) => HelperPaths::new(dir),
        None => HelperPaths::from_default_dir()?,
    };
    tracing::info!("[Main] Data directory: {}", paths.data_dir().display());

    let mut client = OpenAIApiClient::from_environment();
    if let Some(model) = args.model {
        client = client.with_model(model);
    }
    let has_key = client.has_key();

    let store = Store::open(
        Arc::new(JsonProfileRepository::new(&paths)),
        Arc::new(JsonSavedResponseRepository::new(&paths)),
    )
    .await;
    let mut wizard = Wizard::new(store, Arc::new(client));

    let mut rl: Repl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", "=== Parent Helpers ===".bright_magenta().bold());
    println!("{}", "Type a number to choose, '/help' for commands, or 'quit' to exit.".bright_black());
    if !has_key {
        println!(
            "{}",
            "No OpenAI API key found (secret.json or OPENAI_API_KEY); persona and chat requests will fail."
                .yellow()
        );
    }

    let mut redraw = true;
    loop {
        render::notices(&wizard.take_notices());

        let screen = wizard.screen();
        if redraw {
            render::screen(&wizard);
            if let Some(helper) = rl.helper_mut() {
                helper.set_commands(input::commands_for(screen));
            }
            redraw = false;
        }

        let line = match rl.readline(">> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() && screen != Screen::ProfileDetails {
            continue;
        }
        let _ = rl.add_history_entry(trimmed);

        let action = match input::parse(screen, trimmed) {
            Command::Dispatch(action) => action,
            Command::Form => match collect_form(&mut rl, &wizard)? {
                Some(action) => action,
                None => continue,
            },
            Command::Help => {
                render::help(&input::commands_for(screen));
                continue;
            }
            Command::Quit => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            Command::Invalid(text) => {
                println!("{}", format!("Unknown choice: {}", text).bright_black());
                continue;
            }
        };

        if matches!(action, Action::Send(_) | Action::Retry | Action::PickSource(_)) {
            println!("{}", "Thinking...".bright_black());
        }
        wizard.dispatch(action).await;
        redraw = true;
    }

    Ok(())
}

/// Prompts field by field for the form of the current screen.
///
/// Returns `None` when the user cancels an edit; `/back` on the details form
/// becomes `Action::Back`.
fn collect_form(rl: &mut Repl, wizard: &Wizard) -> Result<Option<Action>> {
    match wizard.screen() {
        Screen::ProfileDetails => {
            let Some(profile_name) = field(rl, "Profile name", "")? else {
                return Ok(Some(Action::Back));
            };
            let Some(parent_name) = field(rl, "Parent name", "")? else {
                return Ok(Some(Action::Back));
            };
            let Some(child_name) = field(rl, "Child name", "")? else {
                return Ok(Some(Action::Back));
            };
            let Some(child_age) = age(rl, 1)? else {
                return Ok(Some(Action::Back));
            };
            Ok(Some(Action::SubmitDetails(ProfileDetails {
                profile_name,
                parent_name,
                child_name,
                child_age,
            })))
        }
        Screen::SavedProfiles => {
            let Some(profile) = wizard.selected_profile() else {
                return Ok(None);
            };
            let mut edit = ProfileEdit::from_profile(profile);
            println!("{}", "Edit each field, /back to cancel.".bright_black());

            let Some(profile_name) = field(rl, "Profile name", &edit.profile_name)? else {
                return Ok(None);
            };
            let Some(parent_name) = field(rl, "Parent name", &edit.parent_name)? else {
                return Ok(None);
            };
            let Some(child_name) = field(rl, "Child name", &edit.child_name)? else {
                return Ok(None);
            };
            let Some(child_age) = age(rl, edit.child_age)? else {
                return Ok(None);
            };
            let Some(agent_type) = field(rl, "Agent type", &edit.agent_type.to_string())? else {
                return Ok(None);
            };
            let Some(persona) = field(rl, "Persona", &edit.persona_description)? else {
                return Ok(None);
            };

            edit.profile_name = profile_name;
            edit.parent_name = parent_name;
            edit.child_name = child_name;
            edit.child_age = child_age;
            match agent_type.trim().parse::<AgentType>() {
                Ok(agent_type) => edit.agent_type = agent_type,
                Err(_) => println!(
                    "{}",
                    format!("Unknown agent type '{}', keeping {}", agent_type, edit.agent_type)
                        .yellow()
                ),
            }
            edit.persona_description = persona;
            Ok(Some(Action::SaveProfileChanges(edit)))
        }
        _ => Ok(None),
    }
}

/// Reads one field, pre-filled with `initial`. `None` means the form was cancelled.
fn field(rl: &mut Repl, label: &str, initial: &str) -> Result<Option<String>> {
    match rl.readline_with_initial(&format!("{}: ", label), (initial, "")) {
        Ok(value) if value.trim() == "/back" => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Reads the child age, asking again until a whole number is entered.
fn age(rl: &mut Repl, initial: i64) -> Result<Option<i64>> {
    loop {
        let Some(value) = field(rl, "Child age (1-21)", &initial.to_string())? else {
            return Ok(None);
        };
        match value.trim().parse::<i64>() {
            Ok(age) => return Ok(Some(age)),
            Err(_) => println!("{}", "Please enter a number.".yellow()),
        }
    }
}
