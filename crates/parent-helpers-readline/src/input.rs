//! Translation of typed lines into wizard actions.
//!
//! Menu choices are numbers (or names), navigation uses slash commands,
//! and any other text on the chat screen is a question for the coach.

use std::str::FromStr;

use strum::IntoEnumIterator;

use parent_helpers_application::{Action, Screen, SourceChoice};
use parent_helpers_core::profile::{AgentType, SourceType};
use parent_helpers_core::response::Shortcut;

/// What the REPL should do with one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Action),
    /// Collect a multi-field form before dispatching.
    Form,
    Help,
    Quit,
    Invalid(String),
}

/// Slash commands understood on `screen`, used for completion and help.
pub fn commands_for(screen: Screen) -> Vec<&'static str> {
    let mut commands = match screen {
        Screen::Home => vec![],
        Screen::AgentTypeSelect => vec!["/back"],
        Screen::SourceTypeSelect => vec!["/agent", "/back"],
        Screen::SourcePick => vec!["/back"],
        Screen::PersonaGenerate => vec!["/accept", "/retry", "/back"],
        Screen::ProfileDetails => vec!["/fill", "/back"],
        Screen::Created => vec!["/chat", "/another", "/home"],
        Screen::Chat => vec!["/profile", "/shortcut", "/save", "/saved", "/back"],
        Screen::SavedChats => vec!["/delete", "/close"],
        Screen::SavedProfiles => vec!["/edit", "/delete", "/close"],
    };
    commands.extend(["/help", "/quit"]);
    commands
}

pub fn parse(screen: Screen, line: &str) -> Command {
    let line = line.trim();
    match line {
        "quit" | "exit" | "/quit" => return Command::Quit,
        "/help" => return Command::Help,
        _ => {}
    }

    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, argument.trim()),
        None => (line, ""),
    };

    let action = match (screen, command) {
        (Screen::Home, "1" | "new") => Action::NewProfile,
        (Screen::Home, "2" | "chat") => Action::OpenChat,
        (Screen::Home, "3" | "profiles") => Action::OpenSavedProfiles,
        (Screen::Home, "4" | "saved") => Action::OpenSavedChats,

        (Screen::AgentTypeSelect, "/back") => Action::Back,
        (Screen::AgentTypeSelect, choice) => match pick::<AgentType>(choice) {
            Some(agent_type) => Action::ChooseAgentType(agent_type),
            None => return invalid(line),
        },

        (Screen::SourceTypeSelect, "/agent") => Action::ChangeAgentType,
        (Screen::SourceTypeSelect, "/back") => Action::Back,
        (Screen::SourceTypeSelect, choice) => match pick::<SourceType>(choice) {
            Some(source_type) => Action::ChooseSourceType(source_type),
            None => return invalid(line),
        },

        (Screen::SourcePick, "/back") => Action::Back,
        (Screen::SourcePick, _) if line.starts_with('/') => return invalid(line),
        (Screen::SourcePick, _) => match number(line) {
            Some(index) => Action::PickSource(SourceChoice::Catalog(index)),
            None if line.parse::<usize>().is_ok() => return invalid(line),
            None => Action::PickSource(SourceChoice::Custom(line.to_string())),
        },

        (Screen::PersonaGenerate, "/accept") => Action::Accept,
        (Screen::PersonaGenerate, "/retry") => Action::Retry,
        (Screen::PersonaGenerate, "/back") => Action::Back,

        (Screen::ProfileDetails, "" | "/fill") => return Command::Form,
        (Screen::ProfileDetails, "/back") => Action::Back,

        (Screen::Created, "/chat") => Action::GoChat,
        (Screen::Created, "/another") => Action::CreateAnother,
        (Screen::Created, "/home") => Action::GoHome,

        (Screen::Chat, "/profile") => match number(argument) {
            Some(index) => Action::SelectProfile(index),
            None => return invalid(line),
        },
        (Screen::Chat, "/shortcut") => match Shortcut::from_str(argument) {
            Ok(shortcut) => Action::SelectShortcut(shortcut),
            Err(_) => return invalid(line),
        },
        (Screen::Chat, "/save") => Action::SaveResponse,
        (Screen::Chat, "/saved") => Action::OpenSavedChats,
        (Screen::Chat, "/back") => Action::Back,
        (Screen::Chat, _) if line.starts_with('/') => return invalid(line),
        (Screen::Chat, _) => Action::Send(line.to_string()),

        (Screen::SavedChats, "/delete") => Action::DeleteResponse,
        (Screen::SavedChats, "/close") => Action::Close,
        (Screen::SavedChats, choice) => match number(choice) {
            Some(index) => Action::SelectResponse(index),
            None => return invalid(line),
        },

        (Screen::SavedProfiles, "/edit") => return Command::Form,
        (Screen::SavedProfiles, "/delete") => Action::DeleteProfile,
        (Screen::SavedProfiles, "/close") => Action::Close,
        (Screen::SavedProfiles, choice) => match number(choice) {
            Some(index) => Action::SelectProfile(index),
            None => return invalid(line),
        },

        _ => return invalid(line),
    };

    Command::Dispatch(action)
}

/// Parses a 1-based menu number into a 0-based index.
fn number(text: &str) -> Option<usize> {
    text.parse::<usize>().ok()?.checked_sub(1)
}

/// Picks an enum variant by menu number or by name.
fn pick<T: IntoEnumIterator + FromStr>(choice: &str) -> Option<T> {
    match number(choice) {
        Some(index) => T::iter().nth(index),
        None => T::from_str(choice).ok(),
    }
}

fn invalid(line: &str) -> Command {
    Command::Invalid(line.to_string())
}
