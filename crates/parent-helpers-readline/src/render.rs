//! Terminal rendering of wizard screens and notices.

use colored::Colorize;
use strum::IntoEnumIterator;

use parent_helpers_application::{Notice, NoticeLevel, Screen, Wizard};
use parent_helpers_core::profile::{AgentType, Profile, SourceType};
use parent_helpers_core::response::Shortcut;

pub fn screen(wizard: &Wizard) {
    let session = wizard.session();
    println!();
    println!("{}", format!("=== {} ===", wizard.screen().title()).bright_magenta().bold());

    match wizard.screen() {
        Screen::Home => {
            option(1, "Create a new parenting agent");
            option(2, "Chat with a parenting agent");
            option(3, "My profiles");
            option(4, "Saved chats");
        }
        Screen::AgentTypeSelect => {
            for (i, agent_type) in AgentType::iter().enumerate() {
                marked(i + 1, &agent_type.to_string(), agent_type == session.agent_type);
            }
        }
        Screen::SourceTypeSelect => {
            println!("{}", format!("Agent type: {} (/agent to change)", session.agent_type).bright_black());
            for (i, source_type) in SourceType::iter().enumerate() {
                option(i + 1, &source_type.to_string());
            }
        }
        Screen::SourcePick => {
            if let Some(source_type) = session.source_type {
                for (i, name) in source_type.catalog().iter().enumerate() {
                    option(i + 1, name);
                }
                println!("{}", format!("...or type any other {} name.", source_type).bright_black());
            }
        }
        Screen::PersonaGenerate => {
            if let Some(name) = &session.source_name {
                println!("{}", format!("Source: {}", name).bright_black());
            }
            match &session.persona_description {
                Some(persona) => text(persona),
                None => println!("{}", "(no persona yet - /retry to generate)".yellow()),
            }
            println!("{}", "/accept to continue, /retry to regenerate, /back to pick again".bright_black());
        }
        Screen::ProfileDetails => {
            println!("{}", "Press Enter (or /fill) to enter the profile details.".bright_black());
        }
        Screen::Created => {
            if let Some(profile) = wizard.active_profile() {
                profile_summary(profile);
            }
            println!("{}", "/chat to start chatting, /another for a new agent, /home".bright_black());
        }
        Screen::Chat => chat(wizard),
        Screen::SavedChats => {
            for (i, response) in wizard.store().responses().iter().enumerate() {
                marked(i + 1, &response.title(), i == session.selected_response);
            }
            if let Some(response) = wizard.selected_response() {
                println!();
                println!("{}", format!("Q: {}", response.question).green());
                text(&response.answer);
            }
        }
        Screen::SavedProfiles => {
            for (i, profile) in wizard.store().profiles().iter().enumerate() {
                marked(i + 1, &profile.profile_name, i == session.selected_profile);
            }
            if let Some(profile) = wizard.selected_profile() {
                println!();
                profile_summary(profile);
            }
        }
    }
}

fn chat(wizard: &Wizard) {
    let session = wizard.session();

    println!("{}", "Profiles (/profile N):".bright_black());
    for (i, profile) in wizard.store().profiles().iter().enumerate() {
        marked(i + 1, &profile.profile_name, i == session.active_profile);
    }
    println!("{}", "Shortcuts (/shortcut NAME):".bright_black());
    for shortcut in Shortcut::iter() {
        let line = format!("{:<8} {}", shortcut.tag(), shortcut.description());
        if shortcut == session.shortcut {
            println!("  {}", format!("* {}", line).bright_cyan());
        } else {
            println!("    {}", line);
        }
    }

    if let (Some(question), Some(answer)) = (&session.last_question, &session.last_answer) {
        println!();
        println!("{}", format!("> {}", question).green());
        text(answer);
    }
    println!("{}", "Type a question, /save to keep the last answer.".bright_black());
}

fn profile_summary(profile: &Profile) {
    println!("{} {}", "Profile:".bold(), profile.profile_name);
    println!("{} {}", "Agent:".bold(), profile.agent_type);
    println!("{} {}", "Parent:".bold(), profile.parent_name);
    println!("{} {} ({})", "Child:".bold(), profile.child_name, profile.child_age);
    println!("{} {} '{}'", "Source:".bold(), profile.source_type, profile.source_name);
    text(&profile.persona_description);
}

fn option(number: usize, label: &str) {
    println!("  {} {}", format!("{}.", number).bright_cyan(), label);
}

fn marked(number: usize, label: &str, current: bool) {
    if current {
        println!("  {} {}", format!("{}.", number).bright_cyan(), label.bold());
    } else {
        option(number, label);
    }
}

fn text(body: &str) {
    for line in body.lines() {
        println!("{}", line.bright_blue());
    }
}

pub fn notices(notices: &[Notice]) {
    for notice in notices {
        let line = match notice.level {
            NoticeLevel::Info => notice.message.bright_black(),
            NoticeLevel::Success => notice.message.bright_green(),
            NoticeLevel::Warning => notice.message.yellow(),
            NoticeLevel::Error => notice.message.red(),
        };
        println!("{}", line);
    }
}

pub fn help(commands: &[&str]) {
    println!("{}", format!("Commands: {}", commands.join(", ")).bright_black());
    println!("{}", "Numbers pick from the list; 'quit' or Ctrl-D exits.".bright_black());
}
