//! Screens of the wizard and the actions a user can take on them.

use parent_helpers_core::profile::{AgentType, ProfileDetails, ProfileEdit, SourceType};
use parent_helpers_core::response::Shortcut;

/// The screen currently shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Home,
    AgentTypeSelect,
    SourceTypeSelect,
    SourcePick,
    PersonaGenerate,
    ProfileDetails,
    Created,
    Chat,
    SavedChats,
    SavedProfiles,
}

impl Screen {
    /// Heading shown above the screen body.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "PARENT HELPERS",
            Screen::AgentTypeSelect => "SELECT AN AGENT TYPE",
            Screen::SourceTypeSelect => "SELECT A PARENTING SOURCE TYPE",
            Screen::SourcePick => "CHOOSE A SOURCE",
            Screen::PersonaGenerate => "YOUR PARENTING AGENT PERSONA",
            Screen::ProfileDetails => "PARENTING AGENT DETAILS",
            Screen::Created => "PARENTING AGENT PROFILE CREATED!",
            Screen::Chat => "CHAT",
            Screen::SavedChats => "SAVED CHATS",
            Screen::SavedProfiles => "MY PROFILES",
        }
    }
}

/// A source picked on the source screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceChoice {
    /// Index into the catalog of the current source type.
    Catalog(usize),
    /// Free-text source name.
    Custom(String),
}

/// Something the user asked for. Which actions apply depends on the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Home
    NewProfile,
    OpenChat,
    OpenSavedProfiles,
    OpenSavedChats,

    // Profile creation
    ChangeAgentType,
    ChooseAgentType(AgentType),
    ChooseSourceType(SourceType),
    PickSource(SourceChoice),
    Retry,
    Accept,
    SubmitDetails(ProfileDetails),
    CreateAnother,
    GoChat,
    GoHome,

    // Chat
    SelectProfile(usize),
    SelectShortcut(Shortcut),
    Send(String),
    SaveResponse,

    // Saved chats
    SelectResponse(usize),
    DeleteResponse,

    // Profile manager
    SaveProfileChanges(ProfileEdit),
    DeleteProfile,

    Back,
    Close,
}
