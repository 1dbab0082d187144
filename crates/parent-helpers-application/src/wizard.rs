//! The wizard state machine.
//!
//! `Wizard::dispatch` is the single entry point: it routes an action to the
//! handler for the current screen, applies the resulting transition, runs
//! the entry behaviour of the next screen, and converts every failure into
//! a notice. No action ever ends the session.

use std::sync::Arc;

use parent_helpers_core::completion::CompletionService;
use parent_helpers_core::profile::{Profile, ProfileDetails, ProfileEdit};
use parent_helpers_core::response::SavedResponse;

use crate::chat_responder::ChatResponder;
use crate::persona_generator::PersonaGenerator;
use crate::screen::{Action, Screen, SourceChoice};
use crate::session::{Notice, SessionContext};
use crate::store::Store;

pub struct Wizard {
    session: SessionContext,
    store: Store,
    persona_generator: PersonaGenerator,
    chat_responder: ChatResponder,
}

impl Wizard {
    /// Starts on the home screen. Store load warnings become notices.
    pub fn new(store: Store, service: Arc<dyn CompletionService>) -> Self {
        let mut wizard = Self {
            session: SessionContext::new(),
            store,
            persona_generator: PersonaGenerator::new(service.clone()),
            chat_responder: ChatResponder::new(service),
        };
        wizard.collect_store_warnings();
        wizard
    }

    pub fn screen(&self) -> Screen {
        self.session.screen
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Profile currently selected on the chat screen.
    pub fn active_profile(&self) -> Option<&Profile> {
        self.store.profile(self.session.active_profile)
    }

    /// Saved response currently selected on the saved-chats screen.
    pub fn selected_response(&self) -> Option<&SavedResponse> {
        self.store.response(self.session.selected_response)
    }

    /// Profile currently selected in the profile manager.
    pub fn selected_profile(&self) -> Option<&Profile> {
        self.store.profile(self.session.selected_profile)
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.session.take_notices()
    }

    /// Handles one user action and returns the screen to show next.
    pub async fn dispatch(&mut self, action: Action) -> Screen {
        let current = self.session.screen;
        tracing::debug!("[Wizard] {:?} <- {:?}", current, action);

        let requested = match current {
            Screen::Home => self.handle_home(action),
            Screen::AgentTypeSelect => self.handle_agent_type(action),
            Screen::SourceTypeSelect => self.handle_source_type(action),
            Screen::SourcePick => self.handle_source_pick(action),
            Screen::PersonaGenerate => self.handle_persona(action).await,
            Screen::ProfileDetails => self.handle_details(action).await,
            Screen::Created => self.handle_created(action),
            Screen::Chat => self.handle_chat(action).await,
            Screen::SavedChats => self.handle_saved_chats(action).await,
            Screen::SavedProfiles => self.handle_saved_profiles(action).await,
        };

        let next = self.redirect_if_empty(requested);
        self.session.screen = next;
        if next != current {
            tracing::info!("[Wizard] {:?} -> {:?}", current, next);
            self.enter(next).await;
        }

        self.collect_store_warnings();
        self.session.screen
    }

    fn unavailable(&mut self, action: &Action) -> Screen {
        self.session
            .info(format!("{:?} is not available on this screen.", action));
        self.session.screen
    }

    // ========================================================================
    // Handlers
    // ========================================================================

    fn handle_home(&mut self, action: Action) -> Screen {
        match action {
            Action::NewProfile => {
                self.session.start_new_profile();
                Screen::SourceTypeSelect
            }
            Action::OpenChat => {
                if self.store.profiles().is_empty() {
                    self.session.warning("No profiles – create one first.");
                    self.session.start_new_profile();
                    Screen::SourceTypeSelect
                } else {
                    Screen::Chat
                }
            }
            Action::OpenSavedProfiles => {
                if self.store.profiles().is_empty() {
                    self.session.warning("No profiles yet.");
                    Screen::Home
                } else {
                    Screen::SavedProfiles
                }
            }
            Action::OpenSavedChats => {
                if self.store.responses().is_empty() {
                    self.session.warning("No saved responses yet!");
                    Screen::Home
                } else {
                    Screen::SavedChats
                }
            }
            other => self.unavailable(&other),
        }
    }

    fn handle_agent_type(&mut self, action: Action) -> Screen {
        match action {
            Action::ChooseAgentType(agent_type) => {
                self.session.agent_type = agent_type;
                Screen::SourceTypeSelect
            }
            Action::Back => Screen::SourceTypeSelect,
            other => self.unavailable(&other),
        }
    }

    fn handle_source_type(&mut self, action: Action) -> Screen {
        match action {
            Action::ChooseSourceType(source_type) => {
                self.session.source_type = Some(source_type);
                self.session.source_name = None;
                Screen::SourcePick
            }
            Action::ChangeAgentType => Screen::AgentTypeSelect,
            Action::Back | Action::GoHome => Screen::Home,
            other => self.unavailable(&other),
        }
    }

    fn handle_source_pick(&mut self, action: Action) -> Screen {
        let Some(source_type) = self.session.source_type else {
            self.session.warning("Choose a source type first.");
            return Screen::SourceTypeSelect;
        };

        match action {
            Action::PickSource(choice) => {
                let name = match choice {
                    SourceChoice::Catalog(index) => match source_type.catalog().get(index) {
                        Some(name) => name.to_string(),
                        None => {
                            self.session.warning("Please choose one of the listed options.");
                            return Screen::SourcePick;
                        }
                    },
                    SourceChoice::Custom(text) => text.trim().to_string(),
                };

                if name.is_empty() {
                    self.session.warning("Please provide a name.");
                    return Screen::SourcePick;
                }

                self.session.source_name = Some(name);
                self.session.persona_description = None;
                Screen::PersonaGenerate
            }
            Action::Back => Screen::SourceTypeSelect,
            other => self.unavailable(&other),
        }
    }

    async fn handle_persona(&mut self, action: Action) -> Screen {
        match action {
            Action::Retry => {
                self.session.persona_description = None;
                self.generate_persona().await;
                Screen::PersonaGenerate
            }
            Action::Accept => {
                if self.session.persona_description.is_some() {
                    Screen::ProfileDetails
                } else {
                    self.session
                        .warning("No persona yet – retry the generation first.");
                    Screen::PersonaGenerate
                }
            }
            Action::Back => Screen::SourcePick,
            other => self.unavailable(&other),
        }
    }

    async fn handle_details(&mut self, action: Action) -> Screen {
        match action {
            Action::SubmitDetails(details) => self.create_profile(details).await,
            Action::Back => Screen::PersonaGenerate,
            other => self.unavailable(&other),
        }
    }

    fn handle_created(&mut self, action: Action) -> Screen {
        match action {
            Action::GoChat => Screen::Chat,
            Action::CreateAnother => {
                self.session.clear_source();
                Screen::SourceTypeSelect
            }
            Action::GoHome => Screen::Home,
            other => self.unavailable(&other),
        }
    }

    async fn handle_chat(&mut self, action: Action) -> Screen {
        match action {
            Action::SelectProfile(index) => {
                if index < self.store.profiles().len() {
                    self.session.active_profile = index;
                } else {
                    self.session.warning("No such profile.");
                }
                Screen::Chat
            }
            Action::SelectShortcut(shortcut) => {
                self.session.shortcut = shortcut;
                Screen::Chat
            }
            Action::Send(question) => {
                self.ask(question).await;
                Screen::Chat
            }
            Action::SaveResponse => self.save_response().await,
            Action::OpenSavedChats => {
                if self.store.responses().is_empty() {
                    self.session.warning("No saved responses yet.");
                    Screen::Chat
                } else {
                    Screen::SavedChats
                }
            }
            Action::Back | Action::GoHome => Screen::Home,
            other => self.unavailable(&other),
        }
    }

    async fn handle_saved_chats(&mut self, action: Action) -> Screen {
        match action {
            Action::SelectResponse(index) => {
                if index < self.store.responses().len() {
                    self.session.selected_response = index;
                } else {
                    self.session.warning("No such saved chat.");
                }
                Screen::SavedChats
            }
            Action::DeleteResponse => {
                let index = self.session.selected_response;
                match self.store.delete_response(index).await {
                    Ok(_) => {
                        self.session.success("Saved chat deleted.");
                        self.session.selected_response =
                            clamp_index(index, self.store.responses().len());
                    }
                    Err(e) => self.session.error(e.to_string()),
                }
                Screen::SavedChats
            }
            Action::Close | Action::Back | Action::GoHome => Screen::Home,
            other => self.unavailable(&other),
        }
    }

    async fn handle_saved_profiles(&mut self, action: Action) -> Screen {
        match action {
            Action::SelectProfile(index) => {
                if index < self.store.profiles().len() {
                    self.session.selected_profile = index;
                } else {
                    self.session.warning("No such profile.");
                }
                Screen::SavedProfiles
            }
            Action::SaveProfileChanges(edit) => {
                self.update_profile(edit).await;
                Screen::SavedProfiles
            }
            Action::DeleteProfile => {
                self.delete_profile().await;
                Screen::SavedProfiles
            }
            Action::Close | Action::Back | Action::GoHome => Screen::Home,
            other => self.unavailable(&other),
        }
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Entry behaviour of `screen`, run only when arriving from another screen.
    async fn enter(&mut self, screen: Screen) {
        match screen {
            Screen::PersonaGenerate if self.session.persona_description.is_none() => {
                self.generate_persona().await;
            }
            Screen::Chat => {
                self.session.active_profile =
                    clamp_index(self.session.active_profile, self.store.profiles().len());
            }
            Screen::SavedChats => {
                self.session.selected_response =
                    clamp_index(self.session.selected_response, self.store.responses().len());
            }
            Screen::SavedProfiles => {
                self.session.selected_profile =
                    clamp_index(self.session.selected_profile, self.store.profiles().len());
            }
            _ => {}
        }
    }

    /// Listing screens are never shown over an empty collection.
    fn redirect_if_empty(&mut self, screen: Screen) -> Screen {
        let empty = match screen {
            Screen::Chat | Screen::SavedProfiles => self.store.profiles().is_empty(),
            Screen::SavedChats => self.store.responses().is_empty(),
            _ => false,
        };
        if empty {
            tracing::debug!("[Wizard] {:?} has nothing to list, going home", screen);
            Screen::Home
        } else {
            screen
        }
    }

    async fn generate_persona(&mut self) {
        let (Some(source_type), Some(source_name)) =
            (self.session.source_type, self.session.source_name.clone())
        else {
            self.session.warning("Choose a source before generating a persona.");
            return;
        };

        match self
            .persona_generator
            .generate(source_type, &source_name)
            .await
        {
            Ok(description) => self.session.persona_description = Some(description),
            Err(e) => {
                tracing::warn!("[Wizard] Persona generation failed: {}", e);
                self.session.error(format!("Persona generation failed: {}", e));
            }
        }
    }

    async fn create_profile(&mut self, details: ProfileDetails) -> Screen {
        let (Some(source_type), Some(source_name), Some(persona)) = (
            self.session.source_type,
            self.session.source_name.as_deref(),
            self.session.persona_description.as_deref(),
        ) else {
            self.session
                .warning("The persona is incomplete – go back and generate it first.");
            return Screen::ProfileDetails;
        };

        match details.into_profile(self.session.agent_type, source_type, source_name, persona) {
            Ok(profile) => {
                self.store.add_profile(profile).await;
                self.session.active_profile = self.store.profiles().len() - 1;
                self.session.success("Profile saved!");
                Screen::Created
            }
            Err(e) => {
                self.session.warning(e.to_string());
                Screen::ProfileDetails
            }
        }
    }

    async fn ask(&mut self, question: String) {
        if question.trim().is_empty() {
            self.session.warning("Please type a question first.");
            return;
        }
        let Some(profile) = self.store.profile(self.session.active_profile) else {
            self.session.warning("Select a profile first.");
            return;
        };

        match self
            .chat_responder
            .respond(profile, self.session.shortcut, &question)
            .await
        {
            Ok(answer) => {
                self.session.last_question = Some(question);
                self.session.last_answer = Some(answer);
            }
            Err(e) => {
                tracing::warn!("[Wizard] Chat request failed: {}", e);
                self.session.error(format!("Chat request failed: {}", e));
            }
        }
    }

    async fn save_response(&mut self) -> Screen {
        let (Some(question), Some(answer)) = (
            self.session.last_question.clone(),
            self.session.last_answer.clone(),
        ) else {
            self.session.warning("Send a question before saving.");
            return Screen::Chat;
        };
        let Some(profile) = self.store.profile(self.session.active_profile) else {
            self.session.warning("Select a profile first.");
            return Screen::Chat;
        };

        let record = SavedResponse {
            profile: profile.profile_name.clone(),
            shortcut: self.session.shortcut,
            question,
            answer,
        };
        if self.store.add_response(record).await {
            self.session.success("Response saved.");
            self.session.selected_response = self.store.responses().len() - 1;
        } else {
            self.session.info("This response is already saved.");
        }
        Screen::SavedChats
    }

    async fn update_profile(&mut self, edit: ProfileEdit) {
        let index = self.session.selected_profile;
        let Some(original) = self.store.profile(index) else {
            self.session.warning("No such profile.");
            return;
        };

        let updated = match edit.apply_to(original) {
            Ok(updated) => updated,
            Err(e) => {
                self.session.warning(e.to_string());
                return;
            }
        };
        match self.store.update_profile(index, updated).await {
            Ok(()) => self.session.success("Profile updated!"),
            Err(e) => self.session.error(e.to_string()),
        }
    }

    async fn delete_profile(&mut self) {
        let index = self.session.selected_profile;
        match self.store.delete_profile(index).await {
            Ok(removed) => {
                let remaining = self.store.profiles().len();
                self.session
                    .success(format!("Profile '{}' deleted.", removed.profile_name));
                self.session.selected_profile = clamp_index(index, remaining);
                // Keep the chat pointing at the same profile when possible
                if self.session.active_profile > index {
                    self.session.active_profile -= 1;
                }
                self.session.active_profile = clamp_index(self.session.active_profile, remaining);
            }
            Err(e) => self.session.error(e.to_string()),
        }
    }

    fn collect_store_warnings(&mut self) {
        for warning in self.store.take_warnings() {
            self.session.warning(warning.to_string());
        }
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}
