mod common;

use common::{ScriptedService, alex, named, open_store, open_wizard};
use parent_helpers_application::{Action, NoticeLevel, Screen, SourceChoice, Wizard};
use parent_helpers_core::completion::PromptRole;
use parent_helpers_core::profile::{AgentType, ProfileDetails, ProfileEdit, SourceType};
use parent_helpers_core::response::Shortcut;
use parent_helpers_infrastructure::HelperPaths;
use tempfile::TempDir;

const PERSONA_REPLY: &str = r#"{"persona_description": "Warm, firm and consistent"}"#;

fn alex_details() -> ProfileDetails {
    ProfileDetails {
        profile_name: "Alex".to_string(),
        parent_name: "Sam".to_string(),
        child_name: "Kim".to_string(),
        child_age: 7,
    }
}

async fn wizard_with_alex(paths: &HelperPaths, service: std::sync::Arc<ScriptedService>) -> Wizard {
    let mut store = open_store(paths).await;
    store.add_profile(alex()).await;
    Wizard::new(store, service)
}

#[tokio::test]
async fn test_create_profile_from_book() {
    let temp_dir = TempDir::new().unwrap();
    let paths = HelperPaths::new(temp_dir.path());
    let service = ScriptedService::new();
    service.reply(PERSONA_REPLY);
    let mut wizard = open_wizard(&paths, service.clone()).await;

    assert_eq!(wizard.dispatch(Action::NewProfile).await, Screen::SourceTypeSelect);
    assert_eq!(
        wizard.dispatch(Action::ChooseSourceType(SourceType::Book)).await,
        Screen::SourcePick
    );
    assert_eq!(
        wizard.dispatch(Action::PickSource(SourceChoice::Catalog(4))).await,
        Screen::PersonaGenerate
    );
    assert_eq!(
        wizard.session().persona_description.as_deref(),
        Some("Warm, firm and consistent")
    );

    let requests = service.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].json_reply);
    assert_eq!(requests[0].messages[0].role, PromptRole::User);
    assert!(requests[0].messages[0]
        .content
        .contains("'Positive Parenting: An Essential Guide'"));

    assert_eq!(wizard.dispatch(Action::Accept).await, Screen::ProfileDetails);
    assert_eq!(
        wizard.dispatch(Action::SubmitDetails(alex_details())).await,
        Screen::Created
    );
    let notices = wizard.take_notices();
    assert!(notices.iter().any(|n| n.level == NoticeLevel::Success));

    let reopened = open_store(&paths).await;
    assert_eq!(reopened.profiles().to_vec(), vec![alex()]);
}

#[tokio::test]
async fn test_blank_field_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let paths = HelperPaths::new(temp_dir.path());
    let service = ScriptedService::new();
    service.reply(PERSONA_REPLY);
    let mut wizard = open_wizard(&paths, service).await;

    wizard.dispatch(Action::NewProfile).await;
    wizard.dispatch(Action::ChooseSourceType(SourceType::Style)).await;
    wizard
        .dispatch(Action::PickSource(SourceChoice::Custom("  Free-range ".to_string())))
        .await;
    assert_eq!(wizard.session().source_name.as_deref(), Some("Free-range"));
    wizard.dispatch(Action::Accept).await;

    let details = ProfileDetails {
        child_name: "   ".to_string(),
        ..alex_details()
    };
    assert_eq!(
        wizard.dispatch(Action::SubmitDetails(details)).await,
        Screen::ProfileDetails
    );
    let notices = wizard.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Warning);
    assert_eq!(notices[0].message, "Please fill every field.");
    assert!(wizard.store().profiles().is_empty());
}

#[tokio::test]
async fn test_empty_custom_source_stays_on_pick() {
    let temp_dir = TempDir::new().unwrap();
    let service = ScriptedService::new();
    let mut wizard = open_wizard(&HelperPaths::new(temp_dir.path()), service.clone()).await;

    wizard.dispatch(Action::NewProfile).await;
    wizard.dispatch(Action::ChooseSourceType(SourceType::Expert)).await;
    assert_eq!(
        wizard.dispatch(Action::PickSource(SourceChoice::Custom("  ".to_string()))).await,
        Screen::SourcePick
    );
    assert_eq!(
        wizard.dispatch(Action::PickSource(SourceChoice::Catalog(99))).await,
        Screen::SourcePick
    );
    assert!(service.requests().is_empty());
}

#[tokio::test]
async fn test_generation_failure_then_retry() {
    let temp_dir = TempDir::new().unwrap();
    let service = ScriptedService::new();
    service.fail("timeout");
    service.reply(PERSONA_REPLY);
    let mut wizard = open_wizard(&HelperPaths::new(temp_dir.path()), service.clone()).await;

    wizard.dispatch(Action::NewProfile).await;
    wizard.dispatch(Action::ChooseSourceType(SourceType::Expert)).await;
    assert_eq!(
        wizard.dispatch(Action::PickSource(SourceChoice::Catalog(3))).await,
        Screen::PersonaGenerate
    );
    assert!(wizard.session().persona_description.is_none());
    let notices = wizard.take_notices();
    assert!(notices.iter().any(|n| n.level == NoticeLevel::Error));

    // Nothing to accept yet
    assert_eq!(wizard.dispatch(Action::Accept).await, Screen::PersonaGenerate);

    assert_eq!(wizard.dispatch(Action::Retry).await, Screen::PersonaGenerate);
    assert!(wizard.session().persona_description.is_some());
    assert_eq!(service.requests().len(), 2);
}

#[tokio::test]
async fn test_agent_type_is_recorded() {
    let temp_dir = TempDir::new().unwrap();
    let service = ScriptedService::new();
    service.reply(PERSONA_REPLY);
    let mut wizard = open_wizard(&HelperPaths::new(temp_dir.path()), service).await;

    wizard.dispatch(Action::NewProfile).await;
    assert_eq!(wizard.dispatch(Action::ChangeAgentType).await, Screen::AgentTypeSelect);
    assert_eq!(
        wizard.dispatch(Action::ChooseAgentType(AgentType::Teacher)).await,
        Screen::SourceTypeSelect
    );
    wizard.dispatch(Action::ChooseSourceType(SourceType::Style)).await;
    wizard.dispatch(Action::PickSource(SourceChoice::Catalog(4))).await;
    wizard.dispatch(Action::Accept).await;
    wizard.dispatch(Action::SubmitDetails(alex_details())).await;

    let profile = &wizard.store().profiles()[0];
    assert_eq!(profile.agent_type, AgentType::Teacher);
    assert_eq!(profile.source_name, "Montessori");

    // A fresh creation starts from the default agent type again
    wizard.dispatch(Action::GoHome).await;
    wizard.dispatch(Action::NewProfile).await;
    assert_eq!(wizard.session().agent_type, AgentType::Parent);
}

#[tokio::test]
async fn test_chat_without_profiles_starts_creation() {
    let temp_dir = TempDir::new().unwrap();
    let mut wizard = open_wizard(&HelperPaths::new(temp_dir.path()), ScriptedService::new()).await;

    assert_eq!(wizard.dispatch(Action::OpenChat).await, Screen::SourceTypeSelect);
    let notices = wizard.take_notices();
    assert_eq!(notices[0].level, NoticeLevel::Warning);

    wizard.dispatch(Action::Back).await;
    assert_eq!(wizard.dispatch(Action::OpenSavedChats).await, Screen::Home);
    assert_eq!(wizard.dispatch(Action::OpenSavedProfiles).await, Screen::Home);
}

#[tokio::test]
async fn test_unavailable_action_keeps_screen() {
    let temp_dir = TempDir::new().unwrap();
    let mut wizard = open_wizard(&HelperPaths::new(temp_dir.path()), ScriptedService::new()).await;

    assert_eq!(wizard.dispatch(Action::SaveResponse).await, Screen::Home);
    let notices = wizard.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Info);
}

#[tokio::test]
async fn test_resolve_answer_is_saved_once() {
    let temp_dir = TempDir::new().unwrap();
    let paths = HelperPaths::new(temp_dir.path());
    let service = ScriptedService::new();
    service.reply(r#"{"answer": "1) Routine 2) Warning 3) Calm"}"#);
    let mut wizard = wizard_with_alex(&paths, service.clone()).await;

    assert_eq!(wizard.dispatch(Action::OpenChat).await, Screen::Chat);
    wizard.dispatch(Action::SelectShortcut(Shortcut::Resolve)).await;
    wizard.dispatch(Action::Send("Bedtime battles".to_string())).await;
    assert_eq!(
        wizard.session().last_answer.as_deref(),
        Some("1) Routine 2) Warning 3) Calm")
    );

    let request = &service.requests()[0];
    assert_eq!(request.messages.len(), 1);
    assert_eq!(request.messages[0].role, PromptRole::System);
    assert!(request.messages[0].content.contains(Shortcut::Resolve.instruction()));
    assert!(request.messages[0].content.contains("Bedtime battles"));

    assert_eq!(wizard.dispatch(Action::SaveResponse).await, Screen::SavedChats);
    let saved = wizard.selected_response().unwrap();
    assert_eq!(saved.profile, "Alex");
    assert_eq!(saved.shortcut, Shortcut::Resolve);
    assert_eq!(saved.question, "Bedtime battles");

    let raw = std::fs::read_to_string(paths.responses_file()).unwrap();
    assert!(raw.contains("\"RESOLVE\""));

    // Same exchange saved again is reported, not duplicated
    wizard.dispatch(Action::Close).await;
    wizard.dispatch(Action::OpenChat).await;
    wizard.take_notices();
    wizard.dispatch(Action::SaveResponse).await;
    assert_eq!(wizard.store().responses().len(), 1);
    let notices = wizard.take_notices();
    assert!(notices.iter().any(|n| n.message.contains("already saved")));
}

#[tokio::test]
async fn test_failed_send_keeps_previous_answer() {
    let temp_dir = TempDir::new().unwrap();
    let service = ScriptedService::new();
    service.reply(r#"{"answer": "First"}"#);
    service.reply(r#"{"wrong": "field"}"#);
    let mut wizard = wizard_with_alex(&HelperPaths::new(temp_dir.path()), service).await;

    wizard.dispatch(Action::OpenChat).await;
    wizard.dispatch(Action::Send("One".to_string())).await;
    wizard.dispatch(Action::Send("Two".to_string())).await;

    assert_eq!(wizard.session().last_question.as_deref(), Some("One"));
    assert_eq!(wizard.session().last_answer.as_deref(), Some("First"));
    let notices = wizard.take_notices();
    assert!(notices.iter().any(|n| n.level == NoticeLevel::Error));
}

#[tokio::test]
async fn test_blank_question_is_not_sent() {
    let temp_dir = TempDir::new().unwrap();
    let service = ScriptedService::new();
    let mut wizard = wizard_with_alex(&HelperPaths::new(temp_dir.path()), service.clone()).await;

    wizard.dispatch(Action::OpenChat).await;
    wizard.dispatch(Action::Send("   ".to_string())).await;
    assert!(service.requests().is_empty());
    assert_eq!(wizard.dispatch(Action::SaveResponse).await, Screen::Chat);
}

#[tokio::test]
async fn test_deleting_only_saved_chat_returns_home() {
    let temp_dir = TempDir::new().unwrap();
    let paths = HelperPaths::new(temp_dir.path());
    let service = ScriptedService::new();
    service.reply(r#"{"answer": "Name the feeling first."}"#);
    let mut wizard = wizard_with_alex(&paths, service).await;

    wizard.dispatch(Action::OpenChat).await;
    wizard.dispatch(Action::Send("Tantrums".to_string())).await;
    wizard.dispatch(Action::SaveResponse).await;

    assert_eq!(wizard.dispatch(Action::DeleteResponse).await, Screen::Home);
    assert!(wizard.store().responses().is_empty());
    assert!(open_store(&paths).await.responses().is_empty());
}

#[tokio::test]
async fn test_profile_manager_edit_and_delete() {
    let temp_dir = TempDir::new().unwrap();
    let paths = HelperPaths::new(temp_dir.path());
    let mut store = open_store(&paths).await;
    for name in ["A", "B"] {
        store.add_profile(named(name)).await;
    }
    let mut wizard = Wizard::new(store, ScriptedService::new());

    assert_eq!(wizard.dispatch(Action::OpenSavedProfiles).await, Screen::SavedProfiles);
    wizard.dispatch(Action::SelectProfile(1)).await;

    let mut edit = ProfileEdit::from_profile(wizard.selected_profile().unwrap());
    edit.child_age = 40;
    wizard.dispatch(Action::SaveProfileChanges(edit)).await;
    assert_eq!(wizard.store().profiles()[1].child_age, 21);

    let mut blank = ProfileEdit::from_profile(wizard.selected_profile().unwrap());
    blank.parent_name.clear();
    wizard.dispatch(Action::SaveProfileChanges(blank)).await;
    assert_eq!(wizard.store().profiles()[1].parent_name, "Sam");

    assert_eq!(wizard.dispatch(Action::DeleteProfile).await, Screen::SavedProfiles);
    assert_eq!(wizard.session().selected_profile, 0);
    assert_eq!(wizard.dispatch(Action::DeleteProfile).await, Screen::Home);
    assert!(open_store(&paths).await.profiles().is_empty());
}

#[tokio::test]
async fn test_question_and_answer_are_kept_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let paths = HelperPaths::new(temp_dir.path());
    let service = ScriptedService::new();
    service.reply(r#"{"answer": "  1) Routine\n2) Calm\n"}"#);
    let mut wizard = wizard_with_alex(&paths, service.clone()).await;

    wizard.dispatch(Action::OpenChat).await;
    wizard
        .dispatch(Action::Send("  Bedtime battles\n".to_string()))
        .await;
    assert_eq!(
        wizard.session().last_question.as_deref(),
        Some("  Bedtime battles\n")
    );
    assert_eq!(
        wizard.session().last_answer.as_deref(),
        Some("  1) Routine\n2) Calm\n")
    );
    assert!(service.requests()[0].messages[0]
        .content
        .contains("\n  Bedtime battles\n"));

    wizard.dispatch(Action::SaveResponse).await;
    let reopened = open_store(&paths).await;
    let saved = &reopened.responses()[0];
    assert_eq!(saved.question, "  Bedtime battles\n");
    assert_eq!(saved.answer, "  1) Routine\n2) Calm\n");
}

#[tokio::test]
async fn test_deleting_middle_saved_chat_stays_on_list() {
    let temp_dir = TempDir::new().unwrap();
    let paths = HelperPaths::new(temp_dir.path());
    let service = ScriptedService::new();
    for answer in ["First", "Second", "Third"] {
        service.reply(&format!(r#"{{"answer": "{}"}}"#, answer));
    }
    let mut wizard = wizard_with_alex(&paths, service).await;

    for question in ["One", "Two", "Three"] {
        wizard.dispatch(Action::OpenChat).await;
        wizard.dispatch(Action::Send(question.to_string())).await;
        wizard.dispatch(Action::SaveResponse).await;
        wizard.dispatch(Action::Close).await;
    }
    assert_eq!(wizard.store().responses().len(), 3);

    assert_eq!(wizard.dispatch(Action::OpenSavedChats).await, Screen::SavedChats);
    wizard.dispatch(Action::SelectResponse(1)).await;
    assert_eq!(wizard.dispatch(Action::DeleteResponse).await, Screen::SavedChats);

    let answers: Vec<_> = wizard
        .store()
        .responses()
        .iter()
        .map(|r| r.answer.as_str())
        .collect();
    assert_eq!(answers, ["First", "Third"]);
    assert_eq!(wizard.session().selected_response, 1);
    assert_eq!(wizard.selected_response().unwrap().answer, "Third");

    // Deleting the last entry moves the selection back onto the list
    assert_eq!(wizard.dispatch(Action::DeleteResponse).await, Screen::SavedChats);
    assert_eq!(wizard.session().selected_response, 0);
    assert_eq!(wizard.selected_response().unwrap().answer, "First");
}

#[tokio::test]
async fn test_chat_back_returns_home() {
    let temp_dir = TempDir::new().unwrap();
    let mut wizard = wizard_with_alex(&HelperPaths::new(temp_dir.path()), ScriptedService::new()).await;

    assert_eq!(wizard.dispatch(Action::OpenChat).await, Screen::Chat);
    assert_eq!(wizard.dispatch(Action::Back).await, Screen::Home);
}
