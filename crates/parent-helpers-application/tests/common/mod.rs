#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use parent_helpers_application::{Store, Wizard};
use parent_helpers_core::HelperError;
use parent_helpers_core::completion::{CompletionRequest, CompletionService};
use parent_helpers_core::error::Result;
use parent_helpers_core::profile::{AgentType, Profile, ProfileRepository, SourceType};
use parent_helpers_core::response::{SavedResponse, SavedResponseRepository};
use parent_helpers_infrastructure::{HelperPaths, JsonProfileRepository, JsonSavedResponseRepository};

/// Completion service replaying queued replies and recording requests.
#[derive(Default)]
pub struct ScriptedService {
    replies: Mutex<VecDeque<Result<String>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, raw: &str) {
        self.replies.lock().unwrap().push_back(Ok(raw.to_string()));
    }

    pub fn fail(&self, message: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(HelperError::service(message)));
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionService for ScriptedService {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(HelperError::service("no scripted reply")))
    }
}

/// Repository whose reads and writes always fail.
pub struct BrokenRepository;

#[async_trait]
impl ProfileRepository for BrokenRepository {
    async fn get_all(&self) -> Result<Vec<Profile>> {
        Err(HelperError::io("disk unavailable"))
    }

    async fn save_all(&self, _profiles: &[Profile]) -> Result<()> {
        Err(HelperError::io("disk unavailable"))
    }
}

#[async_trait]
impl SavedResponseRepository for BrokenRepository {
    async fn get_all(&self) -> Result<Vec<SavedResponse>> {
        Err(HelperError::io("disk unavailable"))
    }

    async fn save_all(&self, _responses: &[SavedResponse]) -> Result<()> {
        Err(HelperError::io("disk unavailable"))
    }
}

pub async fn open_store(paths: &HelperPaths) -> Store {
    Store::open(
        Arc::new(JsonProfileRepository::new(paths)),
        Arc::new(JsonSavedResponseRepository::new(paths)),
    )
    .await
}

pub async fn open_wizard(paths: &HelperPaths, service: Arc<ScriptedService>) -> Wizard {
    Wizard::new(open_store(paths).await, service)
}

pub fn alex() -> Profile {
    Profile {
        profile_name: "Alex".to_string(),
        parent_name: "Sam".to_string(),
        child_name: "Kim".to_string(),
        child_age: 7,
        agent_type: AgentType::Parent,
        source_type: SourceType::Book,
        source_name: "Positive Parenting: An Essential Guide".to_string(),
        persona_description: "Warm, firm and consistent".to_string(),
    }
}

pub fn named(profile_name: &str) -> Profile {
    Profile {
        profile_name: profile_name.to_string(),
        ..alex()
    }
}
