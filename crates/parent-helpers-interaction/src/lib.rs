//! Adapters to hosted completion services.

pub mod openai_api_client;

pub use openai_api_client::OpenAIApiClient;
