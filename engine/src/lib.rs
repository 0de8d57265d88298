//! Content-generation engine for the blog backend
//!
//! Abstracts multiple LLM providers behind a single [`ContentEngine`] trait:
//! a registry resolves a provider name to a concrete engine, each engine
//! issues one prompt per call and parses the reply into a [`shared::GeneratedPost`].

pub mod config;
pub mod error;
pub mod prompt;
pub mod providers;
pub mod registry;
pub mod response;
pub mod traits;

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use providers::{AnthropicEngine, GeminiEngine, OpenAiEngine};
pub use registry::{available_providers, EngineFactory};
pub use traits::ContentEngine;
