//! devally: AI code-review assistant engine.
//!
//! The pipeline behind a discussion board's review bot: build the
//! instruction prompt for an external LLM ([`prompt`]), classify code
//! snippets by language ([`language`]), and render the raw (possibly
//! malformed) markdown response into a self-contained styled HTML comment
//! body ([`format`]). The LLM itself is reached through the injected
//! [`provider::LlmProvider`] boundary.

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod language;
pub mod prompt;
pub mod provider;
