// Cover Letter Generation
// Implements: form validation, prompt construction, and the pluggable letter generator.
// All LLM calls go through llm_client — no direct HTTP calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod request;
