// Letter drafting: letter-type selection, prompt templates, and the
// /generate pipeline. All completion calls go through llm_client.

pub mod handlers;
pub mod prompts;
