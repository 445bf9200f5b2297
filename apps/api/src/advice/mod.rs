// Planner: the advice request/response contract with the external generator.
// All generator calls go through llm_client, never directly from here.

pub mod context;
pub mod export;
pub mod handlers;
pub mod prompts;
pub mod schema;
pub mod service;
pub mod validation;
