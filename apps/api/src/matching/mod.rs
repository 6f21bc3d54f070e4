// CV-to-job matching engine.
// Flow: engine → job source → aggregator (remote scorer, heuristic fallback) → filter/rank pipeline.
// All remote calls go through llm_client via remote::LlmMatchScorer.

pub mod aggregator;
pub mod category;
pub mod engine;
pub mod handlers;
pub mod heuristic;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod prompts;
pub mod remote;
pub mod scorer;
