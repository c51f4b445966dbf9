//! Rule-based intent classification and tool selection.

pub mod config;
pub mod rules;
pub mod selector;
pub mod types;

pub use config::{default_intent_config, INTENT_CONFIG};
pub use rules::classify;
pub use selector::{fallback_chain, select_tool};
pub use types::{ClassifiedIntent, Intent, IntentConfig, IntentRule, ToolBinding};

#[cfg(test)]
mod tests;
