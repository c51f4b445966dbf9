//! Tool selection from a classified intent.

use crate::types::{Intent, IntentConfig, ToolBinding};

/// Look up the tool binding for an intent. Unbound intents fall back to
/// the smalltalk binding.
pub fn select_tool(intent: Intent, config: &IntentConfig) -> ToolBinding {
    config
        .tools
        .get(&intent)
        .or_else(|| config.tools.get(&Intent::Smalltalk))
        .cloned()
        .unwrap_or(ToolBinding {
            primary: "canned_reply".into(),
            fallback: Vec::new(),
        })
}

/// Primary tool followed by its fallbacks.
pub fn fallback_chain(intent: Intent, config: &IntentConfig) -> Vec<String> {
    let binding = select_tool(intent, config);
    let mut chain = vec![binding.primary];
    chain.extend(binding.fallback);
    chain
}
