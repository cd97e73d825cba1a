use super::{BlockBehavior, BlockOutputs, ResolvedInputs, single_output};
use crate::circuit::NodeDefinition;
use crate::context::{ChatRole, ContextProvider};
use crate::error::BlockError;
use crate::schema::{PortSpec, Settings, SettingSpec, integer_setting, text_setting};
use crate::value::PortValue;
use itertools::Itertools;

/// Emits a slice of the chat history as text: filtered by role, trimmed to
/// the most recent N entries, joined with newlines in chronological order.
pub struct ChatHistoryBlock;

const OUTPUT: &str = "output";

impl BlockBehavior for ChatHistoryBlock {
    fn kind(&self) -> &'static str {
        "chatHistoryNode"
    }

    fn settings_spec(&self) -> Vec<SettingSpec> {
        vec![
            SettingSpec::choice("messageType", &["all", "user", "ai", "other"]),
            SettingSpec::count("messageCount"),
        ]
    }

    fn input_ports(&self, _settings: &Settings) -> Vec<PortSpec> {
        Vec::new()
    }

    fn output_ports(&self, _settings: &Settings) -> Vec<PortSpec> {
        vec![PortSpec::text(OUTPUT)]
    }

    fn process(
        &self,
        node: &NodeDefinition,
        _inputs: &ResolvedInputs,
        context: &dyn ContextProvider,
    ) -> Result<BlockOutputs, BlockError> {
        let role_filter = match text_setting(&node.settings, "messageType") {
            Some("user") => Some(ChatRole::User),
            Some("ai") => Some(ChatRole::Ai),
            Some("other") => Some(ChatRole::Other),
            _ => None,
        };

        let selected: Vec<&str> = context
            .chat_history()
            .iter()
            .filter(|m| role_filter.is_none_or(|role| m.role == role))
            .map(|m| m.content.as_str())
            .collect();

        // 0 or blank means unbounded.
        let count = integer_setting(&node.settings, "messageCount").unwrap_or(0);
        let keep = if count <= 0 {
            selected.len()
        } else {
            (count as usize).min(selected.len())
        };

        let text = selected[selected.len() - keep..].iter().join("\n");
        Ok(single_output(OUTPUT, PortValue::Text(text)))
    }
}
