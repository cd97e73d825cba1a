use super::{BlockBehavior, BlockOutputs, ResolvedInputs, single_output};
use crate::circuit::NodeDefinition;
use crate::context::ContextProvider;
use crate::error::BlockError;
use crate::schema::{PortSpec, Settings, SettingSpec, text_setting};
use crate::value::PortValue;

/// Emits a configured text literal, optionally coerced to a number.
pub struct TextBlock;

const OUTPUT: &str = "output";

impl BlockBehavior for TextBlock {
    fn kind(&self) -> &'static str {
        "textNode"
    }

    fn settings_spec(&self) -> Vec<SettingSpec> {
        vec![
            SettingSpec::text("content"),
            SettingSpec::choice("outputType", &["string", "numeric"]),
        ]
    }

    fn input_ports(&self, _settings: &Settings) -> Vec<PortSpec> {
        Vec::new()
    }

    fn output_ports(&self, settings: &Settings) -> Vec<PortSpec> {
        if text_setting(settings, "outputType") == Some("numeric") {
            vec![PortSpec::number(OUTPUT)]
        } else {
            vec![PortSpec::text(OUTPUT)]
        }
    }

    fn process(
        &self,
        node: &NodeDefinition,
        _inputs: &ResolvedInputs,
        _context: &dyn ContextProvider,
    ) -> Result<BlockOutputs, BlockError> {
        let content = text_setting(&node.settings, "content").unwrap_or_default();

        let value = if text_setting(&node.settings, "outputType") == Some("numeric") {
            let number: f64 =
                content
                    .trim()
                    .parse()
                    .map_err(|_| BlockError::TypeConversion {
                        value: content.to_string(),
                    })?;
            PortValue::Number(number)
        } else {
            PortValue::Text(content.to_string())
        };

        Ok(single_output(OUTPUT, value))
    }
}
