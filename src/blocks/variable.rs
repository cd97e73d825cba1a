use super::{BlockBehavior, BlockOutputs, ResolvedInputs, single_output};
use crate::circuit::NodeDefinition;
use crate::context::ContextProvider;
use crate::error::BlockError;
use crate::schema::{PortSpec, Settings, SettingSpec, text_setting};

/// Emits the value bound to a named variable or built-in placeholder.
pub struct VariableBlock;

const OUTPUT: &str = "output";

impl BlockBehavior for VariableBlock {
    fn kind(&self) -> &'static str {
        "variableNode"
    }

    fn settings_spec(&self) -> Vec<SettingSpec> {
        vec![SettingSpec::required_text("variable")]
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
        let name = text_setting(&node.settings, "variable").unwrap_or_default();
        let value = context
            .resolve_variable(name)
            .ok_or_else(|| BlockError::UnknownVariable(name.to_string()))?;
        Ok(single_output(OUTPUT, value))
    }
}
