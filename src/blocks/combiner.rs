use super::{BlockBehavior, BlockOutputs, ResolvedInputs, single_output};
use crate::circuit::NodeDefinition;
use crate::context::ContextProvider;
use crate::error::BlockError;
use crate::schema::{PortSpec, Settings, SettingSpec, integer_setting, text_setting};
use crate::value::PortValue;
use itertools::Itertools;

/// Concatenates the string form of its connected inputs in port order,
/// joined by a configurable separator. An unconnected input contributes
/// the empty string.
pub struct CombinerBlock;

const OUTPUT: &str = "output";
const MIN_INPUTS: i64 = 2;
const MAX_INPUTS: i64 = 8;

/// Live input-port count for a combiner node. Out-of-range settings are
/// clamped so the derived port set stays meaningful for edge checks; the
/// range violation itself is reported by the settings check.
fn input_count(settings: &Settings) -> i64 {
    integer_setting(settings, "inputs")
        .unwrap_or(MIN_INPUTS)
        .clamp(MIN_INPUTS, MAX_INPUTS)
}

impl BlockBehavior for CombinerBlock {
    fn kind(&self) -> &'static str {
        "combinerNode"
    }

    fn settings_spec(&self) -> Vec<SettingSpec> {
        vec![
            SettingSpec::integer_range("inputs", MIN_INPUTS, MAX_INPUTS),
            SettingSpec::text("separator"),
        ]
    }

    fn input_ports(&self, settings: &Settings) -> Vec<PortSpec> {
        (1..=input_count(settings))
            .map(|i| PortSpec::text(format!("input{}", i)))
            .collect()
    }

    fn output_ports(&self, _settings: &Settings) -> Vec<PortSpec> {
        vec![PortSpec::text(OUTPUT)]
    }

    fn process(
        &self,
        node: &NodeDefinition,
        inputs: &ResolvedInputs,
        _context: &dyn ContextProvider,
    ) -> Result<BlockOutputs, BlockError> {
        let separator = text_setting(&node.settings, "separator").unwrap_or_default();

        let text = (1..=input_count(&node.settings))
            .map(|i| inputs.text_or_empty(&format!("input{}", i)))
            .join(separator);

        Ok(single_output(OUTPUT, PortValue::Text(text)))
    }
}
