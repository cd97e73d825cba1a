use super::{BlockBehavior, BlockOutputs, ResolvedInputs};
use crate::circuit::NodeDefinition;
use crate::context::ContextProvider;
use crate::error::BlockError;
use crate::schema::{PortSpec, Settings, SettingSpec};
use crate::value::PortValue;

/// Emits the active character's name and numeric id from the runtime
/// context.
pub struct CurrentCharacterBlock;

const NAME: &str = "name";
const CHARACTER_ID: &str = "character_id";

impl BlockBehavior for CurrentCharacterBlock {
    fn kind(&self) -> &'static str {
        "currentCharacterNode"
    }

    fn settings_spec(&self) -> Vec<SettingSpec> {
        Vec::new()
    }

    fn input_ports(&self, _settings: &Settings) -> Vec<PortSpec> {
        Vec::new()
    }

    fn output_ports(&self, _settings: &Settings) -> Vec<PortSpec> {
        vec![PortSpec::text(NAME), PortSpec::number(CHARACTER_ID)]
    }

    fn process(
        &self,
        _node: &NodeDefinition,
        _inputs: &ResolvedInputs,
        context: &dyn ContextProvider,
    ) -> Result<BlockOutputs, BlockError> {
        let character = context
            .active_character()
            .ok_or(BlockError::NoActiveCharacter)?;

        let mut outputs = BlockOutputs::with_capacity(2);
        outputs.insert(NAME.to_string(), PortValue::Text(character.name.clone()));
        outputs.insert(
            CHARACTER_ID.to_string(),
            PortValue::Number(character.id as f64),
        );
        Ok(outputs)
    }
}
