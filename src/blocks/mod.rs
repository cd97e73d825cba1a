use crate::circuit::NodeDefinition;
use crate::context::ContextProvider;
use crate::error::BlockError;
use crate::schema::{BlockKind, BlockRegistry, PortSpec, Settings, SettingSpec};
use crate::value::PortValue;
use ahash::AHashMap;

mod character;
mod combiner;
mod history;
mod text;
mod variable;

pub use character::CurrentCharacterBlock;
pub use combiner::CombinerBlock;
pub use history::ChatHistoryBlock;
pub use text::TextBlock;
pub use variable::VariableBlock;

/// Output values produced by one node, keyed by output port name.
pub type BlockOutputs = AHashMap<String, PortValue>;

/// Defines the contract for a block kind: its declarative schema and its
/// pure value-production rule.
///
/// Ports may depend on a node's settings (the Combiner's live input count
/// derives from its `inputs` setting), so the port methods take the
/// settings of the concrete node being inspected. `process` must be pure:
/// no I/O, no shared state, the same inputs always produce the same
/// outputs.
pub trait BlockBehavior: Send + Sync {
    fn kind(&self) -> &'static str;

    fn settings_spec(&self) -> Vec<SettingSpec>;

    fn input_ports(&self, settings: &Settings) -> Vec<PortSpec>;

    fn output_ports(&self, settings: &Settings) -> Vec<PortSpec>;

    fn process(
        &self,
        node: &NodeDefinition,
        inputs: &ResolvedInputs,
        context: &dyn ContextProvider,
    ) -> Result<BlockOutputs, BlockError>;

    /// Palette descriptor: the port layout at default settings plus the
    /// setting schema.
    fn descriptor(&self) -> BlockKind {
        let defaults = Settings::new();
        BlockKind {
            id: self.kind().to_string(),
            input_ports: self.input_ports(&defaults),
            output_ports: self.output_ports(&defaults),
            settings: self.settings_spec(),
        }
    }
}

/// Input values resolved from upstream outputs, keyed by input port name.
/// Unconnected ports are simply absent; each kind documents its own
/// default for them.
#[derive(Debug, Default)]
pub struct ResolvedInputs {
    values: AHashMap<String, PortValue>,
}

impl ResolvedInputs {
    pub(crate) fn insert(&mut self, port: impl Into<String>, value: PortValue) {
        self.values.insert(port.into(), value);
    }

    pub fn get(&self, port: &str) -> Option<&PortValue> {
        self.values.get(port)
    }

    pub fn is_connected(&self, port: &str) -> bool {
        self.values.contains_key(port)
    }

    /// The string form of a port's value, or `""` when unconnected.
    pub fn text_or_empty(&self, port: &str) -> String {
        self.get(port).map(|v| v.to_string()).unwrap_or_default()
    }
}

pub(crate) fn single_output(port: &str, value: PortValue) -> BlockOutputs {
    let mut outputs = BlockOutputs::with_capacity(1);
    outputs.insert(port.to_string(), value);
    outputs
}

/// Registers the five baseline block kinds.
pub(crate) fn register_builtins(registry: &mut BlockRegistry) {
    registry.register(Box::new(TextBlock));
    registry.register(Box::new(CurrentCharacterBlock));
    registry.register(Box::new(ChatHistoryBlock));
    registry.register(Box::new(VariableBlock));
    registry.register(Box::new(CombinerBlock));
}
