use crate::error::CircuitConversionError;
use crate::schema::Settings;
use serde::{Deserialize, Serialize};

/// The complete, canonical definition of a circuit, ready for validation
/// and execution.
///
/// This is the plain `{nodes, edges}` document exchanged with an editor.
/// The engine treats it as an immutable snapshot: execution never mutates
/// it, and the crate imposes no storage format beyond this shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CircuitDefinition {
    pub nodes: Vec<NodeDefinition>,
    pub edges: Vec<EdgeDefinition>,
}

impl CircuitDefinition {
    /// Parses a circuit from its JSON document form.
    pub fn from_json(json: &str) -> Result<Self, CircuitConversionError> {
        serde_json::from_str(json).map_err(|e| CircuitConversionError::JsonParse(e.to_string()))
    }

    pub fn node(&self, id: &str) -> Option<&NodeDefinition> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// A single block instance in the circuit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDefinition {
    pub id: String,
    pub kind: String,
    #[serde(default)]
    pub settings: Settings,
}

impl NodeDefinition {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            settings: Settings::new(),
        }
    }

    pub fn with_setting(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }
}

/// A directed, port-to-port connection between two nodes.
///
/// At most one edge may target a given `(target, target_port)` pair; a
/// source port may fan out to any number of edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeDefinition {
    pub id: String,
    pub source: String,
    #[serde(alias = "sourcePort")]
    pub source_port: String,
    pub target: String,
    #[serde(alias = "targetPort")]
    pub target_port: String,
}

impl EdgeDefinition {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        source_port: impl Into<String>,
        target: impl Into<String>,
        target_port: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            source_port: source_port.into(),
            target: target.into(),
            target_port: target_port.into(),
        }
    }
}
