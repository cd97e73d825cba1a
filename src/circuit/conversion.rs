use super::definition::CircuitDefinition;
use crate::error::CircuitConversionError;

/// A trait for custom editor data models that can be converted into a
/// [`CircuitDefinition`].
///
/// This is the extension point that keeps the engine format-agnostic. An
/// editor frontend usually persists more than the engine needs (canvas
/// positions, labels, collapsed state); implementing this trait on your
/// own document structs provides the translation layer down to the
/// canonical `{nodes, edges}` model.
///
/// # Example
///
/// ```rust
/// use promptloom::circuit::{CircuitDefinition, EdgeDefinition, IntoCircuit, NodeDefinition};
/// use promptloom::error::CircuitConversionError;
///
/// struct CanvasNode {
///     id: String,
///     block: String,
///     settings: serde_json::Map<String, serde_json::Value>,
///     // position, label, ... ignored by the engine
/// }
///
/// struct CanvasDocument {
///     nodes: Vec<CanvasNode>,
/// }
///
/// impl IntoCircuit for CanvasDocument {
///     fn into_circuit(self) -> Result<CircuitDefinition, CircuitConversionError> {
///         let nodes = self
///             .nodes
///             .into_iter()
///             .map(|n| NodeDefinition {
///                 id: n.id,
///                 kind: n.block,
///                 settings: n.settings,
///             })
///             .collect();
///         Ok(CircuitDefinition {
///             nodes,
///             edges: Vec::<EdgeDefinition>::new(),
///         })
///     }
/// }
/// ```
pub trait IntoCircuit {
    /// Consumes the object and converts it into a canonical circuit.
    fn into_circuit(self) -> Result<CircuitDefinition, CircuitConversionError>;
}

impl IntoCircuit for CircuitDefinition {
    fn into_circuit(self) -> Result<CircuitDefinition, CircuitConversionError> {
        Ok(self)
    }
}
