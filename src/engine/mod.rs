use crate::blocks::ResolvedInputs;
use crate::circuit::CircuitDefinition;
use crate::context::ContextProvider;
use crate::error::{BlockError, NodeError, NodeErrorCause, RunError};
use crate::report::{ExecutionResult, NodeResult, RunEvent, RunLog, SinkOutput, SinkSelector};
use crate::schema::BlockRegistry;
use crate::validator::Validator;
use ahash::AHashMap;

mod schedule;

/// Terminal state of one node during a run. Nodes are pending until the
/// scheduler reaches them; evaluation happens exactly once.
enum NodeState {
    Evaluated(NodeResult),
    Failed,
}

/// Executes circuits against a runtime context.
///
/// The executor holds no mutable state. Execution is a deterministic,
/// synchronous fold over the topological order: a single instance is
/// safely re-entrant and may serve concurrent executions, provided each
/// call owns its own circuit snapshot and context.
pub struct Executor {
    registry: BlockRegistry,
}

impl Executor {
    pub fn new(registry: BlockRegistry) -> Self {
        Self { registry }
    }

    pub fn with_builtins() -> Self {
        Self::new(BlockRegistry::with_builtins())
    }

    pub fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    /// Validates and runs a circuit, extracting the requested sinks.
    ///
    /// Structural problems abort the run before any processor executes.
    /// Node-local failures are isolated: the failing node and its
    /// dependents are skipped while unrelated branches keep evaluating, so
    /// one misconfigured block does not blank the entire prompt.
    pub fn execute(
        &self,
        circuit: &CircuitDefinition,
        context: &dyn ContextProvider,
        sinks: &SinkSelector,
    ) -> ExecutionResult {
        let report = Validator::new(&self.registry).validate(circuit);
        if !report.is_ok() {
            return ExecutionResult {
                success: false,
                outputs: Vec::new(),
                logs: Vec::new(),
                errors: report
                    .into_issues()
                    .into_iter()
                    .map(RunError::from)
                    .collect(),
            };
        }

        // Single-writer invariant holds post-validation, so one entry per
        // (target, port) is exhaustive.
        let mut incoming: AHashMap<(&str, &str), (&str, &str)> = AHashMap::new();
        for edge in &circuit.edges {
            incoming.insert(
                (edge.target.as_str(), edge.target_port.as_str()),
                (edge.source.as_str(), edge.source_port.as_str()),
            );
        }

        let mut states: AHashMap<&str, NodeState> = AHashMap::new();
        let mut logs = Vec::new();
        let mut errors = Vec::new();

        for node_id in schedule::topological_order(circuit) {
            let Some(node) = circuit.node(node_id) else {
                continue;
            };
            let Some(behavior) = self.registry.get(&node.kind) else {
                // Validation guarantees a registered kind; guard anyway so a
                // racing registry edit cannot panic the run.
                let cause = BlockError::Internal(format!(
                    "kind '{}' is not registered",
                    node.kind
                ));
                logs.push(RunLog {
                    node_id: node_id.to_string(),
                    event: RunEvent::Failed(cause.to_string()),
                });
                errors.push(RunError::Node(NodeError {
                    node_id: node_id.to_string(),
                    cause: NodeErrorCause::Block(cause),
                }));
                states.insert(node_id, NodeState::Failed);
                continue;
            };

            let mut inputs = ResolvedInputs::default();
            let mut failed_upstream: Option<&str> = None;
            for port in behavior.input_ports(&node.settings) {
                let Some(&(source, source_port)) = incoming.get(&(node_id, port.name.as_str()))
                else {
                    // Unconnected: the kind's documented default applies.
                    continue;
                };
                match states.get(source) {
                    Some(NodeState::Evaluated(result)) => {
                        if let Some(value) = result.outputs.get(source_port) {
                            inputs.insert(port.name.clone(), value.clone());
                        }
                    }
                    _ => {
                        failed_upstream = Some(source);
                        break;
                    }
                }
            }

            if let Some(upstream) = failed_upstream {
                logs.push(RunLog {
                    node_id: node_id.to_string(),
                    event: RunEvent::Skipped {
                        upstream: upstream.to_string(),
                    },
                });
                errors.push(RunError::Node(NodeError {
                    node_id: node_id.to_string(),
                    cause: NodeErrorCause::Propagated {
                        upstream: upstream.to_string(),
                    },
                }));
                states.insert(node_id, NodeState::Failed);
                continue;
            }

            match behavior.process(node, &inputs, context) {
                Ok(outputs) => {
                    logs.push(RunLog {
                        node_id: node_id.to_string(),
                        event: RunEvent::Evaluated,
                    });
                    states.insert(
                        node_id,
                        NodeState::Evaluated(NodeResult {
                            node_id: node_id.to_string(),
                            outputs,
                        }),
                    );
                }
                Err(cause) => {
                    logs.push(RunLog {
                        node_id: node_id.to_string(),
                        event: RunEvent::Failed(cause.to_string()),
                    });
                    errors.push(RunError::Node(NodeError {
                        node_id: node_id.to_string(),
                        cause: NodeErrorCause::Block(cause),
                    }));
                    states.insert(node_id, NodeState::Failed);
                }
            }
        }

        let mut outputs = Vec::new();
        let mut success = true;
        for sink in sinks.sinks() {
            match states.get(sink.node_id.as_str()) {
                Some(NodeState::Evaluated(result)) => match result.outputs.get(&sink.port) {
                    Some(value) => outputs.push(SinkOutput {
                        sink: sink.clone(),
                        value: value.clone(),
                    }),
                    None => {
                        success = false;
                        errors.push(RunError::UnknownSink {
                            node_id: sink.node_id.clone(),
                            port: sink.port.clone(),
                        });
                    }
                },
                Some(NodeState::Failed) => {
                    // The node's own error is already in the list.
                    success = false;
                }
                None => {
                    success = false;
                    errors.push(RunError::UnknownSink {
                        node_id: sink.node_id.clone(),
                        port: sink.port.clone(),
                    });
                }
            }
        }

        ExecutionResult {
            success,
            outputs,
            logs,
            errors,
        }
    }
}
